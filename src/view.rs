use std::{
    fmt,
    io::{stdout, Stdout, Write},
    sync::mpsc,
};

use anyhow::{Context, Result};
use termion::{
    clear, cursor,
    raw::{IntoRawMode, RawTerminal},
};

use crate::Grid;

pub use input::InputCmd;
mod input;

const ALIVE: char = '*';
const DEAD: char = ' ';

/// one line per row, `*` for alive and a space for dead, each line newline terminated.
pub fn render(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut result = String::with_capacity(width * height + height);
    for row in grid.rows() {
        result.extend(row.iter().map(|&alive| if alive { ALIVE } else { DEAD }));
        result.push('\n');
    }
    result
}

/// what the status line under the grid reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub generation: u64,
    pub population: usize,
    pub period: Option<u64>,
    pub paused: bool,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generation {} | population {}",
            self.generation, self.population
        )?;
        if let Some(period) = self.period {
            write!(f, " | period {period}")?;
        }
        if self.paused {
            write!(f, " | paused")?;
        }
        write!(f, " | q quit, p pause, +/- speed")
    }
}

enum Output {
    /// a raw mode terminal redrawn in place.
    Terminal(RawTerminal<Stdout>),
    /// anything else gets frames appended one after the other.
    Plain(Stdout),
}

pub struct View {
    output: Output,
    input: Option<mpsc::Receiver<InputCmd>>,
    lines: u16,
}

impl View {
    pub fn open() -> Result<Self> {
        let out = stdout();
        if !termion::is_tty(&out) {
            return Ok(Self {
                output: Output::Plain(out),
                input: None,
                lines: 0,
            });
        }

        let mut out = out
            .into_raw_mode()
            .context("failed to switch the terminal to raw mode")?;
        write!(out, "{}{}", cursor::Hide, clear::All).context("failed to prepare the terminal")?;
        Ok(Self {
            output: Output::Terminal(out),
            input: Some(input::spawn()),
            lines: 0,
        })
    }

    /// pending keyboard commands, always empty when not attached to a terminal.
    pub fn poll(&self) -> Vec<InputCmd> {
        self.input
            .as_ref()
            .map(|receiver| receiver.try_iter().collect())
            .unwrap_or_default()
    }

    pub fn display(&mut self, grid: &Grid, status: &Status) -> Result<()> {
        let frame = render(grid);
        match &mut self.output {
            Output::Terminal(out) => {
                write!(out, "{}", clear::All)?;
                let mut line = 1u16;
                for row in frame.lines() {
                    write!(out, "{}{row}", cursor::Goto(1, line))?;
                    line = line.saturating_add(1);
                }
                write!(out, "{}{status}", cursor::Goto(1, line))?;
                self.lines = line;
                out.flush()
            }
            Output::Plain(out) => {
                let mut out = out.lock();
                writeln!(out, "{frame}")?;
                out.flush()
            }
        }
        .context("failed to draw frame")
    }
}

impl Drop for View {
    fn drop(&mut self) {
        if let Output::Terminal(out) = &mut self.output {
            let below = cursor::Goto(1, self.lines.saturating_add(1));
            // raw mode itself is restored when `out` drops
            let _ = write!(out, "{below}{}", cursor::Show);
            let _ = out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos, seed::seed, Pos};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn renders_rows_top_to_bottom() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(pos!(0, 0), true);
        grid.set(pos!(2, 1), true);
        assert_eq!(render(&grid), "*  \n  *\n");
    }

    #[test]
    fn render_length_matches_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for (width, height) in [(1, 1), (3, 7), (80, 15)] {
            let mut grid = Grid::new(width, height).unwrap();
            assert_eq!(render(&grid).len(), width * height + height);
            seed(&mut grid, 0.5, &mut rng).unwrap();
            let frame = render(&grid);
            assert_eq!(frame.len(), width * height + height);
            assert!(frame.ends_with('\n'));
            assert_eq!(frame.matches(ALIVE).count(), grid.population());
        }
    }

    #[test]
    fn status_line() {
        let mut status = Status {
            generation: 12,
            population: 300,
            period: None,
            paused: false,
        };
        assert_eq!(
            status.to_string(),
            "generation 12 | population 300 | q quit, p pause, +/- speed"
        );
        status.period = Some(2);
        status.paused = true;
        assert_eq!(
            status.to_string(),
            "generation 12 | population 300 | period 2 | paused | q quit, p pause, +/- speed"
        );
    }
}
