use std::mem;

use tracing::{debug, info};

use crate::{rules::next_state, Grid, LifeError};

use history::History;
mod history;

/// writes the generation following `source` into `destination`.
///
/// Both grids must have the same dimensions. The borrow rules already keep
/// `destination` from aliasing `source`.
pub fn try_step(source: &Grid, destination: &mut Grid) -> Result<(), LifeError> {
    if source.dimensions() != destination.dimensions() {
        return Err(LifeError::DimensionMismatch {
            from: source.dimensions(),
            into: destination.dimensions(),
        });
    }

    for (pos, cell) in source.positions().zip(destination.cells_mut()) {
        *cell = next_state(source, pos);
    }
    Ok(())
}

/// like [`try_step`], mismatched grids are a caller bug and panic.
pub fn step(source: &Grid, destination: &mut Grid) {
    if let Err(err) = try_step(source, destination) {
        panic!("{err}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub population: usize,
    /// set when this generation repeats one seen `period` generations ago.
    pub period: Option<u64>,
}

/// Owns the current and next buffers and swaps them every generation.
#[derive(Debug)]
pub struct Sim {
    current: Grid,
    next: Grid,
    generation: u64,
    history: History,
}

impl Sim {
    pub fn new(initial: Grid) -> Self {
        let next = initial.blank_like();
        let mut history = History::default();
        history.record(&initial);
        Self {
            current: initial,
            next,
            generation: 0,
            history,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick(&mut self) -> Tick {
        step(&self.current, &mut self.next);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        let tick = Tick {
            generation: self.generation,
            population: self.current.population(),
            period: self.history.record(&self.current),
        };
        debug!(
            generation = tick.generation,
            population = tick.population,
            "stepped"
        );
        if let Some(period) = tick.period {
            info!(generation = tick.generation, period, "cycle detected");
        }
        tick
    }
}
