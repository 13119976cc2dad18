use std::{
    collections::VecDeque,
    hash::{Hash, Hasher},
};

use metrohash::MetroHash64;

use crate::Grid;

const HISTORY_LEN: usize = 64;

/// remembers fingerprints of recent generations to spot oscillations.
#[derive(Debug, Clone, Default)]
pub struct History {
    fingerprints: VecDeque<u64>,
}

impl History {
    /// records `grid` and returns the period if it repeats a remembered generation.
    pub fn record(&mut self, grid: &Grid) -> Option<u64> {
        let fingerprint = fingerprint(grid);
        let period = self
            .fingerprints
            .iter()
            .rev()
            .position(|&seen| seen == fingerprint)
            .map(|distance| distance as u64 + 1);

        if self.fingerprints.len() == HISTORY_LEN {
            self.fingerprints.pop_front();
        }
        self.fingerprints.push_back(fingerprint);
        period
    }
}

fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = MetroHash64::default();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos, Pos};

    #[test]
    fn reports_distance_to_repeat() {
        let blank = Grid::new(4, 4).unwrap();
        let mut other = blank.clone();
        other.set(pos!(1, 1), true);

        let mut history = History::default();
        assert_eq!(history.record(&blank), None);
        assert_eq!(history.record(&other), None);
        assert_eq!(history.record(&blank), Some(2));
        assert_eq!(history.record(&blank), Some(1));
    }

    #[test]
    fn forgets_old_generations() {
        let mut history = History::default();
        let first = Grid::new(HISTORY_LEN + 1, 1).unwrap();
        assert_eq!(history.record(&first), None);
        for x in 0..HISTORY_LEN {
            let mut grid = first.clone();
            grid.set(pos!(x as i64, 0), true);
            assert_eq!(history.record(&grid), None);
        }
        assert_eq!(history.record(&first), None);
    }
}
