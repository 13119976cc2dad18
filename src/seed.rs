use rand::Rng;

use crate::{pos, Grid, LifeError, Pos};

/// Overwrites every cell, each one alive with probability `probability`.
///
/// The random source is the caller's, so a seeded generator gives
/// reproducible grids.
pub fn seed<R>(grid: &mut Grid, probability: f64, rng: &mut R) -> Result<(), LifeError>
where
    R: Rng,
{
    if !(0.0..=1.0).contains(&probability) {
        return Err(LifeError::InvalidProbability(probability));
    }
    for cell in grid.cells_mut() {
        *cell = rng.gen_bool(probability);
    }
    Ok(())
}

/// reads a plaintext pattern, `*`, `#` and `O` are alive, anything else is dead.
pub fn parse_pattern(text: &str) -> Vec<Pos> {
    let mut result = vec![];
    let mut pos = pos!(0, 0);
    for c in text.chars() {
        match c {
            '*' | '#' | 'O' => {
                result.push(pos);
                pos.x += 1
            }
            '\n' => pos = pos!(0, pos.y + 1),
            '\r' => (),
            _ => pos.x += 1,
        }
    }
    result
}

/// clears `grid`, then sets each cell at `origin + cell`, wrapping around the edges.
pub fn apply_pattern(grid: &mut Grid, cells: &[Pos], origin: Pos) {
    grid.clear();
    for &cell in cells {
        grid.set(origin + cell, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn population_is_near_expected() {
        let mut grid = Grid::new(80, 15).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        seed(&mut grid, 0.25, &mut rng).unwrap();
        // expected 300, standard deviation 15
        let population = grid.population();
        assert!((240..=360).contains(&population), "population {population}");
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let mut first = Grid::new(80, 15).unwrap();
        let mut second = first.clone();
        seed(&mut first, 0.25, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        seed(&mut second, 0.25, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);

        seed(&mut second, 0.25, &mut ChaCha8Rng::seed_from_u64(8)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn extreme_probabilities() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        seed(&mut grid, 1.0, &mut rng).unwrap();
        assert_eq!(grid.population(), 100);
        seed(&mut grid, 0.0, &mut rng).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for probability in [-0.1, 1.5] {
            assert_eq!(
                seed(&mut grid, probability, &mut rng),
                Err(LifeError::InvalidProbability(probability))
            );
        }
        assert!(seed(&mut grid, f64::NAN, &mut rng).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn parses_plaintext() {
        let cells = parse_pattern(".*.\r\n..*\n***\n");
        assert_eq!(
            cells,
            vec![pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]
        );
        assert_eq!(parse_pattern(" #\nO"), vec![pos!(1, 0), pos!(0, 1)]);
    }

    #[test]
    fn pattern_wraps_from_origin() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(pos!(0, 0), true);
        apply_pattern(&mut grid, &[pos!(0, 0), pos!(1, 1)], pos!(3, 3));
        assert_eq!(grid.population(), 2);
        assert!(grid.get(pos!(3, 3)));
        assert!(grid.get(pos!(0, 0)));
    }
}
