use crate::{pos, Grid, Pos};

/// relative positions of the eight neighbors: N, NE, E, SE, S, SW, W, NW.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(0, -1),
    pos!(1, -1),
    pos!(1, 0),
    pos!(1, 1),
    pos!(0, 1),
    pos!(-1, 1),
    pos!(-1, 0),
    pos!(-1, -1),
];

pub fn count_live_neighbors(grid: &Grid, pos: Pos) -> usize {
    // offsets are applied in bounds so extreme coordinates cannot overflow
    let pos = grid.normalize(pos);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&offset| grid.get(pos + offset))
        .count()
}

/// B3/S23
pub fn next_state(grid: &Grid, pos: Pos) -> bool {
    let alive = grid.get(pos);
    match (alive, count_live_neighbors(grid, pos)) {
        (true, count) if count < 2 || count > 3 => false, // dies
        (_, 3) => true,                                   // born or stays
        (alive, _) => alive,                              // unchanged
    }
}
