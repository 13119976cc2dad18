use std::ops::{Add, Sub};

/// A coordinate on the torus, `x` is the column and `y` the row.
/// Values outside the grid are legal and wrap around.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

/// folds `n` into `0..len`, negative values included.
pub fn wrap(n: i64, len: usize) -> usize {
    n.rem_euclid(len as i64) as usize
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(0, 4), 0);
    assert_eq!(wrap(3, 4), 3);
    assert_eq!(wrap(4, 4), 0);
    assert_eq!(wrap(-1, 4), 3);
    assert_eq!(wrap(-4, 4), 0);
    assert_eq!(wrap(-9, 4), 3);
    assert_eq!(wrap(17, 1), 0);
}

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(1, -2) + pos!(-3, 5), pos!(-2, 3));
    assert_eq!(pos!(1, -2) - pos!(-3, 5), pos!(4, -7));
}
