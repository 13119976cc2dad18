use crate::{pos, utils::wrap, LifeError, Pos};

/// A fixed size field of cells whose edges connect to the opposite edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// allocates a `width` x `height` grid with every cell dead.
    ///
    /// Zero sized grids and grids too large to allocate are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let invalid = LifeError::InvalidDimension { width, height };
        let size = match width.checked_mul(height) {
            Some(size) if size > 0 => size,
            _ => return Err(invalid),
        };
        let mut cells = Vec::new();
        if cells.try_reserve_exact(size).is_err() {
            return Err(invalid);
        }
        cells.resize(size, false);
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// an all dead grid of the same dimensions.
    pub fn blank_like(&self) -> Self {
        Self {
            cells: vec![false; self.cells.len()],
            width: self.width,
            height: self.height,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// the in-bounds position `pos` wraps onto.
    pub fn normalize(&self, Pos { x, y }: Pos) -> Pos {
        pos!(wrap(x, self.width) as i64, wrap(y, self.height) as i64)
    }

    fn index(&self, Pos { x, y }: Pos) -> usize {
        wrap(y, self.height) * self.width + wrap(x, self.width)
    }

    pub fn get(&self, pos: Pos) -> bool {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, alive: bool) {
        let index = self.index(pos);
        self.cells[index] = alive;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// every in-bounds position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| pos!(x, y)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// raw row-major cells, index `y * width + x`.
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}
