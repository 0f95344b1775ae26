use crate::Pos;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        *self == Cell::Filled
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

/// A bounded grid of cells.
///
/// Out of range reads yield [`Cell::Empty`] and out of range writes are
/// dropped, so callers never have to clamp before touching a world.
pub trait World: Clone + Send + 'static {
    fn new(width: usize, height: usize) -> Self;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, pos: Pos) -> Cell;
    /// Returns `false` without writing when `pos` lies outside the grid.
    fn set(&mut self, pos: Pos, cell: Cell) -> bool;
    fn clear(&mut self);
    fn filled(&self) -> Vec<Pos>;

    fn contains(&self, Pos { x, y }: Pos) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    fn filled_count(&self) -> usize {
        self.filled().len()
    }
}

pub use dense_world::DenseWorld;
mod dense_world;

pub use double_buffer::{BufferId, DoubleBuffer};
mod double_buffer;
