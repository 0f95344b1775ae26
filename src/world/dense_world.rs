use crate::{pos, Cell, Pos, World};

/// Row-major, fixed size world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseWorld {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl DenseWorld {
    /// index of an in-bounds position inside `cells`
    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }
}

impl World for DenseWorld {
    /// # Panics
    ///
    /// When a side exceeds `i32::MAX` (positions are `i32`) or the cell count
    /// overflows `usize`. The command line caps sides far below both.
    fn new(width: usize, height: usize) -> Self {
        assert!(
            width <= i32::MAX as usize && height <= i32::MAX as usize,
            "{width}x{height} world does not fit i32 positions"
        );
        let Some(area) = width.checked_mul(height) else {
            panic!("{width}x{height} world overflows the cell count");
        };
        Self {
            width,
            height,
            cells: vec![Cell::Empty; area],
        }
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, pos: Pos) -> Cell {
        match self.index(pos) {
            Some(index) => self.cells[index],
            None => Cell::Empty,
        }
    }

    fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn filled(&self) -> Vec<Pos> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                cell.is_filled()
                    .then(|| pos!((index % width) as i32, (index / width) as i32))
            })
            .collect()
    }

    fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let world = DenseWorld::new(4, 3);
        assert_eq!(world.width(), 4);
        assert_eq!(world.height(), 3);
        assert!(world.filled().is_empty());
    }

    #[test]
    #[should_panic(expected = "does not fit i32 positions")]
    fn oversized_side_is_refused() {
        DenseWorld::new(i32::MAX as usize + 1, 1);
    }

    #[test]
    fn set_then_get() {
        let mut world = DenseWorld::new(4, 3);
        assert!(world.set(pos!(3, 2), Cell::Filled));
        assert_eq!(world.get(pos!(3, 2)), Cell::Filled);
        assert_eq!(world.get(pos!(2, 3)), Cell::Empty);
        assert_eq!(world.filled(), vec![pos!(3, 2)]);
    }

    #[test]
    fn out_of_bounds_is_a_no_op() {
        let mut world = DenseWorld::new(4, 3);
        for pos in [pos!(-1, 0), pos!(0, -1), pos!(4, 0), pos!(0, 3), pos!(i32::MAX, 1)] {
            assert!(!world.set(pos, Cell::Filled));
            assert_eq!(world.get(pos), Cell::Empty);
        }
        assert_eq!(world.filled_count(), 0);
    }

    #[test]
    fn filled_is_row_major() {
        let mut world = DenseWorld::new(3, 3);
        world.set(pos!(0, 2), Cell::Filled);
        world.set(pos!(2, 0), Cell::Filled);
        world.set(pos!(1, 1), Cell::Filled);
        assert_eq!(world.filled(), vec![pos!(2, 0), pos!(1, 1), pos!(0, 2)]);
        assert_eq!(world.filled_count(), 3);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut world = DenseWorld::new(5, 5);
        for x in 0..5 {
            for y in 0..5 {
                world.set(pos!(x, y), Cell::Filled);
            }
        }
        world.clear();
        for x in -1..=5 {
            for y in -1..=5 {
                assert_eq!(world.get(pos!(x, y)), Cell::Empty);
            }
        }
    }
}
