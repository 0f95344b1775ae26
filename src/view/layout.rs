use crate::{pos, Pos};

/// Rows reserved above the grid for the control bar.
pub const UI_HEIGHT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn contains(&self, Pos { x, y }: Pos) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

pub const RESTART_BUTTON: Rect = Rect {
    x: 1,
    y: 0,
    w: 11,
    h: UI_HEIGHT,
};

/// Maps between terminal cells, canvas cells and grid cells.
///
/// The canvas is the terminal shifted to a 0-based origin, the grid sits
/// right under the control bar.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    grid_width: usize,
    grid_height: usize,
}

impl Layout {
    pub fn new(grid_width: usize, grid_height: usize) -> Self {
        Self {
            grid_width,
            grid_height,
        }
    }

    /// termion reports 1-based positions
    pub fn from_terminal(x: u16, y: u16) -> Pos {
        pos!(x as i32 - 1, y as i32 - 1)
    }

    pub fn grid_to_canvas(&self, pos: Pos) -> Pos {
        pos + pos!(0, UI_HEIGHT)
    }

    pub fn canvas_to_grid(&self, pos: Pos) -> Option<Pos> {
        let grid = pos - pos!(0, UI_HEIGHT);
        let inside = grid.x >= 0
            && grid.y >= 0
            && (grid.x as usize) < self.grid_width
            && (grid.y as usize) < self.grid_height;
        inside.then_some(grid)
    }

    pub fn in_ui_bar(&self, pos: Pos) -> bool {
        pos.y < UI_HEIGHT
    }

    pub fn is_inside_button(&self, pos: Pos) -> bool {
        RESTART_BUTTON.contains(pos)
    }
}
