use std::mem;

use crate::{Cell, Pos, World};

/// Names one of the two backing buffers, regardless of its current role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferId {
    A,
    B,
}

impl BufferId {
    fn other(self) -> Self {
        match self {
            BufferId::A => BufferId::B,
            BufferId::B => BufferId::A,
        }
    }
}

/// A `current` world that readers see and a `next` world the automaton
/// writes into. Reads and paint writes go to `current`.
#[derive(Debug, Clone)]
pub struct DoubleBuffer<W>
where
    W: World,
{
    current: W,
    next: W,
    current_id: BufferId,
}

impl<W> DoubleBuffer<W>
where
    W: World,
{
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            current: W::new(width, height),
            next: W::new(width, height),
            current_id: BufferId::A,
        }
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.current.get(pos)
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        self.current.set(pos, cell)
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
    }

    pub fn swap(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
        self.current_id = self.current_id.other();
    }

    pub fn current_id(&self) -> BufferId {
        self.current_id
    }

    pub fn current(&self) -> &W {
        &self.current
    }

    /// Read access to `current` alongside write access to `next`.
    pub fn split(&mut self) -> (&W, &mut W) {
        (&self.current, &mut self.next)
    }
}
