use crate::{pos, Cell, DoubleBuffer, Pos, World};

pub use coin::{Coin, RngCoin, ScriptedCoin, Side};
mod coin;

/// Outcome of a single automaton step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// particles that changed position
    pub moved: usize,
}

impl StepReport {
    pub fn is_settled(&self) -> bool {
        self.moved == 0
    }
}

/// Computes one tick of falling sand from `current` into `next`.
///
/// `next` starts as a copy of `current`. Rows are visited from the lowest
/// movable one upward and columns left to right. A filled cell falls straight
/// down when possible, otherwise it tries the diagonal picked by `coin` and
/// then the opposite one. A destination must be empty in both worlds, so no
/// two particles ever land on the same cell within a tick.
pub fn step<W>(current: &W, next: &mut W, coin: &mut impl Coin) -> StepReport
where
    W: World,
{
    next.clone_from(current);

    let width = current.width() as i32;
    let height = current.height() as i32;
    let mut report = StepReport::default();

    for y in (0..height - 1).rev() {
        for x in 0..width {
            let here = pos!(x, y);
            if !current.get(here).is_filled() {
                continue;
            }
            if let Some(target) = destination(current, next, here, coin) {
                next.set(target, Cell::Filled);
                next.set(here, Cell::Empty);
                report.moved += 1;
            }
        }
    }

    report
}

fn destination<W>(current: &W, next: &W, here: Pos, coin: &mut impl Coin) -> Option<Pos>
where
    W: World,
{
    let below = here.below();
    if is_free(current, next, below) {
        return Some(below);
    }

    let first = coin.flip();
    [first, first.opposite()]
        .into_iter()
        .map(|side| below + pos!(side.dx(), 0))
        .find(|&target| is_free(current, next, target))
}

fn is_free<W>(current: &W, next: &W, pos: Pos) -> bool
where
    W: World,
{
    current.contains(pos) && current.get(pos).is_empty() && next.get(pos).is_empty()
}

/// The whole simulation: both buffers plus the operations the frame loop
/// drives. Nothing here is global, several states can live side by side.
#[derive(Debug, Clone)]
pub struct State<W>
where
    W: World,
{
    buffer: DoubleBuffer<W>,
}

impl<W> State<W>
where
    W: World,
{
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffer: DoubleBuffer::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.buffer.get(pos)
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        self.buffer.set(pos, cell)
    }

    /// Drops a grain at `pos`, returns `false` if `pos` is off the grid.
    pub fn paint(&mut self, pos: Pos) -> bool {
        self.set(pos, Cell::Filled)
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Runs one step and publishes its result.
    pub fn tick(&mut self, coin: &mut impl Coin) -> StepReport {
        let (current, next) = self.buffer.split();
        let report = step(current, next, coin);
        self.buffer.swap();
        report
    }

    /// Settled frame for rendering.
    pub fn view(&self) -> &W {
        self.buffer.current()
    }

    pub fn snapshot(&self) -> W {
        self.view().clone()
    }

    pub fn filled(&self) -> Vec<Pos> {
        self.view().filled()
    }
}
