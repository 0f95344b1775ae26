use rand::{rngs::StdRng, Rng, SeedableRng};

/// Diagonal direction a blocked particle tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn dx(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Source of the left/right tie-break, drawn once per blocked particle per tick.
pub trait Coin {
    fn flip(&mut self) -> Side;
}

/// Fair coin backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngCoin<R>(pub R);

impl RngCoin<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R> Coin for RngCoin<R>
where
    R: Rng,
{
    fn flip(&mut self) -> Side {
        if self.0.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Replays a fixed sequence of sides, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedCoin {
    sides: Vec<Side>,
    flips: usize,
}

impl ScriptedCoin {
    pub fn new(sides: impl IntoIterator<Item = Side>) -> Self {
        let sides: Vec<_> = sides.into_iter().collect();
        assert!(!sides.is_empty(), "a scripted coin needs at least one side");
        Self { sides, flips: 0 }
    }

    pub fn always(side: Side) -> Self {
        Self::new([side])
    }

    /// how many times the coin was consulted so far
    pub fn flips(&self) -> usize {
        self.flips
    }
}

impl Coin for ScriptedCoin {
    fn flip(&mut self) -> Side {
        let side = self.sides[self.flips % self.sides.len()];
        self.flips += 1;
        side
    }
}
