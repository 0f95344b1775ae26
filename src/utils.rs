use std::ops::{Add, Sub};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    pub fn below(self) -> Self {
        self + pos!(0, 1)
    }
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

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(2, 3) + pos!(-1, 1), pos!(1, 4));
    assert_eq!(pos!(2, 3) - pos!(2, 3), pos!(0, 0));
    assert_eq!(pos!(4, 0).below(), pos!(4, 1));
}
