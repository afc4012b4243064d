use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use std::ops::{Mul, MulAssign};

#[derive(
    Eq, Debug, Default, Copy, Clone, PartialEq, Hash, Add, AddAssign, Sub, SubAssign, Display,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Mul<i32> for Point {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl MulAssign<i32> for Point {
    fn mul_assign(&mut self, rhs: i32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Wire directions of the environment: 0 right, 1 down, 2 left, 3 up.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub fn index(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    pub fn offset(self) -> Point {
        match self {
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Up => Point::new(0, -1),
        }
    }

    pub fn flipped(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// Direction of the sign of `dx`; `None` when there is nowhere to go.
    pub fn along_x(dx: i32) -> Option<Direction> {
        match dx {
            0 => None,
            d if d > 0 => Some(Direction::Right),
            _ => Some(Direction::Left),
        }
    }

    pub fn along_y(dy: i32) -> Option<Direction> {
        match dy {
            0 => None,
            d if d > 0 => Some(Direction::Down),
            _ => Some(Direction::Up),
        }
    }
}
