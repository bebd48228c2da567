//! 2D integer coordinates and compass directions
//!
//! `x` grows to the right (east) and `y` grows downward (south), matching
//! how puzzle grids are written out line by line.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Coord) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn step(self, direction: Direction) -> Coord {
        self + direction.delta()
    }

    /// The four orthogonal neighbours, clockwise from north
    pub fn neighbors4(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().map(move |d| self.step(d))
    }

    /// All eight surrounding cells, row by row
    pub fn neighbors8(self) -> impl Iterator<Item = Coord> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| Coord::new(self.x + dx, self.y + dy))
    }

    /// Quarter turn clockwise about the origin (on screen, with y down)
    pub fn rotate_cw(self) -> Coord {
        Coord::new(-self.y, self.x)
    }

    pub fn rotate_ccw(self) -> Coord {
        Coord::new(self.y, -self.x)
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, rhs: Coord) {
        *self = *self + rhs;
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, rhs: Coord) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for Coord {
    type Output = Coord;

    fn mul(self, rhs: i64) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise, starting north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn delta(self) -> Coord {
        match self {
            Direction::North => Coord::new(0, -1),
            Direction::East => Coord::new(1, 0),
            Direction::South => Coord::new(0, 1),
            Direction::West => Coord::new(-1, 0),
        }
    }

    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub const fn opposite(self) -> Direction {
        self.turn_right().turn_right()
    }

    /// Accepts arrows (`^>v<`), compass letters (`NESW`) and `UDLR`
    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            '^' | 'N' | 'U' => Some(Direction::North),
            '>' | 'E' | 'R' => Some(Direction::East),
            'v' | 'S' | 'D' => Some(Direction::South),
            '<' | 'W' | 'L' => Some(Direction::West),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_and_distance() {
        let a = Coord::new(3, -2);
        let b = Coord::new(-1, 4);
        assert_eq!(a + b, Coord::new(2, 2));
        assert_eq!(a - b, Coord::new(4, -6));
        assert_eq!(a * 3, Coord::new(9, -6));
        assert_eq!(-a, Coord::new(-3, 2));
        assert_eq!(a.manhattan(b), 10);
        assert_eq!(b.manhattan(a), 10);
    }

    #[test]
    fn test_neighbors() {
        let c = Coord::new(5, 5);
        let n4: Vec<Coord> = c.neighbors4().collect();
        assert_eq!(
            n4,
            vec![
                Coord::new(5, 4),
                Coord::new(6, 5),
                Coord::new(5, 6),
                Coord::new(4, 5)
            ]
        );
        let n8: Vec<Coord> = c.neighbors8().collect();
        assert_eq!(n8.len(), 8);
        assert!(!n8.contains(&c));
        assert!(n8.iter().all(|n| (n.x - c.x).abs() <= 1 && (n.y - c.y).abs() <= 1));
    }

    #[test]
    fn test_turns_round_trip() {
        for d in Direction::ALL {
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.turn_right().turn_right().turn_right().turn_right(), d);
            assert_eq!(d.delta() + d.opposite().delta(), Coord::ORIGIN);
            assert_eq!(d.delta().rotate_cw(), d.turn_right().delta());
            assert_eq!(d.delta().rotate_ccw(), d.turn_left().delta());
        }
    }

    #[test]
    fn test_direction_from_char() {
        assert_eq!(Direction::from_char('^'), Some(Direction::North));
        assert_eq!(Direction::from_char('R'), Some(Direction::East));
        assert_eq!(Direction::from_char('v'), Some(Direction::South));
        assert_eq!(Direction::from_char('W'), Some(Direction::West));
        assert_eq!(Direction::from_char('x'), None);
    }
}
