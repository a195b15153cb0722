use std::ops::Add;

use crate::core::{Cell, Direction, Position};
use crate::core::Cell::{BoxOnTarget, Empty, Player, PlayerOnTarget, Target, Wall};

impl Cell {
    pub fn is_target(self) -> bool {
        matches!(self, Target | BoxOnTarget | PlayerOnTarget)
    }

    pub fn has_box(self) -> bool {
        matches!(self, Cell::Box | BoxOnTarget)
    }

    pub fn has_player(self) -> bool {
        matches!(self, Player | PlayerOnTarget)
    }

    /// Floor the player can step onto without pushing anything.
    pub fn is_walkable(self) -> bool {
        matches!(self, Empty | Target)
    }

    /// The cell left behind once its occupant moves away.
    pub fn vacated(self) -> Cell {
        if self.is_target() { Target } else { Empty }
    }

    pub fn with_box(self) -> Cell {
        if self.is_target() { BoxOnTarget } else { Cell::Box }
    }

    pub fn with_player(self) -> Cell {
        if self.is_target() { PlayerOnTarget } else { Player }
    }

    pub fn symbol(self) -> char {
        match self {
            Empty => ' ',
            Wall => '#',
            Cell::Box => '$',
            Player => '@',
            Target => '.',
            BoxOnTarget => '*',
            PlayerOnTarget => '+',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Cell> {
        Some(match ch {
            ' ' | '-' | '_' => Empty,
            '#' => Wall,
            '$' => Cell::Box,
            '@' => Player,
            '.' => Target,
            '*' => BoxOnTarget,
            '+' => PlayerOnTarget,
            _ => return None,
        })
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(self) -> Position {
        match self {
            Direction::Up => Position { x: 0, z: -1 },
            Direction::Down => Position { x: 0, z: 1 },
            Direction::Left => Position { x: -1, z: 0 },
            Direction::Right => Position { x: 1, z: 0 },
        }
    }

    /// Parses the lowercase `udlr` letters used by move strings.
    pub fn from_letter(ch: char) -> Option<Direction> {
        match ch.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Position {
    pub fn new(x: i32, z: i32) -> Self {
        Position { x, z }
    }

    pub fn step(self, dir: Direction) -> Position {
        self + dir.offset()
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Position {
            x: self.x + rhs.x,
            z: self.z + rhs.z,
        }
    }
}
