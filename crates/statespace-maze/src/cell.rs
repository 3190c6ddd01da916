//! The [`Cell`] type: one square of a maze.

use std::fmt;

/// Content of a maze square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Blocked,
    Start,
    Goal,
    /// Part of a drawn solution.
    Path,
}

impl Cell {
    /// Character used when rendering the maze.
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Blocked => 'X',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Path => '*',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::Empty),
            'X' => Some(Self::Blocked),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            '*' => Some(Self::Path),
            _ => None,
        }
    }

    /// Whether a walker may stand on this cell.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
