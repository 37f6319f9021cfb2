//! Node classification for the navigation grid.

use serde::{Deserialize, Serialize};

/// What role a grid cell plays in the current search run.
///
/// - `Start` / `End` - assigned by the caller of a search before it runs
/// - `Blocked` - copied from the grid's static obstacle layer
/// - `Walkable` - everything else (the reset state)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    /// Origin cell of the search
    Start = 0,

    /// Destination cell of the search
    End = 1,

    /// Cell cannot be entered
    Blocked = 2,

    /// Open cell
    #[default]
    Walkable = 3,
}

impl NodeType {
    /// Can a path pass through this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        !matches!(self, NodeType::Blocked)
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            NodeType::Start => 'S',
            NodeType::End => 'E',
            NodeType::Blocked => '#',
            NodeType::Walkable => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_walkable() {
        assert_eq!(NodeType::default(), NodeType::Walkable);
    }

    #[test]
    fn test_traversable() {
        assert!(NodeType::Start.is_traversable());
        assert!(NodeType::End.is_traversable());
        assert!(NodeType::Walkable.is_traversable());
        assert!(!NodeType::Blocked.is_traversable());
    }
}
