//! Directional transition selection.
//!
//! Direction is pure state derived from the relative order of the old and
//! new index. The view layer only reads it to pick which edge the incoming
//! image slides in from.

/// Direction of the most recent index change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Moved to a higher index; the new image enters from the trailing edge.
    Forward,
    /// Moved to a lower index; the new image enters from the leading edge.
    Backward,
    /// No move since the session opened.
    #[default]
    None,
}

/// Screen edge a slide animation starts from or ends at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

impl Direction {
    /// Edge the incoming image enters from, if it slides at all.
    pub fn enter_edge(self) -> Option<Edge> {
        match self {
            Direction::Forward => Some(Edge::Trailing),
            Direction::Backward => Some(Edge::Leading),
            Direction::None => None,
        }
    }
}

/// Selects the transition direction for a move from `old` to `new`.
///
/// Equal indices produce [`Direction::None`]; callers treat that move as a
/// no-op and never emit it.
pub fn direction_between(old: usize, new: usize) -> Direction {
    use std::cmp::Ordering;

    match new.cmp(&old) {
        Ordering::Greater => Direction::Forward,
        Ordering::Less => Direction::Backward,
        Ordering::Equal => Direction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(direction_between(0, 3), Direction::Forward);
        assert_eq!(direction_between(3, 1), Direction::Backward);
        assert_eq!(direction_between(2, 2), Direction::None);
    }

    #[test]
    fn test_enter_edge() {
        assert_eq!(Direction::Forward.enter_edge(), Some(Edge::Trailing));
        assert_eq!(Direction::Backward.enter_edge(), Some(Edge::Leading));
        assert_eq!(Direction::None.enter_edge(), None);
    }
}
