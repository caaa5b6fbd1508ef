//! Stepping through saved pins one at a time

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prev" | "previous" | "left" => Ok(Direction::Previous),
            "next" | "right" => Ok(Direction::Next),
            _ => Err(format!("Invalid direction: {}. Use 'next' or 'prev'", s)),
        }
    }
}

/// Position in the pin list driven by the previous/next buttons.
///
/// The index is clamped only when a step is taken, so it may sit one past
/// either end between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinCursor {
    index: isize,
}

impl PinCursor {
    pub fn new() -> Self {
        PinCursor::default()
    }

    /// Focus a row, then move one position in `direction`.
    /// Returns the focused row, or `None` when there is nothing to show.
    pub fn step(&mut self, len: usize, direction: Direction) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let last = (len - 1) as isize;
        self.index = self.index.clamp(0, last);
        let focused = self.index as usize;

        match direction {
            Direction::Previous => self.index -= 1,
            Direction::Next => self.index += 1,
        }

        Some(focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_focuses_nothing() {
        let mut cursor = PinCursor::new();
        assert_eq!(cursor.step(0, Direction::Next), None);
        assert_eq!(cursor, PinCursor::new());
    }

    #[test]
    fn test_next_walks_forward_and_sticks_at_end() {
        let mut cursor = PinCursor::new();
        let rows: Vec<_> = (0..5)
            .map(|_| cursor.step(3, Direction::Next).unwrap())
            .collect();
        assert_eq!(rows, vec![0, 1, 2, 2, 2]);
    }

    #[test]
    fn test_previous_from_start_sticks_at_zero() {
        let mut cursor = PinCursor::new();
        assert_eq!(cursor.step(3, Direction::Previous), Some(0));
        assert_eq!(cursor.step(3, Direction::Previous), Some(0));
    }

    #[test]
    fn test_turning_around_refocuses_current_row() {
        let mut cursor = PinCursor::new();
        assert_eq!(cursor.step(4, Direction::Next), Some(0));
        assert_eq!(cursor.step(4, Direction::Next), Some(1));
        // index now 2; going back shows 2 first
        assert_eq!(cursor.step(4, Direction::Previous), Some(2));
        assert_eq!(cursor.step(4, Direction::Previous), Some(1));
    }

    #[test]
    fn test_shrinking_list_clamps() {
        let mut cursor = PinCursor::new();
        for _ in 0..4 {
            cursor.step(5, Direction::Next);
        }
        assert_eq!(cursor.step(2, Direction::Next), Some(1));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(Direction::from_str("next").unwrap(), Direction::Next);
        assert_eq!(Direction::from_str("PREV").unwrap(), Direction::Previous);
        assert!(Direction::from_str("up").is_err());
    }
}
