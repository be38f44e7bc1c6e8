//! Query cursor
//!
//! The status API returns changes that happened after `from_date`. The cursor
//! is that lower bound; it only moves when the server reports a new one.

/// Lower bound of the next status query window, in Unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Replaces the cursor with the server-reported one, if any
    ///
    /// Returns `true` when the cursor changed.
    pub fn advance(&mut self, reported: Option<i64>) -> bool {
        match reported {
            Some(next) if next != self.0 => {
                self.0 = next;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_to_reported_value() {
        let mut cursor = Cursor::new(100);
        assert!(cursor.advance(Some(1_700_000_000)));
        assert_eq!(cursor.value(), 1_700_000_000);
    }

    #[test]
    fn test_advance_without_report_keeps_value() {
        let mut cursor = Cursor::new(100);
        assert!(!cursor.advance(None));
        assert_eq!(cursor.value(), 100);

        assert!(!cursor.advance(Some(100)));
        assert_eq!(cursor, Cursor::new(100));
    }
}
