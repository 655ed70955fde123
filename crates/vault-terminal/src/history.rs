//! Input recall for the prompt (shell-style Up/Down).

/// Previously submitted input lines with a recall cursor.
#[derive(Debug, Clone, Default)]
pub struct InputHistory {
    entries: Vec<String>,
    /// `None` while the user is not recalling.
    cursor: Option<usize>,
}

impl InputHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines are ignored. Always stops recall.
    pub fn record(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.entries.push(raw.to_string());
        self.cursor = None;
    }

    /// Step back to an older entry.
    ///
    /// Starts at the newest entry and stops at the oldest. Returns `None`
    /// only when nothing has been recorded.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Some(&self.entries[idx])
    }

    /// Step forward to a newer entry.
    ///
    /// Returns `None` when not recalling (keep the current input). Stepping
    /// past the newest entry ends recall and returns an empty line.
    pub fn recall_next(&mut self) -> Option<&str> {
        let next = self.cursor? + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(next);
        Some(&self.entries[next])
    }

    /// Current recall position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> InputHistory {
        let mut h = InputHistory::new();
        for line in ["A", "B", "C"] {
            h.record(line);
        }
        h
    }

    #[test]
    fn previous_walks_back_without_wrapping() {
        let mut h = abc();
        assert_eq!(h.recall_previous(), Some("C"));
        assert_eq!(h.recall_previous(), Some("B"));
        assert_eq!(h.recall_previous(), Some("A"));
        assert_eq!(h.recall_previous(), Some("A"));
        assert_eq!(h.recall_next(), Some("B"));
    }

    #[test]
    fn next_past_newest_clears_once() {
        let mut h = abc();
        h.recall_previous();
        assert_eq!(h.recall_next(), Some(""));
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_next(), None);
    }

    #[test]
    fn next_without_recall_is_noop() {
        let mut h = abc();
        assert_eq!(h.recall_next(), None);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn previous_on_empty_is_noop() {
        let mut h = InputHistory::new();
        assert_eq!(h.recall_previous(), None);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn record_resets_cursor() {
        let mut h = abc();
        h.recall_previous();
        h.recall_previous();
        assert_eq!(h.cursor(), Some(1));
        h.record("D");
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_previous(), Some("D"));
    }

    #[test]
    fn blank_lines_not_recorded() {
        let mut h = InputHistory::new();
        h.record("");
        h.record("   ");
        assert!(h.is_empty());
    }

    #[test]
    fn raw_text_kept_verbatim() {
        let mut h = InputHistory::new();
        h.record("  map ");
        assert_eq!(h.entries(), ["  map "]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut h = InputHistory::new();
        h.record("MAP");
        h.record("MAP");
        assert_eq!(h.len(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cursor_stays_in_bounds(
                lines in proptest::collection::vec("[a-z]{1,5}", 0..8),
                moves in proptest::collection::vec(any::<bool>(), 0..30),
            ) {
                let mut h = InputHistory::new();
                for l in &lines {
                    h.record(l);
                }
                for up in moves {
                    if up {
                        h.recall_previous();
                    } else {
                        h.recall_next();
                    }
                    if let Some(c) = h.cursor() {
                        prop_assert!(c < lines.len());
                    }
                }
            }
        }
    }
}
