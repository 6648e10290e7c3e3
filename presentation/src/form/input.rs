//! Multi-line question input

/// Outcome of feeding one line to a [`QuestionBuffer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line ended with `\`; keep reading
    Continue,
    /// The question is complete and ready to submit
    Complete(String),
}

/// Collects a question that may span several lines.
///
/// A line ending in a backslash continues onto the next line; the
/// backslash is dropped and the line break kept.
#[derive(Debug, Default)]
pub struct QuestionBuffer {
    lines: Vec<String>,
}

impl QuestionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        match line.strip_suffix('\\') {
            Some(head) => {
                self.lines.push(head.to_string());
                LineOutcome::Continue
            }
            None => {
                self.lines.push(line.to_string());
                LineOutcome::Complete(std::mem::take(&mut self.lines).join("\n"))
            }
        }
    }

    /// Whether a continuation is in progress
    pub fn is_pending(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let mut buf = QuestionBuffer::new();
        assert_eq!(
            buf.push_line("How much sleep does a 3 year old need?"),
            LineOutcome::Complete("How much sleep does a 3 year old need?".into())
        );
        assert!(!buf.is_pending());
    }

    #[test]
    fn test_continuation() {
        let mut buf = QuestionBuffer::new();
        assert_eq!(buf.push_line("My father is 82.\\"), LineOutcome::Continue);
        assert!(buf.is_pending());
        assert_eq!(
            buf.push_line("Which walker should we buy?"),
            LineOutcome::Complete("My father is 82.\nWhich walker should we buy?".into())
        );
        assert!(!buf.is_pending());
    }

    #[test]
    fn test_empty_line_completes_blank() {
        let mut buf = QuestionBuffer::new();
        assert_eq!(buf.push_line(""), LineOutcome::Complete(String::new()));
    }

    #[test]
    fn test_clear_discards_pending() {
        let mut buf = QuestionBuffer::new();
        buf.push_line("partial\\");
        buf.clear();
        assert_eq!(buf.push_line("fresh"), LineOutcome::Complete("fresh".into()));
    }
}
