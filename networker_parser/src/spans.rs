use std::ops::Range;

use crate::patterns::{LEADING_SEPARATORS, WHITESPACE_RUN};

/// Byte ranges of the original note consumed by field matches.
///
/// Offsets always refer to the original text, so removals never shift each
/// other; overlapping ranges are merged when the residual is rebuilt.
#[derive(Debug, Default, Clone)]
pub struct ConsumedSpans {
    spans: Vec<Range<usize>>,
}

impl ConsumedSpans {
    pub fn consume(&mut self, span: Range<usize>) {
        if !span.is_empty() {
            self.spans.push(span);
        }
    }

    /// The original text with every consumed byte removed.
    pub fn residual(&self, text: &str) -> String {
        let mut spans = self.spans.clone();
        spans.sort_by_key(|span| span.start);

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for span in spans {
            if span.start > cursor {
                out.push_str(&text[cursor..span.start]);
            }
            cursor = cursor.max(span.end);
        }
        if cursor < text.len() {
            out.push_str(&text[cursor..]);
        }
        out
    }
}

/// Strip leading separators, collapse whitespace runs and trim.
pub fn tidy_residual(residual: &str) -> String {
    let stripped = LEADING_SEPARATORS.replace(residual, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_spans_against_original_offsets() {
        let text = "Dana Levi works at Acme as CTO";
        let mut consumed = ConsumedSpans::default();
        consumed.consume(16..24); // "at Acme "
        consumed.consume(0..9); // "Dana Levi"
        assert_eq!(consumed.residual(text), " works as CTO");
    }

    #[test]
    fn overlapping_spans_remove_each_byte_once() {
        let text = "abcdefghij";
        let mut consumed = ConsumedSpans::default();
        consumed.consume(2..6);
        consumed.consume(4..8);
        consumed.consume(5..6);
        assert_eq!(consumed.residual(text), "abij");
    }

    #[test]
    fn no_spans_keeps_text() {
        assert_eq!(ConsumedSpans::default().residual("hello"), "hello");
        assert_eq!(ConsumedSpans::default().residual(""), "");
    }

    #[test]
    fn tidy_strips_leading_separators_and_collapses_whitespace() {
        assert_eq!(tidy_residual(" ,  is   as a\n\tfriend  "), "is as a friend");
        assert_eq!(tidy_residual(",,- . hi"), "hi");
        assert_eq!(tidy_residual("keep, inner. punctuation"), "keep, inner. punctuation");
        assert_eq!(tidy_residual("   "), "");
    }
}
