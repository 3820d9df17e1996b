//! Greedy first-fit word splitting against a single height budget.

use crate::FlowError;
use pageflow_style::FragmentStyle;
use pageflow_traits::{Fragment, GeometryOracle};

/// Text together with the height it was measured at.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredText {
    pub text: String,
    pub height: f32,
}

/// Result of splitting a word sequence.
///
/// `head` is `None` when not even the first word fits; the whole block is
/// then deferred. `tail` is `None` when every word fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub head: Option<MeasuredText>,
    pub tail: Option<String>,
}

/// Finds the longest prefix of words whose rendering fits a height budget.
#[derive(Debug)]
pub struct TextSplitter<'a, O: ?Sized> {
    oracle: &'a O,
    style: &'a FragmentStyle,
    max_width: f32,
}

impl<'a, O: GeometryOracle + ?Sized> TextSplitter<'a, O> {
    pub fn new(oracle: &'a O, style: &'a FragmentStyle, max_width: f32) -> Self {
        Self {
            oracle,
            style,
            max_width,
        }
    }

    /// Grows a probe one word at a time, re-measuring after each word, and
    /// stops at the first word whose addition exceeds `remaining_height`.
    pub fn split(&self, words: &[&str], remaining_height: f32) -> Result<Split, FlowError> {
        let mut fitted = 0;
        let mut head: Option<MeasuredText> = None;
        let mut probe = String::new();

        for word in words {
            if !probe.is_empty() {
                probe.push(' ');
            }
            probe.push_str(word);

            let height = self
                .oracle
                .measure(&Fragment::new(&probe, self.style, self.max_width))?
                .height;
            if height > remaining_height {
                break;
            }

            fitted += 1;
            head = Some(MeasuredText {
                text: probe.clone(),
                height,
            });
        }

        let tail = (fitted < words.len()).then(|| words[fitted..].join(" "));
        log::trace!(
            target: "pageflow::splitter",
            "{} of {} words fit in {}px",
            fitted,
            words.len(),
            remaining_height
        );
        Ok(Split { head, tail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflow_traits::{LookupFallback, LookupOracle};

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_stops_before_the_overflowing_word() {
        let oracle = LookupOracle::new(LookupFallback::Fixed(40.0))
            .with_height("alpha", 10.0)
            .with_height("alpha beta", 25.0);
        let style = FragmentStyle::default();
        let splitter = TextSplitter::new(&oracle, &style, 100.0);

        let split = splitter
            .split(&words("alpha beta gamma delta"), 20.0)
            .unwrap();
        assert_eq!(
            split.head,
            Some(MeasuredText {
                text: "alpha".into(),
                height: 10.0
            })
        );
        assert_eq!(split.tail.as_deref(), Some("beta gamma delta"));
        // Measuring stops at the first overflow.
        assert_eq!(oracle.measurements(), 2);
    }

    #[test]
    fn test_no_word_fits() {
        let oracle = LookupOracle::new(LookupFallback::Fixed(30.0));
        let style = FragmentStyle::default();
        let split = TextSplitter::new(&oracle, &style, 100.0)
            .split(&words("too tall"), 20.0)
            .unwrap();
        assert_eq!(split.head, None);
        assert_eq!(split.tail.as_deref(), Some("too tall"));
    }

    #[test]
    fn test_everything_fits() {
        let oracle = LookupOracle::new(LookupFallback::PerWord(5.0));
        let style = FragmentStyle::default();
        let split = TextSplitter::new(&oracle, &style, 100.0)
            .split(&words("a b c"), 15.0)
            .unwrap();
        assert_eq!(split.head.unwrap().text, "a b c");
        assert_eq!(split.tail, None);
    }

    #[test]
    fn test_empty_word_list() {
        let oracle = LookupOracle::default();
        let style = FragmentStyle::default();
        let split = TextSplitter::new(&oracle, &style, 100.0)
            .split(&[], 15.0)
            .unwrap();
        assert_eq!(split, Split { head: None, tail: None });
        assert_eq!(oracle.measurements(), 0);
    }
}
