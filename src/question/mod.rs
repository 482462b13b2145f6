//! Question segmentation.
//!
//! Partitions extracted document text into numbered question records.
//! Real exam documents number questions in several competing conventions —
//! `문제 1`, `제1문`, `[1]`, `Q1.`, `1.`, `1)` — so a fixed, priority-ordered
//! list of line-anchored boundary patterns is evaluated against the whole
//! text and the pattern with the strictly greatest match count wins (the
//! first pattern wins ties). The captured numbers are taken as-is: they are
//! not required to be contiguous, unique, or increasing, and records come
//! out in document order of their boundary matches.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single segmented question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Number captured by the boundary pattern
    pub number: u32,
    /// First line of the body, truncated to 100 characters
    pub title: String,
    /// Full text span from this boundary to the next, trimmed
    pub body: String,
}

/// Boundary patterns in priority order. Each recognizes one numbering
/// convention at the start of a line and captures the question number.
static BOUNDARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "문제 1", "문제 1.", "문제1" — Korean label prefix
        r"(?m)^문제\s*(\d+)[.)]?\s",
        // "제1문", "제 2 문" — Korean ordinal form
        r"(?m)^제\s*(\d+)\s*문",
        // "[1]", "[2]" — bracketed
        r"(?m)^\[(\d+)\]",
        // "Q1.", "Q1)", "Q1:" , "Q1 " — Latin letter prefix
        r"(?m)^Q(\d+)[.):\s]",
        // "1. " — bare number with period (trailing space keeps decimals out)
        r"(?m)^(\d+)\.\s",
        // "1) " — bare number with parenthesis
        r"(?m)^(\d+)\)\s",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("boundary pattern must compile"))
    .collect()
});

/// Maximum title length in characters.
const TITLE_LIMIT: usize = 100;

/// Segment extracted text into question records.
///
/// Empty or whitespace-only input yields no records. When no boundary
/// pattern matches at all, the whole trimmed text becomes a single record
/// numbered 1.
///
/// # Example
/// ```
/// use yuzu::question::segment;
///
/// let questions = segment("1. first\nbody\n2. second\n");
/// assert_eq!(questions.len(), 2);
/// assert_eq!(questions[0].number, 1);
/// assert_eq!(questions[1].title, "2. second");
/// ```
pub fn segment(text: &str) -> Vec<Question> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    // (byte offset, captured number) per match of the winning pattern
    let mut best: Vec<(usize, u32)> = Vec::new();
    for pattern in BOUNDARY_PATTERNS.iter() {
        let matches: Vec<(usize, u32)> = pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let number = caps.get(1)?.as_str().parse().ok()?;
                Some((whole.start(), number))
            })
            .collect();
        if matches.len() > best.len() {
            best = matches;
        }
    }

    if best.is_empty() {
        let body = text.trim().to_string();
        let title = title_of(&body);
        return vec![Question {
            number: 1,
            title,
            body,
        }];
    }

    let mut questions = Vec::with_capacity(best.len());
    for (i, &(start, number)) in best.iter().enumerate() {
        let end = best.get(i + 1).map_or(text.len(), |&(next, _)| next);
        let body = text[start..end].trim().to_string();
        let title = title_of(&body);
        questions.push(Question {
            number,
            title,
            body,
        });
    }
    questions
}

/// Title rule: the body's first line, truncated to [`TITLE_LIMIT`] characters.
fn title_of(body: &str) -> String {
    let first_line = body.lines().next().unwrap_or("").trim();
    if first_line.chars().count() > TITLE_LIMIT {
        first_line.chars().take(TITLE_LIMIT).collect()
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t  ").is_empty());
    }

    #[test]
    fn test_no_boundary_falls_back_to_single_record() {
        let questions = segment("just some prose\nwith no numbering\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 1);
        assert_eq!(questions[0].body, "just some prose\nwith no numbering");
    }

    #[test]
    fn test_bare_period_numbering() {
        let questions = segment("1. compute the mean\ndetails\n2. compute the variance\n");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].number, 1);
        assert_eq!(questions[0].body, "1. compute the mean\ndetails");
        assert_eq!(questions[1].number, 2);
    }

    #[test]
    fn test_korean_label_numbering() {
        let questions = segment("문제 1 첫 번째\n본문\n문제 2 두 번째\n");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].title, "문제 1 첫 번째");
    }

    #[test]
    fn test_most_matches_wins_over_priority() {
        // five "문제 N" boundaries versus three "N." boundaries
        let text = "문제 1 a\n문제 2 b\n문제 3 c\n문제 4 d\n문제 5 e\n\
                    1. x\n2. y\n3. z\n";
        let questions = segment(text);
        assert_eq!(questions.len(), 5);
        let numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_tie_goes_to_first_registered_pattern() {
        // two matches each for "문제 N" and "N." — priority order decides
        let text = "문제 1 a\n문제 2 b\n3. x\n4. y\n";
        let questions = segment(text);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].number, 1);
        assert_eq!(questions[1].number, 2);
    }

    #[test]
    fn test_numbers_taken_as_captured_in_document_order() {
        let questions = segment("3. third first\n1. then one\n7. then seven\n");
        let numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![3, 1, 7]);
    }

    #[test]
    fn test_body_spans_to_next_boundary() {
        let questions = segment("[1] alpha\nbeta\n[2] gamma\n");
        assert_eq!(questions[0].body, "[1] alpha\nbeta");
        assert_eq!(questions[1].body, "[2] gamma");
    }

    #[test]
    fn test_title_truncated_to_100_chars() {
        let long_line = "1. ".to_string() + &"x".repeat(200);
        let questions = segment(&(long_line + "\nrest\n"));
        assert_eq!(questions[0].title.chars().count(), 100);
    }

    #[test]
    fn test_decimal_numbers_do_not_open_questions() {
        // "3.14" must not match the bare-period convention
        let questions = segment("pi is approximately\n3.14 and nothing else\n");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].number, 1);
    }

    #[test]
    fn test_latin_prefix_numbering() {
        let questions = segment("Q1. alpha\nQ2) beta\nQ3: gamma\n");
        assert_eq!(questions.len(), 3);
        let numbers: Vec<u32> = questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_korean_ordinal_numbering() {
        let questions = segment("제1문 첫째\n내용\n제 2 문 둘째\n");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].number, 2);
    }

    #[test]
    fn test_question_serializes() {
        let question = Question {
            number: 1,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_string(&question);
        assert!(json.is_ok());
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn segment_never_panics(text in "\\PC*") {
                let _ = segment(&text);
            }

            #[test]
            fn nonblank_input_always_yields_records(text in "[a-z0-9 .)\\n]{1,200}") {
                let questions = segment(&text);
                if text.trim().is_empty() {
                    prop_assert!(questions.is_empty());
                } else {
                    prop_assert!(!questions.is_empty());
                }
            }

            #[test]
            fn titles_never_exceed_limit(text in "\\PC{0,400}") {
                for question in segment(&text) {
                    prop_assert!(question.title.chars().count() <= TITLE_LIMIT);
                }
            }
        }
    }
}
