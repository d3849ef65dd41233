//! Alignment of provider corrections onto the original sentence.
//!
//! The sentence is tokenized, each token is compared against the correction
//! list, and the text is rebuilt as an ordered list of segments. Gaps between
//! tokens (whitespace, quotes, symbols) are kept verbatim as plain segments,
//! so concatenating the segment texts always yields the input again.

use super::correction::Correction;
use super::token::Token;
use super::tokenizer::{normalized_words, tokenize};
use serde::Serialize;

/// A contiguous piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub is_mistake: bool,
}

impl Segment {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_mistake: false,
        }
    }

    pub fn mistake(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_mistake: true,
        }
    }
}

/// How correction words are matched against tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// A token is a mistake only when it equals a correction word, ignoring
    /// case. Multi-word corrections such as `"she go"` never match.
    #[default]
    SingleToken,
    /// Correction words are tokenized and matched against runs of
    /// consecutive tokens; every token of a matching run is a mistake.
    Phrase,
}

/// Builds highlight segments using [`MatchMode::SingleToken`].
pub fn build_segments(text: &str, corrections: &[Correction]) -> Vec<Segment> {
    build_segments_with(text, corrections, MatchMode::SingleToken)
}

pub fn build_segments_with(
    text: &str,
    corrections: &[Correction],
    mode: MatchMode,
) -> Vec<Segment> {
    let tokens = tokenize(text);
    let flags = match mode {
        MatchMode::SingleToken => single_token_flags(&tokens, corrections),
        MatchMode::Phrase => phrase_flags(&tokens, corrections),
    };

    let mut segments = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut last_end = 0;

    for (token, is_mistake) in tokens.iter().zip(flags) {
        let gap = &text[last_end..token.start];
        if !gap.is_empty() {
            segments.push(Segment::plain(gap));
        }
        segments.push(Segment {
            text: token.text.clone(),
            is_mistake,
        });
        last_end = token.end;
    }

    let trailing = &text[last_end..];
    if !trailing.is_empty() {
        segments.push(Segment::plain(trailing));
    }

    segments
}

pub fn mistake_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.is_mistake).count()
}

/// Joins segment texts back into a single string.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

fn single_token_flags(tokens: &[Token], corrections: &[Correction]) -> Vec<bool> {
    let words: Vec<String> = corrections.iter().map(|c| c.word.to_lowercase()).collect();

    tokens
        .iter()
        .map(|token| {
            let lowered = token.text.to_lowercase();
            words.iter().any(|word| *word == lowered)
        })
        .collect()
}

fn phrase_flags(tokens: &[Token], corrections: &[Correction]) -> Vec<bool> {
    let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    let mut flags = vec![false; tokens.len()];

    for correction in corrections {
        let phrase = normalized_words(&correction.word);
        if phrase.is_empty() || phrase.len() > lowered.len() {
            continue;
        }

        for start in 0..=(lowered.len() - phrase.len()) {
            let window = &lowered[start..start + phrase.len()];
            if window == phrase.as_slice() {
                flags[start..start + phrase.len()].fill(true);
            }
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_single_word_correction() {
        let corrections = vec![Correction::new("go", "goes")];
        let segments = build_segments("He go home.", &corrections);
        assert_eq!(
            segments,
            vec![
                Segment::plain("He"),
                Segment::plain(" "),
                Segment::mistake("go"),
                Segment::plain(" "),
                Segment::plain("home"),
                Segment::plain("."),
            ]
        );
    }

    #[test]
    fn test_multi_word_correction_never_matches_single_tokens() {
        let corrections = vec![Correction::new("she go", "she goes")];
        let segments = build_segments("she go home", &corrections);
        let words: Vec<&str> = segments
            .iter()
            .filter(|s| !s.text.trim().is_empty())
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(words, vec!["she", "go", "home"]);
        assert_eq!(mistake_count(&segments), 0);
    }

    #[test]
    fn test_phrase_mode_marks_every_token_of_the_phrase() {
        let corrections = vec![Correction::new("she go", "she goes")];
        let segments = build_segments_with("She go home", &corrections, MatchMode::Phrase);
        let marked: Vec<&str> = segments
            .iter()
            .filter(|s| s.is_mistake)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(marked, vec!["She", "go"]);
    }

    #[test]
    fn test_phrase_mode_still_matches_single_words() {
        let corrections = vec![Correction::new("go", "goes")];
        let segments = build_segments_with("he go", &corrections, MatchMode::Phrase);
        assert_eq!(mistake_count(&segments), 1);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let corrections = vec![Correction::new("GO", "goes")];
        let segments = build_segments("He Go home", &corrections);
        assert!(segments.contains(&Segment::mistake("Go")));
    }

    #[test]
    fn test_substring_does_not_match() {
        let corrections = vec![Correction::new("go", "goes")];
        let segments = build_segments("He goes going", &corrections);
        assert_eq!(mistake_count(&segments), 0);
    }

    #[test]
    fn test_empty_corrections_marks_nothing() {
        let segments = build_segments("Anything at all, really!", &[]);
        assert_eq!(mistake_count(&segments), 0);
    }

    #[test]
    fn test_repeated_mistake_marked_at_each_occurrence() {
        let corrections = vec![Correction::new("go", "goes")];
        let segments = build_segments("go go go", &corrections);
        assert_eq!(mistake_count(&segments), 3);
        assert_eq!(reconstruct(&segments), "go go go");
    }

    #[test]
    fn test_trailing_gap_is_preserved() {
        let segments = build_segments("hello world  \n", &[]);
        assert_eq!(segments.last(), Some(&Segment::plain("  \n")));
        assert_eq!(reconstruct(&segments), "hello world  \n");
    }

    #[test]
    fn test_leading_gap_is_preserved() {
        let segments = build_segments("  \"quoted\"", &[]);
        assert_eq!(segments[0], Segment::plain("  \""));
        assert_eq!(segments[1], Segment::plain("quoted"));
        assert_eq!(segments[2], Segment::plain("\""));
    }

    #[test]
    fn test_text_without_tokens_is_a_single_plain_segment() {
        let segments = build_segments(" -- ", &[]);
        assert_eq!(segments, vec![Segment::plain(" -- ")]);
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(build_segments("", &[Correction::new("go", "goes")]).is_empty());
    }

    #[test]
    fn test_punctuation_correction_matches_punctuation_token() {
        let corrections = vec![Correction::new(";", ",")];
        let segments = build_segments("wait; what", &corrections);
        assert!(segments.contains(&Segment::mistake(";")));
    }

    #[test]
    fn test_accented_word_is_never_a_whole_token() {
        let corrections = vec![Correction::new("naïve", "naive")];
        let segments = build_segments("a naïve idea", &corrections);
        assert_eq!(mistake_count(&segments), 0);
        assert_eq!(reconstruct(&segments), "a naïve idea");
    }
}
