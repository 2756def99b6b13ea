//! Sentence segmentation.
//!
//! Splits raw item text into a stable, ordered list of sentences.
//! Annotation records reference sentences *by index*, so re-running the
//! segmenter on identical input must always yield an identical sequence —
//! the implementation is a plain forward scan with no data-dependent state.
//!
//! The split rule: a sentence ends at `.`, `!` or `?` when followed by
//! whitespace and an ASCII uppercase letter or Hangul syllable, and at every
//! line break. A single backward-merge pass then repairs splits caused by
//! abbreviations ("et al.", "Fig.", ...) or by product names broken across
//! the boundary (".NET"). The merge is single-pass and non-recursive.

use serde::{Deserialize, Serialize};

/// Hand-curated merge rules for the backward pass.
///
/// The defaults mix Latin abbreviations and entries tuned for the mixed
/// Korean/English corpus this engine was built for. They are configuration
/// rather than a constant because the list is corpus-specific, but the
/// default set must stay fixed: reference outputs depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// A candidate ending with one of these is merged with its successor
    pub abbreviations: Vec<String>,
    /// A candidate starting with one of these is merged into its predecessor
    pub fragment_starts: Vec<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            abbreviations: [
                "et al.", "e.g.", "i.e.", "Fig.", "vs.", "Eq.", "Dr.", "Mr.", "Mrs.", ".NET",
                ". NET",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            fragment_starts: [".NET", ". NET", "NET"].into_iter().map(String::from).collect(),
        }
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// A character that can open a sentence after terminal punctuation:
/// ASCII uppercase or a Hangul syllable (U+AC00..=U+D7A3).
fn is_sentence_opener(c: char) -> bool {
    c.is_ascii_uppercase() || ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Split `text` into ordered, non-empty sentences.
///
/// Text with no terminal punctuation (and no line breaks) yields a single
/// sentence equal to the trimmed input. Empty or whitespace-only input
/// yields an empty list.
///
/// # Example
///
/// ```
/// use blindset_domain::segment::{SegmenterConfig, segment_sentences};
///
/// let config = SegmenterConfig::default();
/// let sentences = segment_sentences("Fig. 1 shows results. It improves accuracy.", &config);
/// assert_eq!(sentences.len(), 2);
/// assert!(sentences[0].starts_with("Fig. 1"));
/// ```
pub fn segment_sentences(text: &str, config: &SegmenterConfig) -> Vec<String> {
    let candidates = split_candidates(text);
    merge_exceptions(candidates, config)
}

/// Forward scan producing raw split candidates (trimmed, non-empty).
fn split_candidates(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut pieces: Vec<&str> = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c == '\n' {
            pieces.push(&text[start..pos]);
            start = pos + c.len_utf8();
            i += 1;
            continue;
        }

        if is_terminal(c) {
            // Lookahead: at least one whitespace char, then a sentence opener
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < chars.len() && is_sentence_opener(chars[j].1) {
                let end = pos + c.len_utf8();
                pieces.push(&text[start..end]);
                start = chars[j].0;
                i = j;
                continue;
            }
        }

        i += 1;
    }

    pieces.push(&text[start..]);
    pieces.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Backward-merge pass: rejoin candidates split at an abbreviation or in
/// the middle of a known fragment. Single-pass — a merged sentence is not
/// re-examined against *earlier* sentences.
fn merge_exceptions(candidates: Vec<&str>, config: &SegmenterConfig) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let merge = sentences.last().is_some_and(|prev| {
            config.abbreviations.iter().any(|a| prev.ends_with(a.as_str()))
                || config.fragment_starts.iter().any(|f| candidate.starts_with(f.as_str()))
        });

        if merge {
            if let Some(prev) = sentences.last_mut() {
                prev.push(' ');
                prev.push_str(candidate);
            }
        } else {
            sentences.push(candidate.to_string());
        }
    }

    sentences
}
