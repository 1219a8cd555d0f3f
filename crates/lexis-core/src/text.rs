//! Text normalization utilities.
//!
//! Provides the [`Normalizer`] (punctuation stripping, CJK segmentation,
//! lowercasing), the unsegmented [`clean`] form, plus tokenization and
//! sentence splitting over normalized text for use by analysis modules.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::{AnalysisError, AnalysisResult};

/// Punctuation kept by [`Normalizer::normalize`] so entity patterns survive.
const PRESERVED_PUNCTUATION: &[char] = &['@', '.', ':', '/', '%', '+', '-', '=', '&', '#', '~'];

/// Returns `true` for characters in the CJK Unified Ideographs block.
pub const fn is_ideograph(ch: char) -> bool {
    matches!(ch, '\u{4e00}'..='\u{9fff}')
}

/// Returns `true` for characters that can appear inside a word token.
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || is_ideograph(ch)
}

const fn is_ascii_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_wide_terminator(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？')
}

const fn is_terminator(ch: char) -> bool {
    is_ascii_terminator(ch) || is_wide_terminator(ch)
}

/// Non-ideograph characters kept verbatim by normalization.
fn is_kept_ascii(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch == '_'
        || is_ascii_terminator(ch)
        || PRESERVED_PUNCTUATION.contains(&ch)
}

/// Punctuation-stripped text without segmentation.
///
/// Applies the same character filter, whitespace collapsing and lowercasing
/// as [`Normalizer::normalize`], but leaves ideograph runs and full-width
/// terminators unspaced. Language ratios are measured on this form, where
/// the only spaces are ones the input itself had.
pub fn clean(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|ch| {
            if is_ideograph(ch) || is_wide_terminator(ch) || is_kept_ascii(ch) {
                ch.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lexical normalizer with a CJK segmentation dictionary.
///
/// Ideograph runs are split by forward maximum matching: at each position the
/// longest dictionary word wins, and characters starting no dictionary word
/// stand alone.
#[derive(Debug, Clone)]
pub struct Normalizer {
    segmenter: AhoCorasick,
    vocabulary_len: usize,
}

impl Normalizer {
    /// Build a normalizer from dictionary words.
    ///
    /// Words without ideographs are ignored since whitespace already delimits
    /// them.
    pub fn new<I, S>(words: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty() && w.chars().all(is_ideograph))
            .collect();
        vocabulary.sort_unstable();
        vocabulary.dedup();

        let segmenter = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&vocabulary)
            .map_err(|e| AnalysisError::Lexicon(e.to_string()))?;

        Ok(Self {
            segmenter,
            vocabulary_len: vocabulary.len(),
        })
    }

    /// Number of dictionary words available to the segmenter.
    pub const fn vocabulary_len(&self) -> usize {
        self.vocabulary_len
    }

    /// Normalize raw text.
    ///
    /// Characters outside the word set, whitespace, ideographs, entity
    /// punctuation, and sentence terminators become spaces. Ideograph runs are
    /// segmented into space-separated words, full-width terminators are padded
    /// with spaces, whitespace is collapsed, and ASCII is lowercased. The
    /// result is a fixed point: normalizing it again changes nothing.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn normalize(&self, text: &str) -> String {
        let mut spaced = String::with_capacity(text.len() + text.len() / 2);
        let mut run = String::new();

        for ch in text.chars() {
            if is_ideograph(ch) {
                run.push(ch);
                continue;
            }
            if !run.is_empty() {
                self.push_segmented(&mut spaced, &run);
                run.clear();
            }

            if is_kept_ascii(ch) {
                spaced.push(ch.to_ascii_lowercase());
            } else if is_wide_terminator(ch) {
                spaced.push(' ');
                spaced.push(ch);
                spaced.push(' ');
            } else {
                spaced.push(' ');
            }
        }
        if !run.is_empty() {
            self.push_segmented(&mut spaced, &run);
        }

        spaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn push_segmented(&self, out: &mut String, run: &str) {
        let mut last = 0;
        for m in self.segmenter.find_iter(run) {
            for ch in run[last..m.start()].chars() {
                out.push(' ');
                out.push(ch);
            }
            out.push(' ');
            out.push_str(&run[m.start()..m.end()]);
            last = m.end();
        }
        for ch in run[last..].chars() {
            out.push(' ');
            out.push(ch);
        }
        out.push(' ');
    }
}

/// Split normalized text into word tokens.
///
/// Pieces are split on whitespace, stripped of leading and trailing non-word
/// characters, and dropped when nothing remains.
pub fn tokenize(clean: &str) -> Vec<String> {
    clean
        .split_whitespace()
        .map(|piece| piece.trim_matches(|c: char| !is_word_char(c)))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split normalized text into sentences.
///
/// Full-width terminators always end a sentence. ASCII `.`, `!` and `?` end a
/// sentence only before whitespace, another terminator, or the end of the
/// text, so domains and decimals stay intact. A sentence count can therefore
/// be lower than a plain split on every terminator: `pi is 3.14` is one
/// sentence here, not two.
#[tracing::instrument(skip_all, fields(text_len = clean.len()))]
pub fn split_sentences(clean: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = clean.chars().peekable();

    while let Some(ch) = chars.next() {
        let boundary = if is_wide_terminator(ch) {
            true
        } else if is_ascii_terminator(ch) {
            chars
                .peek()
                .is_none_or(|next| next.is_whitespace() || is_terminator(*next))
        } else {
            false
        };

        if boundary {
            push_sentence(&mut sentences, &current);
            current.clear();
        } else {
            current.push(ch);
        }
    }
    push_sentence(&mut sentences, &current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
