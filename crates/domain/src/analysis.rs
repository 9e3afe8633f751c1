// crates/domain/src/analysis.rs
use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;
use textfolio_shared_kernel::AvgWordLength;

use crate::model::FileStats;

/// Everything that is neither an ASCII word character nor whitespace, plus
/// the underscore. The word class is ASCII only, so accented letters are
/// stripped along with punctuation; the trailing alternation then strips
/// underscores too, so tokens never contain `_`.
static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_\s]|_").expect("static pattern"));

/// Line separators, longest alternative first so `\r\n` counts as one.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("static pattern"));

/// Occurrence counts per distinct normalized token.
///
/// Local to a single analysis call; nothing caches or reuses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
}

impl WordFrequency {
    pub fn record(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Number of distinct tokens seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn occurrences(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &n)| (token.as_str(), n))
    }
}

/// Normalize `text` into tokens: lowercase, strip punctuation, non-ASCII
/// letters, and underscores, then split on whitespace runs. Empty tokens
/// never survive.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = STRIP.replace_all(&lowered, "");
    stripped.split_whitespace().map(str::to_owned).collect()
}

/// Compute [`FileStats`] for one text blob. `filename` is an opaque label
/// echoed back unchanged.
///
/// Counts are in Unicode scalar values. Total over any string input: empty,
/// whitespace-only, and punctuation-only text all yield zero words.
pub fn analyze(filename: &str, content: &str) -> FileStats {
    analyze_with_frequency(filename, content).0
}

/// Like [`analyze`], but also hands back the frequency map for callers that
/// want to inspect it.
pub fn analyze_with_frequency(filename: &str, content: &str) -> (FileStats, WordFrequency) {
    let lines = LINE_BREAK.split(content).count();
    let chars = content.chars().count();

    let tokens = tokenize(content);
    let words = tokens.len();

    let mut frequency = WordFrequency::default();
    let mut total_word_length = 0usize;
    for token in tokens {
        total_word_length += token.chars().count();
        frequency.record(token);
    }
    let unique_words = frequency.distinct();

    let stats = FileStats {
        filename: filename.to_owned(),
        words: words.into(),
        lines: lines.into(),
        chars: chars.into(),
        unique_words: unique_words.into(),
        avg_word_length: AvgWordLength::from_totals(total_word_length, words),
    };
    (stats, frequency)
}
