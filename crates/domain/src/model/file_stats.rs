// crates/domain/src/model/file_stats.rs
use serde::{Deserialize, Serialize};
use textfolio_shared_kernel::{AvgWordLength, CharCount, LineCount, UniqueWordCount, WordCount};

/// Statistics derived from one text blob. Immutable once produced; the
/// filename is an opaque caller-supplied label with no further meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStats {
    pub filename: String,
    pub words: WordCount,
    pub lines: LineCount,
    pub chars: CharCount,
    pub unique_words: UniqueWordCount,
    pub avg_word_length: AvgWordLength,
}
