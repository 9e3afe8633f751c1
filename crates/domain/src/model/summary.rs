// crates/domain/src/model/summary.rs
use serde::Serialize;

use crate::model::FileStats;

/// Summary statistics over all analyzed files.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub files: usize,
    pub words: usize,
    pub lines: usize,
    pub chars: usize,
}

impl Summary {
    pub fn from_stats(stats: &[FileStats]) -> Self {
        let (words, lines, chars) = stats.iter().fold((0, 0, 0), |(w, l, c), stat| {
            (w + stat.words.value(), l + stat.lines.value(), c + stat.chars.value())
        });
        Self { files: stats.len(), words, lines, chars }
    }
}

#[cfg(test)]
mod tests {
    use textfolio_shared_kernel::{AvgWordLength, CharCount, LineCount, UniqueWordCount, WordCount};

    use super::*;

    fn make_stats(filename: &str, words: usize, lines: usize, chars: usize) -> FileStats {
        FileStats {
            filename: filename.into(),
            words: WordCount::new(words),
            lines: LineCount::new(lines),
            chars: CharCount::new(chars),
            unique_words: UniqueWordCount::new(words),
            avg_word_length: AvgWordLength::zero(),
        }
    }

    #[test]
    fn summary_aggregates_metrics() {
        let stats = vec![
            make_stats("a.txt", 5, 10, 80),
            make_stats("b.txt", 0, 1, 0),
            make_stats("c.txt", 2, 4, 20),
        ];

        let summary = Summary::from_stats(&stats);
        assert_eq!(summary.files, 3);
        assert_eq!(summary.words, 7);
        assert_eq!(summary.lines, 15);
        assert_eq!(summary.chars, 100);
    }
}
