//! Input tokenization.
//!
//! Normalizes raw command lines and splits them into positioned words.

/// A whitespace-delimited word and where it sits in the normalized line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedWord {
    /// The word itself
    pub value: String,
    /// Ordinal index among the words of the line
    pub position: usize,
    /// Character offset in the normalized line
    pub offset: usize,
}

/// Tokenizes command input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Collapses every whitespace run to a single space and trims both ends.
    ///
    /// Normalizing an already normalized line returns it unchanged.
    #[must_use]
    pub fn normalize(input: &str) -> String {
        input.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Tokenizes a raw input line into indexed words.
    ///
    /// - Normalizes whitespace first
    /// - Drops empty tokens
    /// - Offsets are measured in characters of the normalized line
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<IndexedWord> {
        let normalized = Self::normalize(input);
        let mut words = Vec::new();
        let mut offset = 0;

        for (position, value) in normalized.split(' ').filter(|w| !w.is_empty()).enumerate() {
            words.push(IndexedWord {
                value: value.to_string(),
                position,
                offset,
            });
            offset += value.chars().count() + 1;
        }

        words
    }
}
