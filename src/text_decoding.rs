use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// @module: Permissive UTF-8 decoding of source files

/// How byte sequences that are not valid UTF-8 are handled
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Drop invalid sequences
    #[default]
    Ignore,
    /// Substitute U+FFFD for each invalid sequence
    Replace,
}

impl std::fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

/// Text recovered from raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText<'a> {
    pub text: Cow<'a, str>,
    // @field: Number of invalid sequences dropped or replaced
    pub invalid_sequences: usize,
}

impl DecodedText<'_> {
    pub fn is_lossless(&self) -> bool {
        self.invalid_sequences == 0
    }
}

/// Decode `bytes` as UTF-8 under `policy`. Never fails.
///
/// Valid input is borrowed as is; a BOM and line endings pass through untouched.
pub fn decode(bytes: &[u8], policy: DecodePolicy) -> DecodedText<'_> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: Cow::Borrowed(text),
            invalid_sequences: 0,
        };
    }

    let mut text = String::with_capacity(bytes.len());
    let mut invalid_sequences = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            invalid_sequences += 1;
            if policy == DecodePolicy::Replace {
                text.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }

    DecodedText {
        text: Cow::Owned(text),
        invalid_sequences,
    }
}
