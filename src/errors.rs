use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Longest prefix of rejected input, in bytes, kept inside a [`SpellingError`].
pub const MAX_REPORTED_INPUT: usize = 64;

/// Conversion errors raised when external data is mapped back onto a spelled enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellingError {
    /// The text does not match any entry of the name table.
    ///
    /// `input` keeps at most [`MAX_REPORTED_INPUT`] bytes of the rejected text;
    /// `input_len` is the length of the whole text.
    UnknownSpelling {
        type_name: &'static str,
        input: String,
        input_len: usize,
        expected: &'static [&'static str],
    },
    /// The ordinal is not below the type's count.
    OrdinalOutOfRange {
        type_name: &'static str,
        ordinal: usize,
        count: usize,
    },
}

impl SpellingError {
    pub fn unknown_spelling(
        type_name: &'static str,
        text: &str,
        expected: &'static [&'static str],
    ) -> Self {
        let mut end = text.len().min(MAX_REPORTED_INPUT);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        Self::UnknownSpelling {
            type_name,
            input: text[..end].to_owned(),
            input_len: text.len(),
            expected,
        }
    }

    /// Name of the enum the conversion targeted.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UnknownSpelling { type_name, .. } | Self::OrdinalOutOfRange { type_name, .. } => {
                *type_name
            }
        }
    }

    pub fn is_unknown_spelling(&self) -> bool {
        matches!(self, Self::UnknownSpelling { .. })
    }
}

impl Display for SpellingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::UnknownSpelling {
                type_name,
                input,
                input_len,
                expected,
            } => {
                write!(f, "unknown {} spelling {:?}", type_name, input)?;
                if input.len() < *input_len {
                    write!(f, " (truncated from {} bytes)", input_len)?;
                }
                write!(f, ", expected one of: {}", expected.join(", "))
            }
            Self::OrdinalOutOfRange {
                type_name,
                ordinal,
                count,
            } => write!(
                f,
                "ordinal {} out of range for {} (count is {})",
                ordinal, type_name, count
            ),
        }
    }
}

impl Error for SpellingError {}

pub type SpellingResult<T> = Result<T, SpellingError>;
