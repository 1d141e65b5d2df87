use std::{fmt, io, iter::Copied, slice::Iter};

use crate::{
    errors::{SpellingError, SpellingResult},
    table,
};

/// Iterator over every variant of a [`Spelled`] type, in ordinal order.
pub type Variants<T> = Copied<Iter<'static, T>>;

/// A fieldless enum with a compile-time name table.
///
/// Implemented by [`spelled_enum!`](crate::spelled_enum) and `#[derive(Spelled)]`,
/// which emit [`NAMES`](Spelled::NAMES) and [`VARIANTS`](Spelled::VARIANTS) from the
/// same variant list. Entry `i` of both tables belongs to the variant whose
/// ordinal is `i`, and both hold exactly [`COUNT`](Spelled::COUNT) entries.
///
/// Implementing this trait by hand is possible but loses that guarantee.
pub trait Spelled: Copy + Eq + 'static {
    /// Name of the enum as declared.
    const TYPE_NAME: &'static str;

    /// Spelling of each variant, indexed by ordinal.
    const NAMES: &'static [&'static str];

    /// Every variant, indexed by ordinal.
    const VARIANTS: &'static [Self];

    /// Number of variants. One past the largest ordinal.
    const COUNT: usize = Self::NAMES.len();

    /// Zero-based position of the variant in its declaration.
    fn ordinal(self) -> usize;

    /// Canonical spelling of the variant. Constant time.
    #[inline]
    fn name(self) -> &'static str {
        Self::NAMES[self.ordinal()]
    }

    /// Maps a spelling back to its variant.
    ///
    /// Matching is exact and case-sensitive. Text that is not in the table is
    /// reported as [`SpellingError::UnknownSpelling`]; callers that only feed back
    /// spellings they produced themselves can treat that as a broken invariant.
    fn from_name(text: &str) -> SpellingResult<Self> {
        match table::position(Self::NAMES, text) {
            Some(ordinal) => Ok(Self::VARIANTS[ordinal]),
            None => {
                tracing::trace!(
                    target: "enum_spelling",
                    type_name = Self::TYPE_NAME,
                    input_len = text.len(),
                    "no matching spelling"
                );
                Err(SpellingError::unknown_spelling(
                    Self::TYPE_NAME,
                    text,
                    Self::NAMES,
                ))
            }
        }
    }

    #[inline]
    fn is_spelling(text: &str) -> bool {
        table::position(Self::NAMES, text).is_some()
    }

    #[inline]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Like [`from_ordinal`](Spelled::from_ordinal) but reports the failure.
    fn try_from_ordinal(ordinal: usize) -> SpellingResult<Self> {
        Self::from_ordinal(ordinal).ok_or(SpellingError::OrdinalOutOfRange {
            type_name: Self::TYPE_NAME,
            ordinal,
            count: Self::COUNT,
        })
    }

    #[inline]
    fn count() -> usize {
        Self::COUNT
    }

    fn iter() -> Variants<Self> {
        Self::VARIANTS.iter().copied()
    }

    /// Writes the spelling into a text sink.
    fn render<W: fmt::Write + ?Sized>(self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.name())
    }

    /// Writes the spelling into a byte sink.
    fn write_to<W: io::Write + ?Sized>(self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.name().as_bytes())
    }
}
