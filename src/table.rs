//! Name table helpers.
//!
//! A name table is a `&'static [&'static str]` whose entry `i` is the spelling of
//! the variant with ordinal `i`. The `const fn`s here run inside the `const`
//! assertions emitted by [`spelled_enum!`](crate::spelled_enum), so a malformed
//! table stops the build instead of surfacing at runtime.

/// Byte-wise string equality usable in const context.
pub const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns true if any two entries of the table are equal.
pub const fn has_duplicates(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

/// Returns true if the table holds an empty spelling.
pub const fn has_empty(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        if names[i].is_empty() {
            return true;
        }
        i += 1;
    }
    false
}

/// Strips the `r#` prefix `stringify!` keeps on raw identifiers.
pub const fn unraw(ident: &str) -> &str {
    let bytes = ident.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'r' && bytes[1] == b'#' {
        let (_, rest) = bytes.split_at(2);
        if let Ok(rest) = core::str::from_utf8(rest) {
            return rest;
        }
    }
    ident
}

/// Linear scan for an exact, case-sensitive match.
#[inline]
pub fn position(names: &[&str], text: &str) -> Option<usize> {
    names.iter().position(|name| *name == text)
}
