// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::str::FromStr;

use crate::pagination::{PageValue, PaginationConfig};

/// The attributes a pagination widget observes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    CurrentPage,
    TotalCount,
    PerPage,
}

impl Attribute {
    pub const OBSERVED: [Attribute; 3] = [
        Attribute::CurrentPage,
        Attribute::TotalCount,
        Attribute::PerPage,
    ];

    /// Markup name of the attribute
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::CurrentPage => "current-page",
            Attribute::TotalCount => "total-count",
            Attribute::PerPage => "per-page",
        }
    }

    /// Stores `value` into the config field this attribute is bound to
    pub fn apply(&self, config: &mut PaginationConfig, value: PageValue) {
        match self {
            Attribute::CurrentPage => config.current_page = value,
            Attribute::TotalCount => config.total_count = value,
            Attribute::PerPage => config.per_page = value,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::OBSERVED
            .into_iter()
            .find(|attribute| attribute.name() == s)
            .ok_or_else(|| AttributeError::UnknownAttribute(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The value was stored as `NaN` but the caller should know
    #[error("attribute `{attribute}` expects an integer, got {value:?}")]
    NotANumber { attribute: Attribute, value: String },
    #[error("`{0}` is not an observed attribute")]
    UnknownAttribute(String),
}

/// Parses an attribute value the way markup hosts coerce integers.
///
/// Leading whitespace is skipped, an optional sign and an optional `0x`
/// prefix are accepted, then the longest run of digits is read and anything
/// after it is ignored. No digits at all, or a value that does not fit an
/// `i64`, gives `NotANumber`.
pub fn parse_int(input: &str) -> PageValue {
    let trimmed = input.trim_start_matches(is_js_whitespace);

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits_len = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    let digits = &body[..digits_len];
    if digits.is_empty() {
        return PageValue::NotANumber;
    }

    let Ok(magnitude) = i64::from_str_radix(digits, radix) else {
        tracing::debug!(input, "integer attribute out of range");
        return PageValue::NotANumber;
    };

    if negative {
        PageValue::Number(-magnitude)
    } else {
        PageValue::Number(magnitude)
    }
}

/// White space and line terminators as markup hosts skip them: the Unicode
/// `White_Space` set minus U+0085, plus the byte order mark.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}
