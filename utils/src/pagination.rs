// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A numeric pagination field.
///
/// `NotANumber` is what unparseable attribute input turns into. It never
/// raises: arithmetic touching it yields `NotANumber` again and comparisons
/// touching it are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageValue {
    Number(i64),
    NotANumber,
}

impl PageValue {
    /// Returns the inner integer, if any
    pub fn number(self) -> Option<i64> {
        match self {
            PageValue::Number(n) => Some(n),
            PageValue::NotANumber => None,
        }
    }

    pub fn is_nan(self) -> bool {
        self == PageValue::NotANumber
    }

    /// Numeric equality, false whenever either side is `NotANumber`
    pub fn equals(self, other: PageValue) -> bool {
        matches!((self, other), (PageValue::Number(a), PageValue::Number(b)) if a == b)
    }

    fn combine(self, other: PageValue, op: impl FnOnce(i64, i64) -> Option<i64>) -> PageValue {
        match (self, other) {
            (PageValue::Number(a), PageValue::Number(b)) => op(a, b).into(),
            _ => PageValue::NotANumber,
        }
    }
}

impl From<i64> for PageValue {
    fn from(value: i64) -> Self {
        PageValue::Number(value)
    }
}

impl From<Option<i64>> for PageValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(PageValue::NotANumber, PageValue::Number)
    }
}

impl fmt::Display for PageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageValue::Number(n) => write!(f, "{n}"),
            PageValue::NotANumber => write!(f, "NaN"),
        }
    }
}

/// Holds the pagination state of a widget, one field per observed attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PaginationConfig {
    /// 1-based index of the page being displayed
    pub current_page: PageValue,
    pub total_count: PageValue,
    pub per_page: PageValue,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            current_page: PageValue::Number(0),
            total_count: PageValue::Number(0),
            per_page: PageValue::Number(10),
        }
    }
}

impl PaginationConfig {
    pub fn new(current_page: i64, total_count: i64, per_page: i64) -> Self {
        PaginationConfig {
            current_page: current_page.into(),
            total_count: total_count.into(),
            per_page: per_page.into(),
        }
    }

    /// Number of the first item shown: `per_page * (current_page - 1) + 1`
    pub fn first_item(&self) -> PageValue {
        let offset = self
            .current_page
            .combine(1.into(), i64::checked_sub)
            .combine(self.per_page, i64::checked_mul);
        offset.combine(1.into(), i64::checked_add)
    }

    /// Number of the last item of the page, not clamped to the total count
    pub fn last_item(&self) -> PageValue {
        self.first_item()
            .combine(self.per_page, i64::checked_add)
            .combine(1.into(), i64::checked_sub)
    }

    /// `ceil(total_count / per_page)`, `NotANumber` for a zero page size
    pub fn last_page(&self) -> PageValue {
        self.total_count.combine(self.per_page, ceil_div)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page.equals(1.into())
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page.equals(self.last_page())
    }

    /// The `"{first} to {last} of {total}"` summary line
    pub fn summary(&self) -> String {
        format!(
            "{} to {} of {}",
            self.first_item(),
            self.last_item(),
            self.total_count
        )
    }

    /// Item numbers that actually exist on the current page.
    ///
    /// Returns `None` when any field is `NotANumber`; the range may be empty.
    pub fn item_range(&self) -> Option<RangeInclusive<i64>> {
        let first = self.first_item().number()?;
        let last = self.last_item().number()?;
        let total = self.total_count.number()?;

        Some(first.max(1)..=last.min(total))
    }
}

fn ceil_div(numerator: i64, denominator: i64) -> Option<i64> {
    let quotient = numerator.checked_div(denominator)?;
    let remainder = numerator.checked_rem(denominator)?;
    if remainder != 0 && ((remainder > 0) == (denominator > 0)) {
        quotient.checked_add(1)
    } else {
        Some(quotient)
    }
}

/// Identifies a navigation request emitted by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationAction {
    Previous,
    Next,
}

impl PaginationAction {
    /// Name of the event dispatched to listeners
    pub fn event_name(&self) -> &'static str {
        match self {
            PaginationAction::Previous => "previous",
            PaginationAction::Next => "next",
        }
    }
}

impl fmt::Display for PaginationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}
