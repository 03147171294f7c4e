//! Sort stage and the tri-state sort cycle.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::enrich::EnrichedProduct;

/// Column a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Numeric product id.
    Id,
    /// Product name.
    Name,
    /// Category title.
    Category,
    /// Owner name.
    Owner,
}

impl SortKey {
    /// Every key in table column order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::Category, Self::Owner];

    /// Returns the canonical lower-case name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::Owner => "owner",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a sort key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{value}' (expected id, name, category, or owner)")]
pub struct ParseSortKeyError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    /// Parses a key name. Column headings `product` and `user` are accepted
    /// as aliases for `name` and `owner`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" | "product" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "owner" | "user" => Ok(Self::Owner),
            _ => Err(ParseSortKeyError {
                value: value.to_owned(),
            }),
        }
    }
}

/// Selected sort key and direction.
///
/// With no key the listing keeps its filtered order and `reversed` has no
/// effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    /// Active key, if any.
    pub key: Option<SortKey>,
    /// Flip the comparison for the active key.
    pub reversed: bool,
}

impl SortState {
    /// The unsorted state.
    #[must_use]
    pub const fn unsorted() -> Self {
        Self {
            key: None,
            reversed: false,
        }
    }

    /// Ascending order on `key`.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key: Some(key),
            reversed: false,
        }
    }

    /// Descending order on `key`.
    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self {
            key: Some(key),
            reversed: true,
        }
    }

    /// Advances the tri-state cycle for a column activation.
    ///
    /// A different column starts ascending; the same column goes from
    /// ascending to descending, then back to unsorted.
    ///
    /// # Example
    ///
    /// ```
    /// use product_listing::{SortKey, SortState};
    ///
    /// let first = SortState::unsorted().cycle(SortKey::Name);
    /// let second = first.cycle(SortKey::Name);
    /// let third = second.cycle(SortKey::Name);
    ///
    /// assert_eq!(first, SortState::ascending(SortKey::Name));
    /// assert_eq!(second, SortState::descending(SortKey::Name));
    /// assert_eq!(third, SortState::unsorted());
    /// ```
    #[must_use]
    pub fn cycle(self, key: SortKey) -> Self {
        match self.key {
            Some(current) if current == key => {
                if self.reversed {
                    Self::unsorted()
                } else {
                    Self::descending(key)
                }
            }
            _ => Self::ascending(key),
        }
    }
}

/// Compares text the way a locale-aware collation orders plain words.
///
/// Letters are compared without accents or case first, so `"Éclair"` sorts
/// between `"Dates"` and `"Fig"`. Ties are broken by accents (unaccented
/// first) and then by case (lower-case first).
///
/// # Example
///
/// ```
/// use product_listing::compare_text;
///
/// let mut names = vec!["Zucchini", "Éclair", "Fig", "Eggs"];
/// names.sort_by(|left, right| compare_text(left, right));
///
/// assert_eq!(names, vec!["Éclair", "Eggs", "Fig", "Zucchini"]);
/// ```
#[must_use]
pub fn compare_text(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(&base_letters(right))
        .then_with(|| accented_letters(left).cmp(&accented_letters(right)))
        .then_with(|| right.cmp(left))
}

/// Lower-cased letters with diacritics removed.
fn base_letters(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lower-cased letters in decomposed form, keeping diacritics.
fn accented_letters(text: &str) -> String {
    text.to_lowercase().nfd().collect()
}

/// Unresolved values sort below every resolved one.
fn compare_optional_text(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(l), Some(r)) => compare_text(l, r),
    }
}

/// Ascending comparison of two products on `key`.
#[must_use]
pub fn compare_by(key: SortKey, left: &EnrichedProduct, right: &EnrichedProduct) -> Ordering {
    match key {
        SortKey::Id => left.id.cmp(&right.id),
        SortKey::Name => compare_text(&left.name, &right.name),
        SortKey::Category => compare_optional_text(left.category_title(), right.category_title()),
        SortKey::Owner => compare_optional_text(left.owner_name(), right.owner_name()),
    }
}

/// Orders rows according to `state`.
///
/// The sort is stable: rows that compare equal keep their input order in
/// both directions. Without a key the input is returned unchanged.
#[must_use]
pub fn sort_products(
    mut rows: Vec<&EnrichedProduct>,
    state: SortState,
) -> Vec<&EnrichedProduct> {
    let Some(key) = state.key else {
        return rows;
    };

    rows.sort_by(|left, right| {
        let ordering = compare_by(key, left, right);
        if state.reversed {
            ordering.reverse()
        } else {
            ordering
        }
    });
    rows
}
