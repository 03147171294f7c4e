//! Presentation view model.
//!
//! Turns catalogue data and the current selections into plain values a front
//! end can draw: owner tabs, category chips, sortable column headers, and
//! table rows. [`render_table`] draws a listing as fixed-width text.

use unicode_width::UnicodeWidthStr;

use crate::dataset::{Category, Sex, User};
use crate::enrich::EnrichedProduct;
use crate::filter::{ALL_OWNERS, FilterState, OwnerFilter};
use crate::pipeline::Listing;
use crate::sort::{SortKey, SortState};

/// Placeholder shown instead of the table when nothing matches.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// Label of the tab and chip that clear a filter.
const ALL_LABEL: &str = "All";

/// One entry in the owner tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerTab {
    /// Text shown on the tab.
    pub label: String,
    /// Value to pass to `ListingController::set_owner_filter`.
    pub selection: String,
    /// Whether the tab matches the current owner filter.
    pub active: bool,
}

/// Builds the owner tabs: "All" first, then one tab per user.
#[must_use]
pub fn owner_tabs(users: &[User], owner: &OwnerFilter) -> Vec<OwnerTab> {
    let all = OwnerTab {
        label: ALL_LABEL.to_owned(),
        selection: ALL_OWNERS.to_owned(),
        active: *owner == OwnerFilter::All,
    };
    let per_user = users.iter().map(|user| OwnerTab {
        label: user.name.clone(),
        selection: user.name.clone(),
        active: owner.name() == Some(user.name.as_str()),
    });
    std::iter::once(all).chain(per_user).collect()
}

/// One entry in the category chip strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    /// Text shown on the chip.
    pub label: String,
    /// Category title to toggle, or `None` for the chip clearing the
    /// selection.
    pub title: Option<String>,
    /// Whether the chip is highlighted.
    pub active: bool,
}

/// Builds the category chips: "All" first, highlighted while nothing is
/// selected, then one chip per category.
#[must_use]
pub fn category_chips(categories: &[Category], filter: &FilterState) -> Vec<CategoryChip> {
    let all = CategoryChip {
        label: ALL_LABEL.to_owned(),
        title: None,
        active: filter.categories.is_empty(),
    };
    let per_category = categories.iter().map(|category| CategoryChip {
        label: category.title.clone(),
        title: Some(category.title.clone()),
        active: filter.categories.contains(&category.title),
    });
    std::iter::once(all).chain(per_category).collect()
}

/// Sort direction marker for a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// The column is not the active sort key.
    Unsorted,
    /// The column sorts ascending.
    Ascending,
    /// The column sorts descending.
    Descending,
}

impl SortIndicator {
    /// Returns the indicator for `key` under `state`.
    #[must_use]
    pub fn for_column(state: SortState, key: SortKey) -> Self {
        match state.key {
            Some(active) if active == key && state.reversed => Self::Descending,
            Some(active) if active == key => Self::Ascending,
            _ => Self::Unsorted,
        }
    }

    /// Returns the Font Awesome icon class for the indicator.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Unsorted => "fa-sort",
            Self::Ascending => "fa-sort-up",
            Self::Descending => "fa-sort-down",
        }
    }
}

/// A sortable table column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Key sorted when the header is activated.
    pub key: SortKey,
    /// Heading text.
    pub heading: &'static str,
    /// Current sort marker.
    pub indicator: SortIndicator,
}

const fn heading_for(key: SortKey) -> &'static str {
    match key {
        SortKey::Id => "ID",
        SortKey::Name => "Product",
        SortKey::Category => "Category",
        SortKey::Owner => "User",
    }
}

/// Builds the column headers in table order.
#[must_use]
pub fn column_headers(state: SortState) -> Vec<ColumnHeader> {
    SortKey::ALL
        .into_iter()
        .map(|key| ColumnHeader {
            key,
            heading: heading_for(key),
            indicator: SortIndicator::for_column(state, key),
        })
        .collect()
}

/// Text colour for the owner cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerTone {
    /// Male owners.
    Link,
    /// Female owners.
    Danger,
    /// Unresolved owner.
    Muted,
}

impl OwnerTone {
    /// Returns the CSS class for the tone.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Link => "has-text-link",
            Self::Danger => "has-text-danger",
            Self::Muted => "has-text-grey",
        }
    }
}

/// Display values for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Product id.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// `"{icon} - {title}"`, or empty when the category is unresolved.
    pub category_label: String,
    /// Owner name, or empty when unresolved.
    pub owner_name: String,
    /// Colour of the owner cell.
    pub owner_tone: OwnerTone,
}

impl ProductRow {
    fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.category_label.clone(),
            self.owner_name.clone(),
        ]
    }
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        let category_label = product
            .category
            .as_ref()
            .map(|category| format!("{} - {}", category.icon, category.title))
            .unwrap_or_default();
        let (owner_name, owner_tone) = product.owner.as_ref().map_or_else(
            || (String::new(), OwnerTone::Muted),
            |owner| {
                let tone = match owner.sex {
                    Sex::Male => OwnerTone::Link,
                    Sex::Female => OwnerTone::Danger,
                };
                (owner.name.clone(), tone)
            },
        );

        Self {
            id: product.id,
            name: product.name.clone(),
            category_label,
            owner_name,
            owner_tone,
        }
    }
}

/// Draws a listing as a fixed-width text table, or returns
/// [`NO_MATCHES_MESSAGE`] when the listing is empty.
///
/// Columns are aligned by terminal display width, so emoji icons count as
/// two columns.
#[must_use]
pub fn render_table(listing: &Listing<'_>) -> String {
    if listing.is_empty() {
        return NO_MATCHES_MESSAGE.to_owned();
    }

    let headings = SortKey::ALL.map(|key| heading_for(key).to_owned());
    let rows: Vec<[String; 4]> = listing
        .rows()
        .iter()
        .map(|product| ProductRow::from(*product).cells())
        .collect();

    let mut widths = headings.clone().map(|heading| heading.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(&headings, &widths));
    lines.push(separator);
    lines.extend(rows.iter().map(|row| format_line(row, &widths)));
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect();
    padded.join(" | ").trim_end().to_owned()
}
