//! Join stage: resolves each product's category and owner.

use std::collections::HashMap;

use tracing::debug;

use crate::dataset::{Category, Dataset, Product, User};

/// A product with its category and the category's owner resolved.
///
/// Either reference is `None` when the id it points at does not exist. An
/// unresolved category always yields an unresolved owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    /// Product id.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Category id as recorded on the raw product.
    pub category_id: u32,
    /// Resolved category, if any.
    pub category: Option<Category>,
    /// Owner of the resolved category, if any.
    pub owner: Option<User>,
}

impl EnrichedProduct {
    /// Returns the resolved category title.
    #[must_use]
    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.title.as_str())
    }

    /// Returns the resolved owner name.
    #[must_use]
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|owner| owner.name.as_str())
    }
}

/// Joins products to their categories and owners, preserving product order.
///
/// When several records share an id the first one wins. Inputs are not
/// modified.
///
/// # Example
///
/// ```
/// use product_listing::{Category, Product, Sex, User, enrich_products};
///
/// let users = [User { id: 10, name: "Max".to_owned(), sex: Sex::Male }];
/// let categories = [Category {
///     id: 1,
///     title: "Fruits".to_owned(),
///     icon: "🍏".to_owned(),
///     owner_id: 10,
/// }];
/// let products = [
///     Product { id: 1, name: "Apple".to_owned(), category_id: 1 },
///     Product { id: 2, name: "Ghost".to_owned(), category_id: 9 },
/// ];
///
/// let enriched = enrich_products(&products, &categories, &users);
/// assert_eq!(enriched[0].owner_name(), Some("Max"));
/// assert!(enriched[1].category.is_none());
/// ```
#[must_use]
pub fn enrich_products(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Vec<EnrichedProduct> {
    let categories_by_id = index_first(categories, |category| category.id);
    let users_by_id = index_first(users, |user| user.id);

    products
        .iter()
        .map(|product| {
            let category = categories_by_id.get(&product.category_id).copied();
            let owner = category.and_then(|found| users_by_id.get(&found.owner_id).copied());
            EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category: category.cloned(),
                owner: owner.cloned(),
            }
        })
        .collect()
}

fn index_first<T>(records: &[T], id_of: impl Fn(&T) -> u32) -> HashMap<u32, &T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(id_of(record)).or_insert(record);
    }
    index
}

/// The enriched product set together with the lists the filter controls
/// are built from.
///
/// Built once from a [`Dataset`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

impl Catalogue {
    /// Runs the join stage over a dataset.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let products = enrich_products(
            dataset.products(),
            dataset.categories(),
            dataset.users(),
        );

        let missing_categories = products
            .iter()
            .filter(|product| product.category.is_none())
            .count();
        let missing_owners = products
            .iter()
            .filter(|product| product.owner.is_none())
            .count();
        if missing_categories > 0 || missing_owners > 0 {
            debug!(
                missing_categories,
                missing_owners, "catalogue contains unresolved references"
            );
        }

        Self {
            users: dataset.users().to_vec(),
            categories: dataset.categories().to_vec(),
            products,
        }
    }

    /// Returns the users offered as owner filters.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the categories offered as category filters.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the enriched products in dataset order.
    #[must_use]
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }
}
