//! Source record types and dataset loading.
//!
//! A dataset holds the three immutable record collections behind the listing:
//! users, the categories they own, and the products filed under those
//! categories. Datasets are loaded from a versioned JSON document and checked
//! for duplicate ids. References between collections are not checked here;
//! the join stage resolves them to `Option` values.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, RecordKind};

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

/// Sex recorded for a user, used to pick the owner column tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialised as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Serialised as `"f"`.
    #[serde(rename = "f")]
    Female,
}

/// A user who may own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id.
    pub id: u32,
    /// Display name, also the value matched by the owner filter.
    pub name: String,
    /// Recorded sex.
    pub sex: Sex,
}

/// A product category owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category id.
    pub id: u32,
    /// Title shown on category chips and in the table.
    pub title: String,
    /// Short icon, usually a single emoji.
    pub icon: String,
    /// Id of the owning [`User`].
    pub owner_id: u32,
}

/// A raw product record as supplied by the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id.
    pub id: u32,
    /// Product name, the target of the search filter.
    pub name: String,
    /// Id of the [`Category`] the product is filed under.
    pub category_id: u32,
}

/// The three record collections behind a product listing.
///
/// # Example
///
/// ```
/// use product_listing::Dataset;
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Roma", "sex": "m"}],
///     "categories": [{"id": 1, "title": "Drinks", "icon": "🍺", "ownerId": 1}],
///     "products": [{"id": 1, "name": "Milk", "categoryId": 1}]
/// }"#;
///
/// let dataset = Dataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.products().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Dataset {
    /// Builds a dataset from in-memory collections.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DuplicateId`] when two records of the same kind
    /// share an id.
    pub fn try_new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, DatasetError> {
        ensure_unique_ids(RecordKind::User, users.iter().map(|user| user.id))?;
        ensure_unique_ids(
            RecordKind::Category,
            categories.iter().map(|category| category.id),
        )?;
        ensure_unique_ids(
            RecordKind::Product,
            products.iter().map(|product| product.id),
        )?;

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - Any collection repeats an id
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::try_new(raw.users, raw.categories, raw.products)
    }

    /// Loads a dataset from a file inside a capability-scoped directory.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, file_name: &Utf8Path) -> Result<Self, DatasetError> {
        let contents = dir
            .read_to_string(file_name)
            .map_err(|e| DatasetError::IoError {
                path: file_name.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Loads a dataset from a path, opening its parent directory with ambient
    /// authority.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IoError`] if the parent directory cannot be
    /// opened or the path has no file name, and any error raised by
    /// [`Dataset::from_file`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, DatasetError> {
        let io_error = |message: String| DatasetError::IoError {
            path: path.to_path_buf(),
            message,
        };

        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("path has no file name".to_owned()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_file(&dir, Utf8Path::new(file_name)).map_err(|err| match err {
            DatasetError::IoError { message, .. } => io_error(message),
            other => other,
        })
    }

    /// Returns all users in dataset order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns all categories in dataset order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns all raw products in dataset order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

fn ensure_unique_ids(
    kind: RecordKind,
    ids: impl Iterator<Item = u32>,
) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawDataset {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}
