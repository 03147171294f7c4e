//! CLI support for printing a filtered product listing.
//!
//! The binary delegates to these functions so parsing and listing can be
//! exercised in tests without spawning a process. Flags are applied through
//! [`ListingController`] in a fixed order: owner, category toggles, search,
//! then sort activations.

mod error;

use camino::Utf8PathBuf;
use tracing::debug;

use crate::config::ListingSettings;
use crate::controller::ListingController;
use crate::dataset::Dataset;
use crate::enrich::Catalogue;
use crate::sort::SortKey;

pub use error::CliError;

/// Usage text printed for `--help`.
pub const USAGE: &str = concat!(
    "Usage: product-listing [options]\n",
    "\n",
    "Options:\n",
    "  --dataset <path>      Dataset JSON file (defaults to configuration)\n",
    "  --owner <name>        Show products owned by <name>; \"all\" clears\n",
    "  --category <title>    Toggle a category; repeat to select several\n",
    "  --search <text>       Case-insensitive product name search\n",
    "  --sort <column>       id, name, category, or owner; repeat to cycle\n",
    "                        ascending, descending, unsorted\n",
    "  -h, --help            Print this help output\n",
);

/// Parsed options for the listing CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    dataset_path: Option<Utf8PathBuf>,
    owner: Option<String>,
    categories: Vec<String>,
    search: Option<String>,
    sorts: Vec<SortKey>,
}

impl Options {
    /// Returns the dataset path given on the command line, if any.
    #[must_use]
    pub const fn dataset_path(&self) -> Option<&Utf8PathBuf> {
        self.dataset_path.as_ref()
    }

    /// Returns the sort activations in the order given.
    #[must_use]
    pub fn sorts(&self) -> &[SortKey] {
        &self.sorts
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into listing options.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, lacks its value, or names an
/// unknown sort column.
///
/// # Example
///
/// ```
/// use product_listing::SortKey;
/// use product_listing::cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--sort".to_owned(), "id".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.sorts(), &[SortKey::Id]);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--dataset" => {
                let value = next_value(&mut args, "--dataset")?;
                options.dataset_path = Some(Utf8PathBuf::from(value));
            }
            "--owner" => options.owner = Some(next_value(&mut args, "--owner")?),
            "--category" => options.categories.push(next_value(&mut args, "--category")?),
            "--search" => options.search = Some(next_value(&mut args, "--search")?),
            "--sort" => {
                let value = next_value(&mut args, "--sort")?;
                options.sorts.push(value.parse::<SortKey>()?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Loads the dataset and applies the parsed options to a fresh controller.
///
/// `--dataset` takes precedence over the configured dataset path.
///
/// # Errors
///
/// Returns [`CliError`] when the dataset path is not UTF-8 or the dataset
/// cannot be loaded.
pub fn build_controller(
    options: &Options,
    settings: &ListingSettings,
) -> Result<ListingController, CliError> {
    let path = options.dataset_path.clone().map_or_else(
        || {
            Utf8PathBuf::from_path_buf(settings.dataset_path()).map_err(|raw| {
                CliError::NonUtf8Path {
                    path: raw.to_string_lossy().into_owned(),
                }
            })
        },
        Ok,
    )?;
    debug!(%path, "loading dataset");

    let dataset = Dataset::from_path(&path)?;
    let mut controller = ListingController::new(Catalogue::from_dataset(&dataset));

    if let Some(owner) = &options.owner {
        controller.set_owner_filter(owner.as_str());
    }
    for title in &options.categories {
        controller.toggle_category(title.as_str());
    }
    if let Some(search) = &options.search {
        controller.set_search_text(search);
    }
    for key in &options.sorts {
        controller.set_sort(*key);
    }

    Ok(controller)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}
