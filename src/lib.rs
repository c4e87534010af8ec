//! Creator/offspring lineage trees.
//!
//! A [`Bloodline`] stores vampires in a generational arena. Each vampire has at
//! most one creator and any number of offspring; the queries cover seniority,
//! name lookup, descendant counting and filtering, and closest common ancestors.

use std::path::Path;

use generational_arena::Index;
use tracing::instrument;

pub mod config;
pub mod domain;
pub mod errors;
pub mod tree_traits;
pub mod util;

pub use domain::{Ancestors, Bloodline, DomainError, LineageNode, SubtreeIterator, TreeResult, Vampire};
pub use errors::{BloodlineError, BloodlineResult};
pub use generational_arena::Index as NodeIndex;

use crate::config::Settings;

/// All millennials below (and including) `root`, using the threshold from layered settings.
///
/// See [`Settings::load`] for how `config_file` and the environment are merged.
#[instrument(level = "debug", skip(bloodline))]
pub fn millennials_from_settings(
    bloodline: &Bloodline,
    root: Index,
    config_file: Option<&Path>,
) -> BloodlineResult<Vec<Index>> {
    let settings = Settings::load(config_file)?;
    Ok(bloodline.millennials(root, settings.millennial_threshold)?)
}
