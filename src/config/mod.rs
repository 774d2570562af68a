//! Site configuration management for `quire.toml`.
//!
//! # Sections
//!
//! | Section                | Purpose                                   |
//! |------------------------|-------------------------------------------|
//! | `[base]`               | Site title and url                        |
//! | `[paginate]`           | List-page path policy                     |
//! | `[collections.<name>]` | Page size, template, context per collection |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! url = "https://example.com"
//!
//! [paginate]
//! page_segment = "page"
//!
//! [collections.posts]
//! per_page = 10
//! list_template = "templates/post-list.html"
//! ```

mod base;
mod collection;
pub mod defaults;
mod error;
mod paginate;

pub use base::BaseConfig;
pub use collection::CollectionConfig;
pub use error::ConfigError;
pub use paginate::{FirstPage, PaginateConfig, SlugMode};

use crate::cli::Cli;
use crate::paginate::CollectionResolver;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing quire.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory receiving page descriptors (set from CLI)
    #[serde(skip)]
    #[educe(Default = defaults::cli::output())]
    pub output: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// List-page path policy
    #[serde(default)]
    pub paginate: PaginateConfig,

    /// Per-collection settings, keyed by collection name
    #[serde(default)]
    pub collections: BTreeMap<String, CollectionConfig>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Resolve config and output paths against the CLI root
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let root = Self::normalize_path(root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        let output = cli.output.clone().unwrap_or_else(defaults::cli::output);
        self.output = Self::normalize_path(&root.join(output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate semantic constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.paginate.page_segment.contains('/') {
            bail!(ConfigError::Validation(
                "[paginate.page_segment] must not contain `/`".into()
            ));
        }

        let mut bases: Vec<(&str, String)> = Vec::with_capacity(self.collections.len());
        for (name, collection) in &self.collections {
            if collection.list_template.as_str().trim().is_empty() {
                bail!(ConfigError::Validation(format!(
                    "[collections.{name}.list_template] must not be empty"
                )));
            }

            if let Some(key) = collection.reserved_keys().next() {
                bail!(ConfigError::Validation(format!(
                    "[collections.{name}.context] must not define reserved key `{key}`"
                )));
            }

            let base = self.collection_base(name, collection);
            if base.split('/').any(|segment| segment == "..") {
                bail!(ConfigError::Validation(format!(
                    "[collections.{name}] path `{base}` must not contain `..`"
                )));
            }
            bases.push((name.as_str(), base));
        }

        self.check_overlapping_paths(&bases)
    }

    /// Reject collections whose list pages would land on each other's paths.
    fn check_overlapping_paths(&self, bases: &[(&str, String)]) -> Result<()> {
        for (index, (name, base)) in bases.iter().enumerate() {
            for (other, other_base) in &bases[index + 1..] {
                if base == other_base {
                    bail!(ConfigError::Validation(format!(
                        "[collections.{name}] and [collections.{other}] share the path `{base}`"
                    )));
                }

                let nested = if self.in_page_area(base, other_base) {
                    Some((other, other_base, name))
                } else if self.in_page_area(other_base, base) {
                    Some((name, base, other))
                } else {
                    None
                };
                if let Some((inner, inner_base, outer)) = nested {
                    bail!(ConfigError::Validation(format!(
                        "[collections.{inner}] path `{inner_base}` overlaps the pages of [collections.{outer}]"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl CollectionResolver for SiteConfig {
    fn collection(&self, name: &str) -> Option<&CollectionConfig> {
        self.collections.get(name)
    }
}

// ============================================================================
// Tests
// ============================================================================
