//! Quire - list-page pagination for static sites.
//!
//! Turns per-collection item counts into paged list-page descriptors:
//!
//! ```ignore
//! let config = SiteConfig::from_path(Path::new("quire.toml"))?;
//! let counts = CollectionCount::from([("posts".to_string(), 25)]);
//! let mut pages = Vec::new();
//! generate_list_pages(&counts, &config, &config, &mut pages)?;
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod counts;
pub mod logger;
pub mod paginate;
pub mod plan;
pub mod registry;
pub mod utils;

pub use config::SiteConfig;
pub use paginate::{CollectionCount, generate_list_pages};
