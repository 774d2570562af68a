//! `[paginate]` section configuration.
//!
//! Controls how list-page paths are generated for every collection.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Where the first list page of a collection lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPage {
    /// Page 1 is the collection root: `/posts/`.
    #[default]
    Collapse,
    /// Page 1 carries its index like every other page: `/posts/page/1/`.
    Indexed,
}

/// Slugification mode applied to collection names used as path segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Always convert to ASCII slug (e.g., "你好" → "ni-hao").
    On,
    /// Strip URL-hostile characters; keep the rest (default).
    #[default]
    Safe,
    /// No slugification; preserve original text.
    No,
}

/// `[paginate]` section in quire.toml.
///
/// # Example
/// ```toml
/// [paginate]
/// first_page = "collapse"
/// page_segment = "page"
/// trailing_slash = true
/// slug = "on"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PaginateConfig {
    /// Page-1 path policy.
    #[serde(default = "defaults::paginate::first_page")]
    #[educe(Default = defaults::paginate::first_page())]
    pub first_page: FirstPage,

    /// Segment placed before the page index; empty gives `/posts/2/`.
    #[serde(default = "defaults::paginate::page_segment")]
    #[educe(Default = defaults::paginate::page_segment())]
    pub page_segment: String,

    /// End every generated path with `/`.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub trailing_slash: bool,

    /// Slug mode for collection names without an explicit `path`.
    #[serde(default = "defaults::paginate::slug")]
    #[educe(Default = defaults::paginate::slug())]
    pub slug: SlugMode,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_paginate_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"
        "#,
        )
        .unwrap();

        assert_eq!(config.paginate.first_page, FirstPage::Collapse);
        assert_eq!(config.paginate.page_segment, "page");
        assert!(config.paginate.trailing_slash);
        assert_eq!(config.paginate.slug, SlugMode::Safe);
    }

    #[test]
    fn test_paginate_custom() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"
            [paginate]
            first_page = "indexed"
            page_segment = ""
            trailing_slash = false
            slug = "on"
        "#,
        )
        .unwrap();

        assert_eq!(config.paginate.first_page, FirstPage::Indexed);
        assert_eq!(config.paginate.page_segment, "");
        assert!(!config.paginate.trailing_slash);
        assert_eq!(config.paginate.slug, SlugMode::On);
    }

    #[test]
    fn test_invalid_first_page_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [base]
            title = "Test"
            [paginate]
            first_page = "root"
        "#,
        );
        assert!(result.is_err());
    }
}
