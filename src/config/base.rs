//! `[base]` section configuration.
//!
//! Site-level information shared by every collection.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in quire.toml.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// url = "https://myblog.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, shown in `plan` and `build` logs.
    pub title: String,

    /// Base URL used to turn list-page paths into permalinks.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,
}

impl BaseConfig {
    /// Absolute URL for a site path, or `None` when `url` is unset.
    ///
    /// `https://example.com/` + `/posts/page/2/` → `https://example.com/posts/page/2/`
    pub fn permalink(&self, path: &str) -> Option<String> {
        let base = self.url.as_deref()?.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Some(format!("{base}/{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "KawaYww"
            url = "https://kawayww.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "KawaYww");
        assert_eq!(config.base.url, Some("https://kawayww.com".to_string()));
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]\ntitle = \"Test\"").unwrap();
        assert_eq!(config.base.url, None);

        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.base.title, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            author = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_permalink() {
        let base = BaseConfig {
            url: Some("https://example.com/".into()),
            ..Default::default()
        };
        assert_eq!(
            base.permalink("/posts/page/2/").as_deref(),
            Some("https://example.com/posts/page/2/")
        );
        assert_eq!(base.permalink("/").as_deref(), Some("https://example.com/"));
    }

    #[test]
    fn test_permalink_with_subpath() {
        let base = BaseConfig {
            url: Some("https://example.com/blog".into()),
            ..Default::default()
        };
        assert_eq!(
            base.permalink("/notes/").as_deref(),
            Some("https://example.com/blog/notes/")
        );
    }

    #[test]
    fn test_permalink_without_url() {
        assert_eq!(BaseConfig::default().permalink("/posts/"), None);
    }
}
