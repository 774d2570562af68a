//! List-page path generation.
//!
//! # Path Policy
//!
//! | Config | page 1 | page 3 |
//! |--------|--------|--------|
//! | defaults | `/posts/` | `/posts/page/3/` |
//! | `first_page = "indexed"` | `/posts/page/1/` | `/posts/page/3/` |
//! | `page_segment = ""` | `/posts/` | `/posts/3/` |
//! | `trailing_slash = false` | `/posts` | `/posts/page/3` |

use super::PaginateError;
use crate::config::{CollectionConfig, FirstPage, SiteConfig};
use crate::utils::slug::slugify_segment;
use anyhow::Result;

/// Maps `(collection, page index)` to a URL path.
///
/// Implementations must be deterministic and give distinct paths to distinct
/// page indices of the same collection. Page indices start at 1.
pub trait PathGenerator {
    fn page_path(&self, collection: &str, page: usize) -> Result<String>;
}

impl<F> PathGenerator for F
where
    F: Fn(&str, usize) -> Result<String>,
{
    fn page_path(&self, collection: &str, page: usize) -> Result<String> {
        self(collection, page)
    }
}

impl SiteConfig {
    /// Base path of a collection: one leading slash, no trailing slash.
    ///
    /// Empty and `.` segments are dropped, so the site root is the only base
    /// that is exactly `/`.
    pub fn collection_base(&self, name: &str, collection: &CollectionConfig) -> String {
        let raw = match &collection.path {
            Some(path) => path.clone(),
            None => slugify_segment(name, self.paginate.slug),
        };
        let segments: Vec<&str> = raw
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect();
        format!("/{}", segments.join("/"))
    }

    /// Whether `candidate` lies in the numbered pages below `base`,
    /// e.g. `/posts/page/2` below `/posts`.
    pub(crate) fn in_page_area(&self, base: &str, candidate: &str) -> bool {
        let base: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
        let candidate: Vec<&str> = candidate.split('/').filter(|s| !s.is_empty()).collect();

        let Some(rest) = candidate.strip_prefix(base.as_slice()) else {
            return false;
        };
        match (self.paginate.page_segment.as_str(), rest.first()) {
            (_, None) => false,
            ("", Some(next)) => next.bytes().all(|b| b.is_ascii_digit()),
            (segment, Some(next)) => *next == segment,
        }
    }
}

impl PathGenerator for SiteConfig {
    fn page_path(&self, collection: &str, page: usize) -> Result<String> {
        let config = self
            .collections
            .get(collection)
            .ok_or_else(|| PaginateError::ConfigurationNotFound(collection.to_owned()))?;
        let base = self.collection_base(collection, config);
        let settings = &self.paginate;

        let mut segments: Vec<String> = Vec::with_capacity(3);
        if base != "/" {
            segments.push(base.trim_start_matches('/').to_owned());
        }
        if page > 1 || settings.first_page == FirstPage::Indexed {
            if !settings.page_segment.is_empty() {
                segments.push(settings.page_segment.clone());
            }
            segments.push(page.to_string());
        }

        if segments.is_empty() {
            return Ok("/".to_owned());
        }

        let mut path = format!("/{}", segments.join("/"));
        if settings.trailing_slash {
            path.push('/');
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(paginate: &str) -> SiteConfig {
        SiteConfig::from_str(&format!(
            r#"
            [base]
            title = "Test"
            {paginate}

            [collections.posts]
            per_page = 10
            list_template = "list.html"

            [collections.notes]
            per_page = 10
            list_template = "list.html"
            path = "/garden/notes/"

            [collections.home]
            per_page = 10
            list_template = "list.html"
            path = "/"

            [collections."Tech Notes"]
            per_page = 10
            list_template = "list.html"
        "#
        ))
        .unwrap()
    }

    #[test]
    fn test_default_policy() {
        let config = site("");
        assert_eq!(config.page_path("posts", 1).unwrap(), "/posts/");
        assert_eq!(config.page_path("posts", 2).unwrap(), "/posts/page/2/");
        assert_eq!(config.page_path("posts", 13).unwrap(), "/posts/page/13/");
    }

    #[test]
    fn test_explicit_collection_path() {
        let config = site("");
        assert_eq!(config.page_path("notes", 1).unwrap(), "/garden/notes/");
        assert_eq!(config.page_path("notes", 2).unwrap(), "/garden/notes/page/2/");
    }

    #[test]
    fn test_root_collection() {
        let config = site("");
        assert_eq!(config.page_path("home", 1).unwrap(), "/");
        assert_eq!(config.page_path("home", 2).unwrap(), "/page/2/");
    }

    #[test]
    fn test_indexed_first_page() {
        let config = site("[paginate]\nfirst_page = \"indexed\"");
        assert_eq!(config.page_path("posts", 1).unwrap(), "/posts/page/1/");
        assert_eq!(config.page_path("home", 1).unwrap(), "/page/1/");
    }

    #[test]
    fn test_empty_page_segment() {
        let config = site("[paginate]\npage_segment = \"\"\nfirst_page = \"indexed\"");
        assert_eq!(config.page_path("posts", 1).unwrap(), "/posts/1/");
        assert_eq!(config.page_path("posts", 2).unwrap(), "/posts/2/");
    }

    #[test]
    fn test_without_trailing_slash() {
        let config = site("[paginate]\ntrailing_slash = false");
        assert_eq!(config.page_path("posts", 1).unwrap(), "/posts");
        assert_eq!(config.page_path("posts", 2).unwrap(), "/posts/page/2");
        assert_eq!(config.page_path("home", 1).unwrap(), "/");
    }

    #[test]
    fn test_slug_modes_for_collection_name() {
        assert_eq!(site("").page_path("Tech Notes", 1).unwrap(), "/Tech_Notes/");
        assert_eq!(
            site("[paginate]\nslug = \"on\"").page_path("Tech Notes", 2).unwrap(),
            "/tech-notes/page/2/"
        );
    }

    #[test]
    fn test_paths_are_distinct_across_pages() {
        for paginate in ["", "[paginate]\nfirst_page = \"indexed\"", "[paginate]\npage_segment = \"\""] {
            let config = site(paginate);
            let mut paths: Vec<String> = (1..=50)
                .map(|page| config.page_path("home", page).unwrap())
                .collect();
            paths.sort();
            paths.dedup();
            assert_eq!(paths.len(), 50, "collision with `{paginate}`");
        }
    }

    #[test]
    fn test_unknown_collection() {
        let err = site("").page_path("drafts", 1).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PaginateError>(),
            Some(&PaginateError::ConfigurationNotFound("drafts".into()))
        );
    }

    #[test]
    fn test_collection_base_drops_dot_segments() {
        let mut config = site("");
        let collection = config.collections["posts"].clone();
        assert_eq!(config.collection_base(".", &collection), "/");

        config.collections.get_mut("posts").unwrap().path = Some("./blog/./posts/".into());
        assert_eq!(config.page_path("posts", 2).unwrap(), "/blog/posts/page/2/");
    }

    #[test]
    fn test_in_page_area() {
        let config = site("");
        assert!(config.in_page_area("/posts", "/posts/page/2"));
        assert!(config.in_page_area("/", "/page/7"));
        assert!(!config.in_page_area("/posts", "/posts"));
        assert!(!config.in_page_area("/posts", "/posts/archive"));
        assert!(!config.in_page_area("/posts", "/postscript/page/2"));

        let bare = site("[paginate]\npage_segment = \"\"");
        assert!(bare.in_page_area("/posts", "/posts/3"));
        assert!(!bare.in_page_area("/posts", "/posts/archive"));
    }

    #[test]
    fn test_closure_generator() {
        let paths = |collection: &str, page: usize| -> Result<String> {
            Ok(format!("/{collection}/{page}/"))
        };
        assert_eq!(paths.page_path("posts", 1).unwrap(), "/posts/1/");
    }
}
