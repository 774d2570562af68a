//! `[collections.<name>]` section configuration.

use crate::paginate::{ExtraContext, RESERVED_CONTEXT_KEYS, TemplateId};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Per-collection list-page settings.
///
/// # Example
/// ```toml
/// [collections.posts]
/// per_page = 10
/// list_template = "templates/post-list.html"
/// path = "/blog"
///
/// [collections.posts.context]
/// filter = "posts"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Items shown on each list page.
    pub per_page: NonZeroUsize,

    /// Template rendering the list pages, passed through untouched.
    pub list_template: TemplateId,

    /// Base URL path; defaults to `/<slug(name)>`.
    #[serde(default)]
    pub path: Option<String>,

    /// Extra fields merged into every list page's context.
    #[serde(default)]
    pub context: ExtraContext,
}

impl CollectionConfig {
    pub fn new(per_page: NonZeroUsize, list_template: impl Into<TemplateId>) -> Self {
        Self {
            per_page,
            list_template: list_template.into(),
            path: None,
            context: ExtraContext::new(),
        }
    }

    /// Extra context keys that would shadow a generated context field.
    pub fn reserved_keys(&self) -> impl Iterator<Item = &str> {
        self.context
            .keys()
            .map(String::as_str)
            .filter(|key| RESERVED_CONTEXT_KEYS.contains(key))
    }
}
