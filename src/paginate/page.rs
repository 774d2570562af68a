//! Page descriptors handed to a [`PageRegistry`](crate::registry::PageRegistry).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Context keys filled in by the paginator; extra context may not reuse them.
pub const RESERVED_CONTEXT_KEYS: &[&str] =
    &["collection", "limit", "skip", "previousPage", "nextPage"];

/// Extra fields merged into every list page of a collection.
pub type ExtraContext = BTreeMap<String, serde_json::Value>;

/// Opaque identifier of the template rendering a list page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TemplateId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Data attached to one list page, consumed by its template.
///
/// Serializes as a single flat object:
///
/// ```json
/// { "collection": "posts", "filter": "posts", "limit": 10, "skip": 10,
///   "previousPage": "/posts/", "nextPage": "/posts/page/3/" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub collection: String,
    #[serde(flatten)]
    pub extra: ExtraContext,
    pub limit: usize,
    pub skip: usize,
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
}

/// One list page: where it lives, what renders it, and its context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub path: String,
    pub component: TemplateId,
    pub context: PageContext,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> PageDescriptor {
        PageDescriptor {
            path: "/posts/page/2/".into(),
            component: "post-list.html".into(),
            context: PageContext {
                collection: "posts".into(),
                extra: ExtraContext::from([("filter".to_string(), json!("posts"))]),
                limit: 10,
                skip: 10,
                previous_page: Some("/posts/".into()),
                next_page: None,
            },
        }
    }

    #[test]
    fn test_context_serializes_flat_camel_case() {
        let value = serde_json::to_value(descriptor()).unwrap();
        assert_eq!(
            value,
            json!({
                "path": "/posts/page/2/",
                "component": "post-list.html",
                "context": {
                    "collection": "posts",
                    "filter": "posts",
                    "limit": 10,
                    "skip": 10,
                    "previousPage": "/posts/",
                    "nextPage": null
                }
            })
        );
    }

    #[test]
    fn test_context_deserializes_extra_fields() {
        let context: PageContext = serde_json::from_value(json!({
            "collection": "notes",
            "limit": 5,
            "skip": 0,
            "previousPage": null,
            "nextPage": "/notes/page/2/",
            "sort": "date"
        }))
        .unwrap();

        assert_eq!(context.extra.len(), 1);
        assert_eq!(context.extra["sort"], json!("date"));
        assert_eq!(context.next_page.as_deref(), Some("/notes/page/2/"));
    }

    #[test]
    fn test_template_id_display() {
        let id = TemplateId::from("templates/list.html");
        assert_eq!(id.to_string(), "templates/list.html");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("templates/list.html"));
    }
}
