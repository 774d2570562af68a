//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [paginate] Section Defaults
// ============================================================================

pub mod paginate {
    use super::super::{FirstPage, SlugMode};

    pub fn first_page() -> FirstPage {
        FirstPage::default()
    }

    pub fn page_segment() -> String {
        "page".into()
    }

    pub fn slug() -> SlugMode {
        SlugMode::default()
    }
}

// ============================================================================
// CLI Defaults
// ============================================================================

pub mod cli {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public".into()
    }
}
