//! `quire plan`: print the list pages a build would create.

use crate::{
    config::SiteConfig,
    log,
    paginate::{CollectionCount, CollectionResolver, PageDescriptor, generate_list_pages, page_count},
};
use anyhow::Result;
use std::io::{Write, stdout};

/// Generate list pages in memory and print them.
///
/// With `json`, prints one descriptor per line and nothing else.
pub fn plan_pages(config: &SiteConfig, counts: &CollectionCount, json: bool) -> Result<Vec<PageDescriptor>> {
    let mut pages: Vec<PageDescriptor> = Vec::new();
    generate_list_pages(counts, config, config, &mut pages)?;

    let mut stdout = stdout().lock();
    if json {
        for page in &pages {
            writeln!(stdout, "{}", serde_json::to_string(page)?)?;
        }
    } else {
        log!("plan"; "{} list pages for {}", pages.len(), config.base.title);
        report_collections("plan", config, counts);
        for page in &pages {
            let total = counts.get(&page.context.collection).copied().unwrap_or_default();
            writeln!(stdout, "{}", render_row(page, total))?;
        }
    }
    stdout.flush()?;

    Ok(pages)
}

/// Log one line per collection: item count, page count, and first-page permalink.
pub fn report_collections(module: &str, config: &SiteConfig, counts: &CollectionCount) {
    for (name, &total) in counts {
        let Some(collection) = config.collection(name) else {
            continue;
        };
        let pages = page_count(total, collection.per_page);
        let first = config
            .first_page_url(name)
            .map(|url| format!(" at {url}"))
            .unwrap_or_default();
        log!(module; "`{name}`: {total} items, {pages} pages of {}{first}", collection.per_page);
    }
}

/// One human-readable line per page: path, items shown, template.
///
/// The window ends at `total` on the last page.
fn render_row(page: &PageDescriptor, total: usize) -> String {
    let context = &page.context;
    let end = context.skip.saturating_add(context.limit).min(total);
    format!(
        "{:<32} items {:>5}..{:<5} {}",
        page.path, context.skip, end, page.component
    )
}

impl SiteConfig {
    /// Permalink of a collection's first list page, when `[base] url` is set.
    fn first_page_url(&self, collection: &str) -> Option<String> {
        use crate::paginate::PathGenerator;

        let path = self.page_path(collection, 1).ok()?;
        self.base.permalink(&path)
    }
}
