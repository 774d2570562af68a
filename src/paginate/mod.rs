//! List-page generation for content collections.
//!
//! Given how many items each collection holds, emits one [`PageDescriptor`]
//! per list page. A collection of `total` items with `per_page` items per page
//! gets `ceil(total / per_page)` pages:
//!
//! ```text
//! posts: total = 25, per_page = 10
//!
//!   page 1  /posts/          skip  0  prev -            next /posts/page/2/
//!   page 2  /posts/page/2/   skip 10  prev /posts/        next /posts/page/3/
//!   page 3  /posts/page/3/   skip 20  prev /posts/page/2/ next -
//! ```
//!
//! Configuration lookup, path policy and page registration are collaborators
//! supplied by the caller ([`CollectionResolver`], [`PathGenerator`],
//! [`PageRegistry`]).

mod error;
mod page;
mod paths;

pub use error::PaginateError;
pub use page::{ExtraContext, PageContext, PageDescriptor, RESERVED_CONTEXT_KEYS, TemplateId};
pub use paths::PathGenerator;

use crate::config::CollectionConfig;
use crate::registry::PageRegistry;
use anyhow::Result;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Item totals per collection name. Iterated in ascending name order.
pub type CollectionCount = BTreeMap<String, usize>;

/// Looks up the list-page settings of a collection.
pub trait CollectionResolver {
    fn collection(&self, name: &str) -> Option<&CollectionConfig>;
}

impl CollectionResolver for BTreeMap<String, CollectionConfig> {
    fn collection(&self, name: &str) -> Option<&CollectionConfig> {
        self.get(name)
    }
}

/// Number of list pages needed for `total` items; zero items need zero pages.
#[inline]
pub const fn page_count(total: usize, per_page: NonZeroUsize) -> usize {
    total.div_ceil(per_page.get())
}

/// Create every list page for every collection in `counts`.
///
/// Returns the number of pages handed to `registry`. The first error from the
/// resolver, path generator or registry aborts the run; pages registered
/// before it stay registered.
pub fn generate_list_pages<C, P, R>(
    counts: &CollectionCount,
    resolver: &C,
    paths: &P,
    registry: &mut R,
) -> Result<usize>
where
    C: CollectionResolver + ?Sized,
    P: PathGenerator + ?Sized,
    R: PageRegistry + ?Sized,
{
    let mut created = 0;

    for (collection, &total) in counts {
        let config = resolver
            .collection(collection)
            .ok_or_else(|| PaginateError::ConfigurationNotFound(collection.clone()))?;
        let per_page = config.per_page.get();
        let total_pages = page_count(total, config.per_page);

        for page in 1..=total_pages {
            let previous_page = match page {
                1 => None,
                _ => Some(paths.page_path(collection, page - 1)?),
            };
            let next_page = if page == total_pages {
                None
            } else {
                Some(paths.page_path(collection, page + 1)?)
            };

            registry.create_page(PageDescriptor {
                path: paths.page_path(collection, page)?,
                component: config.list_template.clone(),
                context: PageContext {
                    collection: collection.clone(),
                    extra: config.context.clone(),
                    limit: per_page,
                    skip: (page - 1) * per_page,
                    previous_page,
                    next_page,
                },
            })?;
            created += 1;
        }
    }

    Ok(created)
}
