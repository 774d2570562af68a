//! `quire build`: write page descriptors into the output directory.

use crate::{
    config::SiteConfig,
    log,
    paginate::{CollectionCount, generate_list_pages},
    plan::report_collections,
    registry::OutputDir,
};
use anyhow::{Context, Result};
use std::fs;

/// Write one `page.json` per list page below `config.output`.
///
/// Returns the number of descriptors written. With `clean`, the output
/// directory is removed first.
pub fn build_pages(config: &SiteConfig, counts: &CollectionCount, clean: bool) -> Result<usize> {
    let output_dir = &config.output;

    if clean && output_dir.exists() {
        fs::remove_dir_all(output_dir).with_context(|| {
            format!("Failed to clear output directory {}", output_dir.display())
        })?;
        log!("build"; "cleaned {}", output_dir.display());
    }

    let mut output = OutputDir::new(output_dir);
    let result = generate_list_pages(counts, config, config, &mut output);
    if result.is_err() && output.written() > 0 {
        log!("build"; "stopped after {} pages", output.written());
    }
    result?;

    report_collections("build", config, counts);
    log!(
        "build";
        "wrote {} list pages for {} to {}",
        output.written(),
        config.base.title,
        output_dir.display()
    );
    Ok(output.written())
}
