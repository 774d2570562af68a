//! Page registries: where generated list pages go.
//!
//! - closures `FnMut(PageDescriptor) -> Result<()>`: hand pages to a build pipeline
//! - `Vec<PageDescriptor>`: record pages in memory
//! - [`OutputDir`]: write each page as `<output>/<path>/page.json`

use crate::paginate::PageDescriptor;
use anyhow::{Context, Result, bail};
use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};

/// File name of a written page descriptor
pub const DESCRIPTOR_FILE: &str = "page.json";

/// Receives one descriptor per generated list page.
pub trait PageRegistry {
    fn create_page(&mut self, page: PageDescriptor) -> Result<()>;
}

impl<F> PageRegistry for F
where
    F: FnMut(PageDescriptor) -> Result<()>,
{
    fn create_page(&mut self, page: PageDescriptor) -> Result<()> {
        self(page)
    }
}

impl PageRegistry for Vec<PageDescriptor> {
    fn create_page(&mut self, page: PageDescriptor) -> Result<()> {
        self.push(page);
        Ok(())
    }
}

/// Writes descriptors as pretty-printed JSON below an output directory.
///
/// A file is written at most once per run; a second page mapping to the same
/// file is an error instead of an overwrite.
///
/// | page path | file |
/// |-----------|------|
/// | `/` | `public/page.json` |
/// | `/posts/page/2/` | `public/posts/page/2/page.json` |
#[derive(Debug)]
pub struct OutputDir {
    root: PathBuf,
    written: HashSet<PathBuf>,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: HashSet::new(),
        }
    }

    /// Number of descriptors written so far.
    pub fn written(&self) -> usize {
        self.written.len()
    }

    /// Location of the descriptor file for a page path.
    ///
    /// Only plain segments are accepted, so a page can never land outside `root`.
    pub fn descriptor_path(&self, page_path: &str) -> Result<PathBuf> {
        let relative = Path::new(page_path.trim_start_matches('/'));
        let mut file = self.root.clone();

        for component in relative.components() {
            match component {
                Component::Normal(segment) => file.push(segment),
                Component::CurDir => {}
                _ => bail!("page path `{page_path}` escapes the output directory"),
            }
        }

        file.push(DESCRIPTOR_FILE);
        Ok(file)
    }
}

impl PageRegistry for OutputDir {
    fn create_page(&mut self, page: PageDescriptor) -> Result<()> {
        let file = self.descriptor_path(&page.path)?;
        if self.written.contains(&file) {
            bail!(
                "page `{}` would overwrite {} written earlier in this run",
                page.path,
                file.display()
            );
        }
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&page)?;
        fs::write(&file, json)
            .with_context(|| format!("Failed to write page descriptor to {}", file.display()))?;

        self.written.insert(file);
        Ok(())
    }
}
