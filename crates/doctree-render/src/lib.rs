//! HTML page composition and static site output for doctree.
//!
//! [`PageRenderer`] turns one page of a [`doctree_site::PageTree`] into a
//! complete HTML document. [`StaticSiteBuilder`] renders every page of the
//! tree into an output directory.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use doctree_render::{BuildOptions, PageRenderer, RenderConfig, StaticSiteBuilder};
//! use doctree_site::{LoadOptions, Navigator, load_tree};
//!
//! let tree = load_tree(Path::new("assets/docs.json"), &LoadOptions::default())?;
//! let renderer = PageRenderer::new(Navigator::new(&tree), RenderConfig::default());
//! let report = StaticSiteBuilder::new(&renderer, BuildOptions::default())
//!     .build(Path::new("dist"))?;
//! # Ok(())
//! # }
//! ```

mod body;
mod builder;
mod html;
mod layout;
mod renderer;
mod types;

pub use builder::{
    BuildError, BuildOptions, BuildReport, CopyDir, PageFailure, StaticSiteBuilder, output_path,
};
pub use html::{escape, resolve_url, rewrite_links};
pub use renderer::{PageRenderer, RenderConfig, RenderError, RenderedPage};
pub use types::{func_path, type_class, type_link, type_route};
