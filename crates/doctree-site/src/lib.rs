//! Page tree model and navigation derivation for doctree.
//!
//! This crate provides:
//! - [`PageTree`]: the immutable, arena-backed documentation tree
//! - [`Navigator`]: breadcrumbs, previous/next and sidebar state per page
//! - [`TranslationClassifier`]: translation banners per status
//! - Base-path aware URL helpers ([`join_path`], [`apply_base_path`], [`remove_base_path`])
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use doctree_site::{LoadOptions, Navigator, load_tree};
//!
//! let tree = load_tree(Path::new("assets/docs.json"), &LoadOptions::default())?;
//! let nav = Navigator::new(&tree);
//!
//! let page_nav = nav.page_navigation("/docs/reference/")?;
//! # Ok(())
//! # }
//! ```

mod breadcrumbs;
mod error;
mod loader;
mod navigation;
mod page;
mod path;
mod sequence;
mod translation;
mod tree;

pub use breadcrumbs::{BreadcrumbItem, resolve_breadcrumbs};
pub use error::{NavError, TreeError};
pub use loader::{LoadOptions, load_tree, parse_tree};
pub use navigation::{NavItem, Navigator, PageLink, PageNavigation};
pub use page::{
    Body, CategoryItem, CategoryModel, FuncModel, GroupModel, OutlineItem, Page, ParamModel,
    StrParam, SymbolModel, SymbolsModel, TocEntry, TypeModel, flatten_outline,
};
pub use path::{apply_base_path, is_relative, join_path, remove_base_path};
pub use sequence::{Neighbors, PageSequence};
pub use translation::{
    Banner, BannerText, ParseStatusError, StatusMap, Tone, TranslationClassifier,
    TranslationStatus,
};
pub use tree::{PageId, PageTree, PageTreeBuilder, normalize_route};
