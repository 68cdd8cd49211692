//! Page tree loading from the generator's JSON output.
//!
//! The input is either one page object or an array of top-level pages.
//! Pages are added to the arena in pre-order, so structural errors are
//! reported for the first offending page in document order.

use std::path::Path;

use serde::Deserialize;

use crate::error::TreeError;
use crate::page::{Body, OutlineItem, Page};
use crate::translation::{StatusMap, TranslationStatus, resolve_status};
use crate::tree::{PageId, PageTree, PageTreeBuilder};

/// Options for [`load_tree`] and [`parse_tree`].
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// Route → status overrides.
    pub status_map: Option<StatusMap>,
    /// Status for pages no other source covers.
    pub default_status: Option<TranslationStatus>,
}

/// Page object as written by the generator.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageModel {
    route: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    part: Option<String>,
    #[serde(default)]
    outline: Vec<OutlineItem>,
    body: Body,
    #[serde(default)]
    children: Vec<PageModel>,
    #[serde(default)]
    translation_status: Option<TranslationStatus>,
    #[serde(default = "default_navigable")]
    navigable: bool,
}

fn default_navigable() -> bool {
    true
}

/// Load a page tree from a JSON file.
pub fn load_tree(path: &Path, options: &LoadOptions) -> Result<PageTree, TreeError> {
    let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_tree(&content, options)?;

    tracing::info!(path = %path.display(), pages = tree.len(), "Loaded page tree");
    Ok(tree)
}

/// Parse a page tree from JSON text.
pub fn parse_tree(json: &str, options: &LoadOptions) -> Result<PageTree, TreeError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let models: Vec<PageModel> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };

    let mut builder = PageTreeBuilder::new();
    for model in models {
        add_model(&mut builder, model, None, options)?;
    }
    let tree = builder.build();

    if let Some(map) = &options.status_map {
        for (route, status) in map.iter() {
            if tree.id_of(route).is_none() {
                tracing::warn!(route = %route, status = %status, "Status entry for unknown page");
            }
        }
    }

    Ok(tree)
}

fn add_model(
    builder: &mut PageTreeBuilder,
    model: PageModel,
    parent: Option<PageId>,
    options: &LoadOptions,
) -> Result<(), TreeError> {
    let translation_status = resolve_status(
        &model.route,
        model.translation_status,
        options.status_map.as_ref(),
        options.default_status,
    )?;

    let page = Page {
        route: model.route,
        title: model.title,
        description: model.description,
        part: model.part,
        outline: model.outline,
        body: model.body,
        translation_status,
        navigable: model.navigable,
    };
    let id = builder.add_page(page, parent)?;

    for child in model.children {
        add_model(builder, child, Some(id), options)?;
    }
    Ok(())
}
