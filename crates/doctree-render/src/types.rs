//! Helpers for function and type documentation.
//!
//! Type names from parameter and return lists link to their reference
//! pages and get a colored "pill" class.

use doctree_site::{apply_base_path, join_path};

const FOUNDATION_TYPES: &[&str] = &[
    "arguments",
    "array",
    "auto",
    "bool",
    "bytes",
    "content",
    "datetime",
    "decimal",
    "dictionary",
    "duration",
    "float",
    "function",
    "int",
    "label",
    "module",
    "none",
    "plugin",
    "regex",
    "selector",
    "str",
    "type",
    "version",
];

const LAYOUT_TYPES: &[&str] = &[
    "alignment",
    "angle",
    "direction",
    "fraction",
    "length",
    "ratio",
    "relative",
];

const VISUALIZE_TYPES: &[&str] = &["color", "gradient", "pattern", "stroke"];

const INTROSPECTION_TYPES: &[&str] = &["counter", "location", "state"];

/// Reference sub-route of a type, e.g. `foundations/str`.
#[must_use]
pub fn type_route(ty: &str) -> Option<String> {
    let category = if FOUNDATION_TYPES.contains(&ty) {
        "foundations"
    } else if LAYOUT_TYPES.contains(&ty) {
        "layout"
    } else if VISUALIZE_TYPES.contains(&ty) {
        "visualize"
    } else if INTROSPECTION_TYPES.contains(&ty) {
        "introspection"
    } else {
        return None;
    };
    Some(format!("{category}/{ty}"))
}

/// Fully resolved link to a type's reference page.
#[must_use]
pub fn type_link(base_path: &str, reference_route: &str, ty: &str) -> Option<String> {
    let route = type_route(ty)?;
    let target = join_path(reference_route, &route) + "/";
    Some(apply_base_path(base_path, &target))
}

/// CSS pill class for a type name.
#[must_use]
pub fn type_class(ty: &str) -> &'static str {
    match ty {
        "none" | "auto" => "pill-kw",
        "function" => "pill-fn",
        "string" | "str" => "pill-str",
        "content" => "pill-con",
        "color" => "pill-col",
        "bool" | "boolean" => "pill-bool",
        "integer" | "int" | "ratio" | "length" | "relative length" | "float" | "angle"
        | "fraction" => "pill-num",
        _ => "pill-obj",
    }
}

/// Dotted prefix for a function's scope path (`calc.` for `["calc"]`).
#[must_use]
pub fn func_path(path: &[String]) -> String {
    path.iter().fold(String::new(), |mut out, segment| {
        out.push_str(segment);
        out.push('.');
        out
    })
}
