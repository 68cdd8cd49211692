//! Page data model.
//!
//! Mirrors the JSON written by the external documentation generator. The
//! body is a closed sum type tagged by `kind`; renderers match on it
//! exhaustively.

use serde::{Deserialize, Serialize};

use crate::translation::TranslationStatus;

/// A documentation page as stored in the tree.
///
/// Children are not stored here; the [`PageTree`](crate::PageTree) arena
/// owns the parent/children relationships.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    /// Absolute URL path, unique across the tree (e.g. `/reference/text/`).
    pub route: String,
    /// Display title.
    pub title: String,
    /// Short description for the document head.
    pub description: String,
    /// Section label grouping a run of sibling pages.
    pub part: Option<String>,
    /// In-page heading anchors for the table of contents.
    pub outline: Vec<OutlineItem>,
    /// Page content.
    pub body: Body,
    /// Translation completeness.
    pub translation_status: TranslationStatus,
    /// False for category-only pages that are skipped by previous/next.
    pub navigable: bool,
}

impl Page {
    /// Flattened table of contents.
    #[must_use]
    pub fn toc(&self) -> Vec<TocEntry> {
        flatten_outline(&self.outline)
    }
}

/// Nested in-page heading anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineItem>,
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level, 2 for top-level outline items.
    pub level: u8,
    pub title: String,
    pub id: String,
}

/// Flatten a nested outline in pre-order.
///
/// Top-level items get level 2 (the page title is the only h1); levels are
/// capped at 6.
#[must_use]
pub fn flatten_outline(outline: &[OutlineItem]) -> Vec<TocEntry> {
    fn walk(items: &[OutlineItem], level: u8, out: &mut Vec<TocEntry>) {
        for item in items {
            out.push(TocEntry {
                level,
                title: item.name.clone(),
                id: item.id.clone(),
            });
            walk(&item.children, (level + 1).min(6), out);
        }
    }

    let mut entries = Vec::new();
    walk(outline, 2, &mut entries);
    entries
}

/// Page content, one variant per page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "camelCase")]
pub enum Body {
    /// Rendered HTML fragment.
    Html(String),
    /// Listing of the pages in a reference category.
    Category(CategoryModel),
    /// Documentation of a single function.
    Func(FuncModel),
    /// Documentation of a group of related functions.
    Group(GroupModel),
    /// Documentation of a type.
    Type(TypeModel),
    /// Table of symbols.
    Symbols(SymbolsModel),
    /// Package listing, an HTML fragment.
    Packages(String),
}

impl Body {
    /// The generator's `kind` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Html(_) => "html",
            Self::Category(_) => "category",
            Self::Func(_) => "func",
            Self::Group(_) => "group",
            Self::Type(_) => "type",
            Self::Symbols(_) => "symbols",
            Self::Packages(_) => "packages",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryModel {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub items: Vec<CategoryItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub name: String,
    pub route: String,
    #[serde(default)]
    pub oneliner: String,
    /// Render the name as code.
    #[serde(default)]
    pub code: bool,
}

/// Function documentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuncModel {
    /// Module path segments, e.g. `["calc"]` for `calc.abs`.
    #[serde(default)]
    pub path: Vec<String>,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub oneliner: String,
    /// The function is an element function (usable with set/show rules).
    #[serde(default)]
    pub element: bool,
    #[serde(default)]
    pub contextual: bool,
    #[serde(default)]
    pub deprecation: Option<String>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub example: Option<String>,
    /// The function is a method taking `self`.
    #[serde(default, rename = "self")]
    pub self_: bool,
    #[serde(default)]
    pub params: Vec<ParamModel>,
    #[serde(default)]
    pub returns: Vec<String>,
    #[serde(default)]
    pub scope: Vec<FuncModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamModel {
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub strings: Vec<StrParam>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub positional: bool,
    #[serde(default)]
    pub named: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub settable: bool,
}

/// An accepted string value of a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrParam {
    pub string: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupModel {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub functions: Vec<FuncModel>,
}

/// Type documentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeModel {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub oneliner: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub constructor: Option<FuncModel>,
    #[serde(default)]
    pub scope: Vec<FuncModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolsModel {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub list: Vec<SymbolModel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolModel {
    pub name: String,
    pub codepoint: u32,
    #[serde(default)]
    pub accent: bool,
    #[serde(default)]
    pub alternates: Vec<String>,
    #[serde(default)]
    pub markup_shorthand: Option<String>,
    #[serde(default)]
    pub math_shorthand: Option<String>,
    #[serde(default)]
    pub math_class: Option<String>,
    #[serde(default)]
    pub deprecation: Option<String>,
}

impl SymbolModel {
    /// The symbol character, `None` for invalid code points.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_body_html_deserializes() {
        let body: Body = serde_json::from_str(r#"{"kind": "html", "content": "<p>Hi</p>"}"#).unwrap();

        assert_eq!(body, Body::Html("<p>Hi</p>".to_owned()));
        assert_eq!(body.kind(), "html");
    }

    #[test]
    fn test_body_func_deserializes_self_and_defaults() {
        let json = r#"{
            "kind": "func",
            "content": {
                "path": ["calc"],
                "name": "abs",
                "title": "Absolute",
                "self": true,
                "params": [{"name": "value", "types": ["int", "float"], "required": true}],
                "returns": ["int"]
            }
        }"#;

        let Body::Func(func) = serde_json::from_str::<Body>(json).unwrap() else {
            panic!("expected func body");
        };

        assert_eq!(func.path, vec!["calc".to_owned()]);
        assert!(func.self_);
        assert!(!func.element);
        assert_eq!(func.params[0].types, vec!["int".to_owned(), "float".to_owned()]);
        assert!(func.params[0].required);
        assert!(func.scope.is_empty());
    }

    #[test]
    fn test_body_symbols_camel_case_fields() {
        let json = r#"{
            "kind": "symbols",
            "content": {
                "name": "sym",
                "title": "General",
                "list": [{"name": "arrow.r", "codepoint": 8594, "mathShorthand": "->"}]
            }
        }"#;

        let Body::Symbols(symbols) = serde_json::from_str::<Body>(json).unwrap() else {
            panic!("expected symbols body");
        };

        assert_eq!(symbols.list[0].math_shorthand.as_deref(), Some("->"));
        assert_eq!(symbols.list[0].glyph(), Some('→'));
    }

    #[test]
    fn test_body_unknown_kind_is_error() {
        let result = serde_json::from_str::<Body>(r#"{"kind": "video", "content": ""}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_flatten_outline_assigns_levels() {
        let outline = vec![
            OutlineItem {
                id: "summary".to_owned(),
                name: "Summary".to_owned(),
                children: vec![OutlineItem {
                    id: "details".to_owned(),
                    name: "Details".to_owned(),
                    children: Vec::new(),
                }],
            },
            OutlineItem {
                id: "parameters".to_owned(),
                name: "Parameters".to_owned(),
                children: Vec::new(),
            },
        ];

        let toc = flatten_outline(&outline);

        let levels: Vec<_> = toc.iter().map(|e| (e.id.as_str(), e.level)).collect();
        assert_eq!(levels, vec![("summary", 2), ("details", 3), ("parameters", 2)]);
    }

    #[test]
    fn test_flatten_outline_caps_level() {
        fn nest(depth: usize) -> OutlineItem {
            OutlineItem {
                id: format!("h{depth}"),
                name: format!("H{depth}"),
                children: if depth == 0 { Vec::new() } else { vec![nest(depth - 1)] },
            }
        }

        let toc = flatten_outline(&[nest(8)]);

        assert_eq!(toc.len(), 9);
        assert!(toc.iter().all(|e| e.level <= 6));
    }
}
