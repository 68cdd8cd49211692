//! Body rendering strategies, one per content variant.

use std::fmt::Write;

use doctree_site::{
    Body, CategoryModel, FuncModel, GroupModel, ParamModel, SymbolsModel, TypeModel,
};

use crate::html::{escape, resolve_url, rewrite_links};
use crate::types::{func_path, type_class, type_link};

/// URL settings shared by all body strategies.
pub(crate) struct BodyContext<'a> {
    pub base_path: &'a str,
    pub reference_route: &'a str,
}

impl BodyContext<'_> {
    fn href(&self, route: &str) -> String {
        escape(&resolve_url(self.base_path, route))
    }

    /// Append a generator HTML fragment with its absolute links rewritten.
    fn push_fragment(&self, html: &mut String, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        html.push_str(&rewrite_links(fragment, self.base_path));
        html.push('\n');
    }

    fn push_type_pill(&self, html: &mut String, ty: &str) {
        let class = type_class(ty);
        match type_link(self.base_path, self.reference_route, ty) {
            Some(link) => {
                let _ = write!(
                    html,
                    "<a href=\"{}\" class=\"pill {class}\">{}</a>",
                    escape(&link),
                    escape(ty)
                );
            }
            None => {
                let _ = write!(html, "<span class=\"pill {class}\">{}</span>", escape(ty));
            }
        }
    }
}

/// Render the page body, dispatching on the content variant.
pub(crate) fn render_body(html: &mut String, body: &Body, ctx: &BodyContext<'_>) {
    match body {
        Body::Html(fragment) | Body::Packages(fragment) => ctx.push_fragment(html, fragment),
        Body::Category(category) => render_category(html, category, ctx),
        Body::Func(func) => {
            render_func_heading(html, func, None);
            render_func(html, func, ctx, "");
        }
        Body::Group(group) => render_group(html, group, ctx),
        Body::Type(ty) => render_type(html, ty, ctx),
        Body::Symbols(symbols) => render_symbols(html, symbols, ctx),
    }
}

fn render_category(html: &mut String, category: &CategoryModel, ctx: &BodyContext<'_>) {
    let _ = writeln!(html, "<h1>{}</h1>", escape(&category.title));
    ctx.push_fragment(html, &category.details);

    if category.items.is_empty() {
        return;
    }
    html.push_str("<h2 id=\"definitions\">Definitions</h2>\n");
    html.push_str("<ul class=\"category-items\">\n");
    for item in &category.items {
        let name = if item.code {
            format!("<code>{}</code>", escape(&item.name))
        } else {
            escape(&item.name)
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{name}</a><span>{}</span></li>",
            ctx.href(&item.route),
            escape(&item.oneliner)
        );
    }
    html.push_str("</ul>\n");
}

fn render_group(html: &mut String, group: &GroupModel, ctx: &BodyContext<'_>) {
    let _ = writeln!(html, "<h1>{}</h1>", escape(&group.title));
    ctx.push_fragment(html, &group.details);

    if group.functions.is_empty() {
        return;
    }
    html.push_str("<h2 id=\"functions\">Functions</h2>\n");
    for func in &group.functions {
        let id = format!("functions-{}", func.name);
        render_func_heading(html, func, Some(&id));
        render_func(html, func, ctx, &id);
    }
}

fn render_type(html: &mut String, ty: &TypeModel, ctx: &BodyContext<'_>) {
    let _ = write!(html, "<h1 id=\"summary\">{} ", escape(&ty.title));
    ctx.push_type_pill(html, &ty.name);
    html.push_str("</h1>\n");
    ctx.push_fragment(html, &ty.details);

    if let Some(constructor) = &ty.constructor {
        html.push_str("<h2 id=\"constructor\">Constructor</h2>\n");
        render_func(html, constructor, ctx, "constructor");
    }
    render_scope(html, &ty.scope, ctx, "definitions");
}

fn render_symbols(html: &mut String, symbols: &SymbolsModel, ctx: &BodyContext<'_>) {
    let _ = writeln!(html, "<h1>{}</h1>", escape(&symbols.title));
    ctx.push_fragment(html, &symbols.details);

    html.push_str("<ul class=\"symbol-grid\">\n");
    for symbol in &symbols.list {
        let glyph = symbol.glyph().map(String::from).unwrap_or_default();
        let deprecated = if symbol.deprecation.is_some() {
            " class=\"deprecated\""
        } else {
            ""
        };
        let _ = write!(
            html,
            "<li id=\"symbol-{name}\"{deprecated} data-codepoint=\"{codepoint}\">\
             <span class=\"sym\">{glyph}</span><code>{name}</code>",
            name = escape(&symbol.name),
            codepoint = symbol.codepoint,
            glyph = escape(&glyph),
        );
        if let Some(shorthand) = &symbol.markup_shorthand {
            let _ = write!(html, "<span class=\"shorthand\">{}</span>", escape(shorthand));
        }
        if let Some(shorthand) = &symbol.math_shorthand {
            let _ = write!(
                html,
                "<span class=\"shorthand math\">{}</span>",
                escape(shorthand)
            );
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

/// Title heading of a function, anchored when rendered inside a list.
fn render_func_heading(html: &mut String, func: &FuncModel, id: Option<&str>) {
    let anchor = id.map(|id| format!(" id=\"{}\"", escape(id))).unwrap_or_default();
    let tag = if id.is_some() { "h3" } else { "h1" };
    let _ = writeln!(
        html,
        "<{tag}{anchor}><code>{}{}</code></{tag}>",
        escape(&func_path(&func.path)),
        escape(&func.name)
    );
}

/// Details, signature, parameters and scope of a function.
///
/// `prefix` namespaces the anchor ids of nested functions.
fn render_func(html: &mut String, func: &FuncModel, ctx: &BodyContext<'_>, prefix: &str) {
    if func.element || func.contextual {
        html.push_str("<div class=\"badges\">");
        if func.element {
            html.push_str("<span class=\"badge\">Element</span>");
        }
        if func.contextual {
            html.push_str("<span class=\"badge\">Contextual</span>");
        }
        html.push_str("</div>\n");
    }
    if let Some(deprecation) = &func.deprecation {
        let _ = writeln!(
            html,
            "<div class=\"deprecation\">{}</div>",
            escape(deprecation)
        );
    }
    ctx.push_fragment(html, &func.details);
    if let Some(example) = &func.example {
        ctx.push_fragment(html, example);
    }

    let params_id = anchor(prefix, "parameters");
    if !func.params.is_empty() {
        let _ = writeln!(
            html,
            "<h4 id=\"{}\">Parameters</h4>",
            escape(&params_id)
        );
    }
    render_signature(html, func, ctx);
    for param in &func.params {
        render_param(html, param, ctx, &params_id);
    }

    render_scope(html, &func.scope, ctx, &anchor(prefix, "definitions"));
}

fn render_signature(html: &mut String, func: &FuncModel, ctx: &BodyContext<'_>) {
    let _ = write!(
        html,
        "<div class=\"code code-definition\"><span class=\"typ-func\">{}{}</span>(",
        escape(&func_path(&func.path)),
        escape(&func.name)
    );
    for (i, param) in func.params.iter().enumerate() {
        if i > 0 {
            html.push_str(", ");
        }
        if param.variadic {
            html.push_str("..");
        }
        if param.named {
            let _ = write!(html, "{}: ", escape(&param.name));
        }
        for (j, ty) in param.types.iter().enumerate() {
            if j > 0 {
                html.push_str(" <span class=\"pill-sep\">|</span> ");
            }
            ctx.push_type_pill(html, ty);
        }
    }
    html.push(')');
    if !func.returns.is_empty() {
        html.push_str(" -&gt; ");
        for (i, ty) in func.returns.iter().enumerate() {
            if i > 0 {
                html.push_str(" <span class=\"pill-sep\">or</span> ");
            }
            ctx.push_type_pill(html, ty);
        }
    }
    html.push_str("</div>\n");
}

fn render_param(html: &mut String, param: &ParamModel, ctx: &BodyContext<'_>, prefix: &str) {
    let _ = write!(
        html,
        "<h5 id=\"{}\"><code>{}</code> ",
        escape(&anchor(prefix, &param.name)),
        escape(&param.name)
    );
    for ty in &param.types {
        ctx.push_type_pill(html, ty);
    }
    let flags = [
        (param.required, "Required"),
        (param.positional, "Positional"),
        (param.variadic, "Variadic"),
        (param.settable, "Settable"),
    ];
    for (_, label) in flags.iter().filter(|(set, _)| *set) {
        let _ = write!(html, " <span class=\"badge\">{label}</span>");
    }
    html.push_str("</h5>\n");

    ctx.push_fragment(html, &param.details);

    if !param.strings.is_empty() {
        html.push_str("<ul class=\"string-values\">\n");
        for value in &param.strings {
            let _ = write!(
                html,
                "<li><code>\"{}\"</code>",
                escape(&value.string)
            );
            ctx.push_fragment(html, &value.details);
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
    }
    if let Some(default) = &param.default {
        html.push_str("<p class=\"default\">Default: ");
        html.push_str(&rewrite_links(default, ctx.base_path));
        html.push_str("</p>\n");
    }
    if let Some(example) = &param.example {
        ctx.push_fragment(html, example);
    }
}

fn render_scope(html: &mut String, scope: &[FuncModel], ctx: &BodyContext<'_>, prefix: &str) {
    if scope.is_empty() {
        return;
    }
    let _ = writeln!(html, "<h2 id=\"{}\">Definitions</h2>", escape(prefix));
    for func in scope {
        let id = anchor(prefix, &func.name);
        render_func_heading(html, func, Some(&id));
        render_func(html, func, ctx, &id);
    }
}

fn anchor(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}-{name}")
    }
}

#[cfg(test)]
mod tests {
    use doctree_site::{CategoryItem, StrParam, SymbolModel};

    use super::*;

    const CTX: BodyContext<'static> = BodyContext {
        base_path: "/docs/",
        reference_route: "/reference/",
    };

    fn render(body: &Body) -> String {
        let mut html = String::new();
        render_body(&mut html, body, &CTX);
        html
    }

    fn func(name: &str) -> FuncModel {
        FuncModel {
            path: Vec::new(),
            name: name.to_owned(),
            title: name.to_owned(),
            keywords: Vec::new(),
            oneliner: String::new(),
            element: false,
            contextual: false,
            deprecation: None,
            details: String::new(),
            example: None,
            self_: false,
            params: Vec::new(),
            returns: Vec::new(),
            scope: Vec::new(),
        }
    }

    fn param(name: &str, types: &[&str]) -> ParamModel {
        ParamModel {
            name: name.to_owned(),
            details: String::new(),
            example: None,
            types: types.iter().map(|t| (*t).to_owned()).collect(),
            strings: Vec::new(),
            default: None,
            positional: false,
            named: true,
            required: false,
            variadic: false,
            settable: false,
        }
    }

    #[test]
    fn test_html_body_rewrites_links() {
        let html = render(&Body::Html("<a href=\"/guide/\">Guide</a>".to_owned()));

        assert!(html.contains("href=\"/docs/guide/\""));
    }

    #[test]
    fn test_packages_body_renders_like_html() {
        let html = render(&Body::Packages("<p>Packages</p>".to_owned()));

        assert_eq!(html, "<p>Packages</p>\n");
    }

    #[test]
    fn test_category_lists_items() {
        let body = Body::Category(CategoryModel {
            name: "text".to_owned(),
            title: "Text".to_owned(),
            details: "<p>Text styling.</p>".to_owned(),
            items: vec![CategoryItem {
                name: "strong".to_owned(),
                route: "/reference/text/strong/".to_owned(),
                oneliner: "Strongly <emphasizes> content.".to_owned(),
                code: true,
            }],
        });

        let html = render(&body);

        assert!(html.contains("<h1>Text</h1>"));
        assert!(html.contains("<p>Text styling.</p>"));
        assert!(html.contains(
            "<a href=\"/docs/reference/text/strong/\"><code>strong</code></a>"
        ));
        assert!(html.contains("Strongly &lt;emphasizes&gt; content."));
    }

    #[test]
    fn test_func_signature_and_params() {
        let mut abs = func("abs");
        abs.path = vec!["calc".to_owned()];
        abs.params = vec![param("value", &["int", "float"])];
        abs.params[0].positional = true;
        abs.params[0].named = false;
        abs.params[0].required = true;
        abs.returns = vec!["int".to_owned()];

        let html = render(&Body::Func(abs));

        assert!(html.contains("<h1><code>calc.abs</code></h1>"));
        assert!(html.contains("<span class=\"typ-func\">calc.abs</span>("));
        assert!(html.contains(
            "<a href=\"/docs/reference/foundations/int/\" class=\"pill pill-num\">int</a>"
        ));
        assert!(html.contains("<h5 id=\"parameters-value\"><code>value</code>"));
        assert!(html.contains("<span class=\"badge\">Required</span>"));
        assert!(html.contains("<span class=\"badge\">Positional</span>"));
        assert!(!html.contains("Settable"));
    }

    #[test]
    fn test_func_string_values_and_default() {
        let mut text = func("text");
        let mut dir = param("dir", &["auto", "direction"]);
        dir.strings = vec![StrParam {
            string: "ltr".to_owned(),
            details: "Left to right.".to_owned(),
        }];
        dir.default = Some("<code>auto</code>".to_owned());
        text.params = vec![dir];

        let html = render(&Body::Func(text));

        assert!(html.contains(
            "<a href=\"/docs/reference/foundations/auto/\" class=\"pill pill-kw\">auto</a>"
        ));
        assert!(html.contains("<code>\"ltr\"</code>"));
        assert!(html.contains("Default: <code>auto</code>"));
    }

    #[test]
    fn test_unknown_type_renders_unlinked_pill() {
        let mut f = func("f");
        f.returns = vec!["any".to_owned()];

        let html = render(&Body::Func(f));

        assert!(html.contains("<span class=\"pill pill-obj\">any</span>"));
    }

    #[test]
    fn test_group_anchors_functions() {
        let mut pow = func("pow");
        pow.params = vec![param("exponent", &["int"])];
        let body = Body::Group(GroupModel {
            name: "calc".to_owned(),
            title: "Calculation".to_owned(),
            details: String::new(),
            functions: vec![func("abs"), pow],
        });

        let html = render(&body);

        assert!(html.contains("<h3 id=\"functions-abs\"><code>abs</code></h3>"));
        assert!(html.contains("<h4 id=\"functions-pow-parameters\">"));
    }

    #[test]
    fn test_func_without_params_has_no_parameters_heading() {
        let body = Body::Func(func("none"));

        let html = render(&body);

        assert!(!html.contains("Parameters"));
        assert!(!html.contains("id=\"parameters\""));
        assert!(html.contains("<span class=\"typ-func\">none</span>()"));
    }

    #[test]
    fn test_type_renders_constructor_and_scope() {
        let body = Body::Type(TypeModel {
            name: "str".to_owned(),
            title: "String".to_owned(),
            keywords: Vec::new(),
            oneliner: String::new(),
            details: String::new(),
            constructor: Some(func("str")),
            scope: vec![func("len")],
        });

        let html = render(&body);

        assert!(html.contains("<h2 id=\"constructor\">Constructor</h2>"));
        assert!(html.contains("<h2 id=\"definitions\">Definitions</h2>"));
        assert!(html.contains("<h3 id=\"definitions-len\"><code>len</code></h3>"));
    }

    #[test]
    fn test_symbols_render_glyphs() {
        let body = Body::Symbols(SymbolsModel {
            name: "sym".to_owned(),
            title: "General".to_owned(),
            details: String::new(),
            list: vec![SymbolModel {
                name: "arrow.r".to_owned(),
                codepoint: 0x2192,
                accent: false,
                alternates: Vec::new(),
                markup_shorthand: Some("->".to_owned()),
                math_shorthand: None,
                math_class: None,
                deprecation: None,
            }],
        });

        let html = render(&body);

        assert!(html.contains("<span class=\"sym\">\u{2192}</span><code>arrow.r</code>"));
        assert!(html.contains("<span class=\"shorthand\">-&gt;</span>"));
    }
}
