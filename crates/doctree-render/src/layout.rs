//! Base page layout.
//!
//! Wraps a rendered body in the navigation chrome: head, header, sidebar,
//! breadcrumbs, translation banner, table of contents, previous/next links
//! or root category cards, and footer. Every emitted in-site URL passes
//! through [`resolve_url`].

use std::fmt::Write;

use doctree_site::{Banner, BreadcrumbItem, NavItem, Page, PageLink, TocEntry};

use crate::html::{escape, resolve_url};

/// Everything the layout needs besides the body.
pub(crate) struct Layout<'a> {
    pub lang: &'a str,
    pub site_title: &'a str,
    pub base_path: &'a str,
    pub stylesheets: &'a [String],
    /// Route of the root listing page, if the tree has one.
    pub root_route: Option<&'a str>,
    pub page: &'a Page,
    pub sidebar: &'a [NavItem],
    pub breadcrumbs: &'a [BreadcrumbItem],
    pub banner: Option<&'a Banner>,
    pub toc: &'a [TocEntry],
    pub previous: Option<&'a PageLink>,
    pub next: Option<&'a PageLink>,
    /// Cards shown instead of previous/next on the root listing page.
    pub cards: Option<&'a [&'a Page]>,
}

impl Layout<'_> {
    fn href(&self, route: &str) -> String {
        escape(&resolve_url(self.base_path, route))
    }

    fn home_href(&self) -> String {
        self.href(self.root_route.unwrap_or("/"))
    }
}

/// Render a complete HTML document around `body`.
pub(crate) fn render_layout(layout: &Layout<'_>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 8192);

    render_head(&mut html, layout);
    html.push_str("<body>\n");
    render_header(&mut html, layout);
    html.push_str("<div class=\"main\">\n");
    render_sidebar(&mut html, layout);

    html.push_str("<main>\n");
    render_breadcrumbs(&mut html, layout);
    if let Some(banner) = layout.banner {
        render_banner(&mut html, banner);
    }
    html.push_str("<article>\n");
    html.push_str(body);
    html.push_str("</article>\n");
    match layout.cards {
        Some(cards) => render_cards(&mut html, layout, cards),
        None => render_page_nav(&mut html, layout),
    }
    html.push_str("</main>\n");

    render_toc(&mut html, layout.toc);
    html.push_str("</div>\n");
    render_footer(&mut html, layout);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_head(html: &mut String, layout: &Layout<'_>) {
    let _ = writeln!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>",
        escape(layout.lang)
    );
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>{} \u{2013} {}</title>",
        escape(&layout.page.title),
        escape(layout.site_title)
    );
    if !layout.page.description.is_empty() {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape(&layout.page.description)
        );
    }
    for stylesheet in layout.stylesheets {
        let _ = writeln!(
            html,
            "<link rel=\"stylesheet\" href=\"{}\">",
            layout.href(stylesheet)
        );
    }
    html.push_str("</head>\n");
}

fn render_header(html: &mut String, layout: &Layout<'_>) {
    let _ = writeln!(
        html,
        "<header><a href=\"{}\" class=\"site-title\">{}</a></header>",
        layout.home_href(),
        escape(layout.site_title)
    );
}

fn render_sidebar(html: &mut String, layout: &Layout<'_>) {
    html.push_str("<nav class=\"sidebar\">\n<ul>\n");
    render_nav_items(html, layout, layout.sidebar);
    html.push_str("</ul>\n</nav>\n");
}

/// Render navigation items recursively.
///
/// A `part` heading opens each run of siblings sharing the same part.
fn render_nav_items(html: &mut String, layout: &Layout<'_>, items: &[NavItem]) {
    let mut current_part: Option<&str> = None;
    for item in items {
        if let Some(part) = item.part.as_deref()
            && current_part != Some(part)
        {
            let _ = writeln!(html, "<li class=\"part\">{}</li>", escape(part));
        }
        current_part = item.part.as_deref();

        let mut classes = Vec::new();
        if item.active {
            classes.push("active");
        }
        if item.expanded {
            classes.push("expanded");
        }
        if classes.is_empty() {
            html.push_str("<li>");
        } else {
            let _ = write!(html, "<li class=\"{}\">", classes.join(" "));
        }

        let aria = if item.active {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            html,
            "<a href=\"{}\"{aria}>{}</a>",
            layout.href(&item.route),
            escape(&item.title)
        );

        if !item.children.is_empty() {
            html.push_str("\n<ul>\n");
            render_nav_items(html, layout, &item.children);
            html.push_str("</ul>\n");
        }
        html.push_str("</li>\n");
    }
}

/// Every crumb but the last is a link; the last is the current page.
fn render_breadcrumbs(html: &mut String, layout: &Layout<'_>) {
    let Some((current, ancestors)) = layout.breadcrumbs.split_last() else {
        return;
    };
    html.push_str("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumbs\">\n<ol>\n");

    let starts_at_root = layout
        .breadcrumbs
        .first()
        .is_some_and(|first| Some(first.route.as_str()) == layout.root_route);
    if !starts_at_root {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\" class=\"home\" aria-label=\"Home\">\u{2302}</a></li>",
            layout.home_href()
        );
    }

    for crumb in ancestors {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            layout.href(&crumb.route),
            escape(&crumb.title)
        );
    }
    let _ = writeln!(
        html,
        "<li aria-current=\"page\">{}</li>",
        escape(&current.title)
    );
    html.push_str("</ol>\n</nav>\n");
}

fn render_banner(html: &mut String, banner: &Banner) {
    let _ = writeln!(
        html,
        "<div class=\"banner {}\" data-status=\"{}\"><strong>{}</strong> {}</div>",
        banner.tone.css_class(),
        banner.status.as_str(),
        escape(&banner.label),
        escape(&banner.message)
    );
}

fn render_page_nav(html: &mut String, layout: &Layout<'_>) {
    if layout.previous.is_none() && layout.next.is_none() {
        return;
    }
    html.push_str("<nav class=\"page-nav\">\n");
    if let Some(previous) = layout.previous {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"previous\" rel=\"prev\">{}</a>",
            layout.href(&previous.route),
            escape(&previous.title)
        );
    }
    if let Some(next) = layout.next {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"next\" rel=\"next\">{}</a>",
            layout.href(&next.route),
            escape(&next.title)
        );
    }
    html.push_str("</nav>\n");
}

fn render_cards(html: &mut String, layout: &Layout<'_>, cards: &[&Page]) {
    if cards.is_empty() {
        return;
    }
    html.push_str("<div class=\"cards\">\n");
    for page in cards {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"card\"><h3>{}</h3><p>{}</p></a>",
            layout.href(&page.route),
            escape(&page.title),
            escape(&page.description)
        );
    }
    html.push_str("</div>\n");
}

fn render_toc(html: &mut String, toc: &[TocEntry]) {
    if toc.is_empty() {
        return;
    }
    html.push_str("<aside class=\"toc\">\n<h3>On this page</h3>\n<ul>\n");
    for entry in toc {
        let _ = writeln!(
            html,
            "<li class=\"level-{}\"><a href=\"#{}\">{}</a></li>",
            entry.level,
            escape(&entry.id),
            escape(&entry.title)
        );
    }
    html.push_str("</ul>\n</aside>\n");
}

fn render_footer(html: &mut String, layout: &Layout<'_>) {
    let _ = writeln!(
        html,
        "<footer><a href=\"{}\">{}</a></footer>",
        layout.home_href(),
        escape(layout.site_title)
    );
}
