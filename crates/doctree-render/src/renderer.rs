//! Page rendering.

use doctree_site::{NavError, Navigator, TranslationClassifier};

use crate::body::{BodyContext, render_body};
use crate::layout::{Layout, render_layout};

/// Site-wide rendering settings.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Site title shown in the header and document titles.
    pub site_title: String,
    /// Document language.
    pub lang: String,
    /// Deployment base path applied to every absolute link.
    pub base_path: String,
    /// Route under which type documentation lives.
    pub reference_route: String,
    /// Stylesheet URLs.
    pub stylesheets: Vec<String>,
    /// Translation banner texts.
    pub classifier: TranslationClassifier,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            site_title: "Documentation".to_owned(),
            lang: "en".to_owned(),
            base_path: "/".to_owned(),
            reference_route: "/docs/reference/".to_owned(),
            stylesheets: Vec::new(),
            classifier: TranslationClassifier::default(),
        }
    }
}

/// Error returned when rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

impl From<NavError> for RenderError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::PageNotFound(route) => Self::PageNotFound(route),
        }
    }
}

/// A rendered HTML document.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub route: String,
    pub html: String,
}

/// Renders pages of one tree.
///
/// Holds only shared references and immutable settings, so a single
/// renderer can be used from many threads at once.
#[derive(Debug)]
pub struct PageRenderer<'t> {
    navigator: Navigator<'t>,
    config: RenderConfig,
}

impl<'t> PageRenderer<'t> {
    #[must_use]
    pub fn new(navigator: Navigator<'t>, config: RenderConfig) -> Self {
        Self { navigator, config }
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator<'t> {
        &self.navigator
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the page at `route`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::PageNotFound` if the route is not in the tree.
    pub fn render(&self, route: &str) -> Result<RenderedPage, RenderError> {
        let tree = self.navigator.tree();
        let page = tree
            .get(route)
            .ok_or_else(|| RenderError::PageNotFound(route.to_owned()))?;
        let navigation = self.navigator.page_navigation(route)?;
        let sidebar = self.navigator.sidebar(route);
        let banner = self.config.classifier.banner(page.translation_status);
        let toc = page.toc();
        let cards = navigation.is_root.then(|| self.navigator.root_cards());

        let mut body = String::new();
        render_body(
            &mut body,
            &page.body,
            &BodyContext {
                base_path: &self.config.base_path,
                reference_route: &self.config.reference_route,
            },
        );

        let layout = Layout {
            lang: &self.config.lang,
            site_title: &self.config.site_title,
            base_path: &self.config.base_path,
            stylesheets: &self.config.stylesheets,
            root_route: self.navigator.root().map(|root| root.route.as_str()),
            page,
            sidebar: &sidebar,
            breadcrumbs: &navigation.breadcrumbs,
            banner: banner.as_ref(),
            toc: &toc,
            previous: navigation.previous.as_ref(),
            next: navigation.next.as_ref(),
            cards: cards.as_deref(),
        };

        tracing::debug!(route = %page.route, kind = page.body.kind(), "Rendered page");
        Ok(RenderedPage {
            route: page.route.clone(),
            html: render_layout(&layout, &body),
        })
    }
}
