//! Page tree with efficient route lookups.
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<Page>` with parent/children relationships
//! tracked by [`PageId`] indices. This provides:
//! - O(1) route lookups via the `route_index` `HashMap`
//! - O(d) ancestor walks where d is the page depth
//! - `Send + Sync` sharing across render threads without locking
//!
//! The tree is built once through [`PageTreeBuilder`] and never mutated
//! afterwards. Top-level pages are kept in order in `roots`; a single-rooted
//! tree has exactly one.

use std::collections::HashMap;

use crate::error::TreeError;
use crate::page::Page;
use crate::translation::TranslationStatus;

/// Index of a page in its [`PageTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(usize);

impl PageId {
    /// Position of the page in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Route key used for uniqueness and lookups.
///
/// Drops trailing slashes so `/a` and `/a/` address the same page; `/` stays `/`.
#[must_use]
pub fn normalize_route(route: &str) -> &str {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() && route.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

/// Immutable documentation page tree.
#[derive(Debug)]
pub struct PageTree {
    pages: Vec<Page>,
    children: Vec<Vec<PageId>>,
    parents: Vec<Option<PageId>>,
    roots: Vec<PageId>,
    route_index: HashMap<String, PageId>,
}

impl PageTree {
    /// Page by id.
    ///
    /// # Panics
    ///
    /// Panics if the id comes from another tree.
    #[must_use]
    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.0]
    }

    /// Look up a page id by route.
    #[must_use]
    pub fn id_of(&self, route: &str) -> Option<PageId> {
        self.route_index.get(normalize_route(route)).copied()
    }

    /// Look up a page by route.
    #[must_use]
    pub fn get(&self, route: &str) -> Option<&Page> {
        self.id_of(route).map(|id| self.page(id))
    }

    /// Children of a page, in listed order.
    #[must_use]
    pub fn children(&self, id: PageId) -> &[PageId] {
        &self.children[id.0]
    }

    /// Parent of a page, `None` for top-level pages.
    #[must_use]
    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.parents[id.0]
    }

    /// Top-level pages, in listed order.
    #[must_use]
    pub fn roots(&self) -> &[PageId] {
        &self.roots
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All page ids in pre-order (page, then each child in order).
    ///
    /// Uses an explicit stack so deep trees cannot overflow the call stack.
    #[must_use]
    pub fn pre_order(&self) -> Vec<PageId> {
        let mut order = Vec::with_capacity(self.pages.len());
        let mut stack: Vec<PageId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children[id.0].iter().rev().copied());
        }

        order
    }

    /// Ancestor chain from the top-level page down to `id`, inclusive.
    #[must_use]
    pub fn ancestry(&self, id: PageId) -> Vec<PageId> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            chain.push(i);
            current = self.parents[i.0];
        }
        chain.reverse();
        chain
    }

    /// Page count per translation status, in [`TranslationStatus::ALL`] order.
    #[must_use]
    pub fn translation_summary(&self) -> Vec<(TranslationStatus, usize)> {
        TranslationStatus::ALL
            .into_iter()
            .map(|status| {
                let count = self
                    .pages
                    .iter()
                    .filter(|page| page.translation_status == status)
                    .count();
                (status, count)
            })
            .collect()
    }
}

/// Builder for constructing [`PageTree`] instances.
///
/// Checks route validity and uniqueness as pages are added.
#[derive(Debug, Default)]
pub struct PageTreeBuilder {
    pages: Vec<Page>,
    children: Vec<Vec<PageId>>,
    parents: Vec<Option<PageId>>,
    roots: Vec<PageId>,
    route_index: HashMap<String, PageId>,
}

impl PageTreeBuilder {
    /// Create a new tree builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the tree.
    ///
    /// # Arguments
    ///
    /// * `page` - Page data
    /// * `parent` - Id of the parent page, `None` for a top-level page
    ///
    /// # Returns
    ///
    /// Id of the added page.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidRoute` for routes not starting with `/`,
    /// `TreeError::DuplicateRoute` if the route is already taken and
    /// `TreeError::UnknownParent` for a parent id this builder never issued.
    pub fn add_page(&mut self, page: Page, parent: Option<PageId>) -> Result<PageId, TreeError> {
        if !page.route.starts_with('/') {
            return Err(TreeError::InvalidRoute { route: page.route });
        }
        if parent.is_some_and(|p| p.0 >= self.pages.len()) {
            return Err(TreeError::UnknownParent { route: page.route });
        }

        let key = normalize_route(&page.route).to_owned();
        if self.route_index.contains_key(&key) {
            return Err(TreeError::DuplicateRoute { route: page.route });
        }

        let id = PageId(self.pages.len());
        self.route_index.insert(key, id);
        self.pages.push(page);
        self.children.push(Vec::new());
        self.parents.push(parent);

        match parent {
            Some(p) => self.children[p.0].push(id),
            None => self.roots.push(id),
        }

        Ok(id)
    }

    /// Build the [`PageTree`] instance.
    #[must_use]
    pub fn build(self) -> PageTree {
        PageTree {
            pages: self.pages,
            children: self.children,
            parents: self.parents,
            roots: self.roots,
            route_index: self.route_index,
        }
    }
}
