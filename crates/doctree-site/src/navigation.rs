//! Navigation state derived from the page tree.
//!
//! [`Navigator`] bundles the tree with its precomputed [`PageSequence`] and
//! answers the per-page questions a page template needs: breadcrumbs,
//! previous/next, the sidebar tree and whether the page is the root listing.
//! It only borrows the tree, so one navigator can serve any number of
//! concurrent renders.

use crate::breadcrumbs::{BreadcrumbItem, resolve_breadcrumbs};
use crate::error::NavError;
use crate::page::Page;
use crate::sequence::PageSequence;
use crate::tree::{PageId, PageTree, normalize_route};

/// Sidebar item with children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target route (without base path).
    pub route: String,
    /// Section label of the page, if any.
    pub part: Option<String>,
    /// True for the page being rendered.
    pub active: bool,
    /// True for the active page and its ancestors.
    pub expanded: bool,
    /// Child items.
    pub children: Vec<NavItem>,
}

/// Link to another page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub title: String,
    pub route: String,
}

impl PageLink {
    fn from_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            route: page.route.clone(),
        }
    }
}

/// Navigation context for rendering one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageNavigation {
    /// Chain from the top-level ancestor to the page, inclusive.
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
    /// True for the root listing page.
    pub is_root: bool,
}

/// Read-only navigation view over a [`PageTree`].
#[derive(Debug)]
pub struct Navigator<'t> {
    tree: &'t PageTree,
    sequence: PageSequence,
    root: Option<PageId>,
}

impl<'t> Navigator<'t> {
    /// Create a navigator whose root listing page is the first top-level page.
    #[must_use]
    pub fn new(tree: &'t PageTree) -> Self {
        Self {
            tree,
            sequence: PageSequence::new(tree),
            root: tree.roots().first().copied(),
        }
    }

    /// Create a navigator with an explicit root listing page.
    ///
    /// # Errors
    ///
    /// Returns `NavError::PageNotFound` if the route is not in the tree.
    pub fn with_root_route(tree: &'t PageTree, root_route: &str) -> Result<Self, NavError> {
        let root = tree
            .id_of(root_route)
            .ok_or_else(|| NavError::PageNotFound(root_route.to_owned()))?;

        Ok(Self {
            tree,
            sequence: PageSequence::new(tree),
            root: Some(root),
        })
    }

    #[must_use]
    pub fn tree(&self) -> &'t PageTree {
        self.tree
    }

    #[must_use]
    pub fn sequence(&self) -> &PageSequence {
        &self.sequence
    }

    /// The root listing page.
    #[must_use]
    pub fn root(&self) -> Option<&'t Page> {
        self.root.map(|id| self.tree.page(id))
    }

    /// True if `route` is the root listing page.
    #[must_use]
    pub fn is_root(&self, route: &str) -> bool {
        self.root().is_some_and(|root| {
            normalize_route(&root.route) == normalize_route(route)
        })
    }

    /// Navigation context for the page at `route`.
    ///
    /// # Errors
    ///
    /// Returns `NavError::PageNotFound` if the route is not in the tree.
    pub fn page_navigation(&self, route: &str) -> Result<PageNavigation, NavError> {
        let breadcrumbs = resolve_breadcrumbs(self.tree, route)?;
        let neighbors = self.sequence.neighbors(self.tree, route);
        let link = |id: PageId| PageLink::from_page(self.tree.page(id));

        Ok(PageNavigation {
            breadcrumbs,
            previous: neighbors.previous.map(link),
            next: neighbors.next.map(link),
            is_root: self.is_root(route),
        })
    }

    /// Pages shown as cards on the root listing page.
    ///
    /// The children of the root page, or the other top-level pages when the
    /// root has no children.
    #[must_use]
    pub fn root_cards(&self) -> Vec<&'t Page> {
        let Some(root) = self.root else {
            return Vec::new();
        };

        let children = self.tree.children(root);
        let ids: Vec<PageId> = if children.is_empty() {
            self.tree
                .roots()
                .iter()
                .copied()
                .filter(|&id| id != root)
                .collect()
        } else {
            children.to_vec()
        };

        ids.into_iter().map(|id| self.tree.page(id)).collect()
    }

    /// Full sidebar tree with `current_route` highlighted.
    ///
    /// Unknown routes produce a tree with nothing highlighted.
    #[must_use]
    pub fn sidebar(&self, current_route: &str) -> Vec<NavItem> {
        let mut expanded = vec![false; self.tree.len()];
        let current = self.tree.id_of(current_route);
        if let Some(id) = current {
            for ancestor in self.tree.ancestry(id) {
                expanded[ancestor.index()] = true;
            }
        }

        self.tree
            .roots()
            .iter()
            .map(|&id| self.build_nav_item(id, current, &expanded))
            .collect()
    }

    fn build_nav_item(&self, id: PageId, current: Option<PageId>, expanded: &[bool]) -> NavItem {
        let page = self.tree.page(id);
        let children = self
            .tree
            .children(id)
            .iter()
            .map(|&child| self.build_nav_item(child, current, expanded))
            .collect();

        NavItem {
            title: page.title.clone(),
            route: page.route.clone(),
            part: page.part.clone(),
            active: current == Some(id),
            expanded: expanded[id.index()],
            children,
        }
    }
}
