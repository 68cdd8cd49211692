//! Linear page order for previous/next links.
//!
//! The order is a pre-order depth-first walk of the tree: each page, then
//! each of its children in listed order. Pages marked non-navigable are left
//! out of the order (their children are not). The order only depends on the
//! tree, never on the order in which pages get rendered.

use crate::tree::{PageId, PageTree};

/// Previous/next neighbors of a page in the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Option<PageId>,
    pub next: Option<PageId>,
}

/// Total order of navigable pages.
#[derive(Debug)]
pub struct PageSequence {
    order: Vec<PageId>,
    /// Sequence position per arena index, `None` for non-navigable pages.
    positions: Vec<Option<usize>>,
}

impl PageSequence {
    /// Flatten the tree into its navigation order.
    #[must_use]
    pub fn new(tree: &PageTree) -> Self {
        let order: Vec<PageId> = tree
            .pre_order()
            .into_iter()
            .filter(|&id| tree.page(id).navigable)
            .collect();

        let mut positions = vec![None; tree.len()];
        for (pos, id) in order.iter().enumerate() {
            positions[id.index()] = Some(pos);
        }

        Self { order, positions }
    }

    /// Pages in sequence order.
    #[must_use]
    pub fn order(&self) -> &[PageId] {
        &self.order
    }

    /// Position of a page in the sequence.
    #[must_use]
    pub fn position(&self, id: PageId) -> Option<usize> {
        self.positions.get(id.index()).copied().flatten()
    }

    /// Page before `id`, `None` for the first page or pages outside the sequence.
    #[must_use]
    pub fn previous(&self, id: PageId) -> Option<PageId> {
        let pos = self.position(id)?;
        pos.checked_sub(1).map(|p| self.order[p])
    }

    /// Page after `id`, `None` for the last page or pages outside the sequence.
    #[must_use]
    pub fn next(&self, id: PageId) -> Option<PageId> {
        let pos = self.position(id)?;
        self.order.get(pos + 1).copied()
    }

    /// Both neighbors of the page at `route`.
    ///
    /// Routes absent from the tree have no neighbors.
    #[must_use]
    pub fn neighbors(&self, tree: &PageTree, route: &str) -> Neighbors {
        tree.id_of(route)
            .map(|id| Neighbors {
                previous: self.previous(id),
                next: self.next(id),
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
