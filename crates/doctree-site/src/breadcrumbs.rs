//! Breadcrumb resolution.

use crate::error::NavError;
use crate::tree::PageTree;

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Route of the page (without base path).
    pub route: String,
}

/// Build breadcrumbs for a route.
///
/// Returns the chain from the top-level ancestor down to the page itself,
/// both inclusive. Routes are unique, so the chain is the only path to the
/// page. The renderer links every element except the last.
///
/// # Errors
///
/// Returns `NavError::PageNotFound` if the route is not in the tree; a
/// partial chain is never returned.
pub fn resolve_breadcrumbs(tree: &PageTree, route: &str) -> Result<Vec<BreadcrumbItem>, NavError> {
    let id = tree
        .id_of(route)
        .ok_or_else(|| NavError::PageNotFound(route.to_owned()))?;

    Ok(tree
        .ancestry(id)
        .into_iter()
        .map(|i| {
            let page = tree.page(i);
            BreadcrumbItem {
                title: page.title.clone(),
                route: page.route.clone(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::tree::PageTreeBuilder;
    use crate::tree::test_support::page;

    fn sample_tree() -> PageTree {
        let mut builder = PageTreeBuilder::new();
        let root = builder.add_page(page("/", "Home"), None).unwrap();
        builder.add_page(page("/a/", "A"), Some(root)).unwrap();
        let b = builder.add_page(page("/b/", "B"), Some(root)).unwrap();
        builder.add_page(page("/b/1/", "B1"), Some(b)).unwrap();
        builder.build()
    }

    #[test]
    fn test_breadcrumbs_nested_page() {
        let tree = sample_tree();

        let crumbs = resolve_breadcrumbs(&tree, "/b/1/").unwrap();

        let routes: Vec<_> = crumbs.iter().map(|c| c.route.as_str()).collect();
        assert_eq!(routes, vec!["/", "/b/", "/b/1/"]);
        assert_eq!(crumbs[2].title, "B1");
    }

    #[test]
    fn test_breadcrumbs_root_page_is_single_item() {
        let tree = sample_tree();

        let crumbs = resolve_breadcrumbs(&tree, "/").unwrap();

        assert_eq!(
            crumbs,
            vec![BreadcrumbItem {
                title: "Home".to_owned(),
                route: "/".to_owned(),
            }]
        );
    }

    #[test]
    fn test_breadcrumbs_unknown_route_fails() {
        let tree = sample_tree();

        let err = resolve_breadcrumbs(&tree, "/b/9/").unwrap_err();

        assert!(matches!(err, NavError::PageNotFound(ref r) if r == "/b/9/"));
    }

    #[test]
    fn test_breadcrumbs_empty_tree_fails() {
        let tree = PageTreeBuilder::new().build();

        assert!(resolve_breadcrumbs(&tree, "/").is_err());
    }

    proptest! {
        #[test]
        fn breadcrumbs_follow_actual_ancestors(parents in prop::collection::vec(0usize..32, 1..30), pick in 0usize..30) {
            let mut builder = PageTreeBuilder::new();
            let mut ids = vec![builder.add_page(page("/", "p0"), None).unwrap()];
            for (i, choice) in parents.iter().enumerate() {
                let parent = ids[choice % ids.len()];
                let n = i + 1;
                ids.push(builder.add_page(page(&format!("/p{n}/"), &format!("p{n}")), Some(parent)).unwrap());
            }
            let tree = builder.build();
            let target = tree.page(ids[pick % ids.len()]).route.clone();

            let crumbs = resolve_breadcrumbs(&tree, &target).unwrap();

            prop_assert_eq!(&crumbs[crumbs.len() - 1].route, &target);
            prop_assert_eq!(tree.parent(tree.id_of(&crumbs[0].route).unwrap()), None);
            for pair in crumbs.windows(2) {
                let parent = tree.id_of(&pair[0].route).unwrap();
                let child = tree.id_of(&pair[1].route).unwrap();
                prop_assert_eq!(tree.parent(child), Some(parent));
            }
        }
    }
}
