//! Benchmarks for navigation derivation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use doctree_site::{
    Body, Navigator, Page, PageId, PageSequence, PageTree, PageTreeBuilder, TranslationStatus,
    resolve_breadcrumbs,
};

fn make_page(route: String) -> Page {
    Page {
        title: route.clone(),
        route,
        description: String::new(),
        part: None,
        outline: Vec::new(),
        body: Body::Html(String::new()),
        translation_status: TranslationStatus::Translated,
        navigable: true,
    }
}

/// Create a tree with specified depth and breadth.
fn create_tree(depth: usize, breadth: usize) -> (PageTree, String) {
    fn add_level(
        builder: &mut PageTreeBuilder,
        parent: PageId,
        prefix: &str,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
        deepest: &mut String,
    ) {
        if current_depth > max_depth {
            return;
        }
        for i in 0..breadth {
            let route = format!("{prefix}section-{i}/");
            let id = builder.add_page(make_page(route.clone()), Some(parent)).unwrap();
            if route.len() > deepest.len() {
                deepest.clone_from(&route);
            }
            add_level(builder, id, &route, current_depth + 1, max_depth, breadth, deepest);
        }
    }

    let mut builder = PageTreeBuilder::new();
    let root = builder.add_page(make_page("/".to_owned()), None).unwrap();
    let mut deepest = "/".to_owned();
    add_level(&mut builder, root, "/", 1, depth, breadth, &mut deepest);
    (builder.build(), deepest)
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for (depth, breadth) in [(3, 5), (5, 4)] {
        let (tree, _) = create_tree(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("build", tree.len()),
            &tree,
            |b, tree| b.iter(|| PageSequence::new(tree)),
        );
    }

    group.finish();
}

fn bench_breadcrumbs(c: &mut Criterion) {
    let (tree, deepest) = create_tree(5, 4);

    c.bench_function("breadcrumbs_deepest", |b| {
        b.iter(|| resolve_breadcrumbs(&tree, &deepest))
    });
}

fn bench_sidebar(c: &mut Criterion) {
    let (tree, deepest) = create_tree(3, 5);
    let nav = Navigator::new(&tree);

    c.bench_function("sidebar", |b| b.iter(|| nav.sidebar(&deepest)));
}

criterion_group!(benches, bench_sequence, bench_breadcrumbs, bench_sidebar);
criterion_main!(benches);
