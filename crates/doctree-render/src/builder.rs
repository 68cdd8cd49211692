//! Static site builder.
//!
//! Writes one `index.html` per page under the output directory. Pages are
//! rendered in parallel on the global rayon pool; a failing page is recorded
//! in the [`BuildReport`] and does not stop its siblings.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;

use crate::renderer::{PageRenderer, RenderError};

/// A directory copied verbatim into the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyDir {
    /// Source directory.
    pub from: PathBuf,
    /// Destination relative to the output directory.
    pub to: PathBuf,
}

/// Options for [`StaticSiteBuilder`].
#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Remove the output directory before building.
    pub clean: bool,
    /// Static directories copied before rendering.
    pub copy: Vec<CopyDir>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            clean: true,
            copy: Vec::new(),
        }
    }
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Route {0} does not map to a path inside the output directory")]
    InvalidOutputPath(String),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl BuildError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A page that could not be built.
#[derive(Debug)]
pub struct PageFailure {
    pub route: String,
    pub error: BuildError,
}

/// Outcome of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of pages written.
    pub rendered: usize,
    /// Number of files copied from static directories.
    pub copied: usize,
    /// Pages that failed, in sequence order.
    pub failures: Vec<PageFailure>,
}

impl BuildReport {
    /// True if every page was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds a static documentation site from a [`PageRenderer`].
pub struct StaticSiteBuilder<'r, 't> {
    renderer: &'r PageRenderer<'t>,
    options: BuildOptions,
}

impl<'r, 't> StaticSiteBuilder<'r, 't> {
    #[must_use]
    pub fn new(renderer: &'r PageRenderer<'t>, options: BuildOptions) -> Self {
        Self { renderer, options }
    }

    /// Build the site into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if preparing the output directory or copying static
    /// files fails. Per-page failures are reported in [`BuildReport::failures`].
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, BuildError> {
        if self.options.clean && output_dir.exists() {
            tracing::debug!(path = %output_dir.display(), "Cleaning output directory");
            fs::remove_dir_all(output_dir).map_err(BuildError::io(output_dir))?;
        }
        fs::create_dir_all(output_dir).map_err(BuildError::io(output_dir))?;

        let mut copied = 0;
        for dir in &self.options.copy {
            copied += copy_dir(&dir.from, &output_dir.join(&dir.to))?;
        }

        let tree = self.renderer.navigator().tree();
        let routes: Vec<&str> = tree
            .pre_order()
            .into_iter()
            .map(|id| tree.page(id).route.as_str())
            .collect();

        // `collect` keeps the input order, so failures are reported in
        // sequence order regardless of scheduling.
        let results: Vec<Result<(), PageFailure>> = routes
            .par_iter()
            .map(|route| {
                self.write_page(output_dir, route)
                    .map_err(|error| PageFailure {
                        route: (*route).to_owned(),
                        error,
                    })
            })
            .collect();

        let mut report = BuildReport {
            copied,
            ..BuildReport::default()
        };
        for result in results {
            match result {
                Ok(()) => report.rendered += 1,
                Err(failure) => {
                    tracing::error!(route = %failure.route, error = %failure.error, "Page failed");
                    report.failures.push(failure);
                }
            }
        }

        tracing::info!(
            output = %output_dir.display(),
            rendered = report.rendered,
            copied = report.copied,
            failed = report.failures.len(),
            "Site built"
        );
        Ok(report)
    }

    fn write_page(&self, output_dir: &Path, route: &str) -> Result<(), BuildError> {
        let path = output_path(output_dir, route)?;
        let page = self.renderer.render(route)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
        }
        fs::write(&path, page.html).map_err(BuildError::io(&path))?;

        tracing::debug!(route = %route, path = %path.display(), "Wrote page");
        Ok(())
    }
}

/// File path of a page: `<output_dir>/<route>/index.html`.
///
/// # Errors
///
/// Returns `BuildError::InvalidOutputPath` if the route contains `.` or `..`
/// segments.
pub fn output_path(output_dir: &Path, route: &str) -> Result<PathBuf, BuildError> {
    let relative = Path::new(route.trim_start_matches('/'));
    let mut path = output_dir.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => path.push(segment),
            _ => return Err(BuildError::InvalidOutputPath(route.to_owned())),
        }
    }
    path.push("index.html");
    Ok(path)
}

/// Copy a directory tree, returning the number of files copied.
fn copy_dir(from: &Path, to: &Path) -> Result<usize, BuildError> {
    if !from.is_dir() {
        return Err(BuildError::DirectoryNotFound(from.to_path_buf()));
    }

    let mut files = Vec::new();
    walk_dir(from, from, &mut files).map_err(BuildError::io(from))?;

    for (relative, source) in &files {
        let target = to.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
        }
        fs::copy(source, &target).map_err(BuildError::io(&target))?;
    }

    tracing::debug!(from = %from.display(), to = %to.display(), files = files.len(), "Copied directory");
    Ok(files.len())
}

fn walk_dir(base: &Path, current: &Path, files: &mut Vec<(PathBuf, PathBuf)>) -> io::Result<()> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            walk_dir(base, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(base) {
            files.push((relative.to_path_buf(), path.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use doctree_site::{Body, Navigator, Page, PageTree, PageTreeBuilder, TranslationStatus};

    use super::*;
    use crate::renderer::RenderConfig;

    fn page(route: &str, title: &str) -> Page {
        Page {
            route: route.to_owned(),
            title: title.to_owned(),
            description: String::new(),
            part: None,
            outline: Vec::new(),
            body: Body::Html(format!("<p>{title}</p>")),
            translation_status: TranslationStatus::Translated,
            navigable: true,
        }
    }

    fn sample_tree() -> PageTree {
        let mut builder = PageTreeBuilder::new();
        let root = builder.add_page(page("/", "Overview"), None).unwrap();
        builder.add_page(page("/guide/", "Guide"), Some(root)).unwrap();
        let reference = builder.add_page(page("/reference/", "Reference"), Some(root)).unwrap();
        builder
            .add_page(page("/reference/text", "Text"), Some(reference))
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_output_path() {
        let out = Path::new("/out");

        assert_eq!(output_path(out, "/").unwrap(), PathBuf::from("/out/index.html"));
        assert_eq!(
            output_path(out, "/reference/text/").unwrap(),
            PathBuf::from("/out/reference/text/index.html")
        );
        assert_eq!(
            output_path(out, "/reference/text").unwrap(),
            PathBuf::from("/out/reference/text/index.html")
        );
    }

    #[test]
    fn test_output_path_rejects_parent_segments() {
        let err = output_path(Path::new("/out"), "/../etc/").unwrap_err();

        assert!(matches!(err, BuildError::InvalidOutputPath(_)));
    }

    #[test]
    fn test_build_writes_every_page() {
        let tree = sample_tree();
        let renderer = PageRenderer::new(Navigator::new(&tree), RenderConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");

        let report = StaticSiteBuilder::new(&renderer, BuildOptions::default())
            .build(&out)
            .unwrap();

        assert_eq!(report.rendered, 4);
        assert!(report.is_success());
        for path in [
            "index.html",
            "guide/index.html",
            "reference/index.html",
            "reference/text/index.html",
        ] {
            assert!(out.join(path).is_file(), "missing {path}");
        }
        let guide = fs::read_to_string(out.join("guide/index.html")).unwrap();
        assert!(guide.contains("<p>Guide</p>"));
    }

    #[test]
    fn test_build_cleans_output() {
        let tree = sample_tree();
        let renderer = PageRenderer::new(Navigator::new(&tree), RenderConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.html"), "old").unwrap();

        StaticSiteBuilder::new(&renderer, BuildOptions::default())
            .build(&out)
            .unwrap();

        assert!(!out.join("stale.html").exists());
    }

    #[test]
    fn test_build_without_clean_keeps_files() {
        let tree = sample_tree();
        let renderer = PageRenderer::new(Navigator::new(&tree), RenderConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("keep.txt"), "keep").unwrap();
        let options = BuildOptions {
            clean: false,
            copy: Vec::new(),
        };

        StaticSiteBuilder::new(&renderer, options).build(&out).unwrap();

        assert!(out.join("keep.txt").exists());
    }

    #[test]
    fn test_build_copies_static_directories() {
        let tree = sample_tree();
        let renderer = PageRenderer::new(Navigator::new(&tree), RenderConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("static");
        fs::create_dir_all(assets.join("fonts")).unwrap();
        fs::write(assets.join("style.css"), "body {}").unwrap();
        fs::write(assets.join("fonts/a.woff2"), "font").unwrap();
        let out = dir.path().join("dist");
        let options = BuildOptions {
            clean: true,
            copy: vec![CopyDir {
                from: assets,
                to: PathBuf::from("assets"),
            }],
        };

        let report = StaticSiteBuilder::new(&renderer, options).build(&out).unwrap();

        assert_eq!(report.copied, 2);
        assert_eq!(
            fs::read_to_string(out.join("assets/style.css")).unwrap(),
            "body {}"
        );
        assert!(out.join("assets/fonts/a.woff2").is_file());
    }

    #[test]
    fn test_build_missing_copy_source_fails() {
        let tree = sample_tree();
        let renderer = PageRenderer::new(Navigator::new(&tree), RenderConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            clean: true,
            copy: vec![CopyDir {
                from: dir.path().join("missing"),
                to: PathBuf::new(),
            }],
        };

        let err = StaticSiteBuilder::new(&renderer, options)
            .build(&dir.path().join("dist"))
            .unwrap_err();

        assert!(matches!(err, BuildError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_build_reports_page_failures_and_continues() {
        let mut builder = PageTreeBuilder::new();
        let root = builder.add_page(page("/", "Overview"), None).unwrap();
        builder.add_page(page("/ok/", "Ok"), Some(root)).unwrap();
        builder.add_page(page("/./odd/", "Odd"), Some(root)).unwrap();
        let tree = builder.build();
        let renderer = PageRenderer::new(Navigator::new(&tree), RenderConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");

        let report = StaticSiteBuilder::new(&renderer, BuildOptions::default())
            .build(&out)
            .unwrap();

        assert_eq!(report.rendered, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].route, "/./odd/");
        assert!(out.join("ok/index.html").is_file());
    }
}
