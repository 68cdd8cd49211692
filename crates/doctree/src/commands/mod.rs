//! CLI command implementations.

mod build;
mod check;
mod nav;

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use doctree_config::{CliSettings, Config};
use doctree_render::RenderConfig;
use doctree_site::{
    BannerText, LoadOptions, Navigator, PageTree, StatusMap, TranslationClassifier,
    TranslationStatus, load_tree,
};

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;

use crate::error::CliError;

/// Options shared by every command that loads the page tree.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover doctree.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page tree JSON file (overrides config).
    #[arg(short, long)]
    tree: Option<PathBuf>,

    /// Translation status file, JSON or YAML (overrides config).
    #[arg(long)]
    status_file: Option<PathBuf>,

    /// Deployment base path (overrides config).
    #[arg(long, env = "DOCTREE_BASE_PATH")]
    base_path: Option<String>,
}

impl SiteArgs {
    /// Load configuration with these arguments applied.
    fn load_config(&self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base_path: self.base_path.clone(),
            tree: self.tree.clone(),
            translation_status: self.status_file.clone(),
            output_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        tracing::debug!(path = ?config.config_path, "Loaded configuration");
        Ok(config)
    }
}

fn parse_status(value: &str) -> Result<TranslationStatus, CliError> {
    TranslationStatus::from_str(value).map_err(|e| CliError::Validation(e.to_string()))
}

/// Tree loading options from configuration.
pub(crate) fn load_options(config: &Config) -> Result<LoadOptions, CliError> {
    let status_map = config
        .input_resolved
        .translation_status
        .as_deref()
        .map(StatusMap::load)
        .transpose()?;
    let default_status = config
        .translation
        .default_status
        .as_deref()
        .map(parse_status)
        .transpose()?;

    Ok(LoadOptions {
        status_map,
        default_status,
    })
}

/// Load the page tree named by the configuration.
pub(crate) fn load_site(config: &Config) -> Result<PageTree, CliError> {
    let options = load_options(config)?;
    Ok(load_tree(&config.input_resolved.tree, &options)?)
}

/// Navigator with the configured root listing page.
pub(crate) fn navigator<'t>(tree: &'t PageTree, config: &Config) -> Result<Navigator<'t>, CliError> {
    match &config.site.root_route {
        Some(route) => Ok(Navigator::with_root_route(tree, route)?),
        None => Ok(Navigator::new(tree)),
    }
}

/// Translation banners with configured label overrides.
pub(crate) fn classifier(config: &Config) -> Result<TranslationClassifier, CliError> {
    let mut classifier = TranslationClassifier::default()
        .with_translated_banner(config.translation.show_translated_banner);

    for (key, label) in &config.translation.labels {
        let status = parse_status(key)?;
        let current = classifier.text(status);
        let text = BannerText {
            label: label.label.clone().unwrap_or_else(|| current.label.clone()),
            message: label
                .message
                .clone()
                .unwrap_or_else(|| current.message.clone()),
        };
        classifier = classifier.with_text(status, text);
    }
    Ok(classifier)
}

/// Renderer settings from configuration.
pub(crate) fn render_config(config: &Config) -> Result<RenderConfig, CliError> {
    Ok(RenderConfig {
        site_title: config.site.title.clone(),
        lang: config.site.lang.clone(),
        base_path: config.site.base_path.clone(),
        reference_route: config.site.reference_route.clone(),
        stylesheets: config.site.stylesheets.clone(),
        classifier: classifier(config)?,
    })
}

#[cfg(test)]
mod tests {
    use doctree_config::LabelConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_classifier_applies_label_overrides() {
        let mut config = Config::default();
        config.translation.labels.insert(
            "community".to_owned(),
            LabelConfig {
                label: Some("Original".to_owned()),
                message: None,
            },
        );

        let classifier = classifier(&config).unwrap();
        let text = classifier.text(TranslationStatus::Community);

        assert_eq!(text.label, "Original");
        // Message falls back to the built-in text.
        assert_eq!(
            text.message,
            TranslationClassifier::default()
                .text(TranslationStatus::Community)
                .message
        );
    }

    #[test]
    fn test_classifier_hides_translated_banner_by_default() {
        let config = Config::default();

        let classifier = classifier(&config).unwrap();

        assert!(classifier.banner(TranslationStatus::Translated).is_none());
        assert!(classifier.banner(TranslationStatus::Untranslated).is_some());
    }

    #[test]
    fn test_load_options_default_status() {
        let mut config = Config::default();
        config.translation.default_status = Some("partially_translated".to_owned());

        let options = load_options(&config).unwrap();

        assert_eq!(
            options.default_status,
            Some(TranslationStatus::PartiallyTranslated)
        );
        assert!(options.status_map.is_none());
    }

    #[test]
    fn test_render_config_copies_site_settings() {
        let mut config = Config::default();
        config.site.base_path = "/docs/".to_owned();
        config.site.title = "Typst".to_owned();

        let render = render_config(&config).unwrap();

        assert_eq!(render.base_path, "/docs/");
        assert_eq!(render.site_title, "Typst");
        assert_eq!(render.reference_route, "/docs/reference/");
    }

    #[test]
    fn test_load_site_reads_status_file() {
        let dir = tempfile::tempdir().unwrap();
        let tree_path = dir.path().join("docs.json");
        let status_path = dir.path().join("status.yaml");
        std::fs::write(
            &tree_path,
            r#"{"route": "/", "title": "Home", "body": {"kind": "html", "content": ""}}"#,
        )
        .unwrap();
        std::fs::write(&status_path, "/: community\n").unwrap();
        let mut config = Config::default();
        config.input_resolved.tree = tree_path;
        config.input_resolved.translation_status = Some(status_path);

        let tree = load_site(&config).unwrap();

        assert_eq!(
            tree.get("/").unwrap().translation_status,
            TranslationStatus::Community
        );
    }

    #[test]
    fn test_navigator_unknown_root_route_fails() {
        let dir = tempfile::tempdir().unwrap();
        let tree_path = dir.path().join("docs.json");
        std::fs::write(
            &tree_path,
            r#"{"route": "/", "title": "Home", "body": {"kind": "html", "content": ""}, "translationStatus": "translated"}"#,
        )
        .unwrap();
        let mut config = Config::default();
        config.input_resolved.tree = tree_path;
        config.site.root_route = Some("/missing/".to_owned());
        let tree = load_site(&config).unwrap();

        let err = navigator(&tree, &config).unwrap_err();

        assert!(matches!(err, CliError::Nav(_)));
    }
}
