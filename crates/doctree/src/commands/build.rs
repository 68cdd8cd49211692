//! `doctree build` command implementation.

use std::path::PathBuf;

use clap::Args;
use doctree_render::{BuildOptions, CopyDir, PageRenderer, StaticSiteBuilder};

use super::{SiteArgs, load_site, navigator, render_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config(self.output_dir)?;
        let output_dir = &config.build_resolved.output_dir;

        output.info(&format!("Tree: {}", config.input_resolved.tree.display()));
        output.info(&format!("Output: {}", output_dir.display()));

        let tree = load_site(&config)?;
        let renderer = PageRenderer::new(navigator(&tree, &config)?, render_config(&config)?);

        let options = BuildOptions {
            clean: config.build_resolved.clean,
            copy: config
                .build_resolved
                .copy
                .iter()
                .map(|rule| CopyDir {
                    from: rule.from.clone(),
                    to: rule.to.clone(),
                })
                .collect(),
        };
        let report = StaticSiteBuilder::new(&renderer, options).build(output_dir)?;

        if !report.is_success() {
            for failure in &report.failures {
                output.warning(&format!("  {}: {}", failure.route, failure.error));
            }
            return Err(CliError::PageFailures(report.failures.len()));
        }

        output.success(&format!(
            "Built {} pages to {}",
            report.rendered,
            output_dir.display()
        ));
        Ok(())
    }
}
