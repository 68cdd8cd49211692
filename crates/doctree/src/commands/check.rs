//! `doctree check` command implementation.

use clap::Args;

use super::{SiteArgs, load_site, navigator};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config(None)?;
        let tree = load_site(&config)?;
        let nav = navigator(&tree, &config)?;

        output.highlight(&format!("{} pages", tree.len()));
        output.field("Root", nav.root().map_or("-", |root| root.route.as_str()));
        output.field(
            "In previous/next sequence",
            &nav.sequence().len().to_string(),
        );

        output.highlight("Translation status");
        for (status, count) in tree.translation_summary() {
            output.field(status.as_str(), &count.to_string());
        }

        output.success("Page tree is valid");
        Ok(())
    }
}
