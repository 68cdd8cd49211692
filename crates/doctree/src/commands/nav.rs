//! `doctree nav` command implementation.

use clap::Args;
use doctree_site::PageLink;

use super::{SiteArgs, load_site, navigator};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Route of the page (e.g. `/docs/reference/text/`).
    route: String,

    #[command(flatten)]
    site: SiteArgs,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config(None)?;
        let tree = load_site(&config)?;
        let nav = navigator(&tree, &config)?;
        let page_nav = nav.page_navigation(&self.route)?;

        let breadcrumbs: Vec<&str> = page_nav
            .breadcrumbs
            .iter()
            .map(|crumb| crumb.title.as_str())
            .collect();
        output.highlight(&breadcrumbs.join(" > "));
        output.field("Previous", &describe(page_nav.previous.as_ref()));
        output.field("Next", &describe(page_nav.next.as_ref()));
        if page_nav.is_root {
            output.info("Root listing page");
        }
        Ok(())
    }
}

fn describe(link: Option<&PageLink>) -> String {
    link.map_or_else(|| "-".to_owned(), |link| format!("{} ({})", link.title, link.route))
}
