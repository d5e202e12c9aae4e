//! Static site export.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{render_page, LinkMode, PageOptions};
use crate::models::SiteContent;
use crate::state::{PresentationState, ThemePreference};

/// File name of the page showing project `index`.
///
/// Project 0 lives on the landing page so a plain `index.html` is a
/// complete site.
pub fn project_page_name(index: usize) -> String {
    if index == 0 {
        "index.html".to_string()
    } else {
        format!("project-{index}.html")
    }
}

/// Writes one HTML page per carousel position into `out_dir`.
///
/// Returns the written paths in carousel order. With no projects only
/// `index.html` is written.
pub fn export_site(
    content: &SiteContent,
    theme: ThemePreference,
    asset_base: &str,
    lookahead_px: u32,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .context(format!("Failed to create output directory {}", out_dir.display()))?;

    let options = PageOptions {
        asset_base,
        links: LinkMode::Static,
        lookahead_px,
    };
    let pages = content.projects.len().max(1);
    let mut written = Vec::with_capacity(pages);

    for index in 0..pages {
        let mut state = PresentationState::new(content, theme, 0);
        state.carousel.go_to(index);

        let path = out_dir.join(project_page_name(index));
        let html = render_page(content, &state, &options).into_string();
        fs::write(&path, html).context(format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }

    info!("Exported {} page(s) to {}", written.len(), out_dir.display());
    Ok(written)
}
