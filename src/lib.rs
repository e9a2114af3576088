//! # Lanyard
//!
//! A page-native badge sheet generator.
//!
//! Badge tools tend to render badges one by one and leave the paper
//! arithmetic to the user: how many fit on an A4 page, what happens to
//! the half-empty last page, why the Letter printout is scaled by 3%.
//! Lanyard does the opposite: **the printable page is the fundamental
//! unit of layout.** Settings resolve to exact millimeter geometry, the
//! participant list flows into fixed-capacity page grids, and the
//! renderer receives finished pages — never a badge stream it has to
//! slice itself.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]    — Project: participants, page settings, badge settings
//!       ↓
//!   [layout]   — Millimeter geometry: grid capacity and pagination
//!       ↓
//!   [sheet]    — Serialize pages to a print-ready HTML document
//! ```
//!
//! The layout stage never fails: malformed settings coerce to safe
//! defaults, so a half-edited form can never crash a render.

pub mod error;
pub mod io;
pub mod layout;
pub mod model;
pub mod normalize;
pub mod sheet;
pub mod units;

pub use error::LanyardError;

use layout::paginate::{paginate, PaginateOptions};
use model::Project;

/// Render a project to a print-ready HTML sheet.
///
/// This is the primary entry point. Takes a project and returns the
/// complete HTML document for printing or preview.
pub fn render_sheet(project: &Project) -> String {
    let layout = layout::compute_layout(&project.page_settings, &project.badge_settings);
    let pages = paginate(
        &project.participants,
        &layout,
        PaginateOptions {
            fill_blanks: project.badge_settings.auto_grid,
        },
    );
    sheet::write_document(project, &layout, &pages)
}

/// Render a project described as JSON to a print-ready HTML sheet.
pub fn render_sheet_json(json: &str) -> Result<String, LanyardError> {
    let project = Project::from_json(json)?;
    Ok(render_sheet(&project))
}
