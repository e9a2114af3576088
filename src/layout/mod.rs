//! # Badge Grid Layout
//!
//! The heart of the crate: resolving declarative page/badge settings into
//! concrete millimeter geometry, and packing badges into a page grid.
//!
//! The resolver is deliberately infallible. A settings snapshot can arrive
//! with missing or degenerate numbers (a half-typed form field, a stale
//! store), and the answer is always a usable layout, never an error — the
//! UI warns about nonsense inputs, this module does not. All numeric
//! coercion funnels through [`crate::units::mm_or`].
//!
//! The packing formula is floor division with a gap correction: N badges
//! need only N−1 internal gaps, so adding one gap width to both the
//! printable span and the badge span turns "N·badge + (N−1)·gap ≤
//! printable" into a clean `floor((printable + gap) / (badge + gap))`.

pub mod paginate;

use serde::Serialize;

use crate::model::{BadgePreset, BadgeSettings, Orientation, PageSettings, PaperSize};
use crate::units::mm_or;

/// A concrete physical size after preset lookup, custom override, and
/// orientation handling. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// The resolved geometry for one sheet: page and badge sizes, grid
/// capacity, gaps, and the printable area. Everything the renderer needs,
/// bundled so nothing is re-derived downstream.
///
/// Recomputed fresh on every settings change; it has no identity beyond
/// its values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub page: ResolvedSize,
    pub badge: ResolvedSize,
    /// Badge columns per page. Always ≥ 1, even when the badge exceeds
    /// the printable area.
    pub cols: usize,
    /// Badge rows per page. Always ≥ 1.
    pub rows: usize,
    /// Slots per page: `cols × rows`, ≥ 1.
    pub per_page: usize,
    pub gap_x: f64,
    pub gap_y: f64,
    /// Page width minus horizontal margins. May be degenerate; `cols`
    /// guards against that, nothing else needs to.
    pub printable_width: f64,
    /// Page height minus vertical margins.
    pub printable_height: f64,
}

/// Resolve the physical page size from settings.
///
/// Landscape is an unconditional width/height swap: paper presets are
/// orientation-neutral physical stock, authored portrait.
pub fn resolve_page_size(settings: &PageSettings) -> ResolvedSize {
    let (preset_width, preset_height) = settings.paper_size.dimensions_mm();
    let (width_mm, height_mm) = if settings.paper_size == PaperSize::Custom {
        (
            mm_or(settings.custom_width_mm, preset_width),
            mm_or(settings.custom_height_mm, preset_height),
        )
    } else {
        (preset_width, preset_height)
    };

    match settings.orientation {
        Orientation::Landscape => ResolvedSize {
            width_mm: height_mm,
            height_mm: width_mm,
        },
        Orientation::Portrait => ResolvedSize {
            width_mm,
            height_mm,
        },
    }
}

/// Resolve the physical badge size from settings.
///
/// Orientation here is a min/max normalization, not a swap: badge presets
/// (and user-entered custom sizes) may be authored with either axis as the
/// long one, so landscape puts the larger dimension in width and portrait
/// puts it in height. This asymmetry with [`resolve_page_size`] is
/// intentional — do not unify them.
pub fn resolve_badge_size(settings: &BadgeSettings) -> ResolvedSize {
    let (preset_width, preset_height) = settings.size_preset.dimensions_mm();
    let (width_mm, height_mm) = if settings.size_preset == BadgePreset::Custom {
        (
            mm_or(settings.custom_width_mm, preset_width),
            mm_or(settings.custom_height_mm, preset_height),
        )
    } else {
        (preset_width, preset_height)
    };

    match settings.orientation {
        Orientation::Landscape => ResolvedSize {
            width_mm: width_mm.max(height_mm),
            height_mm: width_mm.min(height_mm),
        },
        Orientation::Portrait => ResolvedSize {
            width_mm: width_mm.min(height_mm),
            height_mm: width_mm.max(height_mm),
        },
    }
}

/// Compute the full grid layout for one combination of page and badge
/// settings.
pub fn compute_layout(page_settings: &PageSettings, badge_settings: &BadgeSettings) -> Layout {
    let page = resolve_page_size(page_settings);
    let badge = resolve_badge_size(badge_settings);

    // f64::max treats NaN as absent, so a NaN gap collapses to zero.
    let gap_x = badge_settings.gap_x_mm.max(0.0);
    let gap_y = badge_settings.gap_y_mm.max(0.0);

    let printable_width =
        page.width_mm - (page_settings.margin_left_mm.max(0.0) + page_settings.margin_right_mm.max(0.0));
    let printable_height =
        page.height_mm - (page_settings.margin_top_mm.max(0.0) + page_settings.margin_bottom_mm.max(0.0));

    let cols = ((printable_width + gap_x) / (badge.width_mm + gap_x))
        .floor()
        .max(1.0) as usize;
    let rows = ((printable_height + gap_y) / (badge.height_mm + gap_y))
        .floor()
        .max(1.0) as usize;
    let per_page = (cols * rows).max(1);

    Layout {
        page,
        badge,
        cols,
        rows,
        per_page,
        gap_x,
        gap_y,
        printable_width,
        printable_height,
    }
}
