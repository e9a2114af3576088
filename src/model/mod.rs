//! # Project Model
//!
//! The input representation for the sheet generator. A project is a
//! participant list plus the page and badge settings that drive layout.
//! This is designed to be easily produced by a form UI, a spreadsheet
//! export, or direct JSON construction.
//!
//! Every field carries a default, so a `{}` project is a valid project:
//! an empty A4 sheet of 90×55 badge slots. Settings arrive as snapshots
//! from whatever state store the host application uses; nothing in here
//! is mutated after deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LanyardError;

/// A complete project ready for layout and rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The ordered participant list. Order is preserved through pagination.
    #[serde(default)]
    pub participants: Vec<Participant>,

    /// Physical page configuration (paper, orientation, margins).
    #[serde(default)]
    pub page_settings: PageSettings,

    /// Badge dimensions, gaps, and grid behavior.
    #[serde(default)]
    pub badge_settings: BadgeSettings,

    /// Project metadata (title, author).
    #[serde(default)]
    pub metadata: Metadata,
}

impl Project {
    /// Parse a project from JSON, with a hint attached to parse failures.
    pub fn from_json(json: &str) -> Result<Self, LanyardError> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

/// Project metadata carried into the rendered sheet's head.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Standard paper sizes.
///
/// Unknown names deserialize as A4 — a malformed settings snapshot must
/// degrade to a usable layout, not fail the whole project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Custom,
}

impl PaperSize {
    /// Returns (width, height) in millimeters, in the preset's native
    /// portrait orientation. `Custom` reports the A4 fallback; the
    /// resolver overlays the configured custom dimensions per axis.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Custom => (210.0, 297.0),
        }
    }
}

impl From<String> for PaperSize {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Letter" => PaperSize::Letter,
            "Custom" => PaperSize::Custom,
            _ => PaperSize::A4,
        }
    }
}

/// Standard badge sizes.
///
/// Badge presets are stored with one nominal long/short axis (unlike paper
/// presets, which are orientation-neutral); the resolver normalizes the
/// axes against the requested orientation. Unknown names deserialize as
/// the 90×55 default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum BadgePreset {
    #[default]
    #[serde(rename = "90x55")]
    Badge90x55,
    #[serde(rename = "100x70")]
    Badge100x70,
    A6,
    #[serde(rename = "custom")]
    Custom,
}

impl BadgePreset {
    /// Returns (width, height) in millimeters as authored in the catalog.
    /// `Custom` reports the 90×55 fallback.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            BadgePreset::Badge90x55 => (90.0, 55.0),
            BadgePreset::Badge100x70 => (100.0, 70.0),
            BadgePreset::A6 => (148.0, 105.0),
            BadgePreset::Custom => (90.0, 55.0),
        }
    }
}

impl From<String> for BadgePreset {
    fn from(name: String) -> Self {
        match name.as_str() {
            "100x70" => BadgePreset::Badge100x70,
            "A6" => BadgePreset::A6,
            "custom" => BadgePreset::Custom,
            _ => BadgePreset::Badge90x55,
        }
    }
}

/// Page or badge orientation. Anything that isn't `landscape`
/// deserializes as portrait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl From<String> for Orientation {
    fn from(name: String) -> Self {
        match name.as_str() {
            "landscape" => Orientation::Landscape,
            _ => Orientation::Portrait,
        }
    }
}

/// Physical page configuration: paper size, orientation, margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    #[serde(default)]
    pub paper_size: PaperSize,

    /// Custom page width in mm. Only meaningful when `paper_size` is
    /// `Custom`; ignored otherwise.
    #[serde(default = "default_page_width")]
    pub custom_width_mm: f64,

    /// Custom page height in mm. Only meaningful when `paper_size` is
    /// `Custom`.
    #[serde(default = "default_page_height")]
    pub custom_height_mm: f64,

    #[serde(default)]
    pub orientation: Orientation,

    /// Page margins in mm. Negative values are clamped to zero at
    /// layout time.
    #[serde(default = "default_margin")]
    pub margin_top_mm: f64,
    #[serde(default = "default_margin")]
    pub margin_right_mm: f64,
    #[serde(default = "default_margin")]
    pub margin_bottom_mm: f64,
    #[serde(default = "default_margin")]
    pub margin_left_mm: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            custom_width_mm: default_page_width(),
            custom_height_mm: default_page_height(),
            orientation: Orientation::Portrait,
            margin_top_mm: default_margin(),
            margin_right_mm: default_margin(),
            margin_bottom_mm: default_margin(),
            margin_left_mm: default_margin(),
        }
    }
}

fn default_page_width() -> f64 {
    210.0
}

fn default_page_height() -> f64 {
    297.0
}

fn default_margin() -> f64 {
    10.0
}

/// Badge size, orientation, and grid gap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSettings {
    #[serde(default)]
    pub size_preset: BadgePreset,

    /// Custom badge width in mm. Only meaningful when `size_preset` is
    /// `custom`.
    #[serde(default = "default_badge_width")]
    pub custom_width_mm: f64,

    /// Custom badge height in mm. Only meaningful when `size_preset` is
    /// `custom`.
    #[serde(default = "default_badge_height")]
    pub custom_height_mm: f64,

    #[serde(default = "default_badge_orientation")]
    pub orientation: Orientation,

    /// Horizontal gap between badge columns, in mm. Negative values are
    /// clamped to zero at layout time.
    #[serde(default = "default_gap", rename = "gapXmm")]
    pub gap_x_mm: f64,

    /// Vertical gap between badge rows, in mm.
    #[serde(default = "default_gap", rename = "gapYmm")]
    pub gap_y_mm: f64,

    /// Whether the final page is padded with blank slots to a full grid.
    #[serde(default = "default_true")]
    pub auto_grid: bool,
}

impl Default for BadgeSettings {
    fn default() -> Self {
        Self {
            size_preset: BadgePreset::Badge90x55,
            custom_width_mm: default_badge_width(),
            custom_height_mm: default_badge_height(),
            orientation: Orientation::Landscape,
            gap_x_mm: default_gap(),
            gap_y_mm: default_gap(),
            auto_grid: true,
        }
    }
}

fn default_badge_width() -> f64 {
    90.0
}

fn default_badge_height() -> f64 {
    55.0
}

fn default_badge_orientation() -> Orientation {
    Orientation::Landscape
}

fn default_gap() -> f64 {
    4.0
}

fn default_true() -> bool {
    true
}

/// One participant record.
///
/// The canonical fields below are what import normalization targets and
/// what the badge renderer reads. Anything else on an imported record
/// survives in `extra`. The layout core never looks inside — a participant
/// is an opaque slot payload there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Identity. Assumed unique, but the layout engine does not enforce it.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Payload for the badge's QR code. Empty or absent means no QR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor_logo: Option<String>,

    /// Fields that import normalization did not recognize.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Participant {
    /// Create a participant with just an id and a display name.
    pub fn named(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: Some(display_name.to_string()),
            ..Default::default()
        }
    }

    /// The name shown on the badge, if any was set.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_project_is_valid() {
        let project = Project::from_json("{}").unwrap();
        assert!(project.participants.is_empty());
        assert_eq!(project.page_settings, PageSettings::default());
        assert_eq!(project.badge_settings, BadgeSettings::default());
    }

    #[test]
    fn settings_defaults_match_catalog() {
        let page = PageSettings::default();
        assert_eq!(page.paper_size, PaperSize::A4);
        assert_eq!(page.orientation, Orientation::Portrait);
        assert_eq!(page.margin_top_mm, 10.0);

        let badge = BadgeSettings::default();
        assert_eq!(badge.size_preset, BadgePreset::Badge90x55);
        assert_eq!(badge.orientation, Orientation::Landscape);
        assert_eq!(badge.gap_x_mm, 4.0);
        assert!(badge.auto_grid);
    }

    #[test]
    fn unknown_paper_size_falls_back_to_a4() {
        let page: PageSettings =
            serde_json::from_str(r#"{"paperSize": "B5", "orientation": "landscape"}"#).unwrap();
        assert_eq!(page.paper_size, PaperSize::A4);
        assert_eq!(page.orientation, Orientation::Landscape);
    }

    #[test]
    fn badge_preset_names_round_trip() {
        for (name, preset) in [
            ("\"90x55\"", BadgePreset::Badge90x55),
            ("\"100x70\"", BadgePreset::Badge100x70),
            ("\"A6\"", BadgePreset::A6),
            ("\"custom\"", BadgePreset::Custom),
        ] {
            let parsed: BadgePreset = serde_json::from_str(name).unwrap();
            assert_eq!(parsed, preset);
            assert_eq!(serde_json::to_string(&preset).unwrap(), name);
        }
        let unknown: BadgePreset = serde_json::from_str("\"35x90\"").unwrap();
        assert_eq!(unknown, BadgePreset::Badge90x55);
    }

    #[test]
    fn gap_fields_parse_from_gapxmm_keys() {
        let badge: BadgeSettings =
            serde_json::from_str(r#"{"gapXmm": 2.5, "gapYmm": 3.5}"#).unwrap();
        assert_eq!(badge.gap_x_mm, 2.5);
        assert_eq!(badge.gap_y_mm, 3.5);
    }

    #[test]
    fn participant_keeps_unrecognized_fields() {
        let json = r#"{"id": "p1", "displayName": "Ada", "dietary": "vegan"}"#;
        let participant: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(participant.label(), "Ada");
        assert_eq!(
            participant.extra.get("dietary"),
            Some(&Value::String("vegan".to_string()))
        );
    }
}
