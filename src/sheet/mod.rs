//! # Print Sheet Serialization
//!
//! Turns a laid-out project into one self-contained HTML document: one
//! fixed-size `.page` element per page, each holding a CSS grid whose
//! template is derived directly from the [`Layout`] — no geometry is
//! re-derived here beyond unit formatting.
//!
//! Unit handling at this boundary follows the printing target: pages are
//! sized in millimeters, except Letter stock, which is sized in inches so
//! the browser's print scaling lines up with US paper. The `@page` rule
//! claims the same physical size with zero printer margins; the project's
//! configured margins are applied by the grid instead.

use qrcode::render::svg;
use qrcode::QrCode;

use crate::layout::paginate::Page;
use crate::layout::Layout;
use crate::model::{PageSettings, PaperSize, Participant, Project};
use crate::units::{css_in, css_mm};

/// Fraction of the badge's short axis given to the QR code.
const QR_BADGE_RATIO: f64 = 0.4;

/// Serialize a complete sheet document.
pub fn write_document(
    project: &Project,
    layout: &Layout,
    pages: &[Page<'_, Participant>],
) -> String {
    let (page_width, page_height) = page_size_css(&project.page_settings, layout);
    let title = project
        .metadata
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Badge sheet");

    let mut html = String::with_capacity(4096 + pages.len() * 2048);
    html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("<style>\n");
    html.push_str(&style_block(&page_width, &page_height));
    html.push_str("</style>\n</head>\n<body>\n");

    for page in pages {
        write_page(&mut html, project, layout, &page_width, &page_height, page);
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Page dimensions as CSS lengths: inches for Letter, millimeters
/// otherwise.
fn page_size_css(settings: &PageSettings, layout: &Layout) -> (String, String) {
    if settings.paper_size == PaperSize::Letter {
        (css_in(layout.page.width_mm), css_in(layout.page.height_mm))
    } else {
        (css_mm(layout.page.width_mm), css_mm(layout.page.height_mm))
    }
}

fn style_block(page_width: &str, page_height: &str) -> String {
    format!(
        "* {{ box-sizing: border-box; }}\n\
         body {{ margin: 0; font-family: system-ui, sans-serif; }}\n\
         @page {{ size: {page_width} {page_height}; margin: 0; }}\n\
         .page {{ background: #fff; overflow: hidden; page-break-after: always; }}\n\
         @media screen {{\n\
         \x20 body {{ background: #9ca3af; }}\n\
         \x20 .page {{ margin: 8px auto; box-shadow: 0 1px 4px rgba(0,0,0,0.35); }}\n\
         }}\n\
         .page-grid {{ display: grid; }}\n\
         .cell {{ overflow: hidden; }}\n\
         .badge {{ width: 100%; height: 100%; border: 0.2mm dashed #cbd5e1;\n\
         \x20 display: flex; align-items: center; justify-content: space-between;\n\
         \x20 padding: 3mm; }}\n\
         .badge-name {{ font-size: 6mm; font-weight: 700; }}\n\
         .badge-role, .badge-company {{ font-size: 3.5mm; color: #374151; }}\n\
         .badge-qr svg {{ width: 100%; height: 100%; display: block; }}\n"
    )
}

fn write_page(
    html: &mut String,
    project: &Project,
    layout: &Layout,
    page_width: &str,
    page_height: &str,
    page: &Page<'_, Participant>,
) {
    let settings = &project.page_settings;
    html.push_str(&format!(
        "<div class=\"page\" style=\"width: {page_width}; height: {page_height};\">\n"
    ));
    html.push_str(&format!(
        "<div class=\"page-grid\" style=\"margin: {} {} {} {}; \
         grid-template-columns: repeat({}, {}); grid-template-rows: repeat({}, {}); \
         column-gap: {}; row-gap: {};\">\n",
        css_mm(settings.margin_top_mm.max(0.0)),
        css_mm(settings.margin_right_mm.max(0.0)),
        css_mm(settings.margin_bottom_mm.max(0.0)),
        css_mm(settings.margin_left_mm.max(0.0)),
        layout.cols,
        css_mm(layout.badge.width_mm),
        layout.rows,
        css_mm(layout.badge.height_mm),
        css_mm(layout.gap_x),
        css_mm(layout.gap_y),
    ));

    for slot in page {
        match slot {
            Some(participant) => write_badge(html, participant, layout),
            None => html.push_str("<div class=\"cell cell-blank\"></div>\n"),
        }
    }

    html.push_str("</div>\n</div>\n");
}

fn write_badge(html: &mut String, participant: &Participant, layout: &Layout) {
    html.push_str("<div class=\"cell\"><div class=\"badge\">\n<div class=\"badge-text\">\n");
    html.push_str(&format!(
        "<div class=\"badge-name\">{}</div>\n",
        escape_html(participant.label())
    ));
    for (class, value) in [
        ("badge-role", &participant.role),
        ("badge-company", &participant.company),
    ] {
        if let Some(text) = value.as_deref().filter(|t| !t.is_empty()) {
            html.push_str(&format!(
                "<div class=\"{class}\">{}</div>\n",
                escape_html(text)
            ));
        }
    }
    html.push_str("</div>\n");

    if let Some(value) = participant.qr_value.as_deref().filter(|v| !v.is_empty()) {
        if let Some(svg_markup) = qr_svg(value) {
            let qr_mm = (layout.badge.width_mm.min(layout.badge.height_mm) * QR_BADGE_RATIO).round();
            html.push_str(&format!(
                "<div class=\"badge-qr\" style=\"width: {size}; height: {size};\">{svg_markup}</div>\n",
                size = css_mm(qr_mm),
            ));
        }
    }

    html.push_str("</div></div>\n");
}

/// Render a QR code as an inline SVG fragment. Returns `None` when the
/// payload cannot be encoded; the badge is then emitted without a code,
/// mirroring how a failed generation leaves the placeholder empty.
fn qr_svg(value: &str) -> Option<String> {
    let code = QrCode::new(value.as_bytes()).ok()?;
    let rendered = code
        .render::<svg::Color>()
        .quiet_zone(false)
        .min_dimensions(96, 96)
        .build();
    // Drop the XML prolog so the fragment embeds cleanly in HTML.
    let start = rendered.find("<svg")?;
    Some(rendered[start..].to_string())
}

/// Five-entity HTML escape for badge field values.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
