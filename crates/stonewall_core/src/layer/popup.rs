//! Marker popup markup.
//!
//! Missing condition, vegetation or wall type render as "Not given".
//! Photo, stone shape and surveyor rows are omitted when not given.

use crate::model::feature::Feature;
use crate::view::NOT_GIVEN;

pub const POPUP_MAX_WIDTH: u32 = 450;

/// Renders the popup bound to an entry's marker.
pub fn render_popup(feature: &Feature) -> String {
    let mut html = String::from(r#"<div class="popup-inner">"#);

    if let Some(url) = feature.photo_url() {
        html.push_str(&format!(
            r#"<div class="popup-photo"><img src="{}" alt="Image not taken" /></div>"#,
            escape_html(url)
        ));
    }

    html.push_str(r#"<div class="popup-content-text">"#);
    push_row(&mut html, "Wall Condition", feature.wall_condition());
    push_row(&mut html, "Vegetation Cover", feature.vegetation_cover());
    push_row(&mut html, "Wall Type", feature.wall_type());

    let shapes = feature.stone_shapes();
    if !shapes.is_empty() {
        push_row(&mut html, "Stone Shape", Some(shapes.join(", ").as_str()));
    }
    if let Some(name) = feature.surveyor_name() {
        push_row(&mut html, "Collected by", Some(name));
    }

    html.push_str("</div></div>");
    html
}

fn push_row(html: &mut String, label: &str, value: Option<&str>) {
    html.push_str(&format!(
        r#"<div class="popup-row"><b>{label}:</b> {}</div>"#,
        escape_html(value.unwrap_or(NOT_GIVEN))
    ));
}

pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
