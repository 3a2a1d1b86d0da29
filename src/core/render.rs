//! Printable HTML for a batch of packing labels.

use crate::core::layout::{
    choose_orientation_for_labels, layout_labels, Label, Orientation, LABEL_GAP_MM, SHEET_PADDING_MM,
};
use crate::domain::model::MovingBox;

pub const UNASSIGNED_ROOM: &str = "Unassigned room";

/// Label width plus an optional height limit, both in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelSheet {
    pub width_cm: f64,
    pub max_height_cm: Option<f64>,
}

impl LabelSheet {
    pub fn new(width_cm: f64) -> Self {
        Self {
            width_cm,
            max_height_cm: None,
        }
    }

    pub fn with_max_height(mut self, max_height_cm: f64) -> Self {
        self.max_height_cm = Some(max_height_cm);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSheet {
    pub html: String,
    pub orientation: Orientation,
    pub label_count: usize,
}

/// One label per box at `width_cm`, on the orientation that needs fewer sheets.
pub fn render_labels(boxes: &[MovingBox], width_cm: f64) -> String {
    render_sheet(boxes, &LabelSheet::new(width_cm)).html
}

/// Lays out, picks the orientation and renders. Width and selection are
/// expected to be validated by the caller.
pub fn render_sheet(boxes: &[MovingBox], sheet: &LabelSheet) -> RenderedSheet {
    let labels = layout_labels(boxes, sheet.max_height_cm.map(|cm| cm * 10.0));
    let orientation = choose_orientation_for_labels(&labels, sheet.width_cm);

    RenderedSheet {
        html: render_document(&labels, sheet.width_cm, orientation),
        orientation,
        label_count: labels.len(),
    }
}

pub fn render_document(labels: &[Label], width_cm: f64, orientation: Orientation) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n");
    html.push_str("<title>Packing labels</title>\n<style>\n");
    html.push_str(&format!("@page {{ margin: 0; size: A4 {}; }}\n", orientation));
    html.push_str(&format!(
        ".sheet {{ display: flex; flex-wrap: wrap; gap: {}mm; padding: {}mm; align-items: flex-start; align-content: flex-start; }}\n",
        LABEL_GAP_MM, SHEET_PADDING_MM
    ));
    html.push_str("table { border-collapse: collapse; border: 1px solid #999; page-break-inside: avoid; flex-shrink: 0; }\n");
    html.push_str("th { text-align: left; padding: 2mm 3mm; }\n");
    html.push_str("thead tr:first-child th { background: #222; color: #fff; font-size: 14pt; }\n");
    html.push_str("th.contents { background: #e5e5e5; font-size: 8pt; text-transform: uppercase; }\n");
    html.push_str("td { padding: 1mm 3mm; font-size: 9pt; border-bottom: 1px solid #ccc; }\n");
    html.push_str("* { -webkit-print-color-adjust: exact; print-color-adjust: exact; }\n");
    html.push_str("</style>\n</head>\n<body>\n<main class=\"sheet\">\n");

    for label in labels {
        html.push_str(&render_label(label, width_cm));
        html.push('\n');
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

pub fn render_label(label: &Label, width_cm: f64) -> String {
    let room = if label.room.is_empty() {
        UNASSIGNED_ROOM
    } else {
        label.room.as_str()
    };
    let title = if label.continuation {
        format!("Box {} (cont.)", label.number)
    } else {
        format!("Box {}", label.number)
    };

    let rows: String = if label.items.is_empty() {
        "<tr><td></td></tr>".to_string()
    } else {
        label
            .items
            .iter()
            .map(|item| format!("<tr><td>{}</td></tr>", escape_html(item)))
            .collect()
    };

    format!(
        "<table style=\"width:{w}cm; max-width:{w}cm;\"><thead><tr><th>{title} • {room}</th></tr><tr><th class=\"contents\">Contents</th></tr></thead><tbody>{rows}</tbody></table>",
        w = width_cm,
        title = title,
        room = escape_html(room),
        rows = rows,
    )
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
