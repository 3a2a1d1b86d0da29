//! Label sizing and page orientation.
//!
//! Heights are a model of the printed label in millimetres, not a measurement
//! of rendered output. Labels flow left to right, top to bottom, in input
//! order, on an A4 sheet.

use crate::domain::model::MovingBox;
use std::fmt;

pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;
pub const SHEET_PADDING_MM: f64 = 10.0;
pub const LABEL_GAP_MM: f64 = 6.0;

pub const LABEL_HEADER_HEIGHT_MM: f64 = 9.0;
pub const LABEL_SUBHEADING_HEIGHT_MM: f64 = 6.0;
pub const LABEL_ITEM_HEIGHT_MM: f64 = 6.0;
pub const LABEL_BORDER_HEIGHT_MM: f64 = 1.5;

/// Everything on a label except the item rows.
pub const LABEL_CHROME_HEIGHT_MM: f64 =
    LABEL_HEADER_HEIGHT_MM + LABEL_SUBHEADING_HEIGHT_MM + LABEL_BORDER_HEIGHT_MM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One printable label. A box whose contents exceed the height limit yields
/// several labels; every one after the first is a continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub number: u32,
    pub room: String,
    pub items: Vec<String>,
    pub continuation: bool,
}

/// Estimated printed height of a label with `item_count` rows. An empty box
/// still takes one blank row.
pub fn estimate_label_height(item_count: usize) -> f64 {
    let rows = item_count.max(1) as f64;
    LABEL_HEADER_HEIGHT_MM + LABEL_SUBHEADING_HEIGHT_MM + rows * LABEL_ITEM_HEIGHT_MM + LABEL_BORDER_HEIGHT_MM
}

/// Greedy shelf packing of fixed-width labels onto one page whose printable
/// area is the page minus [`SHEET_PADDING_MM`] on every side.
pub fn fits_on_one_page(boxes: &[MovingBox], label_width_mm: f64, page_width_mm: f64, page_height_mm: f64) -> bool {
    let heights = boxes.iter().map(|b| estimate_label_height(b.items.len()));
    heights_fit_on_one_page(heights, label_width_mm, page_width_mm, page_height_mm)
}

fn heights_fit_on_one_page(
    heights: impl IntoIterator<Item = f64>,
    label_width_mm: f64,
    page_width_mm: f64,
    page_height_mm: f64,
) -> bool {
    let usable_width = page_width_mm - SHEET_PADDING_MM * 2.0;
    let usable_height = page_height_mm - SHEET_PADDING_MM * 2.0;

    let mut row_x = 0.0;
    let mut row_max_height: f64 = 0.0;
    let mut total_height = 0.0;

    for height in heights {
        if row_x > 0.0 && row_x + LABEL_GAP_MM + label_width_mm > usable_width {
            total_height += row_max_height + LABEL_GAP_MM;
            row_x = 0.0;
            row_max_height = 0.0;
        }

        let gap = if row_x > 0.0 { LABEL_GAP_MM } else { 0.0 };
        row_x += gap + label_width_mm;
        row_max_height = row_max_height.max(height);
    }

    total_height += row_max_height;
    total_height <= usable_height
}

/// Landscape when the whole batch fits on one landscape sheet, portrait
/// otherwise. Portrait is never checked; it is the fallback.
pub fn choose_orientation(boxes: &[MovingBox], label_width_cm: f64) -> Orientation {
    let heights = boxes.iter().map(|b| estimate_label_height(b.items.len()));
    orientation_for_heights(heights, label_width_cm)
}

/// [`choose_orientation`] over already split labels.
pub fn choose_orientation_for_labels(labels: &[Label], label_width_cm: f64) -> Orientation {
    let heights = labels.iter().map(|l| estimate_label_height(l.items.len()));
    orientation_for_heights(heights, label_width_cm)
}

fn orientation_for_heights(heights: impl IntoIterator<Item = f64>, label_width_cm: f64) -> Orientation {
    let label_width_mm = label_width_cm * 10.0;

    // landscape swaps the sheet dimensions
    let orientation = if heights_fit_on_one_page(heights, label_width_mm, A4_HEIGHT_MM, A4_WIDTH_MM) {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    };

    tracing::debug!("Chose {} orientation for {}cm labels", orientation, label_width_cm);
    orientation
}

/// Chunks items into consecutive columns that each fit under `max_height_mm`.
/// No items is treated as one blank item. Every column holds at least one row.
pub fn split_items_into_columns(items: &[String], max_height_mm: f64) -> Vec<Vec<String>> {
    if items.is_empty() {
        return vec![vec![String::new()]];
    }

    let available = (max_height_mm - LABEL_CHROME_HEIGHT_MM).max(LABEL_ITEM_HEIGHT_MM);
    let rows_per_column = ((available / LABEL_ITEM_HEIGHT_MM).floor() as usize).max(1);

    items.chunks(rows_per_column).map(<[String]>::to_vec).collect()
}

/// Expands boxes into labels. Without a height limit each box is one label;
/// with one, long contents continue on extra labels for the same box.
pub fn layout_labels(boxes: &[MovingBox], max_height_mm: Option<f64>) -> Vec<Label> {
    let mut labels = Vec::with_capacity(boxes.len());

    for moving_box in boxes {
        let columns = match max_height_mm {
            Some(max_height) => split_items_into_columns(&moving_box.items, max_height),
            None => vec![moving_box.items.clone()],
        };

        for (index, items) in columns.into_iter().enumerate() {
            labels.push(Label {
                number: moving_box.number,
                room: moving_box.room.clone(),
                items,
                continuation: index > 0,
            });
        }
    }

    labels
}
