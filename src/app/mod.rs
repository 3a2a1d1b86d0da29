pub mod manifest;
pub mod persistence;
pub mod selection;

pub use manifest::{GeneratedLabels, Manifest};
pub use persistence::{load_boxes, load_label_width, save_boxes, save_label_width};
pub use selection::LabelSelection;
