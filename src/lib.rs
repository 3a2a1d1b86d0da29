pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{GeneratedLabels, LabelSelection, Manifest};
pub use config::cli::{LocalStorage, MemoryStorage};
pub use config::toml_config::ManifestConfig;
pub use crate::core::csv_codec::{from_csv, to_csv};
pub use crate::core::layout::{
    choose_orientation, estimate_label_height, fits_on_one_page, split_items_into_columns, Orientation,
};
pub use crate::core::render::{render_labels, LabelSheet};
pub use crate::core::sanitize::{sanitize, sort_by_number};
pub use domain::model::{BoxId, MovingBox};
pub use utils::error::{ManifestError, Result};
