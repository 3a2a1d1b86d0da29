pub mod csv_codec;
pub mod layout;
pub mod render;
pub mod sanitize;

pub use crate::domain::model::{BoxId, MovingBox};
pub use crate::domain::ports::{BoxStore, ConfigProvider};
pub use crate::utils::error::Result;
