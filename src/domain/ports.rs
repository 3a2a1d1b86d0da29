use crate::utils::error::Result;

/// Persistent key-value byte store backing the box collection.
pub trait BoxStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn set(&self, key: &str, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn boxes_key(&self) -> &str;
    fn label_width_key(&self) -> &str;
    fn default_label_width_cm(&self) -> f64;
    fn max_label_height_cm(&self) -> Option<f64>;
}
