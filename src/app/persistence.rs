use crate::core::sanitize::{sanitize_value, sort_by_number};
use crate::core::{BoxStore, MovingBox};
use crate::utils::error::Result;

/// Loads the stored collection. A missing key or unreadable JSON yields an
/// empty list; records are sanitized and sorted by number.
pub async fn load_boxes<S: BoxStore>(store: &S, key: &str) -> Result<Vec<MovingBox>> {
    let Some(stored) = store.get(key).await? else {
        tracing::debug!("No stored boxes under '{}'", key);
        return Ok(Vec::new());
    };

    match serde_json::from_slice::<serde_json::Value>(&stored) {
        Ok(raw) => Ok(sort_by_number(&sanitize_value(&raw))),
        Err(e) => {
            tracing::warn!("Ignoring unreadable box data under '{}': {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Sorts, writes and returns the sorted collection.
pub async fn save_boxes<S: BoxStore>(store: &S, key: &str, boxes: &[MovingBox]) -> Result<Vec<MovingBox>> {
    let sorted = sort_by_number(boxes);
    let data = serde_json::to_vec_pretty(&sorted)?;
    store.set(key, &data).await?;
    tracing::debug!("Saved {} boxes under '{}'", sorted.len(), key);
    Ok(sorted)
}

/// Remembered label width, falling back to `default_cm` when absent or not a
/// positive number.
pub async fn load_label_width<S: BoxStore>(store: &S, key: &str, default_cm: f64) -> Result<f64> {
    let stored = store.get(key).await?;

    let width = stored
        .as_deref()
        .and_then(|data| std::str::from_utf8(data).ok())
        .and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|width| width.is_finite() && *width > 0.0);

    Ok(width.unwrap_or(default_cm))
}

pub async fn save_label_width<S: BoxStore>(store: &S, key: &str, width_cm: f64) -> Result<()> {
    store.set(key, width_cm.to_string().as_bytes()).await
}
