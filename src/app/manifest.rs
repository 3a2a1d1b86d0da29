//! The box collection manager: keeps numbers unique, persists every change
//! and feeds the CSV codec and label renderer.

use crate::app::persistence::{load_boxes, load_label_width, save_boxes, save_label_width};
use crate::app::selection::LabelSelection;
use crate::core::csv_codec::{from_csv, to_csv};
use crate::core::layout::Orientation;
use crate::core::render::{render_sheet, LabelSheet};
use crate::core::{BoxId, BoxStore, ConfigProvider, MovingBox};
use crate::utils::error::{ManifestError, Result};
use crate::utils::validation::{check_label_width, check_max_height};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLabels {
    pub html: String,
    pub orientation: Orientation,
    pub box_count: usize,
    pub label_count: usize,
    pub message: String,
}

pub struct Manifest<S: BoxStore> {
    store: S,
    boxes_key: String,
    label_width_key: String,
    default_label_width_cm: f64,
    boxes: Vec<MovingBox>,
}

/// Highest box number plus one; 1 for an empty collection.
pub fn next_box_number(boxes: &[MovingBox]) -> u32 {
    boxes.iter().map(|b| b.number).max().unwrap_or(0).saturating_add(1)
}

/// Splits newline-separated text into trimmed, non-blank items.
pub fn parse_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl<S: BoxStore> Manifest<S> {
    pub async fn open<C: ConfigProvider>(store: S, config: &C) -> Result<Self> {
        let boxes = load_boxes(&store, config.boxes_key()).await?;
        tracing::debug!("Loaded {} boxes", boxes.len());

        Ok(Self {
            store,
            boxes_key: config.boxes_key().to_string(),
            label_width_key: config.label_width_key().to_string(),
            default_label_width_cm: config.default_label_width_cm(),
            boxes,
        })
    }

    pub fn boxes(&self) -> &[MovingBox] {
        &self.boxes
    }

    pub fn get(&self, id: &BoxId) -> Option<&MovingBox> {
        self.boxes.iter().find(|b| &b.id == id)
    }

    pub fn total_items(&self) -> usize {
        self.boxes.iter().map(|b| b.items.len()).sum()
    }

    pub fn next_box_number(&self) -> u32 {
        next_box_number(&self.boxes)
    }

    pub async fn add_box(&mut self, number: u32, room: &str, items: &[String]) -> Result<BoxId> {
        self.ensure_number_free(number, None)?;

        let items = items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        let moving_box = MovingBox::new(number, room.trim(), items);
        let id = moving_box.id.clone();

        let mut next = self.boxes.clone();
        next.push(moving_box);
        self.persist(next).await?;

        tracing::info!("Box {} added", number);
        Ok(id)
    }

    pub async fn remove_box(&mut self, id: &BoxId) -> Result<MovingBox> {
        let index = self.index_of(id)?;

        let mut next = self.boxes.clone();
        let removed = next.remove(index);
        self.persist(next).await?;

        tracing::info!("Box {} removed", removed.number);
        Ok(removed)
    }

    /// Returns `false` when the box already has `number`.
    pub async fn renumber(&mut self, id: &BoxId, number: u32) -> Result<bool> {
        let index = self.index_of(id)?;
        if self.boxes[index].number == number {
            return Ok(false);
        }
        self.ensure_number_free(number, Some(id))?;

        let mut next = self.boxes.clone();
        next[index].number = number;
        self.persist(next).await?;

        tracing::info!("Box number updated to {}", number);
        Ok(true)
    }

    /// Blank items are ignored and reported as `false`.
    pub async fn add_item(&mut self, id: &BoxId, item: &str) -> Result<bool> {
        let index = self.index_of(id)?;
        let item = item.trim();
        if item.is_empty() {
            return Ok(false);
        }

        let mut next = self.boxes.clone();
        next[index].items.push(item.to_string());
        self.persist(next).await?;
        Ok(true)
    }

    /// Out-of-range positions leave the box unchanged.
    pub async fn remove_item(&mut self, id: &BoxId, position: usize) -> Result<Option<String>> {
        let index = self.index_of(id)?;
        if position >= self.boxes[index].items.len() {
            return Ok(None);
        }

        let mut next = self.boxes.clone();
        let removed = next[index].items.remove(position);
        self.persist(next).await?;
        Ok(Some(removed))
    }

    pub fn export_csv(&self) -> String {
        to_csv(&self.boxes)
    }

    /// Replaces the whole collection with the decoded CSV and returns how many
    /// boxes it now holds.
    pub async fn import_csv(&mut self, content: &str) -> Result<usize> {
        let imported = from_csv(content);
        let count = imported.len();
        self.persist(imported).await?;

        tracing::info!("Imported {} boxes from CSV", count);
        Ok(count)
    }

    pub async fn label_width(&self) -> Result<f64> {
        load_label_width(&self.store, &self.label_width_key, self.default_label_width_cm).await
    }

    pub async fn remember_label_width(&self, width_cm: f64) -> Result<()> {
        check_label_width(width_cm)?;
        save_label_width(&self.store, &self.label_width_key, width_cm).await
    }

    pub fn generate_labels(&self, selection: &LabelSelection, sheet: &LabelSheet) -> Result<GeneratedLabels> {
        check_label_width(sheet.width_cm)?;

        if let Some(max_height_cm) = sheet.max_height_cm {
            check_max_height(max_height_cm)?;
        }

        let selected = selection.resolve(&self.boxes);
        if selected.is_empty() {
            return Err(ManifestError::ValidationError {
                message: "Select at least one box to generate labels.".to_string(),
            });
        }

        let rendered = render_sheet(&selected, sheet);
        tracing::info!(
            "Rendered {} labels for {} boxes ({})",
            rendered.label_count,
            selected.len(),
            rendered.orientation
        );

        Ok(GeneratedLabels {
            html: rendered.html,
            orientation: rendered.orientation,
            box_count: selected.len(),
            label_count: rendered.label_count,
            message: format!("Generated {} packing labels.", selected.len()),
        })
    }

    fn index_of(&self, id: &BoxId) -> Result<usize> {
        self.boxes
            .iter()
            .position(|b| &b.id == id)
            .ok_or_else(|| ManifestError::BoxNotFound { id: id.to_string() })
    }

    fn ensure_number_free(&self, number: u32, except: Option<&BoxId>) -> Result<()> {
        if number < 1 {
            return Err(ManifestError::ValidationError {
                message: "Box number must be a positive whole number.".to_string(),
            });
        }

        let taken = self
            .boxes
            .iter()
            .any(|b| b.number == number && Some(&b.id) != except);
        if taken {
            return Err(ManifestError::DuplicateBoxNumber { number });
        }
        Ok(())
    }

    async fn persist(&mut self, next: Vec<MovingBox>) -> Result<()> {
        self.boxes = save_boxes(&self.store, &self.boxes_key, &next).await?;
        Ok(())
    }
}
