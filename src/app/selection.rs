use crate::core::{BoxId, MovingBox};
use std::collections::HashSet;

/// Which boxes go into a label batch. Tracks exclusions, so boxes added
/// later are selected by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSelection {
    excluded: HashSet<BoxId>,
}

impl LabelSelection {
    pub fn all() -> Self {
        Self::default()
    }

    /// Selects exactly `ids`; an empty list selects everything.
    pub fn only(boxes: &[MovingBox], ids: &[BoxId]) -> Self {
        if ids.is_empty() {
            return Self::all();
        }

        let excluded = boxes
            .iter()
            .filter(|b| !ids.contains(&b.id))
            .map(|b| b.id.clone())
            .collect();
        Self { excluded }
    }

    pub fn excluding(ids: impl IntoIterator<Item = BoxId>) -> Self {
        Self::all().without(ids)
    }

    /// Drops `ids` from the current selection.
    pub fn without(mut self, ids: impl IntoIterator<Item = BoxId>) -> Self {
        self.excluded.extend(ids);
        self
    }

    pub fn toggle(&mut self, id: &BoxId) {
        if !self.excluded.remove(id) {
            self.excluded.insert(id.clone());
        }
    }

    pub fn select_all(&mut self) {
        self.excluded.clear();
    }

    pub fn clear_all(&mut self, boxes: &[MovingBox]) {
        self.excluded = boxes.iter().map(|b| b.id.clone()).collect();
    }

    pub fn is_selected(&self, id: &BoxId) -> bool {
        !self.excluded.contains(id)
    }

    /// Selected boxes in collection order.
    pub fn resolve(&self, boxes: &[MovingBox]) -> Vec<MovingBox> {
        boxes.iter().filter(|b| self.is_selected(&b.id)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MovingBox> {
        (1..=3).map(|n| MovingBox::new(n, "Room", vec![])).collect()
    }

    #[test]
    fn test_toggle_and_resolve_keep_order() {
        let boxes = sample();
        let mut selection = LabelSelection::all();

        selection.toggle(&boxes[1].id);
        assert_eq!(
            selection.resolve(&boxes).iter().map(|b| b.number).collect::<Vec<_>>(),
            vec![1, 3]
        );

        selection.toggle(&boxes[1].id);
        assert_eq!(selection.resolve(&boxes).len(), 3);
    }

    #[test]
    fn test_clear_and_select_all() {
        let boxes = sample();
        let mut selection = LabelSelection::all();

        selection.clear_all(&boxes);
        assert!(selection.resolve(&boxes).is_empty());

        selection.select_all();
        assert_eq!(selection.resolve(&boxes).len(), 3);
    }

    #[test]
    fn test_only_selects_listed_ids() {
        let boxes = sample();
        let selection = LabelSelection::only(&boxes, &[boxes[2].id.clone()]);

        let selected = selection.resolve(&boxes);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].number, 3);

        assert_eq!(LabelSelection::only(&boxes, &[]).resolve(&boxes).len(), 3);
    }

    #[test]
    fn test_only_then_without_narrows_the_batch() {
        let boxes = sample();
        let listed = [boxes[0].id.clone(), boxes[2].id.clone()];

        let selection = LabelSelection::only(&boxes, &listed).without([boxes[0].id.clone()]);

        assert_eq!(
            selection.resolve(&boxes).iter().map(|b| b.number).collect::<Vec<_>>(),
            vec![3]
        );
        assert!(!selection.is_selected(&boxes[1].id));
    }
}
