use move_manifest::core::layout::{layout_labels, A4_HEIGHT_MM, A4_WIDTH_MM};
use move_manifest::core::render::render_sheet;
use move_manifest::{
    choose_orientation, estimate_label_height, fits_on_one_page, render_labels, split_items_into_columns,
    LabelSheet, MovingBox, Orientation,
};

fn with_items(number: u32, count: usize) -> MovingBox {
    MovingBox::new(number, "Room", (1..=count).map(|i| format!("Item {}", i)).collect())
}

#[test]
fn test_two_small_boxes_print_landscape() {
    let boxes = vec![
        MovingBox::new(1, "Kitchen", vec!["Plates".to_string(), "Cups".to_string()]),
        MovingBox::new(2, "Office", vec!["Laptop".to_string()]),
    ];

    assert_eq!(choose_orientation(&boxes, 8.0), Orientation::Landscape);
}

#[test]
fn test_twenty_full_boxes_print_portrait() {
    let boxes: Vec<MovingBox> = (1..=20).map(|n| with_items(n, 10)).collect();

    assert_eq!(choose_orientation(&boxes, 12.0), Orientation::Portrait);
}

#[test]
fn test_wider_labels_never_flip_back_to_landscape() {
    let boxes: Vec<MovingBox> = (1..=6).map(|n| with_items(n, 4)).collect();

    let mut seen_portrait = false;
    for tenth in 10..=280 {
        let width_cm = tenth as f64 / 10.0;
        match choose_orientation(&boxes, width_cm) {
            Orientation::Portrait => seen_portrait = true,
            Orientation::Landscape => assert!(!seen_portrait, "landscape again at {}cm", width_cm),
        }
    }
    assert!(seen_portrait);
}

#[test]
fn test_single_label_taller_than_sheet_does_not_fit() {
    // 30 items is 196.5mm, taller than the 190mm usable landscape height
    let boxes = vec![with_items(1, 30)];

    assert_eq!(estimate_label_height(30), 196.5);
    assert!(!fits_on_one_page(&boxes, 80.0, A4_HEIGHT_MM, A4_WIDTH_MM));
    assert!(fits_on_one_page(&boxes, 80.0, A4_WIDTH_MM, A4_HEIGHT_MM));
}

#[test]
fn test_split_keeps_order_across_columns() {
    let items: Vec<String> = (1..=10).map(|i| format!("Item {}", i)).collect();

    let columns = split_items_into_columns(&items, 45.0);

    assert_eq!(columns.len(), 3);
    assert_eq!(columns.concat(), items);
}

#[test]
fn test_layout_preserves_box_order() {
    let boxes = vec![with_items(5, 1), with_items(2, 9), with_items(9, 0)];

    let labels = layout_labels(&boxes, Some(50.0));

    let numbers: Vec<u32> = labels.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![5, 2, 2, 9]);
}

#[test]
fn test_render_document_shape() {
    let boxes = vec![
        MovingBox::new(12, "Office", vec!["Laptop".to_string(), "Keyboard".to_string()]),
        MovingBox::new(13, "", vec![]),
    ];

    let html = render_labels(&boxes, 15.0);

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<tr><th>Box 12 • Office</th></tr>"));
    assert!(html.contains("<tr><th>Box 13 • Unassigned room</th></tr>"));
    assert!(html.contains("<tbody><tr><td>Laptop</td></tr><tr><td>Keyboard</td></tr></tbody>"));
    assert_eq!(html.matches("Contents").count(), 2);
}

#[test]
fn test_split_sheet_reports_segment_count() {
    let boxes = vec![with_items(1, 20)];

    let rendered = render_sheet(&boxes, &LabelSheet::new(6.0).with_max_height(7.0));

    // 7cm leaves room for 8 rows per label
    assert_eq!(rendered.label_count, 3);
    assert_eq!(rendered.html.matches("Box 1 (cont.)").count(), 2);
}
