//! Flat `number,room,item` CSV export and import of the box collection.
//!
//! One row per item, repeating the box number and room; a box without items
//! is written as a single row with an empty item so it survives a round trip.

use crate::core::sanitize::{parse_box_number, sort_by_number};
use crate::domain::model::{BoxId, MovingBox};
use std::collections::HashMap;

pub const CSV_HEADER: [&str; 3] = ["number", "room", "item"];

/// Encodes boxes as CSV, sorted by number, rows joined with `\n`.
pub fn to_csv(boxes: &[MovingBox]) -> String {
    let mut lines = vec![CSV_HEADER.join(",")];

    for moving_box in sort_by_number(boxes) {
        let room = escape_field(&moving_box.room);

        if moving_box.items.is_empty() {
            lines.push(format!("{},{},", moving_box.number, room));
            continue;
        }

        for item in &moving_box.items {
            lines.push(format!("{},{},{}", moving_box.number, room, escape_field(item)));
        }
    }

    lines.join("\n")
}

/// Decodes CSV text into boxes, one per distinct number, with fresh ids.
pub fn from_csv(content: &str) -> Vec<MovingBox> {
    from_csv_with_ids(content, BoxId::generate)
}

/// Like [`from_csv`], drawing ids from `next_id` in order of first appearance.
pub fn from_csv_with_ids(content: &str, mut next_id: impl FnMut() -> BoxId) -> Vec<MovingBox> {
    let rows: Vec<&str> = split_records(content)
        .into_iter()
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();

    let Some(first_row) = rows.first() else {
        return Vec::new();
    };

    let data_rows = if is_header(first_row) { &rows[1..] } else { &rows[..] };

    let mut grouped: Vec<MovingBox> = Vec::new();
    let mut index_by_number: HashMap<u32, usize> = HashMap::new();
    let mut skipped = 0usize;

    for row in data_rows {
        let [number_text, room_text, item_text] = parse_row(row);

        let Some(number) = parse_box_number(&number_text) else {
            skipped += 1;
            continue;
        };

        let room = room_text.trim();
        let item = item_text.trim();

        match index_by_number.get(&number) {
            Some(&index) => {
                let existing = &mut grouped[index];
                // the first non-empty room wins; later rooms never override it
                if existing.room.is_empty() && !room.is_empty() {
                    existing.room = room.to_string();
                }
                if !item.is_empty() {
                    existing.items.push(item.to_string());
                }
            }
            None => {
                index_by_number.insert(number, grouped.len());
                grouped.push(MovingBox {
                    id: next_id(),
                    number,
                    room: room.to_string(),
                    items: if item.is_empty() { Vec::new() } else { vec![item.to_string()] },
                });
            }
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} CSV rows without a valid box number", skipped);
    }

    sort_by_number(&grouped)
}

fn escape_field(value: &str) -> String {
    if value.contains('"') || value.contains(',') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn is_header(row: &str) -> bool {
    let columns = parse_fields(row);
    columns.len() >= CSV_HEADER.len()
        && columns
            .iter()
            .zip(CSV_HEADER)
            .all(|(column, expected)| column.to_lowercase() == expected)
}

fn parse_row(row: &str) -> [String; 3] {
    let mut fields = parse_fields(row).into_iter();
    [
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
    ]
}

/// Quote-aware comma splitter. A `"` toggles quoted mode, except a doubled
/// `""` inside quotes, which yields one literal quote.
fn parse_fields(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(character) = chars.next() {
        match character {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(character),
        }
    }

    values.push(current);
    values
}

/// Splits on `\r?\n` outside quoted fields, so an exported item containing a
/// newline comes back as one record.
///
/// A field only counts as quoted when it opens with `"`. A stray quote in the
/// middle of a field never spans lines; `parse_fields` deals with it per row.
fn split_records(content: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((index, character)) = chars.next() {
        if in_quotes {
            if character == '"' {
                if matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match character {
            '"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            ',' => field_start = true,
            '\n' => {
                let record = &content[start..index];
                records.push(record.strip_suffix('\r').unwrap_or(record));
                start = index + 1;
                field_start = true;
            }
            _ => field_start = false,
        }
    }

    records.push(&content[start..]);
    records
}
