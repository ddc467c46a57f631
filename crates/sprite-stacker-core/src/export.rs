use crate::model::SheetLayout;
use serde_json::{Value, json};

/// Serialize the whole `SheetLayout` as a JSON object
/// `{ sheet, cells, meta }` (array-of-cells style).
/// Suitable for generic tooling and simple consumption.
pub fn to_json_array<K: ToString + Clone>(layout: &SheetLayout<K>) -> Value {
    let cells: Vec<Value> = layout
        .cells
        .iter()
        .map(|p| {
            json!({
                "key": p.key.to_string(),
                "index": p.index,
                "cell": {"x": p.cell.x, "y": p.cell.y, "w": p.cell.w, "h": p.cell.h},
                "sourceSize": {"w": p.source_size.0, "h": p.source_size.1},
            })
        })
        .collect();
    json!({
        "sheet": sheet_value(layout),
        "cells": cells,
        "meta": &layout.meta,
    })
}

/// Flatten cells keyed by name.
/// Shape: `{ cells: { name: { index, cell, sourceSize } }, sheet, meta }`.
/// Compatible with pipelines expecting TexturePacker-like JSON hash.
pub fn to_json_hash<K: ToString + Clone>(layout: &SheetLayout<K>) -> Value {
    let mut cells = serde_json::Map::new();
    for p in &layout.cells {
        cells.insert(
            p.key.to_string(),
            json!({
                "index": p.index,
                "cell": {"x": p.cell.x, "y": p.cell.y, "w": p.cell.w, "h": p.cell.h},
                "sourceSize": {"w": p.source_size.0, "h": p.source_size.1},
            }),
        );
    }
    json!({
        "cells": Value::Object(cells),
        "sheet": sheet_value(layout),
        "meta": &layout.meta,
    })
}

fn sheet_value<K>(layout: &SheetLayout<K>) -> Value {
    json!({
        "width": layout.width,
        "height": layout.height,
        "columns": layout.columns,
        "rows": layout.rows,
    })
}
