use sprite_stacker_core::{StackerConfig, layout_sheet, to_json_array, to_json_hash};

fn sample_layout() -> sprite_stacker_core::SheetLayout<String> {
    let items = vec![
        ("tank.png".to_string(), 16, 48),
        ("barrel.png".to_string(), 16, 32),
    ];
    layout_sheet(items, StackerConfig::default()).expect("layout")
}

#[test]
fn json_array_has_sheet_cells_and_meta() {
    let layout = sample_layout();
    let v = to_json_array(&layout);

    assert_eq!(v["sheet"]["width"], 192);
    assert_eq!(v["sheet"]["columns"], 12);
    let cells = v["cells"].as_array().expect("cells array");
    assert_eq!(cells.len(), 2);
    // name_asc: barrel sorts before tank
    assert_eq!(cells[0]["key"], "barrel.png");
    assert_eq!(cells[0]["cell"]["x"], 0);
    assert_eq!(cells[1]["key"], "tank.png");
    assert_eq!(cells[1]["cell"]["x"], 16);
    assert_eq!(cells[1]["sourceSize"]["h"], 48);
    assert_eq!(v["meta"]["app"], "sprite-stacker");
    assert_eq!(v["meta"]["tile_size"], 16);
}

#[test]
fn json_hash_keys_cells_by_name() {
    let layout = sample_layout();
    let v = to_json_hash(&layout);

    let cells = v["cells"].as_object().expect("cells object");
    assert_eq!(cells.len(), 2);
    assert_eq!(v["cells"]["tank.png"]["index"], 1);
    assert_eq!(v["cells"]["tank.png"]["cell"]["x"], 16);
    assert_eq!(v["cells"]["barrel.png"]["cell"]["y"], 0);
    assert_eq!(v["sheet"]["height"], 16);
    assert_eq!(v["meta"]["sheet_width"], 12);
}

#[test]
fn meta_round_trips_through_serde() {
    let layout = sample_layout();
    let s = serde_json::to_string(&layout).expect("serialize");
    let back: sprite_stacker_core::SheetLayout<String> =
        serde_json::from_str(&s).expect("deserialize");
    assert_eq!(back.cells.len(), layout.cells.len());
    assert_eq!(back.meta.cell_size, (16, 16));
}
