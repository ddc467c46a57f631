use crate::config::{SortOrder, StackerConfig};
use crate::error::Result;
use crate::model::{Meta, Placement, Rect, SheetLayout};

/// Sheet pixel dimensions and row count for `n` sprites:
/// `(sheet_width * cell_width, rows * cell_height, rows)` with
/// rows = ceil(n / sheet_width). Zero sprites yield a zero-height sheet.
pub fn sheet_dimensions(n: usize, cfg: &StackerConfig) -> (u32, u32, u32) {
    let rows = (n as u32).div_ceil(cfg.sheet_width);
    (
        cfg.sheet_width * cfg.cell_width,
        rows * cfg.cell_height,
        rows,
    )
}

/// Pixel rectangle of grid cell `index`: row-major, left-to-right,
/// top-to-bottom.
pub fn cell_rect(index: usize, cfg: &StackerConfig) -> Rect {
    let col = index as u32 % cfg.sheet_width;
    let row = index as u32 / cfg.sheet_width;
    Rect::new(
        col * cfg.cell_width,
        row * cfg.cell_height,
        cfg.cell_width,
        cfg.cell_height,
    )
}

/// Computes a sheet layout without compositing pixel data.
///
/// Inputs are `(key, source width, source height)` per sprite. Sorting
/// follows `cfg.sort_order` like the full pipeline, so the returned cells
/// match what `build_sheet` would produce for the same keys.
pub fn layout_sheet<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: StackerConfig,
) -> Result<SheetLayout<String>> {
    cfg.validate()?;
    let mut keyed: Vec<(String, u32, u32)> = inputs
        .into_iter()
        .map(|(k, w, h)| (k.into(), w, h))
        .collect();
    if matches!(cfg.sort_order, SortOrder::NameAsc) {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }
    let (width, height, rows) = sheet_dimensions(keyed.len(), &cfg);
    let cells = keyed
        .into_iter()
        .enumerate()
        .map(|(index, (key, w, h))| Placement {
            key,
            index,
            cell: cell_rect(index, &cfg),
            source_size: (w, h),
        })
        .collect();
    Ok(SheetLayout {
        width,
        height,
        columns: cfg.sheet_width,
        rows,
        cells,
        meta: sheet_meta(&cfg),
    })
}

/// Builds sheet metadata from the configuration.
pub(crate) fn sheet_meta(cfg: &StackerConfig) -> Meta {
    Meta {
        schema_version: "1".into(),
        app: "sprite-stacker".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        format: "RGBA8888".into(),
        tile_size: cfg.tile_size,
        stack_height: cfg.stack_height,
        cell_size: (cfg.cell_width, cfg.cell_height),
        sheet_width: cfg.sheet_width,
    }
}
