use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
}

/// A sprite placed at a grid cell of the sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement<K = String> {
    /// User-specified key (e.g., filename or asset path).
    pub key: K,
    /// Zero-based placement index; cell column is `index % sheet_width`,
    /// cell row is `index / sheet_width`.
    pub index: usize,
    /// Cell rectangle within the sheet.
    pub cell: Rect,
    /// Original (unsliced) source image size.
    pub source_size: (u32, u32),
}

/// Sheet-level metadata (fields used by exporters and tooling).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version for JSON metadata formats.
    /// String to allow non-integer versions like "1.0"; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub format: String,
    pub tile_size: u32,
    pub stack_height: u32,
    pub cell_size: (u32, u32),
    pub sheet_width: u32,
}

/// The logical record of a composed sheet: grid shape plus one placement per
/// sprite, in placement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout<K = String> {
    /// Sheet pixel width (`sheet_width * cell_width`).
    pub width: u32,
    /// Sheet pixel height (`rows * cell_height`); zero when no sprites.
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
    pub cells: Vec<Placement<K>>,
    pub meta: Meta,
}

/// Statistics about a composed sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SheetStats {
    /// Number of sprites placed.
    pub num_sprites: usize,
    pub columns: u32,
    pub rows: u32,
    /// Sheet area in pixels (width * height).
    pub sheet_area: u64,
    /// Area covered by occupied cells.
    pub used_cell_area: u64,
    /// used_cell_area / sheet_area (0.0 to 1.0). Trailing cells of the last
    /// row are the only waste in a row-major grid.
    pub occupancy: f64,
}

impl<K> SheetLayout<K> {
    /// Computes grid statistics for this layout.
    pub fn stats(&self) -> SheetStats {
        let sheet_area = (self.width as u64) * (self.height as u64);
        let used_cell_area: u64 = self
            .cells
            .iter()
            .map(|p| (p.cell.w as u64) * (p.cell.h as u64))
            .sum();
        let occupancy = if sheet_area > 0 {
            used_cell_area as f64 / sheet_area as f64
        } else {
            0.0
        };
        SheetStats {
            num_sprites: self.cells.len(),
            columns: self.columns,
            rows: self.rows,
            sheet_area,
            used_cell_area,
            occupancy,
        }
    }
}

impl SheetStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Sprites: {}, Grid: {}x{}, Occupancy: {:.2}%, Sheet Area: {} px², Used Area: {} px²",
            self.num_sprites,
            self.columns,
            self.rows,
            self.occupancy * 100.0,
            self.sheet_area,
            self.used_cell_area,
        )
    }

    /// Returns the number of empty trailing cells on the last row.
    pub fn empty_cells(&self) -> u64 {
        let total = (self.columns as u64) * (self.rows as u64);
        total.saturating_sub(self.num_sprites as u64)
    }
}
