use crate::compositing::alpha_blit;
use crate::config::{SortOrder, StackerConfig};
use crate::error::{Result, StackerError};
use crate::model::{Placement, SheetLayout};
use crate::sheet::{cell_rect, sheet_dimensions, sheet_meta};
use crate::slicer::slice_tiles;
use crate::stack::compose_stack;
use image::{DynamicImage, RgbaImage};
use tracing::{debug, instrument};

/// In-memory sprite source: a key plus the decoded image holding the
/// sprite's slices stacked vertically.
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a sheet run: layout metadata and the RGBA sheet.
pub struct SheetOutput {
    pub layout: SheetLayout,
    pub rgba: RgbaImage,
}

impl SheetOutput {
    /// Computes grid statistics for this output.
    /// This is a convenience method that delegates to `layout.stats()`.
    pub fn stats(&self) -> crate::model::SheetStats {
        self.layout.stats()
    }
}

struct Prep {
    key: String,
    sprite: RgbaImage,
    orig_size: (u32, u32),
}

#[instrument(skip_all)]
/// Slices and stacks every input, then composites the stacked sprites into a
/// row-major sheet using configuration `cfg`.
///
/// Notes:
/// - Sorting is stable for deterministic results.
/// - Empty `inputs` produce a zero-height sheet rather than an error.
/// - A source too short to yield a single slice is rejected as invalid input.
pub fn build_sheet(inputs: Vec<InputImage>, cfg: StackerConfig) -> Result<SheetOutput> {
    cfg.validate()?;

    let prepared = prepare_inputs(&inputs, &cfg)?;

    let (width, height, rows) = sheet_dimensions(prepared.len(), &cfg);
    let mut canvas = RgbaImage::new(width, height);
    let mut cells: Vec<Placement> = Vec::with_capacity(prepared.len());
    for (index, p) in prepared.into_iter().enumerate() {
        let cell = cell_rect(index, &cfg);
        alpha_blit(&p.sprite, &mut canvas, cell.x as i32, cell.y as i32);
        cells.push(Placement {
            key: p.key,
            index,
            cell,
            source_size: p.orig_size,
        });
    }

    let layout = SheetLayout {
        width,
        height,
        columns: cfg.sheet_width,
        rows,
        cells,
        meta: sheet_meta(&cfg),
    };
    Ok(SheetOutput {
        layout,
        rgba: canvas,
    })
}

fn prepare_inputs(inputs: &[InputImage], cfg: &StackerConfig) -> Result<Vec<Prep>> {
    let mut out = Vec::with_capacity(inputs.len());
    for inp in inputs.iter() {
        let rgba = inp.image.to_rgba8();
        let (iw, ih) = rgba.dimensions();
        let slices = slice_tiles(&rgba, cfg.tile_size);
        if slices.is_empty() {
            return Err(StackerError::InvalidInput(format!(
                "{}: source {}x{} yields no {}px slices",
                inp.key, iw, ih, cfg.tile_size
            )));
        }
        debug!(key = %inp.key, slices = slices.len(), "stacking sprite");
        let sprite = compose_stack(&slices, cfg)?;
        out.push(Prep {
            key: inp.key.clone(),
            sprite,
            orig_size: (iw, ih),
        });
    }
    // stable sort per config
    match cfg.sort_order {
        SortOrder::None => {}
        SortOrder::NameAsc => out.sort_by(|a, b| a.key.cmp(&b.key)),
    }
    Ok(out)
}
