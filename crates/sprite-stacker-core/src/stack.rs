use crate::compositing::alpha_blit;
use crate::config::StackerConfig;
use crate::error::{Result, StackerError};
use image::RgbaImage;

/// Composites an ordered sequence of same-width slices into one stacked
/// sprite simulating layered depth.
///
/// The canvas is `(slice width, cfg.stack_height)` regardless of slice count.
/// Slices are drawn in reverse sequence order, each one pixel higher than the
/// previous, so the first slice in source order is drawn last, on top, at the
/// highest offset. With more slices than canvas rows the top layers shift off
/// the canvas and are clipped. Rows below the stack stay fully transparent; a
/// single slice ends up pasted at (0, 0) unchanged.
pub fn compose_stack(slices: &[RgbaImage], cfg: &StackerConfig) -> Result<RgbaImage> {
    let first = slices
        .first()
        .ok_or_else(|| StackerError::InvalidInput("no slices to stack".into()))?;
    let (width, _) = first.dimensions();
    let mut canvas = RgbaImage::new(width, cfg.stack_height);
    for (i, slice) in slices.iter().rev().enumerate() {
        alpha_blit(slice, &mut canvas, 0, -(i as i32));
    }
    Ok(canvas)
}
