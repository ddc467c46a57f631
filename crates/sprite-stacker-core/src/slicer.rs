use image::RgbaImage;
use image::imageops;

/// Slices `src` into `floor(H / tile_size)` full-width horizontal bands of
/// `tile_size` rows each, taken top-to-bottom with no overlap and no gap.
/// Remainder rows at the bottom (when the source height is not a multiple of
/// `tile_size`) are dropped. A zero `tile_size` or a zero-width source yields
/// no bands.
pub fn slice_tiles(src: &RgbaImage, tile_size: u32) -> Vec<RgbaImage> {
    let (w, h) = src.dimensions();
    if tile_size == 0 || w == 0 {
        return Vec::new();
    }
    (0..h / tile_size)
        .map(|i| imageops::crop_imm(src, 0, i * tile_size, w, tile_size).to_image())
        .collect()
}
