use image::{Rgba, RgbaImage};
use sprite_stacker_core::compositing::alpha_blit;

fn solid(w: u32, h: u32, c: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(c))
}

#[test]
fn opaque_source_replaces_destination() {
    let src = solid(2, 2, [255, 0, 0, 255]);
    let mut canvas = solid(4, 4, [0, 0, 255, 255]);
    alpha_blit(&src, &mut canvas, 1, 1);
    assert_eq!(canvas.get_pixel(1, 1).0, [255, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(2, 2).0, [255, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(canvas.get_pixel(3, 3).0, [0, 0, 255, 255]);
}

#[test]
fn transparent_source_preserves_destination() {
    let src = solid(2, 2, [255, 255, 255, 0]);
    let mut canvas = solid(2, 2, [0, 0, 255, 255]);
    alpha_blit(&src, &mut canvas, 0, 0);
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 255, 255]);
    assert_eq!(canvas.get_pixel(1, 1).0, [0, 0, 255, 255]);
}

#[test]
fn partial_alpha_blends_instead_of_copying() {
    // half-transparent red over opaque blue: both channels must contribute
    let src = solid(1, 1, [255, 0, 0, 128]);
    let mut canvas = solid(1, 1, [0, 0, 255, 255]);
    alpha_blit(&src, &mut canvas, 0, 0);
    let [r, g, b, a] = canvas.get_pixel(0, 0).0;
    assert_eq!(a, 255);
    assert_eq!(g, 0);
    assert!(r > 100 && r < 160, "red channel blended, got {}", r);
    assert!(b > 100 && b < 160, "blue channel blended, got {}", b);
    assert_eq!(canvas.get_pixel(0, 0).0, [128, 0, 127, 255]);
}

#[test]
fn partial_alpha_onto_transparent_canvas_copies_source() {
    let src = solid(1, 1, [10, 20, 30, 77]);
    let mut canvas = RgbaImage::new(1, 1);
    alpha_blit(&src, &mut canvas, 0, 0);
    assert_eq!(canvas.get_pixel(0, 0).0, [10, 20, 30, 77]);
}

#[test]
fn negative_offsets_clip_instead_of_wrapping() {
    let mut src = solid(2, 2, [0, 0, 0, 0]);
    src.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    src.put_pixel(1, 1, Rgba([0, 255, 0, 255]));
    let mut canvas = RgbaImage::new(2, 2);
    alpha_blit(&src, &mut canvas, -1, -1);
    // only the source's bottom-right pixel remains, at the canvas origin
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 255, 0, 255]);
    assert_eq!(canvas.get_pixel(1, 0).0, [0, 0, 0, 0]);
    assert_eq!(canvas.get_pixel(0, 1).0, [0, 0, 0, 0]);
    assert_eq!(canvas.get_pixel(1, 1).0, [0, 0, 0, 0]);
}

#[test]
fn content_past_the_right_and_bottom_edges_clips() {
    let src = solid(3, 3, [255, 0, 0, 255]);
    let mut canvas = RgbaImage::new(2, 2);
    alpha_blit(&src, &mut canvas, 1, 1);
    assert_eq!(canvas.get_pixel(1, 1).0, [255, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 0]);
}
