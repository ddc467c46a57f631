use image::{Rgba, RgbaImage};
use sprite_stacker_core::{StackerConfig, compose_stack, slice_tiles};

fn solid(w: u32, h: u32, c: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(c))
}

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

#[test]
fn output_size_is_width_by_stack_height_regardless_of_slice_count() {
    let cfg = StackerConfig::default();
    let one = compose_stack(&[solid(16, 16, RED)], &cfg).expect("stack");
    assert_eq!(one.dimensions(), (16, 32));

    let five: Vec<RgbaImage> = (0..5).map(|_| solid(24, 16, RED)).collect();
    let out = compose_stack(&five, &cfg).expect("stack");
    assert_eq!(out.dimensions(), (24, 32));
}

#[test]
fn single_slice_lands_at_origin_with_transparent_rows_below() {
    let cfg = StackerConfig::default();
    let mut slice = solid(8, 16, RED);
    slice.put_pixel(3, 7, Rgba(GREEN));
    let out = compose_stack(&[slice.clone()], &cfg).expect("stack");

    for y in 0..16 {
        for x in 0..8 {
            assert_eq!(out.get_pixel(x, y), slice.get_pixel(x, y), "({}, {})", x, y);
        }
    }
    for y in 16..32 {
        for x in 0..8 {
            assert_eq!(out.get_pixel(x, y).0, TRANSPARENT, "({}, {})", x, y);
        }
    }
}

#[test]
fn first_slice_is_drawn_last_one_pixel_higher() {
    // two opaque 16px slices: the second lands at y=0, the first covers it
    // from y=-1 down, so only the second's bottom row stays visible
    let cfg = StackerConfig::default();
    let out = compose_stack(&[solid(4, 16, RED), solid(4, 16, BLUE)], &cfg).expect("stack");

    for y in 0..15 {
        assert_eq!(out.get_pixel(0, y).0, RED, "row {}", y);
    }
    assert_eq!(out.get_pixel(0, 15).0, BLUE);
    for y in 16..32 {
        assert_eq!(out.get_pixel(0, y).0, TRANSPARENT, "row {}", y);
    }
}

#[test]
fn top_rows_of_upper_layers_clip_off_the_canvas() {
    // mark the first slice's top row green: at offset -1 that row falls above
    // the canvas and must not appear anywhere
    let cfg = StackerConfig::default();
    let mut first = solid(4, 16, RED);
    for x in 0..4 {
        first.put_pixel(x, 0, Rgba(GREEN));
    }
    let out = compose_stack(&[first, solid(4, 16, BLUE)], &cfg).expect("stack");
    assert!(out.pixels().all(|p| p.0 != GREEN));
}

#[test]
fn more_slices_than_canvas_rows_is_accepted() {
    // 40 single-pixel-high slices against a 32px canvas: layers past the top
    // vanish silently, the composite stays well-formed
    let cfg = StackerConfig {
        tile_size: 1,
        ..Default::default()
    };
    let slices: Vec<RgbaImage> = (0..40).map(|_| solid(2, 1, RED)).collect();
    let out = compose_stack(&slices, &cfg).expect("stack");
    assert_eq!(out.dimensions(), (2, 32));
    assert_eq!(out.get_pixel(0, 0).0, RED);
}

#[test]
fn transparent_slice_pixels_leave_lower_layers_visible() {
    // second slice opaque blue; first slice transparent except one red pixel
    let cfg = StackerConfig::default();
    let mut first = solid(4, 16, TRANSPARENT);
    first.put_pixel(2, 8, Rgba(RED));
    let out = compose_stack(&[first, solid(4, 16, BLUE)], &cfg).expect("stack");

    // first slice's (2, 8) lands at (2, 7) on top of blue
    assert_eq!(out.get_pixel(2, 7).0, RED);
    // everywhere else in the covered rows the lower blue layer shows through
    assert_eq!(out.get_pixel(0, 7).0, BLUE);
    assert_eq!(out.get_pixel(2, 9).0, BLUE);
}

#[test]
fn empty_slice_sequence_is_rejected() {
    let cfg = StackerConfig::default();
    assert!(compose_stack(&[], &cfg).is_err());
}

#[test]
fn slicing_then_stacking_a_three_band_column() {
    // 16x48 source: top band red, middle green, bottom blue
    let cfg = StackerConfig::default();
    let mut src = RgbaImage::new(16, 48);
    for y in 0..48 {
        let c = match y / 16 {
            0 => RED,
            1 => GREEN,
            _ => BLUE,
        };
        for x in 0..16 {
            src.put_pixel(x, y, Rgba(c));
        }
    }
    let bands = slice_tiles(&src, cfg.tile_size);
    assert_eq!(bands.len(), 3);
    let out = compose_stack(&bands, &cfg).expect("stack");
    assert_eq!(out.dimensions(), (16, 32));
    // draw order: blue at 0, green at -1, red at -2; red wins rows 0..=13
    assert_eq!(out.get_pixel(0, 0).0, RED);
    assert_eq!(out.get_pixel(0, 13).0, RED);
    assert_eq!(out.get_pixel(0, 14).0, GREEN);
    assert_eq!(out.get_pixel(0, 15).0, BLUE);
    assert_eq!(out.get_pixel(0, 16).0, TRANSPARENT);
}
