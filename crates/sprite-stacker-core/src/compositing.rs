use image::{Rgba, RgbaImage};

/// Blit `src` onto `canvas` with top-left at (dx, dy), using the source's own
/// alpha channel as the paste mask: fully opaque source pixels replace the
/// destination, fully transparent pixels leave it untouched, and partial
/// alpha blends source over destination. Never a plain copy.
///
/// Destination coordinates are signed; content falling outside the canvas on
/// any edge is clipped. Stacking relies on negative `dy` to shift layers
/// upward off the canvas top.
pub fn alpha_blit(src: &RgbaImage, canvas: &mut RgbaImage, dx: i32, dy: i32) {
    let (sw, sh) = src.dimensions();
    let (cw, ch) = canvas.dimensions();

    for yy in 0..sh {
        let ty = dy + yy as i32;
        if ty < 0 || ty >= ch as i32 {
            continue;
        }
        for xx in 0..sw {
            let tx = dx + xx as i32;
            if tx < 0 || tx >= cw as i32 {
                continue;
            }
            let sp = src.get_pixel(xx, yy).0;
            let sa = sp[3] as u32;
            if sa == 0 {
                continue;
            }
            let (tx, ty) = (tx as u32, ty as u32);
            let dp = canvas.get_pixel(tx, ty).0;
            if sa == 255 || dp[3] == 0 {
                canvas.put_pixel(tx, ty, Rgba(sp));
                continue;
            }
            canvas.put_pixel(tx, ty, over(sp, dp, sa));
        }
    }
}

/// Porter-Duff "over" for straight-alpha RGBA8. `sa` is the source alpha,
/// already known to be in 1..=254 with a non-transparent destination.
fn over(sp: [u8; 4], dp: [u8; 4], sa: u32) -> Rgba<u8> {
    let da = dp[3] as u32;
    let inv = 255 - sa;
    // out_a scaled by 255 so channel division stays in integer math
    let out_a = sa * 255 + da * inv;
    let blend = |s: u8, d: u8| -> u8 {
        ((s as u32 * sa * 255 + d as u32 * da * inv + out_a / 2) / out_a) as u8
    };
    Rgba([
        blend(sp[0], dp[0]),
        blend(sp[1], dp[1]),
        blend(sp[2], dp[2]),
        ((out_a + 127) / 255) as u8,
    ])
}
