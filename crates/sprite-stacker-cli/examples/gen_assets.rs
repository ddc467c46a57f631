//! Generates a folder of synthetic sliced sprite sources for trying the CLI:
//! each PNG is a vertical stack of 16px slices, narrower toward the top so
//! the stacked composite reads as a little pyramid.
//!
//! Usage: cargo run -p sprite-stacker-cli --example gen_assets -- [out_dir] [count]

use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

const TILE: u32 = 16;

fn random_color_opaque(rng: &mut impl Rng) -> [u8; 4] {
    [
        rng.gen_range(0..=255u8),
        rng.gen_range(0..=255u8),
        rng.gen_range(0..=255u8),
        255,
    ]
}

fn draw_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, c: [u8; 4]) {
    let (iw, ih) = img.dimensions();
    for yy in y.min(ih)..(y.saturating_add(h)).min(ih) {
        for xx in x.min(iw)..(x.saturating_add(w)).min(iw) {
            img.put_pixel(xx, yy, Rgba(c));
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/stacks"));
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);

    fs::create_dir_all(&out_dir)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for i in 0..count {
        let slices = rng.gen_range(1..=3u32);
        let mut img = RgbaImage::new(TILE, TILE * slices);
        let color = random_color_opaque(&mut rng);
        for s in 0..slices {
            // top slices get a narrower footprint
            let inset = (slices - 1 - s) * 2;
            draw_rect(
                &mut img,
                inset,
                s * TILE + inset,
                TILE - inset * 2,
                TILE - inset * 2,
                color,
            );
        }
        let path = out_dir.join(format!("stack_{:02}.png", i));
        img.save(&path)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
