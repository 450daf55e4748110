extern crate image;
use std::{env, fs};
use std::path::PathBuf;

use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 32;

fn out_dir() -> String {
    env::var("OUT_DIR").expect("No OUT_DIR env var")
}

// The window icon is drawn here instead of being shipped as an asset:
// a dark watch face with a red medical cross.
fn build_window_icon() {
    let out_dir = out_dir();
    let out_path: PathBuf = [out_dir.as_str(), "icon-32-rgba"].iter().collect();

    let case = Rgba([0x27u8, 0x27, 0x2a, 0xff]);
    let face = Rgba([0x02u8, 0x06, 0x17, 0xff]);
    let cross = Rgba([0xefu8, 0x44, 0x44, 0xff]);
    let clear = Rgba([0u8, 0, 0, 0]);

    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist > 15.5 {
            return clear;
        }

        let on_vertical = x >= 13 && x <= 18 && y >= 7 && y <= 24;
        let on_horizontal = y >= 13 && y <= 18 && x >= 7 && x <= 24;
        if on_vertical || on_horizontal {
            cross
        } else if dist > 13.5 {
            case
        } else {
            face
        }
    });

    let rgba = img.into_raw();
    println!("DEBUG: writing window icon to {}", out_path.to_str().unwrap());
    fs::write(&out_path, rgba).expect("Failed to write window icon rgba");
}

fn main() {
    build_window_icon();
}
