// src/gui/icon.rs
//
// Window icon drawn in memory: a green book on a dark tile.

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 64;

pub fn app_icon() -> IconData {
    let bg = Rgba([0x1e, 0x29, 0x3b, 0xff]);
    let cover = Rgba([0x4a, 0xde, 0x80, 0xff]);
    let spine = Rgba([0x16, 0xa3, 0x4a, 0xff]);
    let pages = Rgba([0xf8, 0xfa, 0xfc, 0xff]);

    let img = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let inside = (14..50).contains(&x) && (10..54).contains(&y);
        match (inside, x) {
            (false, _) => bg,
            (true, 14..=19) => spine,
            (true, 46..=49) if y % 4 != 0 => pages,
            (true, _) => cover,
        }
    });

    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}
