//! Shared fixtures for unit tests

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::font::{FaceOptions, FontFace, TextFace};

pub(crate) const FONT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf");

/// The bundled font at the default size
pub(crate) fn bundled() -> FontFace {
    FontFace::load(FONT_PATH, FaceOptions::default()).expect("can load bundled font")
}

/// A face where every character is `x_height` pixels wide and draws as a
/// single solid pixel sitting on the baseline
pub(crate) struct StubFace {
    pub x_height: f32,
    pub line_height: f32,
}

impl TextFace for StubFace {
    fn x_height(&self) -> f32 {
        self.x_height
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.x_height
    }

    fn draw(&self, canvas: &mut Canvas, origin: (f32, f32), text: &str, colour: Colour) {
        for (i, ch) in text.chars().enumerate() {
            if !ch.is_whitespace() {
                let x = origin.0 + i as f32 * self.x_height;
                canvas.blend(x as i32, origin.1 as i32, colour, 1.0);
            }
        }
    }
}
