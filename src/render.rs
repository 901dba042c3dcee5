use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::colours::{BLACK, WHITE};
use crate::font::TextFace;
use crate::layout::{DrawRegion, LayoutLine};

/// Colour the canvas starts out as
pub const BACKGROUND: Colour = BLACK;

/// Colour glyphs are drawn in
pub const FOREGROUND: Colour = WHITE;

/// Rasterizes wrapped lines onto a new `width × height` canvas.
///
/// The canvas is filled with [BACKGROUND] and each line is drawn in
/// [FOREGROUND], left-aligned to the draw region. The first baseline sits on
/// the region's top edge and each following one is a line height further
/// down. As soon as a baseline would fall below the region's bottom edge,
/// drawing stops: that line and every line after it are dropped whole.
pub fn render<F: TextFace + ?Sized>(
    face: &F,
    lines: &[LayoutLine],
    width: u32,
    height: u32,
) -> Canvas {
    let mut canvas = Canvas::new(width, height, BACKGROUND);
    let region = DrawRegion::for_canvas(width, height);

    let x = region.origin.0 as f32;
    let mut y = region.origin.1 as f32;
    let mut drawn = 0;
    for line in lines {
        if !region.fits_baseline(y) {
            break;
        }
        log::trace!("drawing line {drawn} at ({x}, {y}): {line:?}");
        face.draw(&mut canvas, (x, y), line.as_str(), FOREGROUND);
        drawn += 1;
        y += face.line_height();
    }

    if drawn < lines.len() {
        log::debug!(
            "dropped {} of {} line(s) that did not fit in a {width}x{height} canvas",
            lines.len() - drawn,
            lines.len()
        );
    }
    canvas
}
