use crate::colour::Colour;
use image::RgbaImage;

/// A mutable RGBA pixel grid that text is rasterized onto. Each render owns
/// exactly one canvas; it is never shared or reused between renders.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a `width × height` canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Colour) -> Canvas {
        debug_assert!(width > 0 && height > 0, "canvas dimensions must be positive");
        Canvas {
            image: RgbaImage::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read back a single pixel, or `None` if the coordinates lie outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|&p| p.into())
    }

    /// Paint `colour` over the existing pixel at `(x, y)` with the given coverage
    /// (0.0 to 1.0). Coordinates outside the canvas are clipped silently.
    pub fn blend(&mut self, x: i32, y: i32, colour: Colour, coverage: f32) {
        if x < 0 || y < 0 || coverage <= 0.0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            let under: Colour = (*pixel).into();
            *pixel = colour.over(under, coverage).into();
        }
    }

    /// Raw RGBA bytes, row major, 4 bytes per pixel
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }
}
