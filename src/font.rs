use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::error::FontError;
use ab_glyph::{Font as _, FontVec, GlyphId, PxScale, ScaleFont as _};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::path::Path;

/// Point size faces are built at unless told otherwise
pub const DEFAULT_SIZE: f32 = 32.0;

/// Resolution faces are built at unless told otherwise
pub const DEFAULT_DPI: f32 = 72.0;

/// How strongly metrics are fitted to the pixel grid
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Hinting {
    /// Keep fractional advances and line heights
    None,
    /// Snap advances, kerning and glyph origins to the nearest whole pixel and
    /// round the line height up to one
    #[default]
    Full,
}

/// Settings a [FontFace] is constructed with
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceOptions {
    /// Font size in points
    pub size: f32,
    /// Dots per inch used to convert points to pixels
    pub dpi: f32,
    pub hinting: Hinting,
}

impl Default for FaceOptions {
    fn default() -> Self {
        FaceOptions {
            size: DEFAULT_SIZE,
            dpi: DEFAULT_DPI,
            hinting: Hinting::Full,
        }
    }
}

impl FaceOptions {
    /// Pixels per em at this size and resolution
    pub fn px_per_em(&self) -> f32 {
        self.size * self.dpi / 72.0
    }
}

/// The capabilities text layout and rasterization need from a font, in pixels.
///
/// [FontFace] is the real implementation; anything else that can measure and
/// draw a string (a stub in tests, a different font library) can stand in.
pub trait TextFace {
    /// Height of lowercase letters, used as a proxy for the average character width
    fn x_height(&self) -> f32;

    /// Distance between two consecutive baselines
    fn line_height(&self) -> f32;

    /// Horizontal advance of the whole string
    fn measure(&self, text: &str) -> f32;

    /// Draw `text` with its baseline starting at `origin`
    fn draw(&self, canvas: &mut Canvas, origin: (f32, f32), text: &str, colour: Colour);
}

/// A parsed font at a fixed size, resolution and hinting level.
///
/// Metrics are read through [owned_ttf_parser], outlines are rastered through
/// [ab_glyph]. Both are parsed from the same bytes. The face is immutable once
/// constructed.
pub struct FontFace {
    metrics: OwnedFace,
    outlines: FontVec,
    options: FaceOptions,
    scale: PxScale,
    px_per_unit: f32,
    x_height: f32,
    line_height: f32,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family())
            .field("options", &self.options)
            .field("x_height", &self.x_height)
            .field("line_height", &self.line_height)
            .finish()
    }
}

impl FontFace {
    /// Read a font file from disk and build a face from it
    pub fn load<P: AsRef<Path>>(path: P, options: FaceOptions) -> Result<FontFace, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::debug!("read {} bytes of font data from {}", bytes.len(), path.display());
        FontFace::from_bytes(bytes, options)
    }

    /// Parse raw font bytes (TTF or OTF) and build a face from them, returning an
    /// error if the font could not be parsed or is unusable at the requested size
    pub fn from_bytes(bytes: Vec<u8>, options: FaceOptions) -> Result<FontFace, FontError> {
        let outline_bytes = bytes.clone();
        let metrics = OwnedFace::from_vec(bytes, 0)?;
        let outlines = FontVec::try_from_vec(outline_bytes)?;

        let face = metrics.as_face_ref();
        let units_per_em = face.units_per_em() as f32;
        let px_per_unit = options.px_per_em() / units_per_em;

        let line_gap = face.line_gap() as f32;
        let ascent = face.ascender() as f32;
        let descent = face.descender() as f32;
        let line_height = quantize_up(options.hinting, (ascent - descent + line_gap) * px_per_unit);

        let x_height = x_height_units(&metrics) * px_per_unit;
        if x_height.round() < 1.0 {
            return Err(FontError::DegenerateXHeight(x_height));
        }

        let scale = PxScale::from(options.px_per_em() * outlines.height_unscaled() / units_per_em);

        let font = FontFace {
            metrics,
            outlines,
            options,
            scale,
            px_per_unit,
            x_height,
            line_height,
        };
        log::debug!(
            "built face {:?} at {}pt/{}dpi: x-height {:.2}px, line height {:.2}px",
            font.family().unwrap_or_default(),
            options.size,
            options.dpi,
            x_height,
            line_height
        );
        Ok(font)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.metrics
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Distance from the baseline to the top of the font, in pixels
    pub fn ascent(&self) -> f32 {
        self.metrics.as_face_ref().ascender() as f32 * self.px_per_unit
    }

    /// Distance from the baseline to the bottom of the font, in pixels.
    /// Note: this is usually negative
    pub fn descent(&self) -> f32 {
        self.metrics.as_face_ref().descender() as f32 * self.px_per_unit
    }

    /// Glyph ids paired with their pen offset from the start of the string, and
    /// the total advance of the string
    fn positions(&self, text: &str) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.outlines.as_scaled(self.scale);
        let hinting = self.options.hinting;

        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(previous) = previous {
                caret += snap(hinting, scaled.kern(previous, id));
            }
            glyphs.push((id, caret));
            caret += snap(hinting, scaled.h_advance(id));
            previous = Some(id);
        }
        (glyphs, caret)
    }
}

impl TextFace for FontFace {
    fn x_height(&self) -> f32 {
        self.x_height
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn measure(&self, text: &str) -> f32 {
        self.positions(text).1
    }

    fn draw(&self, canvas: &mut Canvas, origin: (f32, f32), text: &str, colour: Colour) {
        let x = snap(self.options.hinting, origin.0);
        let y = snap(self.options.hinting, origin.1);

        let (glyphs, _) = self.positions(text);
        for (id, offset) in glyphs {
            let glyph = id.with_scale_and_position(self.scale, ab_glyph::point(x + offset, y));
            // whitespace has no outline
            let Some(outlined) = self.outlines.outline_glyph(glyph) else {
                continue;
            };

            let bounds = outlined.px_bounds();
            let left = bounds.min.x as i32;
            let top = bounds.min.y as i32;
            outlined.draw(|gx, gy, coverage| {
                canvas.blend(left + gx as i32, top + gy as i32, colour, coverage);
            });
        }
    }
}

fn snap(hinting: Hinting, v: f32) -> f32 {
    match hinting {
        Hinting::Full => v.round(),
        Hinting::None => v,
    }
}

/// Vertical metrics are hinted up to the next whole pixel, never down
fn quantize_up(hinting: Hinting, v: f32) -> f32 {
    match hinting {
        Hinting::Full => v.ceil(),
        Hinting::None => v,
    }
}

/// The x-height in font units, preferring the OS/2 table, then the height of
/// the `x` glyph, then the capital height
fn x_height_units(face: &OwnedFace) -> f32 {
    let face = face.as_face_ref();
    if let Some(h) = face.x_height() {
        return h as f32;
    }

    let from_glyph = face
        .glyph_index('x')
        .and_then(|gid| face.glyph_bounding_box(gid))
        .map(|bbox| bbox.y_max);
    if let Some(h) = from_glyph {
        log::warn!("font has no OS/2 x-height, measuring the 'x' glyph instead");
        return h as f32;
    }

    log::warn!("font has no x-height or 'x' glyph, falling back to the capital height");
    face.capital_height().unwrap_or_default() as f32
}
