/// Fraction of each canvas dimension kept clear on every side
pub const INSET: f64 = 0.1;

/// The rectangle within a canvas that text is laid out in. There is no
/// control preventing glyphs from overflowing it (the first line's ascent
/// sits in the top margin, for example); the region is a guideline for
/// where lines start and when to stop adding them.
///
/// Coordinates are in pixels, with the origin at the top-left of the canvas
/// and y growing downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawRegion {
    /// Top-left corner: where the first baseline starts
    pub origin: (u32, u32),
    /// Bottom-right corner: the widest a line may be, and the lowest a
    /// baseline may sit
    pub extent: (u32, u32),
}

impl DrawRegion {
    /// Derive the region for a `width × height` canvas, insetting by [INSET]
    /// from the top and left and ending at `1 - INSET` of each dimension.
    /// Edges are rounded to the nearest pixel, halves away from zero.
    pub fn for_canvas(width: u32, height: u32) -> DrawRegion {
        let near = |v: u32| (INSET * v as f64).round() as u32;
        let far = |v: u32| ((1.0 - INSET) * v as f64).round() as u32;
        DrawRegion {
            origin: (near(width), near(height)),
            extent: (far(width), far(height)),
        }
    }

    /// Horizontal space between the left and right edges
    pub fn width(&self) -> u32 {
        self.extent.0.saturating_sub(self.origin.0)
    }

    /// Vertical space between the top and bottom edges
    pub fn height(&self) -> u32 {
        self.extent.1.saturating_sub(self.origin.1)
    }

    /// Whether a baseline at `y` still lies within the region
    pub fn fits_baseline(&self, y: f32) -> bool {
        y <= self.extent.1 as f32
    }
}
