use thiserror::Error;

/// All errors that rendering text to an image can generate.
///
/// Every variant aborts the whole operation; none of them are retryable.
#[derive(Error, Debug)]
pub enum TtbError {
    #[error("bad font: {0}")]
    /// The font asset is missing, unreadable, unparseable, or unusable at the
    /// configured size
    BadFont(#[from] FontError),

    #[error("invalid file: {0}")]
    /// The scratch directory or the output file could not be created
    InvalidFile(#[source] std::io::Error),

    #[error("bad encoding: {0}")]
    /// [image] failed to encode or write the canvas
    BadEncoding(#[source] image::ImageError),
}

/// The coarse classification of a [TtbError], which is all that callers
/// should rely on (the message text is not stable)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    BadFont,
    InvalidFile,
    BadEncoding,
}

impl TtbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TtbError::BadFont(_) => ErrorKind::BadFont,
            TtbError::InvalidFile(_) => ErrorKind::InvalidFile,
            TtbError::BadEncoding(_) => ErrorKind::BadEncoding,
        }
    }
}

/// Reasons a font could not be turned into a usable face
#[derive(Error, Debug)]
pub enum FontError {
    #[error(transparent)]
    /// The font file could not be read
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("failed to load glyph outlines: {0}")]
    /// [ab_glyph] failed to parse the font
    Outlines(#[from] ab_glyph::InvalidFont),

    #[error("x-height of {0:.2}px is too small to lay out text")]
    /// The face has no usable x-height at the configured size
    DegenerateXHeight(f32),
}
