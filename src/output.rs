use crate::canvas::Canvas;
use crate::error::TtbError;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageError};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the directory under the system temporary directory that images are written to
pub const SCRATCH_DIR_NAME: &str = "ttb";

const FILE_PREFIX: &str = "output_";
const FILE_SUFFIX: &str = ".png";

/// The default directory images are written to: `<temp dir>/ttb`
pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(SCRATCH_DIR_NAME)
}

/// Encode the canvas as a PNG in the default scratch directory, see [write_image_in]
pub fn write_image(canvas: &Canvas) -> Result<PathBuf, TtbError> {
    write_image_in(&scratch_dir(), canvas)
}

/// Encode the canvas as an RGBA PNG into a new, uniquely named file inside
/// `dir`, creating `dir` first if needed. Returns the absolute path of the
/// written file.
///
/// The file is created exclusively, so concurrent writers never share a path.
/// If encoding fails the file is removed again; nothing is left behind.
pub fn write_image_in(dir: &Path, canvas: &Canvas) -> Result<PathBuf, TtbError> {
    std::fs::create_dir_all(dir).map_err(TtbError::InvalidFile)?;
    let dir = dir.canonicalize().map_err(TtbError::InvalidFile)?;

    let file = tempfile::Builder::new()
        .prefix(FILE_PREFIX)
        .suffix(FILE_SUFFIX)
        .tempfile_in(&dir)
        .map_err(TtbError::InvalidFile)?;
    log::debug!(
        "encoding {}x{} canvas into {}",
        canvas.width(),
        canvas.height(),
        file.path().display()
    );

    {
        let mut writer = BufWriter::new(file.as_file());
        PngEncoder::new(&mut writer)
            .write_image(canvas.as_raw(), canvas.width(), canvas.height(), ColorType::Rgba8)
            .map_err(TtbError::BadEncoding)?;
        writer
            .flush()
            .map_err(|e| TtbError::BadEncoding(ImageError::IoError(e)))?;
    }

    let (_, path) = file.keep().map_err(|e| TtbError::InvalidFile(e.error))?;
    Ok(path)
}
