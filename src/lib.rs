//! Render a line of text as white glyphs on a black PNG, ready to use as a
//! desktop background.
//!
//! The pipeline is: load a [FontFace], [wrap](layout::wrap) the text into
//! lines that fit the canvas, [render] those lines onto a [Canvas], and
//! [write](write_image) the canvas to a new file in the scratch directory.
//! [text_to_image] runs all of it.
//!
//! ```no_run
//! use ttb::{text_to_image, Config};
//!
//! let config = Config::new(1920, 1080).expect("dimensions are positive");
//! let path = text_to_image("Hello world", &config).expect("can render");
//! println!("{}", path.display());
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

/// Settings resolution: command line, environment and config file layers
pub mod config;
pub use config::{Config, ConfigError};

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Word wrapping and the region lines are drawn into
pub mod layout;

mod output;
pub use output::*;

mod render;
pub use render::*;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

/// Render `text` onto a `config.width × config.height` image and write it as
/// a PNG, returning the path of the new file.
///
/// The font is loaded first, so a missing or broken font fails with
/// [ErrorKind::BadFont] before any file is created.
pub fn text_to_image(text: &str, config: &Config) -> Result<PathBuf, TtbError> {
    let face = FontFace::load(&config.font_path, FaceOptions::default())?;

    let region = layout::DrawRegion::for_canvas(config.width, config.height);
    let lines = layout::wrap(text, &face, region.extent.0);
    let canvas = render(&face, &lines, config.width, config.height);

    let path = match &config.output_dir {
        Some(dir) => write_image_in(dir, &canvas)?,
        None => write_image(&canvas)?,
    };
    log::info!("wrote {}x{} image to {}", config.width, config.height, path.display());
    Ok(path)
}
