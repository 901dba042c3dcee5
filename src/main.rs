//! ttb - make text into a background

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use ttb::config::{ConfigError, Overrides};
use ttb::{text_to_image, Config};

/// Render text as white glyphs on a black PNG and print the path of the image
#[derive(Parser, Debug)]
#[command(name = "ttb", version, about, long_about = None)]
struct Cli {
    /// Text to render; multiple arguments are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Width of the picture in pixels [default: 400]
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Height of the picture in pixels [default: 400]
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Font file to render with [default: assets/DejaVuSans.ttf]
    #[arg(long)]
    font: Option<PathBuf>,

    /// Directory to write the picture into [default: <temp dir>/ttb]
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Config file (default is $HOME/.ttb.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Merge the command line over the environment and config file
    fn resolve(&self) -> Result<Config, ConfigError> {
        let flags = Overrides {
            width: self.width,
            height: self.height,
            font: self.font.clone(),
            output_dir: self.output_dir.clone(),
        };
        let env = Overrides::from_env()?;
        let file = Overrides::discover_file(self.config.as_deref())?;
        flags.or(env).or(file).resolve()
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let text = cli.text.join(" ");
    match text_to_image(&text, &config) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("render failed ({:?})", e.kind());
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
