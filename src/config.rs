//! Resolution of the settings a render runs with.
//!
//! Settings come from up to three layers of [Overrides] (command line,
//! environment, config file) which are merged over built-in defaults into a
//! single immutable [Config]. The config is built once at start-up and passed
//! explicitly to [text_to_image](crate::text_to_image); nothing below that
//! entry point reads flags, files or environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Directory, relative to the executable or working directory, holding bundled assets
pub const ASSET_DIR: &str = "assets";

/// File name of the bundled font inside [ASSET_DIR]
pub const DEFAULT_FONT_FILE: &str = "DejaVuSans.ttf";

/// Name of the config file looked for in the home directory
pub const CONFIG_FILE_NAME: &str = ".ttb.json";

pub const ENV_WIDTH: &str = "TTB_WIDTH";
pub const ENV_HEIGHT: &str = "TTB_HEIGHT";
pub const ENV_FONT: &str = "TTB_FONT";
pub const ENV_OUTPUT_DIR: &str = "TTB_OUTPUT_DIR";

/// Problems turning user-supplied settings into a [Config]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a positive number of pixels, got {value}")]
    InvalidDimension { name: &'static str, value: i64 },

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("environment variable {name} is not a whole number: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Everything a single render needs beyond the text itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Canvas width in pixels, at least 1
    pub width: u32,
    /// Canvas height in pixels, at least 1
    pub height: u32,
    /// Font file to render with
    pub font_path: PathBuf,
    /// Directory to write the image into; the system scratch directory when unset
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Create a config with the given dimensions and the bundled font,
    /// rejecting dimensions that are not strictly positive
    pub fn new(width: i64, height: i64) -> Result<Config, ConfigError> {
        Ok(Config {
            width: dimension("width", width)?,
            height: dimension("height", height)?,
            font_path: default_font_path(),
            output_dir: None,
        })
    }

    pub fn with_font_path<P: Into<PathBuf>>(mut self, font_path: P) -> Config {
        self.font_path = font_path.into();
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Config {
        self.output_dir = Some(output_dir.into());
        self
    }
}

fn dimension(name: &'static str, value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or(ConfigError::InvalidDimension { name, value })
}

/// Where the bundled font is expected: in [ASSET_DIR] next to the running
/// executable if it exists there, otherwise [ASSET_DIR] relative to the
/// working directory
pub fn default_font_path() -> PathBuf {
    let relative = Path::new(ASSET_DIR).join(DEFAULT_FONT_FILE);
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&relative)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or(relative)
}

/// One layer of optional settings. Later layers only fill in what earlier
/// ones left unset, see [Overrides::or].
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct Overrides {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub font: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Overrides {
    /// Read overrides from a JSON config file
    pub fn from_file(path: &Path) -> Result<Overrides, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the config file at `explicit` if given, otherwise the default
    /// config file in the home directory if one exists
    pub fn discover_file(explicit: Option<&Path>) -> Result<Overrides, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match home_config_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => return Ok(Overrides::default()),
            },
        };
        let overrides = Overrides::from_file(&path)?;
        log::info!("using config file: {}", path.display());
        Ok(overrides)
    }

    /// Read overrides from the process environment
    pub fn from_env() -> Result<Overrides, ConfigError> {
        Overrides::from_vars(|name| {
            std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Read overrides through a variable lookup, so the environment can be
    /// substituted in tests
    pub fn from_vars<F>(lookup: F) -> Result<Overrides, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |name: &'static str| -> Result<Option<i64>, ConfigError> {
            lookup(name)
                .map(|value| {
                    value
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| ConfigError::InvalidEnv { name, value })
                })
                .transpose()
        };
        Ok(Overrides {
            width: number(ENV_WIDTH)?,
            height: number(ENV_HEIGHT)?,
            font: lookup(ENV_FONT).map(PathBuf::from),
            output_dir: lookup(ENV_OUTPUT_DIR).map(PathBuf::from),
        })
    }

    /// Keep every setting present in `self`, taking the rest from `fallback`
    pub fn or(self, fallback: Overrides) -> Overrides {
        Overrides {
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
            font: self.font.or(fallback.font),
            output_dir: self.output_dir.or(fallback.output_dir),
        }
    }

    /// Fill in defaults and validate, producing the final config
    pub fn resolve(self) -> Result<Config, ConfigError> {
        let config = Config::new(
            self.width.unwrap_or(DEFAULT_WIDTH as i64),
            self.height.unwrap_or(DEFAULT_HEIGHT as i64),
        )?;
        let config = match self.font {
            Some(font) => config.with_font_path(font),
            None => config,
        };
        Ok(match self.output_dir {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        })
    }
}

fn home_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"))?;
    Some(PathBuf::from(home).join(CONFIG_FILE_NAME))
}
