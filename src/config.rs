//! Runtime settings: defaults, an optional JSON file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::Error;

/// Command-line flags. Anything given here wins over the settings file.
#[derive(Parser, Debug, Default)]
#[command(name = "air-canvas", about = "Draw on a live camera feed with hand gestures")]
pub struct Args {
    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Camera index (0 = default webcam)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Requested capture width
    #[arg(long)]
    pub width: Option<u32>,

    /// Requested capture height
    #[arg(long)]
    pub height: Option<u32>,

    /// Directory holding the menu header thumbnails
    #[arg(long)]
    pub header_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub camera_index: u32,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub header_dir: PathBuf,
    /// Hands reported below this score are treated as "no hand".
    pub min_detection_confidence: f32,
    /// Flip the camera image so it behaves like a mirror.
    pub mirror: bool,
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera_index: 0,
            width: 1280,
            height: 720,
            fps: 30,
            header_dir: PathBuf::from("Header"),
            min_detection_confidence: 0.85,
            mirror: true,
            show_hud: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Defaults, then the file named by `--config`, then individual flags.
    pub fn resolve(args: &Args) -> Result<Self, Error> {
        let mut settings = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_args(args);
        Ok(settings)
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(camera) = args.camera {
            self.camera_index = camera;
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        if let Some(height) = args.height {
            self.height = height;
        }
        if let Some(dir) = &args.header_dir {
            self.header_dir = dir.clone();
        }
    }
}
