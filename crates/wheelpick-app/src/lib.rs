//! Wheelpick demo shell.
//!
//! Replays scripted pointer gestures against pickers driven by a manual
//! frame clock, and (with the `gui` feature) shows live date and time
//! wheels in a native window.

mod replay;

#[cfg(feature = "gui")]
mod app;

pub use replay::{ReplayOutcome, ReplayScript, WheelKind, builtin_scripts, replay};

#[cfg(feature = "gui")]
pub use app::{DemoApp, run_native};

use thiserror::Error;
use wheelpick_core::{ConfigError, PickerError};

/// Errors surfaced by the demo shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Script parse error: {0}")]
    Parse(String),

    #[error("Window error: {0}")]
    Window(String),
}

/// Command line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Picker config file (JSON).
    pub config: Option<std::path::PathBuf>,
    /// Gesture script to replay instead of the built-in ones.
    pub script: Option<std::path::PathBuf>,
    /// Open the native window.
    pub gui: bool,
}

impl Options {
    /// Parse `[--gui] [--config PATH] [--script PATH]`.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--gui" => options.gui = true,
                "--config" | "--script" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AppError::Parse(format!("{} expects a path", arg)))?;
                    if arg == "--config" {
                        options.config = Some(value.into());
                    } else {
                        options.script = Some(value.into());
                    }
                }
                other => return Err(AppError::Parse(format!("Unknown argument: {}", other))),
            }
        }
        Ok(options)
    }
}
