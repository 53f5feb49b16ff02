//! Demo entry point.

use wheelpick_app::{AppError, Options, ReplayScript, builtin_scripts, replay};
use wheelpick_core::PickerConfig;

fn main() {
    env_logger::init();
    log::info!("Starting wheelpick");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let options = Options::parse(std::env::args().skip(1))?;

    let config = match &options.config {
        Some(path) => {
            log::info!("Loading picker config from {}", path.display());
            PickerConfig::load(path)?
        }
        None => PickerConfig::default(),
    };

    if options.gui {
        return show_window(config);
    }

    let scripts = match &options.script {
        Some(path) => vec![ReplayScript::load(path)?],
        None => builtin_scripts(),
    };
    for script in &scripts {
        let outcome = replay(script, &config)?;
        log::info!(
            "{}: selected {} ({:?}) after {} frames, callbacks {:?}",
            outcome.name,
            outcome.selected_index,
            outcome.selected_label,
            outcome.frames,
            outcome.callbacks
        );
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn show_window(config: PickerConfig) -> Result<(), AppError> {
    wheelpick_app::run_native(config)
}

#[cfg(not(feature = "gui"))]
fn show_window(_config: PickerConfig) -> Result<(), AppError> {
    Err(AppError::Window(
        "GUI feature not enabled. Use `cargo run --features gui`".to_string(),
    ))
}
