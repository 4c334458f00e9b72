//! Loader for RON tuning files at startup.

use std::fs;
use std::path::Path;

use crate::controller::ControllerTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Read a tuning file and parse it.
fn load_tuning_file(path: &Path) -> Result<ControllerTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ControllerTuning::from_ron(&contents).map_err(|e| ContentLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}

/// Load and validate controller tuning. Out-of-range values are a load error.
pub fn load_controller_tuning(path: &Path) -> Result<ControllerTuning, ContentLoadError> {
    let tuning = load_tuning_file(path)?;

    tuning.validate().map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("Invalid tuning: {}", e),
    })?;

    Ok(tuning)
}
