use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::Cli;
use crate::engine::scoring::ProfileWeights;
use crate::error::Result;

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub session_path: PathBuf,
    pub weights: ProfileWeights,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let weights = match &cli.weights {
            Some(path) => load_weights(path)?,
            None => {
                info!("no weights file given, using reference weights");
                ProfileWeights::default()
            }
        };

        Ok(Self {
            catalog_path: cli.catalog.clone(),
            session_path: cli.session.clone(),
            weights,
        })
    }
}

/// Load and validate a weights override file.
///
/// Goals left out of the file keep their reference weights.
pub fn load_weights<P: AsRef<Path>>(path: P) -> Result<ProfileWeights> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let weights: ProfileWeights = serde_json::from_str(&content)?;
    weights.validate()?;
    info!(path = %path.display(), "loaded scoring weights");
    Ok(weights)
}
