use crate::commands::{CmdMessage, CmdResult, PimPaths};
use crate::config::PimConfig;
use crate::error::{PimError, Result};

pub fn show(paths: &PimPaths) -> Result<CmdResult> {
    let config = PimConfig::load(&paths.data_dir)?;
    Ok(CmdResult::default().with_config(config))
}

/// Reports the value of one key. Unknown keys are an error.
pub fn get(paths: &PimPaths, key: &str) -> Result<CmdResult> {
    let config = PimConfig::load(&paths.data_dir)?;
    let value = config
        .get(key)
        .ok_or_else(|| PimError::Config(format!("Unknown config key: {}", key)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(value));
    Ok(result)
}

/// Changes one key and writes the config back. Nothing is written if the
/// key or value is rejected.
pub fn set(paths: &PimPaths, key: &str, value: &str) -> Result<CmdResult> {
    let mut config = PimConfig::load(&paths.data_dir)?;
    config.set(key, value).map_err(PimError::Config)?;
    config.save(&paths.data_dir)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} set to {}",
        key,
        value.trim()
    )));
    Ok(result.with_config(config))
}
