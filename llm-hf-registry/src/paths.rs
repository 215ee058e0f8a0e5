//! Per-user directory resolution.
//!
//! The host keeps its state in a per-user directory. `LLM_USER_PATH`
//! overrides it; otherwise it is `io.datasette.llm` under the platform
//! config directory (`~/.config` on Linux, `~/Library/Application Support`
//! on macOS).

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{RegistryError, RegistryResult};

/// Environment variable overriding the user directory.
pub const USER_PATH_ENV: &str = "LLM_USER_PATH";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "io.datasette.llm";

/// File holding the subscribed model identifiers.
pub const MODELS_FILE_NAME: &str = "hf_models.txt";

/// Get the host's per-user directory.
pub fn user_dir() -> RegistryResult<PathBuf> {
    resolve_user_dir(std::env::var_os(USER_PATH_ENV), dirs::config_dir())
}

/// Get the path of the model list file inside the user directory.
pub fn models_file() -> RegistryResult<PathBuf> {
    Ok(user_dir()?.join(MODELS_FILE_NAME))
}

fn resolve_user_dir(
    override_path: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> RegistryResult<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => config_dir
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(RegistryError::NoUserDir),
    }
}
