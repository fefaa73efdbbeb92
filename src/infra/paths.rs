// src/infra/paths.rs — Config path management
//
// All paths respect the CODESCRIBE_HOME environment variable for isolation.
// When CODESCRIBE_HOME is set, config lives under that directory.
// When unset, config uses ~/.codescribe/.

use std::path::PathBuf;

/// Returns the CODESCRIBE_HOME override, if set.
fn codescribe_home() -> Option<PathBuf> {
    std::env::var_os("CODESCRIBE_HOME").map(PathBuf::from)
}

/// Home directory, if the platform exposes one.
pub fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Configuration directory: $CODESCRIBE_HOME/ or ~/.codescribe/
///
/// Falls back to the working directory when no home directory is known
/// (minimal containers).
pub fn config_dir() -> PathBuf {
    if let Some(home) = codescribe_home() {
        return home;
    }
    dirs_home()
        .map(|home| home.join(".codescribe"))
        .unwrap_or_else(|| PathBuf::from(".codescribe"))
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_under_config_dir() {
        let path = config_file_path();
        assert!(path.ends_with("config.toml"));
        assert_eq!(path.parent(), Some(config_dir().as_path()));
    }
}
