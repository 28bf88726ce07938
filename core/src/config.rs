use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Overrides the data directory when set.
pub const DATA_DIR_ENV: &str = "HARD75_HOME";
const DEFAULT_DIR_NAME: &str = ".hard75";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolves the data directory: explicit path, then `HARD75_HOME`,
    /// then `~/.hard75`.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => match env::var_os(DATA_DIR_ENV) {
                Some(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => default_data_dir()?,
            },
        };
        Ok(Self { data_dir })
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/hard75-test"))).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/hard75-test"));
    }

    // One test owns HARD75_HOME so parallel tests never see a half-set value.
    #[test]
    fn test_env_override_and_fallback() {
        env::set_var(DATA_DIR_ENV, "/tmp/hard75-from-env");
        assert_eq!(Config::resolve(None).unwrap().data_dir, PathBuf::from("/tmp/hard75-from-env"));
        let explicit = Config::resolve(Some(PathBuf::from("/tmp/hard75-flag"))).unwrap();
        assert_eq!(explicit.data_dir, PathBuf::from("/tmp/hard75-flag"));

        env::set_var(DATA_DIR_ENV, "");
        let fallback = Config::resolve(None).unwrap().data_dir;
        assert_eq!(fallback, default_data_dir().unwrap());
        assert!(fallback.ends_with(".hard75"));

        env::remove_var(DATA_DIR_ENV);
        assert_eq!(Config::resolve(None).unwrap().data_dir, default_data_dir().unwrap());
    }
}
