use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::model::config::AppConfig;
use crate::repository::traits::ConfigRepository;

const DEFAULT_DIR_NAME: &str = ".reviewer-rewards";
const DEFAULT_FILE_NAME: &str = "config.json";

/// `~/.reviewer-rewards`, or `base_dir` when given.
pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) => Ok(dir),
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            Ok(home_dir.join(DEFAULT_DIR_NAME))
        }
    }
}

#[derive(Clone)]
pub struct FileConfigRepository {
    file_path: PathBuf,
}

impl FileConfigRepository {
    /// Opens the config file under `base_dir`, writing defaults on first use.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = data_dir(base_dir)?;
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        path.push(DEFAULT_FILE_NAME);

        let repo = FileConfigRepository { file_path: path };
        if !repo.file_path.exists() {
            debug!(path = %repo.file_path.display(), "writing default config");
            repo.save(&AppConfig::default())?;
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> Result<AppConfig> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid config in {}", self.file_path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::ComparisonMode;
    use crate::model::range::RangeSelector;

    #[test]
    fn test_creates_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileConfigRepository::new(Some(dir.path().to_path_buf())).unwrap();

        assert!(repo.path().exists());
        assert_eq!(repo.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileConfigRepository::new(Some(dir.path().to_path_buf())).unwrap();

        let mut config = AppConfig::default();
        config.default_range = RangeSelector::Lifetime;
        config.comparison = ComparisonMode::Cached;
        config.generator.album_reward.max = 10.0;
        repo.save(&config).unwrap();

        let reopened = FileConfigRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.load().unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileConfigRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(repo.path(), "{ not json").unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
