use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::default_data_dir;
use crate::repository::traits::BlobStore;

const FILE_EXTENSION: &str = "json";

/// Stores each key as `<data dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileBlobStore {
    base_dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("creating data directory {}", base_dir.display()))?;
        Ok(FileBlobStore { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", key, FILE_EXTENSION))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading '{}'", key)),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        let file = File::create(&path).with_context(|| format!("writing {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}
