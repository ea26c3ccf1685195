use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::Error;

/// Append-only record of generated names, one timestamped line per name.
#[derive(Clone, Debug)]
pub struct NameLog {
    log_file: Arc<Mutex<File>>,
    log_path: PathBuf,
}

impl NameLog {
    /// Opens `<directory>/<prefix>YYYYmmdd.log` in append mode, creating the
    /// directory if needed.
    pub fn open(directory: &Path, prefix: &str) -> Result<Self, Error> {
        fs::create_dir_all(directory)?;

        let date = chrono::Local::now().format("%Y%m%d");
        let log_path = directory.join(format!("{}{}.log", prefix, date));

        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        log::debug!("Recording generated names in {}", log_path.display());

        Ok(Self {
            log_file: Arc::new(Mutex::new(log_file)),
            log_path,
        })
    }

    pub fn record(&self, name: &str) -> Result<(), Error> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] {}\n", timestamp, name);

        let mut file = self.log_file.lock().map_err(|e| {
            Error::Generation(format!("Failed to lock name log: {}", e))
        })?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub fn record_all<I, S>(&self, names: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.record(name.as_ref())?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
