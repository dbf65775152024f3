use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    sync::{Arc, OnceLock},
};
use serde_json::error::Category;
use thiserror::Error;
use tracing::{debug, info};

pub mod models;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(serde_json::Error),
    #[error("Schema error: {0}")]
    Schema(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        match value.classify() {
            // The document parsed, but a key is missing or has the wrong type
            Category::Data => Error::Schema(value.to_string()),
            Category::Io | Category::Syntax | Category::Eof => Error::Json(value),
        }
    }
}

impl Error {
    /// The document could not be read or is not JSON at all.
    pub fn is_data_load(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Json(_))
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema(_))
    }
}

#[derive(Default, Debug)]
pub enum StorageType {
    #[default]
    None,
    File(PathBuf),
    Inline(Arc<str>),
}

/// Handle to the airport document. Parsed on first access and cached until
/// [`Dataset::invalidate`] is called.
#[derive(Default, Debug)]
pub struct Dataset {
    storage: StorageType,
    cache: OnceLock<Arc<[AirportRecord]>>,
}

impl Dataset {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage = StorageType::File(path.into());
        self.cache = OnceLock::new();
        self
    }

    pub fn from_json<S: Into<Arc<str>>>(mut self, json: S) -> Self {
        self.storage = StorageType::Inline(json.into());
        self.cache = OnceLock::new();
        self
    }

    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Returns the airports of the document, reading it only the first time.
    pub fn airports(&self) -> Result<Arc<[AirportRecord]>, self::Error> {
        if let Some(airports) = self.cache.get() {
            debug!("Dataset cache hit ({} airports)", airports.len());
            return Ok(airports.clone());
        }
        let airports: Arc<[AirportRecord]> = self.read()?.airports.into();
        info!("Loaded {} airports", airports.len());
        Ok(self.cache.get_or_init(|| airports).clone())
    }

    /// Drops the cached document so the next call to [`Dataset::airports`] reads it again.
    pub fn invalidate(&mut self) {
        self.cache.take();
    }

    fn read(&self) -> Result<DatasetRecord, self::Error> {
        match &self.storage {
            StorageType::None => Ok(DatasetRecord {
                airports: Vec::new(),
            }),
            StorageType::File(path) => {
                debug!("Reading dataset from {}", path.display());
                let file = File::open(path)?;
                let record = serde_json::from_reader(BufReader::new(file))?;
                Ok(record)
            }
            StorageType::Inline(json) => Ok(serde_json::from_str(json)?),
        }
    }
}
