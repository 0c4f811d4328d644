//! JSON file persistence.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Error};
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::from_reader;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(BufReader::new(file))?)
}

/// Writes `value` as pretty-printed JSON to `path`. The document is fully encoded and written to a
/// sibling staging file first, then moved into place, so an existing file at `path` is only ever
/// replaced by a complete document.
pub fn write_json<S: Serialize + ?Sized>(path: impl AsRef<Path>, value: &S) -> Result<(), io::Error> {
    let path = path.as_ref();
    let encoded = serde_json::to_vec_pretty(value)?;
    let staging = staging_path(path);
    let outcome = fs::write(&staging, encoded).and_then(|_| fs::rename(&staging, path));
    if outcome.is_err() {
        let _ = fs::remove_file(&staging);
    }
    outcome
}

fn staging_path(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

pub trait FromJsonFile<D> {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error>;
}

impl<D: DeserializeOwned> FromJsonFile<D> for D {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, Error> {
        read_json(path)
    }
}

pub trait WriteJsonFile {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), io::Error>;
}

impl<S: Serialize> WriteJsonFile for S {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        write_json(path, self)
    }
}
