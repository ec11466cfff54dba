//! Print output and state persistence.
//!
//! Print results are written as indented JSON. The text store is saved
//! to and loaded from files in `MessagePack` format.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use quill_foundation::{Error, ErrorKind, Result, Text};

use crate::store::TextStore;

/// Writes texts as indented JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_texts<W: Write + ?Sized>(out: &mut W, texts: &[Text]) -> Result<()> {
    let json = serde_json::to_string_pretty(texts)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))?;
    writeln!(out, "{json}").map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))
}

/// Serializes a store to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(store: &TextStore) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(store)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a store from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<TextStore> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Saves a store to a file, overwriting it.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(store: &TextStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&to_bytes(store)?)
        .and_then(|()| writer.flush())
        .map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to write to file '{}': {e}",
                path.display()
            )))
        })
}

/// Loads a store from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TextStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    from_bytes(&bytes)
}

/// Saves `store` to `path` once a session has finished, whether or not it
/// succeeded. Without a path the outcome passes through unchanged.
///
/// # Errors
///
/// Returns the session's error if it failed, otherwise any error from saving.
pub fn save_after<T>(outcome: Result<T>, store: &TextStore, path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return outcome;
    };
    let saved = save_to_file(store, path);
    let value = outcome?;
    saved?;
    Ok(value)
}
