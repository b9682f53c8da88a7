//! Extension persistence using `MessagePack`.
//!
//! Only the extension tier of the registry is saved; the base vocabulary is
//! rebuilt from the standard tables at startup.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use soul_parser::Extensions;

use crate::error::{Result, RuntimeError};

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct ExtensionFile {
    version: u32,
    extensions: Extensions,
}

/// Serializes extensions to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(extensions: &Extensions) -> Result<Vec<u8>> {
    let file = ExtensionFile {
        version: FORMAT_VERSION,
        extensions: extensions.clone(),
    };
    rmp_serde::to_vec_named(&file).map_err(|e| RuntimeError::Serialization(e.to_string()))
}

/// Deserializes extensions from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the format version is
/// unsupported.
pub fn from_bytes(bytes: &[u8]) -> Result<Extensions> {
    let file: ExtensionFile =
        rmp_serde::from_slice(bytes).map_err(|e| RuntimeError::Serialization(e.to_string()))?;
    if file.version != FORMAT_VERSION {
        return Err(RuntimeError::Serialization(format!(
            "unsupported extension file version {}",
            file.version
        )));
    }
    Ok(file.extensions)
}

/// Saves extensions to a file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(extensions: &Extensions, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(extensions)?;
    let file = File::create(path).map_err(|e| RuntimeError::io("create", path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| RuntimeError::io("write", path, e))?;
    writer.flush().map_err(|e| RuntimeError::io("flush", path, e))?;
    Ok(())
}

/// Loads extensions from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Extensions> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| RuntimeError::io("open", path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| RuntimeError::io("read", path, e))?;
    from_bytes(&bytes)
}
