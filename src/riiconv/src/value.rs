//! Memory patch value resolution.

use std::fs;
use std::io;

use crate::document::{ValueSource, REGION_TOKEN};

/// Errors that can occur while resolving a patch value
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("invalid hex value: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("failed to read value file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Resolve the raw replacement bytes for a memory patch.
///
/// For file-backed values the region token in the path is substituted
/// with `region` before reading. The region is the current translation
/// target, passed in by the caller, not a property of the patch node.
pub fn resolve(source: &ValueSource, base_path: &str, region: &str) -> Result<Vec<u8>, ValueError> {
    match source {
        ValueSource::File(path) => {
            let full = format!("{}/{}", base_path, path.replace(REGION_TOKEN, region));
            fs::read(&full).map_err(|source| ValueError::Io { path: full, source })
        }
        ValueSource::Inline(text) => Ok(hex::decode(text)?),
    }
}
