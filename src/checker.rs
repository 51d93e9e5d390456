use std::fs;
use std::path::Path;

use crate::error::CheckError;

// serde_yaml reports duplicate mapping keys with this message text; it does
// not expose a typed error kind, so classification keys on it.
const DUPLICATE_KEY_MARKER: &str = "duplicate entry";

/// Read one file and parse it as YAML, classifying the outcome.
///
/// Duplicate-key rejection takes priority; any other failure (unreadable
/// file, invalid UTF-8, malformed syntax) becomes `Parse`. The parsed
/// document itself is discarded – only the classification matters.
pub fn check_file(path: &Path) -> Result<(), CheckError> {
    let content = fs::read_to_string(path).map_err(|e| CheckError::Parse(e.to_string()))?;

    match serde_yaml::from_str::<serde_yaml::Value>(&content) {
        Ok(_) => Ok(()),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains(DUPLICATE_KEY_MARKER) {
                Err(CheckError::DuplicateKey(msg))
            } else {
                Err(CheckError::Parse(msg))
            }
        }
    }
}
