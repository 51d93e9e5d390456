use thiserror::Error;

/// Per-file check failure. `Display` is exactly the text the report prints
/// after the file path.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The YAML engine rejected a mapping holding the same key twice at one
    /// nesting level. Carries the engine's own message (key, line, column).
    #[error("{0}")]
    DuplicateKey(String),

    /// Anything else that kept the file from parsing: I/O, encoding, syntax.
    #[error("PARSE_ERROR: {0}")]
    Parse(String),
}
