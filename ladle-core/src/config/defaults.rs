use std::path::PathBuf;

/// Default JSON collection file, relative to the working directory.
pub fn default_store_path() -> PathBuf {
    PathBuf::from("ladle-recipes.json")
}

/// Pretty-print saved JSON by default; the file doubles as a
/// human-inspectable export.
pub const DEFAULT_PRETTY: bool = true;
