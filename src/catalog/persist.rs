//! Loading catalogs from JSON or TOML files.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, CatalogEntry};

/// Failure while loading a catalog file.
#[derive(Debug)]
pub enum CatalogError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file extension is neither `.json` nor `.toml`.
    UnsupportedFormat(PathBuf),
    /// The file content did not parse.
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// An entry is unusable (empty name).
    InvalidEntry {
        /// Zero-based position of the entry in the file.
        index: usize,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read catalog: {e}"),
            Self::UnsupportedFormat(p) => write!(
                f,
                "unsupported catalog format: {} (expected .json or .toml)",
                p.display()
            ),
            Self::Parse { path, message } => {
                write!(f, "failed to parse catalog {}: {message}", path.display())
            }
            Self::InvalidEntry { index, reason } => {
                write!(f, "invalid catalog entry #{index}: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// On-disk JSON layout: either a bare array or an object with categories.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    /// `[ {name, description, category}, ... ]`
    Bare(Vec<CatalogEntry>),
    /// `{ "categories": [...], "applets": [...] }`
    Full {
        /// Selector labels.
        #[serde(default)]
        categories: Vec<String>,
        /// Entries in canonical order.
        applets: Vec<CatalogEntry>,
    },
}

/// On-disk TOML layout.
#[derive(serde::Deserialize)]
struct TomlCatalog {
    /// Selector labels.
    #[serde(default)]
    categories: Vec<String>,
    /// `[[applet]]` tables in canonical order.
    #[serde(default)]
    applet: Vec<CatalogEntry>,
}

/// What: Load a catalog from a JSON or TOML file.
///
/// Inputs:
/// - `path`: Catalog file; format is chosen by extension.
///
/// Output:
/// - `Ok(Catalog)` with entries in file order, or a [`CatalogError`].
///
/// Details:
/// - Entries with an empty (or whitespace-only) name are rejected.
/// - Duplicate names are kept as-is.
/// - An empty entry list is a valid, empty catalog.
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let parse_err = |message: String| CatalogError::Parse {
        path: path.to_path_buf(),
        message,
    };
    let (entries, declared) = match ext.as_deref() {
        Some("json") => {
            let s = fs::read_to_string(path)?;
            match serde_json::from_str::<JsonCatalog>(&s).map_err(|e| parse_err(e.to_string()))? {
                JsonCatalog::Bare(entries) => (entries, Vec::new()),
                JsonCatalog::Full {
                    categories,
                    applets,
                } => (applets, categories),
            }
        }
        Some("toml") => {
            let s = fs::read_to_string(path)?;
            let doc: TomlCatalog = toml::from_str(&s).map_err(|e| parse_err(e.to_string()))?;
            (doc.applet, doc.categories)
        }
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };
    if let Some(index) = entries.iter().position(|e| e.name.trim().is_empty()) {
        return Err(CatalogError::InvalidEntry {
            index,
            reason: "name is empty",
        });
    }
    tracing::debug!(
        path = %path.display(),
        entries = entries.len(),
        categories = declared.len(),
        "loaded catalog file"
    );
    Ok(Catalog::with_categories(entries, declared))
}
