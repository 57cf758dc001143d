//! Section concatenation.
//!
//! Reads each configured section in order and writes its text verbatim to an
//! output sink. The first failure stops the run.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DeckConfig;
use crate::error::{Error, Result};

/// Joins an ordered list of section files into one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concatenator {
    /// Directory the sections are resolved against.
    base_dir: PathBuf,
    /// Section paths relative to `base_dir`, in output order.
    sections: Vec<PathBuf>,
    /// Text written between consecutive sections.
    separator: String,
}

impl Concatenator {
    /// Create a concatenator with no separator.
    #[must_use]
    pub fn new<I, P>(base_dir: impl Into<PathBuf>, sections: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            base_dir: base_dir.into(),
            sections: sections.into_iter().map(Into::into).collect(),
            separator: String::new(),
        }
    }

    /// Build a concatenator from the `[deck]` configuration.
    #[must_use]
    pub fn from_config(deck: &DeckConfig) -> Self {
        Self::new(deck.base_dir.clone(), deck.sections.iter().map(PathBuf::from))
            .with_separator(deck.separator.clone())
    }

    /// Set the text emitted between sections.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolved absolute paths of every section, in order.
    #[must_use]
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        self.sections
            .iter()
            .map(|section| resolve(&self.base_dir, section))
            .collect()
    }

    /// Stream every section into `sink`.
    ///
    /// Each section is fully read and written before the next is opened.
    /// On failure, whatever was already written stays in the sink.
    ///
    /// # Errors
    ///
    /// Returns the first read, decode or write failure.
    pub fn concatenate<W: Write>(&self, sink: &mut W) -> Result<()> {
        info!(
            "Concatenating {} sections from {}",
            self.sections.len(),
            self.base_dir.display()
        );

        for (index, path) in self.resolved_paths().iter().enumerate() {
            let content = read_section(path)?;

            if index > 0 && !self.separator.is_empty() {
                sink.write_all(self.separator.as_bytes())
                    .map_err(Error::Write)?;
            }
            sink.write_all(content.as_bytes()).map_err(Error::Write)?;
            debug!("Wrote {} bytes from {}", content.len(), path.display());
        }

        sink.flush().map_err(Error::Write)
    }

    /// Assemble the whole document in memory.
    ///
    /// Nothing is returned unless every section was read.
    ///
    /// # Errors
    ///
    /// Returns the first read or decode failure.
    pub fn render(&self) -> Result<String> {
        let mut document = String::new();
        for (index, path) in self.resolved_paths().iter().enumerate() {
            let content = read_section(path)?;
            if index > 0 {
                document.push_str(&self.separator);
            }
            document.push_str(&content);
        }
        Ok(document)
    }
}

/// Concatenate `relative_paths`, resolved against `base_dir`, into `sink`.
///
/// # Errors
///
/// Returns the first read, decode or write failure.
pub fn concatenate<P, W>(base_dir: &Path, relative_paths: &[P], sink: &mut W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    Concatenator::new(base_dir, relative_paths.iter().map(|p| p.as_ref().to_path_buf()))
        .concatenate(sink)
}

/// Resolve `relative` against `base_dir` into an absolute, normalized path.
///
/// Relative base directories are anchored at the current directory. `.` and
/// `..` are folded lexically so a missing file still yields a usable path.
#[must_use]
pub fn resolve(base_dir: &Path, relative: &Path) -> PathBuf {
    let joined = base_dir.join(relative);
    let anchored = if joined.is_absolute() {
        joined
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(joined),
            Err(_) => joined,
        }
    };
    normalize(&anchored)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Read a whole section file as UTF-8 text.
///
/// # Errors
///
/// Returns `FileNotFound`, `FileAccess` or `Decode`, each naming `path`.
pub fn read_section(path: &Path) -> Result<String> {
    debug!("Reading section {}", path.display());

    let mut file =
        File::open(path).map_err(|source| Error::from_read(path.to_path_buf(), source))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.is_empty() {
        warn!("Section {} is empty", path.display());
    }

    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}
