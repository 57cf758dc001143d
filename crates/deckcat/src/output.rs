//! Document assembly and emission.
//!
//! The whole document is built in memory first, so a failing section never
//! leaves a truncated deck on stdout or on disk.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::cli::OutputFormat;
use crate::concat::Concatenator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::remark::RemarkPage;

/// Build the document described by `config` in the requested format.
///
/// # Errors
///
/// Returns the first section failure, or a template error for
/// [`OutputFormat::Remark`].
pub fn assemble(config: &Config, format: OutputFormat) -> Result<String> {
    // Load the template before touching any section
    let page = match format {
        OutputFormat::Markdown => None,
        OutputFormat::Remark => Some(RemarkPage::from_config(&config.remark)?),
    };

    let markdown = Concatenator::from_config(&config.deck).render()?;

    Ok(match page {
        Some(page) => page.render(&markdown),
        None => markdown,
    })
}

/// Write `document` to `sink` and flush it.
///
/// # Errors
///
/// Returns `Write` if the sink rejects the data.
pub fn emit<W: Write>(document: &str, sink: &mut W) -> Result<()> {
    sink.write_all(document.as_bytes()).map_err(Error::Write)?;
    sink.flush().map_err(Error::Write)
}

/// Write `document` to the file at `path`, creating parent directories.
///
/// # Errors
///
/// Returns `DirectoryCreate` or `Write` on failure.
pub fn write_file(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(path, document).map_err(Error::Write)?;
    info!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_for(dir: &Path) -> Config {
        std::fs::write(dir.join("a.md"), "# A\n").unwrap();
        std::fs::write(dir.join("b.md"), "# B & C\n").unwrap();
        let mut config = Config::default();
        config.deck.base_dir = dir.to_path_buf();
        config.deck.sections = vec!["a.md".to_string(), "b.md".to_string()];
        config
    }

    #[test]
    fn test_assemble_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());

        let document = assemble(&config, OutputFormat::Markdown).unwrap();

        assert_eq!(document, "# A\n# B & C\n");
    }

    #[test]
    fn test_assemble_remark() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.remark.title = "Workshop".to_string();

        let document = assemble(&config, OutputFormat::Remark).unwrap();

        assert!(document.contains("<title>Workshop</title>"));
        assert!(document.contains("# A\n# B &amp; C\n"));
    }

    #[test]
    fn test_assemble_bad_template_reads_no_sections() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.deck.base_dir = dir.path().to_path_buf();
        config.remark.template = Some(dir.path().join("missing.html"));

        let err = assemble(&config, OutputFormat::Remark).unwrap_err();

        assert!(matches!(err, Error::TemplateRead { .. }));
    }

    #[test]
    fn test_assemble_missing_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path());
        config.deck.sections.insert(1, "gone.md".to_string());

        let err = assemble(&config, OutputFormat::Markdown).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("gone.md"));
    }

    #[test]
    fn test_emit() {
        let mut out = Vec::new();
        emit("# Intro\n", &mut out).unwrap();
        assert_eq!(out, b"# Intro\n");
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdf").join("pdf.md");

        write_file(&path, "# Deck\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Deck\n");
    }

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("pdf.md");
        std::fs::write(&path, "stale deck").unwrap();

        write_file(&path, "").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
