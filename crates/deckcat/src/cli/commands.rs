//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;

/// Options for assembling the deck.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Directory the sections are resolved against
    #[arg(short, long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Section file relative to the base directory (repeat to list several)
    #[arg(short, long = "section", value_name = "PATH")]
    pub sections: Vec<String>,

    /// Text inserted between sections
    #[arg(long, value_name = "TEXT")]
    pub separator: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl BuildArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_dir) = &self.base_dir {
            config.deck.base_dir.clone_from(base_dir);
        }
        if !self.sections.is_empty() {
            config.deck.sections.clone_from(&self.sections);
        }
        if let Some(separator) = &self.separator {
            config.deck.separator.clone_from(separator);
        }
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The concatenated Markdown
    #[default]
    Markdown,
    /// An HTML page that renders the Markdown with remark.js
    Remark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let mut config = Config::default();
        BuildArgs::default().apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let args = BuildArgs {
            base_dir: Some(PathBuf::from("/workshop")),
            sections: vec!["b.md".to_string(), "a.md".to_string()],
            separator: Some("\n".to_string()),
            ..BuildArgs::default()
        };

        args.apply(&mut config);

        assert_eq!(config.deck.base_dir, PathBuf::from("/workshop"));
        assert_eq!(config.deck.sections, vec!["b.md", "a.md"]);
        assert_eq!(config.deck.separator, "\n");
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
