//! remark.js page rendering.
//!
//! Wraps the assembled Markdown in an HTML page whose `<textarea id="source">`
//! remark.js turns into slides. The page is what deck2pdf's `remarkjs`
//! profile consumes.

use std::path::Path;

use tracing::debug;

use crate::config::{RemarkConfig, SOURCE_PLACEHOLDER, TITLE_PLACEHOLDER};
use crate::error::{Error, Result};

/// Built-in page used when no template is configured.
const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>{{title}}</title>
    <meta charset="utf-8">
  </head>
  <body>
    <textarea id="source">
{{source}}
    </textarea>
    <script src="https://remarkjs.com/downloads/remark-latest.min.js"></script>
    <script>
      var slideshow = remark.create();
    </script>
  </body>
</html>
"#;

/// A remark.js page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkPage {
    template: String,
    title: String,
}

impl Default for RemarkPage {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            title: RemarkConfig::default().title,
        }
    }
}

impl RemarkPage {
    /// Use `template` as the page body.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidation` if the template has no `{{source}}` slot.
    pub fn new(template: impl Into<String>, title: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(SOURCE_PLACEHOLDER) {
            return Err(Error::validation(format!(
                "remark template must contain {SOURCE_PLACEHOLDER}"
            )));
        }
        Ok(Self {
            template,
            title: title.into(),
        })
    }

    /// Build the page from the `[remark]` configuration, reading the custom
    /// template if one is set.
    ///
    /// # Errors
    ///
    /// Returns `TemplateRead` if the template file cannot be read, or
    /// `ConfigValidation` if it lacks a `{{source}}` slot.
    pub fn from_config(remark: &RemarkConfig) -> Result<Self> {
        match &remark.template {
            Some(path) => Self::new(read_template(path)?, remark.title.clone()),
            None => Ok(Self {
                template: DEFAULT_TEMPLATE.to_string(),
                title: remark.title.clone(),
            }),
        }
    }

    /// Render `markdown` into the page.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        // Placeholders are only expanded in the template text itself, never
        // inside the substituted title or Markdown
        let title = escape_html(&self.title);
        match self.template.split_once(SOURCE_PLACEHOLDER) {
            Some((head, tail)) => format!(
                "{}{}{}",
                head.replace(TITLE_PLACEHOLDER, &title),
                escape_html(markdown),
                tail.replace(TITLE_PLACEHOLDER, &title)
            ),
            None => self.template.replace(TITLE_PLACEHOLDER, &title),
        }
    }
}

fn read_template(path: &Path) -> Result<String> {
    debug!("Reading remark template {}", path.display());
    std::fs::read_to_string(path).map_err(|source| Error::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Escape text for inclusion in an HTML element body.
///
/// Browsers decode these entities in a `<textarea>`, so remark sees the
/// original Markdown.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("a < b && c > d"),
            "a &lt; b &amp;&amp; c &gt; d"
        );
        assert_eq!(escape_html("# Intro\n---\n"), "# Intro\n---\n");
    }

    #[test]
    fn test_escape_closing_textarea() {
        let escaped = escape_html("</textarea><script>");
        assert!(!escaped.contains("</textarea>"));
    }

    #[test]
    fn test_default_page_embeds_markdown() {
        let page = RemarkPage::default().render("# Intro\n---\n# Node\n");

        assert!(page.contains("<textarea id=\"source\">\n# Intro\n---\n# Node\n"));
        assert!(page.contains("remark.create()"));
        assert!(page.contains("<title>Slides</title>"));
        assert!(!page.contains(SOURCE_PLACEHOLDER));
    }

    #[test]
    fn test_custom_template() {
        let page = RemarkPage::new("<h1>{{title}}</h1>{{source}}", "Node & You")
            .unwrap()
            .render("<b>");

        assert_eq!(page, "<h1>Node &amp; You</h1>&lt;b&gt;");
    }

    #[test]
    fn test_markdown_with_placeholder_text_is_not_expanded() {
        let page = RemarkPage::new("{{source}}|{{title}}", "T")
            .unwrap()
            .render("literal {{title}}");

        assert_eq!(page, "literal {{title}}|T");
    }

    #[test]
    fn test_title_with_placeholder_text_is_not_expanded() {
        let template = "<title>{{title}}</title><textarea>{{source}}</textarea>";
        let page = RemarkPage::new(template, "{{source}}").unwrap().render("# MD");

        assert_eq!(page, "<title>{{source}}</title><textarea># MD</textarea>");
    }

    #[test]
    fn test_default_page_with_placeholder_title() {
        let remark = RemarkConfig {
            title: "{{source}}".to_string(),
            template: None,
        };

        let page = RemarkPage::from_config(&remark).unwrap().render("# MD");

        assert!(page.contains("<title>{{source}}</title>"));
        assert!(page.contains("<textarea id=\"source\">\n# MD\n"));
    }

    #[test]
    fn test_template_without_source_slot() {
        let result = RemarkPage::new("<html></html>", "x");
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_from_config_default() {
        let page = RemarkPage::from_config(&RemarkConfig::default()).unwrap();
        assert_eq!(page, RemarkPage::default());
    }

    #[test]
    fn test_from_config_reads_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdf.html");
        std::fs::write(&path, "<textarea>{{source}}</textarea>").unwrap();
        let remark = RemarkConfig {
            title: "Deck".to_string(),
            template: Some(path),
        };

        let page = RemarkPage::from_config(&remark).unwrap().render("# Hi");

        assert_eq!(page, "<textarea># Hi</textarea>");
    }

    #[test]
    fn test_from_config_missing_template() {
        let remark = RemarkConfig {
            title: "Deck".to_string(),
            template: Some(PathBuf::from("/nonexistent/pdf.html")),
        };

        let err = RemarkPage::from_config(&remark).unwrap_err();
        assert!(matches!(err, Error::TemplateRead { .. }));
        assert!(err.to_string().contains("/nonexistent/pdf.html"));
    }
}
