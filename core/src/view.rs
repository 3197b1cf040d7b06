//! Loading lifecycle state and the page rendered from it.
//!
//! # Design
//! `ViewState` is a single tagged variant so that "loading and failed at the
//! same time" cannot be expressed. It starts as `Loading` and resolves exactly
//! once; later outcomes are ignored. `render` is a pure function of the state.

use std::fmt;

use crate::error::FetchError;
use crate::types::ProcessedData;

pub const TITLE: &str = "Newsletter Content";
pub const LOADING_TEXT: &str = "Loading content...";
pub const TEXT_HEADING: &str = "Extracted Text";
pub const NO_CONTENT_TEXT: &str = "No text content found.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    /// `text` is `None` when the backend succeeded without any content.
    Success { text: Option<String> },
    Error { message: String },
}

impl ViewState {
    pub fn from_outcome(outcome: Result<ProcessedData, FetchError>) -> Self {
        match outcome {
            Ok(data) => ViewState::Success {
                text: data.text().map(str::to_string),
            },
            Err(err) => ViewState::Error {
                message: err.display_message(),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Move from `Loading` to the terminal state for `outcome`.
    ///
    /// Returns `false` and leaves the state untouched if it already resolved.
    pub fn resolve(&mut self, outcome: Result<ProcessedData, FetchError>) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = ViewState::from_outcome(outcome);
        true
    }

    pub fn render(&self) -> Page {
        let region = match self {
            ViewState::Loading => Region::Loading,
            ViewState::Success { text: Some(text) } => Region::Text(text.clone()),
            ViewState::Success { text: None } => Region::NoContent,
            ViewState::Error { message } => Region::Error(message.clone()),
        };
        Page {
            title: TITLE,
            region,
        }
    }
}

/// The conditional part of the page. Exactly one is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    Loading,
    Error(String),
    Text(String),
    NoContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub region: Region,
}

impl Page {
    /// HTML fragment for the page. Text is escaped and otherwise unchanged.
    pub fn to_html(&self) -> String {
        let region = match &self.region {
            Region::Loading => format!("<p>{LOADING_TEXT}</p>"),
            Region::Error(message) => format!(
                "<p class=\"error\" style=\"color: red\">Error: {}</p>",
                escape_html(message)
            ),
            Region::Text(text) => text_section(&format!("<pre>{}</pre>", escape_html(text))),
            Region::NoContent => text_section(&format!("<p>{NO_CONTENT_TEXT}</p>")),
        };
        format!(
            "<div class=\"App\"><h1>{}</h1>{region}</div>",
            escape_html(self.title)
        )
    }
}

fn text_section(inner: &str) -> String {
    format!(
        "<div class=\"content-container\"><div class=\"text-section\">\
         <h2>{TEXT_HEADING}</h2>{inner}</div></div>"
    )
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        match &self.region {
            Region::Loading => writeln!(f, "{LOADING_TEXT}"),
            Region::Error(message) => writeln!(f, "Error: {message}"),
            Region::Text(text) => {
                writeln!(f, "{TEXT_HEADING}")?;
                writeln!(f)?;
                writeln!(f, "{text}")
            }
            Region::NoContent => {
                writeln!(f, "{TEXT_HEADING}")?;
                writeln!(f)?;
                writeln!(f, "{NO_CONTENT_TEXT}")
            }
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FALLBACK_MESSAGE;

    fn with_text(text: &str) -> ProcessedData {
        ProcessedData {
            plain_text: Some(text.to_string()),
            ..ProcessedData::default()
        }
    }

    #[test]
    fn starts_loading() {
        let state = ViewState::default();
        assert!(state.is_loading());
        assert_eq!(state.render().region, Region::Loading);
    }

    #[test]
    fn success_keeps_text_verbatim() {
        let text = "  Line one\n\tLine <two> & three  \n";
        let state = ViewState::from_outcome(Ok(with_text(text)));
        assert_eq!(state.render().region, Region::Text(text.to_string()));
    }

    #[test]
    fn success_without_text_renders_no_content() {
        let state = ViewState::from_outcome(Ok(ProcessedData::default()));
        assert_eq!(state, ViewState::Success { text: None });
        assert_eq!(state.render().region, Region::NoContent);
    }

    #[test]
    fn success_with_empty_text_renders_no_content() {
        let state = ViewState::from_outcome(Ok(with_text("")));
        assert_eq!(state.render().region, Region::NoContent);
    }

    #[test]
    fn http_error_shows_backend_message() {
        let state = ViewState::from_outcome(Err(FetchError::Http {
            status: 500,
            message: Some("extraction failed".to_string()),
        }));
        assert_eq!(
            state.render().region,
            Region::Error("extraction failed".to_string())
        );
    }

    #[test]
    fn network_error_shows_fallback() {
        let state = ViewState::from_outcome(Err(FetchError::Network("refused".to_string())));
        assert_eq!(
            state,
            ViewState::Error {
                message: FALLBACK_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn resolve_happens_once() {
        let mut state = ViewState::Loading;
        assert!(state.resolve(Ok(with_text("first"))));
        assert!(!state.resolve(Err(FetchError::Network("late".to_string()))));
        assert_eq!(
            state,
            ViewState::Success {
                text: Some("first".to_string())
            }
        );
    }

    #[test]
    fn text_rendering_of_each_region() {
        assert_eq!(
            ViewState::Loading.render().to_string(),
            "Newsletter Content\n\nLoading content...\n"
        );
        assert_eq!(
            ViewState::from_outcome(Ok(with_text("Hello world")))
                .render()
                .to_string(),
            "Newsletter Content\n\nExtracted Text\n\nHello world\n"
        );
        assert_eq!(
            ViewState::Success { text: None }.render().to_string(),
            "Newsletter Content\n\nExtracted Text\n\nNo text content found.\n"
        );
        assert_eq!(
            ViewState::Error {
                message: "extraction failed".to_string()
            }
            .render()
            .to_string(),
            "Newsletter Content\n\nError: extraction failed\n"
        );
    }

    #[test]
    fn html_puts_text_in_pre_and_escapes_it() {
        let html = ViewState::from_outcome(Ok(with_text("a < b & \"c\"")))
            .render()
            .to_html();
        assert!(html.contains("<pre>a &lt; b &amp; &quot;c&quot;</pre>"));
        assert!(html.contains("<h1>Newsletter Content</h1>"));
        assert!(!html.contains(LOADING_TEXT));
    }

    #[test]
    fn html_marks_errors() {
        let html = ViewState::Error {
            message: "boom".to_string(),
        }
        .render()
        .to_html();
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Error: boom"));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn loading_html_has_no_content_or_error() {
        let html = ViewState::Loading.render().to_html();
        assert!(html.contains(LOADING_TEXT));
        assert!(!html.contains("Error:"));
        assert!(!html.contains(TEXT_HEADING));
    }
}
