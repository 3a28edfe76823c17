use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::BundleError;

pub const STYLESHEET_MARKER: &str = r#"<link href="./style.css" rel="stylesheet"/>"#;
pub const SCRIPT_MARKER: &str = r#"<script src="./scripts.js" defer></script>"#;
pub const BODY_CLOSE_MARKER: &str = "</body>";

const DATA_SCRIPT_OPEN: &str = r#"<script type="application/json" id="data-json">"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Js,
    Css,
    Html,
    Data,
}

impl InputKind {
    /// Read order of the inputs.
    pub const ALL: [InputKind; 4] = [
        InputKind::Js,
        InputKind::Css,
        InputKind::Html,
        InputKind::Data,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Js => "js",
            InputKind::Css => "css",
            InputKind::Html => "html",
            InputKind::Data => "data",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    pub js: PathBuf,
    pub css: PathBuf,
    pub html: PathBuf,
    pub data: PathBuf,
}

impl InputSet {
    pub fn new(
        js: impl Into<PathBuf>,
        css: impl Into<PathBuf>,
        html: impl Into<PathBuf>,
        data: impl Into<PathBuf>,
    ) -> Self {
        Self {
            js: js.into(),
            css: css.into(),
            html: html.into(),
            data: data.into(),
        }
    }

    pub fn path(&self, kind: InputKind) -> &Path {
        match kind {
            InputKind::Js => &self.js,
            InputKind::Css => &self.css,
            InputKind::Html => &self.html,
            InputKind::Data => &self.data,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub js: String,
    pub css: String,
    pub html: String,
    pub data: String,
}

/// Occurrences replaced by each substitution step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub stylesheet: usize,
    pub script: usize,
    pub body_close: usize,
}

impl SubstitutionReport {
    pub fn missing_markers(&self) -> Vec<&'static str> {
        [
            (self.stylesheet, STYLESHEET_MARKER),
            (self.script, SCRIPT_MARKER),
            (self.body_close, BODY_CLOSE_MARKER),
        ]
        .into_iter()
        .filter(|(count, _)| *count == 0)
        .map(|(_, marker)| marker)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub html: String,
    pub report: SubstitutionReport,
}

pub fn read_sources(inputs: &InputSet) -> Result<Sources, BundleError> {
    let mut sources = Sources::default();
    for kind in InputKind::ALL {
        let path = inputs.path(kind);
        let text = fs::read_to_string(path).map_err(|source| BundleError::Read {
            kind,
            path: path.to_path_buf(),
            source,
        })?;
        debug!(input = %kind, path = %path.display(), bytes = text.len(), "read input");
        match kind {
            InputKind::Js => sources.js = text,
            InputKind::Css => sources.css = text,
            InputKind::Html => sources.html = text,
            InputKind::Data => sources.data = text,
        }
    }
    Ok(sources)
}

/// Applies the three substitutions in order. Each step sees the output of the
/// previous one, so injected text can itself contain later markers.
pub fn combine(sources: &Sources) -> Bundle {
    let mut report = SubstitutionReport::default();

    let (html, count) = replace_counted(
        &sources.html,
        STYLESHEET_MARKER,
        &format!("<style>{}</style>", sources.css),
    );
    report.stylesheet = count;

    let (html, count) = replace_counted(
        &html,
        SCRIPT_MARKER,
        &format!("<script defer>{}</script>", sources.js),
    );
    report.script = count;

    let (html, count) = replace_counted(
        &html,
        BODY_CLOSE_MARKER,
        &format!("{DATA_SCRIPT_OPEN}{}</script>\n{BODY_CLOSE_MARKER}", sources.data),
    );
    report.body_close = count;

    Bundle { html, report }
}

fn replace_counted(haystack: &str, marker: &str, replacement: &str) -> (String, usize) {
    let count = haystack.matches(marker).count();
    if count == 0 {
        return (haystack.to_owned(), 0);
    }
    (haystack.replace(marker, replacement), count)
}

pub fn write_output(path: &Path, contents: &str) -> Result<(), BundleError> {
    fs::write(path, contents).map_err(|source| BundleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run(config: &Config) -> Result<Bundle> {
    let sources = read_sources(&config.inputs)?;
    let bundle = combine(&sources);
    for marker in bundle.report.missing_markers() {
        warn!(marker, "marker not found in html template, content omitted");
    }
    write_output(&config.output, &bundle.html)?;
    info!(
        output = %config.output.display(),
        bytes = bundle.html.len(),
        "wrote bundled html"
    );
    Ok(bundle)
}
