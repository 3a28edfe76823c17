use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::bundle::InputSet;

const DEFAULT_JS: &str = "scripts.js";
const DEFAULT_CSS: &str = "style.css";
const DEFAULT_HTML: &str = "index.html";
const DEFAULT_DATA: &str = "testdata.json";

#[derive(Debug, Parser)]
#[command(
    name = "inline-bundle",
    version,
    about = "Merge JS/CSS/HTML/data into single HTML file"
)]
pub struct Cli {
    /// Path to scripts file.
    #[arg(long, env = "INLINE_BUNDLE_JS", default_value = DEFAULT_JS)]
    pub js: PathBuf,

    /// Path to CSS style file.
    #[arg(long, env = "INLINE_BUNDLE_CSS", default_value = DEFAULT_CSS)]
    pub css: PathBuf,

    /// Path to base HTML file.
    #[arg(long, env = "INLINE_BUNDLE_HTML", default_value = DEFAULT_HTML)]
    pub html: PathBuf,

    /// Path to data JSON file.
    #[arg(long, env = "INLINE_BUNDLE_DATA", default_value = DEFAULT_DATA)]
    pub data: PathBuf,

    /// Output HTML file.
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inputs: InputSet,
    pub output: PathBuf,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        Config::from_parts(Cli::parse())
    }

    pub fn from_parts(cli: Cli) -> Result<Self> {
        for (name, path) in [
            ("js", &cli.js),
            ("css", &cli.css),
            ("html", &cli.html),
            ("data", &cli.data),
            ("output", &cli.output),
        ] {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("{name} path must not be empty"));
            }
        }

        Ok(Self {
            inputs: InputSet::new(cli.js, cli.css, cli.html, cli.data),
            output: cli.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_output_given() {
        let cli = Cli::try_parse_from(["inline-bundle", "out.html"]).unwrap();
        let config = Config::from_parts(cli).unwrap();
        assert_eq!(config.output, PathBuf::from("out.html"));
        assert_eq!(
            config.inputs,
            InputSet::new("scripts.js", "style.css", "index.html", "testdata.json")
        );
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "inline-bundle",
            "--js",
            "dist/app.js",
            "--css",
            "dist/app.css",
            "--html",
            "shell.html",
            "--data",
            "results.json",
            "report.html",
        ])
        .unwrap();
        let config = Config::from_parts(cli).unwrap();
        assert_eq!(
            config.inputs,
            InputSet::new("dist/app.js", "dist/app.css", "shell.html", "results.json")
        );
        assert_eq!(config.output, PathBuf::from("report.html"));
    }

    #[test]
    fn output_is_required() {
        let err = Cli::try_parse_from(["inline-bundle", "--js", "a.js"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn empty_paths_are_rejected() {
        let cli = Cli {
            js: DEFAULT_JS.into(),
            css: PathBuf::new(),
            html: DEFAULT_HTML.into(),
            data: DEFAULT_DATA.into(),
            output: "out.html".into(),
        };
        let err = Config::from_parts(cli).unwrap_err();
        assert_eq!(err.to_string(), "css path must not be empty");
    }
}
