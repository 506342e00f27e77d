// build tool configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// how the typesetting tool is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// executable to run (default: "latexmk")
    pub command: String,

    /// arguments placed before the main file
    pub args: Vec<String>,

    /// document passed as the last argument, relative to the tex directory
    pub main_file: String,

    /// file that must exist after a successful build, relative to the tex directory
    pub artifact: String,

    /// seconds before the build is killed (default: 300)
    pub timeout_secs: u64,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn main_file(mut self, main_file: impl Into<String>) -> Self {
        self.main_file = main_file.into();
        self
    }

    pub fn artifact(mut self, artifact: impl Into<String>) -> Self {
        self.artifact = artifact.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: "latexmk".to_string(),
            args: vec![
                "-lualatex".to_string(),
                "-interaction=nonstopmode".to_string(),
                "-f".to_string(),
            ],
            main_file: "main.tex".to_string(),
            artifact: "main.pdf".to_string(),
            timeout_secs: 300,
        }
    }
}
