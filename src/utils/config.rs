use super::changelog::ChangelogConfig;
use super::latex::BuildConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// name of the optional configuration file in the project root
pub const CONFIG_FILE_NAME: &str = "docstamp.toml";

/// project-relative locations of the files the pipeline touches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Keep-a-Changelog source (default: "CHANGELOG.md")
    pub changelog: PathBuf,

    /// directory the build tool runs in (default: "tex")
    pub tex_dir: PathBuf,

    /// template holding the version placeholders
    pub metadata: PathBuf,

    /// generated changelog table
    pub changelog_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            changelog: PathBuf::from("CHANGELOG.md"),
            tex_dir: PathBuf::from("tex"),
            metadata: Path::new("tex").join("config").join("metadata.tex"),
            changelog_output: Path::new("tex")
                .join("includes")
                .join("993_anhang-changelog.tex"),
        }
    }
}

/// main configuration for docstamp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocstampConfig {
    /// project root all relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub paths: PathsConfig,

    /// changelog table configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// typesetting tool configuration
    #[serde(default)]
    pub build: BuildConfig,
}

impl DocstampConfig {
    /// defaults rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;

        let config: DocstampConfig =
            toml::from_str(&contents).map_err(|e| Error::ConfigParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// load `docstamp.toml` from the project root, or use defaults when there is none
    ///
    /// a config file that exists but does not parse is an error
    pub fn load_or_default<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let mut config = match Self::find_config_file(root) {
            Some(config_path) => Self::load_from_file(&config_path)?,
            None => Self::default(),
        };
        config.root = root.to_path_buf();
        Ok(config)
    }

    /// find configuration file in the project root
    pub fn find_config_file<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
        let config_path = root.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }

    /// resolve a project-relative path against the root
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }

    pub fn changelog_path(&self) -> PathBuf {
        self.resolve(&self.paths.changelog)
    }

    pub fn tex_dir(&self) -> PathBuf {
        self.resolve(&self.paths.tex_dir)
    }

    pub fn main_tex_path(&self) -> PathBuf {
        self.tex_dir().join(&self.build.main_file)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.resolve(&self.paths.metadata)
    }

    pub fn changelog_output_path(&self) -> PathBuf {
        self.resolve(&self.paths.changelog_output)
    }
}
