// builder for creating test documentation projects

use crate::utils::config::{CONFIG_FILE_NAME, DocstampConfig};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DEFAULT_METADATA: &str = "% Dokument-Metadaten\n\
\\newcommand{\\DocumentTitle}{IT-Sicherheitsdokumentation}\n\
\\newcommand{\\DocumentVersion}{2024.01.15}\n\
\\newcommand{\\DocumentDate}{15. Januar 2024}\n\
\\newcommand{\\ValidUntil}{14.01.2027}\n\
\\newcommand{\\NextReview}{Januar 2026}\n";

pub const DEFAULT_MAIN_TEX: &str = "\\documentclass{article}\n\
\\input{config/metadata}\n\
\\begin{document}\n\
\\input{includes/993_anhang-changelog}\n\
\\end{document}\n";

pub const DEFAULT_CHANGELOG: &str = "# Changelog\n\
\n\
## [2025.10.15] - 2025-10-15\n\
\n\
### Changed\n\
- Passwortrichtlinie überarbeitet\n\
- Backup-Konzept ergänzt\n\
\n\
## [2025.09.01] - 2025-09-01\n\
\n\
### Added\n\
- Notfallhandbuch\n\
- Rollenkonzept\n\
- Schulungsplan\n";

/// builder for test projects laid out like a real documentation repository
pub struct TestProjectBuilder {
    metadata: Option<String>,
    main_tex: Option<String>,
    changelog: Option<String>,
    config: Option<String>,
    files: BTreeMap<PathBuf, String>,
}

impl TestProjectBuilder {
    /// project with the default template, main file and changelog
    pub fn new() -> Self {
        Self {
            metadata: Some(DEFAULT_METADATA.to_string()),
            main_tex: Some(DEFAULT_MAIN_TEX.to_string()),
            changelog: Some(DEFAULT_CHANGELOG.to_string()),
            config: None,
            files: BTreeMap::new(),
        }
    }

    pub fn metadata(mut self, content: impl Into<String>) -> Self {
        self.metadata = Some(content.into());
        self
    }

    pub fn no_metadata(mut self) -> Self {
        self.metadata = None;
        self
    }

    pub fn no_main_tex(mut self) -> Self {
        self.main_tex = None;
        self
    }

    pub fn changelog(mut self, content: impl Into<String>) -> Self {
        self.changelog = Some(content.into());
        self
    }

    pub fn no_changelog(mut self) -> Self {
        self.changelog = None;
        self
    }

    /// contents of `docstamp.toml`
    pub fn config(mut self, content: impl Into<String>) -> Self {
        self.config = Some(content.into());
        self
    }

    pub fn file(mut self, rel_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(rel_path.into(), content.into());
        self
    }

    /// write the project into a fresh temporary directory
    pub fn build(self) -> Result<TestProject, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();
        let defaults = DocstampConfig::new(&root);

        fs::create_dir_all(defaults.tex_dir())?;

        if let Some(content) = &self.metadata {
            Self::write(&defaults.metadata_path(), content)?;
        }
        if let Some(content) = &self.main_tex {
            Self::write(&defaults.main_tex_path(), content)?;
        }
        if let Some(content) = &self.changelog {
            Self::write(&defaults.changelog_path(), content)?;
        }
        if let Some(content) = &self.config {
            Self::write(&root.join(CONFIG_FILE_NAME), content)?;
        }
        for (rel_path, content) in &self.files {
            Self::write(&root.join(rel_path), content)?;
        }

        Ok(TestProject {
            path: root,
            _temp_dir: temp_dir,
        })
    }

    fn write(path: &Path, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for TestProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// represents a built test project, removed on drop
pub struct TestProject {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TestProject {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// configuration as the CLI would load it
    pub fn config(&self) -> Result<DocstampConfig, Box<dyn std::error::Error>> {
        Ok(DocstampConfig::load_or_default(&self.path)?)
    }

    pub fn read(&self, rel_path: impl AsRef<Path>) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(self.path.join(rel_path))?)
    }

    pub fn write(
        &self,
        rel_path: impl AsRef<Path>,
        content: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        TestProjectBuilder::write(&self.path.join(rel_path), content)
    }

    pub fn exists(&self, rel_path: impl AsRef<Path>) -> bool {
        self.path.join(rel_path).exists()
    }
}
