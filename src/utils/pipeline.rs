// sequencing of the documentation build steps

use crate::error::{Error, Result};
use crate::utils::changelog::{
    ChangelogReport, generate_latex_changelog, parse_changelog, write_changelog_fragment,
};
use crate::utils::config::DocstampConfig;
use crate::utils::latex::{BuildOutcome, LatexBuilder};
use crate::utils::metadata;
use crate::utils::version::{VersionInfo, generate_version_from_date};
use log::{info, warn};

/// what a full run produced
#[derive(Debug)]
pub struct RunSummary {
    pub version: VersionInfo,
    pub changelog: std::result::Result<ChangelogReport, Error>,
    /// `None` when the build was skipped
    pub build: Option<BuildOutcome>,
}

/// runs each step of the documentation build against one project root
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    config: DocstampConfig,
}

impl DocumentPipeline {
    pub fn new(config: DocstampConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DocstampConfig {
        &self.config
    }

    /// version currently stamped into the metadata template
    pub fn current_version(&self) -> Result<String> {
        metadata::current_version(self.config.metadata_path())
    }

    /// version metadata for `date` (`YYYY-MM-DD`), or for today
    pub fn compute_version(&self, date: Option<&str>) -> Result<VersionInfo> {
        generate_version_from_date(date)
    }

    /// stamp `info` into the metadata template
    pub fn update_metadata(&self, info: &VersionInfo) -> Result<()> {
        let main_tex = self.config.main_tex_path();
        if !main_tex.is_file() {
            return Err(Error::FileNotFound { path: main_tex });
        }

        metadata::update_metadata_file(self.config.metadata_path(), info)
    }

    /// parse the changelog and overwrite the generated table
    pub fn regenerate_changelog(&self) -> Result<ChangelogReport> {
        let changelog = parse_changelog(self.config.changelog_path())?;
        if changelog.is_empty() {
            warn!(
                "no changelog entries found in {}",
                self.config.changelog_path().display()
            );
        }

        let content = generate_latex_changelog(&changelog.entries, &self.config.changelog);
        let output_path = self.config.changelog_output_path();
        write_changelog_fragment(&output_path, &content)?;

        let report = ChangelogReport {
            output_path,
            entry_count: changelog.len(),
            rendered_count: changelog.len().min(self.config.changelog.max_entries),
        };
        info!(
            "generated changelog {} from {} version entries",
            report.output_path.display(),
            report.entry_count
        );
        Ok(report)
    }

    /// run the typesetting tool in the tex directory
    pub fn build_pdf(&self) -> Result<BuildOutcome> {
        LatexBuilder::build(&self.config.build, &self.config.tex_dir())
    }

    /// stamp metadata, regenerate the changelog and build
    ///
    /// a changelog failure is logged and recorded in the summary, any other
    /// failure aborts the run
    pub fn run(&self, info: &VersionInfo, skip_build: bool) -> Result<RunSummary> {
        self.update_metadata(info)?;

        let changelog = self.regenerate_changelog();
        if let Err(ref e) = changelog {
            warn!("changelog generation failed: {}", e);
        }

        let build = if skip_build {
            None
        } else {
            Some(self.build_pdf()?)
        };

        Ok(RunSummary {
            version: info.clone(),
            changelog,
            build,
        })
    }
}
