// pre-defined test scenarios

use super::project_builder::{TestProject, TestProjectBuilder};

/// pre-defined test scenarios
pub enum TestScenario {
    /// default template, main file and a two-version changelog
    Standard,
    /// changelog without any version headings
    EmptyChangelog,
    /// no changelog file at all
    MissingChangelog,
    /// build tool replaced by a shell command that writes `main.pdf`
    #[cfg(unix)]
    FakeBuild,
}

impl TestScenario {
    /// build a project from a predefined scenario
    pub fn build(self) -> Result<TestProject, Box<dyn std::error::Error>> {
        match self {
            TestScenario::Standard => TestProjectBuilder::new().build(),
            TestScenario::EmptyChangelog => TestProjectBuilder::new()
                .changelog("# Changelog\n\nNothing released yet.\n")
                .build(),
            TestScenario::MissingChangelog => TestProjectBuilder::new().no_changelog().build(),
            #[cfg(unix)]
            TestScenario::FakeBuild => TestProjectBuilder::new()
                .config(
                    "[build]\n\
                     command = \"sh\"\n\
                     args = [\"-c\", \"echo \\\"typesetting $0\\\"; echo '%PDF' > main.pdf\"]\n\
                     timeout_secs = 10\n",
                )
                .build(),
        }
    }
}
