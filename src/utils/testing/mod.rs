// testing utilities for generating throwaway documentation projects

pub mod project_builder;
pub mod scenarios;

pub use project_builder::{TestProject, TestProjectBuilder};
pub use scenarios::TestScenario;
