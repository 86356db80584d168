
pub use fixtures::*;
pub use test_project::TestProject;
