pub mod fixtures;

use fontbridge::pbx::PbxProject;
use fontbridge::{FontPipeline, MemoryDiagnostics, Options, PipelineError};
use std::path::Path;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Route `log`-backed diagnostics into the test harness output.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A pipeline run against a temporary project tree, with a recording sink.
pub struct PipelineRun {
    pub project: PbxProject,
    pub diagnostics: Arc<MemoryDiagnostics>,
}

/// Build and run a pipeline over `project_root` with the given options and
/// seed project.
pub fn run_pipeline(
    project_root: &Path,
    options: Options,
    project: PbxProject,
) -> Result<PipelineRun, PipelineError> {
    let diagnostics = Arc::new(MemoryDiagnostics::new());
    let pipeline = FontPipeline::builder()
        .with_project_root(project_root)
        .with_options(options)
        .with_diagnostics(diagnostics.clone())
        .build()?;

    let project = pipeline.run(project)?;
    Ok(PipelineRun {
        project,
        diagnostics,
    })
}

/// Read a target's Info.plist under the project root.
pub fn read_plist(project_root: &Path, target: &str) -> std::io::Result<String> {
    std::fs::read_to_string(project_root.join("ios").join(target).join("Info.plist"))
}
