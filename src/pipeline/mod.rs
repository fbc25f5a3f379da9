//! Font-injection pipeline orchestration.
//!
//! The pipeline runs five steps in strict sequence:
//!
//! 1. Filter the declarations down to this platform (iOS).
//! 2. Group the selected fonts by target name.
//! 3. Copy the source font folder into `ios/Fonts`.
//! 4. Patch each target's `Info.plist` with a `UIAppFonts` array.
//! 5. Register each copied font with its target in the build descriptor.
//!
//! Grouping validates every declaration before any filesystem mutation, so a
//! misconfigured font aborts the run with the project tree untouched.
//!
//! # Example
//!
//! ```ignore
//! use fontbridge::{FontPipeline, Options};
//! use fontbridge::pbx::PbxProject;
//!
//! let options = Options::from_json_file("fontbridge.json")?;
//! let pipeline = FontPipeline::builder()
//!     .with_project_root("generated/MyApp")
//!     .with_options(options)
//!     .build()?;
//!
//! let project = pipeline.run(PbxProject::with_targets(["app"]))?;
//! ```

mod assets;
mod filter;
mod group;
mod plist;
mod register;

pub use filter::ios_fonts;
pub use group::{GroupedFonts, group_by_target};
pub use plist::{FONTS_KEY, INFO_PLIST, fonts_fragment, insertion_point};
pub use register::RESOURCES_GROUP;

use crate::config::Options;
use crate::error::PipelineError;
use fontbridge_traits::{Diagnostics, LogDiagnostics, ProjectGraph};
use std::path::PathBuf;
use std::sync::Arc;

/// Directory under the project root holding the generated iOS project.
pub const IOS_DIR: &str = "ios";

/// Asset directory the fonts are copied into, under [`IOS_DIR`].
pub const FONTS_DIR: &str = "Fonts";

/// The configured, ready-to-run injection pipeline.
///
/// One-shot and synchronous: `run` is invoked once per build configuration
/// pass and threads the project descriptor through the steps.
pub struct FontPipeline {
    project_root: PathBuf,
    options: Options,
    diagnostics: Arc<dyn Diagnostics>,
}

impl FontPipeline {
    /// Creates a builder with default settings.
    pub fn builder() -> FontPipelineBuilder {
        FontPipelineBuilder::new()
    }

    /// Runs the pipeline against `project`, returning the updated descriptor.
    ///
    /// Errors abort remaining work; side effects already applied (copied
    /// files, patched plists, earlier registrations) are not rolled back.
    pub fn run<P: ProjectGraph>(&self, project: P) -> Result<P, PipelineError> {
        let sink = self.diagnostics.as_ref();

        let selected = filter::ios_fonts(&self.options);
        let grouped = group::group_by_target(&selected)?;
        log::debug!(
            "grouped {} font declaration(s) into {} target bucket(s)",
            selected.len(),
            grouped.len()
        );

        assets::copy_fonts(&self.project_root, &self.options.src_folder, sink)?;

        for (target, fonts) in &grouped {
            plist::patch_target_plist(&self.project_root, target, fonts, sink)?;
        }

        register::register_fonts(project, &grouped, sink)
    }
}

/// A builder for creating a [`FontPipeline`].
pub struct FontPipelineBuilder {
    project_root: Option<PathBuf>,
    options: Option<Options>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Default for FontPipelineBuilder {
    fn default() -> Self {
        Self {
            project_root: None,
            options: None,
            diagnostics: Arc::new(LogDiagnostics),
        }
    }
}

impl FontPipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the root of the generated project tree. Required.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Sets the plugin configuration. Required.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Replaces the default log-backed diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Consumes the builder and creates the `FontPipeline`.
    pub fn build(self) -> Result<FontPipeline, PipelineError> {
        let project_root = self.project_root.ok_or_else(|| {
            PipelineError::Config(
                "No project root has been configured. Use `with_project_root`.".to_string(),
            )
        })?;
        let options = self.options.ok_or_else(|| {
            PipelineError::Config(
                "No options have been configured. Use `with_options`.".to_string(),
            )
        })?;

        Ok(FontPipeline {
            project_root,
            options,
            diagnostics: self.diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_project_root() {
        let result = FontPipelineBuilder::new()
            .with_options(Options {
                fonts: vec![],
                src_folder: "fonts".into(),
            })
            .build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_builder_requires_options() {
        let result = FontPipelineBuilder::new().with_project_root("/tmp/project").build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
