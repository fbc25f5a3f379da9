//! Build-time font asset injection for generated Xcode-style projects.
//!
//! Given a list of font declarations with target associations, the plugin
//! copies the font files into the generated project tree, registers each file
//! as a build resource against the correct native target, and declares the
//! font file names under `UIAppFonts` in each target's `Info.plist` so the OS
//! loads them at app launch.
//!
//! The whole transformation is one synchronous pass, invoked once per build
//! configuration run by the host build tool. Android is handled by a sibling
//! plugin and is out of scope here; declarations marked `android` are
//! filtered out.
//!
//! # Example
//!
//! ```ignore
//! use fontbridge::{FontPipeline, Options};
//! use fontbridge::pbx::PbxProject;
//!
//! let options = Options::from_json_str(r#"{
//!     "fonts": [{"filePath": "Inter-Regular.ttf", "targets": ["app"]}],
//!     "srcFolder": "assets/fonts"
//! }"#)?;
//!
//! let pipeline = FontPipeline::builder()
//!     .with_project_root("generated/MyApp")
//!     .with_options(options)
//!     .build()?;
//!
//! let project = pipeline.run(PbxProject::with_targets(["app"]))?;
//! ```
//!
//! Re-running the pipeline is not idempotent: fonts are re-copied (fine) and
//! the `UIAppFonts` fragment is inserted again (duplicate entries). See the
//! documentation on [`pipeline`].

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{FontDeclaration, Options, Platform};
pub use error::PipelineError;
pub use pipeline::{FONTS_DIR, FontPipeline, FontPipelineBuilder, GroupedFonts, IOS_DIR};

// Re-export the collaborator contracts and the reference descriptor so hosts
// depend on a single crate.
pub use fontbridge_pbx as pbx;
pub use fontbridge_traits as traits;

pub use fontbridge_traits::{
    Diagnostics, LogDiagnostics, MemoryDiagnostics, NullDiagnostics, ProjectGraph,
};
