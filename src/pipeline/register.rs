// src/pipeline/register.rs
//! Project resource registration: step five of the pipeline.

use super::FONTS_DIR;
use super::group::GroupedFonts;
use crate::error::PipelineError;
use fontbridge_traits::{Diagnostics, ProjectGraph, ResourceRequest};

/// Logical group the font file references are filed under.
pub const RESOURCES_GROUP: &str = "Resources";

/// Registers every grouped font with its resolved target, threading the
/// project value through an explicit fold over (target, font) pairs.
///
/// An unresolvable target name aborts before any of that target's fonts are
/// registered; registrations applied for earlier targets remain in the
/// returned-so-far project state and are not rolled back.
pub fn register_fonts<P: ProjectGraph>(
    project: P,
    grouped: &GroupedFonts<'_>,
    diagnostics: &dyn Diagnostics,
) -> Result<P, PipelineError> {
    grouped.iter().try_fold(project, |project, (target_name, fonts)| {
        let target = project.target_named(target_name).ok_or_else(|| {
            PipelineError::Config(format!(
                "target '{target_name}' was not found in the project; verify the target exists before declaring fonts for it"
            ))
        })?;

        diagnostics.emit(&format!(
            "[PROJECT] Registering {} font(s) with target '{}'",
            fonts.len(),
            target_name
        ));

        fonts.iter().try_fold(project, |project, font| {
            let request = ResourceRequest::new(
                // Slash-separated virtual path in the descriptor, not a
                // filesystem location.
                format!("{FONTS_DIR}/{}", font.file_path),
                RESOURCES_GROUP,
                target.id.clone(),
                true,
            );
            Ok(project.add_resource_file(&request)?)
        })
    })
}
