// src/pipeline/assets.rs
//! Asset copy: step three of the pipeline.

use super::{FONTS_DIR, IOS_DIR};
use crate::error::PipelineError;
use fontbridge_traits::Diagnostics;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copies the source font folder into `ios/Fonts` under the project root.
///
/// The copy is a recursive merge: destination directories are created as
/// needed, same-named files are overwritten, unrelated pre-existing files are
/// left alone. Runs exactly once per invocation regardless of target count.
///
/// Returns the destination directory.
pub fn copy_fonts(
    project_root: &Path,
    src_folder: &Path,
    diagnostics: &dyn Diagnostics,
) -> Result<PathBuf, PipelineError> {
    let source = project_root.join(src_folder);
    if !source.exists() {
        return Err(PipelineError::Config(format!(
            "font source folder '{}' does not exist",
            source.display()
        )));
    }
    if !source.is_dir() {
        return Err(PipelineError::Config(format!(
            "font source path '{}' is not a directory",
            source.display()
        )));
    }

    let destination = project_root.join(IOS_DIR).join(FONTS_DIR);
    fs::create_dir_all(&destination)?;
    let copied = copy_dir_recursive(&source, &destination)?;
    diagnostics.emit(&format!(
        "[COPY] {} font file(s) copied to {}",
        copied,
        destination.display()
    ));

    Ok(destination)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
