// src/pipeline/plist.rs
//! Property-list patch: step four of the pipeline.
//!
//! The plist is treated as an opaque text blob: the `UIAppFonts` fragment is
//! spliced in at a computed insertion point, without parsing the document.
//! Patching is not idempotent; running the pipeline twice leaves two
//! fragments under the same key. That is the documented contract.

use super::IOS_DIR;
use crate::config::FontDeclaration;
use crate::error::PipelineError;
use fontbridge_traits::Diagnostics;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};

/// The key the platform OS reads bundled font file names from.
pub const FONTS_KEY: &str = "UIAppFonts";

/// File name of a target's application property list.
pub const INFO_PLIST: &str = "Info.plist";

const DICT_OPEN: &str = "<dict>";
const PLIST_CLOSE: &str = "</plist>";

const EMPTY_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
</dict>
</plist>
"#;

/// Computes where the fragment is spliced into `document`.
///
/// Immediately after the first `<dict>` when one exists; otherwise
/// immediately before `</plist>`. `None` when neither marker is present.
pub fn insertion_point(document: &str) -> Option<usize> {
    if let Some(index) = document.find(DICT_OPEN) {
        return Some(index + DICT_OPEN.len());
    }
    document.find(PLIST_CLOSE)
}

/// Builds the `UIAppFonts` fragment for one target's font bucket: one
/// `<string>` per font, base file name only, in bucket order.
pub fn fonts_fragment(fonts: &[&FontDeclaration]) -> String {
    let entries = fonts
        .iter()
        .map(|font| format!("\t\t<string>{}</string>", font.file_name()))
        .join("\n");
    format!("\n\t<key>{FONTS_KEY}</key>\n\t<array>\n{entries}\n\t</array>")
}

/// Patches the `Info.plist` of `target` under the project root.
///
/// A missing file is first created as a minimal empty plist (intermediate
/// directories included), then patched in the same invocation. The patched
/// document fully replaces the previous file content.
///
/// Returns the plist path.
pub fn patch_target_plist(
    project_root: &Path,
    target: &str,
    fonts: &[&FontDeclaration],
    diagnostics: &dyn Diagnostics,
) -> Result<PathBuf, PipelineError> {
    let path = project_root.join(IOS_DIR).join(target).join(INFO_PLIST);
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, EMPTY_PLIST)?;
        diagnostics.emit(&format!("[PLIST] Created empty {}", path.display()));
    }

    let document = fs::read_to_string(&path)?;
    let at = insertion_point(&document).ok_or_else(|| PipelineError::PlistFormat {
        path: path.clone(),
    })?;

    let fragment = fonts_fragment(fonts);
    let mut patched = String::with_capacity(document.len() + fragment.len());
    patched.push_str(&document[..at]);
    patched.push_str(&fragment);
    patched.push_str(&document[at..]);
    fs::write(&path, patched)?;

    diagnostics.emit(&format!(
        "[PLIST] Declared {} font(s) under {} in {}",
        fonts.len(),
        FONTS_KEY,
        path.display()
    ));

    Ok(path)
}
