// src/pipeline/filter.rs
//! Platform filter: step one of the pipeline.

use crate::config::{FontDeclaration, Options, Platform};

/// Selects the declarations applicable to the iOS pipeline: everything whose
/// `platform` is unset or not `android`. Pure; declaration order preserved.
pub fn ios_fonts(options: &Options) -> Vec<&FontDeclaration> {
    options
        .fonts
        .iter()
        .filter(|font| font.platform != Some(Platform::Android))
        .collect()
}
