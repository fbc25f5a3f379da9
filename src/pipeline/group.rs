// src/pipeline/group.rs
//! Target grouping: step two of the pipeline.

use crate::config::FontDeclaration;
use crate::error::PipelineError;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Fonts partitioned by target name. Target iteration order is lexicographic
/// (not semantically significant); the per-target sequence preserves
/// declaration order, which fixes the plist insertion order.
pub type GroupedFonts<'a> = BTreeMap<String, Vec<&'a FontDeclaration>>;

/// Partitions `fonts` into per-target buckets.
///
/// Every declaration is validated before any bucket is built: a font without
/// a non-empty `targets` list is a configuration error, reported by its
/// display name. A font naming several targets is shared by reference across
/// all of its buckets.
pub fn group_by_target<'a>(fonts: &[&'a FontDeclaration]) -> Result<GroupedFonts<'a>, PipelineError> {
    for font in fonts {
        if !font.targets.as_ref().is_some_and(|targets| !targets.is_empty()) {
            return Err(PipelineError::Config(format!(
                "no targets declared for font '{}'; list the native targets it should be bundled with",
                font.display_name()
            )));
        }
    }

    let grouped = fonts
        .iter()
        .flat_map(|&font| {
            font.targets
                .iter()
                .flatten()
                .map(move |target| (target.clone(), font))
        })
        .into_group_map();

    Ok(grouped.into_iter().collect())
}
