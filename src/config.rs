// src/config.rs
//! Plugin configuration supplied by the invoking build tool.
//!
//! The build tool hands the plugin an [`Options`] value, typically parsed
//! from its JSON configuration. Field names on the wire are camelCase
//! (`filePath`, `srcFolder`); unknown fields are ignored because the same
//! configuration block carries sibling-platform keys this plugin does not
//! consume.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The platform a font declaration is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

/// One font asset entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDeclaration {
    /// Path of the font file inside the source font folder.
    pub file_path: String,

    /// Optional display name; falls back to the file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When set to `android`, the declaration is excluded from this
    /// platform's pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Names of the native targets the font is bundled with. Required on
    /// this platform; the pipeline fails before any mutation if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
}

impl FontDeclaration {
    /// Base file name with any leading directories stripped.
    pub fn file_name(&self) -> &str {
        Path::new(&self.file_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file_path)
    }

    /// The name used in diagnostics and error messages: the declared `name`,
    /// or the file stem when no name was declared.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => Path::new(&self.file_path)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(&self.file_path),
        }
    }
}

/// The whole-plugin configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Font declarations to process.
    pub fonts: Vec<FontDeclaration>,

    /// Folder containing the physical font files, relative to project root.
    pub src_folder: PathBuf,
}

impl Options {
    /// Parses an `Options` value from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses an `Options` value from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(file_path: &str) -> FontDeclaration {
        FontDeclaration {
            file_path: file_path.to_string(),
            name: None,
            platform: None,
            targets: None,
        }
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let options = Options::from_json_str(
            r#"{
                "fonts": [
                    {"filePath": "Inter-Regular.ttf", "targets": ["app"]},
                    {"filePath": "droid/Roboto.ttf", "platform": "android"}
                ],
                "srcFolder": "assets/fonts"
            }"#,
        )
        .unwrap();

        assert_eq!(options.fonts.len(), 2);
        assert_eq!(options.fonts[0].file_path, "Inter-Regular.ttf");
        assert_eq!(options.fonts[0].targets.as_deref(), Some(&["app".to_string()][..]));
        assert_eq!(options.fonts[1].platform, Some(Platform::Android));
        assert_eq!(options.src_folder, PathBuf::from("assets/fonts"));
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let options = Options::from_json_str(
            r#"{
                "fonts": [{"filePath": "Inter.ttf", "assetType": "font"}],
                "srcFolder": "fonts",
                "android": {"resDir": "app/src/main/res"}
            }"#,
        )
        .unwrap();

        assert_eq!(options.fonts.len(), 1);
    }

    #[test]
    fn test_file_name_strips_directories() {
        assert_eq!(declaration("nested/dir/Inter.ttf").file_name(), "Inter.ttf");
        assert_eq!(declaration("Inter.ttf").file_name(), "Inter.ttf");
    }

    #[test]
    fn test_display_name_prefers_declared_name() {
        let mut font = declaration("Inter-Regular.ttf");
        font.name = Some("Inter".to_string());
        assert_eq!(font.display_name(), "Inter");
    }

    #[test]
    fn test_display_name_falls_back_to_file_stem() {
        assert_eq!(declaration("fonts/Inter-Regular.ttf").display_name(), "Inter-Regular");
    }

    #[test]
    fn test_platform_round_trips_lowercase() {
        let json = serde_json::to_string(&Platform::Ios).unwrap();
        assert_eq!(json, r#""ios""#);
        let platform: Platform = serde_json::from_str(r#""android""#).unwrap();
        assert_eq!(platform, Platform::Android);
    }
}
