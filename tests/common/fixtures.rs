use fontbridge::{FontDeclaration, Options, Platform};
use std::fs;
use std::path::Path;

/// A declaration with explicit targets.
pub fn font(file_path: &str, targets: &[&str]) -> FontDeclaration {
    FontDeclaration {
        file_path: file_path.to_string(),
        name: None,
        platform: None,
        targets: Some(targets.iter().map(|t| t.to_string()).collect()),
    }
}

/// A declaration restricted to a platform.
pub fn platform_font(file_path: &str, platform: Platform, targets: &[&str]) -> FontDeclaration {
    FontDeclaration {
        platform: Some(platform),
        ..font(file_path, targets)
    }
}

/// A declaration without any target association (invalid on iOS).
pub fn orphan_font(file_path: &str) -> FontDeclaration {
    FontDeclaration {
        file_path: file_path.to_string(),
        name: None,
        platform: None,
        targets: None,
    }
}

/// Options over the conventional `assets/fonts` source folder.
pub fn options(fonts: Vec<FontDeclaration>) -> Options {
    Options {
        fonts,
        src_folder: "assets/fonts".into(),
    }
}

/// Populate `<project_root>/assets/fonts` with files whose content is derived
/// from their name, so byte-level copy assertions are possible.
pub fn write_font_files(project_root: &Path, names: &[&str]) {
    let src = project_root.join("assets/fonts");
    fs::create_dir_all(&src).expect("create font source folder");
    for name in names {
        let path = src.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create nested font folder");
        }
        fs::write(path, font_bytes(name)).expect("write font file");
    }
}

/// The deterministic content `write_font_files` gives a file.
pub fn font_bytes(name: &str) -> Vec<u8> {
    format!("font-data:{name}").into_bytes()
}

/// Write a target's Info.plist with the given content.
pub fn write_plist(project_root: &Path, target: &str, content: &str) {
    let dir = project_root.join("ios").join(target);
    fs::create_dir_all(&dir).expect("create target folder");
    fs::write(dir.join("Info.plist"), content).expect("write plist");
}
