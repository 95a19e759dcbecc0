//! Platform and library discovery commands

use anyhow::Result;
use prompttoquery::{ArtifactNames, LibraryLoader, PlatformDescriptor, SearchPath};
use std::path::PathBuf;

/// Print the detected platform with its primary and fallback artifact names
pub fn platform(base_name: Option<String>) -> Result<()> {
    let platform = PlatformDescriptor::current();
    let names = artifact_names(base_name);

    println!("Platform: {platform}");
    println!("  os:   {}", platform.os.as_str());
    println!("  arch: {}", platform.arch.as_str());
    println!("  libc: {}", platform.libc.as_str());

    println!("\nCandidates:");
    for name in names.candidates(&platform)?.iter() {
        println!("  {name}");
    }

    println!("\nFallbacks:");
    for name in names.fallbacks(&platform)?.iter() {
        println!("  {name}");
    }

    println!("\nSearch path:");
    for dir in SearchPath::standard().candidates() {
        let marker = if dir.is_dir() { "" } else { " (missing)" };
        println!("  {}{marker}", dir.display());
    }

    Ok(())
}

/// Print the file the loader would open, without opening it
pub fn locate(dirs: Vec<PathBuf>, base_name: Option<String>) -> Result<()> {
    let path = loader(dirs, base_name).locate()?;
    println!("{}", path.display());
    Ok(())
}

fn loader(dirs: Vec<PathBuf>, base_name: Option<String>) -> LibraryLoader {
    let mut loader = LibraryLoader::new().with_names(artifact_names(base_name));
    if !dirs.is_empty() {
        loader = loader.with_search_path(SearchPath::from_dirs(dirs));
    }
    loader
}

fn artifact_names(base_name: Option<String>) -> ArtifactNames {
    base_name.map(ArtifactNames::new).unwrap_or_default()
}
