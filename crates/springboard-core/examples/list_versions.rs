//! List installed versions in an installation root and show which one the
//! stub would launch.

use springboard_core::{installed_versions, resolve_app_dir, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Get path from args or use current directory
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("Scanning {}", root.display());

    let versions = installed_versions(&root)?;
    if versions.is_empty() {
        println!("No installed versions found.");
        return Ok(());
    }

    println!("Found {} version(s):", versions.len());
    for version in &versions {
        println!("  - {}", version);
    }

    let app_dir = resolve_app_dir(&root)?;
    println!("Stub would launch from: {}", app_dir.display());

    Ok(())
}
