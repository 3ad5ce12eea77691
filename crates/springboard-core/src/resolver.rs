//! Discovery of installed application versions.
//!
//! An installation root holds one subdirectory per installed version, named
//! `app-<semver>`. Everything else living in the root (the stub itself,
//! packages, state files) is ignored. Resolution scans the immediate
//! children once per launch and picks the highest version; nothing is cached
//! between invocations.

use crate::config::StubConfig;
use crate::error::{Result, SpringboardError};
use semver::Version;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns true if `name` lies in the reserved versioned-directory namespace.
///
/// Installers must not ship payload entries with this prefix; every `app-*`
/// name under the installation root belongs to the resolver.
pub fn is_versioned_dir_name(name: &str) -> bool {
    name.starts_with(StubConfig::VERSIONED_DIR_PREFIX)
}

/// Parse the version out of a candidate directory name.
///
/// `None` for names outside the reserved namespace and for suffixes that are
/// not valid semver. A stray `app-backup` or a half-written `app-1.2` must
/// never block launching a valid install.
fn parse_candidate(name: &str) -> Option<(Version, &str)> {
    let suffix = name.strip_prefix(StubConfig::VERSIONED_DIR_PREFIX)?;
    match Version::parse(suffix) {
        Ok(version) => Some((version, suffix)),
        Err(err) => {
            debug!("Skipping {}: {}", name, err);
            None
        }
    }
}

/// Collect every `(version, directory name)` candidate under `root`.
///
/// Only immediate children are considered. Directories (including symlinks
/// to directories) qualify; plain files never do, even with a matching name.
fn scan_candidates(root: &Path) -> Result<Vec<(Version, String)>> {
    let entries =
        std::fs::read_dir(root).map_err(|e| SpringboardError::VersionResolutionFailed {
            root: root.to_path_buf(),
            message: "could not read installation root".to_string(),
            source: Some(e),
        })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if let Some((version, _)) = parse_candidate(&name) {
            candidates.push((version, name));
        }
    }

    Ok(candidates)
}

/// Resolve the directory of the highest installed version under `root`.
///
/// Candidates are the immediate children named `app-<semver>`. The highest
/// version wins; an exact tie keeps the candidate seen first. The returned
/// path is `root` joined with the winning entry's original directory name,
/// so it always names a directory that was actually enumerated.
///
/// Fails when the root cannot be read or when no child parses as a
/// versioned directory. An installed `app-0.0.0` is a normal candidate like
/// any other.
pub fn resolve_app_dir(root: &Path) -> Result<PathBuf> {
    let best = scan_candidates(root)?
        .into_iter()
        .reduce(|best, candidate| if candidate.0 > best.0 { candidate } else { best });

    match best {
        Some((version, dir_name)) => {
            let app_dir = root.join(dir_name);
            debug!("Resolved version {} at {}", version, app_dir.display());
            Ok(app_dir)
        }
        None => Err(SpringboardError::VersionResolutionFailed {
            root: root.to_path_buf(),
            message: format!(
                "no {}<version> directory found",
                StubConfig::VERSIONED_DIR_PREFIX
            ),
            source: None,
        }),
    }
}

/// List every installed version under `root`, newest first.
///
/// Shares the candidate rules with [`resolve_app_dir`]; an unreadable root
/// is the same failure, but an empty listing is simply empty.
pub fn installed_versions(root: &Path) -> Result<Vec<Version>> {
    let mut versions: Vec<Version> = scan_candidates(root)?
        .into_iter()
        .map(|(version, _)| version)
        .collect();
    versions.sort();
    versions.reverse(); // Newest first
    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Build an installation root containing the given child directories.
    fn make_root(dirs: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in dirs {
            fs::create_dir(temp_dir.path().join(name)).unwrap();
        }
        temp_dir
    }

    #[test]
    fn picks_highest_version() {
        let root = make_root(&["app-1.0.0", "app-1.2.0", "app-1.1.9"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-1.2.0"));
    }

    #[test]
    fn compares_numerically_not_lexically() {
        let root = make_root(&["app-1.9.0", "app-1.10.0"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-1.10.0"));
    }

    #[test]
    fn ignores_foreign_directories() {
        let root = make_root(&["app-1.0.0", "packages", "staging", "application-2.0.0"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-1.0.0"));
    }

    #[test]
    fn skips_unparsable_suffixes() {
        let root = make_root(&["app-1.0.0", "app-backup", "app-1.2", "app-"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-1.0.0"));
    }

    #[test]
    fn ignores_plain_files_with_candidate_names() {
        let root = make_root(&["app-1.0.0"]);
        fs::write(root.path().join("app-9.9.9"), b"not a directory").unwrap();
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-1.0.0"));
    }

    #[test]
    fn resolve_fails_on_empty_root() {
        let root = make_root(&[]);
        let result = resolve_app_dir(root.path());
        assert!(matches!(
            result,
            Err(SpringboardError::VersionResolutionFailed { .. })
        ));
    }

    #[test]
    fn resolve_fails_when_no_valid_candidate() {
        // Entries exist, but none of them is a versioned directory. This must
        // be a hard failure rather than a made-up app-0.0.0 path that was
        // never on disk.
        let root = make_root(&["packages", "app-backup", "app-latest"]);
        let result = resolve_app_dir(root.path());
        assert!(matches!(
            result,
            Err(SpringboardError::VersionResolutionFailed { .. })
        ));
    }

    #[test]
    fn resolve_fails_when_root_missing() {
        let root = make_root(&[]);
        let missing = root.path().join("missing");
        let result = resolve_app_dir(&missing);
        assert!(matches!(
            result,
            Err(SpringboardError::VersionResolutionFailed { root, .. }) if root == missing
        ));
    }

    #[test]
    fn zero_version_is_a_normal_candidate() {
        let root = make_root(&["app-0.0.0"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-0.0.0"));
    }

    #[test]
    fn selects_pre_release_when_only_candidate() {
        let root = make_root(&["app-2.0.0-beta.1"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-2.0.0-beta.1"));
    }

    #[test]
    fn release_outranks_its_own_pre_release() {
        let root = make_root(&["app-2.0.0-beta.1", "app-2.0.0"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-2.0.0"));
    }

    #[test]
    fn resolved_path_keeps_the_original_directory_name() {
        // Build metadata survives into the returned path untouched.
        let root = make_root(&["app-1.0.0+hotfix.1"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-1.0.0+hotfix.1"));
    }

    #[test]
    fn equal_precedence_pick_is_deterministic() {
        // Two candidates with the same semver precedence can only exist via
        // build metadata. The ordering breaks the tie lexically, so the pick
        // does not depend on enumeration order.
        let root = make_root(&["app-1.0.0+a", "app-1.0.0+b"]);
        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-1.0.0+b"));
    }

    #[cfg(unix)]
    #[test]
    fn follows_directory_symlinks() {
        let root = make_root(&["app-1.0.0"]);
        let target = TempDir::new().unwrap();
        std::os::unix::fs::symlink(target.path(), root.path().join("app-3.0.0")).unwrap();

        let dir = resolve_app_dir(root.path()).unwrap();
        assert_eq!(dir, root.path().join("app-3.0.0"));
    }

    #[test]
    fn installed_versions_sorted_newest_first() {
        let root = make_root(&["app-1.0.0", "app-2.1.0", "app-0.9.0", "packages"]);
        let versions = installed_versions(root.path()).unwrap();
        let tags: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(tags, vec!["2.1.0", "1.0.0", "0.9.0"]);
    }

    #[test]
    fn installed_versions_empty_root_is_ok() {
        let root = make_root(&["packages"]);
        let versions = installed_versions(root.path()).unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn installed_versions_unreadable_root_fails() {
        let root = make_root(&[]);
        let result = installed_versions(&root.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn versioned_dir_name_predicate() {
        assert!(is_versioned_dir_name("app-1.0.0"));
        assert!(is_versioned_dir_name("app-anything"));
        assert!(!is_versioned_dir_name("application-1.0.0"));
        assert!(!is_versioned_dir_name("App-1.0.0"));
        assert!(!is_versioned_dir_name("packages"));
    }
}
