// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Locating the settings file for a project.

use std::path::{Path, PathBuf};

use tracing::debug;

#[cfg(test)]
#[path = "./discovery_test.rs"]
mod discovery_test;

use crate::{SETTINGS_FILENAMES, Settings};

/// Options for discovery behavior.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Only look in the starting directory (from --no-parents).
    pub no_parents: bool,
}

/// Find the settings file for `start_path`.
///
/// A file path is returned as-is. For a directory, `Homestead.yaml` is
/// preferred over `Homestead.json`, and parent directories are searched
/// until one is found.
pub fn discover_settings<P: AsRef<Path>>(
    start_path: P,
    options: &DiscoveryOptions,
) -> crate::Result<PathBuf> {
    let start = resolve_start_path(start_path.as_ref());

    if start.is_file() {
        return Ok(start);
    }
    if !start.is_dir() {
        return Err(crate::Error::NotFoundAtPath(start));
    }

    let mut current = start.clone();
    loop {
        if let Some(found) = settings_in(&current) {
            debug!(path = %found.display(), "discovered settings file");
            return Ok(found);
        }
        if options.no_parents {
            return Err(crate::Error::NotFoundAtPath(start));
        }
        if !current.pop() {
            return Err(crate::Error::NotFoundInTree(start));
        }
    }
}

/// Discover and load settings in one step.
pub fn load_settings<P: AsRef<Path>>(
    start_path: P,
    options: &DiscoveryOptions,
) -> crate::Result<Settings> {
    let path = discover_settings(start_path, options)?;
    Settings::load(path)
}

/// Resolve starting path, preferring $PWD to preserve symlinks.
fn resolve_start_path(start_path: &Path) -> PathBuf {
    if start_path.is_absolute() {
        start_path.to_owned()
    } else {
        match std::env::var("PWD").ok() {
            Some(pwd) => PathBuf::from(pwd).join(start_path),
            None => std::env::current_dir()
                .unwrap_or_default()
                .join(start_path),
        }
    }
}

fn settings_in(dir: &Path) -> Option<PathBuf> {
    SETTINGS_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
