// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Locations of the provisioning scripts referenced by directives.
//!
//! The scripts themselves are external artifacts. This module only knows
//! the directory layout:
//!
//! ```text
//! <root>/cron-schedule.sh
//! <root>/servers/serve-<type>.sh
//! <root>/settings/<system>/install.sh
//! <root>/settings/<system>/clear-site.sh
//! ```

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./scripts_test.rs"]
mod scripts_test;

/// Default name of the scripts directory next to the settings file.
pub const SCRIPTS_DIRNAME: &str = "scripts";

/// Root directory of the provisioning scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptsRoot {
    root: PathBuf,
}

impl ScriptsRoot {
    /// Use `root` as given, without checking that it exists.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open an existing scripts directory.
    pub fn open(root: impl AsRef<Path>) -> crate::Result<Self> {
        let root = root.as_ref();
        let root = dunce::canonicalize(root)
            .map_err(|_| crate::Error::ScriptsRootNotFound(root.to_path_buf()))?;
        if !root.is_dir() {
            return Err(crate::Error::ScriptsRootNotFound(root));
        }
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Per-site server setup script.
    pub fn site_script(&self, site_type: &str) -> PathBuf {
        self.root
            .join("servers")
            .join(format!("serve-{site_type}.sh"))
    }

    pub fn cron_schedule(&self) -> PathBuf {
        self.root.join("cron-schedule.sh")
    }

    /// Installer for a service or database system.
    pub fn install_script(&self, system: &str) -> PathBuf {
        self.settings_script(system, "install.sh")
    }

    /// Script that removes a web server's site configuration.
    pub fn clear_site_script(&self, system: &str) -> PathBuf {
        self.settings_script(system, "clear-site.sh")
    }

    fn settings_script(&self, system: &str, script: &str) -> PathBuf {
        self.root.join("settings").join(system).join(script)
    }
}
