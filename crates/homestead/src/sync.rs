// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! File copies and synced folders.

use tracing::warn;

use crate::compile::CompileOptions;
use crate::directive::{BindFolder, Directive, FileProvision, ShellProvision, SyncedFolder};
use crate::paths::{expand_path, file_name};
use crate::settings::{FolderEntry, Settings};
use crate::Result;

#[cfg(test)]
#[path = "./sync_test.rs"]
mod sync_test;

/// Key in a synced folder's options that carries the mount options.
pub const MOUNT_OPTIONS_KEY: &str = "mount_options";

/// Emitted in place of a folder whose host path is missing.
const MISSING_FOLDER_SCRIPT: &str =
    ">&2 echo \"Unable to mount one of your folders. Please check your folders in Homestead.yaml\"";

/// Upload each `copy` entry into the guest directory named by `to`.
pub fn plan_file_copies(settings: &Settings, options: &CompileOptions) -> Result<Vec<Directive>> {
    settings
        .copy
        .iter()
        .map(|copy| {
            let source = expand_path(&copy.from, &options.base_dir)?;
            let dir = copy.to.strip_suffix('/').unwrap_or(&copy.to);
            Ok(Directive::File(FileProvision {
                source,
                destination: format!("{dir}/{}", file_name(&copy.from)),
            }))
        })
        .collect()
}

/// Mount options for a folder: the user's, else the type's defaults.
pub fn mount_options_for(folder: &FolderEntry) -> Vec<String> {
    if let Some(explicit) = &folder.mount_options {
        return explicit.clone();
    }
    let defaults: &[&str] = match folder.kind.as_deref() {
        Some("nfs") => &["actimeo=1", "nolock"],
        Some("smb") => &["vers=3.02", "mfsymlinks"],
        _ => &[],
    };
    defaults.iter().map(|s| s.to_string()).collect()
}

/// Share each folder whose host path exists.
///
/// A `mount_options` entry already in the folder's `options` is kept as is.
/// A folder with a missing host path does not stop compilation; it is
/// replaced by a shell directive that reports the problem on stderr.
pub fn plan_synced_folders(
    settings: &Settings,
    options: &CompileOptions,
) -> Result<Vec<Directive>> {
    let mut directives = Vec::new();

    for folder in &settings.folders {
        let map = expand_path(&folder.map, &options.base_dir)?;
        if !map.exists() {
            warn!(map = %folder.map, "shared folder not found, skipping mount");
            directives.push(ShellProvision::inline(MISSING_FOLDER_SCRIPT).into());
            continue;
        }

        let mut folder_options = folder.options.clone();
        folder_options
            .entry(MOUNT_OPTIONS_KEY.to_string())
            .or_insert_with(|| {
                serde_yaml::Value::Sequence(
                    mount_options_for(folder)
                        .into_iter()
                        .map(serde_yaml::Value::String)
                        .collect(),
                )
            });

        directives.push(Directive::SyncedFolder(SyncedFolder {
            map: folder.map.clone(),
            to: folder.to.clone(),
            kind: folder.kind.clone(),
            options: folder_options,
        }));

        if options.bindfs {
            directives.push(Directive::BindFolder(BindFolder {
                source: folder.to.clone(),
                target: folder.to.clone(),
            }));
        }
    }

    Ok(directives)
}
