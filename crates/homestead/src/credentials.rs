// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! SSH key provisioning.

use tracing::debug;

use crate::compile::CompileOptions;
use crate::directive::{Directive, ShellProvision};
use crate::paths::{expand_path, file_name};
use crate::settings::Settings;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./credentials_test.rs"]
mod credentials_test;

/// Appends `$1` to authorized_keys unless an identical line is already there.
const AUTHORIZE_KEY_SCRIPT: &str = "echo $1 | grep -xq \"$1\" /home/vagrant/.ssh/authorized_keys || echo \"\n$1\" | tee -a /home/vagrant/.ssh/authorized_keys";

/// Writes `$1` to `~/.ssh/$2` readable by the owner only.
const PRIVATE_KEY_SCRIPT: &str =
    "echo \"$1\" > /home/vagrant/.ssh/$2 && chmod 600 /home/vagrant/.ssh/$2";

/// Install the `authorize` public key, if one is configured and present on the host.
pub fn plan_authorized_key(
    settings: &Settings,
    options: &CompileOptions,
) -> Result<Option<Directive>> {
    let Some(authorize) = &settings.authorize else {
        return Ok(None);
    };

    let path = expand_path(authorize, &options.base_dir)?;
    if !path.is_file() {
        debug!(path = %path.display(), "authorize key not found, skipping");
        return Ok(None);
    }

    let key = std::fs::read_to_string(&path).map_err(|e| Error::ReadFailed {
        path: path.clone(),
        error: e,
    })?;

    Ok(Some(
        ShellProvision::inline(AUTHORIZE_KEY_SCRIPT)
            .with_args([key])
            .into(),
    ))
}

/// Copy every `keys` entry into the guest SSH directory.
///
/// Fails when `keys` is present without entries or when any listed key is
/// missing, before a single directive is produced.
pub fn plan_private_keys(settings: &Settings, options: &CompileOptions) -> Result<Vec<Directive>> {
    let Some(keys) = &settings.keys else {
        return Ok(Vec::new());
    };

    if keys.is_empty() {
        return Err(Error::NoPrivateKeys);
    }

    let mut resolved = Vec::with_capacity(keys.len());
    for key in keys {
        let path = expand_path(key, &options.base_dir)?;
        if !path.is_file() {
            return Err(Error::PrivateKeyNotFound { path });
        }
        resolved.push((key, path));
    }

    resolved
        .into_iter()
        .map(|(key, path)| {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| Error::ReadFailed { path, error: e })?;
            Ok(ShellProvision::inline(PRIVATE_KEY_SCRIPT)
                .with_args([contents, file_name(key).to_string()])
                .unprivileged()
                .into())
        })
        .collect()
}
