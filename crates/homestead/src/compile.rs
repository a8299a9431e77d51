// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Compilation of settings into an ordered plan of directives.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::directive::Directive;
use crate::normalize::normalize;
use crate::scripts::{SCRIPTS_DIRNAME, ScriptsRoot};
use crate::settings::Settings;
use crate::{credentials, machine, network, services, sites, sync};

#[cfg(test)]
#[path = "./compile_test.rs"]
mod compile_test;

/// Environment variable the orchestrator reads its default provider from.
pub const DEFAULT_PROVIDER_ENV: &str = "VAGRANT_DEFAULT_PROVIDER";

/// Options for a single compilation.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Directory relative host paths are resolved against.
    pub base_dir: PathBuf,

    /// Location of the provisioning scripts.
    pub scripts: ScriptsRoot,

    /// Re-bind synced folders through bindfs (requires the orchestrator plugin).
    pub bindfs: bool,
}

impl CompileOptions {
    pub fn new(base_dir: impl Into<PathBuf>, scripts_root: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            scripts: ScriptsRoot::new(scripts_root),
            bindfs: false,
        }
    }

    /// Resolve against the settings file's directory, with scripts in `<dir>/scripts`.
    ///
    /// Falls back to the current directory for settings not loaded from disk.
    pub fn for_settings(settings: &Settings) -> Self {
        let base_dir = match settings.base_dir() {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().unwrap_or_default(),
        };
        let scripts = base_dir.join(SCRIPTS_DIRNAME);
        Self::new(base_dir, scripts)
    }
}

/// Values the orchestrator reads for the whole run, outside of the directive list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunContext {
    pub default_provider: String,
}

impl RunContext {
    /// The context as environment variables for the orchestrator process.
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        vec![(DEFAULT_PROVIDER_ENV, self.default_provider.clone())]
    }
}

/// A compiled plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub context: RunContext,
    pub directives: Vec<Directive>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

/// Compile settings into a plan.
///
/// The settings are normalized first; each planner then appends its
/// directives in a fixed order. Any fatal condition aborts the whole
/// compilation and no partial plan is returned.
pub fn compile(settings: Settings, options: &CompileOptions) -> crate::Result<Plan> {
    let settings = normalize(settings);
    let mut directives = Vec::new();

    directives.push(machine::plan_ssh_session());
    directives.push(machine::plan_machine(&settings));
    directives.push(machine::plan_provider(&settings));

    directives.push(network::plan_primary_network(&settings));
    directives.extend(network::plan_additional_networks(&settings));
    directives.extend(network::plan_port_forwards(&settings));

    directives.extend(credentials::plan_authorized_key(&settings, options)?);
    directives.extend(credentials::plan_private_keys(&settings, options)?);

    directives.extend(sync::plan_file_copies(&settings, options)?);
    directives.extend(sync::plan_synced_folders(&settings, options)?);

    directives.extend(sites::plan_sites(&settings, options));

    directives.extend(services::plan_primary_service(&settings, options));
    directives.extend(services::plan_database_installs(&settings, options));

    info!(
        directives = directives.len(),
        sites = settings.sites.len(),
        "compiled plan"
    );

    Ok(Plan {
        context: RunContext {
            default_provider: settings.provider.unwrap_or_default(),
        },
        directives,
    })
}
