// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Primary web service and database installation.

use tracing::debug;

use crate::compile::CompileOptions;
use crate::directive::{Directive, ShellProvision};
use crate::settings::Settings;

#[cfg(test)]
#[path = "./services_test.rs"]
mod services_test;

/// Recognized primary web services and the server whose sites they replace.
const PRIMARY_SERVICES: &[(&str, &str)] = &[("apache", "nginx")];

/// Switch the primary web server: clear the other server's sites, then install.
pub fn plan_primary_service(settings: &Settings, options: &CompileOptions) -> Vec<Directive> {
    let Some(service) = settings.service.as_deref() else {
        return Vec::new();
    };

    let Some((service, replaced)) = PRIMARY_SERVICES.iter().find(|(name, _)| *name == service)
    else {
        debug!(service, "unrecognized primary service, skipping");
        return Vec::new();
    };

    vec![
        ShellProvision::script(options.scripts.clear_site_script(replaced)).into(),
        ShellProvision::script(options.scripts.install_script(service)).into(),
    ]
}

/// Install each requested database system that ships an install script.
pub fn plan_database_installs(settings: &Settings, options: &CompileOptions) -> Vec<Directive> {
    settings
        .dbms
        .iter()
        .filter_map(|system| {
            let script = options.scripts.install_script(system);
            if script.is_file() {
                Some(ShellProvision::script(script).into())
            } else {
                debug!(system = %system, "no install script, skipping");
                None
            }
        })
        .collect()
}
