// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Machine identity, SSH session and provider tuning.

use crate::directive::{Directive, MachineDefinition, ProviderCustomization, SshSession};
use crate::settings::Settings;

#[cfg(test)]
#[path = "./machine_test.rs"]
mod machine_test;

/// Login shell that sources the profile, avoiding TTY errors in provisioners.
pub const SSH_SHELL: &str = "bash -c 'BASH_ENV=/etc/profile exec bash'";

/// Provider the customizations are written for.
pub const VIRTUALBOX: &str = "virtualbox";

pub fn plan_ssh_session() -> Directive {
    Directive::Ssh(SshSession {
        shell: SSH_SHELL.to_string(),
        forward_agent: true,
    })
}

/// Machine name, box and box version. Expects normalized settings.
pub fn plan_machine(settings: &Settings) -> Directive {
    Directive::Machine(MachineDefinition {
        name: settings.name.clone().unwrap_or_default(),
        box_name: settings.box_name.clone().unwrap_or_default(),
        version: settings.version.clone().unwrap_or_default(),
    })
}

/// VirtualBox `modifyvm` tuning. The orchestrator ignores it for other providers.
pub fn plan_provider(settings: &Settings) -> Directive {
    let flag = |name: &str, value: Option<&str>| {
        (name.to_string(), value.unwrap_or_default().to_string())
    };

    Directive::Provider(ProviderCustomization {
        provider: VIRTUALBOX.to_string(),
        name: settings.name.clone().unwrap_or_default(),
        customizations: vec![
            flag("--memory", settings.memory.as_deref()),
            flag("--cpus", settings.cpus.as_deref()),
            flag("--natdnsproxy1", Some("on")),
            flag(
                "--natdnshostresolver1",
                settings.natdnshostresolver.as_deref(),
            ),
            flag("--ostype", Some("Ubuntu_64")),
        ],
        gui: settings.gui.unwrap_or(false),
    })
}
