// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Network definitions and port forwarding.

use tracing::debug;

use crate::directive::{Directive, NetworkDefinition, PortForward};
use crate::normalize::DEFAULT_PROTOCOL;
use crate::settings::Settings;

#[cfg(test)]
#[path = "./network_test.rs"]
mod network_test;

/// Network kind of the machine's primary interface.
pub const PRIVATE_NETWORK: &str = "private_network";

/// Guest to host forwards applied unless overridden or disabled.
pub const DEFAULT_PORTS: &[(u16, u16)] = &[
    (80, 8000),
    (443, 44300),
    (3306, 33060),
    (5432, 54320),
    (8025, 8025),
    (27017, 27017),
];

/// Private network carrying the machine's (possibly defaulted) IP.
pub fn plan_primary_network(settings: &Settings) -> Directive {
    Directive::Network(NetworkDefinition {
        kind: Some(PRIVATE_NETWORK.to_string()),
        ip: settings.ip.clone(),
        bridge: None,
    })
}

/// One network per `networks` entry, passed through unchanged.
pub fn plan_additional_networks(settings: &Settings) -> Vec<Directive> {
    settings
        .networks
        .iter()
        .map(|network| {
            Directive::Network(NetworkDefinition {
                kind: network.kind.clone(),
                ip: network.ip.clone(),
                bridge: network.bridge.clone(),
            })
        })
        .collect()
}

/// Default forwards first, then the user's mappings in declaration order.
///
/// A default is dropped when any user mapping targets the same guest port,
/// and all defaults are dropped with `default_ports: false`. Host side
/// collisions are left to the orchestrator through `auto_correct`.
pub fn plan_port_forwards(settings: &Settings) -> Vec<Directive> {
    let mut forwards = Vec::new();

    if settings.default_ports != Some(false) {
        for &(guest, host) in DEFAULT_PORTS {
            let overridden = settings.ports.iter().any(|port| port.guest == Some(guest));
            if overridden {
                debug!(guest, "default port forward overridden");
                continue;
            }
            forwards.push(Directive::ForwardedPort(PortForward::tcp(guest, host)));
        }
    } else {
        debug!("default port forwarding disabled");
    }

    forwards.extend(settings.ports.iter().map(|port| {
        Directive::ForwardedPort(PortForward {
            guest: port.guest,
            host: port.host,
            protocol: port
                .protocol
                .clone()
                .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            auto_correct: true,
        })
    }));

    forwards
}
