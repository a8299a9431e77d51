// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Default filling for settings documents.
//!
//! Normalization is a first-set-wins merge: every value the user wrote is
//! kept, and only unset values are taken from [`Defaults`]. Running it over
//! already normalized settings changes nothing.

use crate::settings::{PortEntry, Settings, SiteEntry};

#[cfg(test)]
#[path = "./normalize_test.rs"]
mod normalize_test;

/// Protocol used for port mappings that do not name one.
pub const DEFAULT_PROTOCOL: &str = "tcp";

/// Server flavor for sites that do not name one.
pub const DEFAULT_SITE_TYPE: &str = "apache";

pub const DEFAULT_SITE_PORT: &str = "80";
pub const DEFAULT_SITE_SSL_PORT: &str = "443";

/// Legacy site types and the flavor they stand for.
const SITE_TYPE_ALIASES: &[(&str, &str)] = &[("symfony", "symfony2")];

/// Machine level defaults applied by [`normalize_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub provider: String,
    pub name: String,
    pub box_name: String,
    pub version: String,
    pub ip: String,
    pub memory: String,
    pub cpus: String,
    pub natdnshostresolver: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            provider: "virtualbox".to_string(),
            name: "vagrant-name".to_string(),
            box_name: "ubuntu/bionic64".to_string(),
            version: ">= 2.0.0".to_string(),
            ip: "192.168.15.10".to_string(),
            memory: "2048".to_string(),
            cpus: "1".to_string(),
            natdnshostresolver: "on".to_string(),
        }
    }
}

/// Normalize settings with the built-in [`Defaults`].
pub fn normalize(settings: Settings) -> Settings {
    normalize_with(settings, &Defaults::default())
}

/// Normalize settings, filling unset values from `defaults`.
pub fn normalize_with(settings: Settings, defaults: &Defaults) -> Settings {
    let Settings {
        provider,
        name,
        box_name,
        version,
        ip,
        memory,
        cpus,
        natdnshostresolver,
        ports,
        sites,
        ..
    } = settings;

    Settings {
        provider: provider.or_else(|| Some(defaults.provider.clone())),
        name: name.or_else(|| Some(defaults.name.clone())),
        box_name: box_name.or_else(|| Some(defaults.box_name.clone())),
        version: version.or_else(|| Some(defaults.version.clone())),
        ip: ip.or_else(|| Some(defaults.ip.clone())),
        memory: memory.or_else(|| Some(defaults.memory.clone())),
        cpus: cpus.or_else(|| Some(defaults.cpus.clone())),
        natdnshostresolver: natdnshostresolver
            .or_else(|| Some(defaults.natdnshostresolver.clone())),
        ports: ports.into_iter().map(normalize_port).collect(),
        sites: sites.into_iter().map(normalize_site).collect(),
        ..settings
    }
}

fn normalize_port(port: PortEntry) -> PortEntry {
    PortEntry {
        guest: port.guest.or(port.to),
        host: port.host.or(port.send),
        protocol: port.protocol.or_else(|| Some(DEFAULT_PROTOCOL.to_string())),
        ..port
    }
}

fn normalize_site(site: SiteEntry) -> SiteEntry {
    let kind = canonical_site_type(site.kind.as_deref().unwrap_or(DEFAULT_SITE_TYPE)).to_string();
    SiteEntry {
        kind: Some(kind),
        port: site.port.or_else(|| Some(DEFAULT_SITE_PORT.to_string())),
        ssl: site.ssl.or_else(|| Some(DEFAULT_SITE_SSL_PORT.to_string())),
        ..site
    }
}

/// Resolve a site type alias to the flavor whose script is installed.
pub fn canonical_site_type(kind: &str) -> &str {
    SITE_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == kind)
        .map_or(kind, |(_, canonical)| *canonical)
}
