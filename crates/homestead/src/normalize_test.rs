// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;
use crate::settings::{PortEntry, Settings};

fn site(kind: Option<&str>) -> SiteEntry {
    SiteEntry {
        map: "homestead.test".to_string(),
        to: Some("/home/vagrant/code/public".to_string()),
        kind: kind.map(String::from),
        port: None,
        ssl: None,
        params: None,
        schedule: None,
    }
}

#[rstest]
fn test_fills_machine_defaults() {
    let settings = normalize(Settings::default());

    assert_eq!(settings.provider.as_deref(), Some("virtualbox"));
    assert_eq!(settings.name.as_deref(), Some("vagrant-name"));
    assert_eq!(settings.box_name.as_deref(), Some("ubuntu/bionic64"));
    assert_eq!(settings.version.as_deref(), Some(">= 2.0.0"));
    assert_eq!(settings.ip.as_deref(), Some("192.168.15.10"));
    assert_eq!(settings.memory.as_deref(), Some("2048"));
    assert_eq!(settings.cpus.as_deref(), Some("1"));
    assert_eq!(settings.natdnshostresolver.as_deref(), Some("on"));
}

#[rstest]
fn test_explicit_values_win() {
    let raw = Settings::from_yaml(
        r#"
provider: hyperv
ip: "10.1.1.1"
memory: 8192
natdnshostresolver: "off"
"#,
    )
    .unwrap();
    let settings = normalize(raw);

    assert_eq!(settings.provider.as_deref(), Some("hyperv"));
    assert_eq!(settings.ip.as_deref(), Some("10.1.1.1"));
    assert_eq!(settings.memory.as_deref(), Some("8192"));
    assert_eq!(settings.natdnshostresolver.as_deref(), Some("off"));
    // untouched keys still get defaults
    assert_eq!(settings.cpus.as_deref(), Some("1"));
}

#[rstest]
fn test_custom_defaults() {
    let defaults = Defaults {
        provider: "parallels".to_string(),
        ..Defaults::default()
    };
    let settings = normalize_with(Settings::default(), &defaults);
    assert_eq!(settings.provider.as_deref(), Some("parallels"));
}

#[rstest]
fn test_port_aliases() {
    let raw = Settings {
        ports: vec![
            PortEntry {
                to: Some(5000),
                send: Some(50000),
                ..Default::default()
            },
            PortEntry {
                guest: Some(80),
                host: Some(9000),
                to: Some(81),
                protocol: Some("udp".to_string()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    let settings = normalize(raw);

    assert_eq!(settings.ports[0].guest, Some(5000));
    assert_eq!(settings.ports[0].host, Some(50000));
    assert_eq!(settings.ports[0].protocol.as_deref(), Some("tcp"));
    // explicit guest is not overwritten by the alias
    assert_eq!(settings.ports[1].guest, Some(80));
    assert_eq!(settings.ports[1].protocol.as_deref(), Some("udp"));
}

#[rstest]
fn test_port_without_guest_passes_through() {
    let raw = Settings {
        ports: vec![PortEntry {
            host: Some(1234),
            ..Default::default()
        }],
        ..Default::default()
    };
    let settings = normalize(raw);
    assert_eq!(settings.ports[0].guest, None);
    assert_eq!(settings.ports[0].host, Some(1234));
}

#[rstest]
#[case(None, "apache")]
#[case(Some("nginx"), "nginx")]
#[case(Some("symfony"), "symfony2")]
#[case(Some("symfony2"), "symfony2")]
fn test_site_type(#[case] kind: Option<&str>, #[case] expected: &str) {
    let settings = normalize(Settings {
        sites: vec![site(kind)],
        ..Default::default()
    });
    assert_eq!(settings.sites[0].kind.as_deref(), Some(expected));
}

#[rstest]
fn test_site_port_defaults() {
    let mut explicit = site(None);
    explicit.port = Some("8080".to_string());
    let settings = normalize(Settings {
        sites: vec![site(None), explicit],
        ..Default::default()
    });

    assert_eq!(settings.sites[0].port.as_deref(), Some("80"));
    assert_eq!(settings.sites[0].ssl.as_deref(), Some("443"));
    assert_eq!(settings.sites[1].port.as_deref(), Some("8080"));
    assert_eq!(settings.sites[1].ssl.as_deref(), Some("443"));
}

#[rstest]
fn test_normalize_is_idempotent() {
    let raw = Settings::from_yaml(
        r#"
name: box-one
ports:
  - to: 5000
    send: 50000
sites:
  - map: a.test
    to: /srv/a
    type: symfony
    schedule: false
folders:
  - map: ~/code
    to: /home/vagrant/code
    type: nfs
keys: []
"#,
    )
    .unwrap();

    let once = normalize(raw);
    let twice = normalize(once.clone());

    assert_eq!(once, twice);
    assert_eq!(once.to_yaml().unwrap(), twice.to_yaml().unwrap());
}

#[rstest]
fn test_canonical_site_type() {
    assert_eq!(canonical_site_type("symfony"), "symfony2");
    assert_eq!(canonical_site_type("laravel"), "laravel");
}
