// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;
use crate::normalize::normalize;
use crate::settings::{NetworkEntry, PortEntry};

fn forwards(settings: Settings) -> Vec<PortForward> {
    plan_port_forwards(&normalize(settings))
        .into_iter()
        .map(|directive| match directive {
            Directive::ForwardedPort(forward) => forward,
            other => panic!("expected a forwarded port, got {other:?}"),
        })
        .collect()
}

fn user_port(guest: u16, host: u16) -> PortEntry {
    PortEntry {
        guest: Some(guest),
        host: Some(host),
        ..Default::default()
    }
}

#[rstest]
fn test_primary_network_uses_default_ip() {
    let settings = normalize(Settings::default());
    assert_eq!(
        plan_primary_network(&settings),
        Directive::Network(NetworkDefinition {
            kind: Some("private_network".to_string()),
            ip: Some("192.168.15.10".to_string()),
            bridge: None,
        })
    );
}

#[rstest]
fn test_additional_networks_pass_through() {
    let settings = normalize(Settings {
        networks: vec![
            NetworkEntry {
                kind: Some("public_network".to_string()),
                ip: Some("192.168.1.50".to_string()),
                bridge: Some("en0: Wi-Fi".to_string()),
            },
            NetworkEntry {
                kind: Some("private_network".to_string()),
                ip: Some("10.0.0.5".to_string()),
                bridge: None,
            },
        ],
        ..Default::default()
    });

    let networks = plan_additional_networks(&settings);
    assert_eq!(networks.len(), 2);
    let Directive::Network(first) = &networks[0] else {
        panic!("expected a network directive");
    };
    assert_eq!(first.kind.as_deref(), Some("public_network"));
    assert_eq!(first.bridge.as_deref(), Some("en0: Wi-Fi"));
}

#[rstest]
fn test_all_defaults_without_user_ports() {
    let forwards = forwards(Settings::default());
    let pairs: Vec<(Option<u16>, Option<u16>)> =
        forwards.iter().map(|f| (f.guest, f.host)).collect();

    assert_eq!(
        pairs,
        DEFAULT_PORTS
            .iter()
            .map(|&(g, h)| (Some(g), Some(h)))
            .collect::<Vec<_>>()
    );
    assert!(forwards.iter().all(|f| f.protocol == "tcp" && f.auto_correct));
}

#[rstest]
fn test_user_port_overrides_default() {
    let forwards = forwards(Settings {
        ports: vec![user_port(80, 9000)],
        ..Default::default()
    });

    assert!(forwards.contains(&PortForward::tcp(80, 9000)));
    assert!(!forwards.contains(&PortForward::tcp(80, 8000)));
    for (guest, host) in [(443, 44300), (3306, 33060), (5432, 54320), (8025, 8025), (27017, 27017)] {
        assert!(forwards.contains(&PortForward::tcp(guest, host)));
    }
    // user mappings come after the defaults
    assert_eq!(forwards.last(), Some(&PortForward::tcp(80, 9000)));
}

#[rstest]
fn test_aliased_user_port_overrides_default() {
    let forwards = forwards(Settings {
        ports: vec![PortEntry {
            to: Some(443),
            send: Some(8443),
            ..Default::default()
        }],
        ..Default::default()
    });

    assert!(forwards.contains(&PortForward::tcp(443, 8443)));
    assert!(!forwards.contains(&PortForward::tcp(443, 44300)));
}

#[rstest]
#[case(Some(false), 1)]
#[case(Some(true), 6)]
#[case(None, 6)]
fn test_default_ports_flag(#[case] default_ports: Option<bool>, #[case] expected: usize) {
    let forwards = forwards(Settings {
        ports: vec![user_port(80, 9000)],
        default_ports,
        ..Default::default()
    });

    assert_eq!(forwards.len(), expected);
    assert!(!forwards.contains(&PortForward::tcp(80, 8000)));
}

#[rstest]
fn test_disabled_defaults_without_user_ports() {
    let forwards = forwards(Settings {
        default_ports: Some(false),
        ..Default::default()
    });
    assert!(forwards.is_empty());
}

#[rstest]
fn test_user_protocol_preserved() {
    let forwards = forwards(Settings {
        ports: vec![PortEntry {
            guest: Some(53),
            host: Some(5353),
            protocol: Some("udp".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    });

    let user = forwards.last().unwrap();
    assert_eq!(user.protocol, "udp");
    assert_eq!(user.guest, Some(53));
}
