// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;
use crate::directive::ScriptSource;

fn options(tmp: &TempDir) -> CompileOptions {
    CompileOptions::new(tmp.path(), tmp.path().join("scripts"))
}

fn shell(directive: &Directive) -> &ShellProvision {
    match directive {
        Directive::Shell(shell) => shell,
        other => panic!("expected a shell directive, got {other:?}"),
    }
}

#[rstest]
fn test_authorize_reads_key_contents() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("id_rsa.pub"), "ssh-rsa AAAA user@host\n").unwrap();
    let settings = Settings {
        authorize: Some("id_rsa.pub".to_string()),
        ..Default::default()
    };

    let directive = plan_authorized_key(&settings, &options(&tmp))
        .unwrap()
        .expect("Should plan authorized key");
    let shell = shell(&directive);

    assert!(shell.privileged);
    assert_eq!(shell.args, vec!["ssh-rsa AAAA user@host\n"]);
    let ScriptSource::Inline(body) = &shell.source else {
        panic!("expected an inline script");
    };
    assert!(body.contains("grep -xq"));
    assert!(body.contains("/home/vagrant/.ssh/authorized_keys"));
}

#[rstest]
fn test_authorize_missing_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let settings = Settings {
        authorize: Some("missing.pub".to_string()),
        ..Default::default()
    };
    assert!(plan_authorized_key(&settings, &options(&tmp)).unwrap().is_none());
}

#[rstest]
fn test_no_authorize() {
    let tmp = TempDir::new().unwrap();
    assert!(
        plan_authorized_key(&Settings::default(), &options(&tmp))
            .unwrap()
            .is_none()
    );
}

#[rstest]
fn test_private_keys_copied_unprivileged() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("keys")).unwrap();
    std::fs::write(tmp.path().join("keys/id_rsa"), "PRIVATE-ONE").unwrap();
    std::fs::write(tmp.path().join("keys/id_ed25519"), "PRIVATE-TWO").unwrap();
    let settings = Settings {
        keys: Some(vec![
            "keys/id_rsa".to_string(),
            "keys/id_ed25519".to_string(),
        ]),
        ..Default::default()
    };

    let directives = plan_private_keys(&settings, &options(&tmp)).unwrap();
    assert_eq!(directives.len(), 2);

    let first = shell(&directives[0]);
    assert!(!first.privileged);
    assert_eq!(first.args, vec!["PRIVATE-ONE", "id_rsa"]);
    let second = shell(&directives[1]);
    assert_eq!(second.args, vec!["PRIVATE-TWO", "id_ed25519"]);
    let ScriptSource::Inline(body) = &second.source else {
        panic!("expected an inline script");
    };
    assert!(body.contains("chmod 600"));
}

#[rstest]
fn test_keys_absent() {
    let tmp = TempDir::new().unwrap();
    let directives = plan_private_keys(&Settings::default(), &options(&tmp)).unwrap();
    assert!(directives.is_empty());
}

#[rstest]
fn test_keys_empty_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let settings = Settings {
        keys: Some(Vec::new()),
        ..Default::default()
    };
    let result = plan_private_keys(&settings, &options(&tmp));
    assert!(matches!(result, Err(Error::NoPrivateKeys)));
}

#[rstest]
fn test_missing_key_is_fatal_even_after_valid_ones() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("id_rsa"), "PRIVATE").unwrap();
    let settings = Settings {
        keys: Some(vec!["id_rsa".to_string(), "id_missing".to_string()]),
        ..Default::default()
    };

    match plan_private_keys(&settings, &options(&tmp)) {
        Err(Error::PrivateKeyNotFound { path }) => {
            assert_eq!(path, tmp.path().join("id_missing"));
        }
        other => panic!("Expected PrivateKeyNotFound, got: {:?}", other),
    }
}
