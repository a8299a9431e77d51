// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_script_layout() {
    let scripts = ScriptsRoot::new("/opt/homestead/scripts");

    assert_eq!(
        scripts.site_script("laravel"),
        PathBuf::from("/opt/homestead/scripts/servers/serve-laravel.sh")
    );
    assert_eq!(
        scripts.cron_schedule(),
        PathBuf::from("/opt/homestead/scripts/cron-schedule.sh")
    );
    assert_eq!(
        scripts.install_script("mysql"),
        PathBuf::from("/opt/homestead/scripts/settings/mysql/install.sh")
    );
    assert_eq!(
        scripts.clear_site_script("nginx"),
        PathBuf::from("/opt/homestead/scripts/settings/nginx/clear-site.sh")
    );
}

#[rstest]
fn test_open_existing() {
    let tmp = TempDir::new().unwrap();
    let scripts = ScriptsRoot::open(tmp.path()).expect("Should open scripts dir");
    assert!(scripts.path().is_dir());
}

#[rstest]
fn test_open_missing() {
    let tmp = TempDir::new().unwrap();
    let result = ScriptsRoot::open(tmp.path().join("scripts"));
    assert!(matches!(result, Err(crate::Error::ScriptsRootNotFound(_))));
}
