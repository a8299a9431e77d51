// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! homestead - settings-to-directive compiler for local development VMs
//!
//! This crate turns a `Homestead.yaml` (or `Homestead.json`) settings
//! document into an ordered list of provisioning directives for a
//! virtualization orchestrator.
//!
//! # Overview
//!
//! Compilation is a single synchronous pass. Settings are normalized first
//! (unset values take defaults, explicit values are never overwritten), then
//! each planner appends its directives in a fixed order: machine and SSH
//! setup, networks and port forwards, SSH keys, file copies and synced
//! folders, sites, and finally service and database installs.
//!
//! # Example
//!
//! ```yaml
//! # Homestead.yaml
//! ip: "192.168.10.10"
//! memory: 2048
//! authorize: ~/.ssh/id_rsa.pub
//! keys:
//!   - ~/.ssh/id_rsa
//! folders:
//!   - map: ~/code
//!     to: /home/vagrant/code
//!     type: nfs
//! sites:
//!   - map: homestead.test
//!     to: /home/vagrant/code/public
//!     schedule: true
//! ports:
//!   - send: 8080
//!     to: 80
//! DBMS:
//!   - mysql
//! ```

pub mod compile;
pub mod credentials;
pub mod directive;
pub mod discovery;
pub mod error;
pub mod machine;
pub mod network;
pub mod normalize;
pub mod paths;
pub mod scripts;
pub mod services;
pub mod settings;
pub mod sites;
pub mod sync;

pub use compile::{CompileOptions, Plan, RunContext, compile};
pub use directive::{Directive, ScriptSource, ShellProvision};
pub use discovery::{DiscoveryOptions, discover_settings, load_settings};
pub use error::{Error, Result};
pub use normalize::{Defaults, normalize};
pub use scripts::ScriptsRoot;
pub use settings::Settings;

/// Well-known filename for YAML settings.
pub const SETTINGS_FILENAME: &str = "Homestead.yaml";

/// Well-known filename for JSON settings.
pub const SETTINGS_JSON_FILENAME: &str = "Homestead.json";

/// Settings filenames in lookup order.
pub const SETTINGS_FILENAMES: &[&str] = &[SETTINGS_FILENAME, SETTINGS_JSON_FILENAME];
