// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Directives handed to the orchestrator.
//!
//! A compiled plan is an ordered list of [`Directive`] values. The compiler
//! only constructs them; interpreting them (booting the machine, running the
//! scripts, mounting the folders) is up to the orchestrator.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

#[cfg(test)]
#[path = "./directive_test.rs"]
mod directive_test;

/// One unit of orchestrator facing work.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    Ssh(SshSession),
    Machine(MachineDefinition),
    Provider(ProviderCustomization),
    Network(NetworkDefinition),
    ForwardedPort(PortForward),
    Shell(ShellProvision),
    File(FileProvision),
    SyncedFolder(SyncedFolder),
    BindFolder(BindFolder),
}

/// SSH session behavior for every command the orchestrator runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SshSession {
    pub shell: String,
    pub forward_agent: bool,
}

/// Identity and base image of the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineDefinition {
    pub name: String,
    #[serde(rename = "box")]
    pub box_name: String,
    pub version: String,
}

/// Provider specific tuning (`modifyvm` flags for VirtualBox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCustomization {
    pub provider: String,
    pub name: String,
    pub customizations: Vec<(String, String)>,
    pub gui: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDefinition {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
}

/// A forwarded port. `auto_correct` lets the orchestrator move the host
/// port when it collides with one already in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortForward {
    pub guest: Option<u16>,
    pub host: Option<u16>,
    pub protocol: String,
    pub auto_correct: bool,
}

impl PortForward {
    pub fn tcp(guest: u16, host: u16) -> Self {
        Self {
            guest: Some(guest),
            host: Some(host),
            protocol: crate::normalize::DEFAULT_PROTOCOL.to_string(),
            auto_correct: true,
        }
    }
}

/// Where the body of a shell provisioner comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptSource {
    /// Script file on the host, uploaded and executed by the orchestrator.
    Path(PathBuf),
    /// Script body executed as-is.
    Inline(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellProvision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub source: ScriptSource,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    pub privileged: bool,
}

impl ShellProvision {
    /// Run the script file at `path`.
    pub fn script(path: impl Into<PathBuf>) -> Self {
        Self::new(ScriptSource::Path(path.into()))
    }

    /// Run an inline script body.
    pub fn inline(body: impl Into<String>) -> Self {
        Self::new(ScriptSource::Inline(body.into()))
    }

    fn new(source: ScriptSource) -> Self {
        Self {
            name: None,
            source,
            args: Vec::new(),
            privileged: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Run as the login user instead of root.
    pub fn unprivileged(mut self) -> Self {
        self.privileged = false;
        self
    }
}

impl From<ShellProvision> for Directive {
    fn from(shell: ShellProvision) -> Self {
        Directive::Shell(shell)
    }
}

/// Upload of a single host file into the guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileProvision {
    pub source: PathBuf,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncedFolder {
    pub map: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub options: IndexMap<String, serde_yaml::Value>,
}

/// Re-mount of a synced folder through bindfs to fix guest permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindFolder {
    pub source: String,
    pub target: String,
}
