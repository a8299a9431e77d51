// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Settings file parsing and data types for Homestead.yaml / Homestead.json.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "./settings_test.rs"]
mod settings_test;

/// Additional network attached to the machine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NetworkEntry {
    /// Network kind understood by the orchestrator (`private_network`, `public_network`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
}

/// A user supplied port mapping.
///
/// `to` and `send` are legacy spellings of `guest` and `host`; normalization
/// copies them over when the canonical field is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PortEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// A single file copied from the host into the guest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CopyEntry {
    pub from: String,
    pub to: String,
}

/// A shared folder between host and guest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FolderEntry {
    /// Host path (relative, absolute, or `~/`).
    pub map: String,

    /// Guest path.
    pub to: String,

    /// Synced folder type (`nfs`, `smb`, `rsync`, ...). Unset means the provider default.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Extra options handed through to the orchestrator, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, serde_yaml::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_options: Option<Vec<String>>,
}

/// A `[key]=value` pair passed to a site's server script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteParam {
    pub key: String,
    #[serde(deserialize_with = "deserialize_scalar")]
    pub value: String,
}

/// A web site served from the guest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteEntry {
    /// Host name the site answers to.
    pub map: String,

    /// Document root inside the guest. Passed to the scripts unchecked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Server flavor, selects `servers/serve-<type>.sh`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<String>,

    #[serde(
        alias = "ssl_port",
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub ssl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<SiteParam>>,

    /// Truthiness of the `schedule` key, `None` when the key is absent.
    /// Only `false` and `null` are falsy.
    #[serde(
        default,
        deserialize_with = "deserialize_truthy",
        skip_serializing_if = "Option::is_none"
    )]
    pub schedule: Option<bool>,
}

/// The whole settings document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub box_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Private network address of the machine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkEntry>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub memory: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub cpus: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_optional_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub natdnshostresolver: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gui: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortEntry>,

    /// `Some(false)` disables the built-in forwarding table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ports: Option<bool>,

    /// Public key installed into the guest's authorized_keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorize: Option<String>,

    /// Private keys copied into the guest.
    /// A `keys:` entry without a value is kept as `Some(vec![])`.
    #[serde(
        default,
        deserialize_with = "deserialize_present_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub keys: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub copy: Vec<CopyEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<FolderEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<SiteEntry>,

    /// Primary web service to install (`apache`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Database management systems to install, by scripts directory name.
    #[serde(rename = "DBMS", default, skip_serializing_if = "Vec::is_empty")]
    pub dbms: Vec<String>,

    /// Path to the file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from a YAML string.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();
        serde_yaml::from_str(&yaml).map_err(|e| crate::Error::InvalidYaml {
            error: e,
            yaml_content: yaml,
        })
    }

    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::InvalidJson { error: e })
    }

    /// Load settings from a file path, choosing the format by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut settings = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(content)?
        };
        settings.source_path = Some(path.to_path_buf());
        Ok(settings)
    }

    /// Directory relative host paths are resolved against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.source_path.as_deref().and_then(Path::parent)
    }

    /// Serialize back into YAML.
    pub fn to_yaml(&self) -> crate::Result<String> {
        serde_yaml::to_string(self).map_err(|e| crate::Error::InvalidYaml {
            error: e,
            yaml_content: String::new(),
        })
    }
}

/// Scalars users write either quoted or bare (`memory: 2048`, `port: "8080"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            // VirtualBox style toggles
            Scalar::Bool(true) => "on".to_string(),
            Scalar::Bool(false) => "off".to_string(),
        }
    }
}

fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

/// Only called when the key is present, so a null value still counts as present.
fn deserialize_present_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(
        Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default(),
    ))
}

/// Only called when the key is present: `null` and `false` are falsy, any other value is truthy.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(Some(!matches!(
        value,
        None | Some(serde_yaml::Value::Null) | Some(serde_yaml::Value::Bool(false))
    )))
}
