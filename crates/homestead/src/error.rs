// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for homestead operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with homestead Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading settings or compiling a plan.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// No settings file found in directory tree
    #[error("No Homestead.yaml or Homestead.json found in {0:?} or any parent directory")]
    #[diagnostic(
        code(homestead::not_found_in_tree),
        help("Create a Homestead.yaml file with 'homestead init' or specify a path with -f")
    )]
    NotFoundInTree(PathBuf),

    /// Settings file not found at specified path
    #[error("Settings file not found at {0:?}")]
    #[diagnostic(code(homestead::not_found_at_path))]
    NotFoundAtPath(PathBuf),

    /// Invalid YAML in settings file
    #[error("Invalid Homestead.yaml file: {error}")]
    #[diagnostic(
        code(homestead::invalid_yaml),
        help("Check YAML syntax and the types of the values in your settings")
    )]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Invalid JSON in settings file
    #[error("Invalid Homestead.json file: {error}")]
    #[diagnostic(code(homestead::invalid_json))]
    InvalidJson {
        #[source]
        error: serde_json::Error,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(homestead::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// `keys` was given without any entries
    #[error("Check your Homestead.yaml file, you have no private key(s) specified.")]
    #[diagnostic(
        code(homestead::no_private_keys),
        help("List at least one private key path under 'keys', or remove the 'keys' entry")
    )]
    NoPrivateKeys,

    /// A listed private key does not exist on the host
    #[error("Check your Homestead.yaml file, the path to your private key does not exist: {path:?}")]
    #[diagnostic(code(homestead::private_key_not_found))]
    PrivateKeyNotFound { path: PathBuf },

    /// Provisioning scripts directory is missing
    #[error("Provisioning scripts directory not found: {0:?}")]
    #[diagnostic(
        code(homestead::scripts_root_not_found),
        help("Point --scripts-dir (or HOMESTEAD_SCRIPTS_DIR) at the directory holding serve-*.sh")
    )]
    ScriptsRootNotFound(PathBuf),

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(homestead::validation_failed))]
    ValidationFailed(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(homestead::io_error))]
    Io(#[from] std::io::Error),
}
