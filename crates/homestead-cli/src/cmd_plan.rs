// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `homestead plan` command.

use clap::{Args, ValueEnum};
use colored::Colorize;
use homestead::{Directive, Plan, ScriptSource};
use miette::{IntoDiagnostic, Result};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Yaml,
    Json,
}

/// Compile settings and print the plan
#[derive(Debug, Args)]
pub struct CmdPlan {
    #[clap(flatten)]
    compile: crate::CompileFlags,

    /// Output format
    #[clap(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

impl CmdPlan {
    pub fn run(&mut self) -> Result<i32> {
        let compiled = self.compile.compile()?;

        match self.format {
            Format::Table => {
                println!(
                    "{} {}",
                    "Settings:".bold(),
                    compiled.settings_path.display().to_string().cyan()
                );
                println!();
                show_table(&compiled.plan);
            }
            Format::Yaml => {
                // through serde_json so enum sources render as maps, not YAML tags
                let value = serde_json::to_value(&compiled.plan).into_diagnostic()?;
                print!("{}", serde_yaml::to_string(&value).into_diagnostic()?);
            }
            Format::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&compiled.plan).into_diagnostic()?
                );
            }
        }

        Ok(0)
    }
}

fn show_table(plan: &Plan) {
    println!("{}", "Run Context:".bold());
    for (key, value) in plan.context.env_vars() {
        println!("  {} = {}", key.cyan(), value.green());
    }
    println!();

    println!("{}", "Directives:".bold());
    println!();
    if plan.is_empty() {
        println!("  {}", "(no directives)".dimmed());
    }
    for (i, directive) in plan.directives.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, describe(directive));
    }

    println!();
    println!("Total: {} directive(s)", plan.len());
}

fn describe(directive: &Directive) -> String {
    match directive {
        Directive::Ssh(ssh) => format!(
            "{} shell={:?} forward_agent={}",
            "ssh".yellow(),
            ssh.shell,
            ssh.forward_agent
        ),
        Directive::Machine(machine) => format!(
            "{} {} ({} {})",
            "machine".yellow(),
            machine.name.green(),
            machine.box_name,
            machine.version
        ),
        Directive::Provider(provider) => {
            let flags = provider
                .customizations
                .iter()
                .map(|(flag, value)| format!("{flag} {value}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "{} {} {}{}",
                "provider".yellow(),
                provider.provider.green(),
                flags.dimmed(),
                if provider.gui { " [gui]" } else { "" }
            )
        }
        Directive::Network(network) => format!(
            "{} {} {}{}",
            "network".yellow(),
            network.kind.as_deref().unwrap_or("-").green(),
            network.ip.as_deref().unwrap_or("-"),
            network
                .bridge
                .as_ref()
                .map(|b| format!(" bridge={b}"))
                .unwrap_or_default()
        ),
        Directive::ForwardedPort(port) => format!(
            "{} {} -> {} ({})",
            "port".yellow(),
            port_label(port.host),
            port_label(port.guest),
            port.protocol
        ),
        Directive::Shell(shell) => {
            let source = match &shell.source {
                ScriptSource::Path(path) => path.display().to_string(),
                ScriptSource::Inline(body) => format!("inline: {body:?}"),
            };
            let name = shell
                .name
                .as_ref()
                .map(|n| format!("{} ", n.green()))
                .unwrap_or_default();
            format!(
                "{} {}{}{}{}",
                "shell".yellow(),
                name,
                source.cyan(),
                if shell.args.is_empty() {
                    String::new()
                } else {
                    format!(" {:?}", shell.args)
                },
                if shell.privileged { "" } else { " [unprivileged]" }
            )
        }
        Directive::File(file) => format!(
            "{} {} -> {}",
            "file".yellow(),
            file.source.display().to_string().cyan(),
            file.destination
        ),
        Directive::SyncedFolder(folder) => format!(
            "{} {} -> {}{}",
            "folder".yellow(),
            folder.map.cyan(),
            folder.to,
            folder
                .kind
                .as_ref()
                .map(|k| format!(" [{k}]"))
                .unwrap_or_default()
        ),
        Directive::BindFolder(bind) => format!(
            "{} {} -> {}",
            "bindfs".yellow(),
            bind.source.cyan(),
            bind.target
        ),
    }
}

fn port_label(port: Option<u16>) -> String {
    port.map(|p| p.to_string()).unwrap_or_else(|| "?".to_string())
}
