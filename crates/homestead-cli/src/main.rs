// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! homestead - compile Homestead settings into provisioning plans

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use homestead::{CompileOptions, DiscoveryOptions, Plan, ScriptsRoot, Settings};
use miette::Result;

mod cmd_env;
mod cmd_init;
mod cmd_plan;

use cmd_env::CmdEnv;
use cmd_init::CmdInit;
use cmd_plan::CmdPlan;

#[derive(Parser)]
#[clap(
    name = "homestead",
    about = "Compile Homestead settings into provisioning plans",
    version,
    long_about = "Turn a Homestead.yaml into the ordered directives a VM orchestrator runs"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long, global = true)]
    quiet: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct CompileFlags {
    /// Settings file, or directory to start discovery from
    #[clap(short = 'f', long, default_value = ".")]
    pub file: PathBuf,

    /// Only look for settings in the starting directory
    #[clap(long = "no-parents")]
    pub no_parents: bool,

    /// Provisioning scripts directory (default: <settings dir>/scripts)
    #[clap(long = "scripts-dir", env = "HOMESTEAD_SCRIPTS_DIR")]
    pub scripts_dir: Option<PathBuf>,

    /// Re-bind synced folders through bindfs
    #[clap(long, env = "HOMESTEAD_BINDFS")]
    pub bindfs: bool,
}

/// Result of discovering, loading and compiling settings.
pub struct Compiled {
    pub settings_path: PathBuf,
    pub plan: Plan,
}

impl CompileFlags {
    pub fn compile(&self) -> Result<Compiled> {
        let discovery = DiscoveryOptions {
            no_parents: self.no_parents,
        };
        let settings_path = homestead::discover_settings(&self.file, &discovery)?;
        let settings = Settings::load(&settings_path)?;

        let mut options = CompileOptions::for_settings(&settings);
        if let Some(dir) = &self.scripts_dir {
            options.scripts = ScriptsRoot::open(dir)?;
        }
        options.bindfs = self.bindfs;
        tracing::debug!(
            settings = %settings_path.display(),
            scripts = %options.scripts.path().display(),
            bindfs = options.bindfs,
            "compiling"
        );

        let plan = homestead::compile(settings, &options)?;
        Ok(Compiled {
            settings_path,
            plan,
        })
    }
}

#[derive(Subcommand)]
enum Command {
    /// Create a new Homestead.yaml file
    Init(CmdInit),

    /// Compile settings and print the plan
    Plan(CmdPlan),

    /// Print the orchestrator environment for a plan
    Env(CmdEnv),
}

impl Opt {
    fn run(self) -> Result<i32> {
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        // stdout carries plans and env output
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        match self.cmd {
            Command::Init(mut cmd) => cmd.run(),
            Command::Plan(mut cmd) => cmd.run(),
            Command::Env(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
