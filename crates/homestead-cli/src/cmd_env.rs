// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `homestead env` command.

use clap::Args;
use miette::Result;

/// Print the orchestrator environment as KEY=value lines
#[derive(Debug, Args)]
pub struct CmdEnv {
    #[clap(flatten)]
    compile: crate::CompileFlags,
}

impl CmdEnv {
    pub fn run(&mut self) -> Result<i32> {
        let compiled = self.compile.compile()?;
        for (key, value) in compiled.plan.context.env_vars() {
            println!("{key}={value}");
        }
        Ok(0)
    }
}
