// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `homestead init` command.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use miette::Result;

#[cfg(test)]
#[path = "./cmd_init_test.rs"]
mod cmd_init_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Template {
    Minimal,
    Standard,
    Full,
}

/// Create a new Homestead.yaml file
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to create file in
    #[clap(default_value = ".")]
    path: PathBuf,

    /// Machine name
    #[clap(long)]
    name: Option<String>,

    /// Private network address of the machine
    #[clap(long)]
    ip: Option<String>,

    /// Template to use
    #[clap(long, value_enum, default_value_t = Template::Standard)]
    template: Template,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let settings_path = self.path.join(homestead::SETTINGS_FILENAME);

        if settings_path.exists() {
            return Err(miette::miette!(
                "{} already exists at {:?}",
                homestead::SETTINGS_FILENAME,
                settings_path
            ));
        }

        let content = self.render();
        std::fs::write(&settings_path, content).map_err(|e| {
            miette::miette!("Failed to write {}: {}", homestead::SETTINGS_FILENAME, e)
        })?;

        println!("Created {} at {:?}", homestead::SETTINGS_FILENAME, settings_path);
        println!();
        println!("Next steps:");
        println!("  1. Edit the file to map your folders and sites");
        println!("  2. Run 'homestead plan' to preview the provisioning plan");
        println!("  3. Run 'homestead env' to see the orchestrator environment");

        Ok(0)
    }

    fn render(&self) -> String {
        match self.template {
            Template::Minimal => self.generate_minimal_template(),
            Template::Standard => self.generate_standard_template(),
            Template::Full => self.generate_full_template(),
        }
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("homestead")
    }

    fn ip(&self) -> &str {
        self.ip.as_deref().unwrap_or("192.168.56.56")
    }

    fn generate_minimal_template(&self) -> String {
        format!(
            "name: {}\n\
            ip: \"{}\"\n",
            self.name(),
            self.ip()
        )
    }

    fn generate_standard_template(&self) -> String {
        format!(
            "# Homestead machine settings\n\
            \n\
            name: {}\n\
            ip: \"{}\"\n\
            memory: 2048\n\
            cpus: 2\n\
            provider: virtualbox\n\
            \n\
            # Public key installed into the guest's authorized_keys\n\
            authorize: ~/.ssh/id_rsa.pub\n\
            \n\
            # Private keys copied into the guest\n\
            keys:\n\
            \x20 - ~/.ssh/id_rsa\n\
            \n\
            # Host folders shared with the guest\n\
            folders:\n\
            \x20 - map: ~/code\n\
            \x20   to: /home/vagrant/code\n\
            \n\
            # Sites served by the guest web server\n\
            sites:\n\
            \x20 - map: homestead.test\n\
            \x20   to: /home/vagrant/code/public\n",
            self.name(),
            self.ip()
        )
    }

    fn generate_full_template(&self) -> String {
        format!(
            "# Homestead machine settings\n\
            # Full example with all fields documented\n\
            \n\
            name: {}\n\
            ip: \"{}\"\n\
            box: ubuntu/bionic64\n\
            version: \">= 2.0.0\"\n\
            memory: 4096\n\
            cpus: 2\n\
            provider: virtualbox\n\
            natdnshostresolver: on\n\
            gui: false\n\
            \n\
            # Extra networks (private_network or public_network)\n\
            # networks:\n\
            #   - type: public_network\n\
            #     ip: 192.168.10.20\n\
            #     bridge: en1\n\
            \n\
            # Extra forwarded ports (send = host, to = guest)\n\
            # default_ports: false disables the built-in forwards\n\
            # ports:\n\
            #   - send: 50000\n\
            #     to: 5000\n\
            #     protocol: udp\n\
            \n\
            authorize: ~/.ssh/id_rsa.pub\n\
            \n\
            keys:\n\
            \x20 - ~/.ssh/id_rsa\n\
            \n\
            # Files copied into the guest\n\
            # copy:\n\
            #   - from: ~/.bash_aliases\n\
            #     to: /home/vagrant\n\
            \n\
            # Shared folders; type may be nfs, smb or rsync\n\
            folders:\n\
            \x20 - map: ~/code\n\
            \x20   to: /home/vagrant/code\n\
            #     type: nfs\n\
            #     mount_options: [actimeo=1, nolock]\n\
            \n\
            sites:\n\
            \x20 - map: homestead.test\n\
            \x20   to: /home/vagrant/code/public\n\
            #     type: apache\n\
            #     port: 80\n\
            #     ssl: 443\n\
            #     schedule: true\n\
            #     params:\n\
            #       - key: APP_ENV\n\
            #         value: local\n\
            \n\
            # Web server to configure (apache replaces nginx)\n\
            # service: apache\n\
            \n\
            # Database systems to install\n\
            # DBMS:\n\
            #   - mysql\n\
            #   - postgresql\n",
            self.name(),
            self.ip()
        )
    }
}
