// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Per-site server setup and cron schedules.
//!
//! Every site yields exactly two shell directives: the server script for its
//! flavor, then either a schedule install or a schedule removal.

use crate::compile::CompileOptions;
use crate::directive::{Directive, ShellProvision};
use crate::normalize::{
    DEFAULT_SITE_PORT, DEFAULT_SITE_SSL_PORT, DEFAULT_SITE_TYPE, canonical_site_type,
};
use crate::settings::{Settings, SiteEntry, SiteParam};

#[cfg(test)]
#[path = "./sites_test.rs"]
mod sites_test;

const REMOVE_SCHEDULE_SCRIPT: &str = "rm -f /etc/cron.d/$1";

/// Server and schedule directives for every site, in declaration order.
pub fn plan_sites(settings: &Settings, options: &CompileOptions) -> Vec<Directive> {
    settings
        .sites
        .iter()
        .flat_map(|site| [plan_site(site, options), plan_schedule(site, options)])
        .collect()
}

/// Run the flavor's serve script with `[map, to, port, ssl, params]`.
pub fn plan_site(site: &SiteEntry, options: &CompileOptions) -> Directive {
    let kind = canonical_site_type(site.kind.as_deref().unwrap_or(DEFAULT_SITE_TYPE));
    let params = site.params.as_deref().map(serialize_params).unwrap_or_default();

    ShellProvision::script(options.scripts.site_script(kind))
        .named(format!("Creating Site: {}", site.map))
        .with_args([
            site.map.clone(),
            site.to.clone().unwrap_or_default(),
            site.port.clone().unwrap_or_else(|| DEFAULT_SITE_PORT.to_string()),
            site.ssl.clone().unwrap_or_else(|| DEFAULT_SITE_SSL_PORT.to_string()),
            params,
        ])
        .into()
}

/// Install the site's cron schedule, or remove any stale one.
pub fn plan_schedule(site: &SiteEntry, options: &CompileOptions) -> Directive {
    let id = schedule_id(&site.map);
    let shell = match site.schedule {
        Some(true) => ShellProvision::script(options.scripts.cron_schedule())
            .named("Creating Schedule")
            .with_args([id, site.to.clone().unwrap_or_default()]),
        Some(false) => ShellProvision::inline(REMOVE_SCHEDULE_SCRIPT)
            .named("Creating Schedule")
            .with_args([id]),
        None => ShellProvision::inline(REMOVE_SCHEDULE_SCRIPT)
            .named("Checking for old Schedule")
            .with_args([id]),
    };
    shell.into()
}

/// Bash associative array body read by the serve scripts: `( [k1]=v1 [k2]=v2 )`.
///
/// Keys and values are inserted verbatim.
pub fn serialize_params(params: &[SiteParam]) -> String {
    let mut out = String::from("(");
    for param in params {
        out.push_str(&format!(" [{}]={}", param.key, param.value));
    }
    out.push_str(" )");
    out
}

/// Cron file name for a site: its host name with everything but ASCII alphanumerics removed.
pub fn schedule_id(map: &str) -> String {
    map.chars().filter(char::is_ascii_alphanumeric).collect()
}
