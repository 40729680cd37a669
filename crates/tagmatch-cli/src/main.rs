// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line ranking tool: scores candidate strings against a reference,
//! a dry run of the interactive-tagging match step.

use anyhow::{bail, Result};
use tagmatch_config::load as load_config;
use tagmatch_similarity::rank;
use tracing::debug;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::Registry, reload, util::SubscriberInitExt, EnvFilter,
};

fn main() -> Result<()> {
    let (reference, candidates) = parse_args(std::env::args().skip(1))?;

    // Tracing comes up before the config load so events emitted while
    // loading are not dropped; the configured level is applied afterwards
    // through the reload handle.
    let filter_handle = init_tracing();
    let config = load_config(None)?;

    let directives = filter_directives(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &config.telemetry.log_level,
    );
    filter_handle.modify(|filter| *filter = EnvFilter::new(&directives))?;

    debug!(target: "cli", reference = %reference, candidates = candidates.len(), "ranking");

    let ranked = rank(&reference, &candidates);
    for entry in &ranked {
        let marker = if entry.score >= config.matching.min_confidence {
            "*"
        } else {
            " "
        };
        println!("{marker} {:.4}  {}", entry.score, entry.candidate);
    }

    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<(String, Vec<String>)> {
    let mut args = args;
    let Some(reference) = args.next() else {
        bail!("usage: tagmatch-cli <reference> <candidate>...");
    };
    let candidates: Vec<String> = args.collect();
    if candidates.is_empty() {
        bail!("usage: tagmatch-cli <reference> <candidate>...");
    }
    Ok((reference, candidates))
}

/// Pick the filter directives: an explicit `RUST_LOG` wins over the
/// configured log level.
fn filter_directives(env_directives: Option<String>, configured_level: &str) -> String {
    env_directives
        .filter(|directives| !directives.is_empty())
        .unwrap_or_else(|| configured_level.to_string())
}

fn init_tracing() -> reload::Handle<EnvFilter, Registry> {
    let fmt_layer = fmt::layer().with_target(true).with_level(true);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    handle
}
