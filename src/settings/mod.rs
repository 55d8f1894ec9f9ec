//! Configuration loading and resolution.
//!
//! Settings are layered: default configuration files, then environment
//! variables with the `NOTED__` prefix, then explicit `--config` files, then
//! CLI flags. `load` is the entry point and returns the [`ResolvedConfig`]
//! used by the binary.

mod raw;
mod sources;

use anyhow::Result;

use crate::cli::CliArgs;

pub(crate) use raw::ResolvedConfig;

/// Merge configuration sources and apply CLI overrides.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let config = sources::build_config(cli)?;
    raw::RawConfig::from_config(config)?.resolve(cli)
}
