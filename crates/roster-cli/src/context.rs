//! Settings resolved from CLI flags on top of the loaded configuration.

use anyhow::Context;
use clap::ValueEnum;
use roster_config::RosterConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub format: OutputFormat,
    pub contract_id: Option<u64>,
    pub table: TableOptions,
}

impl AppContext {
    /// Flags win over config; config wins over built-in defaults.
    pub fn new(flags: &GlobalFlags, config: RosterConfig) -> anyhow::Result<Self> {
        let format = match flags.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.format, true)
                .map_err(|error| anyhow::anyhow!(error))
                .context("invalid output.format in configuration")?,
        };

        let contract_id = flags.contract.or(config.scope.contract_id);
        if let Some(contract) = contract_id {
            tracing::debug!(contract, "scoping run selection to contract");
        }

        Ok(Self {
            format,
            contract_id,
            table: TableOptions {
                max_width: config.output.max_width,
                color: config.output.color && !flags.quiet,
            },
        })
    }
}
