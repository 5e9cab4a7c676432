//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::ledger::LedgerEngine;
use crate::reports::{CategoryTrendReport, DashboardSummary, MonthlyReport};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total balance, income and expense
    Summary,
    /// Income and expense per month
    Monthly,
    /// Monthly spending in the top expense categories
    Trend,
}

pub fn handle_report_command(
    engine: &LedgerEngine,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let output = match cmd {
        ReportCommands::Summary => {
            DashboardSummary::generate(engine.snapshot()).format_terminal(settings)
        }
        ReportCommands::Monthly => {
            MonthlyReport::generate(engine.transactions()).format_terminal(settings)
        }
        ReportCommands::Trend => {
            CategoryTrendReport::generate(engine.transactions()).format_terminal(settings)
        }
    };
    println!("{}", output);
    Ok(())
}
