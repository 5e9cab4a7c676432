use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use walletbook::audit::AuditLogger;
use walletbook::cli::{
    handle_account_command, handle_budget_command, handle_category_command, handle_goal_command,
    handle_report_command, handle_template_command, handle_transaction_command,
};
use walletbook::config::{Settings, WalletPaths};
use walletbook::ledger::LedgerEngine;
use walletbook::storage::open_adapter;

const LOG_ENV: &str = "WALLETBOOK_LOG";

#[derive(Parser)]
#[command(
    name = "walletbook",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "Walletbook keeps accounts, transactions, budgets and savings goals \
                  consistent with each other. Every balance change is committed \
                  together with the transaction that caused it."
)]
struct Cli {
    /// Ledger owner; each user's data is kept separately
    #[arg(short, long, global = true, env = "WALLETBOOK_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(walletbook::cli::AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(walletbook::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(walletbook::cli::BudgetCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(walletbook::cli::CategoryCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(walletbook::cli::GoalCommands),

    /// Transaction template commands
    #[command(subcommand)]
    Template(walletbook::cli::TemplateCommands),

    /// Summary and trend reports
    #[command(subcommand)]
    Report(walletbook::cli::ReportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let user = settings.resolve_user(cli.user.as_deref())?;

    let Some(command) = cli.command else {
        println!("Walletbook - personal finance ledger");
        println!();
        println!("Run 'walletbook --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config = command {
        println!("Walletbook Configuration");
        println!("========================");
        println!("Base directory:  {}", paths.base_dir().display());
        println!("Data directory:  {}", paths.data_dir().display());
        println!("Settings file:   {}", paths.settings_file().display());
        println!("Audit log:       {}", paths.audit_log().display());
        println!();
        println!("Settings:");
        println!("  Backend:       {}", settings.backend);
        println!("  Currency:      {}", settings.currency_symbol);
        println!("  Default user:  {}", settings.default_user);
        println!("  Active user:   {}", user);
        return Ok(());
    }

    let audit = AuditLogger::new(paths.audit_log());
    if let Commands::Audit { count } = command {
        let entries = audit.read_recent(count)?;
        if entries.is_empty() {
            println!("No audit entries yet.");
        }
        for entry in entries {
            println!("{}", entry.format_human_readable());
        }
        return Ok(());
    }

    let adapter = open_adapter(&paths, &settings)?;
    let mut engine = LedgerEngine::open(user, adapter)?.with_audit(audit);
    tracing::debug!(
        user = %engine.user(),
        backend = engine.backend_name(),
        "ledger opened"
    );

    match command {
        Commands::Account(cmd) => handle_account_command(&mut engine, &settings, cmd)?,
        Commands::Txn(cmd) => handle_transaction_command(&mut engine, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut engine, &settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut engine, &settings, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&mut engine, &settings, cmd)?,
        Commands::Template(cmd) => handle_template_command(&mut engine, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&engine, &settings, cmd)?,
        Commands::Audit { .. } | Commands::Config => {}
    }

    Ok(())
}
