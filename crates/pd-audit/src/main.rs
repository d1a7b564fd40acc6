//! pd-audit - redacted audit logging for personal data
//!
//! The main entry point, handling:
//! - The audit dump pipeline (users table -> redacted log lines)
//! - Credential hashing and verification helpers
//!
//! Log output goes to stderr; stdout carries command payloads only.

use clap::{Args, Parser, Subcommand};
use pd_audit::db;
use pd_audit::error::AuditError;
use pd_audit::exit_codes::ExitCode;
use pd_audit::logging::{self, LogConfig, LogLevel};
use pd_auth::{hash_password, hash_password_with_cost, verify_password, HashedPassword};
use pd_config::DbSettings;
use pd_redact::{RedactionPolicy, Redactor};
use std::path::PathBuf;
use std::process;

/// Personal-data safe logging toolkit
#[derive(Parser)]
#[command(name = "pd-audit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// JSON redaction policy overriding the default field set
    #[arg(long, global = true, env = "PD_REDACTION_POLICY")]
    policy: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the users table as redacted log lines
    Dump,

    /// Hash a password with a fresh random salt
    Hash(HashArgs),

    /// Check a password against a stored hash
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct HashArgs {
    /// Plain-text password to hash
    #[arg(long)]
    password: String,

    /// bcrypt work factor (defaults to the algorithm default)
    #[arg(long)]
    cost: Option<u32>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Stored credential hash
    #[arg(long)]
    hash: String,

    /// Plain-text password to check
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("pd-audit: {}", err);
            process::exit(ExitCode::from(&err).as_i32());
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AuditError> {
    let policy = match &cli.global.policy {
        Some(path) => RedactionPolicy::load(path)?,
        None => RedactionPolicy::default(),
    };

    match cli.command {
        Commands::Dump => {
            let config = LogConfig::from_env(cli.global.log_level);
            logging::init_logging(&config, Redactor::new(policy));

            let run_id = logging::generate_run_id();
            tracing::info!(target: "pd_audit", "starting audit dump ({})", run_id);

            let settings = DbSettings::from_env()?;
            let count = db::run_dump(&settings).await?;

            tracing::info!(target: "pd_audit", "audit dump complete: {} rows", count);
            Ok(ExitCode::Success)
        }
        Commands::Hash(args) => {
            let hashed = match args.cost {
                Some(cost) => hash_password_with_cost(&args.password, cost)?,
                None => hash_password(&args.password)?,
            };
            println!("{}", hashed);
            Ok(ExitCode::Success)
        }
        Commands::Verify(args) => {
            let hashed = HashedPassword::parse(&args.hash)?;
            if verify_password(&hashed, &args.password)? {
                println!("match");
                Ok(ExitCode::Success)
            } else {
                println!("no match");
                Ok(ExitCode::RuntimeFailure)
            }
        }
    }
}
