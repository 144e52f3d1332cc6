//! histgen CLI
//!
//! Inspects a MySQL table's schema and generates a history table plus the
//! audit triggers that populate it.

mod config;
mod introspect;
mod output;
mod select;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use sqlx::mysql::MySqlPoolOptions;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use histgen_core::prelude::*;

/// Generate history tables and audit triggers from source tables.
#[derive(Parser)]
#[command(name = "histgen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the table to generate a history table for.
    #[arg(short, long)]
    table: String,

    /// Path to the credentials YAML file (user, password, host, port, db).
    #[arg(short, long, env = "HISTGEN_CREDS_FILE")]
    creds_file: PathBuf,

    /// Primary key column name (prompted for when omitted).
    #[arg(short, long)]
    primary_key: Option<String>,

    /// Comma-separated columns to track (prompted for when omitted).
    #[arg(long)]
    columns: Option<String>,

    /// Output directory for the generated SQL files.
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Print the generated SQL instead of writing files.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let creds = config::Credentials::load(&cli.creds_file)?;

    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&creds.database_url())
        .await
        .with_context(|| {
            format!(
                "connecting to database '{}' on {}:{}",
                creds.db, creds.host, creds.port
            )
        })?;

    let columns = introspect::table_columns(&pool, &creds.db, &cli.table).await?;
    info!("found {} columns in table '{}'", columns.len(), cli.table);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = io::stdout();

    let pk_name = match cli.primary_key {
        Some(name) => name.trim().to_string(),
        None => select::prompt_primary_key(&mut input, &mut prompt_out)?,
    };
    if pk_name.is_empty() {
        bail!("primary key not provided");
    }

    let Some(primary_key) = select::find_primary_key(&columns, &pk_name) else {
        bail!("primary key '{pk_name}' is not in the columns list");
    };

    let tracked = match cli.columns {
        Some(ref names) => select::parse_selection(&columns, &pk_name, names)?,
        None => select::prompt_selection(&mut input, &mut prompt_out, &columns, &pk_name)?,
    };

    let spec = TableSpec::new(cli.table, primary_key, tracked)?;
    let artifacts = render_artifacts(&spec);

    debug!("history table DDL:\n{}", artifacts.create_table);
    debug!("insert trigger:\n{}", artifacts.after_insert_trigger);
    debug!("update trigger:\n{}", artifacts.after_update_trigger);

    if cli.dry_run {
        println!("{}", artifacts.create_table);
        println!("{}", artifacts.after_insert_trigger);
        println!("{}", artifacts.after_update_trigger);
    } else {
        output::write_artifacts(&cli.output_dir, &artifacts)?;
        info!("output files written successfully");
    }

    Ok(())
}
