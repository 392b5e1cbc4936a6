//! `folio` — command-line client for the folio asset ledger.
//!
//! # Usage
//!
//! ```
//! folio clients list
//! folio clients add "Ana" ana@x.com --active
//! folio assets add PETR4 39.5 1
//! folio catalog
//! ```

mod client;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::ApiClient;
use folio_core::{
  asset::NewAsset,
  client::{ClientPatch, NewClient},
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Command-line client for the folio asset ledger")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the folio server (default: http://localhost:3000).
  #[arg(long, env = "FOLIO_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Manage client records.
  Clients {
    #[command(subcommand)]
    command: ClientsCommand,
  },
  /// Manage asset records.
  Assets {
    #[command(subcommand)]
    command: AssetsCommand,
  },
  /// Print the reference catalog.
  Catalog,
}

#[derive(Subcommand, Debug)]
enum ClientsCommand {
  /// List all clients.
  List,
  /// Register a new client.
  Add {
    name:  String,
    email: String,
    /// Allow assets to be attached right away.
    #[arg(long)]
    active: bool,
  },
  /// Update any subset of a client's fields.
  Edit {
    id: i64,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    active: Option<bool>,
  },
  /// Delete a client by id.
  Rm { id: i64 },
}

#[derive(Subcommand, Debug)]
enum AssetsCommand {
  /// List every asset with its owning client.
  List,
  /// List one client's assets.
  Of { client_id: i64 },
  /// Create an asset for a client. The name must be a catalog name.
  Add {
    name:      String,
    value:     f64,
    client_id: i64,
  },
  /// Delete an asset by id.
  Rm { id: i64 },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let base_url = args
    .url
    .or_else(|| (!file_cfg.url.is_empty()).then_some(file_cfg.url))
    .unwrap_or_else(|| "http://localhost:3000".to_owned());

  tracing::debug!("using server {base_url}");
  let api = ApiClient::new(base_url)?;

  match args.command {
    Command::Clients { command } => run_clients(&api, command).await,
    Command::Assets { command } => run_assets(&api, command).await,
    Command::Catalog => run_catalog(&api).await,
  }
}

// ─── Subcommand dispatch ──────────────────────────────────────────────────────

async fn run_clients(api: &ApiClient, command: ClientsCommand) -> Result<()> {
  match command {
    ClientsCommand::List => {
      for c in api.list_clients().await? {
        println!(
          "{:>4}  {:<24}  {:<32}  {}",
          c.id,
          c.name,
          c.email,
          if c.active { "active" } else { "inactive" },
        );
      }
    }
    ClientsCommand::Add { name, email, active } => {
      let created = api
        .create_client(&NewClient { name, email, active })
        .await?;
      println!("created client {}", created.id);
    }
    ClientsCommand::Edit { id, name, email, active } => {
      let updated = api
        .update_client(id, &ClientPatch { name, email, active })
        .await?;
      println!(
        "updated client {}: {} <{}> ({})",
        updated.id,
        updated.name,
        updated.email,
        if updated.active { "active" } else { "inactive" },
      );
    }
    ClientsCommand::Rm { id } => {
      api.delete_client(id).await?;
      println!("deleted client {id}");
    }
  }
  Ok(())
}

async fn run_assets(api: &ApiClient, command: AssetsCommand) -> Result<()> {
  match command {
    AssetsCommand::List => {
      for a in api.list_assets().await? {
        println!(
          "{:>4}  {:<28}  {:>12.2}  {} ({})",
          a.id, a.name, a.value, a.client.name, a.client_id,
        );
      }
    }
    AssetsCommand::Of { client_id } => {
      for a in api.client_assets(client_id).await? {
        println!("{:>4}  {:<28}  {:>12.2}", a.id, a.name, a.value);
      }
    }
    AssetsCommand::Add { name, value, client_id } => {
      let created = api
        .create_asset(&NewAsset { name, value, client_id })
        .await?;
      println!("created asset {}", created.id);
    }
    AssetsCommand::Rm { id } => {
      api.delete_asset(id).await?;
      println!("deleted asset {id}");
    }
  }
  Ok(())
}

async fn run_catalog(api: &ApiClient) -> Result<()> {
  for entry in api.catalog().await? {
    println!(
      "{:<28}  {:<12}  {:>12.2}",
      entry.name, entry.category, entry.reference_price,
    );
  }
  Ok(())
}
