use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pushinpay::{AuthHeaders, ChargeRequest, PushinPayClient, PushinPayConfig, SplitRuleRequest};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line access to the Pushin Pay API
#[derive(Parser)]
#[command(name = "pushinpay", version)]
struct Cli {
    /// API token, sent as a bearer Authorization header
    #[arg(long, env = "PUSHIN_PAY_TOKEN", hide_env_values = true)]
    token: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether an account exists
    Account { account_id: String },

    /// Fetch a transaction
    Transaction { transaction_id: String },

    /// Create a Pix charge
    Charge {
        /// Amount in cents
        value: i64,

        #[arg(long)]
        webhook_url: Option<String>,

        /// Split rule as ACCOUNT_ID=CENTS, repeatable
        #[arg(long = "split", value_parser = parse_split)]
        splits: Vec<SplitRuleRequest>,
    },
}

fn parse_split(raw: &str) -> Result<SplitRuleRequest, String> {
    let (account_id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ACCOUNT_ID=CENTS, got {}", raw))?;
    let value = value
        .parse()
        .map_err(|_| format!("split value must be an integer, got {}", value))?;
    Ok(SplitRuleRequest::new(value, account_id))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.token.trim().is_empty() {
        bail!("PUSHIN_PAY_TOKEN must not be empty");
    }

    let config = PushinPayConfig::from_env().context("loading Pushin Pay configuration")?;
    info!("Using Pushin Pay API at {}", config.base_url);

    let client = PushinPayClient::new(config)?;
    let headers = AuthHeaders::bearer(&cli.token);

    match cli.command {
        Command::Account { account_id } => {
            let exists = client.exists_by_account_id(&headers, &account_id).await?;
            print_json(&serde_json::json!({ "account_id": account_id, "exists": exists }))?;
        }
        Command::Transaction { transaction_id } => {
            let transaction = client
                .retrieve_by_transaction_id(&headers, &transaction_id)
                .await?;
            print_json(&transaction)?;
        }
        Command::Charge {
            value,
            webhook_url,
            splits,
        } => {
            let mut request = ChargeRequest::new(value);
            if let Some(url) = webhook_url {
                request = request.with_webhook_url(url);
            }
            for split in splits {
                request = request.with_split_rule(split);
            }

            let charge = client.create_charge(&headers, &request).await?;
            print_json(&charge)?;
        }
    }

    Ok(())
}
