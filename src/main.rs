//! Command line front end for the Cryptome Pay gateway.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use cryptomepay::error::{webhook_error, WebhookErrorKind};
use cryptomepay::{
    ApiResponse, ChainType, Client, CreatePaymentParams, Error, ListOrdersParams, PaymentStatus,
    WebhookValidator,
};
use log::*;
use serde::Serialize;
use service::{config::Config, logging::Logger};
use tokio::io::AsyncReadExt;

#[derive(Debug, Parser)]
#[command(name = "cryptomepay", author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a payment order
    CreatePayment(CreatePaymentArgs),
    /// Look up a payment by trade id or order id
    Query(QueryArgs),
    /// List orders, optionally filtered
    ListOrders(ListOrdersArgs),
    /// Show the merchant profile
    Merchant,
    /// Verify the signature of a webhook body
    VerifyWebhook(VerifyWebhookArgs),
}

#[derive(Debug, Args)]
struct CreatePaymentArgs {
    #[arg(long)]
    order_id: String,
    /// Fiat amount, e.g. 100.00
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    notify_url: String,
    #[arg(long)]
    redirect_url: Option<String>,
    /// Settlement chain, e.g. TRC20 or BSC
    #[arg(long, value_parser = parse_chain_type)]
    chain_type: Option<ChainType>,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct QueryArgs {
    #[arg(long)]
    trade_id: Option<String>,
    #[arg(long)]
    order_id: Option<String>,
}

#[derive(Debug, Args)]
struct ListOrdersArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    page_size: Option<u32>,
    /// Payment status code: 1 pending, 2 paid, 3 expired
    #[arg(long)]
    status: Option<i64>,
    #[arg(long, value_parser = parse_chain_type)]
    chain_type: Option<ChainType>,
    #[arg(long, requires = "end_date")]
    start_date: Option<String>,
    #[arg(long, requires = "start_date")]
    end_date: Option<String>,
}

#[derive(Debug, Args)]
struct VerifyWebhookArgs {
    /// File holding the raw webhook body, or `-` for stdin
    #[arg(long, default_value = "-")]
    file: PathBuf,
    /// Verify any JSON object with generic field formatting
    #[arg(long)]
    untyped: bool,
}

// Case-insensitive, unlike decoding a chain identifier from the wire.
fn parse_chain_type(s: &str) -> Result<ChainType, std::convert::Infallible> {
    s.parse()
}

impl From<CreatePaymentArgs> for CreatePaymentParams {
    fn from(args: CreatePaymentArgs) -> Self {
        let mut params = CreatePaymentParams::new(args.order_id, args.amount, args.notify_url);
        if let Some(redirect_url) = args.redirect_url {
            params = params.with_redirect_url(redirect_url);
        }
        if let Some(chain_type) = args.chain_type {
            params = params.with_chain_type(chain_type);
        }
        params
    }
}

impl From<ListOrdersArgs> for ListOrdersParams {
    fn from(args: ListOrdersArgs) -> Self {
        ListOrdersParams {
            page: args.page,
            page_size: args.page_size,
            status: args.status.map(PaymentStatus::from),
            chain_type: args.chain_type,
            start_date: args.start_date,
            end_date: args.end_date,
        }
    }
}

#[derive(Debug, Serialize)]
struct Verification {
    valid: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    service::load_dotenv();
    let cli = Cli::parse();

    if let Err(e) = Logger::init_logger(&cli.config) {
        eprintln!("Failed to start logger: {e}");
    }

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one command and prints its result as JSON. Returns whether the
/// gateway reported success (or the webhook verified).
async fn run(cli: Cli) -> Result<bool, Error> {
    let client = cli.config.client()?;
    debug!("Using Cryptome Pay at {}", client.base_url());

    match cli.command {
        Command::CreatePayment(args) => {
            let response = client.create_payment(&args.into()).await?;
            print_response(&response)
        }
        Command::Query(QueryArgs { trade_id, order_id }) => {
            let response = if let Some(trade_id) = trade_id {
                client.query_payment_by_trade_id(&trade_id).await?
            } else {
                // clap requires exactly one of the two ids
                let order_id = order_id.unwrap_or_default();
                client.query_payment_by_order_id(&order_id).await?
            };
            print_response(&response)
        }
        Command::ListOrders(args) => print_response(&client.list_orders(&args.into()).await?),
        Command::Merchant => print_response(&client.get_merchant_info().await?),
        Command::VerifyWebhook(args) => verify_webhook(&client, &args).await,
    }
}

async fn verify_webhook(client: &Client, args: &VerifyWebhookArgs) -> Result<bool, Error> {
    let body = read_body(&args.file).await.map_err(|e| {
        webhook_error(
            WebhookErrorKind::InvalidPayload,
            &format!("Failed to read {}: {}", args.file.display(), e),
        )
    })?;

    let validator = client.webhook_validator();
    let valid = if args.untyped {
        validator.validate_untyped(&body)?
    } else {
        validator.validate(&body)?
    };

    print_json(&Verification { valid })?;
    Ok(valid)
}

async fn read_body(file: &Path) -> std::io::Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut body = Vec::new();
        tokio::io::stdin().read_to_end(&mut body).await?;
        Ok(body)
    } else {
        tokio::fs::read(file).await
    }
}

fn print_response<T: Serialize>(response: &ApiResponse<T>) -> Result<bool, Error> {
    if !response.is_success() {
        warn!(
            "Cryptome Pay returned status_code={}: {}",
            response.status_code, response.message
        );
    }
    print_json(response)?;
    Ok(response.is_success())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
