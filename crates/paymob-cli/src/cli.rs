use clap::{Parser, Subcommand};
use paymob::{PaymobClient, PaymobConfig, PaymobError};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query and operate a Paymob Accept merchant account", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Exchange the API key for an auth token and print the response
    Auth,
    /// List orders
    Orders {
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one order
    Order { id: i64 },
    /// List transactions
    Transactions {
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one transaction
    Transaction { id: i64 },
    /// Look up the transaction attached to an order
    Inquiry { order_id: i64 },
    /// Capture an authorized transaction
    Capture {
        transaction_id: i64,
        amount_cents: i64,
    },
    /// Print the unified checkout link for an intention
    CheckoutUrl {
        public_key: String,
        client_secret: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] paymob::ConfigError),

    #[error(transparent)]
    Paymob(#[from] PaymobError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl Command {
    /// Subcommand name as typed on the command line. Safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Auth => "auth",
            Command::Orders { .. } => "orders",
            Command::Order { .. } => "order",
            Command::Transactions { .. } => "transactions",
            Command::Transaction { .. } => "transaction",
            Command::Inquiry { .. } => "inquiry",
            Command::Capture { .. } => "capture",
            Command::CheckoutUrl { .. } => "checkout-url",
        }
    }

    /// Whether the command talks to the gateway with an auth token.
    fn needs_token(&self) -> bool {
        !matches!(self, Command::Auth | Command::CheckoutUrl { .. })
    }

    /// Run the command and render what should go to stdout.
    pub async fn run(&self, config: PaymobConfig) -> Result<String, CliError> {
        let client = PaymobClient::new(config)?;

        let token = if self.needs_token() {
            client.auth_token().await?
        } else {
            String::new()
        };

        let response: Value = match self {
            Command::Auth => client.authenticate().await?,
            Command::Orders { page } => client.list_orders(&token, *page).await?,
            Command::Order { id } => client.get_order(&token, *id).await?,
            Command::Transactions { page } => client.list_transactions(&token, *page).await?,
            Command::Transaction { id } => client.get_transaction(&token, *id).await?,
            Command::Inquiry { order_id } => client.transaction_inquiry(&token, *order_id).await?,
            Command::Capture {
                transaction_id,
                amount_cents,
            } => {
                client
                    .capture(&token, *transaction_id, *amount_cents)
                    .await?
            }
            Command::CheckoutUrl {
                public_key,
                client_secret,
            } => return Ok(client.unified_checkout_url(public_key, client_secret)),
        };

        Ok(serde_json::to_string_pretty(&response)?)
    }
}
