use cardcheckout::application::checkout::Checkout;
use cardcheckout::config::CheckoutConfig;
use cardcheckout::domain::credentials::CredentialForm;
use cardcheckout::domain::payment::PaymentForm;
use cardcheckout::infrastructure::http::HttpCheckoutGateway;
use cardcheckout::infrastructure::sdk::HttpScriptLoader;
use cardcheckout::interfaces::console::form_reader::PaymentFormReader;
use cardcheckout::interfaces::console::status::ConsoleStatus;
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Merchant client id
    #[arg(long, env = "CARDCHECKOUT_CLIENT_ID")]
    client_id: String,

    /// Merchant client secret
    #[arg(long, env = "CARDCHECKOUT_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Payment provider environment (sandbox or live)
    #[arg(long, default_value = "sandbox")]
    environment: String,

    /// JSON file with the payment form. If omitted, only the credentials are validated.
    #[arg(long)]
    payment: Option<PathBuf>,

    #[command(flatten)]
    config: CheckoutConfig,
}

fn read_payment_form(path: &Path) -> Result<PaymentForm> {
    let file = File::open(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot open payment form {}", path.display()))?;
    PaymentFormReader::new(file)
        .read()
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid payment form {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Read the form up front so a bad file fails before anything is sent.
    let payment_form = cli.payment.as_deref().map(read_payment_form).transpose()?;

    let gateway = HttpCheckoutGateway::new(&cli.config).into_diagnostic()?;
    let sdk_client = reqwest::Client::builder()
        .timeout(cli.config.timeout())
        .build()
        .into_diagnostic()?;

    let mut checkout = Checkout::new(
        Arc::new(gateway),
        Box::new(HttpScriptLoader::new(sdk_client)),
        cli.config.sdk_url.clone(),
        Box::new(ConsoleStatus::stdout("credentials")),
        Box::new(ConsoleStatus::stdout("payment")),
    );

    let mut failed = checkout
        .submit_credentials(CredentialForm {
            client_id: cli.client_id,
            client_secret: cli.client_secret,
            environment: cli.environment,
        })
        .await
        .is_err();

    // Submitted even after a failed validation, like a second form on the same page.
    if let Some(form) = payment_form {
        failed |= checkout.submit_payment(form).await.is_err();
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
