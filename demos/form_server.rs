//! Example Axum server hosting the payment form
//!
//! Usage: cargo run --example form_server -- <api-key> [base-url]

use mzunipay::axum::{payment_form_router, FormPageConfig};
use mzunipay::form::{FormOptions, FormStyles};
use mzunipay::MzuniPayClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let api_key = args.next().unwrap_or_default();
    let client = match args.next() {
        Some(base_url) => MzuniPayClient::with_base_url(api_key, base_url)?,
        None => MzuniPayClient::new(api_key)?,
    };

    let config = FormPageConfig::new()
        .with_title("MzuniPay Checkout")
        .with_form_options(
            FormOptions::new().with_styles(FormStyles::new().with_button("background-color", "#6f42c1")),
        )
        .with_tracing(true);

    let app = payment_form_router(client, config);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:4021").await?;
    println!("🚀 Payment form running on http://0.0.0.0:4021");

    axum::serve(listener, app).await?;

    Ok(())
}
