//! Payment form rendering demo
//!
//! Renders the form with the built-in styles and with overrides, then shows
//! what a missing mount target looks like.

use mzunipay::form::{FormOptions, FormStyles, MemoryContainer, MemoryDocument, PaymentForm};
use mzunipay::MzuniPayClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MzuniPayClient::new("demo-api-key")?;

    // Built-in look
    let form = PaymentForm::new(client.clone());
    let mut container = MemoryContainer::new("checkout");
    form.render(&mut container);

    println!("=== Default Payment Form ===");
    println!("{}", container.inner_html());
    println!("\n{}", "=".repeat(50));

    // Branded look: only the named properties change
    let options = FormOptions::new()
        .with_styles(
            FormStyles::new()
                .with_form("background-color", "#ffffff")
                .with_button("background-color", "#28a745")
                .with_input("border", "1px solid #28a745"),
        )
        .with_submit_label("Pay Tuition");
    let branded = PaymentForm::with_options(client, options);

    let mut document = MemoryDocument::new().with_container("tuition");
    branded.render_in(&mut document, "tuition")?;

    println!("=== Branded Payment Form ===");
    if let Some(container) = document.container("tuition") {
        println!("{}", container.inner_html());
    }
    println!("\n{}", "=".repeat(50));

    match branded.render_in(&mut document, "no-such-element") {
        Ok(()) => println!("unexpectedly mounted"),
        Err(error) => println!("Mount failed as expected: {}", error),
    }

    Ok(())
}
