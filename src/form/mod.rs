//! Embeddable payment form
//!
//! [`PaymentForm`] renders the four payment fields into a [`Container`],
//! reads them back on submission, hands the request to a
//! [`PaymentProcessor`] and reflects the outcome in the form's status block.
//!
//! ```
//! use mzunipay::form::{FormField, MemoryContainer, PaymentForm};
//! use mzunipay::MzuniPayClient;
//!
//! # async fn run() -> mzunipay::Result<()> {
//! let client = MzuniPayClient::new("merchant-api-key")?;
//! let form = PaymentForm::new(client);
//!
//! let mut container = MemoryContainer::new("checkout");
//! form.render(&mut container);
//!
//! let mut container = container
//!     .fill(FormField::CustomerEmail, "a@b.com")
//!     .fill(FormField::Password, "p")
//!     .fill(FormField::Amount, "10.50");
//!
//! form.submit_with(
//!     &mut container,
//!     |result| println!("paid: {:?}", result.transaction_id()),
//!     |error| eprintln!("failed: {}", error),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod markup;
pub mod style;

pub use container::{Container, Document, MemoryContainer, MemoryDocument};
pub use markup::FormStatus;
pub use style::{FormStyles, StyleMap};

use crate::client::PaymentProcessor;
use crate::types::{PaymentRequest, PaymentResult};
use crate::{MzuniPayError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Status text shown while a payment is in flight
pub const PROCESSING_MESSAGE: &str = "Processing payment...";

/// Default label of the submit button
pub const SUBMIT_LABEL: &str = "Pay Now";

/// The fields of the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CustomerEmail,
    Password,
    Amount,
    Description,
}

impl FormField {
    /// All fields in display order
    pub const ALL: [FormField; 4] = [
        FormField::CustomerEmail,
        FormField::Password,
        FormField::Amount,
        FormField::Description,
    ];

    /// Element id and form parameter name
    pub fn name(&self) -> &'static str {
        match self {
            FormField::CustomerEmail => "customer_email",
            FormField::Password => "password",
            FormField::Amount => "amount",
            FormField::Description => "description",
        }
    }

    /// Visible label
    pub fn label(&self) -> &'static str {
        match self {
            FormField::CustomerEmail => "Customer Email:",
            FormField::Password => "Customer Password:",
            FormField::Amount => "Amount:",
            FormField::Description => "Description:",
        }
    }

    /// `type` attribute of the field's `<input>`; `None` for the textarea
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FormField::CustomerEmail => Some("email"),
            FormField::Password => Some("password"),
            FormField::Amount => Some("number"),
            FormField::Description => None,
        }
    }
}

/// Presentation options for the payment form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Overrides merged over [`FormStyles::base`]
    pub styles: FormStyles,
    /// Label of the submit button
    pub submit_label: String,
    /// Status text while a payment is in flight
    pub processing_message: String,
    /// `method` attribute of the form element.
    ///
    /// Unset by default, so submission stays on the page and is handled by
    /// the presenter. Set it only when the form posts to a server.
    pub form_method: Option<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            styles: FormStyles::new(),
            submit_label: SUBMIT_LABEL.to_string(),
            processing_message: PROCESSING_MESSAGE.to_string(),
            form_method: None,
        }
    }
}

impl FormOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set style overrides
    pub fn with_styles(mut self, styles: FormStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Set the submit button label
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Make the form post natively with the given method
    pub fn with_form_method(mut self, method: impl Into<String>) -> Self {
        self.form_method = Some(method.into());
        self
    }

    /// Set the in-flight status text
    pub fn with_processing_message(mut self, message: impl Into<String>) -> Self {
        self.processing_message = message.into();
        self
    }
}

/// Raw field values as typed by the payer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub customer_email: String,
    pub password: String,
    pub amount: String,
    pub description: String,
}

impl FormValues {
    /// Read the current values out of a mounted container
    pub fn read_from<C: Container + ?Sized>(container: &C) -> Result<Self> {
        let read = |field: FormField| {
            container
                .field_value(field)
                .ok_or(MzuniPayError::MissingField {
                    field: field.name(),
                })
        };

        Ok(Self {
            customer_email: read(FormField::CustomerEmail)?,
            password: read(FormField::Password)?,
            amount: read(FormField::Amount)?,
            description: read(FormField::Description)?,
        })
    }

    /// Write these values into a mounted container
    pub fn write_to<C: Container + ?Sized>(&self, container: &mut C) -> Result<()> {
        let values = [
            (FormField::CustomerEmail, &self.customer_email),
            (FormField::Password, &self.password),
            (FormField::Amount, &self.amount),
            (FormField::Description, &self.description),
        ];
        for (field, value) in values {
            if !container.set_field_value(field, value.clone()) {
                return Err(MzuniPayError::MissingField {
                    field: field.name(),
                });
            }
        }
        Ok(())
    }

    /// Coerce the typed values into a payment request.
    ///
    /// Only the amount is converted; a blank description is left out.
    pub fn to_request(&self) -> Result<PaymentRequest> {
        let amount = coerce_amount(&self.amount)?;
        let mut request = PaymentRequest::new(&self.customer_email, &self.password, amount);
        if !self.description.trim().is_empty() {
            request = request.with_description(&self.description);
        }
        Ok(request)
    }
}

fn coerce_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MzuniPayError::invalid_amount(raw))
}

/// Payment form bound to a payment processor
#[derive(Debug, Clone)]
pub struct PaymentForm<P> {
    processor: P,
    options: FormOptions,
    styles: FormStyles,
}

impl<P: PaymentProcessor> PaymentForm<P> {
    /// Create a form with default options
    pub fn new(processor: P) -> Self {
        Self::with_options(processor, FormOptions::default())
    }

    /// Create a form with custom options
    pub fn with_options(processor: P, options: FormOptions) -> Self {
        let styles = FormStyles::base().merged(&options.styles);
        Self {
            processor,
            options,
            styles,
        }
    }

    /// Get the options
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Effective styles after merging overrides
    pub fn styles(&self) -> &FormStyles {
        &self.styles
    }

    /// Get the processor
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Markup of the form element alone
    pub fn form_html(&self) -> String {
        markup::form_markup(
            &self.styles,
            &self.options.submit_label,
            self.options.form_method.as_deref(),
        )
    }

    /// Markup of the status block in the given state
    pub fn status_html(&self, status: &FormStatus) -> String {
        markup::status_markup(&self.styles, status)
    }

    /// Mount the form into a container, replacing its contents
    pub fn render<C: Container + ?Sized>(&self, container: &mut C) {
        container.mount(self.form_html(), self.status_html(&FormStatus::Idle));
        debug!(container = container.id(), "Mounted payment form");
    }

    /// Mount the form into the container with the given id.
    ///
    /// Fails with [`MzuniPayError::Mount`] when the document has no such container.
    pub fn render_in<D: Document + ?Sized>(&self, document: &mut D, container_id: &str) -> Result<()> {
        let container = document
            .container_mut(container_id)
            .ok_or_else(|| MzuniPayError::mount(container_id))?;
        self.render(container);
        Ok(())
    }

    /// Submit the values currently in the container.
    ///
    /// The status block shows progress and then the outcome. Reading from an
    /// unmounted container fails before the status is touched.
    pub async fn submit<C: Container + ?Sized>(&self, container: &mut C) -> Result<PaymentResult> {
        let values = FormValues::read_from(container)?;
        self.process(container, &values).await
    }

    /// Submit the values currently in the container and report through callbacks.
    ///
    /// Exactly one of `on_success` or `on_error` is invoked, once. Only a
    /// missing form is returned as an error.
    pub async fn submit_with<C, S, E>(&self, container: &mut C, on_success: S, on_error: E) -> Result<()>
    where
        C: Container + ?Sized,
        S: FnOnce(&PaymentResult),
        E: FnOnce(&MzuniPayError),
    {
        let values = FormValues::read_from(container)?;
        match self.process(container, &values).await {
            Ok(result) => on_success(&result),
            Err(error) => on_error(&error),
        }
        Ok(())
    }

    /// Run one submission of already-read values against the container's status block
    pub async fn process<C: Container + ?Sized>(
        &self,
        container: &mut C,
        values: &FormValues,
    ) -> Result<PaymentResult> {
        let outcome = match values.to_request() {
            Ok(request) => {
                container.set_status(self.status_html(&FormStatus::Processing(
                    self.options.processing_message.clone(),
                )));
                self.processor.submit_payment(&request).await
            }
            Err(error) => Err(error),
        };

        match &outcome {
            Ok(result) => {
                let text = match result.transaction_id() {
                    Some(id) => format!("Payment Successful! Transaction ID: {}", id),
                    None => "Payment Successful!".to_string(),
                };
                container.set_status(self.status_html(&FormStatus::Succeeded(text)));
            }
            Err(error) => {
                warn!(container = container.id(), error = %error, "Payment form submission failed");
                container.set_status(
                    self.status_html(&FormStatus::Failed(format!("Payment Failed: {}", error))),
                );
            }
        }

        outcome
    }
}
