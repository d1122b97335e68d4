//! Axum integration serving the payment form as a server-rendered page
//!
//! `GET /` renders the empty form. `POST /` takes the url-encoded fields,
//! runs one submission through the configured processor and renders the form
//! again with the outcome in its status block.

use crate::client::PaymentProcessor;
use crate::form::{FormOptions, FormValues, MemoryContainer, PaymentForm};
use crate::form::markup::page_markup;
use crate::MzuniPayError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Id of the container the form is mounted into on the served page
pub const CONTAINER_ID: &str = "payment-container";

/// Options for the served payment page
#[derive(Debug, Clone)]
pub struct FormPageConfig {
    /// Form presentation options
    pub form: FormOptions,
    /// Page title
    pub title: String,
    /// Whether to trace requests
    pub enable_tracing: bool,
    /// Whether to allow cross-origin requests
    pub enable_cors: bool,
}

impl Default for FormPageConfig {
    fn default() -> Self {
        Self {
            form: FormOptions::default(),
            title: "Payment".to_string(),
            enable_tracing: true,
            enable_cors: false,
        }
    }
}

impl FormPageConfig {
    /// Create a default page config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form options
    pub fn with_form_options(mut self, form: FormOptions) -> Self {
        self.form = form;
        self
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable request tracing
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }

    /// Enable or disable permissive CORS
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.enable_cors = enabled;
        self
    }
}

struct FormPageState<P> {
    form: PaymentForm<P>,
    title: String,
}

impl<P: PaymentProcessor> FormPageState<P> {
    fn page(&self, container: &MemoryContainer) -> String {
        let body = format!(
            "<div id=\"{}\">\n{}\n</div>",
            CONTAINER_ID,
            container.inner_html()
        );
        page_markup(&self.title, &body)
    }

    fn mounted_container(&self) -> MemoryContainer {
        let mut container = MemoryContainer::new(CONTAINER_ID);
        self.form.render(&mut container);
        container
    }
}

/// Map a submission failure to the HTTP status of the re-rendered page
pub fn status_for_error(error: &MzuniPayError) -> StatusCode {
    match error {
        MzuniPayError::Payment { .. } => StatusCode::PAYMENT_REQUIRED,
        MzuniPayError::InvalidAmount { .. } | MzuniPayError::MissingField { .. } => {
            StatusCode::BAD_REQUEST
        }
        MzuniPayError::Http(_) | MzuniPayError::Json(_) | MzuniPayError::Io(_) => {
            StatusCode::BAD_GATEWAY
        }
        MzuniPayError::Config { .. } | MzuniPayError::Mount { .. } | MzuniPayError::Url(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn show_form<P: PaymentProcessor + 'static>(
    State(state): State<Arc<FormPageState<P>>>,
) -> Html<String> {
    let container = state.mounted_container();
    Html(state.page(&container))
}

async fn submit_form<P: PaymentProcessor + 'static>(
    State(state): State<Arc<FormPageState<P>>>,
    Form(values): Form<FormValues>,
) -> Response {
    let mut container = state.mounted_container();
    let outcome = match values.write_to(&mut container) {
        Ok(()) => state.form.submit(&mut container).await,
        Err(error) => Err(error),
    };
    let status = match outcome {
        Ok(_) => StatusCode::OK,
        Err(error) => status_for_error(&error),
    };
    (status, Html(state.page(&container))).into_response()
}

/// Build a router serving the payment form at `/`
pub fn payment_form_router<P>(processor: P, config: FormPageConfig) -> Router
where
    P: PaymentProcessor + 'static,
{
    // The page has no script, so the browser posts the form back here.
    let form_options = config.form.with_form_method("post");
    let state = Arc::new(FormPageState {
        form: PaymentForm::with_options(processor, form_options),
        title: config.title,
    });

    let mut router = Router::new()
        .route("/", get(show_form::<P>).post(submit_form::<P>))
        .with_state(state);

    if config.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for_error(&MzuniPayError::payment("Insufficient funds")),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            status_for_error(&MzuniPayError::invalid_amount("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for_error(&MzuniPayError::config("bad")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_page_config_builder() {
        let config = FormPageConfig::new()
            .with_title("Checkout")
            .with_cors(true)
            .with_tracing(false);
        assert_eq!(config.title, "Checkout");
        assert!(config.enable_cors);
        assert!(!config.enable_tracing);
    }
}
