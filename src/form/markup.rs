//! HTML generation for the payment form
//!
//! Every piece of caller or server supplied text goes through `html_escape`
//! before it lands in markup.

use super::style::{inline_css, FormStyles};
use super::FormField;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Id of the generated `<form>` element
pub const FORM_ID: &str = "paymentForm";

/// Id of the status block under the form
pub const STATUS_ID: &str = "paymentStatus";

/// What the status block currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet
    Idle,
    /// A submission is in flight
    Processing(String),
    /// The last submission succeeded
    Succeeded(String),
    /// The last submission failed
    Failed(String),
}

impl FormStatus {
    /// Plain text of the status, without markup
    pub fn text(&self) -> &str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Processing(text)
            | FormStatus::Succeeded(text)
            | FormStatus::Failed(text) => text,
        }
    }
}

fn input_markup(field: FormField, style: &str) -> String {
    let name = field.name();
    match field {
        FormField::Description => format!(
            r#"<textarea id="{name}" name="{name}" style="{style}"></textarea>"#,
        ),
        FormField::Amount => format!(
            r#"<input type="number" id="{name}" name="{name}" required min="0.01" step="0.01" style="{style}" />"#,
        ),
        FormField::CustomerEmail | FormField::Password => format!(
            r#"<input type="{kind}" id="{name}" name="{name}" required style="{style}" />"#,
            kind = field.input_type().unwrap_or("text"),
        ),
    }
}

/// Build the `<form>` element with its four fields and submit button.
///
/// Without a `method` the form carries no native submission target.
pub fn form_markup(styles: &FormStyles, submit_label: &str, method: Option<&str>) -> String {
    let input_style = encode_double_quoted_attribute(&inline_css(&styles.input)).into_owned();
    let method_attr = method
        .map(|m| format!(r#" method="{}""#, encode_double_quoted_attribute(m)))
        .unwrap_or_default();

    let mut html = format!(
        r#"<form id="{}"{} style="{}">"#,
        FORM_ID,
        method_attr,
        encode_double_quoted_attribute(&inline_css(&styles.form))
    );
    html.push('\n');

    for field in FormField::ALL {
        html.push_str(&format!(
            "  <label for=\"{}\">{}</label>\n  {}\n",
            field.name(),
            encode_text(field.label()),
            input_markup(field, &input_style)
        ));
    }

    html.push_str(&format!(
        "  <button type=\"submit\" style=\"{}\">{}</button>\n</form>",
        encode_double_quoted_attribute(&inline_css(&styles.button)),
        encode_text(submit_label)
    ));
    html
}

/// Build the status block for the given state
pub fn status_markup(styles: &FormStyles, status: &FormStatus) -> String {
    let inner = match status {
        FormStatus::Idle => String::new(),
        FormStatus::Processing(text) => encode_text(text).into_owned(),
        FormStatus::Succeeded(text) => {
            format!(r#"<p style="color: green;">{}</p>"#, encode_text(text))
        }
        FormStatus::Failed(text) => {
            format!(r#"<p style="color: red;">{}</p>"#, encode_text(text))
        }
    };

    format!(
        r#"<div id="{}" style="{}">{}</div>"#,
        STATUS_ID,
        encode_double_quoted_attribute(&inline_css(&styles.status)),
        inner
    )
}

/// Wrap a fragment in a standalone HTML document
pub fn page_markup(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
</head>
<body>
{}
</body>
</html>"#,
        encode_text(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_markup_contains_every_field() {
        let html = form_markup(&FormStyles::base(), "Pay Now", None);

        assert!(html.contains(r#"<form id="paymentForm" style="#));
        assert!(!html.contains("method="));
        assert!(html.contains(r#"type="email" id="customer_email""#));
        assert!(html.contains(r#"type="password" id="password""#));
        assert!(html.contains(r#"type="number" id="amount" name="amount" required min="0.01" step="0.01""#));
        assert!(html.contains(r#"<textarea id="description""#));
        assert!(html.contains(">Pay Now</button>"));
        assert!(html.contains("background-color: #007bff;"));
    }

    #[test]
    fn test_form_method_is_opt_in() {
        let html = form_markup(&FormStyles::new(), "Pay", Some("post"));
        assert!(html.contains(r#"<form id="paymentForm" method="post" style="#));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(FormStatus::Idle.text(), "");
        assert_eq!(
            FormStatus::Processing("Processing payment...".to_string()).text(),
            "Processing payment..."
        );
        assert_eq!(FormStatus::Failed("Payment Failed: x".to_string()).text(), "Payment Failed: x");
    }

    #[test]
    fn test_status_text_is_escaped() {
        let html = status_markup(
            &FormStyles::new(),
            &FormStatus::Failed("Payment Failed: <script>x</script>".to_string()),
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("color: red;"));
    }

    #[test]
    fn test_idle_status_is_empty_block() {
        let html = status_markup(&FormStyles::new(), &FormStatus::Idle);
        assert_eq!(html, r#"<div id="paymentStatus" style=""></div>"#);
    }

    #[test]
    fn test_style_values_cannot_break_attribute() {
        let styles = FormStyles::new().with_button("font-family", r#""Comic Sans""#);
        let html = form_markup(&styles, "Pay", None);
        assert!(!html.contains(r#": "Comic"#));
        assert!(html.contains("&quot;Comic Sans&quot;"));
    }

    #[test]
    fn test_page_markup() {
        let html = page_markup("Checkout & Pay", "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Checkout &amp; Pay</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
