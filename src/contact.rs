//! Contact section: form relay, copy-email and WhatsApp buttons.

use crate::capabilities::{Clipboard, Fetcher, Navigator};
use crate::locale::Locale;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

const COPY_FEEDBACK: Duration = Duration::from_millis(1500);
const PHONE_FEEDBACK: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatusKind {
    Success,
    Error,
}

/// Outcome line shown under the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    pub kind: FormStatusKind,
    pub message: String,
}

impl FormStatus {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FormStatusKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FormStatusKind::Error,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FormStatusKind::Success => "form-status success",
            FormStatusKind::Error => "form-status error",
        }
    }
}

/// Relays contact form submissions to a Formspree-style endpoint.
#[derive(Debug, Clone)]
pub struct ContactForm {
    endpoint: Option<String>,
    locale: Locale,
}

impl ContactForm {
    pub fn new(endpoint: Option<String>, locale: Locale) -> Self {
        Self { endpoint, locale }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.endpoint(), Some(e) if !e.trim().is_empty() && !e.contains("your-id"))
    }

    pub async fn submit(&self, fetcher: &dyn Fetcher, fields: &[(String, String)]) -> FormStatus {
        let messages = self.locale.messages();

        let endpoint = match self.endpoint() {
            Some(endpoint) if self.is_configured() => endpoint,
            _ => {
                warn!("Contact form submitted without a configured endpoint");
                return FormStatus::error(messages.form_endpoint_missing);
            }
        };

        let response = match fetcher.post_form(endpoint, fields).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Contact form relay failed");
                return FormStatus::error(messages.form_server_error);
            }
        };

        // The endpoint always answers JSON; anything else counts as a server fault
        let data = match response.json::<Value>() {
            Ok(data) => data,
            Err(e) => {
                error!(status = response.status, error = %e, "Contact form endpoint returned non-JSON body");
                return FormStatus::error(messages.form_server_error);
            }
        };

        if response.is_success() {
            info!(status = response.status, "Contact form relayed");
            return FormStatus::success(messages.form_sent);
        }

        warn!(status = response.status, "Contact form endpoint rejected submission");
        let detail = data.get("error").and_then(Value::as_str).map(str::to_string);

        FormStatus::error(detail.unwrap_or_else(|| messages.form_failed.to_string()))
    }
}

/// Transient label shown on a button after it is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFeedback {
    pub label: String,
    pub idle_label: String,
    pub revert_after: Duration,
}

#[derive(Debug, Clone)]
pub struct CopyEmailButton {
    email: String,
    locale: Locale,
}

impl CopyEmailButton {
    pub fn new(email: impl Into<String>, locale: Locale) -> Self {
        Self {
            email: email.into(),
            locale,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub async fn press(&self, clipboard: &dyn Clipboard) -> ButtonFeedback {
        let messages = self.locale.messages();
        let label = match clipboard.write_text(&self.email).await {
            Ok(()) => messages.copy_email_done,
            Err(e) => {
                warn!(error = %e, "Copying email failed");
                messages.copy_email_failed
            }
        };

        ButtonFeedback {
            label: label.to_string(),
            idle_label: messages.copy_email_idle.to_string(),
            revert_after: COPY_FEEDBACK,
        }
    }
}

/// Builds a `wa.me` deep link from a loosely formatted phone number.
///
/// Everything except ASCII digits is dropped; `None` when nothing is left.
pub fn whatsapp_link(raw: &str, greeting: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let mut url = Url::parse(&format!("https://wa.me/{}", digits)).ok()?;
    url.query_pairs_mut().append_pair("text", greeting);
    Some(url.into())
}

#[derive(Debug, Clone)]
pub struct PhoneButton {
    phone: Option<String>,
    locale: Locale,
}

impl PhoneButton {
    pub fn new(phone: Option<String>, locale: Locale) -> Self {
        Self { phone, locale }
    }

    pub fn href(&self) -> Option<String> {
        let phone = self.phone.as_deref()?;
        whatsapp_link(phone, self.locale.messages().phone_greeting)
    }

    pub fn press(&self, navigator: &dyn Navigator) -> ButtonFeedback {
        let messages = self.locale.messages();
        match self.href() {
            Some(url) => {
                navigator.open_detached(&url);
                ButtonFeedback {
                    label: messages.phone_opening.to_string(),
                    idle_label: messages.phone_idle.to_string(),
                    revert_after: PHONE_FEEDBACK,
                }
            }
            None => ButtonFeedback {
                label: messages.phone_not_set.to_string(),
                idle_label: messages.phone_idle.to_string(),
                revert_after: COPY_FEEDBACK,
            },
        }
    }
}
