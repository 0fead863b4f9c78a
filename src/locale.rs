use chrono::{DateTime, Local, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of every user-visible string on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

/// Fixed user-facing strings for one locale.
#[derive(Debug)]
pub struct Messages {
    pub html_lang: &'static str,
    pub unconfigured: &'static str,
    pub empty: &'static str,
    pub transport_failure: &'static str,
    pub updated_label: &'static str,
    pub date_format: &'static str,
    pub form_endpoint_missing: &'static str,
    pub form_sent: &'static str,
    pub form_failed: &'static str,
    pub form_server_error: &'static str,
    pub form_submit: &'static str,
    pub copy_email_idle: &'static str,
    pub copy_email_done: &'static str,
    pub copy_email_failed: &'static str,
    pub phone_idle: &'static str,
    pub phone_not_set: &'static str,
    pub phone_opening: &'static str,
    pub phone_greeting: &'static str,
    pub theme_toggle: &'static str,
    pub skills_heading: &'static str,
    pub repos_heading: &'static str,
    pub contact_heading: &'static str,
    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_message: &'static str,
    rate_limited: &'static str,
    not_found: &'static str,
    upstream: &'static str,
}

static EN: Messages = Messages {
    html_lang: "en",
    unconfigured: "Set your GitHub username in the configuration (GITHUB_USERNAME).",
    empty: "No repositories found.",
    transport_failure: "Could not load GitHub. Check the logs.",
    updated_label: "updated",
    date_format: "%-m/%-d/%Y",
    form_endpoint_missing: "Set the Formspree endpoint (FORM_ENDPOINT).",
    form_sent: "Message sent. I will get back to you soon.",
    form_failed: "Sending failed.",
    form_server_error: "Server error, please try again.",
    form_submit: "Send",
    copy_email_idle: "Copy email",
    copy_email_done: "Email copied!",
    copy_email_failed: "Copy failed",
    phone_idle: "Message on WhatsApp",
    phone_not_set: "Number not set",
    phone_opening: "Opening WhatsApp…",
    phone_greeting: "Hello",
    theme_toggle: "Toggle theme",
    skills_heading: "Skills",
    repos_heading: "Recent repositories",
    contact_heading: "Contact",
    form_name: "Name",
    form_email: "Email",
    form_message: "Message",
    rate_limited: "API rate limit exceeded or access denied (HTTP {status}). Authentication or caching may be required.",
    not_found: "User not found (HTTP {status}).",
    upstream: "Could not load GitHub (HTTP {status}).",
};

static TR: Messages = Messages {
    html_lang: "tr",
    unconfigured: "GitHub kullanıcı adınızı yapılandırmada ayarlayın (GITHUB_USERNAME).",
    empty: "Hiç depo bulunamadı.",
    transport_failure: "GitHub yüklenemedi, günlükleri kontrol edin.",
    updated_label: "güncellendi",
    date_format: "%d.%m.%Y",
    form_endpoint_missing: "Formspree endpoint ayarlayın (FORM_ENDPOINT).",
    form_sent: "Mesaj gönderildi, en kısa zamanda dönüş yapacağım.",
    form_failed: "Gönderim başarısız oldu.",
    form_server_error: "Sunucu hatası, lütfen tekrar deneyin.",
    form_submit: "Gönder",
    copy_email_idle: "E-postayı Kopyala",
    copy_email_done: "E-posta Kopyalandı!",
    copy_email_failed: "Kopyalama Başarısız",
    phone_idle: "WhatsApp'tan yaz",
    phone_not_set: "Numara ayarlanmamış",
    phone_opening: "WhatsApp açılıyor…",
    phone_greeting: "Merhaba",
    theme_toggle: "Temayı değiştir",
    skills_heading: "Yetenekler",
    repos_heading: "Son depolar",
    contact_heading: "İletişim",
    form_name: "Ad",
    form_email: "E-posta",
    form_message: "Mesaj",
    rate_limited: "API rate limit aşıldı veya erişim engellendi (HTTP {status}). Auth veya caching gerekebilir.",
    not_found: "Kullanıcı bulunamadı (HTTP {status}).",
    upstream: "GitHub yüklenemedi (HTTP {status}).",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Tr => &TR,
        }
    }

    /// Calendar date of `at` in the host's local time zone.
    pub fn format_date(self, at: &DateTime<Utc>) -> String {
        at.with_timezone(&Local).format(self.messages().date_format).to_string()
    }
}

impl Messages {
    pub fn rate_limited(&self, status: u16) -> String {
        with_status(self.rate_limited, status)
    }

    pub fn not_found(&self, status: u16) -> String {
        with_status(self.not_found, status)
    }

    pub fn upstream(&self, status: u16) -> String {
        with_status(self.upstream, status)
    }
}

fn with_status(template: &str, status: u16) -> String {
    template.replace("{status}", &status.to_string())
}
