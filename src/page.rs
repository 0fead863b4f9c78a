use crate::capabilities::{Fetcher, Storage};
use crate::config::PortfolioConfig;
use crate::contact::{ContactForm, CopyEmailButton, FormStatus, PhoneButton};
use crate::dom::{Element, Node};
use crate::error::Result;
use crate::skills::render_skills;
use crate::theme::{Theme, ThemeSwitch};
use crate::widget::RemoteListWidget;
use std::sync::Arc;

pub const PAGE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 52rem; padding: 2rem; background: #fafafa; color: #1b1b1b; }
body.theme-dark { background: #111418; color: #e6e6e6; }
.repo { border: 1px solid #8884; border-radius: 8px; padding: 0.75rem 1rem; margin: 0.5rem 0; cursor: pointer; }
.repo.error { border-color: #c0392b; cursor: default; }
.repo .meta, .muted { opacity: 0.75; font-size: 0.9rem; margin-top: 4px; }
.skill { display: grid; grid-template-columns: 8rem 1fr 3rem; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }
.skill .level { background: #8883; border-radius: 4px; height: 8px; }
.skill .level > i { display: block; height: 100%; border-radius: 4px; background: #4f8cff; }
.loader.small { width: 1.5rem; height: 1.5rem; border: 3px solid #8885; border-top-color: #4f8cff; border-radius: 50%; animation: spin 1s linear infinite; }
.form-status.success { color: #27ae60; }
.form-status.error { color: #c0392b; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

/// Browser-side card activation: a click outside the anchor, or Enter/Space on
/// a focused card, opens the card URL with `noopener`.
pub const CARD_ACTIVATION_JS: &str = r#"(function () {
  document.querySelectorAll(".repo[data-href]").forEach(function (card) {
    var href = card.getAttribute("data-href");
    card.addEventListener("click", function (e) {
      if (e.target && e.target.closest("a")) return;
      window.open(href, "_blank", "noopener");
    });
    card.addEventListener("keydown", function (e) {
      if (e.key === "Enter" || e.key === " ") {
        e.preventDefault();
        window.open(href, "_blank", "noopener");
      }
    });
  });
})();"#;

pub const COPY_EMAIL_JS: &str = r#"(function () {
  var btn = document.getElementById("copy-email");
  if (!btn) return;
  var idle = btn.textContent;
  btn.addEventListener("click", function () {
    var done = function (label) {
      btn.textContent = label;
      setTimeout(function () { btn.textContent = idle; }, 1500);
    };
    navigator.clipboard.writeText(btn.getAttribute("data-email"))
      .then(function () { done(btn.getAttribute("data-done")); })
      .catch(function () { done(btn.getAttribute("data-failed")); });
  });
})();"#;

/// The assembled portfolio: configuration, the repository widget and the
/// theme preference.
pub struct Portfolio {
    config: PortfolioConfig,
    fetcher: Arc<dyn Fetcher>,
    widget: RemoteListWidget,
    theme: ThemeSwitch,
    contact: ContactForm,
    copy_email: CopyEmailButton,
    phone: PhoneButton,
}

impl Portfolio {
    pub fn new(config: PortfolioConfig, fetcher: Arc<dyn Fetcher>, storage: Arc<dyn Storage>) -> Self {
        let widget = RemoteListWidget::new(Arc::clone(&fetcher), config.locale)
            .with_api_base(config.api_base.clone());
        let theme = ThemeSwitch::load(storage);
        let contact = ContactForm::new(config.form_endpoint.clone(), config.locale);
        let copy_email = CopyEmailButton::new(config.email.clone(), config.locale);
        let phone = PhoneButton::new(config.phone.clone(), config.locale);

        Self {
            config,
            fetcher,
            widget,
            theme,
            contact,
            copy_email,
            phone,
        }
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn widget(&self) -> &RemoteListWidget {
        &self.widget
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn copy_email_button(&self) -> &CopyEmailButton {
        &self.copy_email
    }

    pub fn phone_button(&self) -> &PhoneButton {
        &self.phone
    }

    pub async fn refresh_repos(&self) {
        self.widget.render(&self.config.github_username).await;
    }

    pub fn set_theme(&self, theme: Theme) -> Result<Theme> {
        self.theme.set(theme)
    }

    /// Flips the theme, persists it and re-renders the repository list.
    pub async fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.theme.toggle()?;
        self.refresh_repos().await;
        Ok(theme)
    }

    pub async fn submit_contact(&self, fields: &[(String, String)]) -> FormStatus {
        self.contact.submit(self.fetcher.as_ref(), fields).await
    }

    pub async fn repo_fragment(&self) -> String {
        let target = self.widget.target();
        let target = target.lock().await;
        target.to_element().to_html()
    }

    /// Serialises the full document from the current state. Does not fetch.
    pub async fn render_page(&self, form_status: Option<&FormStatus>) -> String {
        let messages = self.config.locale.messages();
        let theme = self.theme.current();

        let repo_list = {
            let target = self.widget.target();
            let target = target.lock().await;
            target.to_element()
        };

        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(self.config.owner_name.clone()))
            .child(Element::new("style").raw(PAGE_CSS));

        let header = Element::new("header")
            .child(Element::new("h1").text(self.config.owner_name.clone()))
            .child(
                Element::new("form")
                    .attr("method", "post")
                    .attr("action", "/theme")
                    .child(
                        Element::new("button")
                            .attr("type", "submit")
                            .id("theme-switch")
                            .attr("aria-pressed", theme.is_dark().to_string())
                            .text(messages.theme_toggle),
                    ),
            );

        let skills = Element::new("section")
            .id("skills")
            .child(Element::new("h2").text(messages.skills_heading))
            .child(render_skills(&self.config.skills));

        let repos = Element::new("section")
            .id("projects")
            .child(Element::new("h2").text(messages.repos_heading))
            .child(Element::new("div").id("github-widget").child(repo_list));

        let body = Element::new("body");
        let body = if theme.is_dark() { body.class("theme-dark") } else { body };
        let body = body
            .child(header)
            .child(skills)
            .child(repos)
            .child(self.contact_section(form_status))
            .child(Element::new("script").raw(CARD_ACTIVATION_JS))
            .child(Element::new("script").raw(COPY_EMAIL_JS));

        let html = Element::new("html")
            .attr("lang", messages.html_lang)
            .child(head)
            .child(body);

        format!("<!DOCTYPE html>\n{}", html.to_html())
    }

    fn contact_section(&self, form_status: Option<&FormStatus>) -> Element {
        let messages = self.config.locale.messages();

        let field = |name: &str, label: &str, input: Element| {
            Element::new("label")
                .text(label.to_string())
                .child(input.attr("name", name.to_string()).attr("required", "required"))
        };

        let form = Element::new("form")
            .id("contact-form")
            .attr("method", "post")
            .attr("action", "/contact")
            .attr("data-form-endpoint", self.contact.endpoint().unwrap_or_default().to_string())
            .child(field("name", messages.form_name, Element::new("input").attr("type", "text")))
            .child(field("email", messages.form_email, Element::new("input").attr("type", "email")))
            .child(field("message", messages.form_message, Element::new("textarea")))
            .child(Element::new("button").attr("type", "submit").text(messages.form_submit));

        let status = match form_status {
            Some(status) => Element::new("p")
                .id("form-status")
                .class(status.css_class())
                .attr("role", "status")
                .text(status.message.clone()),
            None => Element::new("p").id("form-status").class("form-status").attr("role", "status"),
        };

        let mut section = Element::new("section")
            .id("contact")
            .child(Element::new("h2").text(messages.contact_heading))
            .child(form)
            .child(status);

        if !self.copy_email.email().is_empty() {
            section = section.child(
                Element::new("button")
                    .attr("type", "button")
                    .id("copy-email")
                    .attr("data-email", self.copy_email.email().to_string())
                    .attr("data-done", messages.copy_email_done)
                    .attr("data-failed", messages.copy_email_failed)
                    .text(messages.copy_email_idle),
            );
        }

        let phone: Node = match self.phone.href() {
            Some(href) => Element::new("a")
                .id("phone-btn")
                .class("button")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text(messages.phone_idle)
                .into(),
            None => Element::new("span")
                .id("phone-btn")
                .class("button disabled")
                .text(messages.phone_not_set)
                .into(),
        };

        section.child(phone)
    }
}
