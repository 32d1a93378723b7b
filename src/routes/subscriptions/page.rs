use askama_axum::Template;

use crate::layout::{Header, PageShell, Site};
use crate::subscribe_form::SubscribeForm;

#[derive(Template)]
#[template(path = "subscribe.html")]
pub struct SubscribePage {
    shell: PageShell,
    action: String,
    paragraph_margin: String,
    email: String,
    first_name: String,
    pathname: String,
    result: Option<String>,
    error: Option<String>,
    trust_provider_html: bool,
}

impl SubscribePage {
    /// Renders the form as it currently stands, including any outcome.
    /// `pathname` is the page the form sits on and is echoed back on submit.
    pub fn new(site: &Site, header: Header, form: &SubscribeForm, pathname: &str) -> Self {
        let state = form.state();
        Self {
            shell: site.shell(header),
            action: site.path_prefix.join("subscriptions"),
            paragraph_margin: site.typography.paragraph_margin(),
            email: state.email.clone(),
            first_name: state.first_name.clone(),
            pathname: pathname.to_string(),
            result: form.result().map(|r| r.message.clone()),
            error: form.error().map(str::to_string),
            trust_provider_html: site.trust_provider_html,
        }
    }
}
