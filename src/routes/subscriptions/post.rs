use askama_axum::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use super::SubscribePage;
use crate::domain::FormField;
use crate::layout::Header;
use crate::subscribe_form::SubscribeForm;
use crate::utils::e500;
use crate::AppState;

#[derive(Deserialize)]
pub struct FormData {
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub pathname: String,
}

#[tracing::instrument(
    name = "Submitting the subscription form",
    skip(state, form),
    fields(
        subscriber_email = %form.email,
        subscriber_first_name = %form.first_name,
    )
)]
pub async fn subscribe(
    state: State<AppState>,
    form: Form<FormData>,
) -> Result<Html<String>, StatusCode> {
    let form = form.0;
    let mut controller = SubscribeForm::new();
    if !form.pathname.is_empty() {
        controller = controller.with_source_path(form.pathname.clone());
    }
    controller.on_input_change(FormField::Email, form.email);
    controller.on_input_change(FormField::FirstName, form.first_name);

    controller.submit(state.mailing_list_client.as_ref()).await;

    let page = SubscribePage::new(&state.site, Header::Page, &controller, &form.pathname);
    Ok(Html(page.render().map_err(e500)?))
}
