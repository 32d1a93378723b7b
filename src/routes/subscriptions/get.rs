use askama_axum::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use super::SubscribePage;
use crate::layout::Header;
use crate::subscribe_form::SubscribeForm;
use crate::utils::e500;
use crate::AppState;

pub async fn subscribe_form(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let pathname = state.site.path_prefix.join("subscriptions");
    let page = SubscribePage::new(&state.site, Header::Page, &SubscribeForm::new(), &pathname);
    Ok(Html(page.render().map_err(e500)?))
}
