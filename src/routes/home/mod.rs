use askama_axum::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use crate::layout::Header;
use crate::routes::SubscribePage;
use crate::subscribe_form::SubscribeForm;
use crate::utils::e500;
use crate::AppState;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let pathname = state.site.path_prefix.root_path();
    let page = SubscribePage::new(&state.site, Header::Home, &SubscribeForm::new(), &pathname);
    Ok(Html(page.render().map_err(e500)?))
}
