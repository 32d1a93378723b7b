use std::sync::Arc;

use layout::Site;
use mailing_list_client::MailingListClient;

pub mod configuration;
pub mod domain;
pub mod layout;
pub mod mailing_list_client;
pub mod routes;
pub mod startup;
pub mod subscribe_form;
pub mod telemetry;
pub mod typography;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub mailing_list_client: Arc<MailingListClient>,
    pub site: Arc<Site>,
}
