mod form_state;
mod path_prefix;
mod subscription_request;
mod subscription_result;

pub use form_state::{FormField, FormState};
pub use path_prefix::PathPrefix;
pub use subscription_request::SubscriptionRequest;
pub use subscription_result::SubscriptionResult;
