/// Status message returned by the mailing-list provider after a signup.
/// The message may contain HTML markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionResult {
    pub message: String,
}

impl SubscriptionResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
