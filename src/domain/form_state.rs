use super::SubscriptionResult;

/// Input slots of the subscription form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    FirstName,
}

/// What the subscription form holds while a visitor interacts with it.
///
/// Values are kept exactly as typed: nothing is trimmed or validated.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub email: String,
    pub first_name: String,
    pub result: Option<SubscriptionResult>,
}

impl FormState {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => self.email = value,
            FormField::FirstName => self.first_name = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::FirstName => &self.first_name,
        }
    }
}
