use tracing::info;

use crate::api::{Contact, ContactDraft, ContactService, PhoneDescription};
use crate::error::ApiResult;

use super::FormState;

/// Create-contact workflow: a flat set of primitive fields, assembled into
/// the nested payload shape only on submit.
pub struct CreateContactForm {
    draft: ContactDraft,
    state: FormState,
}

impl Default for CreateContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateContactForm {
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Field dispatch by name, as the fields come in from the shell.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        let d = &mut self.draft;
        match field {
            "name" => d.name = value.to_string(),
            "address1" => d.address_line1 = value.to_string(),
            "address2" => d.address_line2 = value.to_string(),
            "city" => d.city = value.to_string(),
            "country" => d.country = value.to_string(),
            "country-code" => d.country_code = value.to_string(),
            "postal-code" => d.postal_code = value.to_string(),
            "phone-code" => d.phone_country_code = value.to_string(),
            "phone-desc" => d.phone_description = parse_description(value)?,
            "phone" => d.phone_number = value.to_string(),
            "email" => d.email = value.to_string(),
            "comment" => d.comment = value.to_string(),
            other => return Err(format!("unknown field: {}", other)),
        }
        self.state = FormState::Editing;
        Ok(())
    }

    /// Submits the draft. Success resets every field to empty; failure keeps
    /// the entered values so nothing has to be retyped.
    pub async fn submit(
        &mut self,
        svc: &dyn ContactService,
        token: &str,
    ) -> ApiResult<Contact> {
        self.state = FormState::Submitting;
        match svc.create_contact(token, self.draft.clone()).await {
            Ok(contact) => {
                info!("Created contact {:?}", contact.id);
                self.draft = ContactDraft::default();
                self.state = FormState::Idle;
                Ok(contact)
            }
            Err(e) => {
                self.state = FormState::Editing;
                Err(e)
            }
        }
    }
}

pub(super) fn parse_description(value: &str) -> Result<PhoneDescription, String> {
    match value.to_lowercase().as_str() {
        "mobile" => Ok(PhoneDescription::Mobile),
        "home" => Ok(PhoneDescription::Home),
        "work" => Ok(PhoneDescription::Work),
        "" | "unset" => Ok(PhoneDescription::Unset),
        other => Err(format!("unknown phone description: {}", other)),
    }
}
