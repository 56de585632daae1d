use tracing::info;

use crate::api::{Contact, ContactService};
use crate::error::ApiResult;

use super::FormState;
use super::create::parse_description;

/// Update-contact workflow. The contact is re-fetched on mount rather than
/// handed over from the list, and every edit goes through the structural
/// helpers on `Contact` so the nested identifiers survive untouched into the
/// PUT body.
pub struct UpdateContactForm {
    id: i64,
    contact: Option<Contact>,
    state: FormState,
}

impl UpdateContactForm {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            contact: None,
            state: FormState::Loading,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    /// Fetches the full contact with every nested sub-record expanded. A
    /// missing contact surfaces `NotFound` instead of leaving the form stuck
    /// in `Loading`.
    pub async fn load(&mut self, svc: &dyn ContactService, token: &str) -> ApiResult<()> {
        self.state = FormState::Loading;
        let contact = svc.get_contact(token, self.id).await?;
        self.contact = Some(contact);
        self.state = FormState::Editing;
        Ok(())
    }

    /// Replaces one field of the loaded contact, preserving everything else.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        let contact = self
            .contact
            .take()
            .ok_or_else(|| "contact not loaded yet".to_string())?;
        let updated = match field {
            "name" => contact.with_name(value),
            "address1" => contact.with_address_line1(value),
            "address2" => contact.with_address_line2(value),
            "city" => contact.with_city(value),
            "country" => contact.with_country(value),
            "country-code" => contact.with_country_code(value),
            "postal-code" => contact.with_postal_code(value),
            "phone-code" => contact.with_phone_country_code(value),
            "phone-desc" => match parse_description(value) {
                Ok(desc) => contact.with_phone_description(desc),
                Err(e) => {
                    self.contact = Some(contact);
                    return Err(e);
                }
            },
            "phone" => contact.with_phone_number(value),
            "email" => contact.with_email(value),
            "comment" => contact.with_comment(value),
            other => {
                self.contact = Some(contact);
                return Err(format!("unknown field: {}", other));
            }
        };
        self.contact = Some(updated);
        Ok(())
    }

    /// Sends the full representation, nested ids included. Success means the
    /// caller navigates back to the list; failure returns to editing with
    /// everything still in place.
    pub async fn submit(&mut self, svc: &dyn ContactService, token: &str) -> ApiResult<()> {
        let Some(contact) = self.contact.as_ref() else {
            return Ok(());
        };
        self.state = FormState::Submitting;
        match svc.update_contact(token, self.id, contact).await {
            Ok(()) => {
                info!("Updated contact {}", self.id);
                Ok(())
            }
            Err(e) => {
                self.state = FormState::Editing;
                Err(e)
            }
        }
    }
}
