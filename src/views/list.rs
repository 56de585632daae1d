use tracing::{debug, info};

use crate::api::{Contact, ContactService};
use crate::error::ApiResult;

/// View-local state for the contact list: the fetched collection, the
/// currently expanded row, and the filter text. Nothing outside the view
/// mutates this state.
#[derive(Default)]
pub struct ContactListView {
    contacts: Vec<Contact>,
    expanded_id: Option<i64>,
    filter_text: String,
}

impl ContactListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the collection once. On failure the list stays empty and the
    /// error is handed back to the caller to surface.
    pub async fn load(&mut self, svc: &dyn ContactService, token: &str) -> ApiResult<()> {
        match svc.list_contacts(token).await {
            Ok(contacts) => {
                debug!("Fetched {} contacts", contacts.len());
                self.contacts = contacts;
                Ok(())
            }
            Err(e) => {
                self.contacts.clear();
                Err(e)
            }
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: i64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == Some(id))
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Contacts matching the current filter, in fetch order.
    pub fn visible(&self) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| matches_filter(c, &self.filter_text))
            .collect()
    }

    pub fn expanded_id(&self) -> Option<i64> {
        self.expanded_id
    }

    /// Expands the given contact's detail, or collapses it when it is already
    /// the expanded one.
    pub fn toggle(&mut self, id: i64) {
        self.expanded_id = if self.expanded_id == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Issues a single DELETE and, on success, removes the contact from local
    /// state without a re-fetch. On failure the list is left unchanged.
    pub async fn delete(
        &mut self,
        svc: &dyn ContactService,
        token: &str,
        id: i64,
    ) -> ApiResult<()> {
        svc.delete_contact(token, id).await?;
        self.contacts.retain(|c| c.id != Some(id));
        if self.expanded_id == Some(id) {
            self.expanded_id = None;
        }
        info!("Deleted contact {}", id);
        Ok(())
    }
}

/// Client-side substring filter: a contact matches when ANY of name, email
/// address, phone number, address line 1, city, or country contains the
/// filter text. Case-insensitive except the phone number, which has no case.
pub fn matches_filter(contact: &Contact, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    let info = &contact.info;
    let address = &info.invoice_address;

    info.name.to_lowercase().contains(&needle)
        || info.default_email.email_address.to_lowercase().contains(&needle)
        || info.default_phone.number.contains(filter)
        || address.address_line1.to_lowercase().contains(&needle)
        || address.city.to_lowercase().contains(&needle)
        || address.country.to_lowercase().contains(&needle)
}
