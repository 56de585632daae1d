use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use contacts_cli::api::{Address, Contact, ContactDraft, ContactInfo, ContactService, Email, Phone};
use contacts_cli::error::{ApiError, ApiResult};

/// Contact matching the documented example scenario: Ann in Oslo.
pub fn ann() -> Contact {
    Contact {
        id: Some(1),
        info: ContactInfo {
            id: Some(10),
            name: "Ann".to_string(),
            invoice_address: Address {
                id: Some(11),
                address_line1: "Main St".to_string(),
                city: "Oslo".to_string(),
                country: "Norway".to_string(),
                ..Default::default()
            },
            default_phone: Phone {
                id: Some(12),
                number: "12345678".to_string(),
                ..Default::default()
            },
            default_email: Email {
                id: Some(13),
                email_address: "ann@x.com".to_string(),
            },
        },
        comment: String::new(),
    }
}

pub fn bob() -> Contact {
    Contact {
        id: Some(2),
        info: ContactInfo {
            id: Some(20),
            name: "Bob".to_string(),
            invoice_address: Address {
                id: Some(21),
                address_line1: "Side Rd".to_string(),
                city: "Bergen".to_string(),
                country: "Norway".to_string(),
                ..Default::default()
            },
            default_phone: Phone {
                id: Some(22),
                number: "98765432".to_string(),
                ..Default::default()
            },
            default_email: Email {
                id: Some(23),
                email_address: "bob@y.org".to_string(),
            },
        },
        comment: String::new(),
    }
}

/// In-memory stand-in for the remote API. Counts calls so tests can assert
/// exactly how many requests a view issued, and can be armed to fail the next
/// operation.
#[derive(Default)]
pub struct FakeContactService {
    pub contacts: Mutex<Vec<Contact>>,
    next_id: Mutex<i64>,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub last_update: Mutex<Option<Contact>>,
    fail_next: Mutex<Option<ApiError>>,
}

impl FakeContactService {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let next_id = contacts
            .iter()
            .filter_map(|c| c.id)
            .max()
            .unwrap_or(0)
            * 100
            + 100;
        Self {
            contacts: Mutex::new(contacts),
            next_id: Mutex::new(next_id),
            ..Default::default()
        }
    }

    pub fn fail_next_with(&self, error: ApiError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.fail_next.lock().unwrap().take()
    }

    fn assign_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

#[async_trait]
impl ContactService for FakeContactService {
    async fn list_contacts(&self, _token: &str) -> ApiResult<Vec<Contact>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn get_contact(&self, _token: &str, id: i64) -> ApiResult<Contact> {
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == Some(id))
            .cloned()
            .ok_or(ApiError::NotFound(id))
    }

    async fn create_contact(&self, _token: &str, draft: ContactDraft) -> ApiResult<Contact> {
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        let mut contact = draft.into_contact();
        contact.id = Some(self.assign_id());
        contact.info.id = Some(self.assign_id());
        contact.info.invoice_address.id = Some(self.assign_id());
        contact.info.default_phone.id = Some(self.assign_id());
        contact.info.default_email.id = Some(self.assign_id());
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn update_contact(&self, _token: &str, id: i64, contact: &Contact) -> ApiResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        *self.last_update.lock().unwrap() = Some(contact.clone());
        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter_mut().find(|c| c.id == Some(id)) {
            Some(slot) => {
                *slot = contact.clone();
                Ok(())
            }
            None => Err(ApiError::NotFound(id)),
        }
    }

    async fn delete_contact(&self, _token: &str, id: i64) -> ApiResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id != Some(id));
        if contacts.len() == before {
            return Err(ApiError::Status {
                status: 404,
                body: format!("contact {} does not exist", id),
            });
        }
        Ok(())
    }
}
