pub mod create;
pub mod list;
pub mod update;

pub use create::CreateContactForm;
pub use list::ContactListView;
pub use update::UpdateContactForm;

/// Form lifecycle. `Loading` only occurs on the update form, which fetches
/// the contact before anything can be edited. There is no dirty check: once
/// editing, submit is always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Loading,
    Editing,
    Submitting,
}
