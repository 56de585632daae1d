mod command;

pub use command::{CommandProcessor, CommandResult};

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::api::{Contact, ContactApi};
use crate::error::Result;
use crate::session::{Session, TokenSource};
use crate::views::{ContactListView, CreateContactForm, UpdateContactForm};

/// Current view. Exactly one canonical workflow per view; navigation swaps
/// the whole route, so no state leaks from one view into the next.
enum Route {
    List(ContactListView),
    Create(CreateContactForm),
    Update(UpdateContactForm),
}

/// Line-oriented navigation shell. Owns the session and the API client,
/// mounts one view at a time, and feeds parsed commands into it. Each command
/// runs to completion before the next line is read: there is no request
/// deduplication and no cancellation.
pub struct Shell {
    session: Session,
    api: ContactApi,
    processor: CommandProcessor,
    route: Route,
}

impl Shell {
    pub fn new(session: Session, api: ContactApi) -> Self {
        Self {
            session,
            api,
            processor: CommandProcessor::new(),
            route: Route::List(ContactListView::new()),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("My Contacts");
        if self.session.is_authenticated() {
            self.mount_list().await;
        } else {
            println!("Not signed in. Use `login` to get started, `help` for commands.");
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let Some((command, args)) = self.processor.parse_command(&line) else {
                continue;
            };

            debug!("Command: {} {:?}", command, args);

            match self.processor.process(&command, &args) {
                CommandResult::Quit => break,
                result => self.handle(result).await,
            }
        }

        Ok(())
    }

    async fn handle(&mut self, result: CommandResult) {
        match result {
            CommandResult::Success(text) => println!("{}", text),
            CommandResult::Error(text) => println!("Error: {}", text),
            CommandResult::Login => self.cmd_login(),
            CommandResult::Logout => self.cmd_logout(),
            CommandResult::Token(token) => {
                self.session.set_token(token);
                println!("Token stored.");
            }
            CommandResult::List => self.mount_list().await,
            CommandResult::Filter(text) => self.cmd_filter(text),
            CommandResult::Show(id) => self.cmd_show(id),
            CommandResult::Delete(id) => self.cmd_delete(id).await,
            CommandResult::New => {
                self.route = Route::Create(CreateContactForm::new());
                println!("Create Contact: use `set <field> <value>`, then `submit`.");
            }
            CommandResult::Edit(id) => self.mount_update(id).await,
            CommandResult::Set(field, value) => self.cmd_set(&field, &value),
            CommandResult::Submit => self.cmd_submit().await,
            CommandResult::Cancel => self.mount_list().await,
            CommandResult::Quit => {}
        }
    }

    fn cmd_login(&self) {
        if self.session.is_authenticated() {
            println!("Already signed in.");
            return;
        }
        println!("Open this URL in a browser to sign in:");
        println!("{}", self.session.sign_in_url());
        println!("Then store the token with `token <value>`.");
    }

    fn cmd_logout(&self) {
        self.session.sign_out();
        println!("Signed out. End the provider session at:");
        println!("{}", self.session.sign_out_url());
    }

    async fn token(&self) -> Option<String> {
        match self.session.access_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                println!("Error: {}", e);
                None
            }
        }
    }

    /// Mounting the list view re-fetches; nothing is carried over from a
    /// previous route.
    async fn mount_list(&mut self) {
        let mut view = ContactListView::new();
        if let Some(token) = self.token().await {
            match view.load(&self.api, &token).await {
                Ok(()) => render_list(&view),
                Err(e) => println!("Error: {}", e),
            }
        }
        self.route = Route::List(view);
    }

    async fn mount_update(&mut self, id: i64) {
        let Some(token) = self.token().await else {
            return;
        };
        let mut form = UpdateContactForm::new(id);
        println!("Loading...");
        match form.load(&self.api, &token).await {
            Ok(()) => {
                println!("Update Contact {}: use `set <field> <value>`, then `submit`.", id);
                if let Some(contact) = form.contact() {
                    render_contact_detail(contact);
                }
                self.route = Route::Update(form);
            }
            Err(e) => println!("Error: {}", e),
        }
    }

    fn cmd_filter(&mut self, text: String) {
        match &mut self.route {
            Route::List(view) => {
                view.set_filter(text);
                render_list(view);
            }
            _ => println!("Error: filter only applies to the contact list"),
        }
    }

    fn cmd_show(&mut self, id: i64) {
        match &mut self.route {
            Route::List(view) => {
                view.toggle(id);
                render_list(view);
            }
            _ => println!("Error: show only applies to the contact list"),
        }
    }

    async fn cmd_delete(&mut self, id: i64) {
        let Some(token) = self.token().await else {
            return;
        };
        match &mut self.route {
            Route::List(view) => match view.delete(&self.api, &token, id).await {
                Ok(()) => {
                    println!("Contact deleted successfully!");
                    render_list(view);
                }
                Err(e) => println!("Error: {}", e),
            },
            _ => println!("Error: delete only applies to the contact list"),
        }
    }

    fn cmd_set(&mut self, field: &str, value: &str) {
        let outcome = match &mut self.route {
            Route::Create(form) => form.set_field(field, value),
            Route::Update(form) => form.set_field(field, value),
            Route::List(_) => Err("no form open; use `new` or `edit <id>`".to_string()),
        };
        if let Err(e) = outcome {
            println!("Error: {}", e);
        }
    }

    async fn cmd_submit(&mut self) {
        let Some(token) = self.token().await else {
            return;
        };
        let mut back_to_list = false;
        match &mut self.route {
            Route::Create(form) => match form.submit(&self.api, &token).await {
                Ok(contact) => {
                    let id = contact.id.unwrap_or_default();
                    println!("Contact created successfully! (id {})", id);
                }
                Err(e) => println!("Error: {}", e),
            },
            Route::Update(form) => match form.submit(&self.api, &token).await {
                Ok(()) => back_to_list = true,
                Err(e) => println!("Error: {}", e),
            },
            Route::List(_) => println!("Error: no form open; use `new` or `edit <id>`"),
        }
        if back_to_list {
            self.mount_list().await;
        }
    }
}

fn render_list(view: &ContactListView) {
    println!("Contacts List");
    let visible = view.visible();
    if visible.is_empty() {
        println!("No contacts found.");
        return;
    }
    for contact in visible {
        let info = &contact.info;
        let id = contact.id.unwrap_or_default();
        println!("[{}] {} - {}", id, info.name, info.default_email.email_address);
        if view.expanded_id() == contact.id {
            render_contact_detail(contact);
        }
    }
}

fn render_contact_detail(contact: &Contact) {
    let address = &contact.info.invoice_address;
    let phone = &contact.info.default_phone;
    println!(
        "    Address: {}, {}, {}, {}",
        address.address_line1, address.postal_code, address.city, address.country
    );
    println!("    Phone: {} {}", phone.country_code, phone.number);
    println!("    Email: {}", contact.info.default_email.email_address);
    if !contact.comment.is_empty() {
        println!("    Comment: {}", contact.comment);
    }
}
