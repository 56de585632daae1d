#[derive(Clone, Default)]
pub struct CommandProcessor;

impl CommandProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_command(&self, text: &str) -> Option<(String, Vec<String>)> {
        let parts: Vec<&str> = text.trim().split_whitespace().collect();

        if parts.is_empty() {
            return None;
        }

        let command = parts[0].to_lowercase();
        let args: Vec<String> = parts[1..].iter().map(|s| s.to_string()).collect();

        Some((command, args))
    }

    pub fn process(&self, command: &str, args: &[String]) -> CommandResult {
        match command {
            "help" | "h" | "?" => self.cmd_help(),
            "login" => CommandResult::Login,
            "logout" => CommandResult::Logout,
            "token" => match args.first() {
                Some(token) => CommandResult::Token(token.clone()),
                None => CommandResult::Error("Usage: token <access-token>".to_string()),
            },
            "list" => CommandResult::List,
            "filter" => CommandResult::Filter(args.join(" ")),
            "show" => self.cmd_id(args, "show", CommandResult::Show),
            "delete" => self.cmd_id(args, "delete", CommandResult::Delete),
            "new" => CommandResult::New,
            "edit" => self.cmd_id(args, "edit", CommandResult::Edit),
            "set" => self.cmd_set(args),
            "submit" => CommandResult::Submit,
            "cancel" => CommandResult::Cancel,
            "quit" | "exit" | "q" => CommandResult::Quit,
            _ => CommandResult::Error(format!("Unknown command: {}", command)),
        }
    }

    fn cmd_help(&self) -> CommandResult {
        CommandResult::Success(
            r#"Available commands:
- help: Show this help message
- login: Show the provider sign-in URL
- token <value>: Store the access token obtained from the provider
- logout: Sign out
- list: Fetch and show the contact list
- filter <text>: Filter the list (empty to clear)
- show <id>: Expand or collapse a contact's details
- delete <id>: Delete a contact
- new: Start creating a contact
- edit <id>: Start updating a contact
- set <field> <value>: Set a form field (name, address1, address2, city,
  country, country-code, postal-code, phone-code, phone-desc, phone, email,
  comment)
- submit: Submit the current form
- cancel: Abandon the current form and return to the list
- quit: Exit
"#
            .to_string(),
        )
    }

    fn cmd_id(
        &self,
        args: &[String],
        name: &str,
        make: fn(i64) -> CommandResult,
    ) -> CommandResult {
        match args.first().and_then(|a| a.parse::<i64>().ok()) {
            Some(id) => make(id),
            None => CommandResult::Error(format!("Usage: {} <contact-id>", name)),
        }
    }

    fn cmd_set(&self, args: &[String]) -> CommandResult {
        if args.is_empty() {
            return CommandResult::Error("Usage: set <field> <value>".to_string());
        }
        CommandResult::Set(args[0].clone(), args[1..].join(" "))
    }
}

#[derive(Debug, Clone)]
pub enum CommandResult {
    Success(String),
    Error(String),
    Login,
    Logout,
    Token(String),
    List,
    Filter(String),
    Show(i64),
    Delete(i64),
    New,
    Edit(i64),
    Set(String, String),
    Submit,
    Cancel,
    Quit,
}
