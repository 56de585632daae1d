use serde::{Deserialize, Serialize};

/// Wire representation of a contact. The remote API uses PascalCase keys and
/// `ID` for every identifier. Identifiers are server-assigned; they are `None`
/// before creation and omitted from serialized bodies when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Info")]
    pub info: ContactInfo,
    #[serde(rename = "Comment", default)]
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "InvoiceAddress", default)]
    pub invoice_address: Address,
    #[serde(rename = "DefaultPhone", default)]
    pub default_phone: Phone,
    #[serde(rename = "DefaultEmail", default)]
    pub default_email: Email,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "AddressLine1", default)]
    pub address_line1: String,
    #[serde(rename = "AddressLine2", default)]
    pub address_line2: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "CountryCode", default)]
    pub country_code: String,
    #[serde(rename = "PostalCode", default)]
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "CountryCode", default)]
    pub country_code: String,
    #[serde(rename = "Description", default)]
    pub description: PhoneDescription,
    #[serde(rename = "Number", default)]
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "EmailAddress", default)]
    pub email_address: String,
}

/// Phone description enum. The API carries it as a plain string, empty when
/// unset, so conversion goes through `String` rather than variant tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PhoneDescription {
    Mobile,
    Home,
    Work,
    #[default]
    Unset,
}

impl From<String> for PhoneDescription {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Mobile" => PhoneDescription::Mobile,
            "Home" => PhoneDescription::Home,
            "Work" => PhoneDescription::Work,
            _ => PhoneDescription::Unset,
        }
    }
}

impl From<PhoneDescription> for String {
    fn from(d: PhoneDescription) -> Self {
        d.as_str().to_string()
    }
}

impl PhoneDescription {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneDescription::Mobile => "Mobile",
            PhoneDescription::Home => "Home",
            PhoneDescription::Work => "Work",
            PhoneDescription::Unset => "",
        }
    }
}

/// Flat field set entered in the create form, assembled into the nested
/// payload shape on submit. Carries no identifiers at all: the server assigns
/// them on creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub postal_code: String,
    pub phone_country_code: String,
    pub phone_description: PhoneDescription,
    pub phone_number: String,
    pub email: String,
    pub comment: String,
}

impl ContactDraft {
    /// Maps the flat draft into the wire shape. All `id` fields stay `None`
    /// and are therefore absent from the serialized body.
    pub fn into_contact(self) -> Contact {
        Contact {
            id: None,
            info: ContactInfo {
                id: None,
                name: self.name,
                invoice_address: Address {
                    id: None,
                    address_line1: self.address_line1,
                    address_line2: self.address_line2,
                    city: self.city,
                    country: self.country,
                    country_code: self.country_code,
                    postal_code: self.postal_code,
                },
                default_phone: Phone {
                    id: None,
                    country_code: self.phone_country_code,
                    description: self.phone_description,
                    number: self.phone_number,
                },
                default_email: Email {
                    id: None,
                    email_address: self.email,
                },
            },
            comment: self.comment,
        }
    }
}

// Structural update helpers for the update form. Each replaces exactly one
// nested path and leaves everything else, identifiers included, untouched.
impl Contact {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    pub fn with_address_line1(mut self, v: impl Into<String>) -> Self {
        self.info.invoice_address.address_line1 = v.into();
        self
    }

    pub fn with_address_line2(mut self, v: impl Into<String>) -> Self {
        self.info.invoice_address.address_line2 = v.into();
        self
    }

    pub fn with_city(mut self, v: impl Into<String>) -> Self {
        self.info.invoice_address.city = v.into();
        self
    }

    pub fn with_country(mut self, v: impl Into<String>) -> Self {
        self.info.invoice_address.country = v.into();
        self
    }

    pub fn with_country_code(mut self, v: impl Into<String>) -> Self {
        self.info.invoice_address.country_code = v.into();
        self
    }

    pub fn with_postal_code(mut self, v: impl Into<String>) -> Self {
        self.info.invoice_address.postal_code = v.into();
        self
    }

    pub fn with_phone_country_code(mut self, v: impl Into<String>) -> Self {
        self.info.default_phone.country_code = v.into();
        self
    }

    pub fn with_phone_description(mut self, d: PhoneDescription) -> Self {
        self.info.default_phone.description = d;
        self
    }

    pub fn with_phone_number(mut self, v: impl Into<String>) -> Self {
        self.info.default_phone.number = v.into();
        self
    }

    pub fn with_email(mut self, v: impl Into<String>) -> Self {
        self.info.default_email.email_address = v.into();
        self
    }

    pub fn with_comment(mut self, v: impl Into<String>) -> Self {
        self.comment = v.into();
        self
    }
}
