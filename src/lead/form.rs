use serde::Serialize;

/// The three fields collected from a prospective customer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LeadForm {
    pub name: String,
    /// WhatsApp number with area code.
    #[serde(rename = "whatsapp")]
    pub contact: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Contact,
    Email,
}

impl LeadField {
    /// Maps an input's `name` attribute back to the field it edits.
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(LeadField::Name),
            "whatsapp" => Some(LeadField::Contact),
            "email" => Some(LeadField::Email),
            _ => None,
        }
    }

    pub fn input_name(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Contact => "whatsapp",
            LeadField::Email => "email",
        }
    }
}

impl LeadForm {
    pub fn new(name: impl Into<String>, contact: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            email: email.into(),
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Contact => &self.contact,
            LeadField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Contact => self.contact = value,
            LeadField::Email => self.email = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.contact, &self.email]
            .iter()
            .all(|value| !value.is_empty())
    }

    pub fn clear(&mut self) {
        *self = LeadForm::default();
    }
}
