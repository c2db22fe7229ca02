//! CustomerInfo - who the estimate is for.

use serde::{Deserialize, Serialize};

use crate::config::EMPTY_FIELD;

/// Customer details printed at the top of the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInfo {
    /// Customer name.
    pub name: String,
    /// WhatsApp or phone number.
    pub contact_number: String,
}

impl CustomerInfo {
    /// Create customer info from a name and a contact number.
    pub fn new(name: impl Into<String>, contact_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_number: contact_number.into(),
        }
    }

    /// Name for display, `-` when empty.
    pub fn display_name(&self) -> &str {
        or_placeholder(&self.name)
    }

    /// Contact number for display, `-` when empty.
    pub fn display_contact(&self) -> &str {
        or_placeholder(&self.contact_number)
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}
