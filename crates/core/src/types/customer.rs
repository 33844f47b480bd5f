//! Customer contact details attached to an order.

use serde::{Deserialize, Serialize};

/// Customer record captured at checkout.
///
/// All three fields are free text. The only rule is that none of them is
/// blank; phone numbers and addresses are not format-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer's name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address.
    pub address: String,
}

impl Customer {
    /// Whether every field has non-whitespace content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.address]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.address.clear();
    }
}
