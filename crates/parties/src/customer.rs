use serde::Serialize;

use ordering_core::{CustomerId, Entity};

use crate::email::Email;
use crate::full_name::FullName;

/// Entity: Customer.
///
/// Identity is the `CustomerId`; name and email can be replaced without the
/// customer becoming someone else.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: FullName,
    email: Email,
}

impl Customer {
    pub fn new(name: FullName, email: Email) -> Self {
        Self::with_id(CustomerId::new(), name, email)
    }

    pub fn with_id(id: CustomerId, name: FullName, email: Email) -> Self {
        Self { id, name, email }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &FullName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn change_name(&mut self, name: FullName) {
        tracing::debug!(customer_id = %self.id, "customer name changed");
        self.name = name;
    }

    pub fn change_email(&mut self, email: Email) {
        tracing::debug!(customer_id = %self.id, "customer email changed");
        self.email = email;
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Customer {}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Customer {
        Customer::new(
            FullName::new("Luke", "Skywalker"),
            Email::new("luke.skywalker@starwars.com").unwrap(),
        )
    }

    #[test]
    fn exposes_name_and_email() {
        let customer = luke();
        assert_eq!(customer.name(), &FullName::new("Luke", "Skywalker"));
        assert_eq!(customer.email().as_str(), "luke.skywalker@starwars.com");
    }

    #[test]
    fn changes_keep_identity() {
        let mut customer = luke();
        let before = customer.clone();

        customer.change_name(FullName::new("Darth", "Vader"));
        customer.change_email(Email::new("vader@empire.gov").unwrap());

        assert_eq!(customer.name().to_string(), "Darth Vader");
        assert_eq!(customer.email().as_str(), "vader@empire.gov");
        assert_eq!(customer, before);
        assert_eq!(customer.id_typed(), before.id_typed());
    }

    #[test]
    fn same_attributes_different_customers() {
        assert_ne!(luke(), luke());
    }
}
