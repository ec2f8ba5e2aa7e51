//! Customer registration: email-uniqueness check + insert.

use thiserror::Error;

use orderdesk_core::StoreError;

use crate::customer::Customer;
use crate::store::CustomerStore;

/// Registration failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterCustomerError {
    /// An input constraint was violated (empty name or email).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The email is already attached to an existing customer record.
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    /// The insert itself failed at the store.
    #[error("customer store failed: {0}")]
    Store(#[from] StoreError),
}

impl RegisterCustomerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Registers customers against an injected [`CustomerStore`].
#[derive(Debug)]
pub struct CustomerRegistration<S> {
    customers: S,
}

impl<S> CustomerRegistration<S>
where
    S: CustomerStore,
{
    pub fn new(customers: S) -> Self {
        Self { customers }
    }

    /// Register a new customer.
    ///
    /// Fails with [`RegisterCustomerError::DuplicateEmail`] when the email is
    /// already taken; on success exactly one customer record is persisted.
    pub fn register(&self, name: &str, email: &str) -> Result<Customer, RegisterCustomerError> {
        if name.trim().is_empty() {
            return Err(RegisterCustomerError::validation("name must not be empty"));
        }
        if email.trim().is_empty() {
            return Err(RegisterCustomerError::validation("email must not be empty"));
        }

        if self.customers.find_by_email(email).is_some() {
            return Err(RegisterCustomerError::DuplicateEmail(email.to_string()));
        }

        let customer = self.customers.create(name, email)?;
        tracing::info!("registered customer {} <{}>", customer.id, customer.email);
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCustomerStore;
    use orderdesk_core::StoreResult;
    use std::sync::Arc;

    #[test]
    fn register_persists_a_new_customer() {
        let store = Arc::new(InMemoryCustomerStore::new());
        let registration = CustomerRegistration::new(store.clone());

        let customer = registration
            .register("Ada Lovelace", "ada@example.com")
            .unwrap();

        assert_eq!(customer.name, "Ada Lovelace");
        assert_eq!(customer.email, "ada@example.com");
        assert_eq!(store.find_by_id(customer.id), Some(customer));
    }

    #[test]
    fn register_rejects_duplicate_email_and_keeps_existing_record() {
        let store = Arc::new(InMemoryCustomerStore::new());
        let registration = CustomerRegistration::new(store.clone());

        let first = registration
            .register("Ada Lovelace", "ada@example.com")
            .unwrap();

        let err = registration
            .register("Someone Else", "ada@example.com")
            .unwrap_err();
        assert_eq!(
            err,
            RegisterCustomerError::DuplicateEmail("ada@example.com".to_string())
        );

        // The original record is untouched and still the only one.
        assert_eq!(store.find_by_email("ada@example.com"), Some(first));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn register_rejects_empty_inputs_without_touching_the_store() {
        let store = Arc::new(InMemoryCustomerStore::new());
        let registration = CustomerRegistration::new(store.clone());

        assert!(matches!(
            registration.register("", "ada@example.com"),
            Err(RegisterCustomerError::Validation(_))
        ));
        assert!(matches!(
            registration.register("Ada Lovelace", "  "),
            Err(RegisterCustomerError::Validation(_))
        ));
        assert!(store.is_empty());
    }

    /// Store whose reads succeed but whose insert always fails.
    struct BrokenInsertStore;

    impl CustomerStore for BrokenInsertStore {
        fn find_by_id(&self, _id: crate::CustomerId) -> Option<Customer> {
            None
        }

        fn find_by_email(&self, _email: &str) -> Option<Customer> {
            None
        }

        fn create(&self, _name: &str, _email: &str) -> StoreResult<Customer> {
            Err(StoreError::unavailable("insert refused"))
        }
    }

    #[test]
    fn register_surfaces_store_failures() {
        let registration = CustomerRegistration::new(BrokenInsertStore);

        let err = registration
            .register("Ada Lovelace", "ada@example.com")
            .unwrap_err();
        assert_eq!(
            err,
            RegisterCustomerError::Store(StoreError::unavailable("insert refused"))
        );
    }
}
