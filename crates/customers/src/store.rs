//! Customer persistence abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use orderdesk_core::{RecordId, StoreError, StoreResult};

use crate::customer::{Customer, CustomerId};

/// Store behind which customer records are persisted.
///
/// Lookups are plain reads and cannot fail in-band; the insert can be rejected
/// by the engine (e.g. a unique index on email) and surfaces that as a
/// [`StoreError`].
pub trait CustomerStore: Send + Sync {
    fn find_by_id(&self, id: CustomerId) -> Option<Customer>;
    fn find_by_email(&self, email: &str) -> Option<Customer>;
    /// Insert a new customer; the store assigns the id and creation timestamp.
    fn create(&self, name: &str, email: &str) -> StoreResult<Customer>;
}

impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    fn find_by_id(&self, id: CustomerId) -> Option<Customer> {
        (**self).find_by_id(id)
    }

    fn find_by_email(&self, email: &str) -> Option<Customer> {
        (**self).find_by_email(email)
    }

    fn create(&self, name: &str, email: &str) -> StoreResult<Customer> {
        (**self).create(name, email)
    }
}

/// In-memory customer store for tests/dev.
///
/// Enforces email uniqueness on insert, the way a relational engine would via
/// a unique index.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Seed an existing customer record (tests).
    pub fn insert(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.id, customer);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn find_by_id(&self, id: CustomerId) -> Option<Customer> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<Customer> {
        let map = self.inner.read().ok()?;
        map.values().find(|c| c.email == email).cloned()
    }

    fn create(&self, name: &str, email: &str) -> StoreResult<Customer> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("customer store lock poisoned"))?;

        if map.values().any(|c| c.email == email) {
            return Err(StoreError::constraint(format!(
                "email already exists: {email}"
            )));
        }

        let customer = Customer {
            id: CustomerId::new(RecordId::new()),
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        map.insert(customer.id, customer.clone());
        Ok(customer)
    }
}
