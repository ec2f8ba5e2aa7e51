//! Order persistence abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use orderdesk_core::{RecordId, StoreError, StoreResult};
use orderdesk_customers::Customer;

use crate::order::{Order, OrderId, OrderLine};

/// Store behind which orders are persisted.
pub trait OrderStore: Send + Sync {
    /// Insert an order with its full line-item list in one write; the store
    /// assigns the id and creation timestamp.
    fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> StoreResult<Order>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> StoreResult<Order> {
        (**self).create(customer, lines)
    }
}

/// In-memory order store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> StoreResult<Order> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("order store lock poisoned"))?;

        let order = Order {
            id: OrderId::new(RecordId::new()),
            customer_id: customer.id,
            lines,
            created_at: Utc::now(),
        };
        map.insert(order.id, order.clone());
        Ok(order)
    }
}
