//! Product persistence abstraction.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use orderdesk_core::{StoreError, StoreResult};

use crate::product::{Product, ProductId};

/// A product's new absolute stock level, ready to be written back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Store behind which product records are persisted.
pub trait ProductStore: Send + Sync {
    /// Bulk lookup. Products are returned in the order their ids first appear
    /// in `ids`; unknown ids are omitted (callers detect that by count).
    fn find_all_by_id(&self, ids: &[ProductId]) -> StoreResult<Vec<Product>>;

    /// Write back absolute stock levels, all or nothing.
    fn update_quantities(&self, levels: &[StockLevel]) -> StoreResult<()>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn find_all_by_id(&self, ids: &[ProductId]) -> StoreResult<Vec<Product>> {
        (**self).find_all_by_id(ids)
    }

    fn update_quantities(&self, levels: &[StockLevel]) -> StoreResult<()> {
        (**self).update_quantities(levels)
    }
}

/// In-memory product store for tests/dev.
///
/// `update_quantities` applies under a single write lock: either every level
/// lands or none do, matching the minimal atomicity the core assumes of any
/// engine.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a product record (tests).
    pub fn insert(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id, product);
        }
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }
}

impl ProductStore for InMemoryProductStore {
    fn find_all_by_id(&self, ids: &[ProductId]) -> StoreResult<Vec<Product>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::unavailable("product store lock poisoned"))?;

        let mut seen = HashSet::with_capacity(ids.len());
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            if seen.insert(*id) {
                if let Some(product) = map.get(id) {
                    found.push(product.clone());
                }
            }
        }
        Ok(found)
    }

    fn update_quantities(&self, levels: &[StockLevel]) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("product store lock poisoned"))?;

        // Validate the whole batch before touching anything.
        for level in levels {
            if !map.contains_key(&level.product_id) {
                return Err(StoreError::missing(format!(
                    "product {}",
                    level.product_id
                )));
            }
        }

        for level in levels {
            if let Some(product) = map.get_mut(&level.product_id) {
                product.quantity_available = level.quantity;
            }
        }
        Ok(())
    }
}
