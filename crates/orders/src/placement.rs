//! Order placement: the order-creation transaction.
//!
//! One call runs `Validating → Persisting → CommittingStock → Done`. Every
//! validation failure aborts before any write; a persistence failure leaves
//! state untouched; a stock-commit failure leaves the order persisted with
//! stock not yet decremented (acknowledged partial-failure window, reported as
//! [`CreateOrderError::StockCommitFailed`] and reconciled externally).

use std::collections::HashSet;

use thiserror::Error;

use orderdesk_core::StoreError;
use orderdesk_customers::{CustomerId, CustomerStore};
use orderdesk_products::{ProductId, ProductStore, StockLevel};

use crate::order::{Order, OrderLine, RequestedItem};
use crate::store::OrderStore;

/// Order-creation failure.
///
/// All kinds are recoverable and surfaced to the caller as a rejected
/// operation; no retries happen here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateOrderError {
    /// An input constraint was violated (zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The same product id appears more than once in the request.
    #[error("product {0} appears more than once in the request")]
    DuplicateProduct(ProductId),

    /// The requested customer does not exist.
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// The bulk product lookup itself failed.
    #[error("product lookup failed: {0}")]
    ProductLookupFailed(#[source] StoreError),

    /// At least one requested product does not exist. Detected by count, so
    /// the missing id is not named.
    #[error("at least one requested product does not exist")]
    ProductNotFound,

    /// A product's available quantity does not cover the requested quantity.
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Persisting the order failed; no stock had been touched yet.
    #[error("order persistence failed: {0}")]
    OrderPersistenceFailed(#[source] StoreError),

    /// The order was persisted but the stock write-back failed.
    #[error("stock commit failed after order persistence: {0}")]
    StockCommitFailed(#[source] StoreError),
}

impl CreateOrderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Places orders against injected customer, product, and order stores.
#[derive(Debug)]
pub struct OrderPlacement<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderPlacement<C, P, O>
where
    C: CustomerStore,
    P: ProductStore,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Create an order for `customer_id` covering `requested`.
    ///
    /// Steps are strictly sequential: request checks, customer resolution,
    /// bulk product resolution, stock validation (in bulk-lookup order, first
    /// shortfall wins), order persistence, stock commit. The returned order
    /// carries one line per requested product with the unit price captured
    /// from the product.
    pub fn create_order(
        &self,
        customer_id: CustomerId,
        requested: &[RequestedItem],
    ) -> Result<Order, CreateOrderError> {
        // Request checks happen before any store call.
        let mut seen = HashSet::with_capacity(requested.len());
        for item in requested {
            if item.quantity == 0 {
                return Err(CreateOrderError::validation(format!(
                    "requested quantity for product {} must be positive",
                    item.product_id
                )));
            }
            if !seen.insert(item.product_id) {
                return Err(CreateOrderError::DuplicateProduct(item.product_id));
            }
        }

        let customer = self
            .customers
            .find_by_id(customer_id)
            .ok_or(CreateOrderError::CustomerNotFound(customer_id))?;

        let ids: Vec<ProductId> = requested.iter().map(|item| item.product_id).collect();
        let products = self
            .products
            .find_all_by_id(&ids)
            .map_err(CreateOrderError::ProductLookupFailed)?;

        // Count equality is the whole "all products exist" check; it cannot
        // name the missing id.
        if products.len() != ids.len() {
            return Err(CreateOrderError::ProductNotFound);
        }

        let mut lines = Vec::with_capacity(products.len());
        let mut levels = Vec::with_capacity(products.len());
        for product in &products {
            let quantity = requested
                .iter()
                .find(|item| item.product_id == product.id)
                .map(|item| item.quantity)
                .ok_or(CreateOrderError::ProductNotFound)?;

            if product.quantity_available < quantity {
                return Err(CreateOrderError::InsufficientStock {
                    product_id: product.id,
                    requested: quantity,
                    available: product.quantity_available,
                });
            }

            lines.push(OrderLine {
                product_id: product.id,
                quantity,
                unit_price: product.unit_price,
            });
            // Remaining quantity, carried forward but not yet committed.
            levels.push(StockLevel {
                product_id: product.id,
                quantity: product.quantity_available - quantity,
            });
        }

        let order = self
            .orders
            .create(&customer, lines)
            .map_err(CreateOrderError::OrderPersistenceFailed)?;

        if let Err(e) = self.products.update_quantities(&levels) {
            tracing::warn!(
                "order {} persisted but stock commit failed: {e}",
                order.id
            );
            return Err(CreateOrderError::StockCommitFailed(e));
        }

        tracing::info!(
            "created order {} for customer {} with {} line(s)",
            order.id,
            customer.id,
            order.lines.len()
        );
        Ok(order)
    }
}
