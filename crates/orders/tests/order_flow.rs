//! End-to-end scenarios for the order-placement core.
//!
//! Wires registration and placement together over shared in-memory stores,
//! the way an outer layer would: `Arc`-shared stores injected into both
//! services.

use std::sync::Arc;

use orderdesk_core::RecordId;
use orderdesk_customers::{CustomerId, CustomerRegistration, InMemoryCustomerStore};
use orderdesk_orders::{CreateOrderError, InMemoryOrderStore, OrderPlacement, RequestedItem};
use orderdesk_products::{InMemoryProductStore, Product, ProductId};

struct World {
    customers: Arc<InMemoryCustomerStore>,
    products: Arc<InMemoryProductStore>,
    orders: Arc<InMemoryOrderStore>,
    registration: CustomerRegistration<Arc<InMemoryCustomerStore>>,
    placement: OrderPlacement<
        Arc<InMemoryCustomerStore>,
        Arc<InMemoryProductStore>,
        Arc<InMemoryOrderStore>,
    >,
}

fn setup() -> World {
    orderdesk_observability::init();

    let customers = Arc::new(InMemoryCustomerStore::new());
    let products = Arc::new(InMemoryProductStore::new());
    let orders = Arc::new(InMemoryOrderStore::new());

    World {
        registration: CustomerRegistration::new(customers.clone()),
        placement: OrderPlacement::new(customers.clone(), products.clone(), orders.clone()),
        customers,
        products,
        orders,
    }
}

fn seed_product(world: &World, name: &str, price: u64, quantity: u32) -> Product {
    let product = Product {
        id: ProductId::new(RecordId::new()),
        name: name.to_string(),
        unit_price: price,
        quantity_available: quantity,
    };
    world.products.insert(product.clone());
    product
}

#[test]
fn registered_customer_places_an_order_and_stock_follows() {
    let world = setup();
    let customer = world
        .registration
        .register("Grace Hopper", "grace@example.com")
        .unwrap();
    let keyboard = seed_product(&world, "keyboard", 12_000, 10);
    let mouse = seed_product(&world, "mouse", 4_500, 2);

    let order = world
        .placement
        .create_order(
            customer.id,
            &[
                RequestedItem {
                    product_id: keyboard.id,
                    quantity: 3,
                },
                RequestedItem {
                    product_id: mouse.id,
                    quantity: 2,
                },
            ],
        )
        .unwrap();

    assert_eq!(order.lines.len(), 2);
    assert_eq!(world.orders.get(order.id), Some(order));
    assert_eq!(
        world.products.get(keyboard.id).unwrap().quantity_available,
        7
    );
    assert_eq!(world.products.get(mouse.id).unwrap().quantity_available, 0);
}

#[test]
fn over_ordering_fails_and_stock_is_untouched() {
    let world = setup();
    let customer = world
        .registration
        .register("Grace Hopper", "grace@example.com")
        .unwrap();
    let mouse = seed_product(&world, "mouse", 4_500, 2);

    let err = world
        .placement
        .create_order(
            customer.id,
            &[RequestedItem {
                product_id: mouse.id,
                quantity: 5,
            }],
        )
        .unwrap_err();

    assert_eq!(
        err,
        CreateOrderError::InsufficientStock {
            product_id: mouse.id,
            requested: 5,
            available: 2,
        }
    );
    assert!(world.orders.is_empty());
    assert_eq!(world.products.get(mouse.id).unwrap().quantity_available, 2);
}

#[test]
fn unknown_customer_cannot_order() {
    let world = setup();
    let keyboard = seed_product(&world, "keyboard", 12_000, 10);

    let ghost = CustomerId::new(RecordId::new());
    let err = world
        .placement
        .create_order(
            ghost,
            &[RequestedItem {
                product_id: keyboard.id,
                quantity: 1,
            }],
        )
        .unwrap_err();

    assert_eq!(err, CreateOrderError::CustomerNotFound(ghost));
    assert!(world.orders.is_empty());
    assert_eq!(
        world.products.get(keyboard.id).unwrap().quantity_available,
        10
    );
}

#[test]
fn two_customers_draw_down_the_same_product() {
    let world = setup();
    let first = world
        .registration
        .register("Grace Hopper", "grace@example.com")
        .unwrap();
    let second = world
        .registration
        .register("Ada Lovelace", "ada@example.com")
        .unwrap();
    assert_eq!(world.customers.len(), 2);

    let keyboard = seed_product(&world, "keyboard", 12_000, 5);

    world
        .placement
        .create_order(
            first.id,
            &[RequestedItem {
                product_id: keyboard.id,
                quantity: 3,
            }],
        )
        .unwrap();

    // The second order sees the decremented level: only 2 left.
    let err = world
        .placement
        .create_order(
            second.id,
            &[RequestedItem {
                product_id: keyboard.id,
                quantity: 3,
            }],
        )
        .unwrap_err();
    assert_eq!(
        err,
        CreateOrderError::InsufficientStock {
            product_id: keyboard.id,
            requested: 3,
            available: 2,
        }
    );

    world
        .placement
        .create_order(
            second.id,
            &[RequestedItem {
                product_id: keyboard.id,
                quantity: 2,
            }],
        )
        .unwrap();

    assert_eq!(world.orders.len(), 2);
    assert_eq!(
        world.products.get(keyboard.id).unwrap().quantity_available,
        0
    );
}
