//! Integration test for the cart store's observable contract.
//!
//! Drives one store through the full mutation surface from the consumer's
//! side: merging adds, quantity updates, no-op removes, clearing, snapshot
//! identity, server snapshots and subscription lifecycles.

use std::{cell::Cell, rc::Rc};

use anyhow::Result;
use rusty_money::{Money, iso::USD};

use blaze::prelude::*;

fn artwork(id: &str, minor: i64) -> Artwork {
    Artwork::new(
        id,
        format!("Artwork {id}"),
        Money::from_minor(minor, USD),
        ArtworkType::Digital,
    )
}

#[test]
fn store_honours_its_observable_contract() -> Result<()> {
    let store = CartStore::new(USD);

    let notifications = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&notifications);
    let subscription = store.subscribe(move || counter.set(counter.get() + 1));

    // Server-rendered pass reads a stable empty cart.
    let server = store.server_snapshot();
    assert!(server.is_empty());
    assert!(server.ptr_eq(&store.server_snapshot()));

    // Merging adds collapse to one line per artwork id.
    store.add_item_with_quantity(artwork("a", 1000), 2);
    store.add_item_with_quantity(artwork("a", 1000), 3);
    store.add_item(artwork("b", 2550));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(
        snapshot.get(&ArtworkId::from("a")).map(CartItem::quantity),
        Some(5)
    );
    assert_eq!(store.total_items(), 6);

    // Identity is stable until the next mutation.
    assert!(snapshot.ptr_eq(&store.snapshot()));

    // Quantity updates keep line positions; zero removes.
    store.set_quantity(&ArtworkId::from("a"), 2);
    store.set_quantity(&ArtworkId::from("b"), 0);

    let after_updates = store.snapshot();
    assert!(!snapshot.ptr_eq(&after_updates));
    assert_eq!(after_updates.len(), 1);
    assert_eq!(store.total_price()?, Money::from_minor(2000, USD));

    // Removing an id that was never added is a silent no-op.
    store.remove_item(&ArtworkId::from("never-added"));
    assert_eq!(store.snapshot().len(), 1);

    // Clearing resets to empty; the server snapshot never budged.
    store.clear();
    assert!(store.snapshot().is_empty());
    assert_eq!(store.total_items(), 0);
    assert!(server.ptr_eq(&store.server_snapshot()));

    // Every mutating call above notified exactly once.
    assert_eq!(notifications.get(), 7);

    subscription.unsubscribe();
    store.add_item(artwork("c", 500));
    assert_eq!(notifications.get(), 7, "unsubscribed listeners stay silent");

    // The boundary accessor reports a missing provider instead of panicking.
    assert!(StoreContext::empty().cart().is_err());

    Ok(())
}
