//! Cart store
//!
//! Process-local observable store over a single [`Cart`]. The store is the
//! only writer: all mutation goes through its operations and all reads go
//! through [`CartStore::snapshot`] or [`CartStore::server_snapshot`], which
//! preserves the snapshot identity contract the rendering layer relies on to
//! skip redundant re-renders.
//!
//! The store is single-threaded by design (one UI event loop, no concurrent
//! writer). Mutations run to completion before listeners are invoked, and the
//! internal borrow is released first, so a listener may re-read or even
//! re-mutate the store re-entrantly.

use std::{
    cell::RefCell,
    fmt,
    ops::Deref,
    rc::{Rc, Weak},
};

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    artworks::{Artwork, ArtworkId},
    cart::Cart,
    pricing::TotalPriceError,
};

type ListenerFn = Rc<dyn Fn()>;

/// Token identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct Inner {
    snapshot: Rc<Cart>,
    server_snapshot: Rc<Cart>,
    listeners: Vec<(ListenerId, ListenerFn)>,
    next_listener: u64,
}

/// Point-in-time view of the cart.
///
/// Snapshots are identity-stable: two snapshots taken with no mutating call
/// in between share the same allocation ([`CartSnapshot::ptr_eq`]), and every
/// mutating call installs a fresh allocation, even when the contents end up
/// unchanged.
#[derive(Debug, Clone)]
pub struct CartSnapshot(Rc<Cart>);

impl CartSnapshot {
    /// Whether two snapshots are the same point-in-time allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for CartSnapshot {
    type Target = Cart;

    fn deref(&self) -> &Cart {
        &self.0
    }
}

/// Observable cart store.
///
/// Cheap to clone; clones are handles to the same underlying cart, which is
/// how the store is threaded through the rendering layer. Independent stores
/// (for tests, or separate sessions) come from separate [`CartStore::new`]
/// calls.
///
/// No store operation fails: invalid input (unknown artwork id, zero add
/// quantity, mismatched currency) is a silent no-op. Every mutating call
/// still notifies listeners exactly once, so caller-side state stays
/// consistent.
#[derive(Clone)]
pub struct CartStore {
    inner: Rc<RefCell<Inner>>,
}

impl CartStore {
    /// Create an empty store for the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                snapshot: Rc::new(Cart::new(currency)),
                server_snapshot: Rc::new(Cart::new(currency)),
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// Register a listener invoked after every mutating call.
    ///
    /// The returned [`Subscription`] deregisters the listener when dropped
    /// or explicitly [`Subscription::unsubscribe`]d; other subscriptions are
    /// unaffected.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_listener);

        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Current cart contents.
    ///
    /// Returns the same allocation as the previous call unless a mutating
    /// call happened in between.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot(Rc::clone(&self.inner.borrow().snapshot))
    }

    /// Fixed empty cart for render passes without live client state.
    ///
    /// Always the same allocation, distinct from the live snapshot.
    #[must_use]
    pub fn server_snapshot(&self) -> CartSnapshot {
        CartSnapshot(Rc::clone(&self.inner.borrow().server_snapshot))
    }

    /// Add one unit of an artwork, merging into an existing line for the
    /// same artwork id.
    pub fn add_item(&self, artwork: Artwork) {
        self.add_item_with_quantity(artwork, 1);
    }

    /// Add `quantity` units of an artwork, merging into an existing line
    /// for the same artwork id. Zero quantity and currency mismatches are
    /// discarded silently.
    pub fn add_item_with_quantity(&self, artwork: Artwork, quantity: u32) {
        self.mutate(|cart| {
            if quantity == 0 {
                debug!(artwork = %artwork.id, "ignoring zero-quantity add");
                return;
            }

            if let Err(error) = cart.add(artwork, quantity) {
                warn!(%error, "discarding cart add");
            }
        });
    }

    /// Delete the line for the given artwork id; an unknown id is a no-op
    /// that still notifies.
    pub fn remove_item(&self, id: &ArtworkId) {
        self.mutate(|cart| cart.remove(id));
    }

    /// Replace the quantity of the line for the given artwork id, keeping
    /// its position. Zero removes the line; an unknown id is a no-op.
    pub fn set_quantity(&self, id: &ArtworkId, quantity: u32) {
        self.mutate(|cart| cart.set_quantity(id, quantity));
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.mutate(Cart::clear);
    }

    /// Sum of all line quantities in the current snapshot.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.snapshot().total_items()
    }

    /// Total price of the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if there was a money arithmetic or
    /// currency mismatch error.
    pub fn total_price(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        self.snapshot().total_price()
    }

    // Applies a mutation copy-on-write, then notifies every listener.
    //
    // The listener list is cloned out and the borrow released before any
    // callback runs, so callbacks may re-enter the store.
    fn mutate(&self, f: impl FnOnce(&mut Cart)) {
        let listeners: SmallVec<[ListenerFn; 8]> = {
            let mut inner = self.inner.borrow_mut();
            let mut cart = Cart::clone(&inner.snapshot);

            f(&mut cart);
            inner.snapshot = Rc::new(cart);

            inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        };

        for listener in &listeners {
            listener();
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();

        f.debug_struct("CartStore")
            .field("lines", &inner.snapshot.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Registration handle returned by [`CartStore::subscribe`].
///
/// The listener stays registered for the lifetime of this handle and is
/// deregistered on drop.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: ListenerId,
}

impl Subscription {
    /// Deregister the listener now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };

        if let Ok(mut guard) = inner.try_borrow_mut() {
            guard.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Error returned when the cart store is read outside its provider's scope.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cart store accessed outside of its provider")]
pub struct MissingStoreError;

/// Rendering-layer context that may carry the application's cart store.
///
/// Whether a missing store is a fatal misconfiguration is the caller's
/// decision; the accessor only reports it.
#[derive(Debug, Clone, Default)]
pub struct StoreContext {
    store: Option<CartStore>,
}

impl StoreContext {
    /// Context with a provided store.
    #[must_use]
    pub fn provide(store: CartStore) -> Self {
        Self { store: Some(store) }
    }

    /// Context without a store, outside any provider.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The provided store.
    ///
    /// # Errors
    ///
    /// Returns [`MissingStoreError`] when no store was provided.
    pub fn cart(&self) -> Result<&CartStore, MissingStoreError> {
        self.store.as_ref().ok_or(MissingStoreError)
    }
}
