//! Orders
//!
//! Order records a checkout service would create from the cart's lines and
//! total. Checkout itself is disabled in this build; nothing here touches
//! payment.

use std::fmt;

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{artworks::ArtworkId, cart::Cart, pricing::TotalPriceError};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created, awaiting payment.
    Pending,

    /// Payment received.
    Paid,

    /// Physical items dispatched.
    Shipped,

    /// Received by the customer.
    Delivered,

    /// Cancelled before fulfilment.
    Cancelled,
}

impl OrderStatus {
    /// Whether the order has reached a final state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        })
    }
}

/// Shipping destination for physical artworks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// First address line
    pub line1: String,

    /// Second address line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    /// City
    pub city: String,

    /// State or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code
    pub postal_code: String,

    /// Country
    pub country: String,
}

/// One order line, denormalized from a cart line at draft time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Artwork this line refers to
    pub artwork_id: ArtworkId,

    /// Title at the moment the order was drafted
    pub title: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price at the moment the order was drafted
    pub unit_price: Money<'static, Currency>,
}

/// What a checkout service consumes: the cart's lines and total, plus the
/// customer's contact details.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    /// Customer email
    pub customer_email: String,

    /// Customer name
    pub customer_name: String,

    /// Order lines
    pub items: Vec<OrderItem>,

    /// Order total
    pub total: Money<'static, Currency>,
}

impl OrderDraft {
    /// Draft an order from the current cart contents.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the cart total cannot be computed.
    pub fn from_cart(
        cart: &Cart,
        customer_email: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Result<Self, TotalPriceError> {
        let items = cart
            .iter()
            .map(|line| OrderItem {
                artwork_id: line.artwork().id.clone(),
                title: line.artwork().title.clone(),
                quantity: line.quantity(),
                unit_price: line.artwork().price,
            })
            .collect();

        Ok(Self {
            customer_email: customer_email.into(),
            customer_name: customer_name.into(),
            items,
            total: cart.total_price()?,
        })
    }
}

/// Order record.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique order id
    pub uuid: Uuid,

    /// Customer email
    pub customer_email: String,

    /// Customer name
    pub customer_name: String,

    /// Current status
    pub status: OrderStatus,

    /// Order lines
    pub items: Vec<OrderItem>,

    /// Order total
    pub total: Money<'static, Currency>,

    /// Shipping destination, when any line is physical
    pub shipping_address: Option<ShippingAddress>,

    /// When the order was created
    pub created_at: Timestamp,

    /// When the order was last updated
    pub updated_at: Timestamp,
}

impl Order {
    /// Create a pending order from a draft.
    #[must_use]
    pub fn from_draft(draft: OrderDraft) -> Self {
        let now = Timestamp::now();

        Self {
            uuid: Uuid::now_v7(),
            customer_email: draft.customer_email,
            customer_name: draft.customer_name,
            status: OrderStatus::Pending,
            items: draft.items,
            total: draft.total,
            shipping_address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the order to a new status, updating the modification time.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Timestamp::now();
    }
}
