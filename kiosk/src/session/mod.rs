//! Ordering session for one table
//!
//! Drives the customer flow:
//!
//! ```text
//! Browsing ──open_cart──▶ CartOpen ──checkout──▶ CheckoutOpen ──paid──▶ OrderConfirmed
//!     ▲                      │                       │                       │
//!     └──────close_cart──────┘                       │                       │
//!     └──────────────────────close_checkout──────────┘                       │
//!     └──────────────────────────────new_order───────────────────────────────┘
//! ```
//!
//! The session borrows nothing global: it is handed a [`MenuStore`] and a
//! [`CartStore`] and only holds clones of their handles.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{CartItem, Category, MenuItem, Order, PaymentMethod, total_amount, total_quantity};
use shared::table::TableNumber;
use shared::util::order_number;
use thiserror::Error;

use crate::cart::CartStore;
use crate::catalog::MenuStore;
use crate::checkout::{CheckoutError, PaymentReceipt, PaymentRequest, PaymentSimulator, PaymentTask};
use crate::observable::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    Browsing,
    CartOpen,
    CheckoutOpen,
    OrderConfirmed,
}

impl FlowState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FlowState::Browsing => "browsing",
            FlowState::CartOpen => "cart_open",
            FlowState::CheckoutOpen => "checkout_open",
            FlowState::OrderConfirmed => "order_confirmed",
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowAction {
    OpenCart,
    CloseCart,
    Checkout,
    CloseCheckout,
    Pay,
    NewOrder,
}

impl FlowAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FlowAction::OpenCart => "open_cart",
            FlowAction::CloseCart => "close_cart",
            FlowAction::Checkout => "checkout",
            FlowAction::CloseCheckout => "close_checkout",
            FlowAction::Pay => "pay",
            FlowAction::NewOrder => "new_order",
        }
    }
}

impl fmt::Display for FlowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: FlowState, action: FlowAction },

    #[error("cart is empty")]
    EmptyCart,

    #[error("a payment is already in progress")]
    PaymentInProgress,

    #[error("no payment in progress")]
    NoPayment,

    #[error("menu item not found: {0}")]
    UnknownItem(String),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        let message = err.to_string();
        match err {
            FlowError::Checkout(e) => e.into(),
            FlowError::InvalidTransition { from, action } => {
                AppError::with_message(ErrorCode::InvalidTransition, message)
                    .with_detail("from", from.as_str())
                    .with_detail("action", action.as_str())
            }
            FlowError::EmptyCart => AppError::new(ErrorCode::CartEmpty),
            FlowError::PaymentInProgress => AppError::new(ErrorCode::PaymentInProgress),
            FlowError::NoPayment => AppError::with_message(ErrorCode::InvalidRequest, message),
            FlowError::UnknownItem(id) => {
                AppError::with_message(ErrorCode::MenuItemNotFound, message).with_detail("id", id)
            }
        }
    }
}

/// Payment in flight plus the cart lines it pays for
#[derive(Debug)]
struct PendingPayment {
    task: PaymentTask,
    items: Snapshot<CartItem>,
}

#[derive(Debug)]
pub struct OrderingSession {
    table: TableNumber,
    menu: MenuStore,
    cart: CartStore,
    payments: PaymentSimulator,
    active_category: Category,
    payment_method: PaymentMethod,
    state: FlowState,
    pending: Option<PendingPayment>,
    last_order: Option<Order>,
    last_receipt: Option<PaymentReceipt>,
}

impl OrderingSession {
    pub fn new(table: TableNumber, menu: MenuStore, cart: CartStore, payments: PaymentSimulator) -> Self {
        tracing::info!(table = table.get(), "Ordering session started");
        Self {
            table,
            menu,
            cart,
            payments,
            active_category: Category::default(),
            payment_method: PaymentMethod::default(),
            state: FlowState::default(),
            pending: None,
            last_order: None,
            last_receipt: None,
        }
    }

    // ========== Accessors ==========

    pub fn table(&self) -> TableNumber {
        self.table
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn menu(&self) -> &MenuStore {
        &self.menu
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    /// Order shown on the confirmation ticket
    pub fn last_order(&self) -> Option<&Order> {
        self.last_order.as_ref()
    }

    pub fn last_receipt(&self) -> Option<&PaymentReceipt> {
        self.last_receipt.as_ref()
    }

    // ========== Browsing ==========

    pub fn select_category(&mut self, category: Category) {
        self.active_category = category;
    }

    /// Catalog items of the active category
    pub fn visible_items(&self) -> Vec<MenuItem> {
        self.menu.by_category(self.active_category)
    }

    // ========== Cart ==========
    //
    // The cart is locked while a payment is in flight.

    /// Look `id` up in the catalog and add one unit to the cart
    pub fn add_to_cart(&self, id: &str) -> Result<MenuItem, FlowError> {
        self.ensure_cart_unlocked()?;
        let item = self
            .menu
            .find(id)
            .ok_or_else(|| FlowError::UnknownItem(id.to_string()))?;
        self.cart.add_to_cart(&item);
        Ok(item)
    }

    pub fn remove_from_cart(&self, id: &str) -> Result<bool, FlowError> {
        self.ensure_cart_unlocked()?;
        Ok(self.cart.remove_from_cart(id))
    }

    pub fn set_quantity(&self, id: &str, quantity: i64) -> Result<bool, FlowError> {
        self.ensure_cart_unlocked()?;
        Ok(self.cart.set_quantity(id, quantity))
    }

    pub fn set_notes(&self, id: &str, notes: Option<String>) -> Result<bool, AppError> {
        self.ensure_cart_unlocked()?;
        self.cart.set_notes(id, notes)
    }

    fn ensure_cart_unlocked(&self) -> Result<(), FlowError> {
        if self.is_processing() {
            tracing::warn!(table = self.table.get(), "Cart edit refused: payment in progress");
            return Err(FlowError::PaymentInProgress);
        }
        Ok(())
    }

    // ========== Transitions ==========

    pub fn open_cart(&mut self) -> Result<(), FlowError> {
        self.transition(FlowAction::OpenCart, FlowState::Browsing, FlowState::CartOpen)
    }

    pub fn close_cart(&mut self) -> Result<(), FlowError> {
        self.transition(FlowAction::CloseCart, FlowState::CartOpen, FlowState::Browsing)
    }

    /// Move from the cart sheet to the checkout sheet; the cart must not be empty
    pub fn checkout(&mut self) -> Result<(), FlowError> {
        self.expect_state(FlowAction::Checkout, FlowState::CartOpen)?;
        if self.cart.is_empty() {
            tracing::warn!(table = self.table.get(), "Checkout refused: cart is empty");
            return Err(FlowError::EmptyCart);
        }
        self.transition(FlowAction::Checkout, FlowState::CartOpen, FlowState::CheckoutOpen)
    }

    pub fn close_checkout(&mut self) -> Result<(), FlowError> {
        self.expect_state(FlowAction::CloseCheckout, FlowState::CheckoutOpen)?;
        if self.is_processing() {
            tracing::warn!(table = self.table.get(), "Close refused: payment in progress");
            return Err(FlowError::PaymentInProgress);
        }
        self.transition(FlowAction::CloseCheckout, FlowState::CheckoutOpen, FlowState::Browsing)
    }

    /// Change the payment method; ignored by an in-flight payment
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Start paying for the current cart
    ///
    /// The cart lines are captured now and the cart stays locked until
    /// `finish_payment` resolves the payment.
    pub fn begin_payment(&mut self) -> Result<(), FlowError> {
        self.expect_state(FlowAction::Pay, FlowState::CheckoutOpen)?;
        if self.is_processing() {
            tracing::warn!(table = self.table.get(), "Payment refused: already in progress");
            return Err(FlowError::PaymentInProgress);
        }

        let items = self.cart.items();
        let request = PaymentRequest {
            table: self.table,
            method: self.payment_method,
            amount: total_amount(&items),
            item_count: total_quantity(&items),
        };
        let task = self.payments.spawn(request)?;
        self.pending = Some(PendingPayment { task, items });
        Ok(())
    }

    /// Ask the in-flight payment to stop; returns whether one was running
    pub fn cancel_payment(&self) -> bool {
        match &self.pending {
            Some(pending) => {
                pending.task.cancel();
                true
            }
            None => false,
        }
    }

    /// Wait for the in-flight payment and apply its outcome
    ///
    /// On success the order is created from the captured lines, the cart is
    /// cleared and the flow moves to `OrderConfirmed`. On failure the flow
    /// stays on the checkout sheet with the cart untouched.
    pub async fn finish_payment(&mut self) -> Result<&Order, FlowError> {
        let pending = self.pending.take().ok_or(FlowError::NoPayment)?;

        let receipt = match pending.task.wait().await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(table = self.table.get(), error = %e, "Payment did not complete");
                return Err(e.into());
            }
        };

        let order = Order::from_cart(
            order_number(),
            self.table,
            pending.items.to_vec(),
            receipt.method,
        );
        self.cart.clear_cart();
        self.state = FlowState::OrderConfirmed;

        tracing::info!(
            table = self.table.get(),
            order = %order.id,
            total = %order.total,
            reference = %receipt.reference,
            "Order confirmed"
        );

        self.last_receipt = Some(receipt);
        Ok(self.last_order.insert(order))
    }

    /// `begin_payment` followed by `finish_payment`
    pub async fn pay(&mut self) -> Result<&Order, FlowError> {
        self.begin_payment()?;
        self.finish_payment().await
    }

    /// Leave the confirmation ticket and start over
    pub fn new_order(&mut self) -> Result<(), FlowError> {
        self.transition(FlowAction::NewOrder, FlowState::OrderConfirmed, FlowState::Browsing)?;
        self.last_order = None;
        self.last_receipt = None;
        Ok(())
    }

    fn expect_state(&self, action: FlowAction, expected: FlowState) -> Result<(), FlowError> {
        if self.state != expected {
            tracing::warn!(from = %self.state, action = %action, "Invalid flow transition");
            return Err(FlowError::InvalidTransition {
                from: self.state,
                action,
            });
        }
        Ok(())
    }

    fn transition(&mut self, action: FlowAction, from: FlowState, to: FlowState) -> Result<(), FlowError> {
        self.expect_state(action, from)?;
        self.state = to;
        tracing::info!(table = self.table.get(), from = %from, to = %to, "Flow transition");
        Ok(())
    }
}
