//! Simulated payment
//!
//! No payment provider is contacted. A payment is a spawned tokio task that
//! sleeps for the configured delay and then succeeds, unless its
//! [`CancellationToken`] fires first.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::PaymentMethod;
use shared::table::TableNumber;
use shared::util::now_millis;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::core::Config;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("payment cancelled")]
    Cancelled,

    #[error("cannot pay for an empty cart")]
    EmptyCart,

    #[error("payment task failed: {0}")]
    TaskFailed(String),
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        let code = match &err {
            CheckoutError::Cancelled => ErrorCode::PaymentCancelled,
            CheckoutError::EmptyCart => ErrorCode::CartEmpty,
            CheckoutError::TaskFailed(_) => ErrorCode::PaymentFailed,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// What is being paid for
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub table: TableNumber,
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub item_count: u32,
}

/// Proof of a completed (simulated) payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// `SIM-<unix millis>`
    pub reference: String,
    pub table: TableNumber,
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
}

impl PaymentReceipt {
    fn approve(request: PaymentRequest) -> Self {
        Self {
            reference: format!("SIM-{}", now_millis()),
            table: request.table,
            method: request.method,
            amount: request.amount,
            paid_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PaymentSimulator {
    delay: Duration,
}

impl PaymentSimulator {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.payment_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a payment in the background
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, request: PaymentRequest) -> Result<PaymentTask, CheckoutError> {
        if request.item_count == 0 {
            return Err(CheckoutError::EmptyCart);
        }

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let delay = self.delay;

        tracing::info!(
            table = request.table.get(),
            method = %request.method,
            amount = %request.amount,
            "Payment started"
        );

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::info!(table = request.table.get(), "Payment cancelled");
                    Err(CheckoutError::Cancelled)
                }
                _ = tokio::time::sleep(delay) => {
                    let receipt = PaymentReceipt::approve(request);
                    tracing::info!(reference = %receipt.reference, "Payment approved");
                    Ok(receipt)
                }
            }
        });

        Ok(PaymentTask { handle, cancel })
    }
}

impl Default for PaymentSimulator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

/// Handle to an in-flight payment
#[derive(Debug)]
pub struct PaymentTask {
    handle: JoinHandle<Result<PaymentReceipt, CheckoutError>>,
    cancel: CancellationToken,
}

impl PaymentTask {
    /// Request cancellation; the task resolves with [`CheckoutError::Cancelled`]
    /// unless it already completed.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(self) -> Result<PaymentReceipt, CheckoutError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Payment task failed: {}", e);
                Err(CheckoutError::TaskFailed(e.to_string()))
            }
        }
    }
}
