//! Table-side ordering kiosk
//!
//! A customer scans the QR code on their table, browses the menu, builds a
//! cart and pays (simulated). The admin console edits the same in-memory
//! [`MenuStore`] a session reads from, so sessions sharing that store see
//! the change on their next snapshot. The `kiosk` binary runs either the
//! customer view or the admin console (`--admin`), each with its own catalog
//! for the lifetime of the process.
//!
//! # 模块结构
//!
//! ```text
//! kiosk/src/
//! ├── core/          # 配置
//! ├── utils/         # 日志、输入校验
//! ├── observable.rs  # copy-on-write list + watch subscriptions
//! ├── catalog/       # menu store + built-in catalog
//! ├── cart/          # cart store
//! ├── checkout/      # simulated payment task
//! ├── session/       # per-table flow state machine
//! ├── admin/         # menu management
//! └── console/       # text views, command parsing, dispatch
//! ```
//!
//! Stores are plain values created by the caller and handed to the session
//! and admin console; there is no process-wide state.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod console;
pub mod core;
pub mod observable;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use admin::AdminConsole;
pub use cart::CartStore;
pub use catalog::MenuStore;
pub use checkout::{CheckoutError, PaymentReceipt, PaymentSimulator, PaymentTask};
pub use core::Config;
pub use session::{FlowAction, FlowError, FlowState, OrderingSession};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

use shared::table::{TableValidationError, validate_query};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

/// Catalog the process starts with
pub fn initial_menu(config: &Config) -> MenuStore {
    if config.seed_catalog {
        MenuStore::with_seed_catalog()
    } else {
        MenuStore::empty()
    }
}

/// Validate the table query, then build the customer session
///
/// `menu` is only called once the table number is valid, so a rejected scan
/// never creates a catalog.
pub fn open_session(
    query: &str,
    config: &Config,
    menu: impl FnOnce() -> MenuStore,
) -> Result<OrderingSession, TableValidationError> {
    let table = validate_query(query)?;
    Ok(OrderingSession::new(
        table,
        menu(),
        CartStore::new(),
        PaymentSimulator::from_config(config),
    ))
}

pub fn print_banner() {
    println!(
        r#"
  ___ __  __   _   ___ _  _   ___ _   _ ___  ___ ___ ___
 / __|  \/  | /_\ / __| || | | _ ) | | | _ \/ __| __| _ \
 \__ \ |\/| |/ _ \\__ \ __ | | _ \ |_| |   / (_ | _||   /
 |___/_|  |_/_/ \_\___/_||_| |___/\___/|_|_\\___|___|_|_\
    "#
    );
}
