//! Command dispatch for the customer and admin consoles

use shared::error::AppError;
use shared::models::{MenuItem, MenuItemUpdate};

use super::command::{ADMIN_HELP, AdminCommand, Command, HELP};
use super::render;
use crate::admin::AdminConsole;
use crate::session::{FlowState, OrderingSession};

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show, then read the next command
    Continue(String),
    Quit,
}

fn failure(err: impl Into<AppError>) -> Outcome {
    let err = err.into();
    tracing::debug!(code = %err.code, category = %err.code.category(), "Command failed: {}", err.message);
    Outcome::Continue(format!("⚠ {}", err.message))
}

pub struct CustomerShell {
    session: OrderingSession,
    estimated_wait: String,
}

impl CustomerShell {
    pub fn new(session: OrderingSession, estimated_wait: impl Into<String>) -> Self {
        Self {
            session,
            estimated_wait: estimated_wait.into(),
        }
    }

    pub fn session(&self) -> &OrderingSession {
        &self.session
    }

    /// View for the current flow state
    pub fn screen(&self) -> String {
        let s = &self.session;
        let cart = s.cart();
        match s.state() {
            FlowState::Browsing => [
                render::header(s.table()),
                render::category_tabs(s.active_category()),
                render::menu_section(s.active_category(), &s.visible_items()),
            ]
            .join("\n\n"),
            FlowState::CartOpen => render::cart_sheet(&cart.items(), cart.get_total()),
            FlowState::CheckoutOpen => render::checkout_sheet(
                &cart.items(),
                cart.get_total(),
                s.table(),
                s.payment_method(),
                s.is_processing(),
            ),
            FlowState::OrderConfirmed => match s.last_order() {
                Some(order) => render::order_ticket(order, &self.estimated_wait),
                None => String::new(),
            },
        }
    }

    /// "Ver Carrinho" bar, only while browsing with a non-empty cart
    pub fn cart_badge(&self) -> Option<String> {
        if self.session.state() != FlowState::Browsing {
            return None;
        }
        let cart = self.session.cart();
        render::cart_badge(cart.get_item_count(), cart.get_total())
    }

    pub async fn execute(&mut self, command: Command) -> Outcome {
        let s = &mut self.session;
        match command {
            Command::Menu => {}
            Command::Category(category) => s.select_category(category),
            Command::Add(id) => match s.add_to_cart(&id) {
                Ok(item) => return Outcome::Continue(format!("+1 {}", item.name)),
                Err(e) => return failure(e),
            },
            Command::Quantity { id, quantity } => {
                if let Err(e) = s.set_quantity(&id, quantity) {
                    return failure(e);
                }
            }
            Command::Remove(id) => {
                if let Err(e) = s.remove_from_cart(&id) {
                    return failure(e);
                }
            }
            Command::Note { id, text } => {
                if let Err(e) = s.set_notes(&id, text) {
                    return failure(e);
                }
            }
            Command::Cart => {
                if let Err(e) = s.open_cart() {
                    return failure(e);
                }
            }
            Command::Close => {
                let result = match s.state() {
                    FlowState::CheckoutOpen => s.close_checkout(),
                    _ => s.close_cart(),
                };
                if let Err(e) = result {
                    return failure(e);
                }
            }
            Command::Checkout => {
                if let Err(e) = s.checkout() {
                    return failure(e);
                }
            }
            Command::Method(method) => s.select_payment_method(method),
            Command::Pay => {
                if let Err(e) = s.pay().await {
                    return failure(e);
                }
            }
            Command::New => {
                if let Err(e) = s.new_order() {
                    return failure(e);
                }
            }
            Command::Help => return Outcome::Continue(HELP.to_string()),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue(self.screen())
    }
}

pub struct AdminShell {
    console: AdminConsole,
}

impl AdminShell {
    pub fn new(console: AdminConsole) -> Self {
        Self { console }
    }

    pub fn screen(&self) -> String {
        render::admin_overview(&self.console.overview())
    }

    pub fn execute(&self, command: AdminCommand) -> Outcome {
        let result = match command {
            AdminCommand::List => return Outcome::Continue(self.screen()),
            AdminCommand::Help => return Outcome::Continue(ADMIN_HELP.to_string()),
            AdminCommand::Quit => return Outcome::Quit,
            AdminCommand::Add {
                id,
                category,
                price,
                name,
            } => self
                .console
                .create_item(MenuItem {
                    id,
                    name,
                    description: String::new(),
                    price,
                    image: String::new(),
                    category,
                    popular: None,
                }),
            AdminCommand::Price { id, price } => {
                self.console.edit_item(&id, &MenuItemUpdate::price(price)).map(|_| ())
            }
            AdminCommand::Rename { id, name } => self
                .console
                .edit_item(&id, &MenuItemUpdate {
                    name: Some(name),
                    ..Default::default()
                })
                .map(|_| ()),
            AdminCommand::Popular { id, popular } => self
                .console
                .edit_item(&id, &MenuItemUpdate {
                    popular: Some(popular),
                    ..Default::default()
                })
                .map(|_| ()),
            AdminCommand::Delete(id) => self.console.delete_item(&id).map(|_| ()),
        };
        match result {
            Ok(()) => Outcome::Continue(self.screen()),
            Err(e) => failure(e),
        }
    }
}
