//! Plain-text views
//!
//! Every function returns the finished text; nothing here prints or touches
//! the stores.

use rust_decimal::Decimal;
use shared::models::{CartItem, Category, MenuItem, Order, PaymentMethod};
use shared::money::format_brl;
use shared::table::{TableNumber, TableValidationError};

pub const BRAND: &str = "SMASH BURGER";
const TAGLINE: &str = "Os melhores hambúrgueres da cidade";
const RULE: &str = "────────────────────────────────────────";

/// Shown instead of the menu when the table parameter is missing or invalid
pub fn validation_screen(error: TableValidationError) -> String {
    [
        "🍔".to_string(),
        BRAND.to_string(),
        String::new(),
        "Este link só funciona com os QR codes das mesas da hamburgueria.".to_string(),
        error.customer_message().to_string(),
        RULE.to_string(),
        "Precisa de ajuda? Chame um atendente.".to_string(),
    ]
    .join("\n")
}

pub fn header(table: TableNumber) -> String {
    format!("{BRAND}  |  Mesa {table}\n{TAGLINE}")
}

/// Tab strip; the active tab is bracketed
pub fn category_tabs(active: Category) -> String {
    Category::ALL
        .iter()
        .map(|c| {
            let tab = format!("{} {}", c.icon(), c.label());
            if *c == active { format!("[{tab}]") } else { format!(" {tab} ") }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn menu_card(item: &MenuItem) -> String {
    let badge = if item.is_popular() { "  ★ Popular" } else { "" };
    let mut card = format!("{:<12} {:<28} {:>12}{badge}", item.id, item.name, format_brl(item.price));
    if !item.description.is_empty() {
        card.push_str("\n             ");
        card.push_str(&item.description);
    }
    card
}

pub fn menu_section(category: Category, items: &[MenuItem]) -> String {
    let mut lines = vec![format!("{} {}", category.icon(), category.label()), RULE.to_string()];
    if items.is_empty() {
        lines.push("(nenhum item nesta categoria)".to_string());
    }
    lines.extend(items.iter().map(menu_card));
    lines.join("\n")
}

/// Floating "Ver Carrinho" bar; hidden when the cart is empty
pub fn cart_badge(item_count: u32, total: Decimal) -> Option<String> {
    (item_count > 0).then(|| format!("🛍 ({item_count}) Ver Carrinho  {}", format_brl(total)))
}

pub fn cart_sheet(items: &[CartItem], total: Decimal) -> String {
    let mut lines = vec!["Seu Pedido".to_string(), RULE.to_string()];
    if items.is_empty() {
        lines.push("Seu carrinho está vazio".to_string());
        return lines.join("\n");
    }
    for entry in items {
        lines.push(format!(
            "{:>3}x {:<28} {:>12}   ({})",
            entry.quantity,
            entry.item.name,
            format_brl(entry.line_total()),
            entry.id()
        ));
        if let Some(notes) = &entry.notes {
            lines.push(format!("      obs: {notes}"));
        }
    }
    lines.push(RULE.to_string());
    lines.push(format!("Total {:>38}", format_brl(total)));
    lines.push("→ checkout: Finalizar Pedido".to_string());
    lines.join("\n")
}

pub fn checkout_sheet(
    items: &[CartItem],
    total: Decimal,
    table: TableNumber,
    method: PaymentMethod,
    processing: bool,
) -> String {
    let mut lines = vec!["Pagamento".to_string(), RULE.to_string(), "Resumo do Pedido".to_string()];
    lines.extend(items.iter().map(|entry| {
        format!(
            "  {}x {:<28} {:>12}",
            entry.quantity,
            entry.item.name,
            format_brl(entry.line_total())
        )
    }));
    lines.push(format!("Total {:>38}", format_brl(total)));
    lines.push(format!("Mesa {table}"));
    lines.push("Forma de Pagamento".to_string());
    for m in PaymentMethod::ALL {
        let mark = if m == method { "(x)" } else { "( )" };
        lines.push(format!("  {mark} {:<10} [{}]", m.label(), m.id()));
    }
    lines.push(if processing {
        "Processando...".to_string()
    } else {
        format!("→ pay: Pagar {}", format_brl(total))
    });
    lines.join("\n")
}

pub fn order_ticket(order: &Order, estimated_wait: &str) -> String {
    [
        "✔ Pedido Confirmado!".to_string(),
        "Seu pedido foi enviado para a cozinha".to_string(),
        RULE.to_string(),
        format!("Número do Pedido   {}", order.id),
        format!("Mesa               {}", order.table_number),
        format!("Tempo Estimado     {estimated_wait}"),
        format!("Status             {}", order.status.label()),
        format!("Total              {}", format_brl(order.total)),
        RULE.to_string(),
        "→ new: Fazer Novo Pedido".to_string(),
    ]
    .join("\n")
}

pub fn admin_overview(groups: &[(Category, Vec<MenuItem>)]) -> String {
    let mut lines = vec!["Gerenciar Cardápio".to_string()];
    for (category, items) in groups {
        lines.push(String::new());
        lines.push(format!("{} {} ({})", category.icon(), category.label(), items.len()));
        lines.extend(items.iter().map(|item| format!("  {}", menu_card(item).lines().next().unwrap_or_default())));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn line(id: &str, cents: i64, quantity: u32) -> CartItem {
        let mut entry = CartItem::new(MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            description: String::new(),
            price: Decimal::new(cents, 2),
            image: String::new(),
            category: Category::Burgers,
            popular: None,
        });
        entry.quantity = quantity;
        entry
    }

    #[test]
    fn test_validation_screen_messages() {
        let missing = validation_screen(TableValidationError::Missing);
        assert!(missing.contains(BRAND));
        assert!(missing.contains("Escaneie o QR code da sua mesa"));

        let invalid = validation_screen(TableValidationError::Invalid);
        assert!(invalid.contains("O número da mesa informado é inválido"));
    }

    #[test]
    fn test_header_shows_table() {
        assert!(header(TableNumber::new(5).unwrap()).contains("Mesa 5"));
    }

    #[test]
    fn test_tabs_mark_active() {
        let tabs = category_tabs(Category::Drinks);
        assert!(tabs.contains("[🥤 Bebidas]"));
        assert!(!tabs.contains("[🍔 Burgers]"));
    }

    #[test]
    fn test_menu_card_popular_badge() {
        let items = seed::menu_items();
        assert!(menu_card(&items[0]).contains("Popular"));
        assert!(menu_card(&items[0]).contains("R$ 32,90"));
        assert!(!menu_card(&items[2]).contains("Popular"));
    }

    #[test]
    fn test_cart_badge_hidden_when_empty() {
        assert_eq!(cart_badge(0, Decimal::ZERO), None);
        let badge = cart_badge(3, Decimal::new(5180, 2)).unwrap();
        assert!(badge.contains("(3)"));
        assert!(badge.contains("R$ 51,80"));
    }

    #[test]
    fn test_cart_sheet() {
        assert!(cart_sheet(&[], Decimal::ZERO).contains("Seu carrinho está vazio"));

        let mut noted = line("b1", 1000, 2);
        noted.notes = Some("sem picles".into());
        let sheet = cart_sheet(&[noted], Decimal::from(20));
        assert!(sheet.contains("2x Item b1"));
        assert!(sheet.contains("obs: sem picles"));
        assert!(sheet.contains("R$ 20,00"));
        assert!(sheet.contains("Finalizar Pedido"));
    }

    #[test]
    fn test_checkout_sheet() {
        let table = TableNumber::new(7).unwrap();
        let items = [line("b1", 1000, 1)];
        let sheet = checkout_sheet(&items, Decimal::from(10), table, PaymentMethod::Credit, false);
        assert!(sheet.contains("Mesa 7"));
        assert!(sheet.contains("(x) Cartão"));
        assert!(sheet.contains("( ) PIX"));
        assert!(sheet.contains("Pagar R$ 10,00"));

        let busy = checkout_sheet(&items, Decimal::from(10), table, PaymentMethod::Pix, true);
        assert!(busy.contains("Processando..."));
        assert!(!busy.contains("Pagar"));
    }

    #[test]
    fn test_order_ticket() {
        let order = Order::from_cart(
            "#4821",
            TableNumber::new(3).unwrap(),
            vec![line("b1", 3290, 1)],
            PaymentMethod::Pix,
        );
        let ticket = order_ticket(&order, "15-20 min");
        assert!(ticket.contains("Pedido Confirmado!"));
        assert!(ticket.contains("#4821"));
        assert!(ticket.lines().any(|l| l.starts_with("Mesa") && l.ends_with(" 3")));
        assert!(ticket.contains("15-20 min"));
        assert!(ticket.contains("Pendente"));
    }
}
