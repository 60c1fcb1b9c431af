//! Line-oriented command parsing for the interactive binary

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::models::{Category, PaymentMethod};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid {what}: {value}")]
    Invalid { what: &'static str, value: String },
}

/// Customer-side commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Menu,
    Category(Category),
    Add(String),
    Quantity { id: String, quantity: i64 },
    Remove(String),
    Note { id: String, text: Option<String> },
    Cart,
    Close,
    Checkout,
    Method(PaymentMethod),
    Pay,
    New,
    Help,
    Quit,
}

pub const HELP: &str = "\
menu                 show the active category
cat <category>       switch tab: burgers | sides | drinks | desserts
add <id>             add one unit to the cart
qty <id> <n>         set quantity (0 removes)
rm <id>              remove from the cart
note <id> [text]     attach a note to a cart line (empty clears)
cart                 open the cart
close                close the open sheet
checkout             go to payment
method <m>           pix | credit | cash
pay                  pay and confirm the order
new                  start a new order
help                 this text
quit                 exit";

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (s, ""),
    }
}

fn required<'a>(arg: &'a str, usage: &'static str) -> Result<&'a str, ParseError> {
    if arg.is_empty() { Err(ParseError::Usage(usage)) } else { Ok(arg) }
}

fn single_id(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    let (id, extra) = split_word(required(rest, usage)?);
    if !extra.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok(id.to_string())
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line);
        let cmd = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "menu" => Command::Menu,
            "cat" => {
                let value = required(rest, "cat <category>")?;
                Command::Category(value.parse().map_err(|_| ParseError::Invalid {
                    what: "category",
                    value: value.to_string(),
                })?)
            }
            "add" => Command::Add(single_id(rest, "add <id>")?),
            "qty" => {
                const USAGE: &str = "qty <id> <n>";
                let (id, n) = split_word(required(rest, USAGE)?);
                let n = required(n, USAGE)?;
                let quantity = n.parse().map_err(|_| ParseError::Invalid {
                    what: "quantity",
                    value: n.to_string(),
                })?;
                Command::Quantity {
                    id: id.to_string(),
                    quantity,
                }
            }
            "rm" => Command::Remove(single_id(rest, "rm <id>")?),
            "note" => {
                let (id, text) = split_word(required(rest, "note <id> [text]")?);
                Command::Note {
                    id: id.to_string(),
                    text: (!text.is_empty()).then(|| text.to_string()),
                }
            }
            "cart" => Command::Cart,
            "close" => Command::Close,
            "checkout" => Command::Checkout,
            "method" => {
                let value = required(rest, "method <pix|credit|cash>")?;
                Command::Method(value.parse().map_err(|_| ParseError::Invalid {
                    what: "payment method",
                    value: value.to_string(),
                })?)
            }
            "pay" => Command::Pay,
            "new" => Command::New,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}

/// Staff-side commands
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    List,
    Add {
        id: String,
        category: Category,
        price: Decimal,
        name: String,
    },
    Price { id: String, price: Decimal },
    Rename { id: String, name: String },
    Popular { id: String, popular: bool },
    Delete(String),
    Help,
    Quit,
}

pub const ADMIN_HELP: &str = "\
list                 show the catalog
add <id> <category> <price> <name>
                     create an item
price <id> <value>   set the price (32,90 or 32.90)
rename <id> <name>   rename an item
popular <id> on|off  toggle the Popular badge
delete <id>          remove every item with this id
help                 this text
quit                 exit";

/// Accepts both `32,90` and `32.90`
fn parse_price(value: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(&value.replace(',', ".")).map_err(|_| ParseError::Invalid {
        what: "price",
        value: value.to_string(),
    })
}

impl FromStr for AdminCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line);
        let cmd = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "list" => AdminCommand::List,
            "add" => {
                const USAGE: &str = "add <id> <category> <price> <name>";
                let (id, rest) = split_word(required(rest, USAGE)?);
                let (category, rest) = split_word(required(rest, USAGE)?);
                let (price, name) = split_word(required(rest, USAGE)?);
                AdminCommand::Add {
                    id: id.to_string(),
                    category: category.parse().map_err(|_| ParseError::Invalid {
                        what: "category",
                        value: category.to_string(),
                    })?,
                    price: parse_price(required(price, USAGE)?)?,
                    name: required(name, USAGE)?.to_string(),
                }
            }
            "price" => {
                const USAGE: &str = "price <id> <value>";
                let (id, value) = split_word(required(rest, USAGE)?);
                AdminCommand::Price {
                    id: id.to_string(),
                    price: parse_price(required(value, USAGE)?)?,
                }
            }
            "rename" => {
                const USAGE: &str = "rename <id> <name>";
                let (id, name) = split_word(required(rest, USAGE)?);
                AdminCommand::Rename {
                    id: id.to_string(),
                    name: required(name, USAGE)?.to_string(),
                }
            }
            "popular" => {
                const USAGE: &str = "popular <id> on|off";
                let (id, flag) = split_word(required(rest, USAGE)?);
                let popular = match flag.to_ascii_lowercase().as_str() {
                    "on" | "yes" | "true" => true,
                    "off" | "no" | "false" => false,
                    _ => return Err(ParseError::Usage(USAGE)),
                };
                AdminCommand::Popular {
                    id: id.to_string(),
                    popular,
                }
            }
            "delete" => AdminCommand::Delete(single_id(rest, "delete <id>")?),
            "help" | "?" => AdminCommand::Help,
            "quit" | "exit" => AdminCommand::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}
