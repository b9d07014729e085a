//! Line-oriented console front end
//!
//! Parses text commands into [`SessionIntent`]s and renders snapshots as
//! plain text. It only displays what the store derives.

use shared::intent::SessionIntent;
use shared::message::{SessionEvent, SessionEventPayload};
use shared::models::{
    CategorySelection, GUEST_OPTIONS, POPULAR_TIMES, ReservationField, ReservationStatus,
    SessionSnapshot,
};
use shared::util::format_price;
use std::fmt::Write;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  add <dish>            add one to the cart
  remove <dish>         remove one from the cart
  clear                 empty the cart
  category <name>       toggle a category filter
  all                   show every category
  set <field> <value>   name | phone | date | time | guests
  time <value>          pick a time (e.g. 7:00 PM)
  guests <value>        pick a party size (1-4, +5)
  reset                 reset the reservation form
  reserve               submit the reservation
  show                  print the session
  help                  this text
  quit                  end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Intent(SessionIntent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}', type 'help'")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unknown field '{0}', expected name, phone, date, time or guests")]
    UnknownField(String),
}

/// Parse one input line
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ConsoleError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let required = |command: &'static str, argument: &'static str| {
        if rest.is_empty() {
            Err(ConsoleError::MissingArgument { command, argument })
        } else {
            Ok(rest.to_string())
        }
    };

    let intent = match verb.to_ascii_lowercase().as_str() {
        "" => return Err(ConsoleError::Empty),
        "show" | "ls" => return Ok(ConsoleCommand::Show),
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => return Ok(ConsoleCommand::Quit),

        "add" => SessionIntent::AddToCart {
            dish_id: required("add", "a dish id")?,
        },
        "remove" | "rm" => SessionIntent::RemoveFromCart {
            dish_id: required("remove", "a dish id")?,
        },
        "clear" => SessionIntent::ClearCart,
        "category" | "cat" => SessionIntent::ToggleCategory {
            category: required("category", "a category name")?,
        },
        "all" => SessionIntent::ClearCategory,
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(ConsoleError::MissingArgument {
                    command: "set",
                    argument: "a field name",
                });
            }
            let field: ReservationField = field
                .parse()
                .map_err(|_| ConsoleError::UnknownField(field.to_string()))?;
            SessionIntent::SetReservationField {
                field,
                value: value.to_string(),
            }
        }
        "time" => SessionIntent::PickTime {
            value: required("time", "a time")?,
        },
        "guests" => SessionIntent::PickGuestCount {
            value: required("guests", "a party size")?,
        },
        "reset" => SessionIntent::ResetReservation,
        "reserve" | "submit" => SessionIntent::SubmitReservation,
        other => return Err(ConsoleError::UnknownCommand(other.to_string())),
    };

    Ok(ConsoleCommand::Intent(intent))
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

/// Render a snapshot as text
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();

    // Menu
    let mut chips = vec![chip("All", snapshot.selection.is_all())];
    for category in &snapshot.categories {
        let active = snapshot.selection.category() == Some(category.as_str());
        chips.push(chip(category, active));
    }
    let _ = writeln!(out, "== Menu {}", chips.join(" "));
    if snapshot.visible_catalog.is_empty() {
        let _ = writeln!(out, "  (no dishes)");
    }
    for dish in &snapshot.visible_catalog {
        let _ = writeln!(
            out,
            "  {:<4} {:<24} {:>10}  {}",
            dish.id,
            dish.name,
            format_price(dish.price),
            dish.category
        );
    }

    // Cart
    let _ = writeln!(out, "== Cart ({} items)", snapshot.cart_item_count);
    if snapshot.cart.is_empty() {
        let _ = writeln!(out, "  (empty)");
    } else {
        for line in &snapshot.cart {
            let _ = writeln!(
                out,
                "  {:<4} {:<24} x{:<3} {:>10}",
                line.dish.id,
                line.dish.name,
                line.quantity,
                format_price(line.line_total())
            );
        }
        let _ = writeln!(out, "  Subtotal {:>30}", format_price(snapshot.cart_subtotal));
    }

    // Reservation
    let _ = writeln!(out, "== Reservation");
    let draft = &snapshot.draft;
    let _ = writeln!(out, "  Name:   {}", or_dash(&draft.name));
    let _ = writeln!(out, "  Phone:  {}", or_dash(&draft.phone));
    let _ = writeln!(out, "  Date:   {}", or_dash(&draft.date));
    let _ = writeln!(
        out,
        "  Time:   {}   [{}]",
        or_dash(&draft.time),
        POPULAR_TIMES.join(" | ")
    );
    let _ = writeln!(
        out,
        "  Guests: {}   [{}]",
        or_dash(&draft.guest_count),
        GUEST_OPTIONS.join(" | ")
    );
    if snapshot.status == ReservationStatus::Confirmed {
        let _ = writeln!(out, "  ✓ Reservation received! We'll see you soon.");
    }

    out
}

fn chip(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}

/// One-line description of an event
pub fn render_event(event: &SessionEvent) -> String {
    let detail = match &event.payload {
        SessionEventPayload::CartItemChanged {
            dish_id,
            quantity,
            item_count,
        } => format!("{} → {} ({} in cart)", dish_id, quantity, item_count),
        SessionEventPayload::CategoryChanged { selection } => match selection {
            CategorySelection::All => "All".to_string(),
            CategorySelection::Only(c) => c.clone(),
        },
        SessionEventPayload::DraftChanged { field } => field.to_string(),
        SessionEventPayload::ReservationConfirmed { episode }
        | SessionEventPayload::ReservationExpired { episode } => format!("#{}", episode),
        SessionEventPayload::CartCleared
        | SessionEventPayload::DraftReset
        | SessionEventPayload::SessionClosed => String::new(),
    };

    if detail.is_empty() {
        format!("[{}] {}", event.sequence, event.event_type)
    } else {
        format!("[{}] {} {}", event.sequence, event.event_type, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{CartLine, DishRecord, ReservationDraft};

    fn intent(line: &str) -> SessionIntent {
        match parse_line(line).unwrap() {
            ConsoleCommand::Intent(intent) => intent,
            other => panic!("expected intent, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_cart_commands() {
        assert_eq!(
            intent("add p1"),
            SessionIntent::AddToCart {
                dish_id: "p1".to_string()
            }
        );
        assert_eq!(
            intent("  rm   s1 "),
            SessionIntent::RemoveFromCart {
                dish_id: "s1".to_string()
            }
        );
        assert_eq!(intent("clear"), SessionIntent::ClearCart);
    }

    #[test]
    fn test_parse_filter_commands() {
        assert_eq!(
            intent("category Pizza"),
            SessionIntent::ToggleCategory {
                category: "Pizza".to_string()
            }
        );
        assert_eq!(intent("ALL"), SessionIntent::ClearCategory);
    }

    #[test]
    fn test_parse_reservation_commands() {
        assert_eq!(
            intent("set name Ada Obi"),
            SessionIntent::SetReservationField {
                field: ReservationField::Name,
                value: "Ada Obi".to_string(),
            }
        );
        assert_eq!(
            intent("set guests +5"),
            SessionIntent::SetReservationField {
                field: ReservationField::GuestCount,
                value: "+5".to_string(),
            }
        );
        assert_eq!(
            intent("time 7:00 PM"),
            SessionIntent::PickTime {
                value: "7:00 PM".to_string()
            }
        );
        assert_eq!(
            intent("guests 4"),
            SessionIntent::PickGuestCount {
                value: "4".to_string()
            }
        );
        assert_eq!(intent("reset"), SessionIntent::ResetReservation);
        assert_eq!(intent("reserve"), SessionIntent::SubmitReservation);
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_line("show"), Ok(ConsoleCommand::Show));
        assert_eq!(parse_line("help"), Ok(ConsoleCommand::Help));
        assert_eq!(parse_line("quit"), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_line("   "), Err(ConsoleError::Empty));
        assert_eq!(
            parse_line("order p1"),
            Err(ConsoleError::UnknownCommand("order".to_string()))
        );
        assert_eq!(
            parse_line("add"),
            Err(ConsoleError::MissingArgument {
                command: "add",
                argument: "a dish id"
            })
        );
        assert_eq!(
            parse_line("set email a@b.c"),
            Err(ConsoleError::UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_render_snapshot() {
        let pizza = DishRecord::new("p1", "Margherita", Decimal::from(4500), "Pizza");
        let snapshot = SessionSnapshot {
            session_id: "s".to_string(),
            visible_catalog: vec![pizza.clone()],
            categories: vec!["Pizza".to_string(), "Salad".to_string()],
            selection: CategorySelection::Only("Pizza".to_string()),
            cart: vec![CartLine {
                dish: pizza,
                quantity: 2,
            }],
            cart_item_count: 1,
            cart_subtotal: Decimal::from(9000),
            draft: ReservationDraft::default(),
            status: ReservationStatus::Confirmed,
        };

        let text = render(&snapshot);
        assert!(text.contains("== Menu All [Pizza] Salad"));
        assert!(text.contains("Margherita"));
        assert!(text.contains("₦4,500"));
        assert!(text.contains("== Cart (1 items)"));
        assert!(text.contains("₦9,000"));
        assert!(text.contains("Guests: 2"));
        assert!(text.contains("Reservation received"));
    }

    #[test]
    fn test_render_event() {
        let event = SessionEvent::new(
            7,
            "s",
            SessionEventPayload::CartItemChanged {
                dish_id: "p1".to_string(),
                quantity: 2,
                item_count: 1,
            },
        );
        assert_eq!(render_event(&event), "[7] CART_ITEM_CHANGED p1 → 2 (1 in cart)");

        let closed = SessionEvent::new(8, "s", SessionEventPayload::SessionClosed);
        assert_eq!(render_event(&closed), "[8] SESSION_CLOSED");
    }
}
