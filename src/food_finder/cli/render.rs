//! # Rendering
//!
//! Turns command results into the text the interpreter writes. Everything
//! here returns `String`s so it can be tested without a terminal.
//!
//! The restaurant table is 59 columns wide between two 60-dash rules:
//!
//! ```text
//!  Name                           Cuisine               Price
//! ------------------------------------------------------------
//!  Cafe Masala                    Indian               $25.00
//! ------------------------------------------------------------
//! ```
//!
//! Widths are measured in terminal columns (`unicode-width`), not bytes, so
//! accented names still line up. A price wider than its column (`$321.00`)
//! borrows the extra columns from the name, so every row stays 59 wide.

use crate::commands::{CmdMessage, MessageLevel};
use crate::currency::{number_to_currency, CurrencyOptions};
use crate::model::Restaurant;
use crate::text::TextExt;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 60;
pub const NAME_WIDTH: usize = 30;
pub const CUISINE_WIDTH: usize = 20;
pub const PRICE_WIDTH: usize = 6;
pub const NO_LISTINGS: &str = "No listings found";

/// Blank line, upper-cased title centred on the rule width, blank line.
pub fn render_action_header(title: &str) -> String {
    let centred = format!("{:^width$}", title.to_uppercase(), width = LINE_WIDTH);
    format!("\n{}\n\n", centred.trim_end())
}

pub fn render_table(restaurants: &[Restaurant], options: &CurrencyOptions) -> String {
    let rule = "-".repeat(LINE_WIDTH);
    let mut out = String::new();

    out.push_str(&row("Name", "Cuisine", "Price"));
    out.push_str(&rule);
    out.push('\n');

    if restaurants.is_empty() {
        out.push_str(NO_LISTINGS);
        out.push('\n');
    }
    for r in restaurants {
        let price = r
            .price
            .map(|p| number_to_currency(p, options))
            .unwrap_or_default();
        out.push_str(&row(&r.name.titleize(), &r.cuisine.titleize(), &price));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

fn row(name: &str, cuisine: &str, price: &str) -> String {
    let overflow = price.width().saturating_sub(PRICE_WIDTH).min(NAME_WIDTH - 1);
    let name_width = NAME_WIDTH - overflow;
    format!(
        " {} {} {}\n",
        pad_right(&truncate_to_width(name, name_width), name_width),
        pad_right(&truncate_to_width(cuisine, CUISINE_WIDTH), CUISINE_WIDTH),
        pad_left(price, PRICE_WIDTH + overflow)
    )
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let content = if use_color {
            match message.level {
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
                MessageLevel::Error => message.content.red().to_string(),
            }
        } else {
            message.content.clone()
        };
        out.push('\n');
        out.push_str(&content);
        out.push('\n');
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

/// Cuts `s` to at most `max_width` columns, marking the cut with `…`.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
