//! # Terminal Shell
//!
//! Line-oriented front end over stdin/stdout.
//!
//! ## Session
//! ```text
//! Departmental Store - type `help` for commands
//! > add Wheat Flour 2
//! ---- Departmental Store Invoice ----
//! Generated on: 2024-05-01 09:30:00
//!
//! Wheat Flour: 2.0 per kg x Rs.40 = Rs.80
//!
//! Grand Total: Rs.80
//! > export
//! Saved /home/op/.local/share/pos/invoices/invoice_20240501_093012.pdf (1 page, opened)
//! > quit
//! ```
//!
//! Item names may contain spaces: the quantity is the LAST token on the
//! line and everything between the command word and it is the name.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

use counter_receipt::{DocumentOpener, OpenOutcome};

use crate::commands;
use crate::AppState;

/// Prompt printed before each line is read.
const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  catalog              list items and prices
  add <item> <qty>     add a quantity of an item
  remove <item> <qty>  remove a quantity of an item
  invoice              show the current invoice
  json                 show the current invoice as JSON
  export               save the invoice as a PDF receipt
  help                 show this text
  quit                 leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Catalog,
    Add { item: String, quantity: String },
    Remove { item: String, quantity: String },
    Invoice,
    Json,
    Export,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}', type `help` for the list")]
    UnknownCommand(String),

    #[error("Usage: {0} <item> <qty>")]
    MissingArguments(&'static str),
}

/// Parses one input line.
pub fn parse_line(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "catalog" | "items" => Ok(ShellCommand::Catalog),
        "add" => {
            let (item, quantity) = split_item(rest).ok_or(ParseError::MissingArguments("add"))?;
            Ok(ShellCommand::Add { item, quantity })
        }
        "remove" => {
            let (item, quantity) = split_item(rest).ok_or(ParseError::MissingArguments("remove"))?;
            Ok(ShellCommand::Remove { item, quantity })
        }
        "invoice" => Ok(ShellCommand::Invoice),
        "json" => Ok(ShellCommand::Json),
        "export" => Ok(ShellCommand::Export),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}

/// `"Wheat Flour 2"` → `("Wheat Flour", "2")`.
fn split_item(rest: &str) -> Option<(String, String)> {
    let (item, quantity) = rest.rsplit_once(char::is_whitespace)?;
    let item = item.split_whitespace().collect::<Vec<_>>().join(" ");
    if item.is_empty() {
        return None;
    }
    Some((item, quantity.to_string()))
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run<R, W>(app: &AppState, opener: &dyn DocumentOpener, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{} - type `help` for commands", app.config.store_name)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }
        // Bytes that are not UTF-8 become U+FFFD and fail parsing like any typo.
        let line = String::from_utf8_lossy(&buf);

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                debug!(line = %line, error = %err, "Unparsed shell line");
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        execute(app, opener, command, &mut output)?;
    }

    info!("Shell session ended");
    Ok(())
}

fn execute<W: Write>(app: &AppState, opener: &dyn DocumentOpener, command: ShellCommand, output: &mut W) -> io::Result<()> {
    let (catalog, cart, config) = (&app.catalog, &app.cart, &app.config);

    match command {
        ShellCommand::Empty | ShellCommand::Quit => {}
        ShellCommand::Help => writeln!(output, "{}", HELP)?,
        ShellCommand::Catalog => {
            for category in commands::catalog::get_catalog(catalog).categories {
                writeln!(output, "{}", category.name)?;
                for item in category.items {
                    writeln!(output, "  {:<20} {} {}", item.name, item.unit_price, item.unit)?;
                }
            }
        }
        ShellCommand::Add { item, quantity } if missing_quantity(app, &item, &quantity) => {
            writeln!(output, "{}", ParseError::MissingArguments("add"))?;
        }
        ShellCommand::Remove { item, quantity } if missing_quantity(app, &item, &quantity) => {
            writeln!(output, "{}", ParseError::MissingArguments("remove"))?;
        }
        ShellCommand::Add { item, quantity } => {
            match commands::cart::add_to_cart(catalog, cart, config, &item, &quantity) {
                Ok(response) => writeln!(output, "{}", response.text)?,
                Err(err) => writeln!(output, "{}", err)?,
            }
        }
        ShellCommand::Remove { item, quantity } => {
            match commands::cart::remove_from_cart(catalog, cart, config, &item, &quantity) {
                Ok(response) => writeln!(output, "{}", response.text)?,
                Err(err) => writeln!(output, "{}", err)?,
            }
        }
        ShellCommand::Invoice => {
            writeln!(output, "{}", commands::cart::get_invoice(catalog, cart, config).text)?;
        }
        ShellCommand::Json => {
            let response = commands::cart::get_invoice(catalog, cart, config);
            let json = serde_json::to_string_pretty(&response.invoice).map_err(io::Error::from)?;
            writeln!(output, "{}", json)?;
        }
        ShellCommand::Export => match commands::receipt::export_invoice(catalog, cart, config, opener) {
            Ok(response) => {
                let pages = if response.pages == 1 { "page" } else { "pages" };
                let opened = match &response.opened {
                    OpenOutcome::Opened => "opened".to_string(),
                    OpenOutcome::Skipped => "not opened".to_string(),
                    OpenOutcome::Failed { reason } => format!("could not open: {}", reason),
                };
                writeln!(
                    output,
                    "Saved {} ({} {}, {})",
                    response.path.display(),
                    response.pages,
                    pages,
                    opened
                )?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        },
    }
    Ok(())
}

/// `add Wheat Flour` splits as item `Wheat`, quantity `Flour`. When the
/// whole line names a catalog item the quantity was left off.
fn missing_quantity(app: &AppState, item: &str, quantity: &str) -> bool {
    quantity.parse::<f64>().is_err() && app.catalog.catalog().contains(&format!("{} {}", item, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CartState, CatalogState, ConfigState};
    use counter_core::Quantity;
    use counter_receipt::OpenError;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    struct NeverOpens;

    impl DocumentOpener for NeverOpens {
        fn open(&self, _path: &Path) -> Result<(), OpenError> {
            panic!("opener must not run when opening is off");
        }
    }

    fn app(export_dir: PathBuf) -> AppState {
        AppState {
            catalog: CatalogState::default(),
            cart: CartState::new(),
            config: ConfigState::default().export_dir(export_dir).open_after_export(false),
        }
    }

    fn session(app: &AppState, script: &str) -> String {
        let mut output = Vec::new();
        run(app, &NeverOpens, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_multi_word_item() {
        assert_eq!(
            parse_line("add Wheat Flour 2").unwrap(),
            ShellCommand::Add {
                item: "Wheat Flour".to_string(),
                quantity: "2".to_string()
            }
        );
        assert_eq!(
            parse_line("  REMOVE   Rice   Flour  0.5 ").unwrap(),
            ShellCommand::Remove {
                item: "Rice Flour".to_string(),
                quantity: "0.5".to_string()
            }
        );
    }

    #[test]
    fn test_parse_simple_words() {
        assert_eq!(parse_line("").unwrap(), ShellCommand::Empty);
        assert_eq!(parse_line("invoice").unwrap(), ShellCommand::Invoice);
        assert_eq!(parse_line("Quit").unwrap(), ShellCommand::Quit);
        assert_eq!(parse_line("?").unwrap(), ShellCommand::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_line("add Eggs"), Err(ParseError::MissingArguments("add")));
        assert_eq!(parse_line("remove"), Err(ParseError::MissingArguments("remove")));
        assert_eq!(parse_line("checkout"), Err(ParseError::UnknownCommand("checkout".to_string())));
    }

    #[test]
    fn test_session_add_and_remove() {
        let app = app(std::env::temp_dir());
        let out = session(&app, "add Wheat Flour 2\nadd Wheat Flour 1.5\nremove Wheat Flour 10\nquit\n");

        assert!(out.contains("Wheat Flour: 2.0 per kg x Rs.40 = Rs.80"));
        assert!(out.contains("Wheat Flour: 3.5 per kg x Rs.40 = Rs.140"));
        assert!(out.trim_end().ends_with(">"));
        assert!(app.cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let app = app(std::env::temp_dir());
        let out = session(&app, "add Saffron 1\nfrobnicate\nadd Eggs 2\n");

        assert!(out.contains("[NOT_FOUND] Item not found: Saffron"));
        assert!(out.contains("Unknown command 'frobnicate'"));
        assert!(out.contains("Grand Total: Rs.10"));
    }

    #[test]
    fn test_session_survives_non_utf8_line() {
        let app = app(std::env::temp_dir());
        let mut output = Vec::new();
        let script: &[u8] = b"add Eggs 2\nadd Eggs \xff\nadd Milk 1\n";
        run(&app, &NeverOpens, Cursor::new(script), &mut output).unwrap();

        assert_eq!(app.cart.with_cart(|c| c.quantity_of("Eggs")), Some(Quantity::from_units(2)));
        assert_eq!(app.cart.with_cart(|c| c.quantity_of("Milk")), Some(Quantity::from_units(1)));
        assert!(String::from_utf8_lossy(&output).contains("Grand Total: Rs.60"));
    }

    #[test]
    fn test_session_item_without_quantity_shows_usage() {
        let app = app(std::env::temp_dir());
        let out = session(&app, "add Wheat Flour\nadd Eggs 1\nremove Wheat Flour\n");

        assert!(out.contains("Usage: add <item> <qty>"));
        assert!(out.contains("Usage: remove <item> <qty>"));
        assert!(!out.contains("Item not found"));
        assert_eq!(app.cart.with_cart(|c| c.len()), 1);
    }

    #[test]
    fn test_session_catalog_and_json() {
        let app = app(std::env::temp_dir());
        let out = session(&app, "catalog\nadd Milk 1\njson\n");

        assert!(out.contains("Flours\n"));
        assert!(out.contains("Milk"));
        assert!(out.contains("\"grandTotal\": 5000"));
    }

    #[test]
    fn test_session_export() {
        let dir = std::env::temp_dir().join(format!("counter-shell-{}", uuid::Uuid::new_v4()));
        let app = app(dir.clone());
        let out = session(&app, "add Turmeric 0.25\nexport\n");

        assert!(out.contains("Saved "));
        assert!(out.contains("(1 page, not opened)"));
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
