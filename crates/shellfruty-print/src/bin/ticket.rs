//! # Ticket Printer
//!
//! Renders a sale as a thermal ticket and optionally sends it to the print
//! handler.
//!
//! ## Usage
//! ```bash
//! # Show the ticket text
//! cargo run -p shellfruty-print --bin ticket -- venta.json
//!
//! # Resolve the branch header from the catalog, read the sale from stdin
//! curl -s $API/ventas/1532 | cargo run -p shellfruty-print --bin ticket -- --branches sucursales.json
//!
//! # Emit the deep link, or hand it to RawBT directly
//! cargo run -p shellfruty-print --bin ticket -- venta.json --output uri
//! cargo run -p shellfruty-print --bin ticket -- venta.json --dispatch
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use shellfruty_core::validation::validate_sale;
use shellfruty_core::{ReceiptFormatter, SaleRecord};
use shellfruty_print::catalog::{load_branches, load_sale, parse_sale};
use shellfruty_print::{
    init_tracing, PrintOutcome, PrintResult, PrinterService, PrinterSettings, UriLauncher,
    WriterDispatcher,
};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Plain ticket text
    Text,
    /// Base64 payload only
    Base64,
    /// `{scheme}:base64,{payload}` deep link
    Uri,
}

#[derive(Parser, Debug)]
#[command(name = "ticket", about = "Render Shellfruty sale tickets for the thermal printer", version)]
struct Cli {
    /// Sale JSON (VentaDetalle); reads stdin when omitted
    #[arg(value_name = "SALE_JSON")]
    sale: Option<PathBuf>,

    /// Branch catalog used to name the sale's branch
    #[arg(long, env = "SHELLFRUTY_BRANCHES", value_name = "FILE")]
    branches: Option<PathBuf>,

    /// Branch name to print, overriding the catalog
    #[arg(long, value_name = "NAME")]
    branch: Option<String>,

    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,

    /// Hand the deep link to the OS print handler instead of writing output
    #[arg(long)]
    dispatch: bool,

    /// Print the cashier line under the date
    #[arg(long)]
    show_cashier: bool,

    /// Deep-link scheme
    #[arg(long, value_name = "SCHEME")]
    scheme: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();
    run(cli)?;
    Ok(())
}

fn run(cli: Cli) -> PrintResult<()> {
    let mut settings = PrinterSettings::from_env()?;
    if cli.show_cashier {
        settings.show_cashier = true;
    }
    if let Some(scheme) = cli.scheme {
        settings.scheme = scheme;
    }

    let formatter = ReceiptFormatter::new(settings.layout()?)?;
    let sale = read_sale(cli.sale.as_deref())?;

    if let Err(problem) = validate_sale(&sale) {
        warn!(sale_id = sale.sale_id, %problem, "sale data looks inconsistent, printing anyway");
    }

    let branch_name = match (cli.branch, cli.branches) {
        (Some(name), _) => name,
        (None, Some(path)) => load_branches(&path)?.ticket_name(sale.branch_id),
        (None, None) => String::new(),
    };

    if cli.dispatch {
        let service = PrinterService::new(formatter, UriLauncher).with_scheme(&settings.scheme);
        if service.print_receipt(&sale, &branch_name) == PrintOutcome::Unavailable {
            info!(sale_id = sale.sale_id, "run with --output uri to print manually");
        }
        return Ok(());
    }

    match cli.output {
        Output::Text => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(formatter.format_ticket(&sale, &branch_name).as_bytes())?;
            stdout.flush()?;
        }
        Output::Base64 => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", formatter.encode_ticket(&sale, &branch_name))?;
        }
        Output::Uri => {
            let service = PrinterService::new(formatter, WriterDispatcher::new(io::stdout()))
                .with_scheme(&settings.scheme);
            service.print_receipt(&sale, &branch_name).into_result()?;
        }
    }

    Ok(())
}

fn read_sale(path: Option<&std::path::Path>) -> PrintResult<SaleRecord> {
    match path {
        Some(path) => load_sale(path),
        None => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            parse_sale(&json)
        }
    }
}
