//! CLI tool to render the laporan table from a running server.
//!
//! Usage:
//!   cargo run --bin render-laporan -- --base-url http://localhost:8080 --detail 3

use std::env;

use laporan_lib::views::{HttpReportSource, LaporanTable, render_document};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Render { base_url: String, detail: Option<i32> },
    Help,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let default_base_url =
        env::var("LAPORAN_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let (base_url, detail) = match parse_args(&args, default_base_url) {
        Ok(Command::Render { base_url, detail }) => (base_url, detail),
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            std::process::exit(1);
        }
    };

    let source = HttpReportSource::new(&base_url);
    let mut table = LaporanTable::new();
    table.mount(&source).await;

    if let Some(id) = detail
        && !table.open_detail_by_id(id)
    {
        eprintln!("Warning: laporan {} not found, detail not opened", id);
    }

    match render_document(&table) {
        Ok(html) => print!("{}", html),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Parse arguments (without the program name). Every option requires a value.
fn parse_args(args: &[String], default_base_url: String) -> Result<Command, String> {
    let mut base_url = default_base_url;
    let mut detail: Option<i32> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--base-url" | "-u" => match iter.next() {
                Some(value) if !value.starts_with('-') => base_url = value.clone(),
                _ => return Err(format!("{} expects a server URL", arg)),
            },
            "--detail" | "-d" => match iter.next().map(|v| v.parse::<i32>()) {
                Some(Ok(id)) => detail = Some(id),
                _ => return Err(format!("{} expects a numeric laporan id", arg)),
            },
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Render { base_url, detail })
}

fn print_usage() {
    eprintln!("Usage: render-laporan [OPTIONS]");
    eprintln!();
    eprintln!("Fetches /api/laporan and prints the rendered table as HTML.");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  -u, --base-url <URL>  Server root (default: $LAPORAN_BASE_URL or {})",
        DEFAULT_BASE_URL
    );
    eprintln!("  -d, --detail <ID>     Open the detail overlay for this laporan");
    eprintln!("  -h, --help            Show this help message");
}
