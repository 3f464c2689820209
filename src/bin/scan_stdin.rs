//! Simple CLI that reads HTML from stdin and prints discovered media as JSON.
//!
//! An optional first argument supplies the base URL for resolving relative
//! source attributes:
//!
//! ```text
//! curl -s https://example.com/watch | scan_stdin https://example.com/watch
//! ```

use std::io::{self, Read};

use media_sniffer::{scan_with_options, Options};

fn main() {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args().nth(1);

    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let options = Options {
        base_url,
        ..Options::default()
    };
    let result = scan_with_options(&html, &options);

    println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
}
