//! Example: log in to a File Browser server.
//!
//! Usage:
//!   cargo run --example login -- <BASE_URL> <USERNAME> <PASSWORD>

use filebrowse::Client;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "Usage: cargo run --example login -- <BASE_URL> <USERNAME> <PASSWORD>";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("filebrowse=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let mut args = std::env::args().skip(1);
    let (Some(base_url), Some(username), Some(password)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    println!("Logging in to: {}", base_url);

    let mut client = Client::new(base_url);
    match client.authenticate(&username, &password).await {
        Ok(session) => {
            println!("Login successful!");
            println!("Server: {}", session.base_url());
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }
}
