//! Example: end-to-end upload with a share link.
//!
//! Logs in, ensures the destination folder exists, uploads a local file with
//! the resumable protocol, and prints the resulting public links.
//!
//! Usage:
//!   cargo run --example upload_share -- <BASE_URL> <USERNAME> <PASSWORD> <LOCAL_FILE> <REMOTE_FOLDER>

use filebrowse::{Client, FbError};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str =
    "Usage: cargo run --example upload_share -- <BASE_URL> <USERNAME> <PASSWORD> <LOCAL_FILE> <REMOTE_FOLDER>";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("filebrowse=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let mut args = std::env::args().skip(1);
    let (Some(base_url), Some(username), Some(password), Some(local_file), Some(remote_folder)) = (
        args.next(),
        args.next(),
        args.next(),
        args.next(),
        args.next(),
    ) else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    if !std::path::Path::new(&local_file).exists() {
        eprintln!("Error: file not found: {}", local_file);
        std::process::exit(1);
    }

    println!("Logging in...");
    let mut client = Client::new(base_url);
    if let Err(e) = client.authenticate(&username, &password).await {
        eprintln!("Login failed: {}", e);
        std::process::exit(1);
    }

    match client.resources().create_folder(&remote_folder).await {
        Ok(folder) => println!("Created folder: {}", folder.path),
        Err(FbError::Conflict { path }) => println!("Folder already exists: {}", path),
        Err(e) => {
            eprintln!("Folder creation failed: {}", e);
            std::process::exit(1);
        }
    }

    println!("Uploading {} to {}...", local_file, remote_folder);
    match client.upload_and_share(&local_file, &remote_folder).await {
        Ok(report) => {
            println!("Upload complete!");
            println!("Remote path: {}", report.descriptor.path);
            println!("Size: {} bytes", report.descriptor.size);
            println!("Browse: {}", report.full_path);
            match report.share {
                Some(share) => {
                    println!("Share page: {}", share.share_url);
                    println!("Direct download: {}", share.download_url);
                }
                None => println!("Server issued no share record for this path."),
            }
        }
        Err(e) => {
            eprintln!("Upload failed: {}", e);
            std::process::exit(1);
        }
    }
}
