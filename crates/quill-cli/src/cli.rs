use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quill",
    about = "Append text paragraphs to Word documents in blob storage",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the quill HTTP server
    Serve(ServeArgs),
    /// Append a paragraph to a document blob
    Append(AppendArgs),
    /// Append a paragraph to a local document file
    AppendFile(AppendFileArgs),
    /// Print the paragraphs of a local document file
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct AppendArgs {
    /// Capability URI of the target blob
    pub blob_uri: String,
    /// Text to append
    pub content: String,
}

#[derive(Args)]
pub struct AppendFileArgs {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Args)]
pub struct ShowArgs {
    pub path: PathBuf,
}
