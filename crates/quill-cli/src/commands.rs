use std::sync::Arc;

use colored::Colorize;

use quill_append::{append_content_to_blob, append_content_to_file};
use quill_blob::{BlobUri, HttpBlobStore};
use quill_docx::WordDocument;
use quill_server::{QuillServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Append(args) => cmd_append(args).await,
        Command::AppendFile(args) => cmd_append_file(args),
        Command::Show(args) => cmd_show(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let store = Arc::new(HttpBlobStore::new()?);
    QuillServer::new(config, store).serve().await?;
    Ok(())
}

async fn cmd_append(args: AppendArgs) -> anyhow::Result<()> {
    let uri = BlobUri::parse(&args.blob_uri)?;
    let store = HttpBlobStore::new()?;
    append_content_to_blob(&store, &uri, &args.content).await?;
    println!(
        "{} Appended paragraph to {}",
        "✓".green().bold(),
        uri.to_string().bold()
    );
    Ok(())
}

fn cmd_append_file(args: AppendFileArgs) -> anyhow::Result<()> {
    append_content_to_file(&args.path, &args.content)?;
    println!(
        "{} Appended paragraph to {}",
        "✓".green().bold(),
        args.path.display().to_string().bold()
    );
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let document = WordDocument::from_bytes(&std::fs::read(&args.path)?)?;
    let texts = document.paragraph_texts()?;
    if texts.is_empty() {
        println!("(empty document)");
        return Ok(());
    }
    for (index, text) in texts.iter().enumerate() {
        println!("{:>4}  {}", (index + 1).to_string().dimmed(), text);
    }
    Ok(())
}
