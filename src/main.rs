#![doc = include_str!("../README.md")]

use clap::{Parser, Subcommand};
use colored::Colorize;
use core::error::Error;
use eslrest::{HttpClient, ReqwestHttpClient, SerializableConfig, compile_config, read_config};
use log::LevelFilter;
use std::{
    path::{Path, PathBuf},
    process::exit,
};
use tokio::{
    fs::{read, write},
    io::{AsyncWriteExt, Stdout, stdout},
};
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// A base URL of a service.
    #[arg(long)]
    base_url: Option<Url>,
    /// An API token.
    #[arg(long, env = "ESL_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Gets a resource as text.
    Get {
        /// A resource path.
        path: String,
        /// Indents a JSON response.
        #[arg(long)]
        pretty: bool,
    },
    /// Gets a resource as bytes.
    GetBytes {
        /// A resource path.
        path: String,
        /// An output file. Bytes are written to stdout if omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Posts a JSON payload.
    Post {
        /// A resource path.
        path: String,
        /// A JSON payload.
        payload: String,
        /// Indents a JSON response.
        #[arg(long)]
        pretty: bool,
    },
    /// Uploads a file with a JSON payload.
    Upload {
        /// A resource path.
        path: String,
        /// A file to upload.
        file: PathBuf,
        /// A JSON payload.
        #[arg(long)]
        payload: String,
    },
    /// Deletes a resource.
    Delete {
        /// A resource path.
        path: String,
        /// Indents a JSON response.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", error.to_string().red());
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        config,
        base_url,
        api_token,
        verbose,
        command,
    } = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let mut serializable_config = if let Some(path) = &config {
        read_config(path).await?
    } else {
        SerializableConfig::default()
    };
    serializable_config.merge(SerializableConfig {
        base_url,
        api_token,
    });
    let config = compile_config(serializable_config)?;

    let client = HttpClient::new(
        ReqwestHttpClient::new(),
        config.base_url().clone(),
        config.credential()?,
    );
    let mut output = stdout();

    match command {
        Command::Get { path, pretty } => {
            print_text(&mut output, &client.get(&path).await?, pretty).await?;
        }
        Command::GetBytes { path, output: file } => {
            let bytes = client.get_bytes(&path).await?;

            if let Some(file) = file {
                write(file, bytes).await?;
            } else {
                output.write_all(&bytes).await?;
            }
        }
        Command::Post {
            path,
            payload,
            pretty,
        } => {
            print_text(&mut output, &client.post(&path, &payload).await?, pretty).await?;
        }
        Command::Upload {
            path,
            file,
            payload,
        } => {
            client
                .post_multipart_file(&path, file_name(&file)?, read(&file).await?, &payload)
                .await?;
        }
        Command::Delete { path, pretty } => {
            print_text(&mut output, &client.delete(&path).await?, pretty).await?;
        }
    }

    output.flush().await?;

    Ok(())
}

async fn print_text(output: &mut Stdout, text: &str, pretty: bool) -> Result<(), Box<dyn Error>> {
    if text.is_empty() {
        return Ok(());
    }

    let text = if pretty {
        prettify(text)
    } else {
        text.into()
    };

    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;

    Ok(())
}

fn prettify(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| text.into())
}

fn file_name(path: &Path) -> Result<&str, String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("invalid file name: {}", path.display()))
}
