use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use tss::cli::{Cli, Commands};
use tss::commands::{combine_shares, ensure_text, extract_shares, render_result, split_secret};
use tss::domain::{Secret, SplitConfig};

/// Read a secret from a file, piped stdin, or a hidden prompt
fn read_secret(input_file: Option<&Path>) -> Result<Zeroizing<String>> {
    let mut secret = Zeroizing::new(String::new());

    if let Some(path) = input_file {
        *secret = fs::read_to_string(path)
            .with_context(|| format!("Failed to read secret from {}", path.display()))?;
    } else if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter your secret:");
        *secret = rpassword::read_password().context("Failed to read secret from stdin")?;
    } else {
        io::stdin()
            .read_to_string(&mut secret)
            .context("Failed to read secret from stdin")?;
    }

    let trimmed = secret.trim_end_matches(['\r', '\n']).len();
    secret.truncate(trimmed);
    ensure_text(&secret, "secret")?;
    Ok(secret)
}

/// Read share text from a file, piped stdin, or hidden prompts
/// (one share per line, empty line or `.` to finish)
fn read_share_text(input_file: Option<&Path>) -> Result<String> {
    if let Some(path) = input_file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read shares from {}", path.display()));
    }

    let mut text = String::new();
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares, one per line, and an empty line or a dot (.) to finish:");
        loop {
            let share = rpassword::read_password().context("Failed to read share from stdin")?;
            let share = share.trim();
            if share.is_empty() || share == "." {
                break;
            }
            text.push_str(share);
            text.push('\n');
        }
    } else {
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read shares from stdin")?;
    }
    Ok(text)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "output written");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "tss=debug" } else { "tss=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Split {
            threshold,
            num_shares,
            identifier,
            hash_alg,
            pad_blocksize,
            format,
            input_file,
            output_file,
        } => {
            let secret = read_secret(input_file.as_deref())?;

            let mut config = SplitConfig::new(Secret::new(secret.as_bytes())?, threshold, num_shares)?
                .with_hash_algorithm(hash_alg)
                .with_pad_blocksize(pad_blocksize)
                .with_format(format);
            if let Some(identifier) = identifier {
                config = config.with_identifier(identifier);
            }
            debug!(identifier = ?config.identifier(), "split configured");

            let shares = split_secret(&config)?.join("\n");
            match output_file {
                Some(path) => write_output(&path, &format!("{shares}\n"))?,
                None => println!("{shares}"),
            }
        }
        Commands::Combine {
            select_by,
            input_file,
            output_file,
            json,
        } => {
            let text = Zeroizing::new(read_share_text(input_file.as_deref())?);
            ensure_text(&text, "share input")?;

            let shares = extract_shares(&text);
            if shares.is_empty() {
                bail!("No shares provided");
            }
            let result = combine_shares(&shares, select_by)?;

            match output_file {
                Some(path) => {
                    write_output(&path, &format!("{}\n", result.secret))?;
                    print!("{}", render_result(&result, json, false)?);
                    if !json {
                        println!("secret file : [{}]", path.display());
                    }
                }
                None => print!("{}", render_result(&result, json, true)?),
            }
        }
        Commands::Version => {
            println!("tss {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
