use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::digest::HashAlgorithm;
use crate::domain::{Identifier, OutputFormat, SelectBy, ShareCount, Threshold};

fn parse_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number between 1 and 255"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

fn parse_share_count(s: &str) -> Result<ShareCount, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number between 1 and 255"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "tss")]
#[command(about = "Threshold Secret Sharing: split a secret into shares and combine them again")]
pub struct Cli {
    /// Display additional logging output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret into shares
    Split {
        /// Number of shares required to reconstruct the secret
        #[arg(short, long, value_parser = parse_threshold, default_value_t = Threshold::default())]
        threshold: Threshold,

        /// Total number of shares to generate
        #[arg(short = 'n', long, value_parser = parse_share_count, default_value_t = ShareCount::default())]
        num_shares: ShareCount,

        /// Identifier attached to every share, 0-16 characters of [a-zA-Z0-9._-]
        #[arg(short, long)]
        identifier: Option<Identifier>,

        /// Digest embedded for verification: NONE, SHA1 or SHA256
        #[arg(short = 'H', long = "hash-alg", default_value_t = HashAlgorithm::Sha256)]
        hash_alg: HashAlgorithm,

        /// Left-pad the secret to a multiple of this many bytes (0-255)
        #[arg(short, long, default_value_t = 0)]
        pad_blocksize: u8,

        /// Share output format: human or binary (printed as hex)
        #[arg(short, long, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Read the secret from this file instead of stdin
        #[arg(short = 'I', long)]
        input_file: Option<PathBuf>,

        /// Write the shares to this file instead of stdout
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },
    /// Combine shares to recover a secret
    Combine {
        /// Strategy when more shares than the threshold are given
        #[arg(short, long, default_value_t = SelectBy::First)]
        select_by: SelectBy,

        /// Read shares from this file instead of stdin
        #[arg(short = 'I', long)]
        input_file: Option<PathBuf>,

        /// Write only the recovered secret to this file
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the version
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_defaults() {
        let cli = Cli::try_parse_from(["tss", "split"]).unwrap();
        let Commands::Split {
            threshold,
            num_shares,
            identifier,
            hash_alg,
            pad_blocksize,
            format,
            ..
        } = cli.command
        else {
            panic!("expected split");
        };
        assert_eq!(*threshold, 3);
        assert_eq!(*num_shares, 5);
        assert!(identifier.is_none());
        assert_eq!(hash_alg, HashAlgorithm::Sha256);
        assert_eq!(pad_blocksize, 0);
        assert_eq!(format, OutputFormat::Human);
    }

    #[test]
    fn test_split_options() {
        let cli = Cli::try_parse_from([
            "tss", "split", "-t", "2", "-n", "4", "-i", "abc123", "-H", "sha1", "-p", "8", "-f",
            "binary", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Split {
            threshold,
            num_shares,
            identifier,
            hash_alg,
            pad_blocksize,
            format,
            ..
        } = cli.command
        else {
            panic!("expected split");
        };
        assert_eq!(*threshold, 2);
        assert_eq!(*num_shares, 4);
        assert_eq!(identifier.unwrap().as_str(), "abc123");
        assert_eq!(hash_alg, HashAlgorithm::Sha1);
        assert_eq!(pad_blocksize, 8);
        assert_eq!(format, OutputFormat::Binary);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["tss", "split", "-t", "0"]).is_err());
        assert!(Cli::try_parse_from(["tss", "split", "-t", "300"]).is_err());
        assert!(Cli::try_parse_from(["tss", "split", "-i", "not valid!"]).is_err());
        assert!(Cli::try_parse_from(["tss", "split", "-H", "md5"]).is_err());
        assert!(Cli::try_parse_from(["tss", "combine", "-s", "random"]).is_err());
    }

    #[test]
    fn test_combine_options() {
        let cli = Cli::try_parse_from(["tss", "combine", "-s", "combinations", "--json"]).unwrap();
        let Commands::Combine {
            select_by, json, ..
        } = cli.command
        else {
            panic!("expected combine");
        };
        assert_eq!(select_by, SelectBy::Combinations);
        assert!(json);
    }
}
