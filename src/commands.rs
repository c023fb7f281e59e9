use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::codec;
use crate::combiner::CombineResult;
use crate::domain::{CombineConfig, SelectBy, SplitConfig};

/// Split a secret into shares, one printable line per share
///
/// Human shares are returned as-is, binary shares hex encoded.
///
/// # Errors
/// Returns an error if the split itself fails
pub fn split_secret(config: &SplitConfig) -> Result<Vec<String>> {
    let shares = crate::split(config).context("Failed to split secret")?;
    Ok(shares.iter().map(ToString::to_string).collect())
}

/// Reject text carrying control characters other than tab, newline and CR
///
/// # Errors
/// Returns an error naming `what` if a disallowed byte is found
pub fn ensure_text(input: &str, what: &str) -> Result<()> {
    if input
        .bytes()
        .any(|b| b == 0x7F || (b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r')))
    {
        bail!("{what} appears to contain binary data");
    }
    Ok(())
}

/// Pull human format shares out of free text, one per line
///
/// Lines are trimmed; anything that does not match the share pattern is
/// skipped.
#[must_use]
pub fn extract_shares(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| {
            let keep = codec::is_human(line.as_bytes());
            if !keep && !line.is_empty() {
                debug!(line, "skipping line that is not a share");
            }
            keep
        })
        .map(str::to_string)
        .collect()
}

/// Combine shares to recover the original secret
///
/// # Errors
/// Returns an error if no shares are given or recombination fails
pub fn combine_shares(share_strings: &[String], select_by: SelectBy) -> Result<CombineResult> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let config = CombineConfig::new(share_strings)
        .context("Invalid shares")?
        .with_select_by(select_by);

    crate::combine(&config).context("Failed to combine shares")
}

/// Render a combine result for the terminal
///
/// With `include_secret` unset the secret line is left out so it can be
/// written elsewhere.
///
/// # Errors
/// Returns an error if JSON serialization fails
pub fn render_result(result: &CombineResult, json: bool, include_secret: bool) -> Result<String> {
    if json {
        let mut value = serde_json::to_value(result).context("Failed to serialize result")?;
        if !include_secret {
            if let Some(map) = value.as_object_mut() {
                map.remove("secret");
            }
        }
        let mut out = serde_json::to_string_pretty(&value).context("Failed to serialize result")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    writeln!(out, "RECOVERED SECRET METADATA")?;
    writeln!(out, "*************************")?;
    writeln!(out, "hash : {}", result.hash.as_deref().unwrap_or(""))?;
    writeln!(out, "hash_alg : {}", result.hash_alg)?;
    writeln!(out, "identifier : {}", result.identifier)?;
    writeln!(out, "process_time : {}ms", result.processing_time_ms)?;
    writeln!(out, "threshold : {}", result.threshold)?;
    writeln!(out, "select_by : {}", result.select_by)?;
    if let Some(combinations) = result.combinations {
        writeln!(out, "combinations : {combinations}")?;
    }
    if include_secret {
        writeln!(out, "secret :")?;
        writeln!(out, "{}", result.secret)?;
    }
    Ok(out)
}
