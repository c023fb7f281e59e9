//! Domain types for threshold secret sharing
//!
//! This module contains validated newtypes and configuration:
//! - [`Secret`] - UTF-8 secret bytes (1..=65,502), zeroized on drop
//! - [`Threshold`] - Minimum shares required for reconstruction (1..=255)
//! - [`ShareCount`] - Total number of shares to create (1..=255)
//! - [`ShareIndex`] - Share evaluation point (1..=255)
//! - [`Identifier`] - Tag shared by all shares of one split
//! - [`OutputFormat`] / [`SelectBy`] - Split output and combine selection options
//! - [`SplitConfig`] / [`CombineConfig`] - Validated operation inputs

mod config;
mod identifier;
mod output_format;
mod secret;
mod select_by;
mod share_count;
mod share_index;
mod threshold;

pub use config::{CombineConfig, SplitConfig};
pub use identifier::Identifier;
pub(crate) use identifier::is_valid as is_valid_identifier;
pub use output_format::OutputFormat;
pub use secret::{PAD_BYTE, Secret};
pub use select_by::SelectBy;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
