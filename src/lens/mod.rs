//! Lens module
//!
//! This module provides the high-level "lens" abstractions: the lookup
//! client and the presentation engine that renders what it returns.
//!
//! # Architecture
//!
//! Data moves through the lenses in one direction:
//!
//! 1. [`ip::IpLens`] fetches a [`record::Record`] per address
//! 2. [`fields::FieldSelection`] resolves the fields to show for it
//! 3. [`present::Presenter`] renders it with a [`theme::Theme`], or an error
//!    panel for failed lookups
//! 4. [`export::ExportLens`] writes the successful records to a file
//!
//! Internal helpers (table building, tree guides, style parsing) stay
//! private to their modules.

// =============================================================================
// Utility module
// =============================================================================
pub mod utils;

// =============================================================================
// Presentation engine (always available)
// =============================================================================

pub mod export;
pub mod fields;
pub mod present;
pub mod record;
pub mod theme;

// =============================================================================
// Lookup client (lookup feature)
// =============================================================================

// IpLens - ip-api.com lookup
#[cfg(feature = "lookup")]
pub mod ip;
