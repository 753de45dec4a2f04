#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! whatsip - IP lookup with themed output
//!
//! whatsip looks up geolocation and network information for IP addresses and
//! renders it through one of several themes. It can be used as both a
//! command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (always) | Field catalog, themes, presentation, export | `tabled`, `owo-colors` |
//! | `lookup` | ip-api.com client | `ureq` |
//! | `cli` | Command-line binary | `clap`, `tracing-subscriber` |
//!
//! ```toml
//! # Rendering and export only, bring your own records
//! whatsip = { version = "0.3", default-features = false }
//!
//! # Rendering plus the lookup client
//! whatsip = { version = "0.3", default-features = false, features = ["lookup"] }
//! ```
//!
//! # Architecture
//!
//! - **[`lens`]**: business logic
//!   - `record`: the lookup record and its reserved keys
//!   - `fields`: field catalog, selection and classification
//!   - `theme`: the eight presentation themes
//!   - `present`: error-or-theme dispatch to an output sink
//!   - `export`: JSON / Markdown / text file export
//!   - `ip`: lookup client (requires `lookup`)
//!
//! - **[`config`]**: configuration management
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use whatsip::lens::fields::FieldSelection;
//! use whatsip::lens::ip::{IpLens, IpLookupArgs};
//! use whatsip::lens::present::Presenter;
//! use whatsip::lens::theme::Palette;
//! use whatsip::WhatsipConfig;
//!
//! let config = WhatsipConfig::default();
//! let catalog = config.catalog();
//! let selection = FieldSelection::parse("city,isp");
//!
//! let lens = IpLens::from_config(&config);
//! let args = IpLookupArgs::new("8.8.8.8")
//!     .with_fields(selection.requested_fields(catalog.default_fields(), catalog.all_known_fields()));
//! let record = lens.lookup(&args)?;
//!
//! let presenter = Presenter::new(&catalog, config.theme(), Palette::new(&config.style, true));
//! presenter.present(&mut std::io::stdout(), &record, &selection)?;
//! ```

pub mod config;
pub mod lens;

// =============================================================================
// Configuration
// =============================================================================

pub use config::{StyleConfig, WhatsipConfig};

// =============================================================================
// Lens Module - commonly used types
// =============================================================================

pub use lens::export::{ExportError, ExportFormat, ExportLens};
pub use lens::fields::{classify, Category, Classification, FieldCatalog, FieldSelection};
pub use lens::present::{Presentation, Presenter};
pub use lens::record::{Record, RecordStatus};
pub use lens::theme::{Palette, RenderContext, Theme};

#[cfg(feature = "lookup")]
pub use lens::ip::{IpLens, IpLookupArgs, LookupError};
