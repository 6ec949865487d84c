//! Grouping and rendering of listed addresses.
//!
//! - [`InterfaceAddressGroup`]: ordered interface → addresses mapping for one family
//! - [`AddressReport`]: the per-family groups of one listing
//! - [`write_report`]: grouped or flat text output

mod group;
mod render;

pub use group::{AddressReport, InterfaceAddressGroup};
pub use render::{write_flat, write_grouped, write_report};
