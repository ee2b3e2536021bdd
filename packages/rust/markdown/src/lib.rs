//! Markdown handling for the skill index.
//!
//! Three passes, each a pure string operation:
//! 1. [`parse_header`] reads `name:` / `description:` from a metadata file
//! 2. [`render_table`] turns artifacts into a markdown table
//! 3. [`splice`] swaps the region between two sentinel markers

mod header;
mod splice;
mod table;

pub use header::{SkillHeader, parse_header};
pub use splice::splice;
pub use table::{TableOptions, render_table};
