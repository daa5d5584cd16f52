//! Badge colour mappings.

mod tone;

pub use tone::{BadgeTone, Palette};
