//! Display labels and key sizing
//!
//!     glyphs    - static key-name, width and function-key tables
//!     describe  - alias expression rules
//!     keys      - token to label/class mapping

pub mod describe;
pub mod glyphs;
pub mod keys;

pub use describe::{describe, AliasDescriptions};
pub use keys::{width_class, KeyLabeler, RenderedKey};
