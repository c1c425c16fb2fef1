//! Coordinate intake: GPS fixes and manual overrides

pub mod fix;
pub mod parser;

pub use fix::{FixResolver, FixSource, GpsFix};
pub use parser::parse_override;
