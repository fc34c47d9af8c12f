pub mod decode;
pub mod encode;
pub mod list;

pub use decode::parse_listing;
pub use encode::{to_wire_string, write_listing};
pub use list::{list, list_dir};
