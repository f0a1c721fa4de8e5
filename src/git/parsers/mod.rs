pub mod ref_parser;
pub mod status_parser;

pub use ref_parser::{parse_tag_records, tag_format_args, TagRecord};
pub use status_parser::{parse_status_records, status_args, StatusRecord};
