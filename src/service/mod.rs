pub mod parser;
pub mod snap;
pub mod time_extract;
pub mod timeline;
