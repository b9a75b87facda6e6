pub mod goodreads_parser;

pub use goodreads_parser::{GoodreadsParser, Parser};
