mod assembler;
mod expander;

pub use assembler::build_results;
pub use expander::{KeywordCategory, KeywordTable};
