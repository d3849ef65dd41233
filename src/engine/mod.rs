pub mod config;
pub mod correction;
pub mod error;
pub mod highlight;
pub mod token;
pub mod tokenizer;

pub use correction::Correction;
pub use highlight::{build_segments, build_segments_with, mistake_count, MatchMode, Segment};
pub use token::Token;
pub use tokenizer::tokenize;
