pub mod parse;
pub mod preprocess;
pub mod reveal;
