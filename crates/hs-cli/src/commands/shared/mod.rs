pub mod artifact;
pub mod parse;
pub mod session;
