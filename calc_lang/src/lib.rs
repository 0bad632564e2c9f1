pub mod evaluation;
pub mod expression;
pub mod history;
pub mod parsing;
pub mod session;

mod convert;
mod display;
