pub mod expr;

pub use expr::{Error, Expr};
