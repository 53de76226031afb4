pub mod aggregate;

pub use aggregate::{Return, ReturnId};
