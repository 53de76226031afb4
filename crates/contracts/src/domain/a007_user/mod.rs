pub mod aggregate;

pub use aggregate::{User, UserId, ADMIN_EMAIL};
