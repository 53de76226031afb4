pub mod aggregate;

pub use aggregate::{permission_label, Role, RoleId, ADMIN_ROLE_NAME, PERMISSION_OPTIONS};
