pub mod aggregate;

pub use aggregate::{assignable_roles, Role};
