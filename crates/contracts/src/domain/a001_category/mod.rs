pub mod aggregate;

pub use aggregate::{Category, CreateCategoryDto, NAME_MAX_LEN};
