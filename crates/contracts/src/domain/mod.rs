pub mod a001_category;
pub mod a002_employee;
pub mod a003_role;
