pub mod aggregate;

pub use aggregate::{AssignRoleDto, BranchRef, DepartmentRef, EmployeeAccount, PendingEmployee};
