pub mod catalog;
pub mod permissions;
pub mod roles;
