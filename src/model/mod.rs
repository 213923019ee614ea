pub mod dtos;
pub mod structs;
