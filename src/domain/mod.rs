pub mod employee;
pub mod ports;
