pub mod a001_customer;
pub mod a002_employee;
pub mod a003_supplier;
