pub mod check;
pub mod forms;
pub mod validate;
