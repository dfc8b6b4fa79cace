pub mod errors;
pub mod field;
pub mod template;
pub mod weekday;
