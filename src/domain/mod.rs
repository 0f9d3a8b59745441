pub mod commands;
pub mod movie;
pub mod rental;
pub mod value_objects;

pub use value_objects::*;
