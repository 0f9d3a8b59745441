pub mod movie;
pub mod rental;
pub mod transaction;
