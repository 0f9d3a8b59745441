mod errors;
mod read_models;
mod rental_service;

pub use errors::{RentalApplicationError, Result};
pub use read_models::{
    RentalViewingReadModel, build_rental_data_from_command, build_viewing_read_model,
};
pub use rental_service::{RentalServiceDependencies, rent_movie, view_rental};
