mod errors;
mod movie_service;
mod read_models;

pub use errors::{MovieApplicationError, Result};
pub use movie_service::{
    MovieServiceDependencies, find_movie_for_viewing, find_movies_to_select_from,
};
pub use read_models::{
    MovieSelectionReadModel, MovieViewingReadModel, build_selection_read_models,
    build_viewing_read_model,
};
