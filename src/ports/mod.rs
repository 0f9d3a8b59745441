pub mod movie_repository;
pub mod rental_repository;
pub mod transaction_provider;

pub use movie_repository::MovieRepository;
pub use rental_repository::RentalRepository;
pub use transaction_provider::TransactionProvider;
