pub mod movie_repository;
pub mod rental_repository;
pub mod transaction_provider;

#[allow(unused_imports)]
pub use movie_repository::MovieRepository;
#[allow(unused_imports)]
pub use rental_repository::RentalRepository;
#[allow(unused_imports)]
pub use transaction_provider::{MockTransaction, TransactionEvent, TransactionProvider};
