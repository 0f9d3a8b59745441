pub mod movie_repository;
pub mod rental_repository;
pub mod transaction_provider;

// パブリックに型を再エクスポート
pub use movie_repository::MovieRepository as PostgresMovieRepository;
pub use rental_repository::RentalRepository as PostgresRentalRepository;
pub use transaction_provider::{PgTransaction, TransactionProvider as PostgresTransactionProvider};
