use crate::adapters::mock::transaction_provider::MockTransaction;
use crate::domain::{movie::Movie, value_objects::MovieId};
use crate::ports::movie_repository::{MovieRepository as MovieRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory implementation of MovieRepository
///
/// Keeps movies in insertion order, which is also the order
/// `find_movies` returns them in.
pub struct MovieRepository {
    movies: Mutex<Vec<Movie>>,
    failure: Mutex<Option<String>>,
}

impl MovieRepository {
    pub fn new() -> Self {
        Self {
            movies: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Add a movie to the catalog for testing purposes
    pub fn add_movie(&self, movie: Movie) {
        self.movies.lock().unwrap().push(movie);
    }

    /// Make every subsequent call fail with the given message
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

impl Default for MovieRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepositoryTrait<MockTransaction> for MovieRepository {
    async fn find_movies(&self, trx: &mut MockTransaction) -> Result<Vec<Movie>> {
        trx.record("find_movies");
        self.check_failure()?;
        Ok(self.movies.lock().unwrap().clone())
    }

    async fn get_movie_by_id(
        &self,
        trx: &mut MockTransaction,
        movie_id: MovieId,
    ) -> Result<Option<Movie>> {
        trx.record("get_movie_by_id");
        self.check_failure()?;
        Ok(self
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|movie| movie.movie_id == movie_id)
            .cloned())
    }
}
