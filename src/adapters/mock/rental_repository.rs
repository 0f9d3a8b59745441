use crate::adapters::mock::transaction_provider::MockTransaction;
use crate::domain::{
    rental::{CreateRentalData, Rental},
    value_objects::RentalId,
};
use crate::ports::rental_repository::{RentalRepository as RentalRepositoryTrait, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// In-memory implementation of RentalRepository
///
/// Records every creation request so tests can inspect
/// exactly what the application layer asked to persist.
pub struct RentalRepository {
    rentals: Mutex<Vec<Rental>>,
    create_requests: Mutex<Vec<CreateRentalData>>,
    failure: Mutex<Option<String>>,
}

impl RentalRepository {
    pub fn new() -> Self {
        Self {
            rentals: Mutex::new(Vec::new()),
            create_requests: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Store an existing rental for testing purposes
    pub fn add_rental(&self, rental: Rental) {
        self.rentals.lock().unwrap().push(rental);
    }

    /// Data passed to `create_rental`, in call order
    pub fn create_requests(&self) -> Vec<CreateRentalData> {
        self.create_requests.lock().unwrap().clone()
    }

    /// All stored rentals, in creation order
    pub fn rentals(&self) -> Vec<Rental> {
        self.rentals.lock().unwrap().clone()
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

impl Default for RentalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalRepositoryTrait<MockTransaction> for RentalRepository {
    async fn create_rental(
        &self,
        trx: &mut MockTransaction,
        data: CreateRentalData,
    ) -> Result<Rental> {
        trx.record("create_rental");
        self.create_requests.lock().unwrap().push(data.clone());
        self.check_failure()?;

        let now = Utc::now();
        let rental = Rental {
            rental_id: RentalId::new(),
            customer_id: data.customer_id,
            movie_id: data.movie_id,
            movie_title: data.movie_title,
            movie_category_name: data.movie_category_name,
            rental_start: data.rental_start,
            rental_days: data.rental_days,
            created_at: now,
            updated_at: now,
        };
        self.rentals.lock().unwrap().push(rental.clone());

        Ok(rental)
    }

    async fn get_rental_by_id(
        &self,
        trx: &mut MockTransaction,
        rental_id: RentalId,
    ) -> Result<Option<Rental>> {
        trx.record("get_rental_by_id");
        self.check_failure()?;
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .find(|rental| rental.rental_id == rental_id)
            .cloned())
    }
}
