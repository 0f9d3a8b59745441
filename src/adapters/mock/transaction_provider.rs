use crate::ports::transaction_provider::{
    Result, TransactionProvider as TransactionProviderTrait,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Entry in the mock transaction journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionEvent {
    Begun(u64),
    /// A repository operation ran inside the transaction
    Used {
        trx_id: u64,
        operation: &'static str,
    },
    Committed(u64),
    RolledBack(u64),
}

type Journal = Arc<Mutex<Vec<TransactionEvent>>>;

/// Transaction handle issued by the mock provider
///
/// Carries the provider's journal so repositories can record
/// which operations ran inside which transaction.
#[derive(Debug)]
pub struct MockTransaction {
    id: u64,
    journal: Journal,
}

impl MockTransaction {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Record a repository operation against this transaction
    pub fn record(&self, operation: &'static str) {
        self.journal.lock().unwrap().push(TransactionEvent::Used {
            trx_id: self.id,
            operation,
        });
    }
}

/// Mock implementation of TransactionProvider
///
/// Does not isolate anything. Hands out numbered transactions (starting at 1)
/// and journals every begin, commit and rollback. Failures can be injected
/// for each step.
pub struct TransactionProvider {
    next_id: AtomicU64,
    journal: Journal,
    begin_failure: Mutex<Option<String>>,
    commit_failure: Mutex<Option<String>>,
    rollback_failure: Mutex<Option<String>>,
}

impl TransactionProvider {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            journal: Arc::new(Mutex::new(Vec::new())),
            begin_failure: Mutex::new(None),
            commit_failure: Mutex::new(None),
            rollback_failure: Mutex::new(None),
        }
    }

    /// Make every subsequent `begin` fail with the given message
    pub fn fail_on_begin(&self, message: &str) {
        *self.begin_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Make every subsequent `commit` fail with the given message
    pub fn fail_on_commit(&self, message: &str) {
        *self.commit_failure.lock().unwrap() = Some(message.to_string());
    }

    /// Make every subsequent `rollback` fail with the given message
    pub fn fail_on_rollback(&self, message: &str) {
        *self.rollback_failure.lock().unwrap() = Some(message.to_string());
    }

    /// All journal entries in the order they happened
    pub fn journal(&self) -> Vec<TransactionEvent> {
        self.journal.lock().unwrap().clone()
    }

    pub fn begun(&self) -> Vec<u64> {
        self.ids_where(|event| match event {
            TransactionEvent::Begun(id) => Some(*id),
            _ => None,
        })
    }

    pub fn committed(&self) -> Vec<u64> {
        self.ids_where(|event| match event {
            TransactionEvent::Committed(id) => Some(*id),
            _ => None,
        })
    }

    pub fn rolled_back(&self) -> Vec<u64> {
        self.ids_where(|event| match event {
            TransactionEvent::RolledBack(id) => Some(*id),
            _ => None,
        })
    }

    fn ids_where(&self, select: impl Fn(&TransactionEvent) -> Option<u64>) -> Vec<u64> {
        self.journal.lock().unwrap().iter().filter_map(select).collect()
    }
}

impl Default for TransactionProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn injected(failure: &Mutex<Option<String>>) -> Result<()> {
    match failure.lock().unwrap().as_ref() {
        Some(message) => Err(message.clone().into()),
        None => Ok(()),
    }
}

#[async_trait]
impl TransactionProviderTrait for TransactionProvider {
    type Transaction = MockTransaction;

    async fn begin(&self) -> Result<MockTransaction> {
        injected(&self.begin_failure)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.journal.lock().unwrap().push(TransactionEvent::Begun(id));

        Ok(MockTransaction {
            id,
            journal: Arc::clone(&self.journal),
        })
    }

    async fn commit(&self, trx: MockTransaction) -> Result<()> {
        injected(&self.commit_failure)?;
        self.journal
            .lock()
            .unwrap()
            .push(TransactionEvent::Committed(trx.id));
        Ok(())
    }

    async fn rollback(&self, trx: MockTransaction) -> Result<()> {
        injected(&self.rollback_failure)?;
        self.journal
            .lock()
            .unwrap()
            .push(TransactionEvent::RolledBack(trx.id));
        Ok(())
    }
}
