//! Single-writer actor for SQLite.
//!
//! SQLite allows only one writer at a time; funneling every mutation through
//! one dedicated connection avoids `SQLITE_BUSY` under concurrent requests.
//! Each job runs inside an immediate transaction.

use std::any::Any;
use std::sync::Arc;

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use alcancia_core::errors::Result;

// A write job: a closure over the writer's connection, with the return value
// type-erased so jobs of different types can share one channel.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection
    /// and waits for its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor receiving channel was closed");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender without a result")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("failed to downcast writer actor result"))
            })
    }
}

/// Spawns a background task that owns one connection from the pool and
/// processes write jobs serially, each inside an immediate transaction.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to get a connection from the pool for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // Receiver may have gone away (request cancelled); nothing to do.
            let _ = reply_tx.send(result);
        }
        // Channel closed: every WriteHandle was dropped, the actor can stop.
    });

    WriteHandle { tx }
}
