//! Audit trail for operations.
//!
//! [`AuditRecorder::record`] wraps any async operation: it runs the
//! operation, then writes an [`AuditEntry`] describing the call and its
//! outcome through the recorder's own store. The write happens after the
//! operation has resolved and uses a store the operation never touches,
//! so an operation that fails, or whose own writes fail, is still audited.
//!
//! A failed operation's error is always returned unchanged.

use std::fmt;
use std::future::Future;

use chrono::Utc;
use tracing::error;

use crate::store::{AuditEntry, AuditStore, StoreError};

/// Failure to persist an audit entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to record audit entry for {action:?}: {source}")]
pub struct AuditError {
    action: String,
    #[source]
    source: StoreError,
}

impl AuditError {
    /// Action label of the entry that could not be written.
    pub fn action(&self) -> &str {
        &self.action
    }
}

/// Records an audit entry for every wrapped operation.
pub struct AuditRecorder<A> {
    store: A,
}

impl<A: AuditStore> AuditRecorder<A> {
    pub fn new(store: A) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &A {
        &self.store
    }

    /// Run `operation` and audit it under `action`.
    ///
    /// The entry message reads
    /// `Method: <method>, Arguments: <args>, Result: <value>` on success and
    /// ends with `Error: <error>` on failure.
    ///
    /// On failure the operation's error is returned even if the audit
    /// write also fails (that failure is logged). On success a failed audit
    /// write is returned as an error, since the call would otherwise go
    /// unrecorded.
    pub async fn record<T, E, Fut>(
        &self,
        action: &str,
        method: &str,
        args: &(impl fmt::Debug + ?Sized),
        operation: Fut,
    ) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        T: fmt::Debug,
        E: fmt::Display + From<AuditError>,
    {
        let call = format!("Method: {method}, Arguments: {args:?}");

        match operation.await {
            Ok(value) => {
                self.write(action, format!("{call}, Result: {value:?}"))
                    .await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(audit_err) = self.write(action, format!("{call}, Error: {err}")).await {
                    error!(
                        error = %audit_err,
                        original = %err,
                        "audit entry lost for failed operation"
                    );
                }
                Err(err)
            }
        }
    }

    async fn write(&self, action: &str, message: String) -> Result<u64, AuditError> {
        let entry = AuditEntry::new(action, message, Utc::now());
        self.store
            .save(entry)
            .await
            .map_err(|source| AuditError {
                action: action.to_string(),
                source,
            })
    }
}
