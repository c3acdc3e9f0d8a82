//! Cooperative cancellation of store operations.
//!
//! A cancelled operation stops at its next suspension point. Work already
//! sent to the store is not compensated.

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::error::{AppError, AppResult};

/// Create a cancellation handle and the registration to pass to [`cancellable`].
pub fn cancel_pair() -> (AbortHandle, AbortRegistration) {
    AbortHandle::new_pair()
}

/// Run `future` until it completes or its handle is aborted.
pub async fn cancellable<F, T>(future: F, registration: AbortRegistration) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match Abortable::new(future, registration).await {
        Ok(result) => result,
        Err(_aborted) => {
            tracing::debug!("Operation cancelled before completion");
            Err(AppError::Cancelled)
        }
    }
}
