use crate::{ServiceError, ServiceResult};

use cm_core::ErrorLocation;

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use log::warn;

/// Runs one store round trip under a deadline.
///
/// Dropping the returned future abandons the request; an open transaction inside
/// it is rolled back when its handle drops.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StoreCall {
    timeout: Duration,
}

impl StoreCall {
    pub(crate) fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The caller's location is captured here, before the future is built, so
    /// `Store` and `Timeout` errors point at the service operation.
    #[track_caller]
    pub(crate) fn run<T, F>(
        &self,
        operation: &'static str,
        call: F,
    ) -> impl Future<Output = ServiceResult<T>> + use<T, F>
    where
        F: Future<Output = cm_db::Result<T>>,
    {
        let timeout = self.timeout;
        let location = ErrorLocation::from(Location::caller());

        async move {
            match tokio::time::timeout(timeout, call).await {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(source)) => {
                    warn!("{} failed: {}", operation, source);
                    Err(ServiceError::Store { source, location })
                }
                Err(_) => {
                    warn!("{} timed out after {:?}", operation, timeout);
                    Err(ServiceError::Timeout {
                        operation,
                        timeout,
                        location,
                    })
                }
            }
        }
    }
}
