//! Cancellable scope for a page's outbound request.
//!
//! DESIGN
//! ======
//! A page starts its fetch through [`scoped`], keeps the returned
//! [`FetchScope`], and cancels it when the page unmounts. Cancellation aborts
//! the in-flight future, so an aborted fetch resolves to `None` and never
//! reaches the code that writes page state. Dropping the scope cancels too.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::future::Future;

use futures::FutureExt;
use futures::future::{AbortHandle, Abortable};

/// Owner of one in-flight request.
#[derive(Debug)]
pub struct FetchScope {
    handle: AbortHandle,
}

impl FetchScope {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[cfg(test)]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Bind `future` to a new scope. The returned future yields `Some(output)`
/// if it completes before the scope is cancelled, `None` otherwise.
pub fn scoped<F>(future: F) -> (FetchScope, impl Future<Output = Option<F::Output>>)
where
    F: Future,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(future, registration).map(Result::ok);
    (FetchScope { handle }, task)
}

/// Await a scoped request and pass its output to `apply`. Nothing is applied
/// when the scope was cancelled first.
pub async fn deliver<T, F>(request: impl Future<Output = Option<T>>, apply: F)
where
    F: FnOnce(T),
{
    if let Some(output) = request.await {
        apply(output);
    }
}
