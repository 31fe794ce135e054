use crate::catalog::{Failure, FetchResult, status};
use futures::{FutureExt, future::BoxFuture};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Retrieval strategy injected into a controller
pub type Loader<T> = Arc<dyn Fn(Option<String>) -> BoxFuture<'static, FetchResult<T>> + Send + Sync>;

/// Snapshot of a screen's data
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// Last successfully loaded value
    pub data: Option<T>,
    pub loading: bool,
    /// Message of the last failure, cleared when a new fetch starts
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Coarse phase derived from a [`FetchState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl<T> FetchState<T> {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.data.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }
}

/// Tri-state holder for one screen.
///
/// `fetch` publishes `loading`, runs the loader, then publishes either the new
/// data or an error message. Data from an earlier success is kept when a later
/// fetch fails. Overlapping fetches are not coordinated: whichever finishes
/// last wins.
///
/// The controller lives as long as its screen. After [`dispose`](Self::dispose)
/// (or drop) in-flight results are discarded and new fetches do nothing.
pub struct FetchController<T> {
    name: &'static str,
    loader: Loader<T>,
    state: Arc<watch::Sender<FetchState<T>>>,
    scope: CancellationToken,
}

impl<T> FetchController<T>
where
    T: Send + Sync + 'static,
{
    /// Create a controller with its own lifetime scope
    pub fn new<F, Fut>(name: &'static str, loader: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult<T>> + Send + 'static,
    {
        Self::with_scope(name, CancellationToken::new(), loader)
    }

    /// Create a controller whose scope ends when `parent` is cancelled
    pub fn with_parent<F, Fut>(name: &'static str, parent: &CancellationToken, loader: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult<T>> + Send + 'static,
    {
        Self::with_scope(name, parent.child_token(), loader)
    }

    fn with_scope<F, Fut>(name: &'static str, scope: CancellationToken, loader: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult<T>> + Send + 'static,
    {
        let loader: Loader<T> = Arc::new(move |param| loader(param).boxed());
        let (state, _) = watch::channel(FetchState::default());

        Self {
            name,
            loader,
            state: Arc::new(state),
            scope,
        }
    }

    /// Start a fetch on the runtime.
    ///
    /// Returns `None` when the controller has already been disposed.
    pub fn fetch(&self, param: Option<String>) -> Option<JoinHandle<()>> {
        if self.scope.is_cancelled() {
            debug!("{}: fetch ignored after dispose", self.name);
            return None;
        }

        let run = Self::run(
            self.name,
            Arc::clone(&self.loader),
            Arc::clone(&self.state),
            self.scope.clone(),
            param,
        );
        Some(tokio::spawn(run))
    }

    /// Fetch and wait for the result to be published
    pub async fn fetch_now(&self, param: Option<String>) {
        Self::run(
            self.name,
            Arc::clone(&self.loader),
            Arc::clone(&self.state),
            self.scope.clone(),
            param,
        )
        .await;
    }

    async fn run(
        name: &'static str,
        loader: Loader<T>,
        state: Arc<watch::Sender<FetchState<T>>>,
        scope: CancellationToken,
        param: Option<String>,
    ) {
        if scope.is_cancelled() {
            return;
        }

        debug!("{name}: loading (param: {param:?})");
        state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        // The loader call itself is deferred so a synchronous panic is caught too
        let load = AssertUnwindSafe(async move { loader(param).await }).catch_unwind();
        let result = tokio::select! {
            biased;
            () = scope.cancelled() => {
                debug!("{name}: disposed while loading, result dropped");
                return;
            }
            result = load => result.unwrap_or_else(|_| Err(Failure::from_code(status::GENERIC_ERROR))),
        };

        if scope.is_cancelled() {
            return;
        }

        state.send_modify(|s| {
            match result {
                Ok(data) => {
                    debug!("{name}: loaded");
                    s.data = Some(data);
                    s.error = None;
                }
                Err(failure) => {
                    debug!("{name}: failed with code {}", failure.code);
                    s.error = Some(failure.message);
                }
            }
            s.loading = false;
        });
    }

    /// Subscribe to state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// End the controller's scope; idempotent
    pub fn dispose(&self) {
        if !self.scope.is_cancelled() {
            debug!("{}: disposed", self.name);
            self.scope.cancel();
        }
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.scope.is_cancelled()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> FetchController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }
}

impl<T> Drop for FetchController<T> {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

impl<T> std::fmt::Debug for FetchController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchController")
            .field("name", &self.name)
            .field("disposed", &self.scope.is_cancelled())
            .finish_non_exhaustive()
    }
}
