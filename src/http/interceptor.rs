//! Request interceptors: hooks run on every request just before dispatch.

use std::fmt;
use std::sync::Arc;

use crate::error::HttpError;
use crate::http::RequestConfig;

/// A hook on the outgoing request path.
///
/// Each interceptor sits on two channels: [`on_request`](Self::on_request)
/// receives the request when every earlier stage succeeded,
/// [`on_error`](Self::on_error) receives the failure when one did not.
/// Both run synchronously and must not block.
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, config: RequestConfig) -> Result<RequestConfig, HttpError>;

    /// Default: hand the failure on untouched.
    fn on_error(&self, error: HttpError) -> Result<RequestConfig, HttpError> {
        Err(error)
    }
}

/// Ordered list of interceptors, applied first to last.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interceptor: Arc<dyn RequestInterceptor>) {
        self.interceptors.push(interceptor);
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run the request (or an earlier failure) through every interceptor.
    pub fn apply(
        &self,
        input: Result<RequestConfig, HttpError>,
    ) -> Result<RequestConfig, HttpError> {
        self.interceptors
            .iter()
            .fold(input, |state, interceptor| match state {
                Ok(config) => interceptor.on_request(config),
                Err(error) => interceptor.on_error(error),
            })
    }
}

impl fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.interceptors.len())
            .finish()
    }
}
