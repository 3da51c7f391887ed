//! HTTP layer: request configuration, interceptor chain, dispatch.

pub(crate) mod client;
pub mod interceptor;
pub mod request;

pub use interceptor::{InterceptorChain, RequestInterceptor};
pub use request::{combine_url, RequestConfig};
