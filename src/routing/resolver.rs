//! Match-or-delegate request resolution.
//!
//! # Responsibilities
//! - Look up the request path in a frozen redirect table
//! - Answer a hit with `302 Found` and a `Location` header
//! - Hand a miss to the fallback service with the untouched request
//!
//! # Design Decisions
//! - Exactly one branch runs per request: a hit never reaches the fallback
//! - Destinations are converted to header values once, at construction
//! - Resolution never fails; an unknown path is the signal to delegate

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::{self, BoxFuture, FutureExt};
use tower::{Service, ServiceExt};

use crate::routing::mapping::Mapping;

/// Outcome of looking up a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path is mapped; redirect to this location.
    Redirect(&'a HeaderValue),
    /// The path is not mapped; delegate to the fallback.
    Fallback,
}

/// A mapped destination, kept verbatim next to its header form.
#[derive(Debug)]
struct Target {
    destination: String,
    location: HeaderValue,
}

/// Redirects mapped paths and delegates everything else to `fallback`.
///
/// Cloning is cheap: the table is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PathResolver<F> {
    targets: Arc<HashMap<String, Target>>,
    fallback: F,
}

impl<F> PathResolver<F> {
    /// Freeze `mapping` and wrap it around `fallback`.
    ///
    /// The mapping is not re-validated. A destination that cannot be sent as
    /// a `Location` header (control characters) is logged and left out, so
    /// its path falls through to the fallback.
    pub fn new(mapping: Mapping, fallback: F) -> Self {
        let mut targets = HashMap::with_capacity(mapping.len());

        for (path, destination) in mapping {
            match HeaderValue::from_bytes(destination.as_bytes()) {
                Ok(location) => {
                    targets.insert(
                        path,
                        Target {
                            destination,
                            location,
                        },
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        path = %path,
                        "Destination is not a valid Location header value, entry ignored"
                    );
                }
            }
        }

        tracing::debug!(entries = targets.len(), "Path resolver built");

        Self {
            targets: Arc::new(targets),
            fallback,
        }
    }

    /// Decide what to do with `path`.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        match self.targets.get(path) {
            Some(target) => Resolution::Redirect(&target.location),
            None => Resolution::Fallback,
        }
    }

    /// Destination for `path` exactly as it was configured.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.targets.get(path).map(|t| t.destination.as_str())
    }

    /// Number of redirectable paths.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<F> Service<Request<Body>> for PathResolver<F>
where
    F: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    F::Response: IntoResponse,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // The fallback is driven to readiness inside `oneshot`.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        if let Resolution::Redirect(location) = self.resolve(req.uri().path()) {
            tracing::debug!(
                path = %req.uri().path(),
                destination = ?location,
                "Redirecting"
            );
            return future::ready(Ok(redirect(location.clone()))).boxed();
        }

        tracing::debug!(path = %req.uri().path(), "No redirect, delegating to fallback");

        let clone = self.fallback.clone();
        let fallback = std::mem::replace(&mut self.fallback, clone);

        async move {
            let response = fallback.oneshot(req).await?;
            Ok::<_, Infallible>(response.into_response())
        }
        .boxed()
    }
}

fn redirect(location: HeaderValue) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
