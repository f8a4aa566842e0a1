// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower-based logging layer for the faucet client's RPC transport.
//!
//! Every JSON-RPC request leaving the client (balance reads, `decimals()`
//! calls, transaction sends, receipt polling) is recorded in a `faucet.rpc`
//! span with its method name and duration.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::TransportError;
use tower::Layer;
use tracing::{debug, trace, warn, Instrument};

/// A Tower layer that logs RPC requests through `tracing`.
///
/// # Example
///
/// ```rust,ignore
/// use faucet_client::transport::LoggingLayer;
/// use alloy_rpc_client::ClientBuilder;
///
/// let client = ClientBuilder::default()
///     .layer(LoggingLayer::new())
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer {
    /// Log full request and response packets at TRACE instead of only the method
    verbose: bool,
}

impl LoggingLayer {
    /// Creates a layer that logs method names, timing and errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log full request and response payloads.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, service: S) -> Self::Service {
        LoggingService {
            service,
            verbose: self.verbose,
        }
    }
}

/// A Tower service that logs RPC requests and responses.
#[derive(Clone, Debug)]
pub struct LoggingService<S> {
    service: S,
    verbose: bool,
}

impl<S> tower::Service<RequestPacket> for LoggingService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let verbose = self.verbose;
        let mut service = self.service.clone();
        let method = method_label(&request);
        let span = tracing::debug_span!("faucet.rpc", method = %method);

        Box::pin(
            async move {
                let start = Instant::now();

                if verbose {
                    trace!(request = ?request, "RPC request");
                }

                let result = service.call(request).await;
                let elapsed_ms = start.elapsed().as_millis() as u64;

                match &result {
                    Ok(response) if verbose => {
                        trace!(response = ?response, elapsed_ms, "RPC response");
                    }
                    Ok(_) => debug!(elapsed_ms, "RPC response"),
                    Err(e) => warn!(error = %e, elapsed_ms, "RPC error"),
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Method name of a request packet, or a summary for batches.
fn method_label(request: &RequestPacket) -> String {
    match request {
        RequestPacket::Single(req) => req.method().to_string(),
        RequestPacket::Batch(reqs) => match reqs.as_slice() {
            [] => "batch(empty)".to_string(),
            [only] => only.method().to_string(),
            many => format!("batch({} calls)", many.len()),
        },
    }
}
