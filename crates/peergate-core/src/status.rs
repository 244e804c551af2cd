//! Translation of failures into client-facing gRPC statuses.
//!
//! Every error the gateway returns is a [`tonic::Status`]. Failures that
//! can be pinned to a particular peer carry [`ErrorDetail`] records, packed
//! as `Any` values inside an encoded `google.rpc.Status` in the status
//! details trailer. Ledger gateway clients unpack them from there.
//!
//! Source errors are resolved in a fixed order:
//!
//! ```text
//! SourceError
//!   ├── Coded(Status)      → returned as is
//!   ├── Context { .. }     → Cancelled / DeadlineExceeded
//!   └── Opaque(error)      → caller's fallback code
//! ```

use bytes::Bytes;
use peergate_protos::{ErrorDetail, RpcStatus};
use prost::{Message, Name};
use prost_types::Any;
use thiserror::Error;
use tokio::time::error::Elapsed;
use tonic::{Code, Status};
use tracing::trace;

use crate::endpoint::EndpointIdentity;
use crate::error::ContextSignal;

/// Upper bound on the details trailer as sent, after base64 encoding.
pub const MAX_DETAILS_LEN: usize = 16 * 1024;

/// Why a set of details could not be attached to a status.
#[derive(Debug, Error)]
pub(crate) enum DetailError {
    #[error("an OK status cannot carry error details")]
    OkStatus,

    #[error("encoded details are {len} bytes, limit is {limit}")]
    TooLarge { len: usize, limit: usize },
}

/// A failure to be reported to a client, tagged by how its code is found.
#[derive(Debug)]
pub enum SourceError {
    /// Already a coded status.
    Coded(Status),
    /// The caller's request was cancelled or ran out of time.
    Context {
        signal: ContextSignal,
        message: String,
    },
    /// Anything else.
    Opaque(anyhow::Error),
}

impl From<Status> for SourceError {
    fn from(status: Status) -> Self {
        SourceError::Coded(status)
    }
}

impl From<ContextSignal> for SourceError {
    fn from(signal: ContextSignal) -> Self {
        SourceError::Context {
            signal,
            message: signal.to_string(),
        }
    }
}

impl From<Elapsed> for SourceError {
    fn from(_: Elapsed) -> Self {
        ContextSignal::DeadlineExceeded.into()
    }
}

impl From<anyhow::Error> for SourceError {
    /// Looks through the cause chain for a status or a context signal.
    /// A bare status passes through untouched; one found under added
    /// context keeps its code and details, with the context prefixed to
    /// its message.
    fn from(err: anyhow::Error) -> Self {
        let bare = err.chain().next().is_some_and(|top| top.is::<Status>());
        let err = if bare {
            match err.downcast::<Status>() {
                Ok(status) => return SourceError::Coded(status),
                Err(err) => err,
            }
        } else {
            err
        };

        if let Some(status) = coded_in_chain(&err) {
            return SourceError::Coded(status);
        }

        let signal = err
            .chain()
            .find_map(context_signal)
            .or_else(|| err.downcast_ref::<ContextSignal>().copied());
        if let Some(signal) = signal {
            return SourceError::Context {
                signal,
                message: format!("{err:#}"),
            };
        }

        SourceError::Opaque(err)
    }
}

/// Rebuild a status found below added context. The message is the context
/// layers above it joined with `": "`, ending in the status's own message.
fn coded_in_chain(err: &anyhow::Error) -> Option<Status> {
    let mut segments = Vec::new();
    let mut found = None;
    for cause in err.chain() {
        if let Some(status) = cause.downcast_ref::<Status>() {
            found = Some(status);
            break;
        }
        segments.push(cause.to_string());
    }

    let status = match found {
        Some(status) => {
            segments.push(status.message().to_string());
            status
        }
        None => {
            // Attached with `.context(status)`: the status is the top layer
            // and its own rendering is not a usable message.
            let status = err.downcast_ref::<Status>()?;
            if let Some(top) = segments.first_mut() {
                *top = status.message().to_string();
            }
            status
        }
    };

    Some(Status::with_details(
        status.code(),
        segments.join(": "),
        Bytes::copy_from_slice(status.details()),
    ))
}

fn context_signal(cause: &(dyn std::error::Error + 'static)) -> Option<ContextSignal> {
    if let Some(signal) = cause.downcast_ref::<ContextSignal>() {
        return Some(*signal);
    }
    cause
        .is::<Elapsed>()
        .then_some(ContextSignal::DeadlineExceeded)
}

impl ContextSignal {
    /// The standard status code for this signal.
    pub fn code(&self) -> Code {
        match self {
            ContextSignal::Canceled => Code::Cancelled,
            ContextSignal::DeadlineExceeded => Code::DeadlineExceeded,
        }
    }
}

/// Build a coded error, attaching `details` when possible.
///
/// If the details cannot be attached the plain status is returned; the
/// caller always gets `code` and `message`.
pub fn coded_error(code: Code, message: impl Into<String>, details: &[ErrorDetail]) -> Status {
    let message = message.into();
    if !details.is_empty() {
        if let Ok(encoded) = encode_details(code, &message, details) {
            return Status::with_details(code, message, encoded);
        }
    }
    Status::new(code, message)
}

/// Prefix an error's message, keeping its code.
///
/// The code is resolved as in [`to_status`] with `Unknown` as the fallback.
pub fn wrap_error(
    err: impl Into<SourceError>,
    prefix: &str,
    details: &[ErrorDetail],
) -> Status {
    let status = to_status(err, Code::Unknown);
    coded_error(
        status.code(),
        format!("{prefix}: {}", status.message()),
        details,
    )
}

/// Convert an error into a status, falling back to `fallback` only when the
/// error is neither coded nor a context signal.
pub fn to_status(err: impl Into<SourceError>, fallback: Code) -> Status {
    match err.into() {
        SourceError::Coded(status) => {
            trace!(tier = "coded", code = ?status.code(), "classified error");
            status
        }
        SourceError::Context { signal, message } => {
            trace!(tier = "context", code = ?signal.code(), "classified error");
            Status::new(signal.code(), message)
        }
        SourceError::Opaque(err) => {
            trace!(tier = "opaque", code = ?fallback, "classified error");
            Status::new(fallback, format!("{err:#}"))
        }
    }
}

/// Attribute `message` to the peer at `endpoint`.
pub fn error_detail(endpoint: &EndpointIdentity, message: impl Into<String>) -> ErrorDetail {
    ErrorDetail {
        address: endpoint.address.clone(),
        msp_id: endpoint.msp_id.clone(),
        message: message.into(),
    }
}

/// Read back the [`ErrorDetail`] records attached to a status.
///
/// Details of other types are skipped. A trailer that does not decode
/// yields no details.
pub fn error_details(status: &Status) -> Vec<ErrorDetail> {
    if status.details().is_empty() {
        return Vec::new();
    }
    let Ok(rpc_status) = RpcStatus::decode(status.details()) else {
        return Vec::new();
    };

    let type_url = ErrorDetail::type_url();
    rpc_status
        .details
        .iter()
        .filter(|any| any.type_url == type_url)
        .filter_map(|any| ErrorDetail::decode(any.value.as_slice()).ok())
        .collect()
}

pub(crate) fn encode_details(
    code: Code,
    message: &str,
    details: &[ErrorDetail],
) -> Result<Bytes, DetailError> {
    if code == Code::Ok {
        return Err(DetailError::OkStatus);
    }

    let type_url = ErrorDetail::type_url();
    let rpc_status = RpcStatus {
        code: code as i32,
        message: message.to_string(),
        details: details
            .iter()
            .map(|detail| Any {
                type_url: type_url.clone(),
                value: detail.encode_to_vec(),
            })
            .collect(),
    };

    // Binary metadata goes out base64 encoded without padding.
    let len = (rpc_status.encoded_len() * 4).div_ceil(3);
    if len > MAX_DETAILS_LEN {
        return Err(DetailError::TooLarge {
            len,
            limit: MAX_DETAILS_LEN,
        });
    }

    Ok(Bytes::from(rpc_status.encode_to_vec()))
}
