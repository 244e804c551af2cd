//! peergate-core — proposal introspection and error normalization for the
//! peergate transaction gateway.
//!
//! Sits between the gateway's RPC handlers and the ledger peers. Nothing
//! in here touches the network: every function is a pure transformation
//! over its arguments and is safe to call from any number of tasks.
//!
//! # Architecture
//!
//! ```text
//! RPC handler (external)
//!   ├── proposal::decode_proposal()   SignedProposal → ProposalRoute
//!   │     └── channel / chaincode / transient flag drive peer selection
//!   ├── dispatch to peers (external)
//!   ├── response::extract_result()    ProposalResponse → result bytes
//!   └── status
//!       ├── to_status()               any failure → tonic::Status
//!       ├── wrap_error()              prefix message, keep code
//!       ├── coded_error()             code + message + per-peer details
//!       └── error_detail()            EndpointIdentity → ErrorDetail
//! ```

pub mod config;
pub mod endpoint;
pub mod error;
pub mod proposal;
pub mod response;
pub mod status;

pub use config::{GatewayConfig, GatewayOptions};
pub use endpoint::EndpointIdentity;
pub use error::{ConfigError, ContextSignal, DecodeError, ExtractError, Layer};
pub use proposal::{decode_proposal, ProposalRoute};
pub use response::{extract_result, extract_result_from_payload};
pub use status::{coded_error, error_detail, error_details, to_status, wrap_error, SourceError};
