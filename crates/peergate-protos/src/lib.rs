//! peergate-protos — wire schema for the peergate transaction gateway.
//!
//! Hand-maintained protobuf mirrors of the ledger network's shared schema.
//! Field numbers match the upstream `.proto` definitions so that bytes
//! produced by client SDKs and peers decode unchanged. Only the fields the
//! gateway reads or forwards are modelled; anything else on the wire is
//! skipped by the decoder.
//!
//! # Layout
//!
//! ```text
//! SignedProposal
//!   └── proposal_bytes ─▶ Proposal
//!         ├── header ─▶ Header
//!         │     └── channel_header ─▶ ChannelHeader { channel_id }
//!         └── payload ─▶ ChaincodeProposalPayload { TransientMap }
//!               └── input ─▶ ChaincodeInvocationSpec
//!                     └── chaincode_spec.chaincode_id.name
//!
//! ProposalResponse
//!   └── payload ─▶ ProposalResponsePayload
//!         └── extension ─▶ ChaincodeAction
//!               └── response.payload (application result)
//! ```

pub mod common;
pub mod gateway;
pub mod peer;
pub mod rpc;

pub use common::{ChannelHeader, Header};
pub use gateway::ErrorDetail;
pub use peer::{
    ChaincodeAction, ChaincodeId, ChaincodeInput, ChaincodeInvocationSpec,
    ChaincodeProposalPayload, ChaincodeSpec, Endorsement, Proposal, ProposalResponse,
    ProposalResponsePayload, Response, SignedProposal,
};
pub use rpc::RpcStatus;

/// Domain prefix of `Any` type URLs, as used by the protobuf runtimes of the
/// other network components.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com";
