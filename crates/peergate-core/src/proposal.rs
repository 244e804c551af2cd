//! Signed proposal introspection.
//!
//! Recovers just enough of a `SignedProposal` to route it: the target
//! channel, the chaincode name, and whether transient data rides along.
//! Nothing is validated here; peers do that. Every nested layer was
//! serialized on its own by the client SDK, so unpacking is a chain of
//! independent decode steps that stops at the first failure.

use peergate_protos::{
    ChaincodeInvocationSpec, ChaincodeProposalPayload, ChannelHeader, Header, Proposal,
    SignedProposal,
};
use prost::Message;
use tonic::Status;
use tracing::{debug, trace};

use crate::error::{DecodeError, Layer};

/// Routing metadata recovered from a signed proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRoute {
    pub channel_id: String,
    pub chaincode_name: String,
    /// True when the proposal carries a non-empty transient map.
    pub has_transient_data: bool,
}

/// Unpack the routing tuple from a signed proposal.
///
/// Returns [`DecodeError::MissingInput`] when no proposal was supplied,
/// otherwise the first layer that fails to decode.
pub fn decode_proposal(
    signed_proposal: Option<&SignedProposal>,
) -> Result<ProposalRoute, DecodeError> {
    let signed_proposal = signed_proposal.ok_or(DecodeError::MissingInput)?;

    let proposal: Proposal = unmarshal(&signed_proposal.proposal_bytes, Layer::Proposal)?;
    let header: Header = unmarshal(&proposal.header, Layer::Header)?;
    let channel_header: ChannelHeader = unmarshal(&header.channel_header, Layer::ChannelHeader)?;
    let payload: ChaincodeProposalPayload =
        unmarshal(&proposal.payload, Layer::ChaincodeProposalPayload)?;
    let spec: ChaincodeInvocationSpec =
        unmarshal(&payload.input, Layer::ChaincodeInvocationSpec)?;

    let chaincode_name = spec
        .chaincode_spec
        .and_then(|spec| spec.chaincode_id)
        .map(|id| id.name)
        .unwrap_or_default();

    let route = ProposalRoute {
        channel_id: channel_header.channel_id,
        chaincode_name,
        has_transient_data: !payload.transient_map.is_empty(),
    };

    trace!(
        channel = %route.channel_id,
        chaincode = %route.chaincode_name,
        transient = route.has_transient_data,
        "decoded proposal route"
    );

    Ok(route)
}

fn unmarshal<M: Message + Default>(bytes: &[u8], layer: Layer) -> Result<M, DecodeError> {
    M::decode(bytes).map_err(|source| {
        debug!(%layer, error = %source, "proposal layer failed to decode");
        DecodeError::Deserialization { layer, source }
    })
}

impl From<DecodeError> for Status {
    fn from(err: DecodeError) -> Self {
        Status::invalid_argument(format!("failed to unpack transaction proposal: {err}"))
    }
}
