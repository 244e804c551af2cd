//! Application result extraction from peer endorsement responses.

use peergate_protos::{ChaincodeAction, ProposalResponse, ProposalResponsePayload};
use prost::Message;

use crate::error::{ExtractError, Layer};

/// Return the chaincode's result payload from a proposal response.
///
/// Absent fields along the way decode as their zero value, so a response
/// with no payload yields an empty result rather than an error.
pub fn extract_result(proposal_response: &ProposalResponse) -> Result<Vec<u8>, ExtractError> {
    let payload = ProposalResponsePayload::decode(proposal_response.payload.as_slice())
        .map_err(|source| ExtractError::Deserialization {
            layer: Layer::ProposalResponsePayload,
            source,
        })?;

    extract_result_from_payload(&payload)
}

/// Same as [`extract_result`] for a payload the caller has already decoded.
pub fn extract_result_from_payload(
    payload: &ProposalResponsePayload,
) -> Result<Vec<u8>, ExtractError> {
    let action = ChaincodeAction::decode(payload.extension.as_slice()).map_err(|source| {
        ExtractError::Deserialization {
            layer: Layer::ChaincodeAction,
            source,
        }
    })?;

    Ok(action.response.map(|r| r.payload).unwrap_or_default())
}
