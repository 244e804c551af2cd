//! Messages from the `peer` package: proposals, chaincode specs, and
//! endorsement responses.

use std::collections::HashMap;

/// A proposal as submitted by a client, with the creator's signature over
/// `proposal_bytes`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignedProposal {
    /// Serialized [`Proposal`].
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Proposal {
    /// Serialized `common.Header`.
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    /// Serialized [`ChaincodeProposalPayload`] for chaincode proposals.
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub extension: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeProposalPayload {
    /// Serialized [`ChaincodeInvocationSpec`].
    #[prost(bytes = "vec", tag = "1")]
    pub input: Vec<u8>,
    /// Private data passed to the chaincode but never written to the ledger.
    #[prost(map = "string, bytes", tag = "2")]
    pub transient_map: HashMap<String, Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeInvocationSpec {
    #[prost(message, optional, tag = "1")]
    pub chaincode_spec: Option<ChaincodeSpec>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeSpec {
    #[prost(enumeration = "chaincode_spec::Type", tag = "1")]
    pub r#type: i32,
    #[prost(message, optional, tag = "2")]
    pub chaincode_id: Option<ChaincodeId>,
    #[prost(message, optional, tag = "3")]
    pub input: Option<ChaincodeInput>,
    #[prost(int32, tag = "4")]
    pub timeout: i32,
}

pub mod chaincode_spec {
    /// Chaincode implementation language.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        Undefined = 0,
        Golang = 1,
        Node = 2,
        Car = 3,
        Java = 4,
    }
}

/// `peer.ChaincodeID` — identifies a deployed chaincode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeId {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub version: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeInput {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub args: Vec<Vec<u8>>,
    #[prost(map = "string, bytes", tag = "2")]
    pub decorations: HashMap<String, Vec<u8>>,
    #[prost(bool, tag = "3")]
    pub is_init: bool,
}

/// A peer's endorsement of a proposal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProposalResponse {
    #[prost(int32, tag = "1")]
    pub version: i32,
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<::prost_types::Timestamp>,
    /// Outcome of the chaincode invocation as reported by the peer.
    #[prost(message, optional, tag = "4")]
    pub response: Option<Response>,
    /// Serialized [`ProposalResponsePayload`]; this is what the peer signed.
    #[prost(bytes = "vec", tag = "5")]
    pub payload: Vec<u8>,
    #[prost(message, optional, tag = "6")]
    pub endorsement: Option<Endorsement>,
}

/// Status, message, and payload returned by a chaincode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(int32, tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Endorsement {
    #[prost(bytes = "vec", tag = "1")]
    pub endorser: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProposalResponsePayload {
    #[prost(bytes = "vec", tag = "1")]
    pub proposal_hash: Vec<u8>,
    /// Serialized [`ChaincodeAction`] for chaincode proposals.
    #[prost(bytes = "vec", tag = "2")]
    pub extension: Vec<u8>,
}

/// Simulation results produced by executing a chaincode on a peer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeAction {
    /// Serialized read/write set.
    #[prost(bytes = "vec", tag = "1")]
    pub results: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub events: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub response: Option<Response>,
    #[prost(message, optional, tag = "4")]
    pub chaincode_id: Option<ChaincodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn transient_map_round_trips() {
        let payload = ChaincodeProposalPayload {
            input: vec![1, 2, 3],
            transient_map: HashMap::from([("price".to_string(), b"42".to_vec())]),
        };
        let decoded = ChaincodeProposalPayload::decode(payload.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn response_payload_uses_tag_three() {
        // tag 3, wire type 2 => 0x1a
        let bytes = [0x1a, 0x03, b'a', b'b', b'c'];
        let response = Response::decode(&bytes[..]).unwrap();
        assert_eq!(response.payload, b"abc");
        assert_eq!(response.status, 0);
    }

    #[test]
    fn unknown_fields_are_skipped() {
        // field 9 (varint) is not part of ProposalResponsePayload
        let bytes = [0x48, 0x01, 0x12, 0x01, 0xff];
        let payload = ProposalResponsePayload::decode(&bytes[..]).unwrap();
        assert_eq!(payload.extension, vec![0xff]);
        assert!(payload.proposal_hash.is_empty());
    }
}
