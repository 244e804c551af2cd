//! Error types for the peergate core.

use std::fmt;

use thiserror::Error;

/// A serialized envelope layer, named in deserialization errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Proposal,
    Header,
    ChannelHeader,
    ChaincodeProposalPayload,
    ChaincodeInvocationSpec,
    ProposalResponsePayload,
    ChaincodeAction,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Proposal => "proposal",
            Layer::Header => "header",
            Layer::ChannelHeader => "channel header",
            Layer::ChaincodeProposalPayload => "chaincode proposal payload",
            Layer::ChaincodeInvocationSpec => "chaincode invocation spec",
            Layer::ProposalResponsePayload => "proposal response payload",
            Layer::ChaincodeAction => "chaincode action",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from unpacking a signed proposal into its routing tuple.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("a signed proposal is required")]
    MissingInput,

    #[error("failed to deserialize {layer}: {source}")]
    Deserialization {
        layer: Layer,
        #[source]
        source: prost::DecodeError,
    },
}

impl DecodeError {
    /// The layer that failed to parse, if any.
    pub fn layer(&self) -> Option<Layer> {
        match self {
            DecodeError::MissingInput => None,
            DecodeError::Deserialization { layer, .. } => Some(*layer),
        }
    }
}

/// Errors from extracting the application result out of a peer response.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to deserialize {layer}: {source}")]
    Deserialization {
        layer: Layer,
        #[source]
        source: prost::DecodeError,
    },
}

impl ExtractError {
    pub fn layer(&self) -> Layer {
        match self {
            ExtractError::Deserialization { layer, .. } => *layer,
        }
    }
}

/// A cancellation or deadline signal raised by the caller's request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextSignal {
    #[error("context canceled")]
    Canceled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Errors from resolving gateway configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid duration for `{key}`: {value:?}")]
    InvalidDuration { key: &'static str, value: String },

    #[error("`{key}` must be greater than zero")]
    ZeroDuration { key: &'static str },
}
