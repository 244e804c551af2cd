//! Peer endpoint identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the peer a response or failure came from. Supplied by the
/// caller's peer directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointIdentity {
    /// Network address, `host:port`.
    pub address: String,
    /// Membership service provider the peer belongs to.
    pub msp_id: String,
}

impl EndpointIdentity {
    pub fn new(address: impl Into<String>, msp_id: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            msp_id: msp_id.into(),
        }
    }
}

impl fmt::Display for EndpointIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address, self.msp_id)
    }
}
