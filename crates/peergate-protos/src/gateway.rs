//! Messages from the `gateway` package.

use crate::TYPE_URL_PREFIX;

/// Attributes a failure to the peer it came from. Carried as an
/// `Any`-packed detail inside a `google.rpc.Status`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ErrorDetail {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub msp_id: String,
    #[prost(string, tag = "3")]
    pub message: String,
}

impl ::prost::Name for ErrorDetail {
    const NAME: &'static str = "ErrorDetail";
    const PACKAGE: &'static str = "gateway";

    fn type_url() -> String {
        format!("{TYPE_URL_PREFIX}/{}", Self::full_name())
    }
}
