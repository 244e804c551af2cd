//! `google.rpc.Status`, the encoding gRPC uses for rich error details.

use crate::TYPE_URL_PREFIX;

/// Wire form of a coded error with attached details. gRPC servers put the
/// encoded message in the `grpc-status-details-bin` trailer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RpcStatus {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(message, repeated, tag = "3")]
    pub details: Vec<::prost_types::Any>,
}

impl ::prost::Name for RpcStatus {
    const NAME: &'static str = "Status";
    const PACKAGE: &'static str = "google.rpc";

    fn type_url() -> String {
        format!("{TYPE_URL_PREFIX}/{}", Self::full_name())
    }
}
