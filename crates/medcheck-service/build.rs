//! Generates the gRPC service stubs.
//!
//! Messages are declared with prost derives in `src/proto.rs`; only the
//! service plumbing is generated here, so no `protoc` is needed.

fn main() {
    let method = |name: &str, route: &str, input: &str, output: &str| {
        tonic_build::manual::Method::builder()
            .name(name)
            .route_name(route)
            .input_type(format!("crate::proto::{input}"))
            .output_type(format!("crate::proto::{output}"))
            .codec_path("tonic::codec::ProstCodec")
            .build()
    };

    let service = tonic_build::manual::Service::builder()
        .name("InteractionService")
        .package("medcheck")
        .method(method(
            "check_interactions",
            "CheckInteractions",
            "CheckInteractionsRequest",
            "CheckInteractionsResponse",
        ))
        .method(method(
            "suggest_medications",
            "SuggestMedications",
            "SuggestMedicationsRequest",
            "SuggestMedicationsResponse",
        ))
        .method(method("health", "Health", "HealthRequest", "HealthResponse"))
        .build();

    tonic_build::manual::Builder::new()
        .build_client(false)
        .compile(&[service]);
}
