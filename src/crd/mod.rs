pub mod example;
pub mod third_party_resource;

pub use example::{Example, ExampleList, ExampleSpec};
pub use third_party_resource::{APIVersion, ThirdPartyResource};

/// Namespace the example instance lives in.
pub const NAMESPACE: &str = "default";
