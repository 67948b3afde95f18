use kube::core::ObjectList;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name of the single instance the manager maintains.
pub const EXAMPLE_NAME: &str = "example1";

#[derive(CustomResource, Serialize, Deserialize, Debug, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    group = "k8s.io",
    version = "v1",
    kind = "Example",
    doc = "Custom resource representation of an Example",
    derive = "PartialEq",
    annotation("api-approved.kubernetes.io", "unapproved, experimental-only"),
    namespaced
)]
pub struct ExampleSpec {
    pub foo: String,
    pub bar: bool,
}

pub type ExampleList = ObjectList<Example>;

impl Example {
    /// The instance created when `example1` is absent.
    pub fn example1() -> Self {
        Example::new(
            EXAMPLE_NAME,
            ExampleSpec {
                foo: "hello".to_owned(),
                bar: true,
            },
        )
    }
}
