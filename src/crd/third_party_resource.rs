use k8s_openapi::ClusterResourceScope;
use kube::api::ObjectMeta;
use kube::Resource;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Registration name of the example type: `<kind>.<group>`.
pub const REGISTRATION_NAME: &str = "example.k8s.io";
pub const REGISTRATION_DESCRIPTION: &str = "An Example ThirdPartyResource";

const API_VERSION: &str = "extensions/v1beta1";
const KIND: &str = "ThirdPartyResource";

/// A version served for a third party resource
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct APIVersion {
    pub name: String,
}

/// `extensions/v1beta1` ThirdPartyResource.
///
/// Removed from Kubernetes in 1.8 and therefore absent from `k8s-openapi`, so the
/// resource information is provided by hand.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyResource {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<APIVersion>,
}

impl Default for ThirdPartyResource {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_owned(),
            kind: KIND.to_owned(),
            metadata: ObjectMeta::default(),
            description: None,
            versions: Vec::new(),
        }
    }
}

impl ThirdPartyResource {
    /// The registration submitted when `example.k8s.io` is absent.
    pub fn example() -> Self {
        Self {
            metadata: ObjectMeta {
                name: Some(REGISTRATION_NAME.to_owned()),
                ..ObjectMeta::default()
            },
            description: Some(REGISTRATION_DESCRIPTION.to_owned()),
            versions: vec![APIVersion {
                name: "v1".to_owned(),
            }],
            ..ThirdPartyResource::default()
        }
    }
}

impl Resource for ThirdPartyResource {
    type DynamicType = ();
    type Scope = ClusterResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        KIND.into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        "extensions".into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        "v1beta1".into()
    }

    fn api_version(_: &()) -> Cow<'_, str> {
        API_VERSION.into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "thirdpartyresources".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
