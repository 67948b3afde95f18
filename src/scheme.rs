//! A locally owned registry of the kinds a REST client may encode and decode.
//!
//! The registry is built once, filled by [`add_to_scheme`] and handed to
//! [`RestConfig`](crate::rest::RestConfig) so nothing depends on a process wide
//! registration order.
use crate::crd::Example;
use crate::error::{Error, Result};
use kube::core::GroupVersion;
use kube::Resource;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Option kinds every group version understands.
pub const LIST_OPTIONS: &str = "ListOptions";
pub const DELETE_OPTIONS: &str = "DeleteOptions";

#[derive(Debug, Clone)]
pub struct Scheme {
    group_version: GroupVersion,
    kinds: BTreeSet<String>,
}

pub fn api_version(gv: &GroupVersion) -> String {
    if gv.group.is_empty() {
        gv.version.clone()
    } else {
        format!("{}/{}", gv.group, gv.version)
    }
}

impl Scheme {
    pub fn new(group_version: GroupVersion) -> Self {
        Self {
            group_version,
            kinds: BTreeSet::new(),
        }
    }

    /// Registers `K` and its list kind.
    ///
    /// Fails when `K` is served from a different group version than the scheme.
    pub fn add_known_type<K>(&mut self) -> Result<&mut Self>
    where
        K: Resource<DynamicType = ()>,
    {
        let kind = K::kind(&());
        if K::group(&()) != self.group_version.group || K::version(&()) != self.group_version.version {
            return Err(Error::ForeignGroupVersion {
                api_version: K::api_version(&()).into_owned(),
                kind: kind.into_owned(),
                scheme: api_version(&self.group_version),
            });
        }
        self.kinds.insert(format!("{kind}List"));
        self.kinds.insert(kind.into_owned());
        Ok(self)
    }

    /// Registers a kind without resource information, such as the option types.
    pub fn add_known_kind(&mut self, kind: &str) -> &mut Self {
        self.kinds.insert(kind.to_owned());
        self
    }

    pub fn recognizes(&self, api_version: &str, kind: &str) -> bool {
        api_version == self::api_version(&self.group_version) && self.kinds.contains(kind)
    }

    #[cfg(test)]
    fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }

    /// Serializes `obj` into a JSON request body.
    pub fn encode<T: Serialize>(&self, obj: &T) -> Result<Vec<u8>> {
        let value = serde_json::to_value(obj)?;
        self.check_type_meta(&value)?;
        Ok(serde_json::to_vec(&value)?)
    }

    /// Deserializes a JSON response body.
    ///
    /// Objects without type information are accepted, as the api server omits it
    /// on some responses.
    pub fn decode<T: DeserializeOwned>(&self, value: Value) -> Result<T> {
        self.check_type_meta(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    fn check_type_meta(&self, value: &Value) -> Result<()> {
        let api_version = value.get("apiVersion").and_then(Value::as_str);
        let kind = value.get("kind").and_then(Value::as_str);
        match (api_version, kind) {
            (Some(api_version), Some(kind)) if !self.recognizes(api_version, kind) => {
                Err(Error::UnregisteredKind {
                    api_version: api_version.to_owned(),
                    kind: kind.to_owned(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Registers the example types together with the standard option kinds.
pub fn add_to_scheme(scheme: &mut Scheme) -> Result<()> {
    scheme
        .add_known_type::<Example>()?
        .add_known_kind(LIST_OPTIONS)
        .add_known_kind(DELETE_OPTIONS);
    Ok(())
}
