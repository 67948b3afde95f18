use crate::error::{Error, Result};
use crate::scheme::{self, add_to_scheme, Scheme};
use http::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use kube::api::{GetParams, ListParams, PostParams};
use kube::core::{GroupVersion, Request};
use kube::{Client, Resource};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub const API_PATH: &str = "/apis";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Client configuration scoped to a single api group version.
#[derive(Debug, Clone)]
pub struct RestConfig {
    pub group_version: GroupVersion,
    pub api_path: String,
    pub content_type: String,
    pub scheme: Scheme,
}

impl RestConfig {
    /// Scopes requests to `group_version` under `/apis`, speaking JSON, with the
    /// example types registered in the codec.
    pub fn for_group_version(group_version: GroupVersion) -> Result<Self> {
        let mut scheme = Scheme::new(group_version.clone());
        add_to_scheme(&mut scheme)?;
        Ok(Self {
            group_version,
            api_path: API_PATH.to_owned(),
            content_type: JSON_CONTENT_TYPE.to_owned(),
            scheme,
        })
    }

    fn base_path(&self) -> String {
        format!(
            "{}/{}",
            self.api_path.trim_end_matches('/'),
            scheme::api_version(&self.group_version)
        )
    }
}

/// REST client for one resource kind of a [`RestConfig`].
pub struct RestClient {
    client: Client,
    config: RestConfig,
    kind: String,
    plural: String,
    content_type: HeaderValue,
}

impl RestClient {
    /// Builds a client for `K`, which must be registered in the config's scheme.
    pub fn for_resource<K>(client: Client, config: RestConfig) -> Result<Self>
    where
        K: Resource<DynamicType = ()>,
    {
        let kind = K::kind(&()).into_owned();
        let api_version = K::api_version(&());
        if !config.scheme.recognizes(&api_version, &kind) {
            return Err(Error::UnregisteredKind {
                api_version: api_version.into_owned(),
                kind,
            });
        }
        let content_type = HeaderValue::from_str(&config.content_type)
            .map_err(|_| Error::InvalidHeader(config.content_type.clone()))?;

        Ok(Self {
            client,
            plural: K::plural(&()).into_owned(),
            kind,
            config,
            content_type,
        })
    }

    fn request(&self, namespace: Option<&str>) -> Request {
        let url_path = match namespace {
            Some(ns) => format!("{}/namespaces/{}/{}", self.config.base_path(), ns, self.plural),
            None => format!("{}/{}", self.config.base_path(), self.plural),
        };
        Request::new(url_path)
    }

    pub async fn get<T: DeserializeOwned>(&self, namespace: &str, name: &str) -> Result<T> {
        let request = self.request(Some(namespace)).get(name, &GetParams::default())?;
        self.send(request, name).await
    }

    pub async fn create<T>(&self, namespace: &str, obj: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Resource,
    {
        let body = self.config.scheme.encode(obj)?;
        let request = self
            .request(Some(namespace))
            .create(&PostParams::default(), body)?;
        let name = obj.meta().name.clone().unwrap_or_default();
        self.send(request, &name).await
    }

    /// Lists every object, across all namespaces when `namespace` is `None`.
    pub async fn list<T: DeserializeOwned>(&self, namespace: Option<&str>) -> Result<T> {
        let request = self.request(namespace).list(&ListParams::default())?;
        self.send(request, &self.plural).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        mut request: http::Request<Vec<u8>>,
        name: &str,
    ) -> Result<T> {
        let headers = request.headers_mut();
        headers.insert(ACCEPT, self.content_type.clone());
        if headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, self.content_type.clone());
        }
        tracing::debug!(method = %request.method(), uri = %request.uri(), "sending request");

        let value: Value = self
            .client
            .request(request)
            .await
            .map_err(|err| Error::from_kube(err, &self.kind, name))?;
        self.config.scheme.decode(value)
    }
}
