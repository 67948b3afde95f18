use kube::config::{InClusterError, KubeconfigError};
use std::path::PathBuf;

/// All errors possible to occur while managing the example resources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // The only recoverable condition, callers create the object instead
    #[error("{kind} {name} not found")]
    NotFound { kind: String, name: String },
    #[error("unable to load kubeconfig {path}: {source}")]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },
    #[error("unable to load in-cluster configuration: {0}")]
    InCluster(#[from] InClusterError),
    // Any other error originating from the `kube-rs` crate
    #[error("Kubernetes reported error: {0}")]
    KubeError(#[from] kube::Error),
    #[error("unable to build request: {0}")]
    Request(#[from] kube::core::request::Error),
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("kind {kind} in {api_version} is not registered in the scheme")]
    UnregisteredKind { api_version: String, kind: String },
    #[error("cannot register {kind} from {api_version} in a scheme for {scheme}")]
    ForeignGroupVersion {
        api_version: String,
        kind: String,
        scheme: String,
    },
    #[error("invalid content type {0:?}")]
    InvalidHeader(String),
    #[error("unable to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Maps a 404 from the api server into [`Error::NotFound`].
    pub fn from_kube(err: kube::Error, kind: &str, name: &str) -> Self {
        match err {
            kube::Error::Api(response) if response.code == 404 => Error::NotFound {
                kind: kind.to_owned(),
                name: name.to_owned(),
            },
            err => Error::KubeError(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True when the client configuration could not be resolved.
    pub fn is_config_resolution(&self) -> bool {
        matches!(self, Error::Kubeconfig { .. } | Error::InCluster(_))
    }
}
