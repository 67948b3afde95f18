use crate::error::{Error, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Config;
use std::path::Path;

/// Resolves the client configuration.
///
/// Uses the kubeconfig at `kubeconfig` when given, otherwise assumes the process
/// runs inside a cluster and reads the mounted service account.
pub async fn build_config(kubeconfig: Option<&Path>) -> Result<Config> {
    match kubeconfig {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading kubeconfig");
            let kubeconfig = Kubeconfig::read_from(path).map_err(|source| Error::Kubeconfig {
                path: path.to_owned(),
                source,
            })?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|source| Error::Kubeconfig {
                    path: path.to_owned(),
                    source,
                })
        }
        None => {
            tracing::debug!("using in-cluster configuration");
            Ok(Config::incluster()?)
        }
    }
}
