use clap::{Parser, ValueEnum};
use std::path::Path;

/// How the example type is registered with the api server
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Registration {
    /// `extensions/v1beta1` ThirdPartyResource, served up to Kubernetes 1.7
    #[default]
    ThirdPartyResource,
    /// `apiextensions.k8s.io/v1` CustomResourceDefinition
    CustomResourceDefinition,
}

#[derive(Parser, Debug)]
#[command(version, about = "Registers an Example resource type and manages an instance of it")]
pub struct Args {
    /// Path to a kube config. Only required if out-of-cluster.
    #[arg(long, default_value = "")]
    kubeconfig: String,

    #[arg(long, value_enum, default_value_t)]
    pub registration: Registration,
}

impl Args {
    /// The kubeconfig path, `None` when empty.
    pub fn kubeconfig(&self) -> Option<&Path> {
        if self.kubeconfig.is_empty() {
            None
        } else {
            Some(Path::new(&self.kubeconfig))
        }
    }
}
