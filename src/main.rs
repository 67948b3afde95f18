use clap::Parser;
use kube::Client as K8sClient;
use tpr_example::cli::Args;
use tpr_example::{config, manager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reports go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tpr_example=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let kube_config = config::build_config(args.kubeconfig()).await?;
    let kubernetes_client = K8sClient::try_from(kube_config)?;

    manager::run(kubernetes_client, args.registration, std::io::stdout()).await?;

    Ok(())
}
