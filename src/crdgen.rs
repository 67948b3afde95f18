use kube::CustomResourceExt;
use tpr_example::crd::Example;

fn main() -> anyhow::Result<()> {
    let example_crd = serde_yaml::to_string(&Example::crd())?;
    print!("{example_crd}");
    Ok(())
}
