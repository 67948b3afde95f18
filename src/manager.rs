use crate::cli::Registration;
use crate::crd::example::EXAMPLE_NAME;
use crate::crd::third_party_resource::REGISTRATION_NAME;
use crate::crd::{Example, ExampleList, ThirdPartyResource, NAMESPACE};
use crate::error::{Error, Result};
use crate::report::Reporter;
use crate::rest::{RestClient, RestConfig};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::api::PostParams;
use kube::core::GroupVersion;
use kube::{Api, Client, CustomResourceExt, Resource, ResourceExt};
use std::fmt::Debug;
use std::io::Write;

/// Result of making sure an object exists
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<K> {
    Created { created: K, submitted: K },
    Existing(K),
}

#[cfg(test)]
impl<K> Outcome<K> {
    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created { .. })
    }

    pub fn object(&self) -> &K {
        match self {
            Outcome::Created { created, .. } => created,
            Outcome::Existing(existing) => existing,
        }
    }
}

async fn ensure_registered<K>(api: &Api<K>, name: &str, registration: K) -> Result<Outcome<K>>
where
    K: Resource + Clone + Debug + serde::Serialize + serde::de::DeserializeOwned,
    K::DynamicType: Default,
{
    let kind = K::kind(&Default::default()).into_owned();
    match api.get(name).await.map_err(|err| Error::from_kube(err, &kind, name)) {
        Ok(existing) => {
            tracing::info!(name, %kind, "registration exists, skipping");
            Ok(Outcome::Existing(existing))
        }
        Err(err) if err.is_not_found() => {
            let created = api.create(&PostParams::default(), &registration).await?;
            tracing::info!(name, %kind, "registered resource type");
            Ok(Outcome::Created {
                created,
                submitted: registration,
            })
        }
        Err(err) => Err(err),
    }
}

/// Registers `example.k8s.io` as a ThirdPartyResource unless it already exists.
pub async fn ensure_third_party_resource(
    api: &Api<ThirdPartyResource>,
) -> Result<Outcome<ThirdPartyResource>> {
    ensure_registered(api, REGISTRATION_NAME, ThirdPartyResource::example()).await
}

/// Registers the `Example` CustomResourceDefinition unless it already exists.
pub async fn ensure_custom_resource_definition(
    api: &Api<CustomResourceDefinition>,
) -> Result<Outcome<CustomResourceDefinition>> {
    let crd = Example::crd();
    let name = crd.name_any();
    ensure_registered(api, &name, crd).await
}

/// Fetches `example1`, creating it when the api server does not know it.
pub async fn ensure_example(rest: &RestClient) -> Result<Outcome<Example>> {
    match rest.get::<Example>(NAMESPACE, EXAMPLE_NAME).await {
        Ok(existing) => Ok(Outcome::Existing(existing)),
        Err(err) if err.is_not_found() => {
            let example = Example::example1();
            let created = rest.create(NAMESPACE, &example).await?;
            tracing::info!(name = EXAMPLE_NAME, namespace = NAMESPACE, "created example");
            Ok(Outcome::Created {
                created,
                submitted: example,
            })
        }
        Err(err) => Err(err),
    }
}

/// Lists the examples of every namespace.
pub async fn list_examples(rest: &RestClient) -> Result<ExampleList> {
    let list: ExampleList = rest.list(None).await?;
    tracing::info!(count = list.items.len(), "listed examples");
    Ok(list)
}

fn report_registration<K: Debug, W: Write>(
    reporter: &mut Reporter<W>,
    outcome: &Outcome<K>,
) -> Result<()> {
    match outcome {
        Outcome::Created { created, submitted } => reporter.created_from(created, submitted),
        Outcome::Existing(existing) => reporter.skipped(existing),
    }
}

/// Registers the example type, ensures `example1` exists and lists all examples,
/// writing a report of every step to `out`.
///
/// Stops at the first error other than a missing object.
pub async fn run<W: Write>(client: Client, registration: Registration, out: W) -> Result<()> {
    let mut reporter = Reporter::new(out);

    match registration {
        Registration::ThirdPartyResource => {
            let api: Api<ThirdPartyResource> = Api::all(client.clone());
            let outcome = ensure_third_party_resource(&api).await?;
            report_registration(&mut reporter, &outcome)?;
        }
        Registration::CustomResourceDefinition => {
            let api: Api<CustomResourceDefinition> = Api::all(client.clone());
            let outcome = ensure_custom_resource_definition(&api).await?;
            report_registration(&mut reporter, &outcome)?;
        }
    }

    let group_version = GroupVersion::gv(&Example::group(&()), &Example::version(&()));
    let config = RestConfig::for_group_version(group_version)?;
    let rest = RestClient::for_resource::<Example>(client, config)?;

    match ensure_example(&rest).await? {
        Outcome::Created { created, .. } => reporter.created(&created)?,
        Outcome::Existing(existing) => reporter.fetched(&existing)?,
    }

    let list = list_examples(&rest).await?;
    reporter.listed(&list)?;
    Ok(())
}
