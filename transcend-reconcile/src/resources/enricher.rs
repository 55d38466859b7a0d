//! Enrichers: webhooks that look up additional identifiers for a request
//! subject from an input identifier.

use serde::{Deserialize, Serialize};
use transcend_convert::{ConvertResult, FieldProjection, IntoConfigValue, ValueSetExt};
use transcend_types::ValueSet;

use crate::kind::{Operations, ResourceKind};
use crate::schema::{Header, HeaderInput, NamedRef, RequestAction, header_input, headers_to_config};

const UPSERT: &str = r#"mutation UpdateOrCreateEnricher($input: UpdateOrCreateEnricherInput!) {
  updateOrCreateEnricher(input: $input) {
    enricher { id title }
  }
}"#;

const READ: &str = r#"query Enrichers($ids: [ID!]) {
  enrichers(filterBy: { ids: $ids }) {
    nodes {
      id
      title
      description
      url
      inputIdentifier { name }
      identifiers { name }
      actions
      headers { name value isSecret }
    }
  }
}"#;

const DELETE: &str = r#"mutation DeleteEnrichers($ids: [ID!]!) {
  deleteEnrichers(input: { ids: $ids }) { success }
}"#;

/// Marker for the enricher resource kind.
pub struct Enricher;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnricherInput {
    pub title: String,
    pub description: String,
    pub url: String,
    pub input_identifier: String,
    pub identifiers: Vec<String>,
    pub actions: Vec<RequestAction>,
    pub headers: Vec<HeaderInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEnricher {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub input_identifier: Option<NamedRef>,
    #[serde(default)]
    pub identifiers: Vec<NamedRef>,
    #[serde(default)]
    pub actions: Vec<RequestAction>,
    #[serde(default)]
    pub headers: Vec<Header>,
}

impl ResourceKind for Enricher {
    const KIND: &'static str = "enricher";

    const OPERATIONS: Operations = Operations {
        upsert: UPSERT,
        upsert_name: "UpdateOrCreateEnricher",
        upsert_id: "/updateOrCreateEnricher/enricher/id",
        read: READ,
        read_name: "Enrichers",
        read_nodes: "/enrichers/nodes",
        delete: DELETE,
        delete_name: "DeleteEnrichers",
    };

    type Input = EnricherInput;
    type Remote = RemoteEnricher;

    fn build_input(values: &ValueSet) -> ConvertResult<EnricherInput> {
        Ok(EnricherInput {
            title: values.scalar("title")?,
            description: values.scalar("description")?,
            url: values.scalar("url")?,
            input_identifier: values.scalar("input_identifier")?,
            identifiers: values.scalar_list("identifiers")?,
            actions: values.scalar_list("actions")?,
            headers: values.nested_list("headers", header_input)?,
        })
    }

    fn projection() -> Vec<FieldProjection<RemoteEnricher>> {
        type Projection = FieldProjection<RemoteEnricher>;
        vec![
            Projection::new("title", |e| e.title.as_str().into_config_value()),
            Projection::new("description", |e| e.description.clone().into_config_value()),
            Projection::new("url", |e| e.url.clone().into_config_value()),
            Projection::new("input_identifier", |e| {
                e.input_identifier
                    .as_ref()
                    .map(|i| i.name.clone())
                    .into_config_value()
            }),
            Projection::new("identifiers", |e| {
                e.identifiers
                    .iter()
                    .map(|i| i.name.clone())
                    .collect::<Vec<_>>()
                    .into_config_value()
            }),
            Projection::new("actions", |e| e.actions.clone().into_config_value()),
            Projection::new("headers", |e| headers_to_config(&e.headers)),
        ]
    }
}
