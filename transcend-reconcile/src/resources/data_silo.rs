//! Data silos: an integration (SaaS tool, database, webhook) that holds
//! personal data.
//!
//! Secret context is write-only. It is sent to the connect mutation when
//! connecting is requested and never read back.

use serde::{Deserialize, Serialize};
use serde_json::json;
use transcend_client::GraphqlRequest;
use transcend_convert::{ConvertResult, FieldProjection, IntoConfigValue, ValueSetExt};
use transcend_types::{ResourceId, ValueSet};

use crate::kind::{Operations, ResourceKind};
use crate::schema::{Header, HeaderInput, header_input, headers_to_config};

const UPSERT: &str = r#"mutation UpdateOrCreateDataSilo($input: UpdateOrCreateDataSiloInput!) {
  updateOrCreateDataSilo(input: $input) {
    dataSilo { id title }
  }
}"#;

const READ: &str = r#"query DataSilos($ids: [ID!]) {
  dataSilos(filterBy: { ids: $ids }) {
    nodes {
      id
      type
      title
      description
      url
      outerType
      notifyEmailAddress
      isLive
      externalId
      connectionState
      owners { email }
      headers { name value isSecret }
      catalog { hasAvcFunctionality }
    }
  }
}"#;

const DELETE: &str = r#"mutation DeleteDataSilos($ids: [ID!]!) {
  deleteDataSilos(input: { ids: $ids }) { success }
}"#;

const RECONNECT: &str = r#"mutation ReconnectDataSilo($input: ReconnectDataSiloInput!) {
  reconnectDataSilo(input: $input) {
    dataSilo { id connectionState }
  }
}"#;

/// Marker for the data silo resource kind.
pub struct DataSilo;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSiloInput {
    #[serde(rename = "type")]
    pub silo_type: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub outer_type: String,
    pub notify_email_address: String,
    pub is_live: bool,
    pub owner_emails: Vec<String>,
    pub headers: Vec<HeaderInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaintextContext {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDataSilo {
    pub id: String,
    #[serde(rename = "type")]
    pub silo_type: String,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub outer_type: Option<String>,
    pub notify_email_address: Option<String>,
    #[serde(default)]
    pub is_live: bool,
    pub external_id: Option<String>,
    pub connection_state: Option<String>,
    #[serde(default)]
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub headers: Vec<Header>,
    pub catalog: Option<Catalog>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub has_avc_functionality: bool,
}

fn plaintext_context(block: &ValueSet) -> ConvertResult<PlaintextContext> {
    Ok(PlaintextContext {
        name: block.scalar("name")?,
        value: block.scalar("value")?,
    })
}

impl ResourceKind for DataSilo {
    const KIND: &'static str = "data silo";

    const OPERATIONS: Operations = Operations {
        upsert: UPSERT,
        upsert_name: "UpdateOrCreateDataSilo",
        upsert_id: "/updateOrCreateDataSilo/dataSilo/id",
        read: READ,
        read_name: "DataSilos",
        read_nodes: "/dataSilos/nodes",
        delete: DELETE,
        delete_name: "DeleteDataSilos",
    };

    type Input = DataSiloInput;
    type Remote = RemoteDataSilo;

    fn build_input(values: &ValueSet) -> ConvertResult<DataSiloInput> {
        Ok(DataSiloInput {
            silo_type: values.scalar("type")?,
            title: values.scalar("title")?,
            description: values.scalar("description")?,
            url: values.scalar("url")?,
            outer_type: values.scalar("outer_type")?,
            notify_email_address: values.scalar("notify_email_address")?,
            is_live: values.scalar("is_live")?,
            owner_emails: values.scalar_list("owner_emails")?,
            headers: values.nested_list("headers", header_input)?,
        })
    }

    fn projection() -> Vec<FieldProjection<RemoteDataSilo>> {
        type Projection = FieldProjection<RemoteDataSilo>;
        vec![
            Projection::new("type", |s| s.silo_type.as_str().into_config_value()),
            Projection::new("title", |s| s.title.as_str().into_config_value()),
            Projection::new("description", |s| s.description.clone().into_config_value()),
            Projection::new("url", |s| s.url.clone().into_config_value()),
            Projection::new("outer_type", |s| s.outer_type.clone().into_config_value()),
            Projection::new("notify_email_address", |s| {
                s.notify_email_address.clone().into_config_value()
            }),
            Projection::new("is_live", |s| s.is_live.into_config_value()),
            Projection::new("owner_emails", |s| {
                s.owners
                    .iter()
                    .map(|o| o.email.clone())
                    .collect::<Vec<_>>()
                    .into_config_value()
            }),
            Projection::new("headers", |s| headers_to_config(&s.headers)),
            Projection::new("aws_external_id", |s| s.external_id.clone().into_config_value()),
            Projection::new("connection_state", |s| {
                s.connection_state.clone().into_config_value()
            }),
            Projection::new("has_avc_functionality", |s| {
                s.catalog
                    .as_ref()
                    .is_some_and(|c| c.has_avc_functionality)
                    .into_config_value()
            }),
        ]
    }

    /// Connects the silo with its secret context unless `skip_connecting`
    /// is set (the default).
    fn follow_up(values: &ValueSet, id: &ResourceId) -> ConvertResult<Option<GraphqlRequest>> {
        let skip: Option<bool> = values.scalar("skip_connecting")?;
        if skip.unwrap_or(true) {
            return Ok(None);
        }

        let context = values.nested_list("secret_context", plaintext_context)?;
        let variables = json!({
            "input": {
                "dataSiloId": id.as_str(),
                "plaintextContext": context,
            }
        });
        Ok(Some(GraphqlRequest::new(RECONNECT, "ReconnectDataSilo", variables)))
    }
}
