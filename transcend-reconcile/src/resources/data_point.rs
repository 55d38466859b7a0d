//! Data points: a named piece of personal data stored in a data silo,
//! with nested sub-data-points.

use serde::{Deserialize, Serialize};
use transcend_convert::{ConvertResult, FieldProjection, IntoConfigValue, ValueSetExt};
use transcend_types::{ConfigValue, ValueSet};

use crate::kind::{Operations, ResourceKind};
use crate::schema::{LocalizedText, RequestAction, default_message};

const UPSERT: &str = r#"mutation UpdateOrCreateDataPoint($input: UpdateOrCreateDataPointInput!) {
  updateOrCreateDataPoint(input: $input) {
    dataPoint { id name }
  }
}"#;

const READ: &str = r#"query DataPoints($ids: [ID!]) {
  dataPoints(filterBy: { ids: $ids }) {
    nodes {
      id
      name
      title { defaultMessage }
      description { defaultMessage }
      dataSilo { id }
      dataCollection { visualId }
      enabledActions
      querySuggestions { suggestedQuery requestType }
      subDataPoints {
        name
        description
        categories { name category }
        purposes { name purpose }
        attributes { key values }
      }
    }
  }
}"#;

const DELETE: &str = r#"mutation DeleteDataPoints($ids: [ID!]!) {
  deleteDataPoints(input: { ids: $ids }) { success }
}"#;

/// Marker for the data point resource kind.
pub struct DataPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPointInput {
    pub data_silo_id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub data_collection_tag: String,
    pub query_suggestions: Vec<QuerySuggestionInput>,
    pub enabled_actions: Vec<RequestAction>,
    pub sub_data_points: Vec<SubDataPointInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySuggestionInput {
    pub suggested_query: String,
    pub request_type: RequestAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubDataPointInput {
    pub name: String,
    pub description: String,
    pub categories: Vec<CategoryInput>,
    pub purposes: Vec<PurposeInput>,
    pub attributes: Vec<AttributeInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurposeInput {
    pub name: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInput {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDataPoint {
    pub id: String,
    pub name: String,
    pub title: LocalizedText,
    pub description: Option<LocalizedText>,
    pub data_silo: Option<RemoteRef>,
    pub data_collection: Option<DataCollection>,
    #[serde(default)]
    pub enabled_actions: Vec<RequestAction>,
    #[serde(default)]
    pub query_suggestions: Vec<RemoteQuerySuggestion>,
    #[serde(default)]
    pub sub_data_points: Vec<RemoteSubDataPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCollection {
    pub visual_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteQuerySuggestion {
    pub suggested_query: String,
    pub request_type: RequestAction,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSubDataPoint {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<CategoryInput>,
    #[serde(default)]
    pub purposes: Vec<PurposeInput>,
    #[serde(default)]
    pub attributes: Vec<AttributeInput>,
}

fn query_suggestion_input(block: &ValueSet) -> ConvertResult<QuerySuggestionInput> {
    Ok(QuerySuggestionInput {
        suggested_query: block.scalar("suggested_query")?,
        request_type: block.scalar("request_type")?,
    })
}

fn sub_data_point_input(block: &ValueSet) -> ConvertResult<SubDataPointInput> {
    Ok(SubDataPointInput {
        name: block.scalar("name")?,
        description: block.scalar("description")?,
        categories: block.nested_list("categories", |c| {
            Ok(CategoryInput {
                name: c.scalar("name")?,
                category: c.scalar("category")?,
            })
        })?,
        purposes: block.nested_list("purposes", |p| {
            Ok(PurposeInput {
                name: p.scalar("name")?,
                purpose: p.scalar("purpose")?,
            })
        })?,
        attributes: block.nested_list("attributes", |a| {
            Ok(AttributeInput {
                key: a.scalar("key")?,
                values: a.scalar_list("values")?,
            })
        })?,
    })
}

fn sub_data_point_to_config(sub: &RemoteSubDataPoint) -> ValueSet {
    let categories: Vec<ValueSet> = sub
        .categories
        .iter()
        .map(|c| {
            ValueSet::new()
                .with("name", c.name.as_str())
                .with("category", c.category.as_str())
        })
        .collect();
    let purposes: Vec<ValueSet> = sub
        .purposes
        .iter()
        .map(|p| {
            ValueSet::new()
                .with("name", p.name.as_str())
                .with("purpose", p.purpose.as_str())
        })
        .collect();
    let attributes: Vec<ValueSet> = sub
        .attributes
        .iter()
        .map(|a| {
            ValueSet::new()
                .with("key", a.key.as_str())
                .with("values", a.values.clone())
        })
        .collect();

    ValueSet::new()
        .with("name", sub.name.as_str())
        .with("description", sub.description.clone().unwrap_or_default())
        .with("categories", categories)
        .with("purposes", purposes)
        .with("attributes", attributes)
}

impl ResourceKind for DataPoint {
    const KIND: &'static str = "datapoint";

    const OPERATIONS: Operations = Operations {
        upsert: UPSERT,
        upsert_name: "UpdateOrCreateDataPoint",
        upsert_id: "/updateOrCreateDataPoint/dataPoint/id",
        read: READ,
        read_name: "DataPoints",
        read_nodes: "/dataPoints/nodes",
        delete: DELETE,
        delete_name: "DeleteDataPoints",
    };

    type Input = DataPointInput;
    type Remote = RemoteDataPoint;

    fn build_input(values: &ValueSet) -> ConvertResult<DataPointInput> {
        Ok(DataPointInput {
            data_silo_id: values.scalar("data_silo_id")?,
            name: values.scalar("name")?,
            title: values.scalar("title")?,
            description: values.scalar("description")?,
            data_collection_tag: values.scalar("data_collection_tag")?,
            query_suggestions: values.nested_list("query_suggestions", query_suggestion_input)?,
            enabled_actions: values.scalar_list("enabled_actions")?,
            sub_data_points: values.nested_list("sub_data_points", sub_data_point_input)?,
        })
    }

    fn projection() -> Vec<FieldProjection<RemoteDataPoint>> {
        type Projection = FieldProjection<RemoteDataPoint>;
        vec![
            Projection::new("name", |dp| dp.name.as_str().into_config_value()),
            Projection::new("title", |dp| {
                dp.title.default_message.as_str().into_config_value()
            }),
            Projection::new("description", |dp| default_message(dp.description.as_ref())),
            Projection::new("data_silo_id", |dp| {
                dp.data_silo
                    .as_ref()
                    .map(|s| s.id.clone())
                    .into_config_value()
            }),
            Projection::new("data_collection_tag", |dp| {
                dp.data_collection
                    .as_ref()
                    .map(|c| c.visual_id.clone())
                    .into_config_value()
            }),
            Projection::new("enabled_actions", |dp| {
                dp.enabled_actions.clone().into_config_value()
            }),
            Projection::new("query_suggestions", |dp| {
                dp.query_suggestions
                    .iter()
                    .map(|q| {
                        ValueSet::new()
                            .with("suggested_query", q.suggested_query.as_str())
                            .with("request_type", q.request_type.as_str())
                    })
                    .collect::<Vec<_>>()
                    .into_config_value()
            }),
            Projection::new("sub_data_points", |dp| {
                ConfigValue::List(
                    dp.sub_data_points
                        .iter()
                        .map(|s| ConfigValue::Block(sub_data_point_to_config(s)))
                        .collect(),
                )
            }),
        ]
    }
}
