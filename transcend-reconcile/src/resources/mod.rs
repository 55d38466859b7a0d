//! Resource kinds managed by the reconciler.

mod data_point;
mod data_silo;
mod enricher;

pub use data_point::{
    AttributeInput, CategoryInput, DataCollection, DataPoint, DataPointInput, PurposeInput,
    QuerySuggestionInput, RemoteDataPoint, RemoteQuerySuggestion, RemoteRef, RemoteSubDataPoint,
    SubDataPointInput,
};
pub use data_silo::{Catalog, DataSilo, DataSiloInput, Owner, PlaintextContext, RemoteDataSilo};
pub use enricher::{Enricher, EnricherInput, RemoteEnricher};
