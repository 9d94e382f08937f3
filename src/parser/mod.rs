//! Schema parsing (verb)
//!
//! Parses a YAML schema file into view definitions: the dimensions and
//! metrics a view exposes, the typed columns of its backing table, and the
//! inline rows of that table. Building the runtime objects (catalog,
//! frame, views) from these definitions happens in `engine::SemanticLayer`.
//!
//! Schema shape:
//!
//! ```yaml
//! views:
//!   - name: sales
//!     dimensions:
//!       - id: sales.region
//!         name: region
//!         column: region
//!         type: string
//!         description: The region dimension.
//!     metrics:
//!       - id: sales.total_revenue
//!         name: total_revenue
//!         column: revenue
//!         aggregation: sum
//!         type: decimal
//!     columns:
//!       - { name: region, type: string }
//!       - { name: revenue, type: decimal }
//!     rows:
//!       - [East, 1250.0]
//! ```

mod error;
mod schema;

pub use error::ParseError;
pub use schema::{
    parse_file, parse_str, ColumnDef, DimensionDef, MetricDef, Schema, ViewDef,
};
