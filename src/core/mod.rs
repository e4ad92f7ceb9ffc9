//! Transformation Core
//!
//! Pure, stateless views over the fetched record set: column sorting for
//! the history table and summary/grouping figures for the stats panel and
//! charts. No request/response types leak in here; the fetch collaborator
//! lives in `crate::api` and the rendering collaborators in
//! `crate::pages`/`crate::components`. Both operations are invoked fresh
//! on every render with the current records and view state.

pub mod aggregate;
pub mod records;
pub mod sort;

pub use aggregate::{bucket_by_score_range, group_by_emotion, summarize, Summary};
pub use records::{Analysis, AnalysisRecord, CustomerInfo, CustomerRecord};
pub use sort::{parse_timestamp, sort_records, SortField};
