pub mod adapters;
pub mod error;
pub mod models;
pub mod ymw16;

pub use crate::adapters::process::{ProcessOutput, ProcessRunner, SystemRunner};
pub use crate::error::{ParseIssue, QueryError};
pub use crate::models::{ModelRecord, Query};
pub use crate::ymw16::invoker::ModelInvoker;
pub use crate::ymw16::record::parse_record;
