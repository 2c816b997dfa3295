//! Sequential string transformations.
//!
//! These utilities reshape text rather than analyze it: receipt layout,
//! user-record normalization, the cleaning pipeline, and rule-based
//! substitution. They reuse the matchers from [`crate::domain`] wherever a
//! token has to be recognized.

pub mod pipeline;
pub mod receipt;
pub mod record;
pub mod replace;

pub use pipeline::{clean_text, CleanOperation, PipelineResult};
pub use receipt::{format_receipt, render_receipt, ReceiptLine};
pub use record::{normalize_user, RawUserData, RecordValidation, UserRecord};
pub use replace::{smart_replace, Contraction, ReplaceOptions};
