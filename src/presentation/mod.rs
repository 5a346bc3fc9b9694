/// Assignment (ownership transfer) models
pub mod assignment;
/// Continuity (parent/child application) models
pub mod continuity;
/// File wrapper document models
pub mod documents;
/// Full application record models
pub mod file_wrapper;
/// Foreign priority claim models
pub mod foreign_priority;
/// Serialization utilities for API responses
pub mod serialization;
/// Prosecution transaction models
pub mod transactions;

pub use assignment::*;
pub use continuity::*;
pub use documents::*;
pub use file_wrapper::*;
pub use foreign_priority::*;
pub use transactions::*;
