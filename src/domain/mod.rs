pub mod error;
pub mod matcher;
pub mod remover;
pub mod request;

pub use error::{DeletionError, GateError, SearchError, ValidationError, WipeError};
pub use matcher::{find_matching_dirs, host_case_sensitive, NamePattern};
pub use remover::{remove_dirs, DeletionOutcome};
pub use request::{validate_start_dir, ForceMode, SearchRequest, MAX_PATTERNS};
