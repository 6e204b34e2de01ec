//! Command implementations.

pub mod claims;
pub mod dss;
pub mod intake;
pub mod review;
pub mod villages;

pub use self::claims::{execute_claims, execute_queue};
pub use self::dss::{execute_aggregate, execute_recommend, execute_rules};
pub use self::intake::{execute_attach, execute_intake};
pub use self::review::{execute_edit, execute_link, execute_review};
pub use self::villages::execute_villages;
