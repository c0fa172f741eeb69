pub mod communications;
pub mod errors;
pub mod jobs;
pub mod site_visits;
pub mod templates;

pub use errors::{ServiceError, ServiceResult};
