//! Domain aggregates exposed by the sales hub service layer.

pub mod communication;
pub mod contact;
pub mod job;
pub mod site_visit;
pub mod team_member;
pub mod template;
pub mod types;
