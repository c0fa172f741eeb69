//! Sales hub for a home-improvement field team: a job pipeline board and a
//! communication log with reusable message templates.
//!
//! All state lives in an [`repository::InMemoryRepository`] built from seed
//! data. Services hold the business rules, handlers wrap them and report the
//! outcome through a [`handlers::Notifier`].

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod handlers;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
