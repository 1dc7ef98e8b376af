//! Shared library for the holiday API Lambda functions.
//!
//! This crate provides the configuration, storage, error, and HTTP plumbing
//! used by the `holidays` endpoint.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use config::Config;
pub use db::HolidayStore;
pub use error::{Error, Result};
pub use models::{
    AddHolidayRequest, AddHolidayResponse, ApiAction, DeleteHolidayRequest, DeleteHolidayResponse,
    HolidayDocument, HolidayView,
};
