//! HTTP inbound adapter exposing the contact endpoint and health probes.

pub mod contact;
pub mod contact_form;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
