mod lead;
mod service;

pub use lead::Lead;
pub use service::{Service, CATALOG};
