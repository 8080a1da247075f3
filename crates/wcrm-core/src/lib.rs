//! # wcrm-core: Foundational Types for the Wealth CRM Backend
//!
//! Every other crate in the workspace depends on `wcrm-core`; it depends on
//! nothing internal.
//!
//! ## Contents
//!
//! - [`collection`]: the registry of the ten named collections and the
//!   normalization rule applied to caller-supplied collection names.
//! - [`document`]: the loosely-typed [`Document`] mapping stored by every
//!   collection, and conversion from typed entities.
//! - [`entity`]: typed views of each collection's declared fields. The
//!   generic create path does not enforce them; they are used by the
//!   recommendation generators, the demo seeder, and the OpenAPI document.
//! - [`id`]: the opaque, store-assigned [`DocumentId`].
//! - [`request`]: advisory (recommendation) request payloads.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wcrm-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod collection;
pub mod document;
pub mod entity;
pub mod error;
pub mod id;
pub mod request;

pub use collection::{normalize_collection_name, Collection};
pub use document::{to_document, Document, Filter};
pub use error::DocumentError;
pub use id::DocumentId;
pub use request::{EstatePlanningRequest, PortfolioAnalysisRequest, TaxOptimizationRequest};
