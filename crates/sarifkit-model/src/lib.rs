//! Typed SARIF 2.1.0 document model.
//!
//! This crate is intentionally IO-free:
//! - one value record per SARIF entity, from `Message` up to `SarifLog`
//! - the `Level` enumeration
//! - the wire alias table mapping internal field names to SARIF wire names
//!
//! Loading and validation of JSON text live in `sarifkit-loader`.

#![forbid(unsafe_code)]

pub mod artifact;
pub mod descriptor;
pub mod level;
pub mod location;
pub mod log;
pub mod result;
pub mod run;
pub mod timestamp;
pub mod tool;
pub mod wire;

#[cfg(test)]
mod proptest;

pub use artifact::Artifact;
pub use descriptor::{
    ReportingConfiguration, ReportingDescriptor, ReportingDescriptorReference,
    ToolComponentReference,
};
pub use level::{Level, UnknownLevel};
pub use location::{
    ArtifactLocation, Location, LogicalLocation, Message, PhysicalLocation, Region,
};
pub use log::{SARIF_VERSION, SarifLog};
pub use result::SarifResult;
pub use run::{Invocation, Run};
pub use tool::{Tool, ToolDriver};
pub use wire::{EntityKind, FieldKind, SarifEntity, WireField, field_name, wire_name};

/// Free-form JSON carried verbatim for SARIF extension points.
pub type JsonValue = serde_json::Value;

/// Free-form property bag (`properties`, `parameters`, `originalUriBaseIds`).
pub type PropertyBag = std::collections::BTreeMap<String, JsonValue>;
