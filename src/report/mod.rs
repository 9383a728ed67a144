//! Report module - rendering and exporting wizard results

pub mod discovery;
pub mod export;
pub mod roadmap;
pub mod summary;

pub use discovery::*;
pub use export::*;
pub use roadmap::*;
pub use summary::*;

use crate::flows::ResultPayload;

/// Print the report matching the result's flow
pub fn display_result(result: &ResultPayload) {
    match result {
        ResultPayload::Roadmap(roadmap) => display_roadmap(roadmap),
        ResultPayload::Discovery(matched) => display_discovery(matched),
    }
}
