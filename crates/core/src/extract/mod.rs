//! The endpoint-extraction engine.
//!
//! Three stages per compilation unit: import resolution, controller
//! qualification, method annotation scanning. Data flows strictly downward
//! and nothing is retained across calls.

mod imports;
mod resolve;

pub use imports::ImportTable;

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::model::{CompilationUnit, MethodDeclaration, TypeDeclaration};
use imports::{
    CONTROLLER_FULL_NAME, DELETE_MAPPING_FULL_NAME, GET_MAPPING_FULL_NAME,
    PATCH_MAPPING_FULL_NAME, PKG_BIND_ANNOTATION, PKG_STEREOTYPE, POST_MAPPING_FULL_NAME,
    PUT_MAPPING_FULL_NAME, REQUEST_MAPPING_FULL_NAME, REST_CONTROLLER_FULL_NAME,
};

struct ControllerMarker {
    simple_name: &'static str,
    full_name: &'static str,
    package: &'static str,
}

const CONTROLLER_MARKERS: [ControllerMarker; 2] = [
    ControllerMarker {
        simple_name: "Controller",
        full_name: CONTROLLER_FULL_NAME,
        package: PKG_STEREOTYPE,
    },
    ControllerMarker {
        simple_name: "RestController",
        full_name: REST_CONTROLLER_FULL_NAME,
        package: PKG_BIND_ANNOTATION,
    },
];

struct MappingKind {
    simple_name: &'static str,
    full_name: &'static str,
    label: &'static str,
}

/// The six recognized mapping kinds, checked independently per method in this
/// fixed order. A method matching several kinds emits several endpoints.
const MAPPING_KINDS: [MappingKind; 6] = [
    MappingKind {
        simple_name: "GetMapping",
        full_name: GET_MAPPING_FULL_NAME,
        label: "GET",
    },
    MappingKind {
        simple_name: "PutMapping",
        full_name: PUT_MAPPING_FULL_NAME,
        label: "PUT",
    },
    MappingKind {
        simple_name: "PostMapping",
        full_name: POST_MAPPING_FULL_NAME,
        label: "POST",
    },
    MappingKind {
        simple_name: "PatchMapping",
        full_name: PATCH_MAPPING_FULL_NAME,
        label: "PATCH",
    },
    MappingKind {
        simple_name: "DeleteMapping",
        full_name: DELETE_MAPPING_FULL_NAME,
        label: "DELETE",
    },
    // RequestMapping pins no HTTP method of its own; the label keeps that
    // visible. TODO: report the method attribute when one is given.
    MappingKind {
        simple_name: "RequestMapping",
        full_name: REQUEST_MAPPING_FULL_NAME,
        label: "ANY?",
    },
];

/// One extracted endpoint: an HTTP-method label paired with a resolved path.
///
/// Renders as `"<METHOD> <path>"`, `METHOD` one of `GET`, `PUT`, `POST`,
/// `PATCH`, `DELETE`, `ANY?`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: String,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Scans one compilation unit and returns every endpoint its controller
/// types declare, in declaration order (types, then methods, then the fixed
/// kind order). Pure and infallible: anything the engine cannot resolve
/// degrades to a defined fallback instead of an error, and duplicates are
/// never collapsed.
pub fn extract_endpoints(unit: &CompilationUnit) -> Vec<Endpoint> {
    let table = ImportTable::build(&unit.imports);

    let mut endpoints = Vec::new();
    for declaration in &unit.types {
        if !is_scannable_controller(declaration, &table) {
            debug!(
                "type {} does not qualify as a controller, skipping",
                declaration.name
            );
            continue;
        }
        for method in declaration.methods() {
            scan_method(declaration, method, &table, &mut endpoints);
        }
    }
    endpoints
}

/// Controller gate: the type carries a `Controller` or `RestController`
/// annotation by simple name, and that marker's class or package is imported.
/// A type failing the gate is skipped wholesale, mapping annotations and all.
fn is_scannable_controller(declaration: &TypeDeclaration, table: &ImportTable) -> bool {
    CONTROLLER_MARKERS.iter().any(|marker| {
        declaration.annotation_by_name(marker.simple_name).is_some()
            && table.resolved_by_import(marker.full_name, marker.package)
    })
}

fn scan_method(
    declaration: &TypeDeclaration,
    method: &MethodDeclaration,
    table: &ImportTable,
    endpoints: &mut Vec<Endpoint>,
) {
    for kind in &MAPPING_KINDS {
        let Some(annotation) = method.annotation_by_name(kind.simple_name) else {
            continue;
        };
        if !table.resolved_by_import(kind.full_name, PKG_BIND_ANNOTATION) {
            continue;
        }
        // A matched annotation without a resolvable value emits nothing.
        if let Some(path) = resolve::annotation_path(annotation, declaration) {
            trace!(
                "{}#{} -> {} {}",
                declaration.name, method.name, kind.label, path
            );
            endpoints.push(Endpoint {
                method: kind.label,
                path,
            });
        }
    }
}
