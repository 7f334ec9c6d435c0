use std::collections::HashMap;

use crate::model::ImportDeclaration;

pub(crate) const PKG_STEREOTYPE: &str = "org.springframework.stereotype";
pub(crate) const PKG_BIND_ANNOTATION: &str = "org.springframework.web.bind.annotation";

pub(crate) const CONTROLLER_FULL_NAME: &str = "org.springframework.stereotype.Controller";
pub(crate) const REST_CONTROLLER_FULL_NAME: &str =
    "org.springframework.web.bind.annotation.RestController";
pub(crate) const GET_MAPPING_FULL_NAME: &str =
    "org.springframework.web.bind.annotation.GetMapping";
pub(crate) const PUT_MAPPING_FULL_NAME: &str =
    "org.springframework.web.bind.annotation.PutMapping";
pub(crate) const POST_MAPPING_FULL_NAME: &str =
    "org.springframework.web.bind.annotation.PostMapping";
pub(crate) const PATCH_MAPPING_FULL_NAME: &str =
    "org.springframework.web.bind.annotation.PatchMapping";
pub(crate) const DELETE_MAPPING_FULL_NAME: &str =
    "org.springframework.web.bind.annotation.DeleteMapping";
pub(crate) const REQUEST_MAPPING_FULL_NAME: &str =
    "org.springframework.web.bind.annotation.RequestMapping";

/// The closed set of annotation names and packages the engine tracks.
const TRACKED_ANNOTATIONS: [&str; 8] = [
    CONTROLLER_FULL_NAME,
    REST_CONTROLLER_FULL_NAME,
    GET_MAPPING_FULL_NAME,
    PUT_MAPPING_FULL_NAME,
    POST_MAPPING_FULL_NAME,
    PATCH_MAPPING_FULL_NAME,
    DELETE_MAPPING_FULL_NAME,
    REQUEST_MAPPING_FULL_NAME,
];
const TRACKED_PACKAGES: [&str; 2] = [PKG_STEREOTYPE, PKG_BIND_ANNOTATION];

/// Visibility of the tracked annotations in one compilation unit.
///
/// Built once per unit, immutable afterwards. A name absent from a table
/// reads as `false`, never as an error; unknown imports are ignored.
pub struct ImportTable {
    explicit: HashMap<&'static str, bool>,
    wildcard: HashMap<&'static str, bool>,
}

impl ImportTable {
    pub fn build(imports: &[ImportDeclaration]) -> Self {
        let mut explicit: HashMap<_, _> =
            TRACKED_ANNOTATIONS.iter().map(|name| (*name, false)).collect();
        let mut wildcard: HashMap<_, _> =
            TRACKED_PACKAGES.iter().map(|pkg| (*pkg, false)).collect();

        for import in imports {
            if import.is_wildcard {
                if let Some(seen) = wildcard.get_mut(import.name.as_str()) {
                    *seen = true;
                }
                continue;
            }
            if let Some(seen) = explicit.get_mut(import.name.as_str()) {
                *seen = true;
            }
        }

        ImportTable { explicit, wildcard }
    }

    /// Whether an annotation usage is plausibly the framework's: its
    /// fully-qualified name was imported explicitly, or its owning package
    /// was wildcard-imported. Import presence stands in for resolution;
    /// nothing is ever checked against a classpath, so a fully-qualified
    /// in-place usage without an import is not recognized.
    pub fn resolved_by_import(&self, full_name: &str, package: &str) -> bool {
        self.explicit.get(full_name).copied().unwrap_or(false)
            || self.wildcard.get(package).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(name: &str, is_wildcard: bool) -> ImportDeclaration {
        ImportDeclaration {
            name: name.to_string(),
            is_wildcard,
        }
    }

    #[test]
    fn explicit_import_marks_exactly_its_own_entry() {
        let table = ImportTable::build(&[import(GET_MAPPING_FULL_NAME, false)]);

        assert!(table.resolved_by_import(GET_MAPPING_FULL_NAME, PKG_BIND_ANNOTATION));
        assert!(!table.resolved_by_import(POST_MAPPING_FULL_NAME, PKG_BIND_ANNOTATION));
        assert!(!table.resolved_by_import(CONTROLLER_FULL_NAME, PKG_STEREOTYPE));
    }

    #[test]
    fn wildcard_import_covers_the_whole_package() {
        let table = ImportTable::build(&[import(PKG_BIND_ANNOTATION, true)]);

        assert!(table.resolved_by_import(GET_MAPPING_FULL_NAME, PKG_BIND_ANNOTATION));
        assert!(table.resolved_by_import(REQUEST_MAPPING_FULL_NAME, PKG_BIND_ANNOTATION));
        // The stereotype package is a different entry.
        assert!(!table.resolved_by_import(CONTROLLER_FULL_NAME, PKG_STEREOTYPE));
    }

    #[test]
    fn untracked_imports_are_ignored() {
        let table = ImportTable::build(&[
            import("java.util.List", false),
            import("java.util", true),
            // A wildcard spelled as an explicit name must not flip the
            // package entry, and vice versa.
            import(PKG_BIND_ANNOTATION, false),
            import(CONTROLLER_FULL_NAME, true),
        ]);

        assert!(!table.resolved_by_import(GET_MAPPING_FULL_NAME, PKG_BIND_ANNOTATION));
        assert!(!table.resolved_by_import(CONTROLLER_FULL_NAME, PKG_STEREOTYPE));
    }
}
