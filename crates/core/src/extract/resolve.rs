use crate::model::{AnnotationExpr, Expression, TypeDeclaration};

fn is_path_attribute(name: &str) -> bool {
    name == "path" || name == "value"
}

/// Resolves a matched mapping annotation to its path text, if it has one.
///
/// The single-value form resolves its unnamed value; the normal form resolves
/// the first `path`/`value` pair in declaration order (whichever attribute
/// comes first wins); a bare marker, or a pair list carrying neither
/// attribute, yields no path and therefore no endpoint.
pub(crate) fn annotation_path(
    annotation: &AnnotationExpr,
    owner: &TypeDeclaration,
) -> Option<String> {
    match annotation {
        AnnotationExpr::Marker { .. } => None,
        AnnotationExpr::SingleValue { value, .. } => {
            Some(resolve_with_one_constant_hop(value, owner))
        }
        AnnotationExpr::Normal { pairs, .. } => pairs
            .iter()
            .find(|pair| is_path_attribute(&pair.name))
            .map(|pair| resolve_with_one_constant_hop(&pair.value, owner)),
    }
}

/// Terminal resolution step: a string literal yields its value, anything else
/// yields its own textual form. Never recurses.
fn resolve_literal_or_symbol(expr: &Expression) -> String {
    expr.text().to_string()
}

/// Resolution with a single constant hop. A non-literal expression is looked
/// up as a declared variable of the owning type; a found initializer goes
/// through [`resolve_literal_or_symbol`] only, so a constant initialized from
/// another symbol stops at that symbol's own name instead of chasing the
/// chain. An undeclared or uninitialized symbol degrades to its own name,
/// visibly wrong output rather than a failed scan.
pub(crate) fn resolve_with_one_constant_hop(expr: &Expression, owner: &TypeDeclaration) -> String {
    if let Expression::StringLiteral(value) = expr {
        return value.clone();
    }
    let symbol = expr.text();
    match owner
        .declared_variable(symbol)
        .and_then(|var| var.initializer.as_ref())
    {
        Some(initializer) => resolve_literal_or_symbol(initializer),
        None => symbol.to_string(),
    }
}
