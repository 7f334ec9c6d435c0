//! Lowering from the tree-sitter Java tree to the compilation-unit model.

use endoscope_core::model::{
    AnnotationExpr, CompilationUnit, Expression, FieldDeclaration, ImportDeclaration,
    MemberDeclaration, MemberValuePair, MethodDeclaration, TypeDeclaration, VariableDeclarator,
};
use tree_sitter::Node;

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

pub(crate) fn lower_unit(root: Node, source: &str) -> CompilationUnit {
    let mut package = None;
    let mut imports = Vec::new();
    let mut types = Vec::new();

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        match child.kind() {
            "package_declaration" => package = qualified_name(child, source),
            "import_declaration" => {
                if let Some(import) = lower_import(child, source) {
                    imports.push(import);
                }
            }
            "class_declaration" | "interface_declaration" | "enum_declaration"
            | "record_declaration" => {
                if let Some(declaration) = lower_type(child, source) {
                    types.push(declaration);
                }
            }
            _ => {}
        }
    }

    CompilationUnit {
        package,
        imports,
        types,
    }
}

fn qualified_name(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))
        .map(|child| node_text(child, source).to_string())
}

fn lower_import(node: Node, source: &str) -> Option<ImportDeclaration> {
    // `import a.b.*;` carries a trailing asterisk node next to the name.
    let name = qualified_name(node, source)?;
    let mut cursor = node.walk();
    let is_wildcard = node
        .children(&mut cursor)
        .any(|child| child.kind() == "asterisk");
    Some(ImportDeclaration { name, is_wildcard })
}

fn lower_type(node: Node, source: &str) -> Option<TypeDeclaration> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())?;
    let annotations = annotations_on(node, source);
    let members = node
        .child_by_field_name("body")
        .map(|body| lower_members(body, source))
        .unwrap_or_default();

    Some(TypeDeclaration {
        name,
        annotations,
        members,
    })
}

fn lower_members(body: Node, source: &str) -> Vec<MemberDeclaration> {
    let mut members = Vec::new();
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        match child.kind() {
            // Interface bodies declare their fields as constant_declaration.
            "field_declaration" | "constant_declaration" => {
                members.push(MemberDeclaration::Field(lower_field(child, source)));
            }
            "method_declaration" => {
                members.push(MemberDeclaration::Method(lower_method(child, source)));
            }
            // Enum members sit one level deeper, behind the constants.
            "enum_body_declarations" => members.extend(lower_members(child, source)),
            _ => {
                if child.is_named() && !child.is_extra() {
                    members.push(MemberDeclaration::Other);
                }
            }
        }
    }
    members
}

fn lower_field(node: Node, source: &str) -> FieldDeclaration {
    let mut variables = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "variable_declarator" {
            continue;
        }
        let Some(name_node) = child.child_by_field_name("name") else {
            continue;
        };
        let initializer = child
            .child_by_field_name("value")
            .map(|value| lower_expression(value, source));
        variables.push(VariableDeclarator {
            name: node_text(name_node, source).to_string(),
            initializer,
        });
    }
    FieldDeclaration { variables }
}

fn lower_method(node: Node, source: &str) -> MethodDeclaration {
    MethodDeclaration {
        name: node
            .child_by_field_name("name")
            .map(|n| node_text(n, source).to_string())
            .unwrap_or_default(),
        annotations: annotations_on(node, source),
    }
}

/// Annotations of a declaration, read off its `modifiers` child.
fn annotations_on(node: Node, source: &str) -> Vec<AnnotationExpr> {
    let mut annotations = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "modifiers" {
            continue;
        }
        let mut modifier_cursor = child.walk();
        for modifier in child.children(&mut modifier_cursor) {
            if matches!(modifier.kind(), "marker_annotation" | "annotation") {
                if let Some(annotation) = lower_annotation(modifier, source) {
                    annotations.push(annotation);
                }
            }
        }
    }
    annotations
}

fn lower_annotation(node: Node, source: &str) -> Option<AnnotationExpr> {
    // The name keeps its written form, so a qualified in-place usage
    // (`@org.springframework.stereotype.Controller`) never matches a simple
    // name downstream.
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())?;

    let Some(arguments) = node.child_by_field_name("arguments") else {
        return Some(AnnotationExpr::Marker { name });
    };

    let mut pairs = Vec::new();
    let mut single = None;
    let mut cursor = arguments.walk();
    for child in arguments.children(&mut cursor) {
        if !child.is_named() || child.is_extra() {
            continue;
        }
        if child.kind() == "element_value_pair" {
            let key = child
                .child_by_field_name("key")
                .map(|k| node_text(k, source).to_string());
            let value = child
                .child_by_field_name("value")
                .map(|v| lower_expression(v, source));
            if let (Some(name), Some(value)) = (key, value) {
                pairs.push(MemberValuePair { name, value });
            }
        } else if single.is_none() {
            single = Some(lower_expression(child, source));
        }
    }

    if !pairs.is_empty() {
        Some(AnnotationExpr::Normal { name, pairs })
    } else if let Some(value) = single {
        Some(AnnotationExpr::SingleValue { name, value })
    } else {
        // `@Foo()`: an argument list with nothing in it.
        Some(AnnotationExpr::Marker { name })
    }
}

fn lower_expression(node: Node, source: &str) -> Expression {
    match node.kind() {
        "string_literal" => Expression::StringLiteral(string_literal_value(node, source)),
        "identifier" => Expression::Symbol(node_text(node, source).to_string()),
        _ => Expression::Other(node_text(node, source).to_string()),
    }
}

/// Concatenated fragments of a string literal, escapes kept as written.
fn string_literal_value(node: Node, source: &str) -> String {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| matches!(child.kind(), "string_fragment" | "escape_sequence"))
        .map(|child| node_text(child, source))
        .collect()
}
