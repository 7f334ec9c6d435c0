use endoscope_core::error::EndoscopeError;
use endoscope_core::model::{AnnotationExpr, Expression, MemberDeclaration};
use endoscope_java::JavaParser;

#[test]
fn parses_package_and_import_flags() {
    let unit = JavaParser::new()
        .parse(
            "package com.example.web;\n\
             import org.springframework.stereotype.Controller;\n\
             import org.springframework.web.bind.annotation.*;\n\
             class Empty {}",
        )
        .unwrap();

    assert_eq!(unit.package.as_deref(), Some("com.example.web"));
    assert_eq!(unit.imports.len(), 2);
    assert_eq!(
        unit.imports[0].name,
        "org.springframework.stereotype.Controller"
    );
    assert!(!unit.imports[0].is_wildcard);
    assert_eq!(
        unit.imports[1].name,
        "org.springframework.web.bind.annotation"
    );
    assert!(unit.imports[1].is_wildcard);
}

#[test]
fn lowers_the_three_annotation_shapes() {
    let unit = JavaParser::new()
        .parse(
            "import org.springframework.web.bind.annotation.*;\n\
             @RestController\n\
             public class Test {\n\
                 @GetMapping(\"/one\")\n\
                 public void one() {}\n\
                 @GetMapping(path = \"/two\", produces = \"application/json\")\n\
                 public void two() {}\n\
                 @Deprecated\n\
                 public void three() {}\n\
             }",
        )
        .unwrap();

    let declaration = &unit.types[0];
    assert_eq!(declaration.name, "Test");
    assert_eq!(
        declaration.annotations,
        vec![AnnotationExpr::Marker {
            name: "RestController".to_string()
        }]
    );

    let methods: Vec<_> = declaration.methods().collect();
    assert_eq!(methods.len(), 3);

    assert_eq!(
        methods[0].annotations,
        vec![AnnotationExpr::SingleValue {
            name: "GetMapping".to_string(),
            value: Expression::StringLiteral("/one".to_string()),
        }]
    );

    match &methods[1].annotations[0] {
        AnnotationExpr::Normal { name, pairs } => {
            assert_eq!(name, "GetMapping");
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[0].name, "path");
            assert_eq!(
                pairs[0].value,
                Expression::StringLiteral("/two".to_string())
            );
            assert_eq!(pairs[1].name, "produces");
        }
        other => panic!("expected a normal annotation, got {:?}", other),
    }

    assert_eq!(
        methods[2].annotations,
        vec![AnnotationExpr::Marker {
            name: "Deprecated".to_string()
        }]
    );
}

#[test]
fn annotation_with_empty_argument_list_is_a_marker() {
    let unit = JavaParser::new()
        .parse(
            "import org.springframework.web.bind.annotation.*;\n\
             @RestController\n\
             class Test {\n\
                 @GetMapping()\n\
                 void get() {}\n\
             }",
        )
        .unwrap();

    let method = unit.types[0].methods().next().unwrap();
    assert_eq!(
        method.annotations,
        vec![AnnotationExpr::Marker {
            name: "GetMapping".to_string()
        }]
    );
}

#[test]
fn qualified_annotation_keeps_its_written_name() {
    let unit = JavaParser::new()
        .parse(
            "@org.springframework.stereotype.Controller\n\
             class Test {}",
        )
        .unwrap();

    assert_eq!(
        unit.types[0].annotations[0].name(),
        "org.springframework.stereotype.Controller"
    );
    assert!(unit.types[0].annotation_by_name("Controller").is_none());
}

#[test]
fn lowers_field_declarators_and_initializers() {
    let unit = JavaParser::new()
        .parse(
            "class Test {\n\
                 String A = \"/a\", B;\n\
                 String S = OTHER;\n\
                 int N = 3;\n\
             }",
        )
        .unwrap();

    let declaration = &unit.types[0];
    assert_eq!(
        declaration
            .declared_variable("A")
            .and_then(|v| v.initializer.clone()),
        Some(Expression::StringLiteral("/a".to_string()))
    );
    assert!(
        declaration
            .declared_variable("B")
            .is_some_and(|v| v.initializer.is_none())
    );
    assert_eq!(
        declaration
            .declared_variable("S")
            .and_then(|v| v.initializer.clone()),
        Some(Expression::Symbol("OTHER".to_string()))
    );
    // Non-string, non-identifier initializers fall back to verbatim text.
    assert_eq!(
        declaration
            .declared_variable("N")
            .and_then(|v| v.initializer.clone()),
        Some(Expression::Other("3".to_string()))
    );
    assert!(declaration.declared_variable("MISSING").is_none());
}

#[test]
fn preserves_member_declaration_order() {
    let unit = JavaParser::new()
        .parse(
            "class Test {\n\
                 void first() {}\n\
                 String MID = \"/m\";\n\
                 Test() {}\n\
                 class Nested {}\n\
                 void last() {}\n\
             }",
        )
        .unwrap();

    let members = &unit.types[0].members;
    assert_eq!(members.len(), 5);
    assert!(matches!(members[0], MemberDeclaration::Method(ref m) if m.name == "first"));
    assert!(matches!(members[1], MemberDeclaration::Field(_)));
    assert!(matches!(members[2], MemberDeclaration::Other));
    assert!(matches!(members[3], MemberDeclaration::Other));
    assert!(matches!(members[4], MemberDeclaration::Method(ref m) if m.name == "last"));
}

#[test]
fn lowers_interface_constants_and_enum_methods() {
    let unit = JavaParser::new()
        .parse(
            "interface Api {\n\
                 String ROOT = \"/root\";\n\
                 void handler();\n\
             }\n\
             enum Mode {\n\
                 ON, OFF;\n\
                 void toggle() {}\n\
             }",
        )
        .unwrap();

    assert_eq!(unit.types.len(), 2);

    let api = &unit.types[0];
    assert_eq!(
        api.declared_variable("ROOT")
            .and_then(|v| v.initializer.clone()),
        Some(Expression::StringLiteral("/root".to_string()))
    );
    assert_eq!(api.methods().count(), 1);

    let mode = &unit.types[1];
    assert_eq!(mode.name, "Mode");
    assert_eq!(mode.methods().count(), 1);
    assert_eq!(mode.methods().next().unwrap().name, "toggle");
}

#[test]
fn empty_source_yields_an_empty_unit() {
    let unit = JavaParser::new().parse("").unwrap();

    assert!(unit.package.is_none());
    assert!(unit.imports.is_empty());
    assert!(unit.types.is_empty());
}

#[test]
fn malformed_source_is_a_parsing_error() {
    let result = JavaParser::new().parse("class Broken {{{ void ???");

    assert!(matches!(result, Err(EndoscopeError::Parsing(_))));
}
