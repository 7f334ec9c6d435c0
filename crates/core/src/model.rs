use serde::{Deserialize, Serialize};

/// The syntax-level model of one Java source file.
///
/// Produced by a parser collaborator and consumed read-only by the extraction
/// engine. Nothing here is resolved against a classpath: lookups stay inside
/// the one compilation unit the model was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub package: Option<String>,
    pub imports: Vec<ImportDeclaration>,
    /// Top-level type declarations, in declaration order.
    pub types: Vec<TypeDeclaration>,
}

/// `import a.b.C;` or, with `is_wildcard`, `import a.b.*;` (name = `a.b`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub name: String,
    pub is_wildcard: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub annotations: Vec<AnnotationExpr>,
    pub members: Vec<MemberDeclaration>,
}

impl TypeDeclaration {
    /// First annotation carrying the given simple name, in declaration order.
    pub fn annotation_by_name(&self, name: &str) -> Option<&AnnotationExpr> {
        self.annotations.iter().find(|a| a.name() == name)
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.members.iter().filter_map(|member| match member {
            MemberDeclaration::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.members.iter().filter_map(|member| match member {
            MemberDeclaration::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Declared variable with the given name, searched across every field
    /// declarator of this type. Same compilation unit only.
    pub fn declared_variable(&self, name: &str) -> Option<&VariableDeclarator> {
        self.fields()
            .flat_map(|field| field.variables.iter())
            .find(|var| var.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberDeclaration {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    /// Constructors, initializer blocks, nested types. Preserved for member
    /// ordering, never scanned.
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub annotations: Vec<AnnotationExpr>,
}

impl MethodDeclaration {
    /// First annotation carrying the given simple name, in declaration order.
    pub fn annotation_by_name(&self, name: &str) -> Option<&AnnotationExpr> {
        self.annotations.iter().find(|a| a.name() == name)
    }
}

/// One field declaration, possibly declaring several variables
/// (`String A = "/a", B;`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub variables: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub name: String,
    pub initializer: Option<Expression>,
}

/// An annotation usage, in one of its three source shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationExpr {
    /// `@Controller`: name only.
    Marker { name: String },
    /// `@GetMapping("/get")`: one unnamed value.
    SingleValue { name: String, value: Expression },
    /// `@GetMapping(path = "/get")`: named pairs, in declaration order.
    Normal {
        name: String,
        pairs: Vec<MemberValuePair>,
    },
}

impl AnnotationExpr {
    /// The annotation's name as written in source.
    pub fn name(&self) -> &str {
        match self {
            AnnotationExpr::Marker { name }
            | AnnotationExpr::SingleValue { name, .. }
            | AnnotationExpr::Normal { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberValuePair {
    pub name: String,
    pub value: Expression,
}

/// A value expression. Only string literals and plain identifiers carry
/// meaning for extraction; every other expression kind is kept as its
/// verbatim source text and treated as "not a literal".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    StringLiteral(String),
    Symbol(String),
    Other(String),
}

impl Expression {
    /// The expression's textual form: the literal value for string literals,
    /// the symbol name or verbatim source text otherwise.
    pub fn text(&self) -> &str {
        match self {
            Expression::StringLiteral(s) | Expression::Symbol(s) | Expression::Other(s) => s,
        }
    }
}
