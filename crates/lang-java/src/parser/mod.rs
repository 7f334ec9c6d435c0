mod ast;

use endoscope_core::error::{EndoscopeError, Result};
use endoscope_core::model::CompilationUnit;
use tree_sitter::Parser;

/// The Java parser collaborator.
///
/// Wraps the tree-sitter Java grammar and lowers parsed trees into the
/// compilation-unit model the extraction engine consumes. Stateless across
/// calls; a fresh tree-sitter parser is set up per parse.
pub struct JavaParser {
    language: tree_sitter::Language,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// Parses one Java source file into its compilation-unit model.
    ///
    /// tree-sitter recovers from broken input instead of failing, so
    /// "malformed" here means the parse produced no tree or a tree carrying
    /// syntax errors. A partial tree never reaches the caller.
    pub fn parse(&self, source: &str) -> Result<CompilationUnit> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| EndoscopeError::Internal(format!("failed to load Java grammar: {e}")))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| EndoscopeError::Parsing("parser produced no tree".to_string()))?;
        if tree.root_node().has_error() {
            return Err(EndoscopeError::Parsing(
                "source contains syntax errors".to_string(),
            ));
        }

        Ok(ast::lower_unit(tree.root_node(), source))
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}
