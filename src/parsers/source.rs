//! Source file parsing.

use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source file together with the source map needed to resolve
/// spans back to line/column positions.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
}

/// Parse JS/TS source code into an AST.
///
/// Everything is parsed as TypeScript with TSX enabled, which accepts
/// plain JS as well.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

    Ok(ParsedSource { module, source_map })
}
