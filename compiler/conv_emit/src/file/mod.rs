//! Rendering of a complete generated Go file.

use std::collections::BTreeSet;

use conv_types::package_name;

use crate::{render_method, Emitter, MethodSpec, StringEmitter};

/// Header marking the file as generated; Go tooling recognizes this form.
pub const GENERATED_HEADER: &str = "// Code generated by convc. DO NOT EDIT.";

/// One output file: package clause, imports and functions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSpec {
    /// Import path of the package the file belongs to.
    pub package: String,
    /// Imports referenced by the methods. The file's own package is
    /// filtered out when rendering.
    pub imports: BTreeSet<String>,
    pub methods: Vec<MethodSpec>,
}

impl FileSpec {
    pub fn new(package: impl Into<String>) -> Self {
        FileSpec {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Package name used in the `package` clause.
    pub fn package_name(&self) -> &str {
        package_name(&self.package)
    }
}

/// Render the file. Output ends with exactly one newline.
pub fn render_file(file: &FileSpec) -> String {
    let mut out = StringEmitter::with_capacity(1024);
    out.emit_line(0, GENERATED_HEADER);
    out.emit_newline();
    out.emit_line(0, &format!("package {}", file.package_name()));

    let imports: Vec<&str> = file
        .imports
        .iter()
        .map(String::as_str)
        .filter(|path| *path != file.package)
        .collect();
    match imports.as_slice() {
        [] => {}
        [only] => {
            out.emit_newline();
            out.emit_line(0, &format!("import \"{only}\""));
        }
        many => {
            out.emit_newline();
            out.emit_line(0, "import (");
            for path in many {
                out.emit_line(1, &format!("\"{path}\""));
            }
            out.emit_line(0, ")");
        }
    }

    for method in &file.methods {
        out.emit_newline();
        render_method(method, &mut out);
    }

    out.trim_trailing_blank_lines();
    out.ensure_trailing_newline();
    out.output()
}
