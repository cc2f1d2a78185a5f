use pretty_assertions::assert_eq;

use super::*;

#[test]
fn fragments_are_concatenated() {
    let mut emitter = StringEmitter::new();
    emitter.emit("dst.Name");
    emitter.emit(" = ");
    emitter.emit("src.Name");
    assert_eq!(emitter.output(), "dst.Name = src.Name");
}

#[test]
fn indentation_uses_tabs() {
    let mut emitter = StringEmitter::new();
    emitter.emit_line(0, "func F() {");
    emitter.emit_line(1, "if x != nil {");
    emitter.emit_line(2, "y = x");
    assert_eq!(emitter.output(), "func F() {\n\tif x != nil {\n\t\ty = x\n");
}

#[test]
fn trailing_newline_is_added_once() {
    let mut emitter = StringEmitter::new();
    emitter.emit("content");
    emitter.ensure_trailing_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "content\n");
}

#[test]
fn trailing_blank_lines_are_trimmed() {
    let mut emitter = StringEmitter::new();
    emitter.emit("content");
    emitter.emit_newline();
    emitter.emit_newline();
    emitter.emit_newline();
    emitter.trim_trailing_blank_lines();
    assert_eq!(emitter.output(), "content\n");
}

#[test]
fn trailing_whitespace_line_is_trimmed() {
    let mut emitter = StringEmitter::with_capacity(16);
    emitter.emit("content\n\t\n");
    emitter.trim_trailing_blank_lines();
    assert_eq!(emitter.output(), "content\n");
}
