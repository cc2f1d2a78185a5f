//! Output emitter.
//!
//! Renderers write through [`Emitter`] so the same code can target an
//! in-memory string or any other sink.

/// Sink for rendered Go source.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (`\n`).
    fn emit_newline(&mut self);

    /// Emit `depth` levels of indentation. Go source is indented with tabs.
    fn emit_indent(&mut self, depth: usize);

    /// Emit one indented line.
    fn emit_line(&mut self, depth: usize, text: &str) {
        self.emit_indent(depth);
        self.emit(text);
        self.emit_newline();
    }
}

/// String-backed emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Ensure the output ends with exactly one newline.
    pub fn ensure_trailing_newline(&mut self) {
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    /// Drop trailing blank lines and whitespace, keeping one newline.
    pub fn trim_trailing_blank_lines(&mut self) {
        let end = self.buffer.trim_end().len();
        if end < self.buffer.len() {
            self.buffer.truncate(end);
            self.buffer.push('\n');
        }
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buffer.push('\t');
        }
    }
}

#[cfg(test)]
mod tests;
