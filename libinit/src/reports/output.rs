//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods; an
/// implementation only decides where lines go.
pub trait Output {
    /// Emit one line of regular output.
    fn line(&mut self, text: &str);

    /// Emit one line of diagnostic output.
    fn diagnostic(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str) {
        self.line(&format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {text}"));
    }

    /// An item that was created, e.g. a new file.
    fn added_item(&mut self, text: &str) {
        self.line(&format!("  + {text}"));
    }

    /// An item that was left untouched.
    fn skipped_item(&mut self, text: &str) {
        self.line(&format!("  = {text}"));
    }

    fn warning(&mut self, msg: &str) {
        self.diagnostic(&format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.line(&format!("── {label} ──"));
    }

    /// Render a block of preformatted text as is.
    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Lines go to stdout, diagnostics to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn diagnostic(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

/// Collects rendered lines so tests can assert on report output.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn diagnostic(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
