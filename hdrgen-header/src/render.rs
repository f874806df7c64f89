//! Strategies for rendering the platform import line.

/// Renders the umbrella import line into the platform import block.
pub trait ImportRenderer {
    fn render_import(&self, import_line: &str) -> String;
}

/// The import line on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainImport;

impl ImportRenderer for PlainImport {
    fn render_import(&self, import_line: &str) -> String {
        let mut out = String::with_capacity(import_line.len() + 1);
        out.push_str(import_line);
        out.push('\n');
        out
    }
}

/// Wraps the import so only Objective-C compilers see it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcGuard;

impl ObjcGuard {
    pub const OPEN: &'static str = "#ifdef __OBJC__\n";
    pub const CLOSE: &'static str = "#endif\n";
}

impl ImportRenderer for ObjcGuard {
    fn render_import(&self, import_line: &str) -> String {
        let mut out = String::new();
        out.push_str(Self::OPEN);
        out.push_str(&PlainImport.render_import(import_line));
        out.push_str(Self::CLOSE);
        out
    }
}
