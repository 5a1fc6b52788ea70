//! Text rewrite rules.
//!
//! Three regex substitutions applied in a fixed order over raw file content:
//! drop the component's import line, drop its self-closing usage tag, then
//! collapse the blank-line runs those removals leave behind. Matching is purely
//! textual; nothing here understands TSX syntax.

use anyhow::{Context, Result, bail};
use regex::Regex;

/// Component removed when no override is given.
pub const DEFAULT_COMPONENT: &str = "Header";

/// Module path the default component is imported from.
pub const DEFAULT_MODULE: &str = "@/components/Header";

/// Compiled substitution patterns for one component.
#[derive(Debug, Clone)]
pub struct Rules {
    import: Regex,
    usage: Regex,
    blank_lines: Regex,
}

impl Rules {
    /// Builds the rules removing `import <component> from '<module>'` and
    /// `<component />` from file content.
    ///
    /// Both inputs are matched literally. Fails if either is empty.
    pub fn new(component: &str, module: &str) -> Result<Self> {
        if component.trim().is_empty() {
            bail!("Component name must not be empty");
        }
        if module.trim().is_empty() {
            bail!("Module path must not be empty");
        }

        let component = regex::escape(component);
        let module = regex::escape(module);

        let import = Regex::new(&format!(r#"import {component} from ['"]{module}['"]\n?"#))
            .context("Failed to compile import pattern")?;
        let usage = Regex::new(&format!(r"\s*<{component}\s*/>\s*\n?"))
            .context("Failed to compile usage pattern")?;
        let blank_lines = Regex::new(r"\n\n\n+").context("Failed to compile blank-line pattern")?;

        Ok(Self {
            import,
            usage,
            blank_lines,
        })
    }

    /// Rules for `Header` imported from `@/components/Header`.
    pub fn default_header() -> Result<Self> {
        Self::new(DEFAULT_COMPONENT, DEFAULT_MODULE)
    }

    /// Applies the import, usage and blank-line rules in order.
    ///
    /// Content without any match comes back byte-identical.
    pub fn apply(&self, content: &str) -> String {
        let content = self.import.replace_all(content, "");
        let content = self.usage.replace_all(&content, "");
        self.blank_lines.replace_all(&content, "\n\n").into_owned()
    }
}
