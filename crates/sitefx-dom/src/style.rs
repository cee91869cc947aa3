//! Inline style declarations (`style` attribute)

/// Ordered list of `property: value` declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value. Malformed declarations are skipped.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for decl in split_declarations(css_text) {
            let Some((prop, value)) = decl.split_once(':') else {
                continue;
            };
            let (prop, value) = (prop.trim(), value.trim());
            if !prop.is_empty() && !value.is_empty() {
                style.set_property(prop, value);
            }
        }
        style
    }

    /// Get a property value
    pub fn property(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, keeping its original position if already declared
    pub fn set_property(&mut self, name: &str, value: &str) {
        match self.declarations.iter_mut().find(|(p, _)| p.eq_ignore_ascii_case(name)) {
            Some(decl) => decl.1 = value.to_string(),
            None => self.declarations.push((name.to_ascii_lowercase(), value.to_string())),
        }
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|(p, _)| p.eq_ignore_ascii_case(name))?;
        Some(self.declarations.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialized `style` attribute value
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split on `;` outside parentheses and quotes, so `url(data:...;base64,...)`
/// stays one declaration
fn split_declarations(css_text: &str) -> Vec<&str> {
    let mut decls = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in css_text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                decls.push(&css_text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    decls.push(&css_text[start..]);
    decls
}
