use std::fmt;

/// Inline CSS declarations of one element, in declaration order.
///
/// Property names are stored lowercased. Assigning an empty value removes the
/// property, mirroring `element.style.x = ""` in a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CSS text (`"color:#000;padding:0px"`). Malformed declarations are skipped.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        style.apply_css_text(css_text);
        style
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = name.trim().to_ascii_lowercase();
        let value = value.into().trim().to_string();
        if value.is_empty() {
            self.remove(&name);
            return;
        }
        match self.declarations.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        let index = self.declarations.iter().position(|(n, _)| *n == name)?;
        Some(self.declarations.remove(index).1)
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Replace every declaration with those in `css_text`.
    pub fn set_css_text(&mut self, css_text: &str) {
        self.declarations.clear();
        self.apply_css_text(css_text);
    }

    /// Merge the declarations in `css_text` over the current ones.
    pub fn apply_css_text(&mut self, css_text: &str) {
        for declaration in css_text.split(';') {
            if let Some((name, value)) = declaration.split_once(':') {
                if !name.trim().is_empty() {
                    self.set(name, value);
                }
            }
        }
    }

    /// Merge another style over this one.
    pub fn apply(&mut self, other: &Style) {
        for (name, value) in &other.declarations {
            self.set(name, value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn to_css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.declarations {
            write!(f, "{name}:{value};")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let style = Style::parse("color: #000 ; Background-Color:#fff;;bogus");
        assert_eq!(style.get("color"), Some("#000"));
        assert_eq!(style.get("background-color"), Some("#fff"));
        assert_eq!(style.len(), 2);
        assert_eq!(style.to_css_text(), "color:#000;background-color:#fff;");
    }

    #[test]
    fn test_empty_value_removes() {
        let mut style = Style::parse("color:#000;cursor:pointer");
        style.set("cursor", "");
        assert_eq!(style.get("cursor"), None);
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_apply_merges_in_place() {
        let mut style = Style::parse("color:#000;padding:0px");
        style.apply_css_text("color:#fff;margin:1px");
        assert_eq!(style.to_css_text(), "color:#fff;padding:0px;margin:1px;");
    }
}
