//! Stylesheet Builder
//!
//! Structured CSS rules rendered in insertion order.

use std::fmt::Write;

/// A single `selector { property: value; ... }` rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Add a declaration
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    fn render_into(&self, out: &mut String, indent: &str) {
        let _ = writeln!(out, "{}{} {{", indent, self.selector);
        for (property, value) in &self.declarations {
            let _ = writeln!(out, "{}    {}: {};", indent, property, value);
        }
        let _ = writeln!(out, "{}}}", indent);
    }
}

/// An `@media` block wrapping a set of rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    pub query: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Rule(Rule),
    Media(MediaBlock),
}

/// An ordered collection of rules and media blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    items: Vec<Item>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.items.push(Item::Rule(rule));
        self
    }

    /// Add an `@media <query>` block
    pub fn media(mut self, query: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.items.push(Item::Media(MediaBlock {
            query: query.into(),
            rules,
        }));
        self
    }

    /// Selectors of all top-level rules, in order
    pub fn selectors(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Item::Rule(rule) => Some(rule.selector.as_str()),
                Item::Media(_) => None,
            })
            .collect()
    }

    /// Media queries, in order
    pub fn media_queries(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Item::Media(block) => Some(block.query.as_str()),
                Item::Rule(_) => None,
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match item {
                Item::Rule(rule) => rule.render_into(&mut out, ""),
                Item::Media(block) => {
                    let _ = writeln!(out, "@media {} {{", block.query);
                    for rule in &block.rules {
                        rule.render_into(&mut out, "    ");
                    }
                    out.push_str("}\n");
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_render() {
        let sheet = Stylesheet::new().rule(Rule::new(".logo").decl("color", "#2c3e50"));
        assert_eq!(sheet.render(), ".logo {\n    color: #2c3e50;\n}\n");
    }

    #[test]
    fn test_media_render() {
        let sheet = Stylesheet::new()
            .rule(Rule::new("a").decl("gap", "8px"))
            .media("(max-width: 768px)", vec![Rule::new("a").decl("gap", "4px")]);

        assert_eq!(
            sheet.render(),
            "a {\n    gap: 8px;\n}\n\n@media (max-width: 768px) {\n    a {\n        gap: 4px;\n    }\n}\n"
        );
        assert_eq!(sheet.selectors(), vec!["a"]);
        assert_eq!(sheet.media_queries(), vec!["(max-width: 768px)"]);
    }
}
