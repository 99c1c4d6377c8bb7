//! Tiny CSS selector subset for [`MemoryView`](super::MemoryView).
//!
//! Supported: type (`h1`), class (`.hero-title`), attribute presence (`[data-i18n]`)
//! and equality (`[data-lang="de"]`, quotes optional), compounds of those
//! (`button.lang-btn[data-lang=de]`) and the descendant combinator
//! (`.footer-logo .logo-text`).

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("expected {0}")]
    Expected(&'static str),
    #[error("unexpected character `{0}`")]
    Unexpected(char),
    #[error("unterminated quoted value")]
    Unterminated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) tag: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Vec<(String, Option<String>)>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }
}

/// Parsed selector: compounds separated by descendant combinators, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub(crate) compounds: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut chars = input.trim().chars().peekable();
        let mut compounds = Vec::new();
        while chars.peek().is_some() {
            compounds.push(parse_compound(&mut chars)?);
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        }
        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { compounds })
    }

    /// Innermost compound; the one the matched element itself must satisfy.
    pub(crate) fn subject(&self) -> &Compound {
        // parse() guarantees at least one compound
        &self.compounds[self.compounds.len() - 1]
    }

    pub(crate) fn ancestors(&self) -> &[Compound] {
        &self.compounds[..self.compounds.len() - 1]
    }
}

fn parse_compound(chars: &mut Peekable<Chars<'_>>) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let tag = take_ident(chars);
    if !tag.is_empty() {
        compound.tag = Some(tag.to_ascii_lowercase());
    }
    loop {
        match chars.peek().copied() {
            Some('.') => {
                chars.next();
                let class = take_ident(chars);
                if class.is_empty() {
                    return Err(SelectorError::Expected("class name"));
                }
                compound.classes.push(class);
            }
            Some('[') => {
                chars.next();
                compound.attributes.push(parse_attribute(chars)?);
            }
            Some(c) if c.is_whitespace() => break,
            None => break,
            Some(c) => return Err(SelectorError::Unexpected(c)),
        }
    }
    if compound.is_empty() {
        return Err(SelectorError::Expected("type, class or attribute"));
    }
    Ok(compound)
}

fn parse_attribute(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<(String, Option<String>), SelectorError> {
    let name = take_ident(chars);
    if name.is_empty() {
        return Err(SelectorError::Expected("attribute name"));
    }
    match chars.next() {
        Some(']') => Ok((name, None)),
        Some('=') => {
            let value = match chars.peek().copied() {
                Some(quote @ ('"' | '\'')) => {
                    chars.next();
                    let mut value = String::new();
                    loop {
                        match chars.next() {
                            Some(c) if c == quote => break,
                            Some(c) => value.push(c),
                            None => return Err(SelectorError::Unterminated),
                        }
                    }
                    value
                }
                _ => {
                    let mut value = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == ']' {
                            break;
                        }
                        value.push(c);
                        chars.next();
                    }
                    value
                }
            };
            match chars.next() {
                Some(']') => Ok((name, Some(value))),
                _ => Err(SelectorError::Expected("`]`")),
            }
        }
        Some(c) => Err(SelectorError::Unexpected(c)),
        None => Err(SelectorError::Expected("`]`")),
    }
}

fn take_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_descendant_classes() {
        let sel = Selector::parse(".footer-logo .logo-text").unwrap();
        assert_eq!(sel.compounds.len(), 2);
        assert_eq!(sel.subject().classes, vec!["logo-text".to_string()]);
        assert_eq!(sel.ancestors()[0].classes, vec!["footer-logo".to_string()]);
    }

    #[test]
    fn parses_compound_with_attributes() {
        let sel = Selector::parse(r#"button.lang-btn[data-lang="de"][disabled]"#).unwrap();
        let subject = sel.subject();
        assert_eq!(subject.tag.as_deref(), Some("button"));
        assert_eq!(subject.classes, vec!["lang-btn".to_string()]);
        assert_eq!(
            subject.attributes,
            vec![
                ("data-lang".to_string(), Some("de".to_string())),
                ("disabled".to_string(), None),
            ]
        );
    }

    #[test]
    fn unquoted_values_and_dotted_keys() {
        let sel = Selector::parse("[data-i18n=hero.title]").unwrap();
        assert_eq!(
            sel.subject().attributes[0],
            ("data-i18n".to_string(), Some("hero.title".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("."), Err(SelectorError::Expected("class name")));
        assert_eq!(Selector::parse("[a=\"x]"), Err(SelectorError::Unterminated));
        assert_eq!(Selector::parse("div > p"), Err(SelectorError::Unexpected('>')));
        assert_eq!(Selector::parse("#id"), Err(SelectorError::Unexpected('#')));
    }
}
