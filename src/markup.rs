//! HTML Tokenizer
//!
//! Splits an HTML document into comments, declarations, tags, and text,
//! recording the byte span of each token. The content of raw-text elements
//! (`<script>`, `<style>`, `<textarea>`, `<title>`) is kept as one text
//! token, so markup-like text inside them is never read as tags.
//!
//! # Example
//!
//! ```
//! use saty_nav::markup::{tokenize, TokenKind};
//!
//! let html = r#"<!-- <body> --><body class="dark"><script>a<b</script></body>"#;
//! let tokens = tokenize(html);
//! let tags: Vec<&str> = tokens
//!     .iter()
//!     .filter_map(|t| match &t.kind {
//!         TokenKind::StartTag(tag) => Some(tag.name.as_str()),
//!         _ => None,
//!     })
//!     .collect();
//!
//! assert_eq!(tags, vec!["body", "script"]);
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_until, take_while, take_while1},
    character::complete::{char, multispace0, satisfy},
    combinator::{consumed, map, opt, recognize, rest},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult, Offset,
};
use std::ops::Range;

/// Elements whose content is text up to the matching end tag
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// An attribute of a start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased name
    pub name: String,
    pub value: Option<String>,
    /// Byte span in the document, including leading whitespace
    pub span: Range<usize>,
}

/// A parsed start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Lowercased tag name
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub self_closing: bool,
}

impl StartTag {
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(|a| a.value.as_deref())
    }

    /// Whether the element has no content or end tag
    pub fn is_void(&self) -> bool {
        self.self_closing || VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    /// `<!DOCTYPE ...>` or `<?...>`
    Declaration,
    StartTag(StartTag),
    /// Lowercased tag name
    EndTag(String),
    Text,
}

/// A token and its byte span in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Tokenize a whole document. Never fails: anything that is not valid
/// markup is returned as text.
pub fn tokenize(html: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut input = html;

    while !input.is_empty() {
        let start = html.offset(input);
        let (remaining, kind) = match markup(input) {
            Ok(parsed) => parsed,
            Err(_) => match text(input) {
                Ok((remaining, _)) => (remaining, TokenKind::Text),
                Err(_) => break,
            },
        };
        let end = html.offset(remaining);
        input = remaining;

        let kind = match kind {
            TokenKind::StartTag(mut tag) => {
                // Attribute spans are relative to the tag until here
                for attr in &mut tag.attributes {
                    attr.span = attr.span.start + start..attr.span.end + start;
                }
                TokenKind::StartTag(tag)
            }
            other => other,
        };

        let raw_text = match &kind {
            TokenKind::StartTag(tag)
                if !tag.self_closing && RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) =>
            {
                Some(tag.name.clone())
            }
            _ => None,
        };

        tokens.push(Token {
            kind,
            span: start..end,
        });

        if let Some(name) = raw_text {
            let (remaining, content) = raw_text_content(input, &name);
            if !content.is_empty() {
                let offset = html.offset(content);
                tokens.push(Token {
                    kind: TokenKind::Text,
                    span: offset..offset + content.len(),
                });
            }
            input = remaining;
        }
    }

    tokens
}

fn markup(input: &str) -> IResult<&str, TokenKind> {
    alt((
        map(comment, |_| TokenKind::Comment),
        map(declaration, |_| TokenKind::Declaration),
        map(end_tag, TokenKind::EndTag),
        map(start_tag, TokenKind::StartTag),
    ))(input)
}

/// `<!-- ... -->`; an unterminated comment runs to the end of input
fn comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        tag("<!--"),
        alt((terminated(take_until("-->"), tag("-->")), rest)),
    ))(input)
}

fn declaration(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((tag("<!"), tag("<?"))),
        take_till(|c: char| c == '>'),
        opt(char('>')),
    )))(input)
}

fn end_tag(input: &str) -> IResult<&str, String> {
    map(
        delimited(tag("</"), tag_name, pair(take_till(|c: char| c == '>'), char('>'))),
        |name: &str| name.to_ascii_lowercase(),
    )(input)
}

fn start_tag(input: &str) -> IResult<&str, StartTag> {
    let (remaining, _) = char('<')(input)?;
    let (remaining, name) = tag_name(remaining)?;
    let (remaining, attrs) = many0(consumed(attribute))(remaining)?;
    let (remaining, _) = multispace0(remaining)?;
    let (remaining, slash) = opt(char('/'))(remaining)?;
    let (remaining, _) = char('>')(remaining)?;

    let attributes = attrs
        .into_iter()
        .map(|(raw, (name, value))| {
            let start = input.offset(raw);
            Attribute {
                name: name.to_ascii_lowercase(),
                value: value.map(str::to_string),
                span: start..start + raw.len(),
            }
        })
        .collect();

    Ok((
        remaining,
        StartTag {
            name: name.to_ascii_lowercase(),
            attributes,
            self_closing: slash.is_some(),
        },
    ))
}

fn tag_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == ':'),
    ))(input)
}

/// `name`, `name=value`, `name="value"`, or `name='value'`
fn attribute(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    preceded(
        take_while(|c: char| c.is_ascii_whitespace() || c == '/'),
        pair(
            attribute_name,
            opt(preceded(
                tuple((multispace0, char('='), multispace0)),
                attribute_value,
            )),
        ),
    )(input)
}

fn attribute_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| {
        !c.is_ascii_whitespace() && !matches!(c, '=' | '>' | '/' | '"' | '\'' | '<')
    })(input)
}

fn attribute_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        take_till1(|c: char| c.is_ascii_whitespace() || c == '>'),
    ))(input)
}

/// A run of text; a `<` that starts no markup is text too
fn text(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('<')), take_till(|c: char| c == '<')))(input)
}

/// Split raw-text content from the end tag that closes it
fn raw_text_content<'a>(input: &'a str, name: &str) -> (&'a str, &'a str) {
    let close = format!("</{}", name);
    let end = input
        .to_ascii_lowercase()
        .find(&close)
        .unwrap_or(input.len());
    (&input[end..], &input[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(html: &str) -> Vec<TokenKind> {
        tokenize(html).into_iter().map(|t| t.kind).collect()
    }

    fn start_tag_names(html: &str) -> Vec<String> {
        tokenize(html)
            .into_iter()
            .filter_map(|t| match t.kind {
                TokenKind::StartTag(tag) => Some(tag.name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_attributes() {
        let html = r#"<body id=main class='a b' data-x hidden = "y">"#;
        let tokens = tokenize(html);
        let TokenKind::StartTag(tag) = &tokens[0].kind else {
            panic!("expected start tag, got {:?}", tokens[0].kind);
        };

        let names: Vec<&str> = tag.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "class", "data-x", "hidden"]);
        assert_eq!(tag.attr_value("id"), Some("main"));
        assert_eq!(tag.attr_value("class"), Some("a b"));
        assert_eq!(tag.attr("data-x").unwrap().value, None);
        assert_eq!(tag.attr_value("hidden"), Some("y"));
        assert_eq!(&html[tag.attr("class").unwrap().span.clone()], " class='a b'");
    }

    #[test]
    fn test_spans_cover_input() {
        let html = "<!DOCTYPE html><html><head><title>a < b</title></head><BODY>x<br/>y</BODY></html>";
        let tokens = tokenize(html);

        let mut pos = 0;
        for token in &tokens {
            assert_eq!(token.span.start, pos);
            pos = token.span.end;
        }
        assert_eq!(pos, html.len());
        assert_eq!(tokens[0].kind, TokenKind::Declaration);
    }

    #[test]
    fn test_quoted_gt_in_attribute() {
        let html = r#"<a title="x > y">z</a>"#;
        let tokens = tokenize(html);
        assert_eq!(tokens[0].span, 0..17);
        assert_eq!(tokens[1].kind, TokenKind::Text);
        assert_eq!(tokens[2].kind, TokenKind::EndTag("a".to_string()));
    }

    #[test]
    fn test_script_content_is_text() {
        let html = "<script>/* a<b isn't */ if (x<y) { s = '<nav id=\"n\">'; }</script><nav id=\"real\"></nav>";
        assert_eq!(start_tag_names(html), vec!["script", "nav"]);

        let tokens = tokenize(html);
        assert_eq!(tokens[1].kind, TokenKind::Text);
        assert_eq!(tokens[2].kind, TokenKind::EndTag("script".to_string()));
    }

    #[test]
    fn test_comments_hide_tags() {
        let html = r#"<!-- layout: <body class="x"> --><body></body><!-- unterminated <head>"#;
        assert_eq!(start_tag_names(html), vec!["body"]);
        assert_eq!(
            kinds(html),
            vec![
                TokenKind::Comment,
                TokenKind::StartTag(StartTag {
                    name: "body".to_string(),
                    attributes: Vec::new(),
                    self_closing: false,
                }),
                TokenKind::EndTag("body".to_string()),
                TokenKind::Comment,
            ]
        );
    }

    #[test]
    fn test_stray_lt_is_text() {
        let html = "<p>1 < 2 and a<b isn't a tag</p>";
        assert_eq!(start_tag_names(html), vec!["p"]);
        assert_eq!(tokenize(html).last().unwrap().kind, TokenKind::EndTag("p".to_string()));
    }

    #[test]
    fn test_void_and_self_closing() {
        let tokens = tokenize(r#"<meta charset="utf-8"><div/>"#);
        let tags: Vec<&StartTag> = tokens
            .iter()
            .filter_map(|t| match &t.kind {
                TokenKind::StartTag(tag) => Some(tag),
                _ => None,
            })
            .collect();
        assert!(tags[0].is_void());
        assert!(tags[1].self_closing);
    }
}
