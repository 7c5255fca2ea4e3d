use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{FeedError, Result};

/// One node of an owned XML element tree.
///
/// Only the pieces the CHART feeds carry information in are kept: the tag
/// name, the trimmed text content, and the child elements in document order.
/// Attributes on the tags themselves are never used by the feeds and are
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    fn new(tag: String) -> Self {
        Self {
            tag,
            text: None,
            children: Vec::new(),
        }
    }
}

/// Parse a full XML document into its root element.
///
/// Whitespace-only text is discarded, so an element like `<a> </a>` has
/// `text == None`, matching how the feeds encode absent values.
pub fn parse_document(bytes: &[u8]) -> Result<Element> {
    let mut reader = Reader::from_reader(bytes);
    reader.trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let tag = tag_name(start.name().as_ref());
                return read_element(&mut reader, tag);
            }
            Event::Empty(start) => return Ok(Element::new(tag_name(start.name().as_ref()))),
            Event::Eof => {
                return Err(FeedError::Parse("document contains no elements".into()))
            }
            // XML declaration, comments and doctype may precede the root.
            _ => {}
        }
        buf.clear();
    }
}

/// Read the content of an already-opened element up to its end tag.
fn read_element(reader: &mut Reader<&[u8]>, tag: String) -> Result<Element> {
    let mut element = Element::new(tag);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let tag = tag_name(start.name().as_ref());
                element.children.push(read_element(reader, tag)?);
            }
            Event::Empty(start) => {
                element
                    .children
                    .push(Element::new(tag_name(start.name().as_ref())));
            }
            Event::Text(text) => {
                let unescaped = text.unescape()?;
                if !unescaped.is_empty() {
                    element
                        .text
                        .get_or_insert_with(String::new)
                        .push_str(&unescaped);
                }
            }
            Event::CData(cdata) => {
                let raw = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                if !raw.is_empty() {
                    element.text.get_or_insert_with(String::new).push_str(&raw);
                }
            }
            Event::End(_) => return Ok(element),
            Event::Eof => {
                return Err(FeedError::Parse(format!(
                    "document ended inside element '{}'",
                    element.tag
                )))
            }
            _ => {}
        }
        buf.clear();
    }
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{parse_document, Element};
    use crate::error::FeedError;

    #[test]
    fn test_parse_nested_document() {
        let root = parse_document(b"<a><b>1</b><c><d>x</d></c></a>").unwrap();
        let expected = Element {
            tag: "a".to_string(),
            text: None,
            children: vec![
                Element {
                    tag: "b".to_string(),
                    text: Some("1".to_string()),
                    children: vec![],
                },
                Element {
                    tag: "c".to_string(),
                    text: None,
                    children: vec![Element {
                        tag: "d".to_string(),
                        text: Some("x".to_string()),
                        children: vec![],
                    }],
                },
            ],
        };
        assert_eq!(expected, root);
    }

    #[test]
    fn test_empty_and_whitespace_elements_have_no_text() {
        let root = parse_document(b"<r><a/><b></b><c>  </c></r>").unwrap();
        assert_eq!(3, root.children.len());
        for child in &root.children {
            assert_eq!(None, child.text);
        }
    }

    #[test]
    fn test_entities_and_cdata_are_decoded() {
        let root = parse_document(b"<r><a>I-95 &amp; MD-32</a><b><![CDATA[<raw>]]></b></r>").unwrap();
        assert_eq!(Some("I-95 & MD-32".to_string()), root.children[0].text);
        assert_eq!(Some("<raw>".to_string()), root.children[1].text);
    }

    #[test]
    fn test_prolog_and_comments_are_skipped() {
        let root =
            parse_document(b"<?xml version=\"1.0\"?><!-- feed --><r><a>1</a></r>").unwrap();
        assert_eq!("r", root.tag);
        assert_eq!(1, root.children.len());
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        assert!(matches!(
            parse_document(b"<a><b></a></b>"),
            Err(FeedError::Parse(_))
        ));
        assert!(matches!(
            parse_document(b"<a><b>"),
            Err(FeedError::Parse(_))
        ));
        assert!(matches!(parse_document(b""), Err(FeedError::Parse(_))));
    }
}
