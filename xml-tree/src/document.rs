use std::fmt::Write;

use crate::Element;

/// Indentation used per nesting level when writing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
    /// Everything on one line
    None,
}

impl Indent {
    fn write_level<W: Write>(self, out: &mut W, level: usize) -> std::fmt::Result {
        match self {
            Self::Tab => {
                for _ in 0..level {
                    out.write_char('\t')?;
                }
            },
            Self::Spaces(width) => {
                for _ in 0..level * width {
                    out.write_char(' ')?;
                }
            },
            Self::None => {},
        }
        Ok(())
    }

    fn write_newline<W: Write>(self, out: &mut W) -> std::fmt::Result {
        match self {
            Self::Tab | Self::Spaces(_) => out.write_char('\n'),
            Self::None => Ok(()),
        }
    }
}

/// The `<?xml ...?>` line at the top of a document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<bool>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: String::from("1.0"),
            encoding: None,
            standalone: Some(true),
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<?xml version=\"{}\"", self.version)?;
        if let Some(encoding) = &self.encoding {
            write!(f, " encoding=\"{}\"", encoding)?;
        }
        if let Some(standalone) = self.standalone {
            write!(
                f,
                " standalone=\"{}\"",
                if standalone { "yes" } else { "no" }
            )?;
        }
        write!(f, "?>")
    }
}

/// A root element together with its declaration.
///
/// ```
/// use xml_tree::{Document, Element, Indent};
/// let doc = Document::new(Element::new("OpenDRIVE").child(Element::new("road")));
/// assert_eq!(
///     doc.to_string_with(Indent::Spaces(2)),
///     "<?xml version=\"1.0\" standalone=\"yes\"?>\n<OpenDRIVE>\n  <road/>\n</OpenDRIVE>\n",
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub declaration: Declaration,
    pub root: Element,
}

impl Document {
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            declaration: Declaration::default(),
            root,
        }
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declaration = declaration;
        self
    }

    /// Write the declaration and the element tree
    ///
    /// # Errors
    ///
    /// Only if the underlying writer fails.
    pub fn write_to<W: Write>(&self, out: &mut W, indent: Indent) -> std::fmt::Result {
        write!(out, "{}", self.declaration)?;
        indent.write_newline(out)?;
        write_element(out, &self.root, indent, 0)
    }

    #[must_use]
    pub fn to_string_with(&self, indent: Indent) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_to(&mut out, indent);
        out
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.write_to(f, Indent::default())
    }
}

fn write_element<W: Write>(
    out: &mut W,
    element: &Element,
    indent: Indent,
    level: usize,
) -> std::fmt::Result {
    indent.write_level(out, level)?;
    write!(out, "<{}", element.name())?;
    for (key, val) in element.attributes() {
        write!(out, " {}=\"", key)?;
        write_escaped(out, val)?;
        out.write_char('"')?;
    }
    if element.is_empty() {
        out.write_str("/>")?;
        return indent.write_newline(out);
    }
    out.write_char('>')?;
    indent.write_newline(out)?;
    for child in element.children() {
        write_element(out, child, indent, level + 1)?;
    }
    indent.write_level(out, level)?;
    write!(out, "</{}>", element.name())?;
    indent.write_newline(out)
}

fn write_escaped<W: Write>(out: &mut W, val: &str) -> std::fmt::Result {
    for ch in val.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            _ => out.write_char(ch)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Declaration, Document, Indent};
    use crate::Element;

    fn sample() -> Document {
        Document::new(
            Element::new("OpenDRIVE").child(
                Element::new("road")
                    .attr("id", "1")
                    .child(Element::new("planView").child(Element::new("line"))),
            ),
        )
    }

    #[test]
    fn test_tab_indent() {
        let expected = "<?xml version=\"1.0\" standalone=\"yes\"?>\n\
                        <OpenDRIVE>\n\
                        \t<road id=\"1\">\n\
                        \t\t<planView>\n\
                        \t\t\t<line/>\n\
                        \t\t</planView>\n\
                        \t</road>\n\
                        </OpenDRIVE>\n";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_no_indent() {
        let doc = sample().with_declaration(Declaration {
            version: String::from("1.0"),
            encoding: Some(String::from("UTF-8")),
            standalone: None,
        });
        assert_eq!(
            doc.to_string_with(Indent::None),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <OpenDRIVE><road id=\"1\"><planView><line/></planView></road></OpenDRIVE>"
        );
    }

    #[test]
    fn test_escaping_reparses() {
        let doc = Document::new(Element::new("roadMark").attr("type", "a<b & \"c\" 'd'"));
        let text = doc.to_string_with(Indent::Spaces(2));
        let parsed = roxmltree::Document::parse(&text).unwrap();
        assert_eq!(
            parsed.root_element().attribute("type"),
            Some("a<b & \"c\" 'd'")
        );
    }
}
