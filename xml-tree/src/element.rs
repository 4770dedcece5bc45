use kstring::KString;

/// A single XML element with ordered attributes and child elements.
///
/// ```
/// use xml_tree::Element;
/// let arc = Element::new("arc").attr("curvature", "1e-2");
/// let geometry = Element::new("geometry").attr("s", "0").child(arc);
/// assert_eq!(geometry.name(), "geometry");
/// assert_eq!(geometry.children()[0].attribute("curvature"), Some("1e-2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: KString,
    attributes: Vec<(KString, String)>,
    children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name: KString::from_static(name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    #[must_use]
    pub fn attr<V: Into<String>>(mut self, key: &'static str, val: V) -> Self {
        self.attributes.push((KString::from_static(key), val.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children<I: IntoIterator<Item = Element>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// First value of the attribute `key`
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn children(&self) -> &[Element] {
        self.children.as_slice()
    }

    /// First child with the given name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name() == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
