//! Data models for articles and the HTML document they are assembled into.
//!
//! - [`Article`]: one input file parsed into a header and a body
//! - [`Element`]: a node of the HTML tree (name, attributes, text, children)
//! - [`Document`]: the page being built, an `html` root with exactly one
//!   `head` and one `body`
//!
//! Articles are short-lived: each one is projected into a `section` element
//! by [`Document::push_article`] and then dropped.

/// Class attribute applied to every article headline.
pub const SHADED_CLASS: &str = "shaded";

/// A plain-text news article.
///
/// # Fields
///
/// * `header` - The first line of the file, whitespace-trimmed
/// * `body` - Every remaining line joined together, trimmed as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The headline.
    pub header: String,
    /// The paragraph text. May be empty.
    pub body: String,
}

/// A single HTML element.
///
/// Text is stored before any children, which is all the page layout needs:
/// leaf elements carry text, container elements carry children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder-style: set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style: add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder-style: append a child.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text content, or `""` when none was set.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// The HTML page under construction.
///
/// The root always has exactly two children, `head` then `body`; both
/// constructors and every mutator preserve that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Build the page skeleton: `head/title`, `head/style`, and `body/h1`.
    pub fn new(title: &str, stylesheet: &str) -> Self {
        let head = Element::new("head")
            .with_child(Element::new("title").with_text(title))
            .with_child(Element::new("style").with_text(stylesheet));
        let body = Element::new("body").with_child(Element::new("h1").with_text(title));

        Self {
            root: Element::new("html").with_child(head).with_child(body),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn head(&self) -> &Element {
        &self.root.children[0]
    }

    pub fn body(&self) -> &Element {
        &self.root.children[1]
    }

    /// The page title as written into `head/title`.
    pub fn title(&self) -> &str {
        self.head().child("title").map(Element::text).unwrap_or_default()
    }

    /// Article sections in the order they were appended.
    pub fn sections(&self) -> impl Iterator<Item = &Element> {
        self.body().children_named("section")
    }

    /// Append an article to the body as
    /// `<section><h2 class="shaded">header</h2><p>body</p></section>`.
    ///
    /// Returns `self` so calls can be chained across several articles.
    pub fn push_article(&mut self, article: Article) -> &mut Self {
        let section = Element::new("section")
            .with_child(
                Element::new("h2")
                    .with_text(article.header)
                    .with_attribute("class", SHADED_CLASS),
            )
            .with_child(Element::new("p").with_text(article.body));

        self.root.children[1].children.push(section);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(header: &str, body: &str) -> Article {
        Article {
            header: header.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_document_skeleton() {
        let doc = Document::new("The Onion Summary", "body {}");

        assert_eq!(doc.root().name, "html");
        assert_eq!(doc.root().children.len(), 2);
        assert_eq!(doc.head().name, "head");
        assert_eq!(doc.body().name, "body");
        assert_eq!(doc.title(), "The Onion Summary");
        assert_eq!(doc.head().child("style").unwrap().text(), "body {}");
        assert_eq!(doc.body().child("h1").unwrap().text(), "The Onion Summary");
        assert_eq!(doc.sections().count(), 0);
    }

    #[test]
    fn test_push_article_builds_section() {
        let mut doc = Document::new("t", "");
        doc.push_article(article("Breaking News", "Line one.\nLine two."));

        let sections: Vec<_> = doc.sections().collect();
        assert_eq!(sections.len(), 1);

        let h2 = sections[0].child("h2").unwrap();
        assert_eq!(h2.text(), "Breaking News");
        assert_eq!(
            h2.attributes,
            vec![("class".to_string(), SHADED_CLASS.to_string())]
        );
        assert_eq!(sections[0].child("p").unwrap().text(), "Line one.\nLine two.");
    }

    #[test]
    fn test_push_article_preserves_order() {
        let mut doc = Document::new("t", "");
        doc.push_article(article("first", "a"))
            .push_article(article("second", "b"))
            .push_article(article("third", "c"));

        let headers: Vec<_> = doc
            .sections()
            .map(|s| s.child("h2").unwrap().text().to_string())
            .collect();
        assert_eq!(headers, vec!["first", "second", "third"]);
        // h1 stays first in the body
        assert_eq!(doc.body().children[0].name, "h1");
    }

    #[test]
    fn test_empty_body_gives_empty_paragraph() {
        let mut doc = Document::new("t", "");
        doc.push_article(article("Header only", ""));
        let p = doc.sections().next().unwrap().child("p").unwrap();
        assert_eq!(p.text(), "");
        assert!(p.children.is_empty());
    }
}
