//! Retained element-tree model the widgets build into.
//!
//! Running outside a browser, the crate supplies its own structured-document
//! model: element nodes with a tag, an optional id, a class list, attributes,
//! and ordered children (elements or text). `ElementRef` is a cheap cloneable
//! handle; containers keep handles to the regions they mutate later (a chat
//! box body, a group's message list) while the same nodes sit in the page
//! tree. Everything is single-threaded and synchronous, so `Rc<RefCell<..>>`
//! is the right sharing primitive here rather than `Arc`.
//!
//! Append is the only structural mutation. There is no node removal.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use tracing::debug;

/// A child slot inside an element.
#[derive(Debug, Clone)]
enum Node {
    Element(ElementRef),
    Text(String),
}

#[derive(Debug)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Shared handle to one element node.
///
/// Cloning the handle clones the reference, not the node; all clones observe
/// the same mutations. Use [`ElementRef::same_node`] for identity checks.
#[derive(Debug, Clone)]
pub struct ElementRef(Rc<RefCell<ElementData>>);

impl ElementRef {
    /// Create a detached element with the given tag name.
    pub fn new(tag: &str) -> Self {
        debug!(tag, "creating element");
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        })))
    }

    /// Whether two handles refer to the very same node.
    pub fn same_node(a: &ElementRef, b: &ElementRef) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn set_id(&self, id: &str) {
        self.0.borrow_mut().id = Some(id.to_string());
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    /// Add a class if not already present.
    pub fn add_class(&self, class: &str) {
        let mut data = self.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// Space-joined class list, as a browser would report `className`.
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        if let Some(entry) = data.attributes.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            data.attributes.push((name.to_string(), value.to_string()));
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Append a child element. The child keeps its own handle; the parent
    /// holds a clone of it.
    ///
    /// A node already among this element's children is moved to the end
    /// rather than duplicated, as a browser's `appendChild` would. Nodes
    /// are not detached from *other* parents; the widgets never reattach
    /// across parents.
    pub fn append_child(&self, child: &ElementRef) {
        debug!(parent = %self.0.borrow().tag, child = %child.0.borrow().tag, "appending child");
        let mut data = self.0.borrow_mut();
        data.children.retain(|node| match node {
            Node::Element(el) => !Rc::ptr_eq(&el.0, &child.0),
            Node::Text(_) => true,
        });
        data.children.push(Node::Element(child.clone()));
    }

    /// Append a text node.
    pub fn append_text(&self, text: &str) {
        self.0.borrow_mut().children.push(Node::Text(text.to_string()));
    }

    /// Element children, in document order (text nodes skipped).
    pub fn child_elements(&self) -> Vec<ElementRef> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|node| match node {
                Node::Element(el) => Some(el.clone()),
                Node::Text(_) => None,
            })
            .collect()
    }

    /// Number of element children.
    pub fn child_count(&self) -> usize {
        self.child_elements().len()
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.0.borrow().children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    /// Depth-first lookup by element id, including this node itself.
    pub fn find_by_id(&self, id: &str) -> Option<ElementRef> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        for child in self.child_elements() {
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    /// Serialize the subtree to HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let data = self.0.borrow();
        out.push('<');
        out.push_str(&data.tag);
        if let Some(id) = &data.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if !data.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&data.classes.join(" ")));
        }
        for (name, value) in &data.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        for node in &data.children {
            match node {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(el) => el.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", data.tag);
    }
}

/// Escape markup-significant characters for text and attribute positions.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order_preserved() {
        let parent = ElementRef::new("div");
        let a = ElementRef::new("span");
        let b = ElementRef::new("i");
        parent.append_child(&a);
        parent.append_child(&b);

        let children = parent.child_elements();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), "span");
        assert_eq!(children[1].tag(), "i");
    }

    #[test]
    fn test_reappend_moves_to_end() {
        let parent = ElementRef::new("div");
        let a = ElementRef::new("span");
        let b = ElementRef::new("i");
        parent.append_child(&a);
        parent.append_child(&b);
        parent.append_child(&a);

        let children = parent.child_elements();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), "i");
        assert!(ElementRef::same_node(&children[1], &a));
    }

    #[test]
    fn test_shared_handle_sees_mutations() {
        let el = ElementRef::new("div");
        let alias = el.clone();
        el.add_class("chat-box");
        assert!(alias.has_class("chat-box"));
        assert!(ElementRef::same_node(&el, &alias));
    }

    #[test]
    fn test_add_class_deduplicates() {
        let el = ElementRef::new("div");
        el.add_class("meta");
        el.add_class("meta");
        assert_eq!(el.class_name(), "meta");
    }

    #[test]
    fn test_set_attribute_replaces() {
        let el = ElementRef::new("div");
        el.set_attribute("placeholder", "one");
        el.set_attribute("placeholder", "two");
        assert_eq!(el.attribute("placeholder").as_deref(), Some("two"));
    }

    #[test]
    fn test_find_by_id_depth_first() {
        let root = ElementRef::new("body");
        let inner = ElementRef::new("div");
        inner.set_id("target");
        let mid = ElementRef::new("div");
        mid.append_child(&inner);
        root.append_child(&mid);

        let found = root.find_by_id("target").unwrap();
        assert!(ElementRef::same_node(&found, &inner));
        assert!(root.find_by_id("missing").is_none());
    }

    #[test]
    fn test_to_html_structure_and_escaping() {
        let el = ElementRef::new("div");
        el.set_id("c1");
        el.add_class("message");
        el.append_text("a < b & c");
        assert_eq!(
            el.to_html(),
            "<div id=\"c1\" class=\"message\">a &lt; b &amp; c</div>"
        );
    }

    #[test]
    fn test_text_content_recurses() {
        let outer = ElementRef::new("div");
        let inner = ElementRef::new("span");
        inner.append_text("12:00 PM");
        outer.append_child(&inner);
        outer.append_text("!");
        assert_eq!(outer.text_content(), "12:00 PM!");
    }
}
