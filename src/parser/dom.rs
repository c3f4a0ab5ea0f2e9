use scraper::ElementRef;

/// What the extractors need from an HTML element.
pub trait Node: Clone {
    /// Descendants (not self) whose `itemprop` equals `marker`, in document order.
    fn find_all_marker(&self, marker: &str) -> Vec<Self>;

    /// Descendants (not self) carrying `class`.
    fn find_all_class(&self, class: &str) -> Vec<Self>;

    /// Descendants (not self) with tag name `tag`.
    fn find_all_tag(&self, tag: &str) -> Vec<Self>;

    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;

    /// Serialized children, tags included.
    fn inner_markup(&self) -> String;

    /// `other` is this node or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    fn find_marker(&self, marker: &str) -> Option<Self> {
        self.find_all_marker(marker).into_iter().next()
    }

    fn find_class(&self, class: &str) -> Option<Self> {
        self.find_all_class(class).into_iter().next()
    }

    fn find_tag(&self, tag: &str) -> Option<Self> {
        self.find_all_tag(tag).into_iter().next()
    }
}

/// Table cells of a record in document order.
///
/// Rewards, phone and email have no marker of their own; they live in the
/// cells right after a marked one, so they are addressed by index here.
#[derive(Debug, Clone)]
pub struct Cells<N> {
    cells: Vec<N>,
}

impl<N: Node> Cells<N> {
    pub fn of(record: &N) -> Self {
        Self {
            cells: record.find_all_tag("td"),
        }
    }

    /// Index of the first cell that is, or contains, `node`.
    pub fn position_of(&self, node: &N) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(node))
    }

    /// The cell right after `index`, with its own index.
    pub fn after(&self, index: usize) -> Option<(usize, &N)> {
        let next = index + 1;
        self.cells.get(next).map(|cell| (next, cell))
    }
}

fn descendant_elements<'a>(el: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

impl<'a> Node for ElementRef<'a> {
    fn find_all_marker(&self, marker: &str) -> Vec<Self> {
        descendant_elements(self)
            .filter(|e| e.value().attr("itemprop") == Some(marker))
            .collect()
    }

    fn find_all_class(&self, class: &str) -> Vec<Self> {
        descendant_elements(self)
            .filter(|e| e.value().classes().any(|c| c == class))
            .collect()
    }

    fn find_all_tag(&self, tag: &str) -> Vec<Self> {
        descendant_elements(self)
            .filter(|e| e.value().name() == tag)
            .collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text_content(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn inner_markup(&self) -> String {
        self.inner_html()
    }

    fn contains(&self, other: &Self) -> bool {
        other.id() == self.id() || other.ancestors().any(|a| a.id() == self.id())
    }
}

#[cfg(test)]
pub mod testing {
    //! Hand-built element trees for exercising extractors without an HTML engine.

    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::Node;

    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone)]
    enum Child {
        Text(String),
        Element(FakeNode),
    }

    #[derive(Debug, Clone)]
    pub struct FakeNode {
        id: usize,
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Child>,
    }

    pub fn el(tag: &str) -> FakeNode {
        FakeNode {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `<td itemprop="marker">text</td>`
    pub fn cell(marker: &str, text: &str) -> FakeNode {
        el("td").prop(marker).text(text)
    }

    impl FakeNode {
        pub fn with_attr(mut self, name: &str, value: &str) -> Self {
            self.attrs.push((name.to_string(), value.to_string()));
            self
        }

        pub fn prop(self, marker: &str) -> Self {
            self.with_attr("itemprop", marker)
        }

        pub fn class(self, class: &str) -> Self {
            self.with_attr("class", class)
        }

        pub fn text(mut self, text: &str) -> Self {
            self.children.push(Child::Text(text.to_string()));
            self
        }

        pub fn child(mut self, node: FakeNode) -> Self {
            self.children.push(Child::Element(node));
            self
        }

        pub fn br(self) -> Self {
            self.child(el("br"))
        }

        fn elements(&self) -> Vec<&FakeNode> {
            let mut out = Vec::new();
            for child in &self.children {
                if let Child::Element(node) = child {
                    out.push(node);
                    out.extend(node.elements());
                }
            }
            out
        }

        fn find_all(&self, pred: impl Fn(&FakeNode) -> bool) -> Vec<FakeNode> {
            self.elements().into_iter().filter(|e| pred(e)).cloned().collect()
        }

        fn outer_markup(&self) -> String {
            let attrs: String = self
                .attrs
                .iter()
                .map(|(k, v)| format!(" {k}=\"{v}\""))
                .collect();
            if self.tag == "br" {
                return format!("<br{attrs}>");
            }
            format!("<{0}{attrs}>{1}</{0}>", self.tag, self.inner_markup())
        }
    }

    impl Node for FakeNode {
        fn find_all_marker(&self, marker: &str) -> Vec<Self> {
            self.find_all(|e| e.attr("itemprop").as_deref() == Some(marker))
        }

        fn find_all_class(&self, class: &str) -> Vec<Self> {
            self.find_all(|e| {
                e.attr("class")
                    .is_some_and(|c| c.split_whitespace().any(|c| c == class))
            })
        }

        fn find_all_tag(&self, tag: &str) -> Vec<Self> {
            self.find_all(|e| e.tag == tag)
        }

        fn attr(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }

        fn text_content(&self) -> String {
            self.children
                .iter()
                .map(|child| match child {
                    Child::Text(t) => t.clone(),
                    Child::Element(node) => node.text_content(),
                })
                .collect()
        }

        fn inner_markup(&self) -> String {
            self.children
                .iter()
                .map(|child| match child {
                    Child::Text(t) => t.clone(),
                    Child::Element(node) => node.outer_markup(),
                })
                .collect()
        }

        fn contains(&self, other: &Self) -> bool {
            self.id == other.id || self.elements().iter().any(|e| e.id == other.id)
        }
    }
}
