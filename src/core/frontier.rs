use crate::urls::NormalizedUrl;

#[derive(Debug, Clone)]
pub struct FrontierNode {
    pub url: NormalizedUrl,
    // Remaining hop budget; children are only pushed while depth > 0.
    pub depth: usize,
}

/// LIFO frontier; popping the most recent push keeps the traversal depth-first.
#[derive(Debug, Default)]
pub struct Frontier {
    nodes: Vec<FrontierNode>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: NormalizedUrl, depth: usize) {
        self.nodes.push(FrontierNode { url, depth });
    }

    /// Pushes a page's children in reverse so they pop in page order.
    pub fn push_children<I>(&mut self, children: I, depth: usize)
    where
        I: IntoIterator<Item = NormalizedUrl>,
        I::IntoIter: DoubleEndedIterator,
    {
        for url in children.into_iter().rev() {
            self.push(url, depth);
        }
    }

    pub fn pop(&mut self) -> Option<FrontierNode> {
        self.nodes.pop()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
