use std::ops::Deref;

/// Node corresponds to a single item in [`Llrb`](crate::Llrb) tree.
///
/// The color bit describes the link arriving from the parent. Missing
/// children are implicit black links. Nodes are exposed so that an
/// external serializer can walk the tree via [`Llrb::root`] and rebuild
/// it via [`Llrb::set_root`].
///
/// [`Llrb::root`]: crate::Llrb::root
/// [`Llrb::set_root`]: crate::Llrb::set_root
#[derive(Clone)]
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) black: bool,                  // store: black or red
    pub(crate) left: Option<Box<Node<T>>>,  // store: left child
    pub(crate) right: Option<Box<Node<T>>>, // store: right child
}

impl<T> Node<T> {
    /// Create a detached node. Mutations always create red nodes,
    /// deserializers should pass the persisted color.
    pub fn new(item: T, black: bool) -> Box<Node<T>> {
        Box::new(Node {
            item,
            black,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_ref().map(Deref::deref)
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    /// Attach `left` as left child, return the previous child.
    pub fn set_left(&mut self, left: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        std::mem::replace(&mut self.left, left)
    }

    /// Attach `right` as right child, return the previous child.
    pub fn set_right(&mut self, right: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        std::mem::replace(&mut self.right, right)
    }

    /// Consume this node, dropping its subtrees.
    pub fn into_item(self: Box<Self>) -> T {
        let node = *self;
        node.item
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    pub(crate) fn toggle_link(&mut self) {
        self.black = !self.black
    }

    // shape of this node and its children, used in fault diagnostics.
    pub(crate) fn shape(&self) -> String {
        let color = |node: Option<&Node<T>>| match node {
            None => "nil",
            Some(node) if node.black => "black",
            Some(_) => "red",
        };
        format!(
            "{{node:{} left:{} right:{} left.left:{} right.left:{}}}",
            color(Some(self)),
            color(self.left()),
            color(self.right()),
            color(self.left().and_then(|n| n.left())),
            color(self.right().and_then(|n| n.left())),
        )
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
