use super::Node;

/// An iterator that iteratively traverses the tree of nodes in left-to-right post-order (i.e.
/// depth-first).
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct PostOrderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    last_visited: Option<&'a Node<T>>,
}

impl<'a, T> PostOrderIter<'a, T> {
    /// Creates a new iterator that traverses the tree of nodes in left-to-right post-order (i.e.
    /// depth-first).
    pub fn new(node: &'a Node<T>) -> Self {
        Self {
            stack: vec![node],
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Node<T>> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node matches the last visited node.
    fn is_last_visited(&self, node: &'a Node<T>) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, node),
            None => false,
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = *self.stack.last()?;
            match node.children() {
                None => return self.visit(),
                Some((lhs, rhs)) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        // (x + 2) * (x / 3)
        let f: Node<f64> = Node::product(
            Node::sum(Node::Identity, Node::Constant(2.0)),
            Node::quotient(Node::Identity, Node::Constant(3.0)),
        );

        let rendered = f.post_order_iter()
            .map(|node| match node {
                Node::Constant(value) => value.to_string(),
                Node::Identity => "x".to_string(),
                Node::Sum(..) => "+".to_string(),
                Node::Difference(..) => "-".to_string(),
                Node::Product(..) => "*".to_string(),
                Node::Quotient(..) => "/".to_string(),
                Node::Composition(..) => "<<".to_string(),
            })
            .collect::<Vec<_>>();
        assert_eq!(rendered, ["x", "2", "+", "x", "3", "/", "*"]);
    }

    #[test]
    fn single_leaf() {
        let f: Node<f64> = Node::Identity;
        assert_eq!(f.post_order_iter().count(), 1);
    }
}
