//! Rendering of expression trees.
//!
//! The variable renders as `x` and constants through their [`Display`] implementation. Sums,
//! differences, products, and quotients render as infix `+`, `-`, `*`, and `/`, and compositions
//! as `outer << inner`, mirroring [`SmoothFn`](crate::SmoothFn)'s operators. Parentheses are only
//! inserted where precedence requires them.
//!
//! Rendering can also report the span of any node in the output, which is how errors point at the
//! subexpression they came from. Spans are measured in characters, as [`ariadne`] expects.

use std::{fmt::{self, Display, Formatter}, ops::Range};
use super::{Branch, Node};

/// The binding strength of a combinator when rendered. Leaves have none; they never need
/// parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Compose,
    Term,
    Factor,
}

impl<T> Node<T> {
    /// Returns the precedence of the node, or [`None`] for a leaf.
    fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Constant(_) | Self::Identity => None,
            Self::Composition(..) => Some(Precedence::Compose),
            Self::Sum(..) | Self::Difference(..) => Some(Precedence::Term),
            Self::Product(..) | Self::Quotient(..) => Some(Precedence::Factor),
        }
    }

    /// Returns the infix operator of a combinator.
    fn operator(&self) -> &'static str {
        match self {
            Self::Constant(_) | Self::Identity => "",
            Self::Sum(..) => "+",
            Self::Difference(..) => "-",
            Self::Product(..) => "*",
            Self::Quotient(..) => "/",
            Self::Composition(..) => "<<",
        }
    }

    /// Returns true if `f op (g op h)` means the same as `(f op g) op h`, so that a child on the
    /// right with the same precedence can be printed without parentheses.
    fn is_associative(&self) -> bool {
        matches!(self, Self::Sum(..) | Self::Product(..))
    }

    /// Returns true if `child`, found on the given side of this node, must be parenthesized.
    fn needs_parens(&self, child: &Self, side: Branch) -> bool {
        let (Some(parent), Some(child)) = (self.precedence(), child.precedence()) else {
            return false;
        };
        match side {
            Branch::Left => child < parent,
            Branch::Right => child < parent || (child == parent && !self.is_associative()),
        }
    }
}

impl<T: Display> Node<T> {
    /// Renders the tree, and returns the span of every node addressed by `paths` in the rendered
    /// string, in the same order. A path that leads through a leaf has no span.
    ///
    /// The span of a parenthesized node excludes the parentheses.
    pub fn render_spans(&self, paths: &[&[Branch]]) -> (String, Vec<Option<Range<usize>>>) {
        let mut renderer = Renderer {
            out: String::new(),
            chars: 0,
            current: Vec::new(),
            targets: paths,
            spans: vec![None; paths.len()],
        };
        renderer.render(self);
        (renderer.out, renderer.spans)
    }
}

/// A pending step of a [`Renderer`].
enum Step<'a, T> {
    /// Render the node.
    Node(&'a Node<T>),

    /// Write the text.
    Text(&'static str),

    /// Record the span of the node being rendered, which started at the given character.
    End(usize),

    /// Step into a child.
    Enter(Branch),

    /// Step back out of a child.
    Leave,
}

/// Writes a tree into a string while tracking where each node lands.
struct Renderer<'p> {
    /// The rendered output.
    out: String,

    /// The length of `out`, in characters.
    chars: usize,

    /// The path from the root to the node being rendered.
    current: Vec<Branch>,

    /// The paths of the nodes whose spans are wanted.
    targets: &'p [&'p [Branch]],

    /// The spans found so far, one slot per target.
    spans: Vec<Option<Range<usize>>>,
}

impl Renderer<'_> {
    fn push(&mut self, s: &str) {
        self.out.push_str(s);
        self.chars += s.chars().count();
    }

    /// Renders the tree with an explicit stack of steps, in the order they are written out.
    fn render<T: Display>(&mut self, root: &Node<T>) {
        let mut steps = vec![Step::Node(root)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Node(node) => {
                    let start = self.chars;
                    match node {
                        Node::Constant(value) => self.push(&value.to_string()),
                        Node::Identity => self.push("x"),
                        _ => (),
                    }

                    steps.push(Step::End(start));
                    if let Some((lhs, rhs)) = node.children() {
                        schedule_child(&mut steps, node, rhs, Branch::Right);
                        steps.extend([Step::Text(" "), Step::Text(node.operator()), Step::Text(" ")]);
                        schedule_child(&mut steps, node, lhs, Branch::Left);
                    }
                },
                Step::Text(text) => self.push(text),
                Step::End(start) => self.record(start),
                Step::Enter(branch) => self.current.push(branch),
                Step::Leave => {
                    self.current.pop();
                },
            }
        }
    }

    /// Records the span of the node at the current path, if it is a target.
    fn record(&mut self, start: usize) {
        let end = self.chars;
        for (target, span) in self.targets.iter().zip(self.spans.iter_mut()) {
            if *target == self.current.as_slice() {
                *span = Some(start..end);
            }
        }
    }
}

/// Pushes the steps rendering `child`, found on the given side of `parent`. Steps are popped in
/// reverse, so they are pushed last to first.
fn schedule_child<'a, T>(steps: &mut Vec<Step<'a, T>>, parent: &Node<T>, child: &'a Node<T>, side: Branch) {
    let parens = parent.needs_parens(child, side);
    steps.push(Step::Leave);
    if parens {
        steps.push(Step::Text(")"));
    }
    steps.push(Step::Node(child));
    if parens {
        steps.push(Step::Text("("));
    }
    steps.push(Step::Enter(side));
}

impl<T: Display> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (rendered, _) = self.render_spans(&[]);
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Node<f64> {
        Node::Identity
    }

    fn c(value: f64) -> Node<f64> {
        Node::Constant(value)
    }

    #[test]
    fn leaves() {
        assert_eq!(x().to_string(), "x");
        assert_eq!(c(2.5).to_string(), "2.5");
        assert_eq!(c(-1.0).to_string(), "-1");
    }

    #[test]
    fn precedence() {
        let cube = Node::product(Node::product(x(), x()), x());
        assert_eq!(cube.to_string(), "x * x * x");

        let f = Node::product(Node::sum(x(), c(1.0)), x());
        assert_eq!(f.to_string(), "(x + 1) * x");

        let g = Node::sum(Node::product(x(), c(2.0)), Node::product(c(3.0), x()));
        assert_eq!(g.to_string(), "x * 2 + 3 * x");
    }

    #[test]
    fn non_associative_right_operand() {
        let f = Node::difference(x(), Node::difference(x(), c(1.0)));
        assert_eq!(f.to_string(), "x - (x - 1)");

        let g = Node::difference(Node::difference(x(), c(1.0)), x());
        assert_eq!(g.to_string(), "x - 1 - x");

        let h = Node::quotient(x(), Node::product(x(), x()));
        assert_eq!(h.to_string(), "x / (x * x)");
    }

    #[test]
    fn composition() {
        let f = Node::composition(Node::product(x(), x()), Node::sum(x(), c(1.0)));
        assert_eq!(f.to_string(), "x * x << x + 1");

        let g = Node::product(f, x());
        assert_eq!(g.to_string(), "(x * x << x + 1) * x");
    }

    #[test]
    fn spans() {
        // x / (x - 1)
        let f = Node::quotient(x(), Node::difference(x(), c(1.0)));
        let (rendered, spans) = f.render_spans(&[&[], &[Branch::Right], &[Branch::Right, Branch::Right]]);
        assert_eq!(rendered, "x / (x - 1)");
        assert_eq!(spans, [Some(0..11), Some(5..10), Some(9..10)]);
    }

    #[test]
    fn deep_tree() {
        let n = 200_000;
        let f = (0..n).fold(x(), |f, _| Node::sum(f, c(1.0)));
        let (rendered, spans) = f.render_spans(&[&[], &[Branch::Right]]);
        assert_eq!(rendered.len(), 1 + 4 * n);
        assert!(rendered.starts_with("x + 1 + 1"));
        assert_eq!(spans, [Some(0..1 + 4 * n), Some(4 * n..1 + 4 * n)]);
    }

    #[test]
    fn span_of_missing_node() {
        let (rendered, spans) = x().render_spans(&[&[Branch::Left]]);
        assert_eq!(rendered, "x");
        assert_eq!(spans, [None]);
    }
}
