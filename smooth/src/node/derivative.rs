use crate::scalar::Scalar;
use super::Node;

/// `(f * g)' = f' * g + f * g'`
fn product_rule<T: Scalar>(f: &Node<T>, g: &Node<T>) -> Node<T> {
    Node::sum(
        Node::product(f.differentiate(), g.duplicate()),
        Node::product(f.duplicate(), g.differentiate()),
    )
}

/// `(f / g)' = (f' * g - f * g') / (g * g)`
fn quotient_rule<T: Scalar>(f: &Node<T>, g: &Node<T>) -> Node<T> {
    Node::quotient(
        Node::difference(
            Node::product(f.differentiate(), g.duplicate()),
            Node::product(f.duplicate(), g.differentiate()),
        ),
        Node::product(g.duplicate(), g.duplicate()),
    )
}

/// `(f ∘ g)' = (f' ∘ g) * g'`
fn chain_rule<T: Scalar>(outer: &Node<T>, inner: &Node<T>) -> Node<T> {
    Node::product(
        Node::composition(outer.differentiate(), inner.duplicate()),
        inner.differentiate(),
    )
}

impl<T: Scalar> Node<T> {
    /// Returns a new tree representing the exact derivative of this function.
    ///
    /// The tree is built by structural rewriting and is **not** simplified; for example, the
    /// derivative of `x * x` is `1 * x + x * 1`. Wherever a rule needs an operand in its original,
    /// undifferentiated form, an independent duplicate of it is used.
    pub fn differentiate(&self) -> Self {
        match self {
            Self::Constant(_) => Self::Constant(T::zero()),
            Self::Identity => Self::Constant(T::one()),
            // (f + g)' = f' + g'
            Self::Sum(f, g) => Self::sum(f.differentiate(), g.differentiate()),
            // (f - g)' = f' - g'
            Self::Difference(f, g) => Self::difference(f.differentiate(), g.differentiate()),
            Self::Product(f, g) => product_rule(f, g),
            Self::Quotient(f, g) => quotient_rule(f, g),
            Self::Composition(outer, inner) => chain_rule(outer, inner),
        }
    }
}
