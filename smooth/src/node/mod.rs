//! The expression tree behind every smooth function.
//!
//! A [`Node`] is either a leaf ([`Node::Constant`] or [`Node::Identity`]) or a combinator over
//! exactly two child nodes. Every node can be evaluated at a point, differentiated into a new
//! tree, and duplicated.
//!
//! # Ownership
//!
//! Children are **exclusively owned** through [`Box`]es. No subtree is ever shared between two
//! parents: whenever a tree is needed in two places (the product rule needs each operand twice,
//! the quotient rule needs the denominator three times), it is [duplicated](Node::duplicate)
//! into a deep, independent copy. Combined with the fact that no node is mutated after it is
//! built, a tree is `Send` / `Sync` exactly when its scalar type is.
//!
//! # Paths
//!
//! A node inside a tree is addressed by the sequence of [`Branch`]es taken from the root to reach
//! it. The left child of a combinator is its first operand (the outer function, for a
//! composition), the right child its second operand.

mod derivative;
mod fmt;
mod iter;

use std::mem;
use crate::{error::EvalFault, scalar::Scalar};
use iter::PostOrderIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step from a combinator into one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The first operand.
    Left,

    /// The second operand.
    Right,
}

/// A node of the expression tree of a smooth function of one variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node<T> {
    /// A constant function.
    Constant(T),

    /// The identity function, i.e. the variable itself.
    Identity,

    /// `f + g`.
    Sum(Box<Node<T>>, Box<Node<T>>),

    /// `f - g`.
    Difference(Box<Node<T>>, Box<Node<T>>),

    /// `f * g`.
    Product(Box<Node<T>>, Box<Node<T>>),

    /// `f / g`.
    Quotient(Box<Node<T>>, Box<Node<T>>),

    /// `f ∘ g`, the outer function `f` applied to the result of the inner function `g`.
    Composition(Box<Node<T>>, Box<Node<T>>),
}

impl<T> Node<T> {
    /// Creates a [`Node::Sum`].
    pub fn sum(lhs: Self, rhs: Self) -> Self {
        Self::Sum(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Node::Difference`].
    pub fn difference(lhs: Self, rhs: Self) -> Self {
        Self::Difference(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Node::Product`].
    pub fn product(lhs: Self, rhs: Self) -> Self {
        Self::Product(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Node::Quotient`].
    pub fn quotient(lhs: Self, rhs: Self) -> Self {
        Self::Quotient(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Node::Composition`] of `outer` after `inner`.
    pub fn composition(outer: Self, inner: Self) -> Self {
        Self::Composition(Box::new(outer), Box::new(inner))
    }

    /// Returns the two children of a combinator, or [`None`] for a leaf.
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Constant(_) | Self::Identity => None,
            Self::Sum(lhs, rhs)
                | Self::Difference(lhs, rhs)
                | Self::Product(lhs, rhs)
                | Self::Quotient(lhs, rhs)
                | Self::Composition(lhs, rhs) => Some((&**lhs, &**rhs)),
        }
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children().is_none()
    }

    /// Returns the node found by following `path` from this node, or [`None`] if the path leads
    /// through a leaf.
    pub fn get(&self, path: &[Branch]) -> Option<&Self> {
        path.iter().try_fold(self, |node, branch| {
            let (lhs, rhs) = node.children()?;
            Some(match branch {
                Branch::Left => lhs,
                Branch::Right => rhs,
            })
        })
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first), yielding every node including this one.
    pub fn post_order_iter(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the height of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut stack = vec![(self, 1)];
        let mut depth = 0;
        while let Some((node, level)) = stack.pop() {
            depth = depth.max(level);
            if let Some((lhs, rhs)) = node.children() {
                stack.push((rhs, level + 1));
                stack.push((lhs, level + 1));
            }
        }
        depth
    }

    /// Moves the children of a combinator onto `stack`, leaving leaves in their place.
    fn take_children(&mut self, stack: &mut Vec<Box<Self>>) {
        match self {
            Self::Constant(_) | Self::Identity => (),
            Self::Sum(lhs, rhs)
                | Self::Difference(lhs, rhs)
                | Self::Product(lhs, rhs)
                | Self::Quotient(lhs, rhs)
                | Self::Composition(lhs, rhs) => {
                    stack.push(mem::replace(lhs, Box::new(Self::Identity)));
                    stack.push(mem::replace(rhs, Box::new(Self::Identity)));
                },
        }
    }
}

/// Trees are dropped iteratively, so that dropping a very deep tree cannot overflow the stack.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.take_children(&mut stack);
        }
    }
}

impl<T: Scalar> Node<T> {
    /// Returns an independent deep copy of the tree rooted at this node.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Evaluates the function at `x`.
    ///
    /// Returns [`Err`] if a [`Node::Quotient`] is reached whose denominator evaluates to zero.
    /// Nothing is divided in that case; the fault records the path to the offending quotient.
    ///
    /// The tree is walked with an explicit stack, so the depth of the tree is not limited by the
    /// call stack.
    pub fn eval(&self, x: &T) -> Result<T, EvalFault> {
        let mut steps = vec![Step::Eval(self, x.clone())];
        let mut values = Vec::new();
        let mut path = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Eval(node, x) => match node {
                    Self::Constant(value) => values.push(value.clone()),
                    Self::Identity => values.push(x),
                    Self::Composition(outer, inner) => steps.extend([
                        Step::Outer(&**outer),
                        Step::Leave,
                        Step::Eval(&**inner, x),
                        Step::Enter(Branch::Right),
                    ]),
                    Self::Sum(lhs, rhs)
                        | Self::Difference(lhs, rhs)
                        | Self::Product(lhs, rhs)
                        | Self::Quotient(lhs, rhs) => steps.extend([
                            Step::Apply(node),
                            Step::Leave,
                            Step::Eval(&**rhs, x.clone()),
                            Step::Enter(Branch::Right),
                            Step::Leave,
                            Step::Eval(&**lhs, x),
                            Step::Enter(Branch::Left),
                        ]),
                },
                Step::Apply(node) => {
                    // both operands were pushed by the steps scheduled with this one
                    let rhs = values.pop().unwrap();
                    let lhs = values.pop().unwrap();
                    values.push(match node {
                        Self::Sum(..) => lhs + rhs,
                        Self::Difference(..) => lhs - rhs,
                        Self::Product(..) => lhs * rhs,
                        Self::Quotient(..) if rhs.is_zero() => return Err(EvalFault::new(path)),
                        Self::Quotient(..) => lhs / rhs,
                        Self::Constant(_) | Self::Identity | Self::Composition(..) => {
                            unreachable!("only binary arithmetic nodes are applied")
                        },
                    });
                },
                Step::Outer(outer) => {
                    let inner = values.pop().unwrap();
                    steps.extend([Step::Leave, Step::Eval(outer, inner), Step::Enter(Branch::Left)]);
                },
                Step::Enter(branch) => path.push(branch),
                Step::Leave => {
                    path.pop();
                },
            }
        }

        Ok(values.pop().unwrap())
    }
}

/// A pending step of [`Node::eval`].
enum Step<'a, T> {
    /// Evaluate the node at the given point and push its value.
    Eval(&'a Node<T>, T),

    /// Pop the values of both operands of an arithmetic node and push its value.
    Apply(&'a Node<T>),

    /// Pop the value of a composition's inner function and evaluate the outer function there.
    Outer(&'a Node<T>),

    /// Step into a child.
    Enter(Branch),

    /// Step back out of a child.
    Leave,
}
