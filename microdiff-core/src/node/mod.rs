// src/node/mod.rs

use crate::autograd::graph::NodeId;
use crate::error::MicroDiffError;
use crate::ops::Op;
use num_traits::ToPrimitive;
use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

// --- Implementation modules ---
mod autograd_methods;
mod traits;

/// A scalar value in the computation graph.
///
/// `Node` is a cheap handle around `Rc<NodeData>`:
/// 1.  **Shared Ownership:** a node may be the input of any number of later
///     nodes (fan-out). Cloning a `Node` clones the handle, never the data.
/// 2.  **Interior Mutability:** only the gradient accumulator changes after
///     construction, so it lives in a `Cell<f64>`; value and parents are
///     immutable.
///
/// Nodes are created either as leaves ([`Node::leaf`]) or by an operation
/// on existing nodes, so every edge points from a newer node to a strictly
/// older one and the graph cannot contain a cycle.
#[derive(Clone)]
pub struct Node {
    pub(crate) data: Rc<NodeData>,
}

/// Internal storage of a node.
pub(crate) struct NodeData {
    /// Forward value, fixed at creation.
    pub(crate) value: f64,
    /// Gradient accumulator. Starts at 0 and is only ever added to by backward.
    pub(crate) grad: Cell<f64>,
    /// Inputs of the operation that produced this node, with their local derivatives.
    /// Empty iff the node is a leaf.
    pub(crate) parents: Vec<Edge>,
    /// Operation that produced this node.
    pub(crate) op: Op,
}

/// A recorded input of an operation: the input node and the partial derivative
/// of the operation's output with respect to it, evaluated at construction time.
#[derive(Clone)]
pub struct Edge {
    parent: Node,
    local_grad: f64,
}

impl Edge {
    pub(crate) fn new(parent: &Node, local_grad: f64) -> Self {
        Edge {
            parent: parent.clone(),
            local_grad,
        }
    }

    /// The input node.
    pub fn parent(&self) -> &Node {
        &self.parent
    }

    /// d(output) / d(parent), evaluated at the forward values.
    pub fn local_grad(&self) -> f64 {
        self.local_grad
    }
}

impl Node {
    /// Creates a leaf node holding `value`, with no parents and a zero gradient.
    pub fn leaf(value: f64) -> Self {
        Node::from_parts(value, Vec::new(), Op::Leaf)
    }

    /// Creates a leaf from any primitive numeric value.
    ///
    /// # Errors
    /// Returns [`MicroDiffError::NotARealNumber`] if `value` has no `f64`
    /// representation.
    pub fn try_leaf<V>(value: V) -> Result<Self, MicroDiffError>
    where
        V: ToPrimitive + Debug,
    {
        match value.to_f64() {
            Some(v) => Ok(Node::leaf(v)),
            None => Err(MicroDiffError::NotARealNumber {
                value: format!("{:?}", value),
            }),
        }
    }

    /// Creates an interior node. Used by the `_op` functions only.
    pub(crate) fn from_parts(value: f64, parents: Vec<Edge>, op: Op) -> Self {
        Node {
            data: Rc::new(NodeData {
                value,
                grad: Cell::new(0.0),
                parents,
                op,
            }),
        }
    }

    /// The forward value.
    pub fn value(&self) -> f64 {
        self.data.value
    }

    /// The accumulated gradient. Reads as 0 until a backward pass reaches this node.
    pub fn grad(&self) -> f64 {
        self.data.grad.get()
    }

    /// The recorded inputs of the operation that produced this node.
    pub fn parents(&self) -> &[Edge] {
        &self.data.parents
    }

    /// `true` if this node was constructed directly rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.data.parents.is_empty()
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.data.op
    }

    /// Identity of the underlying node data, stable across handle clones.
    pub(crate) fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// `gradient += contribution`.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.data.grad.set(self.data.grad.get() + contribution);
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::leaf(value)
    }
}

// Dropping the last handle of a long chain would otherwise recurse once per
// ancestor through `Rc<NodeData>` and overflow the native stack.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut stack: Vec<Node> = std::mem::take(&mut self.parents)
            .into_iter()
            .map(|edge| edge.parent)
            .collect();
        while let Some(node) = stack.pop() {
            if let Ok(mut data) = Rc::try_unwrap(node.data) {
                stack.extend(
                    std::mem::take(&mut data.parents)
                        .into_iter()
                        .map(|edge| edge.parent),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
