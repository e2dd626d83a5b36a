// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene node hierarchy stored in a per-tree arena.
//!
//! Nodes live in a flat arena owned by their [`NodeTree`]; a [`NodeId`] is
//! the arena slot index and doubles as the node's id, so ids are unique
//! within a tree and assigned sequentially as nodes are attached. Parent
//! links are non-owning back-references into the same arena. A subtree built
//! as an independent tree is spliced in with [`NodeTree::attach_tree`], which
//! renumbers every attached node into the receiving tree's id space.
//!
//! Traversal order is a contract: pre-order, children in insertion order,
//! stable and reproducible across runs for identical trees. Bounding-box and
//! merge utilities depend on it.

use scene_lite_geometry::Transformation;

use crate::error::{Error, Result};

/// Identifier of a node within its tree, assigned sequentially on attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The arena slot index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single scene node: name, local transform, children, mesh references.
#[derive(Debug, Clone)]
struct Node {
    name: String,
    transformation: Transformation,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    mesh_indices: Vec<u32>,
}

impl Node {
    fn new() -> Self {
        Self {
            name: String::new(),
            transformation: Transformation::identity(),
            parent: None,
            children: Vec::new(),
            mesh_indices: Vec::new(),
        }
    }
}

/// A tree of scene nodes with a root created at construction.
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    /// Creates a tree containing only an unnamed root with identity
    /// transform. The root has id 0.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
        }
    }

    /// The root node's id.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree (root included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.index()).ok_or(Error::IndexOutOfRange {
            what: "node",
            index: id.index(),
            len: self.nodes.len(),
        })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        let len = self.nodes.len();
        self.nodes.get_mut(id.index()).ok_or(Error::IndexOutOfRange {
            what: "node",
            index: id.index(),
            len,
        })
    }

    /// Attaches a fresh empty node under `parent` and returns its id.
    ///
    /// The new node's position in the parent's child list is
    /// `children(parent).len() - 1` right after the call.
    pub fn add_child(&mut self, parent: NodeId) -> Result<NodeId> {
        self.node(parent)?;
        let id = NodeId(self.nodes.len() as u32);
        let mut node = Node::new();
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Splices an independently built tree under `parent`.
    ///
    /// Every node of `subtree` (its root included) is renumbered into this
    /// tree's id space, pre-order, preserving structure, names, transforms
    /// and mesh indices. Returns the new id of the subtree's root.
    pub fn attach_tree(&mut self, parent: NodeId, subtree: NodeTree) -> Result<NodeId> {
        let new_root = self.add_child(parent)?;
        self.copy_payload(&subtree, subtree.root(), new_root)?;

        let mut stack: Vec<(NodeId, NodeId)> = Vec::new();
        for &child in subtree.nodes[subtree.root().index()].children.iter().rev() {
            stack.push((child, new_root));
        }
        while let Some((old_id, new_parent)) = stack.pop() {
            let new_id = self.add_child(new_parent)?;
            self.copy_payload(&subtree, old_id, new_id)?;
            for &child in subtree.nodes[old_id.index()].children.iter().rev() {
                stack.push((child, new_id));
            }
        }
        Ok(new_root)
    }

    fn copy_payload(&mut self, source: &NodeTree, from: NodeId, to: NodeId) -> Result<()> {
        let old = source.node(from)?;
        let name = old.name.clone();
        let transformation = old.transformation.clone();
        let mesh_indices = old.mesh_indices.clone();
        let node = self.node_mut(to)?;
        node.name = name;
        node.transformation = transformation;
        node.mesh_indices = mesh_indices;
        Ok(())
    }

    pub fn name(&self, id: NodeId) -> Result<&str> {
        Ok(&self.node(id)?.name)
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> Result<()> {
        self.node_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn transformation(&self, id: NodeId) -> Result<&Transformation> {
        Ok(&self.node(id)?.transformation)
    }

    pub fn set_transformation(&mut self, id: NodeId, transformation: Transformation) -> Result<()> {
        self.node_mut(id)?.transformation = transformation;
        Ok(())
    }

    /// The node's parent, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Child ids in insertion order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// The child at `position` in the parent's child list.
    pub fn child(&self, parent: NodeId, position: usize) -> Result<NodeId> {
        let children = self.children(parent)?;
        children.get(position).copied().ok_or(Error::IndexOutOfRange {
            what: "child",
            index: position,
            len: children.len(),
        })
    }

    /// Appends a mesh reference and returns its 0-based position.
    pub fn add_mesh_index(&mut self, id: NodeId, mesh_index: u32) -> Result<usize> {
        let node = self.node_mut(id)?;
        node.mesh_indices.push(mesh_index);
        Ok(node.mesh_indices.len() - 1)
    }

    /// Mesh references in insertion order.
    pub fn mesh_indices(&self, id: NodeId) -> Result<&[u32]> {
        Ok(&self.node(id)?.mesh_indices)
    }

    /// True iff the node has no children and no mesh references. The local
    /// transform does not matter.
    pub fn is_empty(&self, id: NodeId) -> Result<bool> {
        let node = self.node(id)?;
        Ok(node.children.is_empty() && node.mesh_indices.is_empty())
    }

    /// Cumulative transform from this node through all ancestors to the root.
    ///
    /// Walks parent-ward, composing `acc = parent.local.append(&acc)` at each
    /// step. A node with no parent has world transform equal to its local
    /// transform.
    pub fn world_transformation(&self, id: NodeId) -> Result<Transformation> {
        let node = self.node(id)?;
        let mut accumulated = node.transformation.clone();
        let mut current = node.parent;
        while let Some(parent_id) = current {
            let parent = self.node(parent_id)?;
            accumulated = parent.transformation.append(&accumulated);
            current = parent.parent;
        }
        Ok(accumulated)
    }

    /// Pre-order traversal starting at (and including) `start`.
    ///
    /// Uses an explicit stack, so arbitrarily deep trees cannot overflow the
    /// call stack.
    pub fn enumerate(&self, start: NodeId, mut visitor: impl FnMut(NodeId)) -> Result<()> {
        self.node(start)?;
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            visitor(id);
            for &child in self.nodes[id.index()].children.iter().rev() {
                stack.push(child);
            }
        }
        Ok(())
    }

    /// Pre-order traversal of the descendants of `start`, excluding `start`
    /// itself.
    pub fn enumerate_children(&self, start: NodeId, mut visitor: impl FnMut(NodeId)) -> Result<()> {
        let node = self.node(start)?;
        let mut stack: Vec<NodeId> = node.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            visitor(id);
            for &child in self.nodes[id.index()].children.iter().rev() {
                stack.push(child);
            }
        }
        Ok(())
    }

    /// Visits mesh indices depth-first: the node's own references in
    /// insertion order first, then each child subtree in order.
    pub fn enumerate_mesh_indices(
        &self,
        start: NodeId,
        mut visitor: impl FnMut(u32),
    ) -> Result<()> {
        self.enumerate(start, |id| {
            for &mesh_index in &self.nodes[id.index()].mesh_indices {
                visitor(mesh_index);
            }
        })
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}
