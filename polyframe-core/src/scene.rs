/// Scene graph of named nodes whose world poses chain through their parents
use log::debug;
use nalgebra::Matrix3;

use crate::error::{Error, Result};

/// Handle to a node in a [`SceneGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    local: Matrix3<f64>,
}

/// A forest of nodes, each holding a local transform and an optional parent.
///
/// A parent must exist before its children are added, so nodes are stored in
/// topological order and the hierarchy can never contain a cycle. World poses
/// are cached until the next `set_local`.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    world: Vec<Matrix3<f64>>,
    dirty: bool,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, name: &str, local: Matrix3<f64>) -> NodeId {
        self.push(name, None, local)
    }

    pub fn add_child(&mut self, parent: NodeId, name: &str, local: Matrix3<f64>) -> Result<NodeId> {
        self.check(parent)?;
        Ok(self.push(name, Some(parent), local))
    }

    fn push(&mut self, name: &str, parent: Option<NodeId>, local: Matrix3<f64>) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug!("scene node #{} '{}' under {:?}", id.0, name, parent.map(|p| p.0));
        self.nodes.push(Node {
            name: name.to_string(),
            parent,
            local,
        });
        self.dirty = true;
        id
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::UnknownNode(id.0))
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    pub fn name(&self, id: NodeId) -> Result<&str> {
        self.check(id)?;
        Ok(&self.nodes[id.0].name)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.check(id)?;
        Ok(self.nodes[id.0].parent)
    }

    pub fn local(&self, id: NodeId) -> Result<Matrix3<f64>> {
        self.check(id)?;
        Ok(self.nodes[id.0].local)
    }

    pub fn set_local(&mut self, id: NodeId, local: Matrix3<f64>) -> Result<()> {
        self.check(id)?;
        self.nodes[id.0].local = local;
        self.dirty = true;
        Ok(())
    }

    /// World pose of a node: its ancestors' locals composed on the left of its own
    pub fn world(&mut self, id: NodeId) -> Result<Matrix3<f64>> {
        self.check(id)?;
        if self.dirty {
            self.resolve();
        }
        Ok(self.world[id.0])
    }

    fn resolve(&mut self) {
        self.world.clear();
        for node in &self.nodes {
            let pose = match node.parent {
                // Parents always precede their children
                Some(parent) => self.world[parent.0] * node.local,
                None => node.local,
            };
            self.world.push(pose);
        }
        self.dirty = false;
    }

    /// Uncached world pose, folding the chain from the root down to `id`
    pub fn chain(&self, id: NodeId) -> Result<Matrix3<f64>> {
        self.check(id)?;
        let mut path = vec![id];
        while let Some(parent) = self.nodes[path[path.len() - 1].0].parent {
            path.push(parent);
        }
        Ok(path
            .iter()
            .rev()
            .fold(Matrix3::identity(), |pose, node| pose * self.nodes[node.0].local))
    }
}
