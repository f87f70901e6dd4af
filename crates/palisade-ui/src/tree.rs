//! Arena storage for controls.

use palisade_core::alloc::SparseSet;

use crate::container::ContainerState;
use crate::control::{Control, ControlState};
use crate::id::ControlId;

pub(crate) struct ControlNode {
    pub state: ControlState,
    pub widget: Box<dyn Control>,
    pub container: Option<ContainerState>,
}

/// Every control created through a root panel, attached or not.
#[derive(Default)]
pub(crate) struct UiTree {
    nodes: SparseSet<ControlNode>,
}

impl UiTree {
    pub fn insert(&mut self, node: ControlNode) -> ControlId {
        ControlId(self.nodes.push(node))
    }

    pub fn remove(&mut self, id: ControlId) -> ControlNode {
        assert!(self.contains(id), "control {} does not exist", id);
        self.nodes.remove(id.slot())
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains(id.slot())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: ControlId) -> &ControlNode {
        match self.nodes.try_get(id.slot()) {
            Some(node) => node,
            None => panic!("control {} does not exist", id),
        }
    }

    pub fn node_mut(&mut self, id: ControlId) -> &mut ControlNode {
        match self.nodes.try_get_mut(id.slot()) {
            Some(node) => node,
            None => panic!("control {} does not exist", id),
        }
    }

    pub fn state(&self, id: ControlId) -> &ControlState {
        &self.node(id).state
    }

    pub fn state_mut(&mut self, id: ControlId) -> &mut ControlState {
        &mut self.node_mut(id).state
    }

    pub fn container(&self, id: ControlId) -> Option<&ContainerState> {
        self.node(id).container.as_ref()
    }

    pub fn container_mut(&mut self, id: ControlId) -> Option<&mut ContainerState> {
        self.node_mut(id).container.as_mut()
    }

    pub fn parent(&self, id: ControlId) -> Option<ControlId> {
        self.state(id).parent
    }

    pub fn children(&self, id: ControlId) -> &[ControlId] {
        match self.container(id) {
            Some(container) => container.children(),
            None => &[],
        }
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: ControlId, id: ControlId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent(c);
        }
        false
    }

    /// `id` and all its descendants, pre-order, children in insertion order.
    pub fn subtree(&self, id: ControlId) -> Vec<ControlId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        out
    }
}
