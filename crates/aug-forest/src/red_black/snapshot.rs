use std::collections::HashMap;

use serde::Serialize;

use crate::error::Error;
use crate::types::Color;

use super::arena::Arena;

/// Owned copy of one node.
///
/// `id` is the node's position in [`TreeSnapshot::nodes`] (pre-order), not an
/// arena index; `left`/`right` refer to those positions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeSnapshot<T, V> {
    pub id: usize,
    pub item: T,
    pub color: Color,
    pub aug: V,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Owned, serializable picture of a tree, for renderers and debuggers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeSnapshot<T, V> {
    pub root: Option<usize>,
    pub nodes: Vec<NodeSnapshot<T, V>>,
}

impl<T, V> TreeSnapshot<T, V>
where
    T: Clone,
    V: Clone,
{
    pub(crate) fn capture(arena: &Arena<T, V>, root: u32) -> Self {
        let mut order = Vec::with_capacity(arena.len());
        let mut stack = Vec::new();
        if !arena.is_nil(root) {
            stack.push(root);
        }
        while let Some(i) = stack.pop() {
            order.push(i);
            for child in [arena.right(i), arena.left(i)] {
                if !arena.is_nil(child) {
                    stack.push(child);
                }
            }
        }

        let position: HashMap<u32, usize> =
            order.iter().enumerate().map(|(pos, &i)| (i, pos)).collect();
        let id_of = |i: u32| position.get(&i).copied();

        let nodes = order
            .iter()
            .enumerate()
            .map(|(id, &i)| NodeSnapshot {
                id,
                item: arena.item(i).clone(),
                color: arena.color(i),
                aug: arena.aug(i).clone(),
                left: id_of(arena.left(i)),
                right: id_of(arena.right(i)),
            })
            .collect::<Vec<_>>();

        Self {
            root: if nodes.is_empty() { None } else { Some(0) },
            nodes,
        }
    }
}

impl<T, V> TreeSnapshot<T, V>
where
    T: Serialize,
    V: Serialize,
{
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] if a payload fails to serialize.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}
