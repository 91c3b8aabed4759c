use std::fmt::Debug;

use super::super::arena::Arena;

/// Debug printer for augmented red-black trees.
///
/// One node per line, children indented below their parent, the sentinel
/// shown as `∅`.
pub fn print<T, V>(arena: &Arena<T, V>, node: u32, tab: &str) -> String
where
    T: Debug,
    V: Debug,
{
    if arena.is_nil(node) {
        return "∅".to_string();
    }
    let color = if arena.color(node).is_black() {
        "black"
    } else {
        "red"
    };
    let left = print(arena, arena.left(node), &format!("{tab}  "));
    let right = print(arena, arena.right(node), &format!("{tab}  "));
    format!(
        "Node[{node}] {color} {:?} aug={:?}\n{tab}L={left}\n{tab}R={right}",
        arena.item(node),
        arena.aug(node)
    )
}
