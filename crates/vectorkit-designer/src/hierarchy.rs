//! Hierarchy mutations over a draft shape map.
//!
//! Every function here edits a draft and either succeeds completely or
//! returns an error; callers drop the draft on error, so a failed edit
//! never reaches the store. Sibling lists are renumbered to `0..n` after
//! every change.

use tracing::debug;
use vectorkit_core::{Bounds, EditError, EditResult};

use crate::boolean::Outliner;
use crate::document::ShapeGraph;
use crate::model::{outline_bounds, ShapeId, ShapeMap, ShapeRecord};

/// Where to insert relative to a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Parent id and index of `id` within its sibling list.
pub fn sibling_position(map: &ShapeMap, id: &str) -> EditResult<(Option<ShapeId>, usize)> {
    let parent = map.require(id)?.parent_id.clone();
    let index = map
        .sibling_ids(parent.as_deref())
        .iter()
        .position(|s| s == id)
        .ok_or_else(|| EditError::missing(id))?;
    Ok((parent, index))
}

/// Writes `ids` as the full sibling list of `parent`, renumbering orders.
pub(crate) fn write_siblings(map: &mut ShapeMap, parent: Option<&str>, ids: &[ShapeId]) {
    for (order, id) in ids.iter().enumerate() {
        if let Some(record) = map.get_mut(id) {
            record.order = order;
            record.parent_id = parent.map(str::to_string);
        }
    }
    if let Some(parent) = parent {
        if let Some(owner) = map.get_mut(parent) {
            owner.children = ids.to_vec();
        }
    }
}

/// Unlinks `id` from its sibling list. Returns the former parent.
pub(crate) fn detach(map: &mut ShapeMap, id: &str) -> EditResult<Option<ShapeId>> {
    let parent = map.require(id)?.parent_id.clone();
    let mut ids = map.sibling_ids(parent.as_deref());
    ids.retain(|s| s != id);
    write_siblings(map, parent.as_deref(), &ids);

    if let Some(parent) = parent.as_deref() {
        release_from_compound(map, parent, id);
    }
    if let Some(record) = map.get_mut(id) {
        record.parent_id = None;
    }
    Ok(parent)
}

/// Links `id` into `parent`'s list at `index` (clamped).
pub(crate) fn attach(
    map: &mut ShapeMap,
    id: &str,
    parent: Option<&str>,
    index: usize,
    outliner: &Outliner,
) -> EditResult<()> {
    if let Some(parent) = parent {
        let owner = map.require(parent)?;
        if !owner.is_container() {
            return Err(EditError::invalid(format!("{} cannot hold children", parent)));
        }
        if owner.is_compound() && map.require(id)?.is_frame() {
            return Err(EditError::invalid(format!("frame {} cannot join compound {}", id, parent)));
        }
    }
    let mut ids = map.sibling_ids(parent);
    ids.retain(|s| s != id);
    let index = index.min(ids.len());
    ids.insert(index, id.to_string());
    write_siblings(map, parent, &ids);

    if let Some(parent) = parent {
        if map.get(parent).is_some_and(ShapeRecord::is_compound) {
            absorb_into_compound(map, parent, id, outliner)?;
        }
    }
    Ok(())
}

fn absorb_into_compound(map: &mut ShapeMap, compound_id: &str, id: &str, outliner: &Outliner) -> EditResult<()> {
    let frozen = outliner.freeze(map.require(id)?)?;
    if let Some(meta) = map.get_mut(compound_id).and_then(|c| c.compound_meta_mut()) {
        meta.children_data.retain(|f| f.id != id);
        meta.children_data.push(frozen);
    }
    if let Some(record) = map.get_mut(id) {
        record.visible = false;
    }
    align_compound(map, compound_id);
    Ok(())
}

fn release_from_compound(map: &mut ShapeMap, compound_id: &str, id: &str) {
    let Some(meta) = map.get_mut(compound_id).and_then(|c| c.compound_meta_mut()) else {
        return;
    };
    meta.children_data.retain(|f| f.id != id);
    if let Some(record) = map.get_mut(id) {
        record.visible = true;
    }
    align_compound(map, compound_id);
}

/// Keeps frozen members in child order and fits the compound box to them.
pub(crate) fn align_compound(map: &mut ShapeMap, compound_id: &str) {
    let Some(compound) = map.get_mut(compound_id) else {
        return;
    };
    let children = compound.children.clone();
    let Some(meta) = compound.compound_meta_mut() else {
        return;
    };
    meta.children_data.retain(|f| children.contains(&f.id));
    meta.children_data.sort_by_key(|f| {
        children
            .iter()
            .position(|c| *c == f.id)
            .unwrap_or(usize::MAX)
    });

    let bounds = meta
        .children_data
        .iter()
        .filter_map(|f| outline_bounds(&f.outline))
        .reduce(|a, b| a.union(&b));
    if let Some(Bounds {
        min_x,
        min_y,
        max_x,
        max_y,
    }) = bounds
    {
        compound.x = min_x;
        compound.y = min_y;
        compound.width = max_x - min_x;
        compound.height = max_y - min_y;
    }
}

/// Inserts a new record at the end of `parent`'s list (top level when `None`).
pub fn add_shape(
    map: &mut ShapeMap,
    mut record: ShapeRecord,
    parent: Option<&str>,
    outliner: &Outliner,
) -> EditResult<ShapeId> {
    if map.contains_key(&record.id) {
        return Err(EditError::invalid(format!("id {} is already taken", record.id)));
    }
    if let Some(parent) = parent {
        if !map.require(parent)?.is_container() {
            return Err(EditError::invalid(format!("{} cannot hold children", parent)));
        }
    }
    let id = record.id.clone();
    record.parent_id = None;
    record.children.clear();
    map.insert(id.clone(), record);

    let end = map.sibling_ids(parent).iter().filter(|s| **s != id).count();
    attach(map, &id, parent, end, outliner)?;
    Ok(id)
}

/// Moves `active` next to `over`, into whatever list holds `over`.
pub fn insert_adjacent(
    map: &mut ShapeMap,
    active: &str,
    over: &str,
    placement: Placement,
    outliner: &Outliner,
) -> EditResult<()> {
    if active == over {
        return Err(EditError::invalid("cannot drop a shape onto itself"));
    }
    map.require(active)?;
    let target = map.require(over)?.parent_id.clone();
    if let Some(target) = target.as_deref() {
        if target == active || map.is_descendant_of(target, active) {
            return Err(EditError::invalid(format!(
                "{} cannot move inside its own subtree",
                active
            )));
        }
    }

    detach(map, active)?;
    let ids: Vec<ShapeId> = map
        .sibling_ids(target.as_deref())
        .into_iter()
        .filter(|s| s != active)
        .collect();
    let over_index = ids
        .iter()
        .position(|s| s == over)
        .ok_or_else(|| EditError::missing(over))?;
    let index = match placement {
        Placement::Before => over_index,
        Placement::After => over_index + 1,
    };
    attach(map, active, target.as_deref(), index, outliner)?;
    debug!(active, over, ?placement, "inserted adjacent");
    Ok(())
}

/// Appends `shape` to the end of `target`'s children.
pub fn nest_into(map: &mut ShapeMap, shape: &str, target: &str, outliner: &Outliner) -> EditResult<()> {
    if shape == target {
        return Err(EditError::invalid("cannot nest a shape into itself"));
    }
    map.require(shape)?;
    if !map.require(target)?.is_container() {
        return Err(EditError::invalid(format!("{} cannot hold children", target)));
    }
    if map.is_descendant_of(target, shape) {
        return Err(EditError::invalid(format!(
            "{} is inside {} already",
            target, shape
        )));
    }

    detach(map, shape)?;
    let end = map.sibling_ids(Some(target)).len();
    attach(map, shape, Some(target), end, outliner)?;
    debug!(shape, target, "nested");
    Ok(())
}

/// Makes `shape` the last top-level item.
pub fn move_to_top_level(map: &mut ShapeMap, shape: &str, outliner: &Outliner) -> EditResult<()> {
    detach(map, shape)?;
    let end = map.sibling_ids(None).iter().filter(|s| *s != shape).count();
    attach(map, shape, None, end, outliner)
}

/// Removes `id` and its whole subtree. Returns every removed id, `id` first.
pub fn delete(map: &mut ShapeMap, id: &str) -> EditResult<Vec<ShapeId>> {
    let subtree = map.descendants(id);
    detach(map, id)?;
    let mut removed = Vec::with_capacity(subtree.len() + 1);
    removed.push(id.to_string());
    removed.extend(subtree);
    for gone in &removed {
        map.remove(gone);
    }
    Ok(removed)
}

/// Moves `active` to `over`'s slot within one sibling list.
pub fn reorder_siblings(map: &mut ShapeMap, active: &str, over: &str, scope: Option<&str>) -> EditResult<()> {
    if active == over {
        return Err(EditError::invalid("cannot reorder a shape onto itself"));
    }
    let mut ids = map.sibling_ids(scope);
    let from = ids
        .iter()
        .position(|s| s == active)
        .ok_or_else(|| EditError::invalid(format!("{} is not in this list", active)))?;
    let to = ids
        .iter()
        .position(|s| s == over)
        .ok_or_else(|| EditError::invalid(format!("{} is not in this list", over)))?;

    let moved = ids.remove(from);
    ids.insert(to, moved);
    write_siblings(map, scope, &ids);
    if let Some(scope) = scope {
        align_compound(map, scope);
    }
    Ok(())
}

/// Copy-on-write edit of one record's properties.
///
/// Identity and structure (`id`, `parent_id`, `children`, `order`) are
/// kept from the original. A compound member stays hidden and is frozen
/// again so the compound reflects the edit.
pub fn update_shape<F>(map: &mut ShapeMap, id: &str, outliner: &Outliner, edit: F) -> EditResult<()>
where
    F: FnOnce(&mut ShapeRecord),
{
    let original = map.require(id)?.clone();
    let mut record = original.clone();
    edit(&mut record);
    record.id = original.id;
    record.parent_id = original.parent_id.clone();
    record.children = original.children;
    record.order = original.order;
    map.insert(id.to_string(), record);

    if let Some(parent) = original.parent_id.as_deref() {
        if map.get(parent).is_some_and(ShapeRecord::is_compound) {
            absorb_into_compound(map, parent, id, outliner)?;
        }
    }
    Ok(())
}
