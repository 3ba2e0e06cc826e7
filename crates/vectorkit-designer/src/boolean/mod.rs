//! Boolean compounds.
//!
//! `combine` groups shapes under a compound that renders the result of a
//! boolean operation over frozen member outlines. `expand` bakes that
//! result into a plain path and drops the compound, and `ungroup` gives
//! the members back.

mod csg;
mod outliner;

pub use outliner::Outliner;

use tracing::{debug, warn};
use vectorkit_core::{EditError, EditResult};

use crate::document::ShapeGraph;
use crate::factory::ShapeFactory;
use crate::hierarchy::{attach, delete, detach, sibling_position, write_siblings};
use crate::model::{
    outline_area, BooleanOperation, CompoundMeta, Fill, Outline, OutlinePolygon, ShapeId, ShapeMap,
};

/// Total filled area of an outline.
pub fn polygon_area(outline: &[OutlinePolygon]) -> f64 {
    outline_area(outline)
}

/// The drawable result of a compound.
pub fn compute_outline(meta: &CompoundMeta, outliner: &Outliner) -> EditResult<Outline> {
    outliner.compute_outline(meta)
}

/// Groups `ids` (at least two, no frames) under a new compound.
///
/// The compound takes the slot of the first id in its sibling list and
/// its box is the union of the inputs' boxes. Inputs are hidden and
/// re-parented under it.
pub fn combine(
    map: &mut ShapeMap,
    ids: &[ShapeId],
    operation: BooleanOperation,
    factory: &mut ShapeFactory,
    outliner: &Outliner,
) -> EditResult<ShapeId> {
    let mut inputs: Vec<ShapeId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !inputs.contains(id) {
            inputs.push(id.clone());
        }
    }
    if inputs.len() < 2 {
        return Err(EditError::invalid("boolean operations need at least two shapes"));
    }

    let mut frozen = Vec::with_capacity(inputs.len());
    let mut bounds = None;
    for id in &inputs {
        let record = map.require(id)?;
        if record.is_frame() {
            return Err(EditError::invalid(format!("frame {} cannot be combined", id)));
        }
        if map.parent_of(id).is_some_and(|p| p.is_compound()) {
            return Err(EditError::invalid(format!("{} already belongs to a compound", id)));
        }
        frozen.push(outliner.freeze(record)?);
        let b = record.bounds();
        bounds = Some(match bounds {
            None => b,
            Some(acc) => b.union(&acc),
        });
    }
    let bounds = bounds.ok_or_else(|| EditError::invalid("nothing to combine"))?;
    for id in &inputs {
        if let Some(outer) = inputs.iter().find(|other| map.is_descendant_of(id, other.as_str())) {
            return Err(EditError::invalid(format!("{} is inside {}", id, outer)));
        }
    }

    let first = &inputs[0];
    let (parent, _) = sibling_position(map, first)?;
    let preceding: Vec<ShapeId> = map
        .sibling_ids(parent.as_deref())
        .into_iter()
        .take_while(|s| s != first)
        .filter(|s| !inputs.contains(s))
        .collect();

    for id in &inputs {
        detach(map, id)?;
    }

    let compound = factory.compound(operation, bounds, frozen);
    let compound_id = compound.id.clone();
    map.insert(compound_id.clone(), compound);
    write_siblings(map, Some(&compound_id), &inputs);
    for id in &inputs {
        if let Some(record) = map.get_mut(id) {
            record.visible = false;
        }
    }
    attach(map, &compound_id, parent.as_deref(), preceding.len(), outliner)?;

    debug!(compound = %compound_id, operation = operation.label(), members = inputs.len(), "combined");
    Ok(compound_id)
}

/// Replaces the compound and its members with one path holding the
/// computed outline and the first member's color.
pub fn expand(
    map: &mut ShapeMap,
    compound_id: &str,
    factory: &mut ShapeFactory,
    outliner: &Outliner,
) -> EditResult<ShapeId> {
    let compound = map.require(compound_id)?.clone();
    let meta = compound
        .compound_meta()
        .ok_or_else(|| EditError::invalid(format!("{} is not a boolean compound", compound_id)))?;

    let outline = outliner.outline_of(&compound).inspect_err(|err| {
        warn!(compound = compound_id, error = %err, "expand aborted");
    })?;

    let mut path = factory.path_from_outline(outline);
    if let Some(color) = meta.children_data.first().and_then(|f| f.color.clone()) {
        path.fill = Fill::solid(color);
    }
    path.opacity = compound.opacity;
    path.blend_mode = compound.blend_mode;
    path.filters = compound.filters.clone();
    path.effects = compound.effects.clone();

    let (parent, index) = sibling_position(map, compound_id)?;
    delete(map, compound_id)?;
    let path_id = path.id.clone();
    map.insert(path_id.clone(), path);
    attach(map, &path_id, parent.as_deref(), index, outliner)?;

    debug!(compound = compound_id, path = %path_id, "expanded");
    Ok(path_id)
}

/// Dissolves a compound, restoring its members (visible) in its slot.
pub fn ungroup(map: &mut ShapeMap, compound_id: &str, outliner: &Outliner) -> EditResult<Vec<ShapeId>> {
    let compound = map.require(compound_id)?;
    if !compound.is_compound() {
        return Err(EditError::invalid(format!("{} is not a boolean compound", compound_id)));
    }
    let members = compound.children.clone();
    let (parent, index) = sibling_position(map, compound_id)?;

    detach(map, compound_id)?;
    map.remove(compound_id);
    for (offset, id) in members.iter().enumerate() {
        // Members still point at the removed compound until attached.
        if let Some(record) = map.get_mut(id) {
            record.visible = true;
        }
        attach(map, id, parent.as_deref(), index + offset, outliner)?;
    }
    Ok(members)
}
