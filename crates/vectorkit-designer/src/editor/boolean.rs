//! Boolean compound operations on the selection.

use vectorkit_core::EditResult;

use super::Editor;
use crate::boolean;
use crate::model::{BooleanOperation, ShapeId};

impl Editor {
    /// Combines the selected shapes and selects the new compound.
    pub fn combine_selected(&mut self, operation: BooleanOperation) -> EditResult<ShapeId> {
        let ids = self.selection.selection().ids();
        self.combine(&ids, operation)
    }

    pub fn combine(&mut self, ids: &[ShapeId], operation: BooleanOperation) -> EditResult<ShapeId> {
        let compound = self.apply("combine", |map, factory, outliner| {
            boolean::combine(map, ids, operation, factory, outliner)
        })?;
        self.selection.click(&compound);
        Ok(compound)
    }

    /// Flattens a compound into a path and selects it.
    ///
    /// An empty result is reported as a geometry failure and leaves the
    /// document as it was.
    pub fn expand(&mut self, compound_id: &str) -> EditResult<ShapeId> {
        let path = self.apply("expand", |map, factory, outliner| {
            boolean::expand(map, compound_id, factory, outliner)
        })?;
        self.selection.click(&path);
        Ok(path)
    }

    /// Dissolves a compound and selects its former members.
    pub fn ungroup(&mut self, compound_id: &str) -> EditResult<Vec<ShapeId>> {
        let members = self.apply("ungroup", |map, _, outliner| {
            boolean::ungroup(map, compound_id, outliner)
        })?;
        match members.as_slice() {
            [] => self.selection.clear(),
            [only] => self.selection.click(only),
            _ => {
                self.selection.clear();
                for id in &members {
                    self.selection.shift_click(id);
                }
            }
        }
        Ok(members)
    }
}
