//! The document store and read-only graph queries over a shape map.
//!
//! The store owns an immutable snapshot of the shape map. Engines never
//! mutate it in place: they clone a draft, edit the draft and hand it to
//! [`History::commit`](crate::history::History::commit), which is the only
//! caller of [`DocumentStore::replace`].

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use vectorkit_core::{EditError, EditResult};

use crate::model::{ShapeId, ShapeMap, ShapeRecord};

/// Holds the current document snapshot.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    shapes: Arc<ShapeMap>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(shapes: ShapeMap) -> Self {
        Self {
            shapes: Arc::new(shapes),
        }
    }

    pub fn shapes(&self) -> &ShapeMap {
        &self.shapes
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<ShapeMap> {
        Arc::clone(&self.shapes)
    }

    /// An owned copy to edit.
    pub fn draft(&self) -> ShapeMap {
        (*self.shapes).clone()
    }

    pub(crate) fn replace(&mut self, shapes: Arc<ShapeMap>) {
        self.shapes = shapes;
    }

    pub fn get(&self, id: &str) -> Option<&ShapeRecord> {
        self.shapes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shapes.contains_key(id)
    }

    /// Every structural invariant violation in the current snapshot.
    pub fn validate(&self) -> Vec<Violation> {
        self.shapes.violations()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// One row of the flattened hierarchy, in panel order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    pub id: ShapeId,
    pub depth: usize,
    pub parent_id: Option<ShapeId>,
    pub is_container: bool,
}

/// A broken structural invariant found by [`ShapeGraph::violations`].
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    MissingParent { id: ShapeId, parent_id: ShapeId },
    ParentNotContainer { id: ShapeId, parent_id: ShapeId },
    NotListedByParent { id: ShapeId, parent_id: ShapeId },
    MissingChild { parent_id: ShapeId, child_id: ShapeId },
    ChildParentMismatch { parent_id: ShapeId, child_id: ShapeId },
    DuplicateOrder { parent_id: Option<ShapeId>, order: usize },
    Cycle { id: ShapeId },
    VisibleCompoundChild { id: ShapeId },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingParent { id, parent_id } => {
                write!(f, "{} points at missing parent {}", id, parent_id)
            }
            Violation::ParentNotContainer { id, parent_id } => {
                write!(f, "{} is parented to non-container {}", id, parent_id)
            }
            Violation::NotListedByParent { id, parent_id } => {
                write!(f, "{} is not listed once in {}'s children", id, parent_id)
            }
            Violation::MissingChild {
                parent_id,
                child_id,
            } => write!(f, "{} lists missing child {}", parent_id, child_id),
            Violation::ChildParentMismatch {
                parent_id,
                child_id,
            } => write!(f, "{} lists {} which has another parent", parent_id, child_id),
            Violation::DuplicateOrder { parent_id, order } => write!(
                f,
                "order {} repeats under {}",
                order,
                parent_id.as_deref().unwrap_or("<top level>")
            ),
            Violation::Cycle { id } => write!(f, "{} is its own ancestor", id),
            Violation::VisibleCompoundChild { id } => {
                write!(f, "compound child {} is visible", id)
            }
        }
    }
}

/// Graph queries over a shape map. Implemented for [`ShapeMap`] so the same
/// queries run against the committed store and against drafts.
pub trait ShapeGraph {
    fn record(&self, id: &str) -> Option<&ShapeRecord>;

    /// Like [`record`](ShapeGraph::record) but missing ids are an error.
    fn require(&self, id: &str) -> EditResult<&ShapeRecord> {
        self.record(id).ok_or_else(|| EditError::missing(id))
    }

    /// Ids of the siblings under `parent` (top level when `None`), sorted
    /// by order.
    fn sibling_ids(&self, parent: Option<&str>) -> Vec<ShapeId>;

    fn children_of(&self, parent: &str) -> Vec<&ShapeRecord> {
        self.sibling_ids(Some(parent))
            .iter()
            .filter_map(|id| self.record(id))
            .collect()
    }

    fn top_level(&self) -> Vec<&ShapeRecord> {
        self.sibling_ids(None)
            .iter()
            .filter_map(|id| self.record(id))
            .collect()
    }

    fn parent_of(&self, id: &str) -> Option<&ShapeRecord> {
        self.record(id)?
            .parent_id
            .as_deref()
            .and_then(|p| self.record(p))
    }

    /// Parent chain, nearest first.
    fn ancestors(&self, id: &str) -> Vec<ShapeId>;

    /// Whole subtree below `id` in depth-first panel order.
    fn descendants(&self, id: &str) -> Vec<ShapeId>;

    /// True when `ancestor` appears on `id`'s parent chain.
    fn is_descendant_of(&self, id: &str, ancestor: &str) -> bool {
        self.ancestors(id).iter().any(|a| a == ancestor)
    }

    /// Nearest frame on the parent chain, or `id` itself if it is a frame.
    fn enclosing_frame(&self, id: &str) -> Option<ShapeId> {
        let record = self.record(id)?;
        if record.is_frame() {
            return Some(record.id.clone());
        }
        self.ancestors(id)
            .into_iter()
            .find(|a| self.record(a).is_some_and(|r| r.is_frame()))
    }

    /// The hierarchy panel rows in depth-first order.
    fn flatten(&self) -> Vec<FlatRow>;

    fn violations(&self) -> Vec<Violation>;
}

impl ShapeGraph for ShapeMap {
    fn record(&self, id: &str) -> Option<&ShapeRecord> {
        self.get(id)
    }

    fn sibling_ids(&self, parent: Option<&str>) -> Vec<ShapeId> {
        match parent {
            Some(p) => self.get(p).map(|r| r.children.clone()).unwrap_or_default(),
            None => {
                let mut roots: Vec<&ShapeRecord> =
                    self.values().filter(|r| r.parent_id.is_none()).collect();
                roots.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
                roots.into_iter().map(|r| r.id.clone()).collect()
            }
        }
    }

    fn ancestors(&self, id: &str) -> Vec<ShapeId> {
        let mut chain = Vec::new();
        let mut current = self.get(id).and_then(|r| r.parent_id.clone());
        while let Some(parent) = current {
            // A malformed map can loop; stop once every record was visited.
            if chain.len() > self.len() {
                break;
            }
            let looped = parent == id;
            current = self.get(&parent).and_then(|r| r.parent_id.clone());
            chain.push(parent);
            if looped {
                break;
            }
        }
        chain
    }

    fn descendants(&self, id: &str) -> Vec<ShapeId> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        collect_descendants(self, id, &mut out, &mut seen);
        out
    }

    fn flatten(&self) -> Vec<FlatRow> {
        let mut rows = Vec::with_capacity(self.len());
        let mut seen = HashSet::new();
        for id in self.sibling_ids(None) {
            flatten_into(self, &id, 0, &mut rows, &mut seen);
        }
        rows
    }

    fn violations(&self) -> Vec<Violation> {
        let mut found = Vec::new();

        for record in self.values() {
            if let Some(parent_id) = &record.parent_id {
                match self.get(parent_id) {
                    None => found.push(Violation::MissingParent {
                        id: record.id.clone(),
                        parent_id: parent_id.clone(),
                    }),
                    Some(parent) => {
                        if !parent.is_container() {
                            found.push(Violation::ParentNotContainer {
                                id: record.id.clone(),
                                parent_id: parent_id.clone(),
                            });
                        }
                        if parent.children.iter().filter(|c| **c == record.id).count() != 1 {
                            found.push(Violation::NotListedByParent {
                                id: record.id.clone(),
                                parent_id: parent_id.clone(),
                            });
                        }
                        if parent.is_compound() && record.visible {
                            found.push(Violation::VisibleCompoundChild {
                                id: record.id.clone(),
                            });
                        }
                    }
                }
                if self.ancestors(&record.id).contains(&record.id) {
                    found.push(Violation::Cycle {
                        id: record.id.clone(),
                    });
                }
            }

            for child_id in &record.children {
                match self.get(child_id) {
                    None => found.push(Violation::MissingChild {
                        parent_id: record.id.clone(),
                        child_id: child_id.clone(),
                    }),
                    Some(child) if child.parent_id.as_deref() != Some(record.id.as_str()) => {
                        found.push(Violation::ChildParentMismatch {
                            parent_id: record.id.clone(),
                            child_id: child_id.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        let mut scopes: Vec<Option<ShapeId>> = vec![None];
        scopes.extend(
            self.values()
                .filter(|r| r.is_container())
                .map(|r| Some(r.id.clone())),
        );
        for scope in scopes {
            let mut orders = HashSet::new();
            for id in self.sibling_ids(scope.as_deref()) {
                if let Some(r) = self.get(&id) {
                    if !orders.insert(r.order) {
                        found.push(Violation::DuplicateOrder {
                            parent_id: scope.clone(),
                            order: r.order,
                        });
                    }
                }
            }
        }

        found
    }
}

fn collect_descendants(map: &ShapeMap, id: &str, out: &mut Vec<ShapeId>, seen: &mut HashSet<ShapeId>) {
    let Some(record) = map.get(id) else {
        return;
    };
    for child in &record.children {
        if seen.insert(child.clone()) {
            out.push(child.clone());
            collect_descendants(map, child, out, seen);
        }
    }
}

fn flatten_into(
    map: &ShapeMap,
    id: &str,
    depth: usize,
    rows: &mut Vec<FlatRow>,
    seen: &mut HashSet<ShapeId>,
) {
    let Some(record) = map.get(id) else {
        return;
    };
    if !seen.insert(record.id.clone()) {
        return;
    }
    rows.push(FlatRow {
        id: record.id.clone(),
        depth,
        parent_id: record.parent_id.clone(),
        is_container: record.is_container(),
    });
    for child in &record.children {
        flatten_into(map, child, depth + 1, rows, seen);
    }
}
