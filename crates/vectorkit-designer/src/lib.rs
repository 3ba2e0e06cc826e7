//! # VectorKit Designer
//!
//! The document and editing engine of the VectorKit vector editor: a flat
//! shape graph of frames, boolean compounds and primitives, edited through
//! snapshot undo/redo.
//!
//! ## Core Components
//!
//! ### Document
//! - **Model**: One record type for every shape, containers included
//! - **Store**: Immutable snapshot of the shape map plus graph queries
//! - **History**: Whole-map snapshots for undo/redo
//!
//! ### Editing Engines
//! - **Hierarchy**: Insert, nest, reorder, move out and delete
//! - **Drag/Drop**: Before/after/inside decisions for the hierarchy panel
//! - **Boolean**: Combine shapes into compounds, expand them to paths
//! - **Artboard**: Frame move and resize gestures
//! - **Selection**: Click, shift-click, marquee and hit testing
//!
//! ### Boundaries
//! - **Persistence**: JSON documents on disk or in memory
//! - **Rendering**: Draw-list notifications and filter raster cache
//!
//! ## Architecture
//!
//! ```text
//! Editor
//!   ├── DocumentStore  <── History::commit (the only writer)
//!   ├── SelectionManager / InteractionSession
//!   ├── ShapeFactory   (ids, defaults)
//!   └── RenderSink*    (notified after every change)
//! ```
//!
//! Engines edit a draft copy of the map and either return it for commit or
//! fail with an [`EditError`](vectorkit_core::EditError), leaving the
//! store untouched.

pub mod artboard;
pub mod boolean;
pub mod document;
pub mod drag_drop;
pub mod editor;
pub mod factory;
pub mod hierarchy;
pub mod history;
pub mod interaction;
pub mod model;
pub mod persistence;
pub mod render;
pub mod selection;
pub mod serialization;

pub use artboard::{resize_axis, ArtboardDrag, HandleAnchor, ResizeHandle};
pub use boolean::{combine, compute_outline, expand, polygon_area, ungroup, Outliner};
pub use document::{DocumentStore, FlatRow, ShapeGraph, Violation};
pub use drag_drop::{apply_drop, decide_drop, DragSession, DropIndicator, DropPosition, DropTarget, RowRect};
pub use editor::Editor;
pub use factory::ShapeFactory;
pub use hierarchy::Placement;
pub use history::History;
pub use interaction::InteractionSession;
pub use model::{
    BlendMode, BooleanOperation, CompoundMeta, Effect, EffectType, Fill, Filter, FilterType,
    FrozenShape, Outline, OutlinePolygon, ShapeId, ShapeKind, ShapeMap, ShapeRecord, ShapeType,
};
pub use persistence::{DocumentPersistence, JsonFilePersistence, MemoryPersistence};
pub use render::{render_list, FilterRasterCache, FilterRenderer, Raster, RenderItem, RenderSink};
pub use selection::{hit_test, Selection, SelectionManager};
pub use serialization::{DocumentFile, DocumentMetadata, DocumentSnapshot, FILE_FORMAT_VERSION};
