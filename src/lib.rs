//! # VectorKit
//!
//! Document and editing engine for a layered vector canvas:
//! - Frames (artboards) that own ordered children
//! - Non-destructive boolean compounds (unite, subtract, intersect, exclude)
//! - Snapshot undo/redo over an immutable shape map
//! - Click, shift-click and marquee selection scoped to the active frame
//! - Hierarchy panel drag/drop and frame move/resize gestures
//!
//! ## Architecture
//!
//! VectorKit is organized as a workspace with multiple crates:
//!
//! 1. **vectorkit-core** - Geometry primitives, colors, error types, constants
//! 2. **vectorkit-settings** - TOML configuration for canvas, interaction and geometry
//! 3. **vectorkit-designer** - Shape graph, editing engines, history and persistence
//! 4. **vectorkit** - Facade that re-exports the public API and sets up logging
//!
//! The engine never draws. Hosts register a [`RenderSink`] with the
//! [`Editor`] and receive the full shape map after every change.

pub use vectorkit_designer as designer;
pub use vectorkit_settings as settings;

pub use vectorkit_core::{
    hex_to_hsb, hsb_to_hex, Bounds, ColorError, EditError, EditResult, Error, Hsb, Point, Result,
};

pub use vectorkit_designer::{
    render_list, ArtboardDrag, BlendMode, BooleanOperation, DocumentFile, DocumentPersistence,
    DocumentSnapshot, DocumentStore, DragSession, DropIndicator, DropPosition, Editor, Effect,
    EffectType, Fill, Filter, FilterRasterCache, FilterRenderer, FilterType, History,
    JsonFilePersistence, MemoryPersistence, Placement, RenderItem, RenderSink, ResizeHandle,
    RowRect, Selection, ShapeGraph, ShapeId, ShapeKind, ShapeMap, ShapeRecord, ShapeType,
};

pub use vectorkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Calling it twice is an error; hosts with their own subscriber should
/// skip it.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vectorkit_designer=info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging as one JSON object per line, for hosts that ship logs
/// to a collector.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Opens an editor configured from `path`, falling back to defaults when
/// the file is missing or invalid.
pub fn editor_from_config_file(path: &std::path::Path) -> Editor {
    Editor::new(Config::load_or_default(path))
}
