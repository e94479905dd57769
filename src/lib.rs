//! # Checkflow
//!
//! Checkflow is the core of a checklist-flow editor: a flow is a directed
//! graph of steps drawn as boxes on a canvas, worked through by ticking steps
//! off and edited by dragging, resizing and connecting boxes.
//!
//! ## Core Features
//!
//! - **Draft Editing**: Pointer gestures mutate a private copy-on-write draft, committed on save
//! - **Edge Routing**: Orthogonal paths while working, curved ones while editing
//! - **Scene Rendering**: Boxes and styled edges as plain data or SVG
//! - **New Flows**: Flat-text import, templates and generative synthesis
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkflow::{Hit, Point, Scene, WorkspaceBuilder};
//!
//! let workspace = WorkspaceBuilder::new().samples(true).build()?;
//!
//! let mut editor = workspace.open("1")?;
//! editor.enter_edit();
//! editor.pointer_down(Hit::Node("t1".into()), Point::new(0.0, 0.0));
//! editor.pointer_move(Point::new(40.0, 0.0));
//! editor.pointer_up();
//! workspace.save(&mut editor)?;
//!
//! let svg = Scene::build(&editor).to_svg();
//! ```

mod builder;
mod config;
mod editor;
mod error;
mod generate;
mod geometry;
mod import;
mod model;
mod render;
mod router;
mod samples;
mod store;
mod utils;
mod workspace;

use std::sync::{Arc, RwLock};

pub use builder::WorkspaceBuilder;
pub use config::{Config, GeneratorConfig};
pub use editor::{ConnectState, Editor, Gesture, Hit, PROMPT_SELECT_SOURCE, PROMPT_SELECT_TARGET, SurfaceMode, Viewport};
pub use error::CheckflowError;
pub use generate::{FlowGenerator, GeminiGenerator, GeneratedGraph, parse_generated};
pub use geometry::{Point, Rect, Size};
pub use import::{DEFAULT_IMPORT_TITLE, EMPTY_FILE_MESSAGE, import_text};
pub use model::*;
pub use render::{EdgeStyle, EdgeView, NodeBox, Scene};
pub use router::{EdgePath, PathSegment, RouteMode, RoutedEdge, route, route_edge, route_flow};
pub use store::{FlowCollection, InsertOrder, MemCollection, Store, StoreIden};
pub use workspace::Workspace;

/// Result type alias for Checkflow operations.
pub type Result<T> = std::result::Result<T, CheckflowError>;

/// Thread-safe shared lock wrapper using Arc<RwLock<T>>.
pub(crate) type ShareLock<T> = Arc<RwLock<T>>;
