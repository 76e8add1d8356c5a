//! DragDeck Core Library
//!
//! Platform-agnostic state transformations behind the DragDeck widgets:
//! sortable lists, Kanban boards, grid-snap canvases and JS-driven
//! transitions. Rendering layers feed in gestures and frame times and
//! commit the snapshots returned here.

pub mod config;
pub mod drag;
pub mod easing;
pub mod error;
pub mod kanban;
pub mod list;
pub mod snap;
pub mod timeline;
pub mod widget;

pub use config::DeckConfig;
pub use drag::{DragEnd, DragSession, DEFAULT_ACTIVATION_DISTANCE};
pub use easing::{ease_in_out, interpolate, progress_ratio};
pub use error::{DeckError, Result};
pub use kanban::{move_card, Board, Card, Column, MoveInstruction};
pub use list::{reorder, reorder_by_id, Identified, OrderedList};
pub use snap::{apply_drag, move_item, snap, snap_to_grid, GridItem, GridSpec, SnapResult};
pub use timeline::{Clock, ManualClock, Sample, SystemClock, Timeline, TimelineStatus};
pub use widget::{ManagedValue, Tab, TabChange, TabSet, ValueSource};
