//! Widget state that may be owned by the widget or by its parent.
//!
//! Values are resolved once into a [`ManagedValue`]; widgets read through
//! it without caring which side owns the value.

mod state;
mod tabs;

pub use state::{ManagedValue, ValueSource};
pub use tabs::{Tab, TabChange, TabSet};
