//! Controlled and uncontrolled widget values.

/// Who owns a widget value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource<T> {
    /// The owner supplies the value and is notified of requested changes.
    Controlled(T),
    /// The widget keeps the value itself, starting from this initial value.
    Uncontrolled(T),
}

/// A widget value resolved once from a [`ValueSource`].
///
/// Reads always go through [`ManagedValue::get`], whichever mode is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedValue<T> {
    value: T,
    controlled: bool,
}

impl<T> ManagedValue<T> {
    /// Resolve the ownership mode.
    pub fn new(source: ValueSource<T>) -> Self {
        match source {
            ValueSource::Controlled(value) => Self {
                value,
                controlled: true,
            },
            ValueSource::Uncontrolled(value) => Self {
                value,
                controlled: false,
            },
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Check if the value is owned outside the widget.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Ask for a new value (e.g. the user clicked a tab).
    ///
    /// An uncontrolled value is updated in place. A controlled value stays
    /// unchanged until the owner calls [`ManagedValue::sync`]. Either way the
    /// caller should report the requested value to its change listener.
    /// Returns whether the stored value changed.
    pub fn request(&mut self, value: T) -> bool {
        if self.controlled {
            return false;
        }
        self.value = value;
        true
    }

    /// Push a value from the owner. Ignored for uncontrolled values.
    pub fn sync(&mut self, value: T) -> bool {
        if !self.controlled {
            log::debug!("Ignoring external value for uncontrolled widget");
            return false;
        }
        self.value = value;
        true
    }
}
