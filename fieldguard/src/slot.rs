use crate::value::Value;

/// Input to a descriptor's set hook.
///
/// Distinguishes "nothing supplied" from "explicitly supplied the absence-value"
/// from "supplied a concrete value".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot<T> {
    #[default]
    Unset,
    Null,
    Present(T),
}

impl<T> Slot<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Slot::Unset)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slot<U> {
        match self {
            Slot::Unset => Slot::Unset,
            Slot::Null => Slot::Null,
            Slot::Present(value) => Slot::Present(f(value)),
        }
    }

    /// `None` becomes [`Slot::Null`].
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Slot::Null, Slot::Present)
    }
}

impl Slot<Value> {
    /// Folds `Present(Value::Null)` into `Null`.
    pub fn normalize(self) -> Self {
        match self {
            Slot::Present(Value::Null) => Slot::Null,
            other => other,
        }
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Slot::Present(value)
    }
}
