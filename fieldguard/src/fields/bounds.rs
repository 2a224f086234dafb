use std::cmp::Ordering;

use crate::descriptor::Binding;
use crate::errors::{Constraint, ConstraintViolation, DefinitionError, FieldError};
use crate::value::{KindList, Value, ValueKind};

/// The four ordering limits, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Gt,
    Lt,
    Ge,
    Le,
}

impl Order {
    fn constraint(self) -> Constraint {
        match self {
            Order::Gt => Constraint::Gt,
            Order::Lt => Constraint::Lt,
            Order::Ge => Constraint::Ge,
            Order::Le => Constraint::Le,
        }
    }

    /// `true` when a value ordered `ordering` against the limit satisfies it.
    fn admits(self, ordering: Ordering) -> bool {
        match self {
            Order::Gt => ordering == Ordering::Greater,
            Order::Lt => ordering == Ordering::Less,
            Order::Ge => ordering != Ordering::Less,
            Order::Le => ordering != Ordering::Greater,
        }
    }
}

/// Ordering limits shared by the numeric and temporal kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bounds {
    pub gt: Option<Value>,
    pub lt: Option<Value>,
    pub ge: Option<Value>,
    pub le: Option<Value>,
}

impl Bounds {
    pub fn is_empty(&self) -> bool {
        self.limits().next().is_none()
    }

    /// Configured limits in evaluation order: gt, lt, ge, le.
    pub fn limits(&self) -> impl Iterator<Item = (Constraint, &Value)> {
        self.ordered().map(|(order, limit)| (order.constraint(), limit))
    }

    fn ordered(&self) -> impl Iterator<Item = (Order, &Value)> {
        [
            (Order::Gt, &self.gt),
            (Order::Lt, &self.lt),
            (Order::Ge, &self.ge),
            (Order::Le, &self.le),
        ]
        .into_iter()
        .filter_map(|(order, limit)| limit.as_ref().map(|limit| (order, limit)))
    }

    /// Every limit must be a non-NaN value of one of `allowed`.
    pub fn check_config(&self, binding: &Binding, allowed: &[ValueKind]) -> Result<(), DefinitionError> {
        for (constraint, limit) in self.limits() {
            let fits = limit.kind().is_some_and(|kind| allowed.contains(&kind)) && !limit.is_nan();
            if !fits {
                return Err(DefinitionError::InvalidLimit {
                    owner: binding.owner.clone(),
                    field: binding.field().to_string(),
                    constraint,
                    limit: limit.to_string(),
                    expected: KindList::from(allowed),
                });
            }
        }
        Ok(())
    }

    pub fn check(&self, field: &str, value: &Value) -> Result<(), FieldError> {
        for (order, limit) in self.ordered() {
            let constraint = order.constraint();
            if value.is_nan() {
                return Err(ConstraintViolation::new(field, Constraint::NotANumber, value, None).into());
            }
            let ordering = value.compare(limit).ok_or_else(|| FieldError::Incomparable {
                field: field.to_string(),
                value: value.to_string(),
                constraint,
                limit: limit.to_string(),
            })?;
            if !order.admits(ordering) {
                return Err(ConstraintViolation::new(field, constraint, value, Some(limit)).into());
            }
        }
        Ok(())
    }
}

/// Builder setters for `gt`, `lt`, `ge` and `le` on a type with a `bounds` field.
macro_rules! bound_setters {
    () => {
        /// Value must be strictly greater than `limit`.
        pub fn gt(mut self, limit: impl Into<$crate::Value>) -> Self {
            self.bounds.gt = Some(limit.into());
            self
        }

        /// Value must be strictly less than `limit`.
        pub fn lt(mut self, limit: impl Into<$crate::Value>) -> Self {
            self.bounds.lt = Some(limit.into());
            self
        }

        /// Value must be greater than or equal to `limit`.
        pub fn ge(mut self, limit: impl Into<$crate::Value>) -> Self {
            self.bounds.ge = Some(limit.into());
            self
        }

        /// Value must be less than or equal to `limit`.
        pub fn le(mut self, limit: impl Into<$crate::Value>) -> Self {
            self.bounds.le = Some(limit.into());
            self
        }

        pub fn bounds(&self) -> &$crate::fields::Bounds {
            &self.bounds
        }
    };
}

pub(crate) use bound_setters;
