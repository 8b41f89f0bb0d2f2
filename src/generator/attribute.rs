//! Reading the marker attribute's named arguments.
//!
//! Every argument is optional. Absent, null, mistyped, or out-of-range
//! values fall back to the attribute's declared default; the fallback is
//! recorded in [`MarkerArguments::invalid`] so it can be reported.

use std::fmt;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use crate::base::Name;
use crate::model::{AttributeData, TypedConstant};

use super::bootstrap::{
    CHECK_EQUALITY_ARG, GETTER_VISIBILITY_ARG, PROPERTY_NAME_ARG, SETTER_VISIBILITY_ARG,
};

/// Accessibility of a generated property or accessor.
///
/// Ordered from least to most visible; the discriminants match the
/// bootstrap enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VisibilityLevel {
    Private = 0,
    Internal = 1,
    Protected = 2,
    #[default]
    Public = 3,
}

impl VisibilityLevel {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(VisibilityLevel::Private),
            1 => Some(VisibilityLevel::Internal),
            2 => Some(VisibilityLevel::Protected),
            3 => Some(VisibilityLevel::Public),
            _ => None,
        }
    }

    /// The modifier keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            VisibilityLevel::Private => "private",
            VisibilityLevel::Internal => "internal",
            VisibilityLevel::Protected => "protected",
            VisibilityLevel::Public => "public",
        }
    }
}

impl fmt::Display for VisibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// When a setter assigns and notifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EqualityPolicy {
    /// Always assign and notify.
    #[default]
    None = 0,
    /// Skip when `object.Equals(old, new)`.
    ValueEquals = 1,
    /// Skip when `object.ReferenceEquals(old, new)`.
    ReferenceEquals = 2,
}

impl EqualityPolicy {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(EqualityPolicy::None),
            1 => Some(EqualityPolicy::ValueEquals),
            2 => Some(EqualityPolicy::ReferenceEquals),
            _ => None,
        }
    }

    /// The comparison method guarding the setter, if any.
    pub fn comparison(&self) -> Option<&'static str> {
        match self {
            EqualityPolicy::None => None,
            EqualityPolicy::ValueEquals => Some("object.Equals"),
            EqualityPolicy::ReferenceEquals => Some("object.ReferenceEquals"),
        }
    }
}

/// The marker attribute's arguments with defaults applied.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MarkerArguments {
    pub property_name: Option<Name>,
    pub getter: VisibilityLevel,
    pub setter: VisibilityLevel,
    pub equality: EqualityPolicy,
    /// Arguments that were present but unusable, by name.
    pub invalid: Vec<Name>,
}

impl MarkerArguments {
    pub fn from_attribute(attribute: &AttributeData) -> Self {
        let mut args = Self::default();

        match attribute.argument(PROPERTY_NAME_ARG) {
            None | Some(TypedConstant::Null) => {}
            Some(TypedConstant::String(name)) => args.property_name = Some(name.clone()),
            Some(_) => args.invalid.push(PROPERTY_NAME_ARG.into()),
        }

        args.getter = args.read_enum(attribute, GETTER_VISIBILITY_ARG, VisibilityLevel::from_value);
        args.setter = args.read_enum(attribute, SETTER_VISIBILITY_ARG, VisibilityLevel::from_value);
        args.equality = args.read_enum(attribute, CHECK_EQUALITY_ARG, EqualityPolicy::from_value);
        args
    }

    fn read_enum<T, F>(&mut self, attribute: &AttributeData, name: &str, from_value: F) -> T
    where
        T: Default,
        F: Fn(i64) -> Option<T>,
    {
        match attribute.argument(name) {
            None | Some(TypedConstant::Null) => T::default(),
            Some(constant) => match constant.as_int().and_then(from_value) {
                Some(value) => value,
                None => {
                    self.invalid.push(name.into());
                    T::default()
                }
            },
        }
    }
}
