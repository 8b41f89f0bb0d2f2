//! Fixed declarations injected into every pass.
//!
//! The marker attribute and its two enums are emitted unconditionally, so
//! user code can reference them before any property has been generated.
//! Every name below is part of the contract the rest of the generator reads
//! attribute arguments by.

use crate::base::SymbolId;
use crate::model::{CompilationBuilder, TypeKind};

use super::outcome::GeneratedSource;

/// Fully-qualified metadata name of the marker attribute.
pub const MARKER_METADATA_NAME: &str = "SourceGenerators.AutoNotifyAttribute";

/// Fully-qualified metadata name of the change-notification interface.
pub const NOTIFY_INTERFACE_METADATA_NAME: &str = "System.ComponentModel.INotifyPropertyChanged";

/// Key of the bootstrap fragment.
pub const BOOTSTRAP_HINT_NAME: &str = "AutoNotifyAttribute";

/// Suffix appended to every per-type fragment key.
pub const FRAGMENT_SUFFIX: &str = "_autoNotify.cs";

/// Named argument overriding the generated property name.
pub const PROPERTY_NAME_ARG: &str = "PropertyName";
/// Named argument holding the getter's visibility level.
pub const GETTER_VISIBILITY_ARG: &str = "GetterVisibility";
/// Named argument holding the setter's visibility level.
pub const SETTER_VISIBILITY_ARG: &str = "SetterVisibility";
/// Named argument holding the setter's equality policy.
pub const CHECK_EQUALITY_ARG: &str = "CheckEquality";

/// Declaration text of the attribute and its enums.
pub const ATTRIBUTE_TEXT: &str = r#"using System;
namespace SourceGenerators
{
    #nullable enable
    [AttributeUsage(AttributeTargets.Field, Inherited = false, AllowMultiple = false)]
    [System.Diagnostics.Conditional("AutoNotifyGenerator_DEBUG")]
    sealed class AutoNotifyAttribute : Attribute
    {
        public AutoNotifyAttribute()
        {
        }
        public string? PropertyName { get; set; }
        public VisibilityLevel GetterVisibility { get; set; } = VisibilityLevel.Public;
        public VisibilityLevel SetterVisibility { get; set; } = VisibilityLevel.Public;
        public EqualityPolicy CheckEquality { get; set; } = EqualityPolicy.None;
    }

    enum EqualityPolicy
    {
        None = 0,
        ValueEquals = 1,
        ReferenceEquals = 2
    }

    enum VisibilityLevel
    {
        Private = 0,
        Internal = 1,
        Protected = 2,
        Public = 3
    }
}
"#;

/// The bootstrap fragment.
pub fn bootstrap_source() -> GeneratedSource {
    GeneratedSource::new(BOOTSTRAP_HINT_NAME, ATTRIBUTE_TEXT)
}

/// Well-known types a host compilation contains once the bootstrap text
/// and the framework are referenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerTypes {
    pub attribute: SymbolId,
    pub notify_interface: SymbolId,
}

/// Declare the marker attribute and notification interface in a graph
/// under construction.
pub fn declare_marker_types(builder: &mut CompilationBuilder) -> MarkerTypes {
    MarkerTypes {
        attribute: builder.declare_external_type(MARKER_METADATA_NAME, TypeKind::Class),
        notify_interface: builder
            .declare_external_type(NOTIFY_INTERFACE_METADATA_NAME, TypeKind::Interface),
    }
}
