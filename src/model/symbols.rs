//! Resolved symbols as supplied by the host.
//!
//! These mirror the subset of a host compiler's symbol model the generator
//! reads: namespaces, types, fields, and the attributes attached to fields.

use indexmap::IndexMap;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use crate::base::{Name, SymbolId, TextRange};

// ============================================================================
// KINDS
// ============================================================================

/// Coarse classification of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Namespace,
    Type,
    Field,
    /// Methods, properties, or anything else that can contain a declaration.
    Other,
}

impl SymbolKind {
    /// Get a display label for this symbol kind.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Namespace => "namespace",
            SymbolKind::Type => "type",
            SymbolKind::Field => "field",
            SymbolKind::Other => "member",
        }
    }
}

/// The declaration kind of a type symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Other,
}

impl TypeKind {
    /// The declaration keyword, or `None` if a partial declaration of this
    /// kind cannot be written.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            TypeKind::Class => Some("class"),
            TypeKind::Struct => Some("struct"),
            TypeKind::Interface => Some("interface"),
            TypeKind::Enum | TypeKind::Delegate | TypeKind::Other => None,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
            TypeKind::Other => "other",
        }
    }
}

// ============================================================================
// SYMBOLS
// ============================================================================

/// Any symbol in the graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Symbol {
    Namespace(NamespaceSymbol),
    Type(TypeSymbol),
    Field(FieldSymbol),
    Other(OtherSymbol),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Namespace(_) => SymbolKind::Namespace,
            Symbol::Type(_) => SymbolKind::Type,
            Symbol::Field(_) => SymbolKind::Field,
            Symbol::Other(_) => SymbolKind::Other,
        }
    }

    /// The symbol this one is declared in. Namespaces have none.
    pub fn containing(&self) -> Option<SymbolId> {
        match self {
            Symbol::Namespace(_) => None,
            Symbol::Type(t) => Some(t.containing),
            Symbol::Field(f) => Some(f.owner),
            Symbol::Other(o) => Some(o.containing),
        }
    }

    /// The metadata name used when building fragment keys.
    pub fn metadata_name(&self) -> &str {
        match self {
            Symbol::Namespace(n) => &n.name,
            Symbol::Type(t) => &t.metadata_name,
            Symbol::Field(f) => &f.name,
            Symbol::Other(o) => &o.name,
        }
    }
}

/// A namespace, identified by its full dotted name.
///
/// The global namespace has an empty name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct NamespaceSymbol {
    pub name: Name,
}

impl NamespaceSymbol {
    pub fn new(name: impl Into<Name>) -> Self {
        Self { name: name.into() }
    }

    pub fn global() -> Self {
        Self::new("")
    }

    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }
}

/// A class, struct, interface, or other type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct TypeSymbol {
    /// Simple name, e.g. `Box`.
    pub name: Name,
    /// Metadata name, e.g. `Box`1`.
    pub metadata_name: Name,
    #[cfg_attr(feature = "interchange", serde(rename = "type_kind"))]
    pub kind: TypeKind,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub is_record: bool,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub type_parameters: Vec<Name>,
    /// Interfaces listed on this type's own declarations.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub interfaces: Vec<SymbolId>,
    pub containing: SymbolId,
}

impl TypeSymbol {
    pub fn new(name: impl Into<Name>, kind: TypeKind, containing: SymbolId) -> Self {
        let name = name.into();
        Self {
            metadata_name: name.clone(),
            name,
            kind,
            is_record: false,
            type_parameters: Vec::new(),
            interfaces: Vec::new(),
            containing,
        }
    }

    pub fn class(name: impl Into<Name>, containing: SymbolId) -> Self {
        Self::new(name, TypeKind::Class, containing)
    }

    pub fn structure(name: impl Into<Name>, containing: SymbolId) -> Self {
        Self::new(name, TypeKind::Struct, containing)
    }

    pub fn interface(name: impl Into<Name>, containing: SymbolId) -> Self {
        Self::new(name, TypeKind::Interface, containing)
    }

    pub fn record(mut self) -> Self {
        self.is_record = true;
        self
    }

    /// Add type parameters; the metadata name gains the arity suffix.
    pub fn with_type_parameters<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Name>,
    {
        self.type_parameters = params.into_iter().map(Into::into).collect();
        if !self.type_parameters.is_empty() {
            self.metadata_name = format!("{}`{}", self.name, self.type_parameters.len()).into();
        }
        self
    }

    pub fn with_interface(mut self, interface: SymbolId) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Name as written in a declaration header, with type parameters.
    pub fn declared_name(&self) -> String {
        if self.type_parameters.is_empty() {
            self.name.to_string()
        } else {
            format!("{}<{}>", self.name, self.type_parameters.join(", "))
        }
    }
}

/// A field symbol.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct FieldSymbol {
    pub name: Name,
    /// Declared type as the host displays it, e.g. `string` or `List<int>?`.
    pub ty: Name,
    pub owner: SymbolId,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub attributes: Vec<AttributeData>,
}

impl FieldSymbol {
    pub fn new(name: impl Into<Name>, ty: impl Into<Name>, owner: SymbolId) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            owner,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeData) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Find the attribute whose class is `class`.
    pub fn attribute(&self, class: SymbolId) -> Option<&AttributeData> {
        self.attributes.iter().find(|a| a.class == class)
    }
}

/// A method, property, or other member that can lexically contain types.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct OtherSymbol {
    pub name: Name,
    pub containing: SymbolId,
}

impl OtherSymbol {
    pub fn new(name: impl Into<Name>, containing: SymbolId) -> Self {
        Self {
            name: name.into(),
            containing,
        }
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// An attribute application on a field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct AttributeData {
    /// The attribute class.
    pub class: SymbolId,
    /// Named arguments in source order.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub named_arguments: IndexMap<Name, TypedConstant>,
}

impl AttributeData {
    pub fn new(class: SymbolId) -> Self {
        Self {
            class,
            named_arguments: IndexMap::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<Name>, value: impl Into<TypedConstant>) -> Self {
        self.named_arguments.insert(name.into(), value.into());
        self
    }

    pub fn argument(&self, name: &str) -> Option<&TypedConstant> {
        self.named_arguments.get(name)
    }
}

/// A compile-time constant attribute argument.
///
/// Enum arguments arrive as their underlying integer value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(Serialize, Deserialize),
    serde(untagged)
)]
pub enum TypedConstant {
    Null,
    Bool(bool),
    Int(i64),
    String(Name),
}

impl TypedConstant {
    pub fn is_null(&self) -> bool {
        matches!(self, TypedConstant::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TypedConstant::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedConstant::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for TypedConstant {
    fn from(s: &str) -> Self {
        TypedConstant::String(s.into())
    }
}

impl From<String> for TypedConstant {
    fn from(s: String) -> Self {
        TypedConstant::String(s.into())
    }
}

impl From<i64> for TypedConstant {
    fn from(v: i64) -> Self {
        TypedConstant::Int(v)
    }
}

impl From<i32> for TypedConstant {
    fn from(v: i32) -> Self {
        TypedConstant::Int(v.into())
    }
}

impl From<bool> for TypedConstant {
    fn from(v: bool) -> Self {
        TypedConstant::Bool(v)
    }
}

// ============================================================================
// SYNTAX
// ============================================================================

/// A field declaration node, which may declare several variables
/// (`int _a, _b;`) sharing the same attribute lists.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct FieldDeclaration {
    #[cfg_attr(feature = "interchange", serde(default))]
    pub range: Option<TextRange>,
    /// Number of `[...]` attribute lists written on the declaration.
    pub attribute_lists: usize,
    /// Declared variable symbols in source order.
    pub variables: Vec<SymbolId>,
}

impl FieldDeclaration {
    pub fn new(variables: Vec<SymbolId>, attribute_lists: usize) -> Self {
        Self {
            range: None,
            attribute_lists,
            variables,
        }
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }
}
