//! In-memory symbol graph.
//!
//! [`Compilation`] stores symbols by id in insertion order, with field
//! declaration nodes kept as a separate list. It is the graph used by tests
//! and by hosts that hand over a snapshot rather than implementing
//! [`SymbolGraph`] on their own model.
//!
//! ```text
//! Compilation
//! ├── symbols: IndexMap<SymbolId, Symbol>   (preserves insertion order)
//! ├── declarations: Vec<FieldDeclaration>
//! └── metadata_names: FxHashMap<String, SymbolId>
//! ```

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::{Name, SymbolId};
use crate::error::{Error, Result};

use super::graph::SymbolGraph;
use super::symbols::{
    FieldDeclaration, FieldSymbol, NamespaceSymbol, OtherSymbol, Symbol, SymbolKind, TypeKind,
    TypeSymbol,
};

/// A validated, immutable symbol graph.
#[derive(Clone, Debug, Default)]
pub struct Compilation {
    symbols: IndexMap<SymbolId, Symbol>,
    declarations: Vec<FieldDeclaration>,
    metadata_names: FxHashMap<String, SymbolId>,
}

impl Compilation {
    pub fn builder() -> CompilationBuilder {
        CompilationBuilder::new()
    }

    /// All symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols.iter().map(|(id, s)| (*id, s))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Find types by simple name.
    pub fn find_types(&self, name: &str) -> Vec<SymbolId> {
        self.symbols
            .iter()
            .filter_map(|(id, s)| match s {
                Symbol::Type(t) if t.name == name => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl SymbolGraph for Compilation {
    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    fn field_declarations(&self) -> &[FieldDeclaration] {
        &self.declarations
    }

    fn type_by_metadata_name(&self, name: &str) -> Option<SymbolId> {
        self.metadata_names.get(name).copied()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Incrementally assembles a [`Compilation`].
///
/// Ids are allocated sequentially. References are checked in
/// [`build`](Self::build), so symbols may be added in any order when using
/// [`insert`](Self::insert).
#[derive(Debug, Default)]
pub struct CompilationBuilder {
    symbols: IndexMap<SymbolId, Symbol>,
    declarations: Vec<FieldDeclaration>,
    namespaces: FxHashMap<Name, SymbolId>,
    /// Next id to allocate. Wider than `SymbolId` so `u32::MAX` can be
    /// inserted explicitly.
    next_id: u64,
    exhausted: bool,
}

impl CompilationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, symbol: Symbol) -> SymbolId {
        let Ok(raw) = u32::try_from(self.next_id) else {
            // Reported by `build`; nothing is stored under the returned id.
            self.exhausted = true;
            return SymbolId::new(u32::MAX);
        };
        let id = SymbolId::new(raw);
        self.next_id += 1;
        if let Symbol::Namespace(ns) = &symbol {
            self.namespaces.insert(ns.name.clone(), id);
        }
        self.symbols.insert(id, symbol);
        id
    }

    /// Get or create the namespace with this dotted name.
    pub fn namespace(&mut self, name: impl Into<Name>) -> SymbolId {
        let name = name.into();
        if let Some(id) = self.namespaces.get(&name) {
            return *id;
        }
        self.allocate(Symbol::Namespace(NamespaceSymbol::new(name)))
    }

    pub fn global_namespace(&mut self) -> SymbolId {
        self.namespace("")
    }

    pub fn add_type(&mut self, ty: TypeSymbol) -> SymbolId {
        self.allocate(Symbol::Type(ty))
    }

    pub fn add_other(&mut self, other: OtherSymbol) -> SymbolId {
        self.allocate(Symbol::Other(other))
    }

    /// Declare a type by fully-qualified name (`System.ComponentModel.INotifyPropertyChanged`),
    /// creating its namespace as needed.
    pub fn declare_external_type(&mut self, metadata_name: &str, kind: TypeKind) -> SymbolId {
        let (ns, name) = match metadata_name.rsplit_once('.') {
            Some((ns, name)) => (ns, name),
            None => ("", metadata_name),
        };
        let ns = self.namespace(ns);
        self.add_type(TypeSymbol::new(name, kind, ns))
    }

    /// Add a field in its own declaration node.
    ///
    /// The declaration carries one attribute list when the field has any
    /// attributes.
    pub fn add_field(&mut self, field: FieldSymbol) -> SymbolId {
        let attribute_lists = usize::from(!field.attributes.is_empty());
        let id = self.allocate(Symbol::Field(field));
        self.declarations
            .push(FieldDeclaration::new(vec![id], attribute_lists));
        id
    }

    /// Add several fields declared by one node (`int _a, _b;`).
    pub fn add_field_declaration(
        &mut self,
        fields: Vec<FieldSymbol>,
        attribute_lists: usize,
    ) -> Vec<SymbolId> {
        let ids: Vec<_> = fields
            .into_iter()
            .map(|f| self.allocate(Symbol::Field(f)))
            .collect();
        self.declarations
            .push(FieldDeclaration::new(ids.clone(), attribute_lists));
        ids
    }

    /// Insert a symbol under an explicit id.
    pub fn insert(&mut self, id: SymbolId, symbol: Symbol) -> Result<()> {
        if self.symbols.contains_key(&id) {
            return Err(Error::DuplicateSymbol(id));
        }
        if let Symbol::Namespace(ns) = &symbol {
            self.namespaces.entry(ns.name.clone()).or_insert(id);
        }
        self.next_id = self.next_id.max(u64::from(id.raw()) + 1);
        self.symbols.insert(id, symbol);
        Ok(())
    }

    pub fn push_declaration(&mut self, declaration: FieldDeclaration) {
        self.declarations.push(declaration);
    }

    /// Validate references and freeze the graph.
    pub fn build(self) -> Result<Compilation> {
        if self.exhausted {
            return Err(Error::IdSpaceExhausted(SymbolId::new(u32::MAX)));
        }
        self.validate()?;

        let mut compilation = Compilation {
            symbols: self.symbols,
            declarations: self.declarations,
            metadata_names: FxHashMap::default(),
        };

        let mut metadata_names = FxHashMap::default();
        for (id, symbol) in &compilation.symbols {
            if let Symbol::Type(_) = symbol {
                if let Some(name) = qualified_metadata_name(&compilation, *id) {
                    metadata_names.entry(name).or_insert(*id);
                }
            }
        }
        compilation.metadata_names = metadata_names;

        tracing::debug!(
            symbols = compilation.symbols.len(),
            declarations = compilation.declarations.len(),
            "built compilation"
        );
        Ok(compilation)
    }

    fn kind_of(&self, id: SymbolId, referenced_by: &'static str) -> Result<SymbolKind> {
        self.symbols
            .get(&id)
            .map(Symbol::kind)
            .ok_or_else(|| Error::unknown(id, referenced_by))
    }

    fn validate(&self) -> Result<()> {
        for (id, symbol) in &self.symbols {
            match symbol {
                Symbol::Namespace(_) => {}
                Symbol::Type(t) => {
                    if self.kind_of(t.containing, "type container")? == SymbolKind::Field {
                        return Err(Error::invalid(t.containing, "type container"));
                    }
                    for interface in &t.interfaces {
                        if self.kind_of(*interface, "interface list")? != SymbolKind::Type {
                            return Err(Error::invalid(*interface, "type"));
                        }
                    }
                }
                Symbol::Field(f) => {
                    if self.kind_of(f.owner, "field owner")? != SymbolKind::Type {
                        return Err(Error::invalid(f.owner, "type"));
                    }
                    for attr in &f.attributes {
                        if self.kind_of(attr.class, "attribute class")? != SymbolKind::Type {
                            return Err(Error::invalid(attr.class, "type"));
                        }
                    }
                }
                Symbol::Other(o) => {
                    self.kind_of(o.containing, "member container")?;
                }
            }
            self.check_acyclic(*id)?;
        }

        for declaration in &self.declarations {
            for variable in &declaration.variables {
                self.kind_of(*variable, "field declaration")?;
            }
        }
        Ok(())
    }

    fn check_acyclic(&self, id: SymbolId) -> Result<()> {
        let mut current = id;
        for _ in 0..=self.symbols.len() {
            match self.symbols.get(&current).and_then(Symbol::containing) {
                Some(next) => current = next,
                None => return Ok(()),
            }
        }
        Err(Error::invalid(id, "symbol with acyclic containment"))
    }
}

/// `Namespace.Outer+Inner` for types reachable from a namespace through
/// types only.
fn qualified_metadata_name(graph: &Compilation, id: SymbolId) -> Option<String> {
    let mut types = Vec::new();
    let mut current = id;
    let namespace = loop {
        match graph.symbol(current)? {
            Symbol::Type(t) => types.push(t.metadata_name.as_str()),
            Symbol::Namespace(ns) => break ns,
            Symbol::Field(_) | Symbol::Other(_) => return None,
        }
        current = graph.containing_symbol(current)?;
    };
    types.reverse();
    let nested = types.join("+");
    if namespace.is_global() {
        Some(nested)
    } else {
        Some(format!("{}.{}", namespace.name, nested))
    }
}
