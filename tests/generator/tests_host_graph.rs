//! Hosts that implement SymbolGraph themselves.

use std::thread;

use crate::helpers::compilation_fixtures::*;
use crate::helpers::output_assertions::*;
use autonotify::diagnostics::codes;
use autonotify::generator::{BOOTSTRAP_HINT_NAME, IndentStyle, MARKER_METADATA_NAME};
use autonotify::model::{
    AttributeData, Compilation, FieldDeclaration, FieldSymbol, NamespaceSymbol, Symbol,
    TypeKind, TypeSymbol,
};
use autonotify::{
    DiagnosticPolicy, Generator, GeneratorOptions, SkipReason, SymbolGraph, SymbolId,
};

/// Delegates to a compilation but cannot resolve the marker by metadata name.
struct WithoutMarker<'a>(&'a Compilation);

impl SymbolGraph for WithoutMarker<'_> {
    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.0.symbol(id)
    }

    fn field_declarations(&self) -> &[FieldDeclaration] {
        self.0.field_declarations()
    }

    fn type_by_metadata_name(&self, name: &str) -> Option<SymbolId> {
        if name == MARKER_METADATA_NAME {
            None
        } else {
            self.0.type_by_metadata_name(name)
        }
    }
}

/// A flat host: symbols indexed by id, no builder involved.
struct FlatHost {
    symbols: Vec<Symbol>,
    declarations: Vec<FieldDeclaration>,
}

impl SymbolGraph for FlatHost {
    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.raw() as usize)
    }

    fn field_declarations(&self) -> &[FieldDeclaration] {
        &self.declarations
    }

    fn type_by_metadata_name(&self, name: &str) -> Option<SymbolId> {
        (0..self.symbols.len() as u32)
            .map(SymbolId::new)
            .find(|id| self.display_string(*id).as_deref() == Some(name))
    }
}

fn flat_host() -> FlatHost {
    let id = SymbolId::new;
    FlatHost {
        symbols: vec![
            Symbol::Namespace(NamespaceSymbol::new("SourceGenerators")),
            Symbol::Type(TypeSymbol::class("AutoNotifyAttribute", id(0))),
            Symbol::Namespace(NamespaceSymbol::new("Shop")),
            Symbol::Type(TypeSymbol::new("Order", TypeKind::Struct, id(2))),
            Symbol::Field(
                FieldSymbol::new("_total", "decimal", id(3)).with_attribute(AttributeData::new(id(1))),
            ),
        ],
        declarations: vec![FieldDeclaration::new(vec![id(4)], 1)],
    }
}

#[test]
fn test_flat_host_generates_through_trait_object() {
    let host = flat_host();
    let graph: &dyn SymbolGraph = &host;
    let output = Generator::default().execute(graph);

    let text = fragment(&output, "Order.Shop_autoNotify.cs");
    assert!(text.contains("partial struct Order : System.ComponentModel.INotifyPropertyChanged\n"));
    assert!(text.contains("public decimal Total\n"));
}

#[test]
fn test_unresolvable_marker_skips_every_owner() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let a = f.class("A", ns);
    let b = f.class("B", ns);
    f.marked_field("_x", "int", a);
    f.marked_field("_y", "int", b);
    let compilation = f.build();

    let host = WithoutMarker(&compilation);
    let output = Generator::new(
        GeneratorOptions::default().with_diagnostic_policy(DiagnosticPolicy::Warn),
    )
    .execute(&host);

    assert_eq!(hint_names(&output), vec![BOOTSTRAP_HINT_NAME]);
    assert_skipped(&output, a, SkipReason::MissingMarkerType);
    assert_skipped(&output, b, SkipReason::MissingMarkerType);
    assert_eq!(output.diagnostics.len(), 2);
    assert!(output.diagnostics.iter().all(|d| d.code == codes::MISSING_MARKER_TYPE));
}

#[test]
fn test_generator_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Generator>();
    assert_send_sync::<Compilation>();

    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let owner = f.class("Model", ns);
    f.marked_field("_x", "int", owner);
    let compilation = f.build();
    let generator = Generator::new(GeneratorOptions::default().with_indent(IndentStyle::Tabs));
    assert_eq!(generator.options().indent, IndentStyle::Tabs);

    let outputs: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| generator.execute(&compilation)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for output in &outputs {
        assert_eq!(output.sources, outputs[0].sources);
    }
    assert!(fragment(&outputs[0], "Model.App_autoNotify.cs").contains("\n\tpartial class Model"));
}
