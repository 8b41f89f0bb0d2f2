//! Builders for small host compilations.

use autonotify::generator::{MarkerTypes, declare_marker_types};
use autonotify::model::{
    AttributeData, Compilation, CompilationBuilder, FieldSymbol, TypeSymbol, TypedConstant,
};
use autonotify::{Generator, GeneratorOptions, GeneratorOutput, SymbolId};

/// A compilation under construction with the marker types already declared.
pub struct Fixture {
    pub builder: CompilationBuilder,
    pub markers: MarkerTypes,
}

impl Fixture {
    pub fn new() -> Self {
        let mut builder = Compilation::builder();
        let markers = declare_marker_types(&mut builder);
        Self { builder, markers }
    }

    pub fn namespace(&mut self, name: &str) -> SymbolId {
        self.builder.namespace(name)
    }

    pub fn class(&mut self, name: &str, containing: SymbolId) -> SymbolId {
        self.builder.add_type(TypeSymbol::class(name, containing))
    }

    /// A class that already implements the notification interface.
    pub fn notifying_class(&mut self, name: &str, containing: SymbolId) -> SymbolId {
        let notify = self.markers.notify_interface;
        self.builder
            .add_type(TypeSymbol::class(name, containing).with_interface(notify))
    }

    /// A field carrying the marker with no arguments.
    pub fn marked_field(&mut self, name: &str, ty: &str, owner: SymbolId) -> SymbolId {
        self.field_with(name, ty, owner, &[])
    }

    /// A field carrying the marker with the given named arguments.
    pub fn field_with(
        &mut self,
        name: &str,
        ty: &str,
        owner: SymbolId,
        args: &[(&str, TypedConstant)],
    ) -> SymbolId {
        let mut attribute = AttributeData::new(self.markers.attribute);
        for (arg, value) in args {
            attribute = attribute.with_argument(*arg, value.clone());
        }
        self.builder
            .add_field(FieldSymbol::new(name, ty, owner).with_attribute(attribute))
    }

    /// A field without any attribute.
    pub fn plain_field(&mut self, name: &str, ty: &str, owner: SymbolId) -> SymbolId {
        self.builder.add_field(FieldSymbol::new(name, ty, owner))
    }

    pub fn build(self) -> Compilation {
        self.builder.build().expect("fixture compilation should be valid")
    }
}

/// Run one pass with default options.
pub fn generate(compilation: &Compilation) -> GeneratorOutput {
    Generator::default().execute(compilation)
}

/// Run one pass with the given options.
pub fn generate_with(compilation: &Compilation, options: GeneratorOptions) -> GeneratorOutput {
    Generator::new(options).execute(compilation)
}
