//! The generation pipeline.
//!
//! ```text
//! SymbolGraph
//!     │
//!     ▼
//! discover_fields        ← marker-annotated fields, declaration order
//!     │
//!     ▼
//! group_by_owner         ← one group per owning type symbol
//!     │
//!     ▼
//! Synthesizer            ← containment chain, PropertySpec per field,
//!     │                    one fragment per type
//!     ▼
//! GeneratorOutput        ← bootstrap + fragments + outcomes + diagnostics
//! ```
//!
//! ## Usage
//!
//! ```
//! use autonotify::generator::{Generator, declare_marker_types};
//! use autonotify::model::{AttributeData, Compilation, FieldSymbol, TypeSymbol};
//!
//! let mut builder = Compilation::builder();
//! let markers = declare_marker_types(&mut builder);
//! let ns = builder.namespace("App");
//! let person = builder.add_type(TypeSymbol::class("Person", ns));
//! builder.add_field(
//!     FieldSymbol::new("_name", "string", person)
//!         .with_attribute(AttributeData::new(markers.attribute)),
//! );
//! let compilation = builder.build().unwrap();
//!
//! let output = Generator::default().execute(&compilation);
//! let fragment = output.source("Person.App_autoNotify.cs").unwrap();
//! assert!(fragment.text.contains("public string Name"));
//! ```

mod attribute;
pub mod bootstrap;
mod discover;
mod options;
mod outcome;
mod property;
mod synthesize;
mod writer;

pub use attribute::{EqualityPolicy, MarkerArguments, VisibilityLevel};
pub use bootstrap::{
    BOOTSTRAP_HINT_NAME, MARKER_METADATA_NAME, MarkerTypes, NOTIFY_INTERFACE_METADATA_NAME,
    bootstrap_source, declare_marker_types,
};
pub use discover::{DiscoveredField, discover_fields};
pub use options::{DiagnosticPolicy, GeneratorOptions, IndentStyle};
pub use outcome::{GeneratedSource, GeneratorOutput, ItemOutcome, Outcome, SkipReason};
pub use property::{PropertySpec, accessor_visibility, property_name};
pub use synthesize::{ContainmentChain, containment_chain, group_by_owner, hint_name};
pub use writer::SourceWriter;

use crate::diagnostics::DiagnosticCollector;
use crate::model::{SymbolGraph, SymbolKind};

use synthesize::Synthesizer;

/// Runs generation passes. Holds only immutable options, so one generator
/// can serve any number of passes, including concurrent ones.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Run one pass over `graph`.
    pub fn execute<G>(&self, graph: &G) -> GeneratorOutput
    where
        G: SymbolGraph + ?Sized,
    {
        let mut output = GeneratorOutput {
            sources: vec![bootstrap_source()],
            ..GeneratorOutput::default()
        };
        let mut diagnostics = DiagnosticCollector::new(self.options.diagnostic_policy);

        let fields = discover_fields(graph, &self.options.marker_attribute);
        let groups = group_by_owner(&fields);

        match graph.type_by_metadata_name(&self.options.marker_attribute) {
            Some(marker) => {
                let synthesizer = Synthesizer::new(graph, &self.options, marker);
                for (owner, group) in &groups {
                    let result = synthesizer.synthesize(*owner, group, &mut diagnostics);
                    output.sources.extend(result.source);
                    output.outcomes.extend(result.outcomes);
                }
            }
            None => {
                for owner in groups.keys() {
                    let reason = SkipReason::MissingMarkerType;
                    let name = graph
                        .type_symbol(*owner)
                        .map(|t| t.name.clone())
                        .unwrap_or_default();
                    diagnostics.skip(*owner, &self.options.marker_attribute, None, &reason);
                    output.outcomes.push(ItemOutcome {
                        symbol: *owner,
                        kind: SymbolKind::Type,
                        name,
                        range: None,
                        outcome: Outcome::Skipped(reason),
                    });
                }
            }
        }

        output.diagnostics = diagnostics.take();
        tracing::debug!(
            fields = fields.len(),
            types = groups.len(),
            sources = output.sources.len(),
            diagnostics = output.diagnostics.len(),
            "generation pass complete"
        );
        output
    }
}
