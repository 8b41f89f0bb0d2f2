//! Grouping fields by owning type and rendering one fragment per type.

use indexmap::IndexMap;

use crate::base::{Name, SymbolId};
use crate::core::text_utils::is_identifier;
use crate::diagnostics::{DiagnosticCollector, codes};
use crate::model::{AttributeData, FieldSymbol, Symbol, SymbolGraph, SymbolKind, TypeSymbol};

use super::attribute::MarkerArguments;
use super::bootstrap::FRAGMENT_SUFFIX;
use super::discover::DiscoveredField;
use super::options::GeneratorOptions;
use super::outcome::{GeneratedSource, ItemOutcome, Outcome, SkipReason};
use super::property::{EVENT_HANDLER_TYPE, EVENT_NAME, PropertySpec};
use super::writer::SourceWriter;

/// Group discovered fields by owning type, keeping first-seen order of
/// owners and discovery order within each group.
pub fn group_by_owner(fields: &[DiscoveredField]) -> IndexMap<SymbolId, Vec<DiscoveredField>> {
    let mut groups: IndexMap<SymbolId, Vec<DiscoveredField>> = IndexMap::new();
    for field in fields {
        groups.entry(field.owner).or_default().push(*field);
    }
    groups
}

/// The types enclosing an owner, and the namespace they live in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainmentChain {
    pub namespace: SymbolId,
    /// Enclosing types, outermost first.
    pub types: Vec<SymbolId>,
}

/// Walk from `owner` up to its namespace.
///
/// Every symbol between the owner and the namespace must be a type.
pub fn containment_chain<G>(graph: &G, owner: SymbolId) -> Result<ContainmentChain, SkipReason>
where
    G: SymbolGraph + ?Sized,
{
    let mut types = Vec::new();
    let mut current = graph
        .containing_symbol(owner)
        .ok_or(SkipReason::UnsupportedContainer(SymbolKind::Other))?;
    let namespace = loop {
        match graph.symbol(current) {
            Some(Symbol::Namespace(_)) => break current,
            Some(Symbol::Type(ty)) => {
                types.push(current);
                current = ty.containing;
            }
            Some(other) => return Err(SkipReason::UnsupportedContainer(other.kind())),
            None => return Err(SkipReason::UnsupportedContainer(SymbolKind::Other)),
        }
    };
    types.reverse();
    Ok(ContainmentChain { namespace, types })
}

/// Fragment key: metadata names from the owner outward, dot-joined.
///
/// `App.Models.Outer+Inner` yields `Inner.Outer.Models.App_autoNotify.cs`.
pub fn hint_name<G>(graph: &G, owner: SymbolId) -> String
where
    G: SymbolGraph + ?Sized,
{
    let mut parts: Vec<&str> = Vec::new();
    let mut current = Some(owner);
    while let Some(id) = current {
        let Some(symbol) = graph.symbol(id) else {
            break;
        };
        match symbol {
            Symbol::Namespace(ns) => parts.extend(ns.name.rsplit('.').filter(|s| !s.is_empty())),
            _ => parts.push(symbol.metadata_name()),
        }
        current = symbol.containing();
    }
    format!("{}{}", parts.join("."), FRAGMENT_SUFFIX)
}

/// `partial class Name<T>` / `partial record struct Name`.
fn partial_header(ty: &TypeSymbol) -> Result<String, SkipReason> {
    let keyword = ty
        .kind
        .keyword()
        .ok_or(SkipReason::UnsupportedTypeKind(ty.kind))?;
    let record = if ty.is_record && keyword != "interface" {
        "record "
    } else {
        ""
    };
    Ok(format!("partial {}{} {}", record, keyword, ty.declared_name()))
}

/// Result of synthesizing one owning type.
#[derive(Debug, Default)]
pub struct GroupResult {
    pub source: Option<GeneratedSource>,
    pub outcomes: Vec<ItemOutcome>,
}

/// Per-pass synthesis state. Holds only resolved lookups, never
/// accumulated output.
pub struct Synthesizer<'a, G: ?Sized> {
    graph: &'a G,
    options: &'a GeneratorOptions,
    marker: SymbolId,
    notify: Option<SymbolId>,
    notify_display: String,
}

impl<'a, G> Synthesizer<'a, G>
where
    G: SymbolGraph + ?Sized,
{
    pub fn new(graph: &'a G, options: &'a GeneratorOptions, marker: SymbolId) -> Self {
        let notify = graph.type_by_metadata_name(&options.notify_interface);
        let notify_display = notify
            .and_then(|id| graph.display_string(id))
            .unwrap_or_else(|| options.notify_interface.clone());
        Self {
            graph,
            options,
            marker,
            notify,
            notify_display,
        }
    }

    fn type_name(&self, id: SymbolId) -> Name {
        self.graph
            .display_string(id)
            .map(Name::from)
            .or_else(|| self.graph.type_symbol(id).map(|t| t.name.clone()))
            .unwrap_or_default()
    }

    fn skip_group(
        &self,
        owner: SymbolId,
        reason: SkipReason,
        diagnostics: &mut DiagnosticCollector,
    ) -> GroupResult {
        let name = self.type_name(owner);
        tracing::trace!(owner = %name, ?reason, "skipping type");
        diagnostics.skip(owner, &name, None, &reason);
        GroupResult {
            source: None,
            outcomes: vec![ItemOutcome {
                symbol: owner,
                kind: SymbolKind::Type,
                name,
                range: None,
                outcome: Outcome::Skipped(reason),
            }],
        }
    }

    /// Render the fragment for one owning type.
    pub fn synthesize(
        &self,
        owner: SymbolId,
        fields: &[DiscoveredField],
        diagnostics: &mut DiagnosticCollector,
    ) -> GroupResult {
        let Some(owner_ty) = self.graph.type_symbol(owner) else {
            return self.skip_group(owner, SkipReason::UnsupportedContainer(SymbolKind::Other), diagnostics);
        };
        let chain = match containment_chain(self.graph, owner) {
            Ok(chain) => chain,
            Err(reason) => return self.skip_group(owner, reason, diagnostics),
        };

        let mut headers = Vec::with_capacity(chain.types.len() + 1);
        for id in chain.types.iter().copied().chain(std::iter::once(owner)) {
            let Some(ty) = self.graph.type_symbol(id) else {
                return self.skip_group(owner, SkipReason::UnsupportedContainer(SymbolKind::Other), diagnostics);
            };
            match partial_header(ty) {
                Ok(header) => headers.push(header),
                Err(reason) => return self.skip_group(owner, reason, diagnostics),
            }
        }
        let owner_header = headers.pop().unwrap_or_default();

        let mut result = GroupResult::default();
        let mut w = SourceWriter::new(self.options.indent);
        if self.options.emit_nullable_directive {
            w.line("#nullable enable");
        }
        if let Some(ns) = self.graph.namespace(chain.namespace).filter(|ns| !ns.is_global()) {
            w.open(format!("namespace {}", ns.name));
        }
        for header in headers {
            w.open(header);
        }
        w.open(format!("{} : {}", owner_header, self.notify_display));

        let implements_notify = self
            .notify
            .is_some_and(|notify| self.graph.declares_interface(owner, notify));
        let mut first_member = true;
        if !implements_notify {
            w.line(format!("public event {}? {};", EVENT_HANDLER_TYPE, EVENT_NAME));
            first_member = false;
        }

        let mut field_outcomes = Vec::with_capacity(fields.len());
        for discovered in fields {
            let Some(field) = self.graph.field(discovered.symbol) else {
                continue;
            };
            let outcome = match self.property_spec(discovered, field, diagnostics) {
                Ok(spec) => {
                    if !first_member {
                        w.blank_line();
                    }
                    first_member = false;
                    spec.render(&mut w);
                    tracing::trace!(field = %field.name, property = %spec.name, "generated property");
                    Outcome::Generated
                }
                Err(reason) => {
                    tracing::trace!(field = %field.name, ?reason, "skipping field");
                    diagnostics.skip(discovered.symbol, &field.name, discovered.range, &reason);
                    Outcome::Skipped(reason)
                }
            };
            field_outcomes.push(ItemOutcome {
                symbol: discovered.symbol,
                kind: SymbolKind::Field,
                name: field.name.clone(),
                range: discovered.range,
                outcome,
            });
        }

        result.outcomes.push(ItemOutcome {
            symbol: owner,
            kind: SymbolKind::Type,
            name: self.type_name(owner),
            range: None,
            outcome: Outcome::Generated,
        });
        result.outcomes.extend(field_outcomes);
        result.source = Some(GeneratedSource::new(
            hint_name(self.graph, owner),
            w.finish(),
        ));
        tracing::debug!(owner = %owner_ty.name, fields = fields.len(), "synthesized type");
        result
    }

    fn marker_attribute<'f>(&self, field: &'f FieldSymbol) -> Option<&'f AttributeData> {
        field.attribute(self.marker).or_else(|| {
            field.attributes.iter().find(|attr| {
                self.graph
                    .display_string(attr.class)
                    .is_some_and(|name| name == self.options.marker_attribute)
            })
        })
    }

    fn property_spec(
        &self,
        discovered: &DiscoveredField,
        field: &FieldSymbol,
        diagnostics: &mut DiagnosticCollector,
    ) -> Result<PropertySpec, SkipReason> {
        let args = self
            .marker_attribute(field)
            .map(MarkerArguments::from_attribute)
            .unwrap_or_default();

        for name in &args.invalid {
            diagnostics.lint(
                discovered.symbol,
                discovered.range,
                codes::INVALID_ARGUMENT,
                format!(
                    "argument '{}' on field '{}' has an unusable value; the default applies",
                    name, field.name
                ),
            );
        }

        let spec = PropertySpec::derive(field, &args)?;

        if self.options.validate_property_names
            && args.property_name.is_some()
            && !is_identifier(&spec.name)
        {
            diagnostics.lint(
                discovered.symbol,
                discovered.range,
                codes::INVALID_IDENTIFIER,
                format!("property name '{}' is not a valid identifier", spec.name),
            );
        }
        Ok(spec)
    }
}
