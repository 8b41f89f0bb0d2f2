//! Pure scan for marker-annotated fields.

use rustc_hash::FxHashSet;

use crate::base::{SymbolId, TextRange};
use crate::model::SymbolGraph;

/// A field carrying the marker attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscoveredField {
    pub symbol: SymbolId,
    pub owner: SymbolId,
    /// Range of the declaring node.
    pub range: Option<TextRange>,
}

/// Scan every field declaration for fields whose attributes include one
/// whose class displays as `marker_metadata_name`.
///
/// Declarations without attribute lists are not resolved. Results are in
/// declaration order, and a field is reported at most once.
pub fn discover_fields<G>(graph: &G, marker_metadata_name: &str) -> Vec<DiscoveredField>
where
    G: SymbolGraph + ?Sized,
{
    let mut seen = FxHashSet::default();
    let mut fields = Vec::new();

    for declaration in graph.field_declarations() {
        if declaration.attribute_lists == 0 {
            continue;
        }
        for variable in &declaration.variables {
            let Some(field) = graph.field(*variable) else {
                continue;
            };
            let annotated = field.attributes.iter().any(|attr| {
                graph
                    .display_string(attr.class)
                    .is_some_and(|name| name == marker_metadata_name)
            });
            if annotated && seen.insert(*variable) {
                tracing::trace!(field = %field.name, id = %variable, "discovered annotated field");
                fields.push(DiscoveredField {
                    symbol: *variable,
                    owner: field.owner,
                    range: declaration.range,
                });
            }
        }
    }

    tracing::debug!(count = fields.len(), "field discovery complete");
    fields
}
