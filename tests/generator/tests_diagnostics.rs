//! Skip reporting under each diagnostic policy.

use crate::helpers::compilation_fixtures::*;
use crate::helpers::output_assertions::*;
use autonotify::diagnostics::codes;
use autonotify::generator::bootstrap::{PROPERTY_NAME_ARG, SETTER_VISIBILITY_ARG};
use autonotify::model::{
    AttributeData, Compilation, FieldDeclaration, FieldSymbol, OtherSymbol, Symbol, TypeKind,
    TypeSymbol,
};
use autonotify::{
    DiagnosticPolicy, GeneratorOptions, Severity, SkipReason, SymbolId, TextRange, TextSize,
};

// =============================================================================
// HELPERS
// =============================================================================

/// One good field, one `_` field, and a type nested inside a method.
fn mixed_compilation() -> (Compilation, SymbolId, SymbolId, SymbolId) {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let owner = f.class("Model", ns);
    let good = f.marked_field("_good", "int", owner);
    let blank = f.marked_field("_", "int", owner);
    let method = f.builder.add_other(OtherSymbol::new("Run", owner));
    let local = f.class("Local", method);
    f.marked_field("_value", "int", local);
    (f.build(), good, blank, local)
}

fn codes_of(output: &autonotify::GeneratorOutput) -> Vec<&'static str> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

// =============================================================================
// POLICIES
// =============================================================================

#[test]
fn test_silent_policy_reports_nothing() {
    let (compilation, good, blank, local) = mixed_compilation();
    let output = generate(&compilation);

    assert!(output.diagnostics.is_empty());
    assert_generated(&output, good);
    assert_skipped(&output, blank, SkipReason::EmptyName);
    assert_skipped(
        &output,
        local,
        SkipReason::UnsupportedContainer(autonotify::model::SymbolKind::Other),
    );
}

#[test]
fn test_warn_policy_reports_each_skip() {
    let (compilation, _, blank, local) = mixed_compilation();
    let output = generate_with(
        &compilation,
        GeneratorOptions::default().with_diagnostic_policy(DiagnosticPolicy::Warn),
    );

    assert_eq!(
        codes_of(&output),
        vec![codes::EMPTY_PROPERTY_NAME, codes::UNSUPPORTED_CONTAINER]
    );
    assert!(output.diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert_eq!(output.diagnostics[0].symbol, blank);
    let skipped: Vec<_> = output.skipped().map(|o| o.symbol).collect();
    assert_eq!(skipped, vec![blank, local]);
    assert_eq!(
        output.outcome(blank).and_then(|o| o.skip_reason()),
        Some(&SkipReason::EmptyName)
    );
    assert_eq!(output.diagnostics[1].symbol, local);
    assert!(output.diagnostics[1].message.contains("Local"));
}

#[test]
fn test_error_policy_never_aborts_the_pass() {
    let (compilation, good, _, _) = mixed_compilation();
    let output = generate_with(
        &compilation,
        GeneratorOptions::default().with_diagnostic_policy(DiagnosticPolicy::Error),
    );

    assert_eq!(output.diagnostics.len(), 2);
    assert!(output.diagnostics.iter().all(|d| d.severity == Severity::Error));
    assert_generated(&output, good);
    assert!(fragment(&output, "Model.App_autoNotify.cs").contains("public int Good\n"));
}

#[test]
fn test_enum_container_reported_as_unsupported_kind() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let flags = f.builder.add_type(TypeSymbol::new("Flags", TypeKind::Enum, ns));
    let nested = f.class("Nested", flags);
    f.marked_field("_x", "int", nested);
    let compilation = f.build();

    let output = generate_with(
        &compilation,
        GeneratorOptions::default().with_diagnostic_policy(DiagnosticPolicy::Warn),
    );
    assert_skipped(&output, nested, SkipReason::UnsupportedTypeKind(TypeKind::Enum));
    assert_eq!(codes_of(&output), vec![codes::UNSUPPORTED_TYPE_KIND]);
    assert_eq!(hint_names(&output).len(), 1);
}

// =============================================================================
// LINTS
// =============================================================================

#[test]
fn test_unusable_argument_is_linted_under_warn() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let owner = f.class("Model", ns);
    f.field_with("_name", "string", owner, &[(SETTER_VISIBILITY_ARG, 42_i64.into())]);
    let compilation = f.build();

    let silent = generate(&compilation);
    assert!(silent.diagnostics.is_empty());

    let warned = generate_with(
        &compilation,
        GeneratorOptions::default().with_diagnostic_policy(DiagnosticPolicy::Error),
    );
    assert_eq!(codes_of(&warned), vec![codes::INVALID_ARGUMENT]);
    // lints stay warnings even under the error policy
    assert_eq!(warned.diagnostics[0].severity, Severity::Warning);
    assert!(warned.diagnostics[0].message.contains(SETTER_VISIBILITY_ARG));
}

#[test]
fn test_property_name_validation_is_opt_in() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let owner = f.class("Model", ns);
    f.field_with("_name", "string", owner, &[(PROPERTY_NAME_ARG, "1st".into())]);
    let compilation = f.build();

    let options = GeneratorOptions::default().with_diagnostic_policy(DiagnosticPolicy::Warn);
    assert!(generate_with(&compilation, options.clone()).diagnostics.is_empty());

    let output = generate_with(&compilation, options.with_property_name_validation(true));
    assert_eq!(codes_of(&output), vec![codes::INVALID_IDENTIFIER]);
    assert!(fragment(&output, "Model.App_autoNotify.cs").contains("public string 1st\n"));
}

#[test]
fn test_diagnostic_carries_declaration_range() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let owner = f.class("Model", ns);
    let id = SymbolId::new(500);
    let marker = f.markers.attribute;
    f.builder
        .insert(
            id,
            Symbol::Field(FieldSymbol::new("_", "int", owner).with_attribute(AttributeData::new(marker))),
        )
        .unwrap();
    let range = TextRange::new(TextSize::from(12), TextSize::from(40));
    f.builder
        .push_declaration(FieldDeclaration::new(vec![id], 1).with_range(range));
    let compilation = f.build();

    let output = generate_with(
        &compilation,
        GeneratorOptions::default().with_diagnostic_policy(DiagnosticPolicy::Warn),
    );
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].range, Some(range));
    assert_eq!(output.diagnostics[0].symbol, id);
}
