//! Fragment layout: keys, containment wrappers, event declaration.

use crate::helpers::compilation_fixtures::*;
use crate::helpers::output_assertions::*;
use autonotify::generator::BOOTSTRAP_HINT_NAME;
use autonotify::model::{AttributeData, FieldSymbol, TypeSymbol};

// =============================================================================
// FULL TEXT
// =============================================================================

#[test]
fn test_person_fragment_full_text() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let person = f.class("Person", ns);
    f.marked_field("_name", "string", person);
    f.marked_field("_age", "int", person);
    let compilation = f.build();

    let output = generate(&compilation);
    let expected = "\
#nullable enable
namespace App
{
    partial class Person : System.ComponentModel.INotifyPropertyChanged
    {
        public event System.ComponentModel.PropertyChangedEventHandler? PropertyChanged;

        public string Name
        {
            get
            {
                return this._name;
            }
            set
            {
                this._name = value;
                this.PropertyChanged?.Invoke(this, new System.ComponentModel.PropertyChangedEventArgs(nameof(Name)));
            }
        }

        public int Age
        {
            get
            {
                return this._age;
            }
            set
            {
                this._age = value;
                this.PropertyChanged?.Invoke(this, new System.ComponentModel.PropertyChangedEventArgs(nameof(Age)));
            }
        }
    }
}
";
    assert_eq!(fragment(&output, "Person.App_autoNotify.cs"), expected);
    assert_eq!(hint_names(&output), vec![BOOTSTRAP_HINT_NAME, "Person.App_autoNotify.cs"]);
}

#[test]
fn test_existing_notify_capability_gets_only_properties() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let vm = f.notifying_class("ViewModel", ns);
    f.marked_field("_title", "string", vm);
    let compilation = f.build();

    let output = generate(&compilation);
    let text = fragment(&output, "ViewModel.App_autoNotify.cs");
    assert_eq!(occurrences(text, "event "), 0);
    assert!(text.contains(
        "    partial class ViewModel : System.ComponentModel.INotifyPropertyChanged\n    {\n        public string Title\n"
    ));
}

// =============================================================================
// CONTAINMENT
// =============================================================================

#[test]
fn test_two_level_nesting_wraps_in_order() {
    let mut f = Fixture::new();
    let ns = f.namespace("App.Models");
    let outer = f.class("Outer", ns);
    let middle = f.class("Middle", outer);
    let inner = f.class("Inner", middle);
    f.marked_field("_x", "int", inner);
    let compilation = f.build();

    let output = generate(&compilation);
    let text = fragment(&output, "Inner.Middle.Outer.Models.App_autoNotify.cs");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(&lines[..8], &[
        "#nullable enable",
        "namespace App.Models",
        "{",
        "    partial class Outer",
        "    {",
        "        partial class Middle",
        "        {",
        "            partial class Inner : System.ComponentModel.INotifyPropertyChanged",
    ]);
    assert_eq!(&lines[lines.len() - 4..], &["            }", "        }", "    }", "}"]);
    assert_eq!(occurrences(text, "{"), occurrences(text, "}"));
}

#[test]
fn test_same_type_name_in_different_namespaces() {
    let mut f = Fixture::new();
    let a = f.namespace("Sales");
    let b = f.namespace("Billing");
    let first = f.class("Customer", a);
    let second = f.class("Customer", b);
    f.marked_field("_id", "int", first);
    f.marked_field("_id", "int", second);
    let compilation = f.build();

    let output = generate(&compilation);
    assert_eq!(
        hint_names(&output),
        vec![
            BOOTSTRAP_HINT_NAME,
            "Customer.Sales_autoNotify.cs",
            "Customer.Billing_autoNotify.cs",
        ]
    );
    assert!(fragment(&output, "Customer.Billing_autoNotify.cs").contains("namespace Billing\n"));
}

#[test]
fn test_generic_owner_key_and_header() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let cache = f
        .builder
        .add_type(TypeSymbol::class("Cache", ns).with_type_parameters(["TKey", "TValue"]));
    f.marked_field("_count", "int", cache);
    let compilation = f.build();

    let output = generate(&compilation);
    let text = fragment(&output, "Cache`2.App_autoNotify.cs");
    assert!(text.contains("partial class Cache<TKey, TValue> : "));
}

// =============================================================================
// DISCOVERY
// =============================================================================

#[test]
fn test_fields_group_per_owner_in_declaration_order() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let a = f.class("A", ns);
    let b = f.class("B", ns);
    f.marked_field("_one", "int", a);
    f.marked_field("_two", "int", b);
    f.marked_field("_three", "int", a);
    let compilation = f.build();

    let output = generate(&compilation);
    assert_eq!(
        hint_names(&output),
        vec![BOOTSTRAP_HINT_NAME, "A.App_autoNotify.cs", "B.App_autoNotify.cs"]
    );
    let text = fragment(&output, "A.App_autoNotify.cs");
    assert!(text.find("int One").unwrap() < text.find("int Three").unwrap());
    assert!(!text.contains("Two"));
}

#[test]
fn test_unmarked_fields_produce_nothing() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let plain = f.class("Plain", ns);
    f.plain_field("_name", "string", plain);
    let compilation = f.build();

    let output = generate(&compilation);
    assert_eq!(hint_names(&output), vec![BOOTSTRAP_HINT_NAME]);
    assert!(output.outcomes.is_empty());
}

#[test]
fn test_multi_variable_declaration() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let point = f.class("Point", ns);
    let marker = f.markers.attribute;
    f.builder.add_field_declaration(
        vec![
            FieldSymbol::new("_x", "int", point).with_attribute(AttributeData::new(marker)),
            FieldSymbol::new("_y", "int", point).with_attribute(AttributeData::new(marker)),
        ],
        1,
    );
    let compilation = f.build();

    let output = generate(&compilation);
    let text = fragment(&output, "Point.App_autoNotify.cs");
    assert!(text.contains("public int X\n"));
    assert!(text.contains("public int Y\n"));
    assert_eq!(output.generated_properties(), 2);
}

#[test]
fn test_declaration_without_attribute_lists_is_not_resolved() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    let ty = f.class("Partial", ns);
    let marker = f.markers.attribute;
    f.builder.add_field_declaration(
        vec![FieldSymbol::new("_x", "int", ty).with_attribute(AttributeData::new(marker))],
        0,
    );
    let compilation = f.build();

    assert_eq!(hint_names(&generate(&compilation)), vec![BOOTSTRAP_HINT_NAME]);
}

#[test]
fn test_passes_are_deterministic() {
    let mut f = Fixture::new();
    let ns = f.namespace("App");
    for name in ["A", "B", "C"] {
        let ty = f.class(name, ns);
        f.marked_field("_value", "int", ty);
        f.marked_field("_label", "string", ty);
    }
    let compilation = f.build();

    let first = generate(&compilation);
    let second = generate(&compilation);
    assert_eq!(first.sources, second.sources);
    assert_eq!(first.outcomes, second.outcomes);
}
