//! Per-field property derivation and rendering.

use crate::base::Name;
use crate::core::text_utils::upper_first;
use crate::model::FieldSymbol;

use super::attribute::{EqualityPolicy, MarkerArguments, VisibilityLevel};
use super::outcome::SkipReason;
use super::writer::SourceWriter;

/// Qualified name of the event handler type declared on owners that do not
/// implement the notification interface themselves.
pub const EVENT_HANDLER_TYPE: &str = "System.ComponentModel.PropertyChangedEventHandler";
/// Qualified name of the event argument type.
pub const EVENT_ARGS_TYPE: &str = "System.ComponentModel.PropertyChangedEventArgs";
/// Name of the notification event member.
pub const EVENT_NAME: &str = "PropertyChanged";

/// Everything needed to render one property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: Name,
    pub field_name: Name,
    pub ty: Name,
    /// Declared visibility: the higher of getter and setter.
    pub visibility: VisibilityLevel,
    /// Explicit getter modifier, only when below `visibility`.
    pub getter: Option<VisibilityLevel>,
    /// Explicit setter modifier, only when below `visibility`.
    pub setter: Option<VisibilityLevel>,
    pub equality: EqualityPolicy,
}

/// Derive the property name for `field_name`.
///
/// An override is used verbatim. Otherwise leading underscores are removed
/// and the first remaining character is upper-cased.
pub fn property_name(field_name: &str, override_name: Option<&str>) -> Result<Name, SkipReason> {
    let name: Name = match override_name {
        Some(name) => name.into(),
        None => upper_first(field_name.trim_start_matches('_')).into(),
    };

    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }
    if name == field_name {
        return Err(SkipReason::NameCollision);
    }
    Ok(name)
}

/// Split getter/setter levels into the declared level plus the accessor
/// modifiers that must be written explicitly.
pub fn accessor_visibility(
    getter: VisibilityLevel,
    setter: VisibilityLevel,
) -> (VisibilityLevel, Option<VisibilityLevel>, Option<VisibilityLevel>) {
    let max = getter.max(setter);
    let explicit = |level: VisibilityLevel| (level < max).then_some(level);
    (max, explicit(getter), explicit(setter))
}

impl PropertySpec {
    pub fn derive(field: &FieldSymbol, args: &MarkerArguments) -> Result<Self, SkipReason> {
        let name = property_name(&field.name, args.property_name.as_deref())?;
        let (visibility, getter, setter) = accessor_visibility(args.getter, args.setter);
        Ok(Self {
            name,
            field_name: field.name.clone(),
            ty: field.ty.clone(),
            visibility,
            getter,
            setter,
            equality: args.equality,
        })
    }

    pub fn render(&self, w: &mut SourceWriter) {
        w.open(format!("{} {} {}", self.visibility, self.ty, self.name));

        w.open(accessor_header(self.getter, "get"));
        w.line(format!("return this.{};", self.field_name));
        w.close();

        w.open(accessor_header(self.setter, "set"));
        match self.equality.comparison() {
            Some(comparison) => {
                w.open(format!("if (!{}(this.{}, value))", comparison, self.field_name));
                self.render_assignment(w);
                w.close();
            }
            None => self.render_assignment(w),
        }
        w.close();

        w.close();
    }

    fn render_assignment(&self, w: &mut SourceWriter) {
        w.line(format!("this.{} = value;", self.field_name));
        w.line(format!(
            "this.{}?.Invoke(this, new {}(nameof({})));",
            EVENT_NAME, EVENT_ARGS_TYPE, self.name
        ));
    }
}

fn accessor_header(modifier: Option<VisibilityLevel>, keyword: &str) -> String {
    match modifier {
        Some(level) => format!("{} {}", level, keyword),
        None => keyword.to_string(),
    }
}
