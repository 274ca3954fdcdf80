use askama::Template;
use tracing::trace;

use crate::generator::invocation::RenderContext;
use crate::utils::{
    helpers,
    naming::{
        backing_method, constant_name, from_func, invalid_error, names_table, parse_func,
        receiver_name, values_func,
    },
};
use crate::{EnumKind, GeneratorError};

#[derive(Template, Debug)]
#[template(path = "go/enum_str.j2", escape = "none")]
pub struct GoStringEnumTemplate<'a> {
    pub command_line: &'a str,
    pub name: &'a str,
    pub values: &'a [String],
    pub empty_valid: bool,
    pub receiver: String,
    pub parse_fn: String,
    pub values_fn: String,
    pub err_invalid: String,
    /// Column of the type name in the const block, so output is gofmt-clean.
    pub width: usize,
}

impl<'a> GoStringEnumTemplate<'a> {
    pub fn new(
        command_line: &'a str,
        name: &'a str,
        values: &'a [String],
        empty_valid: bool,
    ) -> Self {
        GoStringEnumTemplate {
            command_line,
            name,
            values,
            empty_valid,
            receiver: receiver_name(name),
            parse_fn: parse_func(name),
            values_fn: values_func(name),
            err_invalid: invalid_error(name),
            width: values
                .iter()
                .map(|value| constant_name(value).chars().count())
                .fold(0, helpers::max),
        }
    }
}

#[derive(Template, Debug)]
#[template(path = "go/enum_int.j2", escape = "none")]
pub struct GoIntEnumTemplate<'a> {
    pub command_line: &'a str,
    pub name: &'a str,
    pub values: &'a [String],
    pub empty_valid: bool,
    pub backing: &'a str,
    pub receiver: String,
    pub parse_fn: String,
    pub values_fn: String,
    pub err_invalid: String,
    pub names_table: String,
    /// Emit the `<Backing>()` method and `<Enum>From<Backing>()` constructor.
    pub conversions: bool,
    pub backing_method: String,
    pub from_fn: String,
}

impl<'a> GoIntEnumTemplate<'a> {
    pub fn new(
        command_line: &'a str,
        name: &'a str,
        values: &'a [String],
        empty_valid: bool,
        kind: &'a EnumKind,
    ) -> Self {
        let backing = kind.go_type();
        GoIntEnumTemplate {
            command_line,
            name,
            values,
            empty_valid,
            backing,
            receiver: receiver_name(name),
            parse_fn: parse_func(name),
            values_fn: values_func(name),
            err_invalid: invalid_error(name),
            names_table: names_table(name),
            conversions: kind.has_explicit_backing(),
            backing_method: backing_method(backing),
            from_fn: from_func(name, backing),
        }
    }
}

/// Renders the Go source for `context` with the template matching its kind.
pub fn render(context: &RenderContext<'_>) -> Result<String, GeneratorError> {
    trace!("Rendering {} enum {}", context.kind, context.enum_name);

    let mut code = match context.kind {
        EnumKind::String => GoStringEnumTemplate::new(
            context.command_line,
            context.enum_name,
            context.values,
            context.allow_empty,
        )
        .render()?,
        EnumKind::Int { .. } => GoIntEnumTemplate::new(
            context.command_line,
            context.enum_name,
            context.values,
            context.allow_empty,
            context.kind,
        )
        .render()?,
    };

    if !code.ends_with('\n') {
        code.push('\n');
    }
    Ok(code)
}

/// Template filters. Lowercase and uppercase come from askama's built-in
/// `lower` and `upper`.
pub mod filters {
    use std::{borrow::Borrow, fmt::Display};

    use crate::utils::helpers;

    pub fn capitalize_first<T: Display>(s: T) -> ::askama::Result<String> {
        Ok(helpers::capitalize(&s.to_string()))
    }

    pub fn combine<T: Display, U: Display>(a: T, b: U) -> ::askama::Result<String> {
        Ok(helpers::combine(&a.to_string(), &b.to_string()))
    }

    pub fn max<A: Borrow<usize>, B: Borrow<usize>>(a: A, b: B) -> ::askama::Result<usize> {
        Ok(helpers::max(*a.borrow(), *b.borrow()))
    }

    pub fn first_char<T: Display>(s: T) -> ::askama::Result<String> {
        Ok(helpers::first_char(&s.to_string()))
    }

    pub fn go_quote<T: Display>(s: T) -> ::askama::Result<String> {
        Ok(helpers::go_quote(&s.to_string()))
    }

    pub fn align<T: Display, W: Borrow<usize>>(s: T, width: W) -> ::askama::Result<String> {
        Ok(helpers::align(&s.to_string(), *width.borrow()))
    }
}
