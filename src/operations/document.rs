//! Document building and field selection.
//!
//! An [`OperationDescriptor`](super::OperationDescriptor) describes an
//! operation declaratively. [`Document::build`] turns it into the text sent
//! to the server, using either the descriptor's own selection or a
//! caller-chosen list of field names.
//!
//! Variables are declared only when the rendered text references them. A
//! field argument such as `free_balance_quoted(quote_currency_id: ...)`
//! contributes its variable only if that field is actually selected, so a
//! required sub-argument is never sent against a document that does not use it.

use std::fmt::Write as _;

use serde_json::{Map, Value};

use super::OperationDescriptor;

/// Whether an operation reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// A read-only `query`.
    Query,
    /// A state-changing `mutation`.
    Mutation,
}

impl OperationKind {
    /// Returns the GraphQL keyword for this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// A declared document variable: `$name: WireType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    /// Variable name, without the `$`.
    pub name: &'static str,
    /// GraphQL input type, e.g. `String!` or `[RecordTransactionItem!]!`.
    pub wire_type: &'static str,
}

impl Param {
    /// Creates a new parameter.
    #[must_use]
    pub const fn new(name: &'static str, wire_type: &'static str) -> Self {
        Self { name, wire_type }
    }
}

/// A field argument bound to a variable: `name: $param`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Argument {
    /// Argument name as the schema spells it.
    pub name: &'static str,
    /// The variable supplying the value.
    pub param: Param,
}

impl Argument {
    /// An argument whose variable has the same name.
    #[must_use]
    pub const fn new(name: &'static str, wire_type: &'static str) -> Self {
        Self {
            name,
            param: Param::new(name, wire_type),
        }
    }

    /// An argument fed by a differently named variable.
    #[must_use]
    pub const fn bound(name: &'static str, param: Param) -> Self {
        Self { name, param }
    }
}

/// One entry of a selection set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: &'static str,
    /// Arguments rendered after the name.
    pub arguments: &'static [Argument],
    /// Sub-selection; empty for scalar fields.
    pub fields: &'static [Field],
}

impl Field {
    /// A scalar field.
    #[must_use]
    pub const fn leaf(name: &'static str) -> Self {
        Self {
            name,
            arguments: &[],
            fields: &[],
        }
    }

    /// An object field with its own selection set.
    #[must_use]
    pub const fn object(name: &'static str, fields: &'static [Field]) -> Self {
        Self {
            name,
            arguments: &[],
            fields,
        }
    }

    /// Returns this field with `arguments` attached.
    #[must_use]
    pub const fn with_arguments(self, arguments: &'static [Argument]) -> Self {
        Self {
            name: self.name,
            arguments,
            fields: self.fields,
        }
    }
}

/// A selection entry chosen by the caller, resolved against the descriptor.
enum Selected<'a> {
    Known(&'static Field),
    Raw(&'a str),
}

/// A rendered GraphQL document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    text: String,
    params: Vec<Param>,
}

impl Document {
    /// Renders `descriptor` with its fixed selection.
    #[must_use]
    pub fn build(descriptor: &OperationDescriptor) -> Self {
        Self::build_with_fields::<&str>(descriptor, &[])
    }

    /// Renders `descriptor` selecting exactly `fields`, in the given order.
    ///
    /// Names matching a field of the descriptor's fixed selection are
    /// rendered with that field's arguments and sub-selection. Other names
    /// are rendered verbatim if they are valid GraphQL names and skipped
    /// otherwise. Blank names are skipped, and an empty list falls back to
    /// the fixed selection.
    #[must_use]
    pub fn build_with_fields<S: AsRef<str>>(descriptor: &OperationDescriptor, fields: &[S]) -> Self {
        let selected: Vec<Selected<'_>> = fields
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .map(|name| {
                descriptor
                    .selection
                    .iter()
                    .find(|field| field.name == name)
                    .map_or(Selected::Raw(name), Selected::Known)
            })
            .filter(|entry| match entry {
                Selected::Raw(name) if !is_name(name) => {
                    tracing::warn!(field = %name, "Skipping invalid field name in selection");
                    false
                }
                _ => true,
            })
            .collect();

        let selected = if selected.is_empty() {
            descriptor.selection.iter().map(Selected::Known).collect()
        } else {
            selected
        };

        let mut params: Vec<Param> = Vec::new();
        for argument in descriptor.arguments {
            declare(&mut params, argument.param);
        }
        for entry in &selected {
            if let Selected::Known(field) = entry {
                collect_params(field, &mut params);
            }
        }

        let mut text = String::from(descriptor.kind.keyword());
        if !params.is_empty() {
            let declarations: Vec<String> = params
                .iter()
                .map(|param| format!("${}: {}", param.name, param.wire_type))
                .collect();
            let _ = write!(text, " ({})", declarations.join(", "));
        }
        text.push_str(" {\n  ");
        text.push_str(descriptor.name);
        push_arguments(&mut text, descriptor.arguments);

        if !selected.is_empty() {
            text.push_str(" {\n");
            for entry in &selected {
                match entry {
                    Selected::Known(field) => push_field(&mut text, field, 2),
                    Selected::Raw(name) => {
                        let _ = writeln!(text, "    {name}");
                    }
                }
            }
            text.push_str("  }");
        }
        text.push_str("\n}");

        Self { text, params }
    }

    /// Returns the document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the declared variables, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Returns `true` if the document declares `$name`.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.params.iter().any(|param| param.name == name)
    }

    /// Keeps only the variables this document declares.
    ///
    /// Returns `None` when the document declares no variables at all, so
    /// parameterless operations are sent without a `variables` key.
    #[must_use]
    pub fn bind(&self, mut variables: Map<String, Value>) -> Option<Map<String, Value>> {
        if self.params.is_empty() {
            return None;
        }

        let undeclared: Vec<String> = variables
            .keys()
            .filter(|name| !self.declares(name))
            .cloned()
            .collect();
        if !undeclared.is_empty() {
            tracing::debug!(
                "Dropping variables not referenced by the document: {}",
                undeclared.join(", ")
            );
            for name in &undeclared {
                variables.remove(name);
            }
        }
        Some(variables)
    }

    /// Consumes the document, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

fn declare(params: &mut Vec<Param>, param: Param) {
    if !params.iter().any(|existing| existing.name == param.name) {
        params.push(param);
    }
}

fn collect_params(field: &Field, params: &mut Vec<Param>) {
    for argument in field.arguments {
        declare(params, argument.param);
    }
    for child in field.fields {
        collect_params(child, params);
    }
}

fn push_arguments(text: &mut String, arguments: &[Argument]) {
    if arguments.is_empty() {
        return;
    }
    let rendered: Vec<String> = arguments
        .iter()
        .map(|argument| format!("{}: ${}", argument.name, argument.param.name))
        .collect();
    let _ = write!(text, "({})", rendered.join(", "));
}

fn push_field(text: &mut String, field: &Field, depth: usize) {
    let indent = "  ".repeat(depth);
    text.push_str(&indent);
    text.push_str(field.name);
    push_arguments(text, field.arguments);

    if field.fields.is_empty() {
        text.push('\n');
        return;
    }

    text.push_str(" {\n");
    for child in field.fields {
        push_field(text, child, depth + 1);
    }
    text.push_str(&indent);
    text.push_str("}\n");
}

/// Matches the GraphQL `Name` grammar: `[_A-Za-z][_0-9A-Za-z]*`.
fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const QUOTED: Param = Param::new("quote_currency_id", "String!");

    static BALANCES: OperationDescriptor = OperationDescriptor {
        name: "accounts_balances",
        kind: OperationKind::Query,
        arguments: &[Argument::new("user_id", "String")],
        selection: &[
            Field::leaf("currency_id"),
            Field::leaf("total_balance"),
            Field::leaf("free_balance_quoted")
                .with_arguments(&[Argument::bound("quote_currency_id", QUOTED)]),
        ],
        defaults: Map::new,
    };

    static CHECKIN: OperationDescriptor = OperationDescriptor {
        name: "checkin",
        kind: OperationKind::Mutation,
        arguments: &[],
        selection: &[],
        defaults: Map::new,
    };

    static NESTED: OperationDescriptor = OperationDescriptor {
        name: "create_account_transaction",
        kind: OperationKind::Mutation,
        arguments: &[Argument::new("items", "[RecordTransactionItem!]!")],
        selection: &[
            Field::leaf("parent_transaction_id"),
            Field::object(
                "account_transactions",
                &[Field::leaf("amount"), Field::leaf("type")],
            ),
        ],
        defaults: Map::new,
    };

    #[test]
    fn test_fixed_selection_renders_full_document() {
        let document = Document::build(&BALANCES);

        assert_eq!(
            document.text(),
            "query ($user_id: String, $quote_currency_id: String!) {\n  \
             accounts_balances(user_id: $user_id) {\n    \
             currency_id\n    \
             total_balance\n    \
             free_balance_quoted(quote_currency_id: $quote_currency_id)\n  \
             }\n}"
        );
        assert!(document.declares("quote_currency_id"));
    }

    #[test]
    fn test_scalar_mutation_without_params() {
        let document = Document::build(&CHECKIN);
        assert_eq!(document.text(), "mutation {\n  checkin\n}");
        assert!(document.params().is_empty());
    }

    #[test]
    fn test_nested_selection_is_indented() {
        let document = Document::build(&NESTED);
        assert_eq!(
            document.text(),
            "mutation ($items: [RecordTransactionItem!]!) {\n  \
             create_account_transaction(items: $items) {\n    \
             parent_transaction_id\n    \
             account_transactions {\n      \
             amount\n      \
             type\n    \
             }\n  \
             }\n}"
        );
    }

    #[test]
    fn test_custom_fields_render_in_caller_order_only() {
        let document = Document::build_with_fields(&BALANCES, &["total_balance", "currency_id"]);

        assert_eq!(
            document.text(),
            "query ($user_id: String) {\n  \
             accounts_balances(user_id: $user_id) {\n    \
             total_balance\n    \
             currency_id\n  \
             }\n}"
        );
    }

    #[test]
    fn test_unknown_fields_render_verbatim_in_order() {
        let document = Document::build_with_fields(&BALANCES, &["a", "b", "c"]);
        let body: Vec<&str> = document
            .text()
            .lines()
            .skip(2)
            .take(3)
            .map(str::trim)
            .collect();
        assert_eq!(body, vec!["a", "b", "c"]);
        assert!(!document.text().contains("currency_id"));
    }

    #[test]
    fn test_invalid_field_names_are_skipped() {
        let document =
            Document::build_with_fields(&BALANCES, &["currency_id", "a } mutation { x", "1st", "_ok"]);
        let body: Vec<&str> = document
            .text()
            .lines()
            .skip(2)
            .take(2)
            .map(str::trim)
            .collect();

        assert_eq!(body, vec!["currency_id", "_ok"]);
        assert!(!document.text().contains("mutation"));
        assert!(!document.text().contains("1st"));
    }

    #[test]
    fn test_only_invalid_names_fall_back_to_fixed_selection() {
        let document = Document::build_with_fields(&BALANCES, &["x { y }", "a-b"]);
        assert_eq!(document, Document::build(&BALANCES));
    }

    #[test]
    fn test_is_name() {
        assert!(is_name("free_balance"));
        assert!(is_name("_typename2"));
        assert!(!is_name("2fa"));
        assert!(!is_name("a b"));
        assert!(!is_name("é"));
        assert!(!is_name(""));
    }

    #[test]
    fn test_sub_argument_declared_only_when_field_selected() {
        let without = Document::build_with_fields(&BALANCES, &["currency_id"]);
        assert!(!without.declares("quote_currency_id"));
        assert!(!without.text().contains("$quote_currency_id"));

        let with = Document::build_with_fields(&BALANCES, &["currency_id", "free_balance_quoted"]);
        assert!(with.declares("quote_currency_id"));
        assert!(with
            .text()
            .contains("free_balance_quoted(quote_currency_id: $quote_currency_id)"));
    }

    #[test]
    fn test_empty_or_blank_field_list_uses_fixed_selection() {
        let fixed = Document::build(&BALANCES);
        assert_eq!(Document::build_with_fields::<&str>(&BALANCES, &[]), fixed);
        assert_eq!(Document::build_with_fields(&BALANCES, &["  ", ""]), fixed);
    }

    #[test]
    fn test_bind_drops_undeclared_variables() {
        let document = Document::build_with_fields(&BALANCES, &["currency_id"]);
        let mut variables = Map::new();
        variables.insert("user_id".to_string(), json!("u1"));
        variables.insert("quote_currency_id".to_string(), json!(""));

        let bound = document.bind(variables).unwrap();
        assert_eq!(Value::Object(bound), json!({"user_id": "u1"}));
    }

    #[test]
    fn test_bind_without_params_sends_no_variables() {
        let document = Document::build(&CHECKIN);
        assert_eq!(document.bind(Map::new()), None);
    }

    #[test]
    fn test_bind_keeps_empty_object_when_params_declared() {
        let document = Document::build(&BALANCES);
        assert_eq!(document.bind(Map::new()), Some(Map::new()));
    }
}
