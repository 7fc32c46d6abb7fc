//! Property tests for export synthesis.
//!
//! Any JSON record whose top-level keys are identifiers must export to a
//! valid ES module whose initializers evaluate back to the original values.

use fob_mdx_frontmatter::{ExportDeclaration, Expression, check_module};
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPatternKind, Declaration, Expression as JsExpression, ObjectPropertyKind, PropertyKey,
    Statement, UnaryOperator,
};
use oxc_parser::Parser;
use oxc_span::SourceType;
use proptest::prelude::*;
use serde_json::{Map, Number, Value, json};

/// Parse `code` and evaluate every `export const` initializer
///
/// Returns `None` if the module does not parse, or if anything other than
/// literal `export const` bindings appears.
fn evaluate_exports(code: &str) -> Option<Map<String, Value>> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, SourceType::mjs()).parse();
    if !ret.errors.is_empty() {
        return None;
    }

    let mut bindings = Map::new();
    for statement in &ret.program.body {
        let Statement::ExportNamedDeclaration(export) = statement else {
            return None;
        };
        let Some(Declaration::VariableDeclaration(var)) = &export.declaration else {
            return None;
        };
        for declarator in &var.declarations {
            let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind else {
                return None;
            };
            let value = evaluate(code, declarator.init.as_ref()?)?;
            bindings.insert(ident.name.to_string(), value);
        }
    }
    Some(bindings)
}

/// Evaluate a literal expression into JSON
fn evaluate(code: &str, expr: &JsExpression<'_>) -> Option<Value> {
    match expr {
        JsExpression::NullLiteral(_) => Some(Value::Null),
        JsExpression::BooleanLiteral(lit) => Some(Value::Bool(lit.value)),
        JsExpression::NumericLiteral(lit) => {
            number(&code[lit.span.start as usize..lit.span.end as usize])
        }
        JsExpression::UnaryExpression(unary)
            if matches!(unary.operator, UnaryOperator::UnaryNegation) =>
        {
            let JsExpression::NumericLiteral(lit) = &unary.argument else {
                return None;
            };
            number(&format!("-{}", &code[lit.span.start as usize..lit.span.end as usize]))
        }
        JsExpression::StringLiteral(lit) => Some(Value::String(lit.value.to_string())),
        JsExpression::ArrayExpression(array) => array
            .elements
            .iter()
            .map(|element| evaluate(code, element.as_expression()?))
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        JsExpression::ObjectExpression(object) => {
            let mut map = Map::new();
            for property in &object.properties {
                let ObjectPropertyKind::ObjectProperty(property) = property else {
                    return None;
                };
                let key = match &property.key {
                    PropertyKey::StaticIdentifier(ident) if !property.computed => {
                        ident.name.to_string()
                    }
                    PropertyKey::StringLiteral(lit) => lit.value.to_string(),
                    _ => return None,
                };
                map.insert(key, evaluate(code, &property.value)?);
            }
            Some(Value::Object(map))
        }
        _ => None,
    }
}

/// Read a numeric literal back from its source text
///
/// Integers go through `i64` so large values keep full precision.
fn number(text: &str) -> Option<Value> {
    if text.contains(['.', 'e', 'E']) {
        Number::from_f64(text.parse().ok()?).map(Value::Number)
    } else {
        text.parse::<i64>().ok().map(|n| Value::Number(n.into()))
    }
}

/// Strategy for arbitrary JSON values, a few levels deep
fn json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        (-1.0e9f64..1.0e9).prop_map(|f| Number::from_f64(f).map_or(Value::Null, Value::Number)),
        ".{0,12}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((".{0,8}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Strategy for records whose top-level keys are valid identifiers
fn record_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-z_$][a-zA-Z0-9_$]{0,8}_", json_strategy()), 1..8)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: converting to an expression and back is lossless
    #[test]
    fn prop_expression_round_trip(value in json_strategy()) {
        prop_assert_eq!(Expression::from_value(&value).to_value(), value);
    }

    /// Property: declarators re-evaluate to the record, in key order
    #[test]
    fn prop_declaration_round_trip(record in record_strategy()) {
        let declaration = ExportDeclaration::from_record(&record).unwrap();

        let mut rebuilt = Map::new();
        for declarator in &declaration.declarators {
            rebuilt.insert(declarator.id.clone(), declarator.init.to_value());
        }

        let keys: Vec<&str> = record.as_object().unwrap().keys().map(String::as_str).collect();
        prop_assert_eq!(declaration.names().collect::<Vec<_>>(), keys);
        prop_assert_eq!(Value::Object(rebuilt), record);
    }

    /// Property: the rendered module evaluates back to the record
    #[test]
    fn prop_rendered_export_evaluates_to_record(record in record_strategy()) {
        let code = ExportDeclaration::from_record(&record).unwrap().to_js();
        let evaluated = evaluate_exports(&code).map(Value::Object);
        prop_assert_eq!(evaluated, Some(record), "module: {}", code);
    }

    /// Property: synthesized exports always parse as ES modules
    #[test]
    fn prop_export_is_valid_module(record in record_strategy()) {
        let code = ExportDeclaration::from_record(&record).unwrap().to_js();
        prop_assert!(check_module(&code).is_ok(), "invalid module: {}", code);
    }
}

#[test]
fn rendered_export_keeps_escapes_and_special_keys() {
    let record = json!({
        "meta": {
            "__proto__": { "polluted": true },
            "og:image": "line\u{2028}sep \"quoted\" back\\slash\u{0}",
            "class": [-5, 1e-7, 2.5, i64::MIN, null],
        },
        "undefined_": "",
    });

    let code = ExportDeclaration::from_record(&record).unwrap().to_js();
    assert_eq!(evaluate_exports(&code).map(Value::Object), Some(record));
}
