//! Property value translation between canonical and raw schema names.
//!
//! Applies the default-value precedence and numeric coercion used at runtime
//! when property maps cross the provider boundary.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use tfgen_core::terraform_to_pulumi_name;
use tfgen_schema::{Element, FieldSchema, ObjectSchema, SchemaInfo, ValueKind};

/// Where environment variables are read from.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Canonical property name for a schema key.
pub fn property_name(key: &str, info: Option<&SchemaInfo>) -> String {
    match info.and_then(|i| i.name.as_deref()) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => terraform_to_pulumi_name(key),
    }
}

/// Coerce JSON numbers for a field of the given kind.
///
/// Numbers become integers unless the kind is float.
pub fn coerce_number(value: &Value, kind: ValueKind) -> Value {
    let Value::Number(number) = value else {
        return value.clone();
    };
    if kind == ValueKind::Float {
        return number
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| value.clone());
    }
    if let Some(int) = number.as_i64() {
        return Value::from(int);
    }
    match number.as_f64() {
        Some(float) => Value::from(float as i64),
        None => value.clone(),
    }
}

/// Parse an environment variable value for a field of the given kind.
///
/// Unparsable values count as unset.
pub fn parse_env_value(raw: &str, kind: ValueKind) -> Option<Value> {
    match kind {
        ValueKind::Bool => match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(Value::Bool(true)),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(Value::Bool(false)),
            _ => None,
        },
        ValueKind::Int => raw.trim().parse::<i64>().ok().map(Value::from),
        ValueKind::Float => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        _ => Some(Value::String(raw.to_string())),
    }
}

/// Decide the value of one field.
///
/// A present new value wins. Otherwise an old value wins when the field has
/// any default. Otherwise the override default applies (first set env var,
/// then the literal, then the function), then the schema default unless the
/// field is deprecated.
pub fn resolve_default(
    field: &FieldSchema,
    info: Option<&SchemaInfo>,
    old: Option<&Value>,
    new: Option<&Value>,
    props: &Map<String, Value>,
    env: &dyn EnvSource,
) -> Option<Value> {
    let kind = field.value_kind();
    if let Some(value) = new {
        return Some(coerce_number(value, kind));
    }

    let override_default = info.and_then(|i| i.default.as_ref());
    if let Some(old) = old
        && (override_default.is_some() || field.default.is_some())
    {
        return Some(old.clone());
    }

    if let Some(default) = override_default {
        for name in &default.env_vars {
            if let Some(value) = env.var(name).and_then(|raw| parse_env_value(&raw, kind)) {
                return Some(value);
            }
        }
        if let Some(value) = &default.value {
            return Some(coerce_number(value, kind));
        }
        if let Some(value) = default.from.as_ref().and_then(|f| f.call(props)) {
            return Some(value);
        }
    }

    if field.deprecated.is_none() {
        return field.default.as_ref().map(|v| coerce_number(v, kind));
    }
    None
}

/// Translate a canonical property map into raw schema keys, applying
/// defaults and coercing numbers.
pub fn make_terraform_inputs(
    news: &Map<String, Value>,
    olds: Option<&Map<String, Value>>,
    schema: &ObjectSchema,
    infos: &BTreeMap<String, SchemaInfo>,
    env: &dyn EnvSource,
) -> Map<String, Value> {
    make_inputs_with(news, olds, schema, &|key| infos.get(key), env)
}

fn make_inputs_with<'a>(
    news: &Map<String, Value>,
    olds: Option<&Map<String, Value>>,
    schema: &ObjectSchema,
    info_for: &dyn Fn(&str) -> Option<&'a SchemaInfo>,
    env: &dyn EnvSource,
) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, field) in schema {
        if field.is_removed() {
            continue;
        }
        let info = info_for(key);
        let name = property_name(key, info);
        let new = news.get(&name);
        let old = olds.and_then(|o| o.get(&name));

        let Some(value) = resolve_default(field, info, old, new, news, env) else {
            continue;
        };
        let value = translate_input(&value, field, info, old, env);
        result.insert(key.clone(), value);
    }
    result
}

fn translate_input(
    value: &Value,
    field: &FieldSchema,
    info: Option<&SchemaInfo>,
    old: Option<&Value>,
    env: &dyn EnvSource,
) -> Value {
    match (field.kind.element(), value) {
        (Some(Element::Object(fields)), Value::Object(map)) => {
            let olds = old.and_then(Value::as_object);
            Value::Object(make_inputs_with(map, olds, fields, &|k| info.and_then(|i| i.field(k)), env))
        }
        (Some(Element::Object(fields)), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(make_inputs_with(
                        map,
                        None,
                        fields,
                        &|k| info.and_then(|i| i.field(k)),
                        env,
                    )),
                    other => other.clone(),
                })
                .collect(),
        ),
        (Some(Element::Field(elem)), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| coerce_number(item, elem.value_kind()))
                .collect(),
        ),
        (Some(Element::Field(elem)), Value::Object(map)) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), coerce_number(v, elem.value_kind())))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Translate a raw-keyed state map into canonical names, coercing numbers.
///
/// Keys without a schema field are dropped.
pub fn make_terraform_outputs(
    raw: &Map<String, Value>,
    schema: &ObjectSchema,
    infos: &BTreeMap<String, SchemaInfo>,
) -> Map<String, Value> {
    make_outputs_with(raw, schema, &|key| infos.get(key))
}

fn make_outputs_with<'a>(
    raw: &Map<String, Value>,
    schema: &ObjectSchema,
    info_for: &dyn Fn(&str) -> Option<&'a SchemaInfo>,
) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, value) in raw {
        let Some(field) = schema.get(key) else {
            continue;
        };
        let info = info_for(key);
        let value = match (field.kind.element(), value) {
            (Some(Element::Object(fields)), Value::Object(map)) => {
                Value::Object(make_outputs_with(map, fields, &|k| info.and_then(|i| i.field(k))))
            }
            (Some(Element::Object(fields)), Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Object(map) => Value::Object(make_outputs_with(
                            map,
                            fields,
                            &|k| info.and_then(|i| i.field(k)),
                        )),
                        other => other.clone(),
                    })
                    .collect(),
            ),
            (Some(Element::Field(elem)), Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .map(|item| coerce_number(item, elem.value_kind()))
                    .collect(),
            ),
            _ => coerce_number(value, field.value_kind()),
        };
        result.insert(property_name(key, info), value);
    }
    result
}
