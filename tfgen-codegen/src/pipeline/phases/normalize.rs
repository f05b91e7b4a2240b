//! Normalize phase - pairs every schema field with its override.
//!
//! The output keeps the schema's shape: one [`NormalizedField`] per
//! non-removed field, in key order, each carrying the override that shadows
//! it. Schema items without an override are skipped with a warning, and
//! overrides that shadow nothing are reported once normalization finishes.

use std::collections::BTreeMap;

use eyre::Result;
use tfgen_schema::{DocInfo, Element, FieldSchema, ObjectSchema, SchemaInfo};

use crate::pipeline::{CompilationContext, Phase};

const PHASE: &str = "normalize";

/// One schema field with its override.
#[derive(Debug, Clone)]
pub struct NormalizedField {
    pub key: String,
    pub schema: FieldSchema,
    pub info: Option<SchemaInfo>,
    /// Normalized element of a list, set or map.
    pub element: Option<NormalizedElement>,
}

/// The element of a collection field.
#[derive(Debug, Clone)]
pub enum NormalizedElement {
    /// A single element schema, paired with the container's `element` override.
    Field(Box<NormalizedField>),
    /// A nested object, fields in key order.
    Object(Vec<NormalizedField>),
}

/// A resource or data source with its override.
#[derive(Debug, Clone)]
pub struct NormalizedItem {
    pub raw_name: String,
    /// Token from the override; empty means "derive from the raw name".
    pub tok: String,
    pub docs: DocInfo,
    pub delete_before_replace: bool,
    pub fields: Vec<NormalizedField>,
}

/// The whole provider after normalization.
#[derive(Debug, Clone, Default)]
pub struct NormalizedProvider {
    pub config: Vec<NormalizedField>,
    pub resources: Vec<NormalizedItem>,
    pub data_sources: Vec<NormalizedItem>,
}

/// Phase that pairs schema and override trees.
pub struct NormalizePhase;

impl Phase for NormalizePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Pair provider schema fields with their overrides"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut warnings = Vec::new();
        let normalized = normalize_provider(ctx, &mut warnings);
        for warning in warnings {
            ctx.add_warning(PHASE, warning);
        }
        tracing::debug!(
            config = normalized.config.len(),
            resources = normalized.resources.len(),
            data_sources = normalized.data_sources.len(),
            "normalized provider"
        );
        ctx.normalized = Some(normalized);
        Ok(())
    }
}

fn normalize_provider(ctx: &CompilationContext, warnings: &mut Vec<String>) -> NormalizedProvider {
    let doc = &ctx.document;
    let schema = &doc.provider;

    let config = normalize_object(&schema.config, |key| doc.config.get(key));
    check_overrides(&schema.config, &doc.config, "config", None, warnings);

    let mut resources = Vec::new();
    for (raw_name, fields) in &schema.resources {
        let Some(info) = doc.resources.get(raw_name) else {
            warnings.push(format!(
                "Resource {} not found in provider map; skipping",
                raw_name
            ));
            continue;
        };
        check_overrides(fields, &info.fields, "resource", Some(raw_name), warnings);
        resources.push(NormalizedItem {
            raw_name: raw_name.clone(),
            tok: info.tok.clone(),
            docs: info.docs.clone().unwrap_or_default(),
            delete_before_replace: info.delete_before_replace,
            fields: normalize_object(fields, |key| info.fields.get(key)),
        });
    }

    let mut data_sources = Vec::new();
    for (raw_name, fields) in &schema.data_sources {
        let Some(info) = doc.data_sources.get(raw_name) else {
            warnings.push(format!(
                "Data source {} not found in provider map; skipping",
                raw_name
            ));
            continue;
        };
        check_overrides(fields, &info.fields, "data source", Some(raw_name), warnings);
        data_sources.push(NormalizedItem {
            raw_name: raw_name.clone(),
            tok: info.tok.clone(),
            docs: info.docs.clone().unwrap_or_default(),
            delete_before_replace: false,
            fields: normalize_object(fields, |key| info.fields.get(key)),
        });
    }

    // Overrides that shadow nothing are reported after the main pass.
    for (raw_name, info) in &doc.resources {
        if !schema.resources.contains_key(raw_name) {
            warnings.push(format!(
                "Resource {} ({}) wasn't found in the Terraform module; possible name mismatch?",
                raw_name, info.tok
            ));
        }
    }
    for (raw_name, info) in &doc.data_sources {
        if !schema.data_sources.contains_key(raw_name) {
            warnings.push(format!(
                "Data source {} ({}) wasn't found in the Terraform module; possible name mismatch?",
                raw_name, info.tok
            ));
        }
    }

    NormalizedProvider {
        config,
        resources,
        data_sources,
    }
}

/// Normalize the non-removed fields of an object, in key order.
fn normalize_object<'a>(
    fields: &ObjectSchema,
    info_for: impl Fn(&str) -> Option<&'a SchemaInfo>,
) -> Vec<NormalizedField> {
    fields
        .iter()
        .filter(|(_, schema)| !schema.is_removed())
        .map(|(key, schema)| normalize_field(key, schema, info_for(key)))
        .collect()
}

/// Normalize one field, recursing into its element one override level down.
pub(crate) fn normalize_field(
    key: &str,
    schema: &FieldSchema,
    info: Option<&SchemaInfo>,
) -> NormalizedField {
    let element = schema.kind.element().map(|element| match element {
        Element::Field(elem) => {
            let elem_info = info.and_then(|i| i.element.as_deref());
            NormalizedElement::Field(Box::new(normalize_field(key, elem, elem_info)))
        }
        Element::Object(fields) => {
            NormalizedElement::Object(normalize_object(fields, |k| info.and_then(|i| i.field(k))))
        }
    });

    NormalizedField {
        key: key.to_string(),
        schema: schema.clone(),
        info: info.cloned(),
        element,
    }
}

/// Warn about overrides naming fields that the schema does not have.
fn check_overrides(
    fields: &ObjectSchema,
    infos: &BTreeMap<String, SchemaInfo>,
    kind: &str,
    owner: Option<&str>,
    warnings: &mut Vec<String>,
) {
    for (key, info) in infos {
        let path = match owner {
            Some(owner) => format!("{}.{}", owner, key),
            None => key.clone(),
        };
        match fields.get(key) {
            None => warnings.push(format!(
                "Custom {} schema {} was not present in the Terraform metadata",
                kind, path
            )),
            Some(schema) => check_nested_overrides(schema, info, kind, &path, warnings),
        }
    }
}

fn check_nested_overrides(
    schema: &FieldSchema,
    info: &SchemaInfo,
    kind: &str,
    path: &str,
    warnings: &mut Vec<String>,
) {
    let nested: BTreeMap<String, SchemaInfo> = info
        .fields
        .iter()
        .chain(info.element.iter().flat_map(|elem| elem.fields.iter()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if nested.is_empty() {
        return;
    }

    match schema.kind.element() {
        Some(Element::Object(fields)) => check_overrides(fields, &nested, kind, Some(path), warnings),
        _ => {
            for key in nested.keys() {
                warnings.push(format!(
                    "Custom {} schema {}.{} was not present in the Terraform metadata",
                    kind, path, key
                ));
            }
        }
    }
}
