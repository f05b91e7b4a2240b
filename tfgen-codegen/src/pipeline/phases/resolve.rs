//! Resolve phase - decides every name, type, optionality, doc and default.
//!
//! The output is language-neutral: emitters render the IR it produces and
//! make no decisions of their own beyond syntax.

use eyre::{Result, bail};
use serde_json::Value;
use tfgen_core::{
    lower_first, singularize, to_camel_case, to_pascal_case, upper_first, with_deprecation,
};
use tfgen_ir::{
    AssetKind, CustomType, DefaultValue, Function, IrError, Literal, ObjectType, Position,
    Property, ROOT_MODULE, Resource, Token, TypeRef,
};
use tfgen_schema::{FieldKind, SchemaInfo};

use super::{NormalizedElement, NormalizedField, NormalizedItem};
use crate::{
    docs::{DocKind, DocsSource, MarkdownDocs, ParsedDoc, merge_docs},
    pipeline::{CompilationContext, Diagnostic, Phase, ResolvedProvider},
    values::{coerce_number, property_name},
};

const PHASE: &str = "resolve";

/// A failure to resolve one item.
#[derive(Debug, thiserror::Error)]
enum ResolveError {
    #[error("name does not start with the provider prefix '{0}'")]
    MissingPrefix(String),
    #[error(transparent)]
    Token(#[from] IrError),
    #[error("custom schema type {token} was not in the current package {package}")]
    ForeignType { token: String, package: String },
    /// The normalizer produced a collection without an element.
    #[error("internal error: collection field '{0}' has no element schema")]
    MalformedNode(String),
}

impl ResolveError {
    fn is_fatal(&self) -> bool {
        matches!(self, ResolveError::MalformedNode(_))
    }
}

type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Phase that turns normalized items into IR members.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Resolve names, types, optionality, docs and defaults"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(normalized) = ctx.normalized.as_ref() else {
            bail!("provider was not normalized; did the normalize phase run?");
        };

        let docs = ctx.options.docs_dir.as_ref().map(MarkdownDocs::new);
        let mut resolver = Resolver {
            package: ctx.package_name().to_string(),
            prefix: ctx.resource_prefix(),
            docs: docs.as_ref().map(|d| d as &dyn DocsSource),
            diagnostics: Vec::new(),
        };

        let mut resolved = ResolvedProvider::default();
        let mut failures = Vec::new();

        match resolver.config(&normalized.config) {
            Ok(config) => resolved.config = config,
            Err(err) => failures.push(("config".to_string(), err)),
        }

        if !normalized.config.is_empty() {
            match resolver.provider_resource(&normalized.config) {
                Ok(provider) => resolved.resources.push(provider),
                Err(err) => failures.push(("provider".to_string(), err)),
            }
        }

        for item in &normalized.resources {
            match resolver.resource(item) {
                Ok(resource) => {
                    tracing::debug!(token = %resource.token, "resolved resource");
                    resolved.resources.push(resource);
                }
                Err(err) => failures.push((item.raw_name.clone(), err)),
            }
        }

        for item in &normalized.data_sources {
            match resolver.function(item) {
                Ok(function) => {
                    tracing::debug!(token = %function.token, "resolved data source");
                    resolved.functions.push(function);
                }
                Err(err) => failures.push((item.raw_name.clone(), err)),
            }
        }

        if let Some((item, err)) = failures.iter().find(|(_, err)| err.is_fatal()) {
            bail!("{}:{}: {}", resolver.package, item, err);
        }

        let Resolver {
            package,
            diagnostics,
            ..
        } = resolver;
        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        for (item, err) in failures {
            ctx.add_diagnostic(Diagnostic::item_error(PHASE, &package, &item, err));
        }

        ctx.resolved = Some(resolved);
        Ok(())
    }
}

struct Resolver<'a> {
    package: String,
    prefix: String,
    docs: Option<&'a dyn DocsSource>,
    diagnostics: Vec<Diagnostic>,
}

impl Resolver<'_> {
    fn config(&mut self, fields: &[NormalizedField]) -> ResolveResult<Vec<Property>> {
        fields
            .iter()
            .map(|f| self.property(f, "", Position::Input, None))
            .collect()
    }

    /// The provider resource, configured by the config variables.
    fn provider_resource(&mut self, config: &[NormalizedField]) -> ResolveResult<Resource> {
        let name = "Provider";
        let input_properties = config
            .iter()
            .map(|f| self.property(f, name, Position::Input, None))
            .collect::<ResolveResult<_>>()?;
        Ok(Resource {
            token: Token::provider(&self.package),
            name: name.to_string(),
            raw_name: self.package.clone(),
            file_stem: "provider".to_string(),
            doc: format!(
                "The provider type for the {} package. By default, resources use package-wide \
                 configuration settings, however an explicit `Provider` instance may be created \
                 and passed during resource construction to achieve fine-grained programmatic \
                 control over provider settings.",
                self.package
            ),
            input_properties,
            output_properties: Vec::new(),
            is_provider: true,
            delete_before_replace: false,
        })
    }

    fn resource(&mut self, item: &NormalizedItem) -> ResolveResult<Resource> {
        let token = self.item_token(item, to_pascal_case)?;
        let name = token.name().to_string();
        let doc = self.item_doc(item, DocKind::Resource);

        let input_properties = item
            .fields
            .iter()
            .filter(|f| f.schema.is_input())
            .map(|f| self.property(f, &name, Position::Input, doc.as_ref()))
            .collect::<ResolveResult<_>>()?;
        let output_properties = item
            .fields
            .iter()
            .map(|f| self.property(f, &name, Position::Output, doc.as_ref()))
            .collect::<ResolveResult<_>>()?;

        Ok(Resource {
            file_stem: file_stem(&token, &name),
            name,
            raw_name: item.raw_name.clone(),
            doc: doc.map(|d| d.description).unwrap_or_default(),
            input_properties,
            output_properties,
            is_provider: false,
            delete_before_replace: item.delete_before_replace,
            token,
        })
    }

    fn function(&mut self, item: &NormalizedItem) -> ResolveResult<Function> {
        let token = self.item_token(item, to_camel_case)?;
        let name = token.name().to_string();
        let owner = upper_first(&name);
        let doc = self.item_doc(item, DocKind::DataSource);

        let args = item
            .fields
            .iter()
            .filter(|f| f.schema.is_input())
            .map(|f| self.property(f, &owner, Position::Input, doc.as_ref()))
            .collect::<ResolveResult<_>>()?;
        let results = item
            .fields
            .iter()
            .filter(|f| f.schema.computed)
            .map(|f| self.property(f, &owner, Position::Output, doc.as_ref()))
            .collect::<ResolveResult<_>>()?;

        Ok(Function {
            file_stem: file_stem(&token, &name),
            name,
            raw_name: item.raw_name.clone(),
            doc: doc.map(|d| d.description).unwrap_or_default(),
            args,
            results,
            token,
        })
    }

    /// The item's token, or `pkg:index:<case(raw minus prefix)>` when none is set.
    fn item_token(&self, item: &NormalizedItem, case: fn(&str) -> String) -> ResolveResult<Token> {
        if !item.tok.is_empty() {
            return Ok(item.tok.parse()?);
        }
        let stripped = item
            .raw_name
            .strip_prefix(&self.prefix)
            .ok_or_else(|| ResolveError::MissingPrefix(self.prefix.clone()))?;
        Ok(Token::new(&self.package, ROOT_MODULE, case(stripped)))
    }

    fn doc_stem<'n>(&self, raw_name: &'n str) -> &'n str {
        raw_name.strip_prefix(&self.prefix).unwrap_or(raw_name)
    }

    fn item_doc(&mut self, item: &NormalizedItem, kind: DocKind) -> Option<ParsedDoc> {
        let docs = self.docs?;
        let stem = item
            .docs
            .source
            .as_deref()
            .unwrap_or_else(|| self.doc_stem(&item.raw_name))
            .to_string();
        let mut doc = self.lookup(docs, kind, &stem)?;

        let args_from = item.docs.include_arguments_from.as_deref();
        let attrs_from = item.docs.include_attributes_from.as_deref();
        if args_from.is_some() && args_from == attrs_from {
            let stem = self.doc_stem(args_from.unwrap_or_default()).to_string();
            if let Some(from) = self.lookup(docs, kind, &stem) {
                merge_docs(&mut doc, &from, true, true);
            }
        } else {
            if let Some(raw) = args_from {
                let stem = self.doc_stem(raw).to_string();
                if let Some(from) = self.lookup(docs, kind, &stem) {
                    merge_docs(&mut doc, &from, true, false);
                }
            }
            if let Some(raw) = attrs_from {
                let stem = self.doc_stem(raw).to_string();
                if let Some(from) = self.lookup(docs, kind, &stem) {
                    merge_docs(&mut doc, &from, false, true);
                }
            }
        }
        Some(doc)
    }

    fn lookup(&mut self, docs: &dyn DocsSource, kind: DocKind, stem: &str) -> Option<ParsedDoc> {
        let lookup = docs.lookup(kind, stem);
        if let Some(warning) = lookup.warning {
            self.diagnostics.push(Diagnostic::warning(PHASE, warning).at(stem));
        }
        lookup.doc
    }

    /// Resolve one field for the given position.
    fn property(
        &mut self,
        field: &NormalizedField,
        owner: &str,
        position: Position,
        doc: Option<&ParsedDoc>,
    ) -> ResolveResult<Property> {
        let info = field.info.as_ref();
        let schema = &field.schema;
        let ty = self.type_ref(field, owner, position)?;

        let has_override_default = info.is_some_and(SchemaInfo::has_default);
        let optional = match position {
            Position::Input => schema.optional || schema.computed || has_override_default,
            Position::Output => schema.optional && !schema.computed && !has_override_default,
        };

        let text = doc
            .and_then(|d| d.field(&field.key))
            .unwrap_or(schema.description.as_str());

        let mut property = Property::new(&field.key, property_name(&field.key, info), ty, position)
            .optional(optional)
            .with_doc(with_deprecation(text, schema.deprecated.as_deref()));
        property.description = schema.description.clone();
        property.deprecation = schema.deprecated.clone();
        property.secret = schema.sensitive;
        property.default = info
            .and_then(|i| i.default.as_ref())
            .map(|default| DefaultValue {
                literal: default
                    .value
                    .as_ref()
                    .and_then(|v| literal(&coerce_number(v, schema.value_kind()))),
                env_vars: default.env_vars.clone(),
                computed: default.from.is_some(),
            });
        Ok(property)
    }

    fn type_ref(
        &mut self,
        field: &NormalizedField,
        owner: &str,
        position: Position,
    ) -> ResolveResult<TypeRef> {
        let info = field.info.as_ref();

        if let Some(tok) = info.and_then(|i| i.ty.as_deref()) {
            let token = self.local_token(tok)?;
            let alt_types = match position {
                Position::Input => info
                    .map(|i| i.alt_types.as_slice())
                    .unwrap_or_default()
                    .iter()
                    .map(|t| self.local_token(t))
                    .collect::<ResolveResult<_>>()?,
                Position::Output => Vec::new(),
            };
            return Ok(TypeRef::Custom(CustomType { token, alt_types }));
        }

        if let Some(asset) = info.and_then(|i| i.asset) {
            let kind = if asset.is_archive() {
                AssetKind::Archive
            } else {
                AssetKind::Asset
            };
            return Ok(TypeRef::Asset(kind));
        }

        match &field.schema.kind {
            FieldKind::Bool => Ok(TypeRef::Bool),
            FieldKind::Int => Ok(TypeRef::Int),
            FieldKind::Float => Ok(TypeRef::Float),
            FieldKind::String => Ok(TypeRef::String),
            FieldKind::List(_) | FieldKind::Set(_) => {
                let element = self.element_type(field, owner, position)?;
                if max_items_one(field) {
                    Ok(element)
                } else {
                    Ok(TypeRef::array(element))
                }
            }
            FieldKind::Map(_) => Ok(TypeRef::map(self.element_type(field, owner, position)?)),
        }
    }

    fn element_type(
        &mut self,
        field: &NormalizedField,
        owner: &str,
        position: Position,
    ) -> ResolveResult<TypeRef> {
        match &field.element {
            Some(NormalizedElement::Field(element)) => self.type_ref(element, owner, position),
            // Object elements are named after the container field.
            Some(NormalizedElement::Object(fields)) => {
                self.object_type(&field.key, fields, owner, position)
            }
            None => Err(ResolveError::MalformedNode(field.key.clone())),
        }
    }

    fn object_type(
        &mut self,
        key: &str,
        fields: &[NormalizedField],
        owner: &str,
        position: Position,
    ) -> ResolveResult<TypeRef> {
        let suffix = to_pascal_case(&singularize(key));
        let base = format!("{}{}", owner, suffix);
        let name = match position {
            Position::Input if !owner.is_empty() => format!("{}Args{}", owner, suffix),
            _ => base.clone(),
        };

        let properties = fields
            .iter()
            .filter(|f| position == Position::Output || f.schema.is_input())
            .map(|f| self.property(f, &base, position, None))
            .collect::<ResolveResult<_>>()?;
        Ok(TypeRef::Object(ObjectType { name, properties }))
    }

    /// Parse a custom type token, which must belong to this package.
    fn local_token(&self, tok: &str) -> ResolveResult<Token> {
        let token: Token = tok.parse()?;
        if token.package() != self.package {
            return Err(ResolveError::ForeignType {
                token: tok.to_string(),
                package: self.package.clone(),
            });
        }
        Ok(token)
    }
}

/// The `maxItemsOne` override wins over the schema's own hint.
fn max_items_one(field: &NormalizedField) -> bool {
    field
        .info
        .as_ref()
        .and_then(|i| i.max_items_one)
        .unwrap_or(field.schema.max_items == 1)
}

fn file_stem(token: &Token, name: &str) -> String {
    token
        .file_stem()
        .map(str::to_string)
        .unwrap_or_else(|| lower_first(name))
}

fn literal(value: &Value) -> Option<Literal> {
    match value {
        Value::Bool(b) => Some(Literal::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(Literal::Int)
            .or_else(|| n.as_f64().map(Literal::Float)),
        Value::String(s) => Some(Literal::String(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tfgen_schema::ProviderDocument;

    use super::*;
    use crate::pipeline::{GenerateOptions, phases::NormalizePhase};

    fn run_with(json: &str, options: GenerateOptions) -> CompilationContext {
        let document: ProviderDocument = json.parse().expect("valid document");
        let mut ctx = CompilationContext::new(document, options);
        NormalizePhase.run(&mut ctx).expect("normalize");
        ResolvePhase.run(&mut ctx).expect("resolve");
        ctx
    }

    fn run(json: &str) -> CompilationContext {
        run_with(json, GenerateOptions::default())
    }

    fn resource<'a>(ctx: &'a CompilationContext, name: &str) -> &'a Resource {
        ctx.resolved
            .as_ref()
            .unwrap()
            .resources
            .iter()
            .find(|r| r.name == name)
            .expect("resource")
    }

    const WIDGET: &str = r#"{
        "name": "example",
        "provider": {
            "resources": {"example_widget": {
                "name": {"type": "string", "required": true, "description": "The widget name."},
                "tags": {"type": "map", "optional": true, "element": {"schema": {"type": "string"}}},
                "arn": {"type": "string", "computed": true},
                "size": {"type": "int", "optional": true, "computed": true}
            }}
        },
        "resources": {"example_widget": {"tok": "example:index:Widget"}}
    }"#;

    #[test]
    fn test_widget_end_to_end() {
        let ctx = run(WIDGET);
        assert!(!ctx.has_warnings());
        assert!(!ctx.has_errors());

        let widget = resource(&ctx, "Widget");
        assert_eq!(widget.file_stem, "widget");
        let inputs: Vec<(&str, bool)> = widget
            .input_properties
            .iter()
            .map(|p| (p.name.as_str(), p.optional))
            .collect();
        assert_eq!(inputs, vec![("name", false), ("size", true), ("tags", true)]);

        let name = widget.input("name").unwrap();
        assert_eq!(name.doc, "The widget name.");
        assert!(name.needs_required_check());

        let tags = widget.input("tags").unwrap();
        assert_eq!(tags.ty, TypeRef::map(TypeRef::String));

        let outputs: Vec<(&str, bool)> = widget
            .output_properties
            .iter()
            .map(|p| (p.name.as_str(), p.optional))
            .collect();
        assert_eq!(
            outputs,
            vec![("arn", false), ("name", false), ("size", false), ("tags", true)]
        );
    }

    #[test]
    fn test_max_items_one_projection() {
        let ctx = run(r#"{
            "name": "example",
            "provider": {"resources": {"example_widget": {
                "single": {"type": "list", "optional": true, "maxItems": 1, "element": {"schema": {"type": "string"}}},
                "many": {"type": "list", "optional": true, "element": {"schema": {"type": "string"}}},
                "forced": {"type": "set", "optional": true, "element": {"schema": {"type": "int"}}},
                "target_rules": {"type": "list", "optional": true, "maxItems": 1, "element": {"resource": {
                    "priority": {"type": "int", "required": true},
                    "status": {"type": "string", "computed": true}
                }}}
            }}},
            "resources": {"example_widget": {
                "tok": "example:index:Widget",
                "fields": {"forced": {"maxItemsOne": true}}
            }}
        }"#);

        let widget = resource(&ctx, "Widget");
        assert_eq!(widget.input("single").unwrap().ty, TypeRef::String);
        assert_eq!(widget.input("many").unwrap().ty, TypeRef::array(TypeRef::String));
        assert_eq!(widget.input("forced").unwrap().ty, TypeRef::Int);

        let TypeRef::Object(input_obj) = &widget.input("target_rules").unwrap().ty else {
            panic!("expected object");
        };
        assert_eq!(input_obj.name, "WidgetArgsTargetRule");
        assert_eq!(input_obj.properties.len(), 1);

        let output = widget
            .output_properties
            .iter()
            .find(|p| p.raw_name == "target_rules")
            .unwrap();
        let TypeRef::Object(output_obj) = &output.ty else {
            panic!("expected object");
        };
        assert_eq!(output_obj.name, "WidgetTargetRule");
        assert_eq!(output_obj.properties.len(), 2);
    }

    #[test]
    fn test_nested_object_names() {
        let ctx = run(r#"{
            "name": "example",
            "provider": {"resources": {"example_widget": {
                "rules": {"type": "list", "optional": true, "element": {"resource": {
                    "matches": {"type": "list", "optional": true, "element": {"resource": {
                        "prefix": {"type": "string", "optional": true}
                    }}}
                }}}
            }}},
            "resources": {"example_widget": {"tok": "example:index:Widget"}}
        }"#);

        let widget = resource(&ctx, "Widget");
        let names: Vec<&str> = widget
            .input("rules")
            .unwrap()
            .ty
            .objects()
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["WidgetArgsRule", "WidgetRuleArgsMatch"]);
    }

    #[test]
    fn test_override_name_type_and_default() {
        let ctx = run(r#"{
            "name": "example",
            "provider": {"resources": {"example_widget": {
                "role_arn:": {"type": "string", "optional": true},
                "policy": {"type": "string", "optional": true},
                "code": {"type": "string", "optional": true},
                "retries": {"type": "int", "optional": true}
            }}},
            "resources": {"example_widget": {
                "tok": "example:index:Widget",
                "fields": {
                    "policy": {"name": "policyDocument", "type": "example:index:PolicyDocument", "altTypes": ["example:index:Policy"]},
                    "code": {"asset": {"kind": "fileArchive"}},
                    "retries": {"default": {"value": 3.0, "envVars": ["EXAMPLE_RETRIES"]}}
                }
            }}
        }"#);

        let widget = resource(&ctx, "Widget");
        assert_eq!(widget.input("role_arn:").unwrap().name, "roleArn");

        let policy = widget.input("policy").unwrap();
        assert_eq!(policy.name, "policyDocument");
        let TypeRef::Custom(custom) = &policy.ty else {
            panic!("expected custom type");
        };
        assert_eq!(custom.token.to_string(), "example:index:PolicyDocument");
        assert_eq!(custom.alt_types.len(), 1);

        let policy_out = widget
            .output_properties
            .iter()
            .find(|p| p.raw_name == "policy")
            .unwrap();
        let TypeRef::Custom(custom_out) = &policy_out.ty else {
            panic!("expected custom type");
        };
        assert!(custom_out.alt_types.is_empty());

        assert_eq!(widget.input("code").unwrap().ty, TypeRef::Asset(AssetKind::Archive));

        let retries = widget.input("retries").unwrap();
        let default = retries.default.as_ref().unwrap();
        assert_eq!(default.literal, Some(Literal::Int(3)));
        assert_eq!(default.env_vars, vec!["EXAMPLE_RETRIES"]);
        assert!(retries.optional);
    }

    #[test]
    fn test_per_item_errors_are_collected() {
        let ctx = run(r#"{
            "name": "example",
            "provider": {"resources": {
                "example_a": {"x": {"type": "string", "optional": true}},
                "other_b": {"x": {"type": "string", "optional": true}},
                "example_c": {"x": {"type": "string", "optional": true}}
            }},
            "resources": {
                "example_a": {"tok": "example:index:A", "fields": {"x": {"type": "aws:index:Thing"}}},
                "other_b": {"tok": ""},
                "example_c": {"tok": ""}
            }
        }"#);

        let errors: Vec<&str> = ctx.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(
            errors,
            vec![
                "example:example_a: custom schema type aws:index:Thing was not in the current package example",
                "example:other_b: name does not start with the provider prefix 'example_'",
            ]
        );
        // The remaining item still resolves, with a token derived from its raw name.
        let c = resource(&ctx, "C");
        assert_eq!(c.token.to_string(), "example:index:C");
    }

    #[test]
    fn test_data_source_args_and_results() {
        let ctx = run(r#"{
            "name": "example",
            "provider": {"dataSources": {"example_widget_info": {
                "widget_id": {"type": "string", "required": true},
                "filter": {"type": "string", "optional": true},
                "owner_email": {"type": "string", "computed": true}
            }}},
            "dataSources": {"example_widget_info": {"tok": ""}}
        }"#);

        let function = &ctx.resolved.as_ref().unwrap().functions[0];
        assert_eq!(function.token.to_string(), "example:index:widgetInfo");
        assert_eq!(function.args_type_name(), "WidgetInfoArgs");
        let args: Vec<&str> = function.args.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(args, vec!["filter", "widgetId"]);
        let results: Vec<&str> = function.results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(results, vec!["ownerEmail"]);
    }

    #[test]
    fn test_provider_resource_from_config() {
        let ctx = run(r#"{
            "name": "example",
            "provider": {"schema": {
                "region": {"type": "string", "required": true},
                "skip_checks": {"type": "bool", "optional": true}
            }}
        }"#);

        let resolved = ctx.resolved.as_ref().unwrap();
        assert_eq!(resolved.config.len(), 2);
        assert!(resolved.config.iter().all(|p| p.position == Position::Input));

        let provider = resource(&ctx, "Provider");
        assert!(provider.is_provider);
        assert_eq!(provider.token.to_string(), "pulumi:providers:example");
        assert_eq!(provider.input_properties.len(), 2);
        assert!(provider.output_properties.is_empty());
    }

    #[test]
    fn test_docs_source_and_deprecation() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("r")).unwrap();
        fs::write(
            dir.path().join("r/widget.html.markdown"),
            "# example_widget\n\nManages a widget.\n\n## Argument Reference\n\n* `name` - The name from docs.\n",
        )
        .unwrap();

        let json = r#"{
            "name": "example",
            "provider": {"resources": {"example_widget": {
                "name": {"type": "string", "required": true, "description": "Schema text."},
                "old": {"type": "string", "optional": true, "description": "Old field.", "deprecated": "use name"}
            }}},
            "resources": {"example_widget": {"tok": "example:index:Widget"}}
        }"#;
        let options = GenerateOptions {
            docs_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let ctx = run_with(json, options);

        let widget = resource(&ctx, "Widget");
        assert_eq!(widget.doc, "Manages a widget.");
        assert_eq!(widget.input("name").unwrap().doc, "The name from docs.");
        assert_eq!(
            widget.input("old").unwrap().doc,
            "Old field.\n\nDeprecated: use name"
        );
    }

    #[test]
    fn test_module_file_token() {
        let ctx = run(r#"{
            "name": "example",
            "provider": {"resources": {"example_bucket_policy": {"x": {"type": "string", "optional": true}}}},
            "resources": {"example_bucket_policy": {"tok": "example:s3/bucketPolicy:BucketPolicy"}}
        }"#);
        let policy = resource(&ctx, "BucketPolicy");
        assert_eq!(policy.token.module(), "s3");
        assert_eq!(policy.file_stem, "bucketPolicy");
    }
}
