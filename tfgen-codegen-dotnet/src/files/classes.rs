//! Argument and output classes shared by resources and data sources.

use std::collections::BTreeSet;

use tfgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use tfgen_ir::{ObjectType, Property};

use super::{default_expr, quote, verbatim};
use crate::{
    CS_NAMING,
    naming::property_name,
    type_mapper::{CSharpTypeMapper, nullable},
};

/// Which kind of argument bag a class is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgsKind {
    Resource,
    Invoke,
}

impl ArgsKind {
    fn base(&self) -> &'static str {
        match self {
            ArgsKind::Resource => "Pulumi.ResourceArgs",
            ArgsKind::Invoke => "Pulumi.InvokeArgs",
        }
    }
}

/// A sealed argument class with `[Input]` properties and defaults applied
/// in its constructor.
pub(crate) fn push_args_class(
    b: &mut CodeBuilder,
    name: &str,
    doc: &str,
    kind: ArgsKind,
    props: &[Property],
) {
    let mapper = CSharpTypeMapper;
    b.push_xml_doc(doc);
    b.push_line(&format!("public sealed class {} : {}", name, kind.base()));
    b.push_line("{").push_indent();
    for prop in props {
        let prop_name = property_name(&prop.name, name);
        let ty = match kind {
            ArgsKind::Resource => mapper.map_input_type(&prop.ty),
            ArgsKind::Invoke => mapper.map_invoke_type(&prop.ty),
        };
        b.push_reflowed_xml_doc(&prop.doc);
        if let Some(message) = &prop.deprecation {
            b.push_line(&format!("[Obsolete({})]", verbatim(message)));
        }
        if prop.optional {
            b.push_line(&format!("[Input({})]", quote(&prop.name)));
            b.push_line(&format!(
                "public {} {} {{ get; set; }}",
                nullable(&prop.ty, ty),
                prop_name
            ));
        } else {
            b.push_line(&format!("[Input({}, required: true)]", quote(&prop.name)));
            b.push_line(&format!("public {} {} {{ get; set; }} = null!;", ty, prop_name));
        }
        b.push_blank();
    }

    b.push_line(&format!("public {}()", name));
    b.push_line("{").push_indent();
    for prop in props {
        if let Some(default) = default_expr(prop) {
            b.push_line(&format!(
                "{} = {};",
                property_name(&prop.name, name),
                default
            ));
        }
    }
    b.push_dedent().push_line("}");
    b.push_dedent().push_line("}");
}

/// An `[OutputType]` class with readonly fields and an `[OutputConstructor]`.
pub(crate) fn push_output_class(b: &mut CodeBuilder, name: &str, doc: &str, props: &[Property]) {
    let mapper = CSharpTypeMapper;
    let field_type = |prop: &Property| {
        let ty = mapper.map_type(&prop.ty);
        if prop.optional {
            nullable(&prop.ty, ty)
        } else {
            ty
        }
    };

    b.push_xml_doc(doc);
    b.push_line("[OutputType]");
    b.push_line(&format!("public sealed class {}", name));
    b.push_line("{").push_indent();
    for prop in props {
        b.push_reflowed_xml_doc(&prop.doc);
        b.push_line(&format!(
            "public readonly {} {};",
            field_type(prop),
            property_name(&prop.name, name)
        ));
    }
    if !props.is_empty() {
        b.push_blank();
    }

    b.push_line("[OutputConstructor]");
    let params: Vec<String> = props
        .iter()
        .map(|p| format!("{} {}", field_type(p), CS_NAMING.field_name(&p.name)))
        .collect();
    if params.len() > 1 {
        b.push_line(&format!("private {}(", name)).push_indent();
        let last = params.len() - 1;
        for (i, param) in params.iter().enumerate() {
            let close = if i == last { ")" } else { "," };
            b.push_line(&format!("{}{}", param, close));
        }
        b.push_dedent();
    } else {
        b.push_line(&format!("private {}({})", name, params.join(", ")));
    }
    b.push_line("{").push_indent();
    for prop in props {
        b.push_line(&format!(
            "{} = {};",
            property_name(&prop.name, name),
            CS_NAMING.field_name(&prop.name)
        ));
    }
    b.push_dedent().push_line("}");
    b.push_dedent().push_line("}");
}

/// Every nested object class reachable from `props`, each rendered once.
///
/// Objects under input properties become argument classes of `kind`; the
/// rest become output classes.
pub(crate) fn push_object_classes<'a>(
    b: &mut CodeBuilder,
    props: impl IntoIterator<Item = &'a Property>,
    kind: ArgsKind,
    seen: &mut BTreeSet<String>,
) {
    for prop in props {
        for object in prop.ty.objects() {
            if !seen.insert(object.name.clone()) {
                continue;
            }
            b.push_blank();
            push_object_class(b, object, prop.is_input(), kind);
        }
    }
}

fn push_object_class(b: &mut CodeBuilder, object: &ObjectType, input: bool, kind: ArgsKind) {
    if input {
        push_args_class(b, &object.name, "", kind, &object.properties);
    } else {
        push_output_class(b, &object.name, "", &object.properties);
    }
}

#[cfg(test)]
mod tests {
    use tfgen_ir::{Position, TypeRef};

    use super::*;

    #[test]
    fn test_output_class_single_field() {
        let mut b = CodeBuilder::csharp();
        let props = vec![Property::new("ids", "ids", TypeRef::array(TypeRef::String), Position::Output)];
        push_output_class(&mut b, "GetThingResult", "", &props);
        assert_eq!(
            b.build(),
            "[OutputType]
public sealed class GetThingResult
{
    public readonly ImmutableArray<string> Ids;

    [OutputConstructor]
    private GetThingResult(ImmutableArray<string> ids)
    {
        Ids = ids;
    }
}
"
        );
    }

    #[test]
    fn test_args_class_required_and_optional() {
        let mut b = CodeBuilder::csharp();
        let props = vec![
            Property::new("name", "name", TypeRef::String, Position::Input),
            Property::new("tags", "tags", TypeRef::map(TypeRef::String), Position::Input).optional(true),
        ];
        push_args_class(&mut b, "ThingArgs", "", ArgsKind::Resource, &props);
        let out = b.build();
        assert!(out.contains(
            "    [Input(\"name\", required: true)]\n    public Input<string> Name { get; set; } = null!;\n"
        ));
        assert!(out.contains("    [Input(\"tags\")]\n    public InputMap<string>? Tags { get; set; }\n"));
        assert!(out.ends_with("    public ThingArgs()\n    {\n    }\n}\n"));
    }
}
