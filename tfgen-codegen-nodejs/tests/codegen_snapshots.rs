//! Snapshot tests for Node.js code generation.
//!
//! These tests run the full pipeline over the shared fixtures and check the
//! generated TypeScript. Run `cargo insta review` to update snapshots when
//! making intentional changes.

use std::{fs, path::PathBuf};

use tfgen_codegen::testing::{full_package, generate_to_temp, widget_package};
use tfgen_codegen_nodejs::{Generator, LanguageCodegen};
use tfgen_ir::{ModuleMember, OverlayFile, Package};

/// Generate code and return files sorted by path.
fn generate_files(package: &Package) -> Vec<(String, String)> {
    Generator::new(package)
        .preview()
        .expect("preview should render")
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{} not generated", path))
}

#[test]
fn test_widget_file_list() {
    let files = generate_files(&widget_package());
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Pulumi.yaml",
            "VERSION",
            "index.ts",
            "package.json",
            "tsconfig.json",
            "utilities.ts",
            "widget.ts",
        ]
    );
}

#[test]
fn test_widget_resource() {
    let files = generate_files(&widget_package());
    insta::assert_snapshot!(get_file(&files, "widget.ts"), @r##"
    // *** WARNING: this file was generated by the tfgen tool. ***
    // *** Do not edit by hand unless you're certain you know what you are doing! ***

    import * as pulumi from "@pulumi/pulumi";

    export class Widget extends pulumi.CustomResource {
      /**
       * Get an existing Widget resource's state with the given name and ID.
       *
       * @param name The _unique_ name of the resulting resource.
       * @param id The _unique_ provider ID of the resource to lookup.
       * @param opts Optional settings to control the behavior of the CustomResource.
       */
      public static get(name: string, id: pulumi.Input<pulumi.ID>, opts?: pulumi.CustomResourceOptions): Widget {
        return new Widget(name, undefined as any, { ...opts, id: id });
      }

      /** @internal */
      public static readonly __pulumiType = "example:index:Widget";

      /**
       * Returns true if the given object is an instance of Widget. This is designed to work even when multiple copies of
       * the Pulumi SDK have been loaded into the same process.
       */
      public static isInstance(obj: any): obj is Widget {
        if (obj === undefined || obj === null) {
          return false;
        }
        return obj["__pulumiType"] === Widget.__pulumiType;
      }

      /**
       * The name of the widget.
       */
      public readonly name!: pulumi.Output<string>;

      public readonly tags!: pulumi.Output<{[key: string]: string} | undefined>;

      /**
       * Create a Widget resource with the given unique name, arguments, and options.
       *
       * @param name The _unique_ name of the resource.
       * @param args The arguments to use to populate this resource's properties.
       * @param opts A bag of options that control this resource's behavior.
       */
      constructor(name: string, args: WidgetArgs, opts?: pulumi.CustomResourceOptions) {
        const inputs: pulumi.Inputs = {};
        if (!opts?.id) {
          if (args?.name === undefined) {
            throw new Error("Missing required property 'name'");
          }
        }
        inputs["name"] = args?.name;
        inputs["tags"] = args?.tags;
        super(Widget.__pulumiType, name, inputs, opts);
      }
    }

    /**
     * The set of arguments for constructing a Widget resource.
     */
    export interface WidgetArgs {
      /**
       * The name of the widget.
       */
      readonly name: pulumi.Input<string>;
      readonly tags?: pulumi.Input<{[key: string]: pulumi.Input<string>}>;
    }
    "##);
}

#[test]
fn test_config_vars() {
    let files = generate_files(&full_package());
    insta::assert_snapshot!(get_file(&files, "config/vars.ts"), @r##"
    // *** WARNING: this file was generated by the tfgen tool. ***
    // *** Do not edit by hand unless you're certain you know what you are doing! ***

    import * as pulumi from "@pulumi/pulumi";
    import * as utilities from "../utilities";

    const __config = new pulumi.Config("example");

    export const maxRetries: number | undefined = __config.getObject<number>("maxRetries");

    /**
     * The region where operations will take place.
     */
    export const region: string = __config.require("region");

    export const skipCredentialsValidation: boolean = __config.getObject<boolean>("skipCredentialsValidation") ?? utilities.getEnvBoolean("EXAMPLE_SKIP_CREDENTIALS_VALIDATION") ?? false;
    "##);
    assert!(get_file(&files, "config/index.ts").contains("export * from \"./vars\";"));
}

#[test]
fn test_root_index_exports_submodules() {
    let files = generate_files(&full_package());
    insta::assert_snapshot!(get_file(&files, "index.ts"), @r#"
    // *** WARNING: this file was generated by the tfgen tool. ***
    // *** Do not edit by hand unless you're certain you know what you are doing! ***

    export * from "./provider";
    export * from "./widget";
    export * from "./getWidgets";

    // Export sub-modules:
    import * as config from "./config";
    import * as s3 from "./s3";

    export {
      config,
      s3,
    };
    "#);
}

#[test]
fn test_data_source_function() {
    let files = generate_files(&full_package());
    insta::assert_snapshot!(get_file(&files, "getWidgets.ts"), @r#"
    // *** WARNING: this file was generated by the tfgen tool. ***
    // *** Do not edit by hand unless you're certain you know what you are doing! ***

    import * as pulumi from "@pulumi/pulumi";

    export async function getWidgets(args?: GetWidgetsArgs, opts?: pulumi.InvokeOptions): Promise<GetWidgetsResult> {
      args = args || {};
      return pulumi.runtime.invoke("example:index:getWidgets", {
        "namePrefix": args.namePrefix,
      }, opts);
    }

    /**
     * A collection of arguments for invoking getWidgets.
     */
    export interface GetWidgetsArgs {
      readonly namePrefix?: string;
    }

    /**
     * A collection of values returned by getWidgets.
     */
    export interface GetWidgetsResult {
      readonly ids: string[];
    }
    "#);
}

#[test]
fn test_provider_resource() {
    let files = generate_files(&full_package());
    let provider = get_file(&files, "provider.ts");

    assert!(provider.contains("import * as utilities from \"./utilities\";"));
    assert!(provider.contains("export class Provider extends pulumi.ProviderResource {"));
    assert!(provider.contains("public static readonly __pulumiType = \"example\";"));
    assert!(!provider.contains("public static get("));
    assert!(provider.contains(
        "constructor(name: string, args: ProviderArgs, opts?: pulumi.ResourceOptions) {"
    ));
    assert!(provider.contains(
        "inputs[\"skipCredentialsValidation\"] = args?.skipCredentialsValidation ?? utilities.getEnvBoolean(\"EXAMPLE_SKIP_CREDENTIALS_VALIDATION\") ?? false;"
    ));
    assert!(provider.contains("throw new Error(\"Missing required property 'region'\");"));
}

#[test]
fn test_nested_objects_render_inline() {
    let files = generate_files(&full_package());
    let widget = get_file(&files, "widget.ts");

    assert!(widget.contains(
        "readonly rule?: pulumi.Input<{ priority?: pulumi.Input<number>, targetArn: pulumi.Input<string> }>;"
    ));
    assert!(widget.contains(
        "public readonly rule!: pulumi.Output<{ priority?: number, targetArn: string } | undefined>;"
    ));
    assert!(widget.contains("inputs[\"arn\"] = undefined /*out*/;"));
    assert!(!widget.contains("inputs[\"size\"] = undefined"));
}

#[test]
fn test_submodule_resource() {
    let files = generate_files(&full_package());
    let bucket = get_file(&files, "s3/bucket.ts");

    assert!(bucket.contains("public static readonly __pulumiType = \"example:s3/bucket:Bucket\";"));
    assert!(bucket.contains("constructor(name: string, args?: BucketArgs, opts?: pulumi.CustomResourceOptions) {"));
    assert!(bucket.contains("readonly contentFile?: pulumi.Input<pulumi.asset.Asset>;"));
    assert!(bucket.contains(
        "readonly versioning?: pulumi.Input<pulumi.Input<{ enabled?: pulumi.Input<boolean> }>[]>;"
    ));
    assert!(bucket.contains("Deprecated: Use grants instead."));
    assert!(!bucket.contains("utilities"));
    assert!(get_file(&files, "s3/index.ts").contains("export * from \"./bucket\";"));
}

#[test]
fn test_package_json_and_tsconfig() {
    let files = generate_files(&full_package());
    let package_json = get_file(&files, "package.json");
    assert!(package_json.contains("\"name\": \"@pulumi/example\""));
    assert!(package_json.contains("\"version\": \"1.2.3\""));
    assert!(package_json.contains("\"dependencies\": {\n    \"semver\": \"^5.4.0\"\n  }"));
    assert!(package_json.contains(
        "\"devDependencies\": {\n    \"@types/node\": \"^8.0.0\",\n    \"typescript\": \"^4.3.5\"\n  }"
    ));
    assert!(package_json.contains("\"@pulumi/pulumi\": \"^3.0.0\""));

    let tsconfig = get_file(&files, "tsconfig.json");
    for file in ["config/vars.ts", "index.ts", "s3/bucket.ts", "utilities.ts", "widget.ts"] {
        assert!(tsconfig.contains(&format!("\"{}\"", file)), "missing {}", file);
    }
    assert!(!tsconfig.contains("package.json"));
}

#[test]
fn test_metadata_files() {
    let files = generate_files(&full_package());
    assert_eq!(
        get_file(&files, "Pulumi.yaml"),
        "name: example\ndescription: \"A Pulumi package for creating and managing example cloud resources.\"\nlanguage: nodejs\n"
    );
    assert_eq!(
        get_file(&files, "VERSION"),
        "Generated by tfgen from:\nRepo: github.com/example/terraform-provider-example\nTag: v1.2.3\nCommit: abc1234\n\n"
    );
}

#[test]
fn test_generate_writes_files_and_overlays() {
    let overlays = tempfile::TempDir::new().unwrap();
    let helper = overlays.path().join("helpers.ts");
    fs::write(&helper, "export const helper = 1;\n").unwrap();

    let mut package = widget_package();
    package
        .add_member(
            "index",
            ModuleMember::Overlay(OverlayFile {
                name: "helpers.ts".into(),
                source: helper,
            }),
        )
        .unwrap();

    let out = generate_to_temp(|dir| {
        let result = Generator::new(&package).generate(dir)?;
        assert_eq!(result.copied, vec![PathBuf::from("helpers.ts")]);
        Ok(())
    })
    .unwrap();

    assert_eq!(
        fs::read_to_string(out.path().join("helpers.ts")).unwrap(),
        "export const helper = 1;\n"
    );
    let index = fs::read_to_string(out.path().join("index.ts")).unwrap();
    assert!(index.contains("export * from \"./helpers\";"));
    let tsconfig = fs::read_to_string(out.path().join("tsconfig.json")).unwrap();
    assert!(tsconfig.contains("\"helpers.ts\""));
}

#[test]
fn test_overlay_conflict_is_fatal() {
    let mut package = widget_package();
    package
        .add_member(
            "index",
            ModuleMember::Overlay(OverlayFile {
                name: "widget.ts".into(),
                source: PathBuf::from("overlays/nodejs/widget.ts"),
            }),
        )
        .unwrap();

    let err = Generator::new(&package).plan().unwrap_err();
    assert!(
        format!("{:#}", err).contains("overlay file 'overlays/nodejs/widget.ts' conflicts with generated file 'widget.ts'")
    );
}

#[test]
fn test_regeneration_is_byte_identical() {
    let mut runs = Vec::new();
    for _ in 0..2 {
        let package = full_package();
        let mut written = Vec::new();
        let out = generate_to_temp(|dir| {
            written = Generator::new(&package).generate(dir)?.written;
            Ok(())
        })
        .unwrap();
        let contents: Vec<(PathBuf, Vec<u8>)> = written
            .into_iter()
            .map(|path| {
                let bytes = fs::read(out.path().join(&path)).unwrap();
                (path, bytes)
            })
            .collect();
        runs.push(contents);
    }
    assert!(!runs[0].is_empty());
    assert_eq!(runs[0], runs[1]);
}
