//! `internal_utilities.go`: per-package environment helpers and the SDK version.

use std::path::PathBuf;

use tfgen_core::{CommentStyle, FileRules, GeneratedFile};

use super::{PULUMI_SDK, go_package, module_dir, preamble, quote};

pub struct UtilitiesGo {
    package: String,
    module: String,
    version: String,
}

impl UtilitiesGo {
    pub fn new(package: &str, module: &str, version: &str) -> Self {
        Self {
            package: package.to_string(),
            module: module.to_string(),
            version: version.to_string(),
        }
    }
}

impl GeneratedFile for UtilitiesGo {
    fn path(&self) -> PathBuf {
        module_dir(&self.module).join("internal_utilities.go")
    }

    fn rules(&self) -> FileRules {
        FileRules::with_header(CommentStyle::DoubleSlash)
    }

    fn render(&self) -> String {
        format!(
            r#"{}
func getEnv(vars ...string) (string, bool) {{
	for _, v := range vars {{
		if value, ok := os.LookupEnv(v); ok {{
			return value, true
		}}
	}}
	return "", false
}}

func getEnvBool(vars ...string) (bool, bool) {{
	if value, ok := getEnv(vars...); ok {{
		if b, err := strconv.ParseBool(value); err == nil {{
			return b, true
		}}
	}}
	return false, false
}}

func getEnvInt(vars ...string) (int, bool) {{
	if value, ok := getEnv(vars...); ok {{
		if i, err := strconv.Atoi(value); err == nil {{
			return i, true
		}}
	}}
	return 0, false
}}

func getEnvFloat(vars ...string) (float64, bool) {{
	if value, ok := getEnv(vars...); ok {{
		if f, err := strconv.ParseFloat(value, 64); err == nil {{
			return f, true
		}}
	}}
	return 0, false
}}

// pkgVersion is the version of this SDK.
func pkgVersion() string {{
	return {}
}}

func pkgResourceDefaultOpts(opts []pulumi.ResourceOption) []pulumi.ResourceOption {{
	return append([]pulumi.ResourceOption{{pulumi.Version(pkgVersion())}}, opts...)
}}

func pkgInvokeDefaultOpts(opts []pulumi.InvokeOption) []pulumi.InvokeOption {{
	return append([]pulumi.InvokeOption{{pulumi.Version(pkgVersion())}}, opts...)
}}
"#,
            preamble(
                &go_package(&self.package, &self.module),
                &["os", "strconv", PULUMI_SDK]
            ),
            quote(&self.version)
        )
    }
}
