//! `utilities.py`: environment-variable helpers used by generated defaults.

use std::path::PathBuf;

use tfgen_core::GeneratedFile;

use super::{package_dir, python_header};

pub struct UtilitiesPy {
    package: String,
    version: String,
}

impl UtilitiesPy {
    pub fn new(package: &str, version: &str) -> Self {
        Self {
            package: package.to_string(),
            version: version.to_string(),
        }
    }
}

impl GeneratedFile for UtilitiesPy {
    fn path(&self) -> PathBuf {
        PathBuf::from(package_dir(&self.package)).join("utilities.py")
    }

    fn render(&self) -> String {
        format!(
            r#"{}import os


def get_env(*args):
    for v in args:
        value = os.getenv(v)
        if value is not None:
            return value
    return None


def get_env_bool(*args):
    s = get_env(*args)
    if s is not None:
        if s in ['1', 't', 'T', 'true', 'TRUE', 'True']:
            return True
        if s in ['0', 'f', 'F', 'false', 'FALSE', 'False']:
            return False
    return None


def get_env_int(*args):
    s = get_env(*args)
    if s is not None:
        try:
            return int(s)
        except ValueError:
            return None
    return None


def get_env_float(*args):
    s = get_env(*args)
    if s is not None:
        try:
            return float(s)
        except ValueError:
            return None
    return None


def get_version():
    return '{}'
"#,
            python_header(),
            self.version
        )
    }
}
