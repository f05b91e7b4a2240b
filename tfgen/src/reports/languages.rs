//! Languages command report.

use tfgen_schema::Language;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct LanguagesReport {
    pub languages: Vec<(Language, &'static str)>,
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self
            .languages
            .iter()
            .map(|(l, _)| l.as_str().len())
            .max()
            .unwrap_or(0);
        for (language, description) in &self.languages {
            out.line(&format!(
                "{:width$}  {}",
                language.as_str(),
                description,
                width = width
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_aligns_descriptions() {
        let report = LanguagesReport {
            languages: vec![(Language::Go, "Go module"), (Language::Python, "Python package")],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["go      Go module", "python  Python package"]);
    }
}
