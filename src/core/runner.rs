use crate::core::sections::build_sections;
use crate::domain::model::{Report, SectionOutput};
use crate::domain::ports::{ConfigProvider, Section};
use crate::utils::error::Result;
use std::io::Write;

pub const BANNER: &str = "=== Rust Syntax Tour ===";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct DemoRunner {
    sections: Vec<Box<dyn Section>>,
}

impl DemoRunner {
    pub fn new(sections: Vec<Box<dyn Section>>) -> Self {
        Self { sections }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(build_sections(config))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// 依序渲染所有段落，不做任何輸出
    pub fn report(&self) -> Result<Report> {
        let mut sections = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            tracing::debug!("Rendering section '{}'", section.name());
            sections.push(SectionOutput {
                name: section.name().to_string(),
                title: section.title(),
                lines: section.render()?,
            });
        }
        Ok(Report { sections })
    }

    pub fn run<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<Report> {
        let report = self.report()?;

        match format {
            OutputFormat::Text => write_text(out, &report)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }

        tracing::info!(
            "Rendered {} sections as {:?}",
            report.sections.len(),
            format
        );
        Ok(report)
    }
}

fn write_text<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    writeln!(out, "{}", BANNER)?;
    for section in &report.sections {
        writeln!(out)?;
        if !section.title.is_empty() {
            writeln!(out, "{}", section.title)?;
        }
        for line in &section.lines {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sections::{GreetingSection, SequenceSection};
    use crate::utils::error::DemoError;

    struct FailingSection;

    impl Section for FailingSection {
        fn name(&self) -> &str {
            "failing"
        }

        fn title(&self) -> String {
            "Never printed".to_string()
        }

        fn render(&self) -> Result<Vec<String>> {
            Err(DemoError::DivisionByZero)
        }
    }

    #[test]
    fn test_text_layout() {
        let runner = DemoRunner::new(vec![
            Box::new(GreetingSection::new("World")),
            Box::new(SequenceSection::new(3)),
        ]);

        let mut buf = Vec::new();
        runner.run(&mut buf, OutputFormat::Text).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "=== Rust Syntax Tour ===\n\nHello, World!\n\nFibonacci sequence (first 3 terms):\n[1, 1, 2]\n"
        );
    }

    #[test]
    fn test_failing_section_writes_nothing() {
        let runner = DemoRunner::new(vec![
            Box::new(GreetingSection::new("World")),
            Box::new(FailingSection),
        ]);

        let mut buf = Vec::new();
        let result = runner.run(&mut buf, OutputFormat::Text);

        assert!(matches!(result, Err(DemoError::DivisionByZero)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_json_output_parses_back() {
        let runner = DemoRunner::new(vec![Box::new(SequenceSection::new(4))]);

        let mut buf = Vec::new();
        let report = runner.run(&mut buf, OutputFormat::Json).unwrap();

        let parsed: Report = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.sections[0].lines, vec!["[1, 1, 2, 3]"]);
    }
}
