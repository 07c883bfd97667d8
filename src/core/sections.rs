use crate::core::calculator::Calculator;
use crate::core::{collections, sequence};
use crate::domain::model::Profile;
use crate::domain::ports::{ConfigProvider, Section};
use crate::utils::error::{DemoError, Result};

fn overflow_error(field: &str, value: String) -> DemoError {
    DemoError::InvalidConfigValueError {
        field: field.to_string(),
        value,
        reason: "Result does not fit in a 64-bit integer".to_string(),
    }
}

pub struct GreetingSection {
    name: String,
}

impl GreetingSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Section for GreetingSection {
    fn name(&self) -> &str {
        "greeting"
    }

    fn title(&self) -> String {
        String::new()
    }

    fn render(&self) -> Result<Vec<String>> {
        Ok(vec![collections::greet(&self.name)])
    }
}

pub struct SequenceSection {
    length: i64,
}

impl SequenceSection {
    pub fn new(length: i64) -> Self {
        Self { length }
    }
}

impl Section for SequenceSection {
    fn name(&self) -> &str {
        "sequence"
    }

    fn title(&self) -> String {
        // generate() 最多只產生 MAX_SEQUENCE_LENGTH 項
        let shown = self.length.clamp(0, sequence::MAX_SEQUENCE_LENGTH);
        format!("Fibonacci sequence (first {} terms):", shown)
    }

    fn render(&self) -> Result<Vec<String>> {
        let terms = sequence::generate(self.length);
        tracing::debug!("Generated {} sequence terms", terms.len());
        Ok(vec![format!("{:?}", terms)])
    }
}

pub struct SquaresSection {
    start: i64,
    end: i64,
}

impl SquaresSection {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl Section for SquaresSection {
    fn name(&self) -> &str {
        "squares"
    }

    fn title(&self) -> String {
        "List comprehension example:".to_string()
    }

    fn render(&self) -> Result<Vec<String>> {
        let squares = collections::squares(self.start, self.end).ok_or_else(|| {
            overflow_error("square_range", format!("{}..={}", self.start, self.end))
        })?;
        Ok(vec![format!(
            "Squares of {}-{}: {:?}",
            self.start, self.end, squares
        )])
    }
}

pub struct MappingSection {
    profile: Profile,
}

impl MappingSection {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Section for MappingSection {
    fn name(&self) -> &str {
        "mapping"
    }

    fn title(&self) -> String {
        "Mapping example:".to_string()
    }

    fn render(&self) -> Result<Vec<String>> {
        Ok(self
            .profile
            .entries()
            .into_iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect())
    }
}

pub struct CollectionsSection {
    numbers: Vec<i64>,
}

impl CollectionsSection {
    pub fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }
}

impl Section for CollectionsSection {
    fn name(&self) -> &str {
        "collections"
    }

    fn title(&self) -> String {
        "Array operations example:".to_string()
    }

    fn render(&self) -> Result<Vec<String>> {
        let doubled = collections::doubled(&self.numbers)
            .ok_or_else(|| overflow_error("numbers", format!("{:?}", self.numbers)))?;
        let sum = collections::sum(&self.numbers)
            .ok_or_else(|| overflow_error("numbers", format!("{:?}", self.numbers)))?;

        Ok(vec![
            format!("Original: {:?}", self.numbers),
            format!("Doubled: {:?}", doubled),
            format!("Evens: {:?}", collections::evens(&self.numbers)),
            format!("Sum: {}", sum),
            format!("add(2, 3) = {}", collections::add(2, 3)),
        ])
    }
}

pub struct IntroductionSection {
    profile: Profile,
}

impl IntroductionSection {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Section for IntroductionSection {
    fn name(&self) -> &str {
        "introduction"
    }

    fn title(&self) -> String {
        "Object method example:".to_string()
    }

    fn render(&self) -> Result<Vec<String>> {
        Ok(vec![self.profile.introduce()])
    }
}

pub struct CalculatorSection {
    calculator: Calculator,
}

impl CalculatorSection {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }
}

impl Section for CalculatorSection {
    fn name(&self) -> &str {
        "calculator"
    }

    fn title(&self) -> String {
        "Struct example:".to_string()
    }

    fn render(&self) -> Result<Vec<String>> {
        let calc = &self.calculator;
        let name = calc.name();
        let mut lines = vec![
            format!("{} - 10 + 5 = {}", name, calc.add(10.0, 5.0)),
            format!("{} - 10 - 5 = {}", name, calc.subtract(10.0, 5.0)),
            format!("{} - 10 * 5 = {}", name, calc.multiply(10.0, 5.0)),
        ];

        for divisor in [5.0, 0.0] {
            // 除以零只影響這一行，不中斷整段輸出
            let line = match calc.divide(10.0, divisor) {
                Ok(value) => format!("{} - 10 / {} = {}", name, divisor, value),
                Err(e) => format!("{} - 10 / {} = error: {}", name, divisor, e),
            };
            lines.push(line);
        }

        Ok(lines)
    }
}

/// 依設定組出段落清單；`extended` 時附加額外的示範段落
pub fn build_sections<C: ConfigProvider>(config: &C) -> Vec<Box<dyn Section>> {
    let (start, end) = config.square_range();
    let mut sections: Vec<Box<dyn Section>> = vec![
        Box::new(GreetingSection::new(config.greeting_name())),
        Box::new(SequenceSection::new(config.sequence_length())),
        Box::new(SquaresSection::new(start, end)),
        Box::new(MappingSection::new(config.profile().clone())),
    ];

    if config.extended() {
        sections.push(Box::new(CollectionsSection::new(config.numbers().to_vec())));
        sections.push(Box::new(IntroductionSection::new(config.profile().clone())));
        sections.push(Box::new(CalculatorSection::new(Calculator::new(
            config.calculator_name(),
        ))));
    }

    sections
}
