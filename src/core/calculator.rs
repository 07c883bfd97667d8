use crate::utils::error::{DemoError, Result};

#[derive(Debug, Clone)]
pub struct Calculator {
    name: String,
}

impl Calculator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            tracing::debug!("{}: refusing {} / 0", self.name, a);
            return Err(DemoError::DivisionByZero);
        }
        Ok(a / b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let calc = Calculator::new("test");
        assert_eq!(calc.add(10.0, 5.0), 15.0);
        assert_eq!(calc.subtract(10.0, 5.0), 5.0);
        assert_eq!(calc.multiply(10.0, 5.0), 50.0);
        assert_eq!(calc.divide(10.0, 5.0).unwrap(), 2.0);
        assert_eq!(calc.name(), "test");
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator::new("test");
        assert!(matches!(calc.divide(10.0, 0.0), Err(DemoError::DivisionByZero)));
        assert!(matches!(calc.divide(10.0, -0.0), Err(DemoError::DivisionByZero)));
    }
}
