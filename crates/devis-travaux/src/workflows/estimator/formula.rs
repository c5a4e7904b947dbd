use std::collections::HashMap;

/// Conversion from a user-entered quantity to a cost contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CustomValueFormula {
    /// `n × rate`
    PerUnit(f64),
    /// `(n − threshold) × rate` above the threshold, zero otherwise.
    AboveThreshold { threshold: f64, rate: f64 },
}

impl CustomValueFormula {
    pub fn apply(&self, quantity: f64) -> f64 {
        match *self {
            CustomValueFormula::PerUnit(rate) => quantity * rate,
            CustomValueFormula::AboveThreshold { threshold, rate } => {
                if quantity > threshold {
                    (quantity - threshold) * rate
                } else {
                    0.0
                }
            }
        }
    }
}

/// Formula lookup keyed by question id, shared by every category.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaTable {
    by_question: HashMap<String, CustomValueFormula>,
    fallback: CustomValueFormula,
}

impl FormulaTable {
    pub fn new(fallback: CustomValueFormula) -> Self {
        Self {
            by_question: HashMap::new(),
            fallback,
        }
    }

    pub fn standard() -> Self {
        Self::new(CustomValueFormula::PerUnit(30.0))
            .with("surface", CustomValueFormula::PerUnit(25.0))
            .with(
                "height",
                CustomValueFormula::AboveThreshold {
                    threshold: 2.5,
                    rate: 100.0,
                },
            )
            .with("outlets", CustomValueFormula::PerUnit(50.0))
            .with("lighting", CustomValueFormula::PerUnit(50.0))
    }

    pub fn with(mut self, question_id: &str, formula: CustomValueFormula) -> Self {
        self.by_question.insert(question_id.to_string(), formula);
        self
    }

    pub fn formula_for(&self, question_id: &str) -> CustomValueFormula {
        self.by_question
            .get(question_id)
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn resolve(&self, question_id: &str, quantity: f64) -> f64 {
        self.formula_for(question_id).apply(quantity)
    }
}

impl Default for FormulaTable {
    fn default() -> Self {
        Self::standard()
    }
}
