use crate::error::{LqError, Result};
use crate::types::variable::Variable;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::HigherIsBetter => 1.0,
            Direction::LowerIsBetter => -1.0,
        }
    }
}

/// Population reference for a z-scored variable. `standard_deviation` is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableSpec {
    pub mean: f64,
    pub standard_deviation: f64,
    pub direction: Direction,
}

impl VariableSpec {
    const fn new(mean: f64, standard_deviation: f64, direction: Direction) -> Self {
        Self {
            mean,
            standard_deviation,
            direction,
        }
    }
}

/// Immutable reference parameters, built once and passed to the scorer.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: BTreeMap<Variable, VariableSpec>,
}

impl ReferenceTable {
    /// Reference parameters of LQ v1.1.
    pub fn lq_v1_1() -> Self {
        use Direction::{HigherIsBetter as Up, LowerIsBetter as Down};

        let entries = [
            (Variable::Ogtt2h, VariableSpec::new(120.0, 35.0, Down)),
            (Variable::Apob, VariableSpec::new(90.0, 25.0, Down)),
            (Variable::Vo2max, VariableSpec::new(36.0, 8.0, Up)),
            (Variable::Crp, VariableSpec::new(1.5, 0.8, Down)),
            (Variable::Bmi, VariableSpec::new(26.0, 5.0, Down)),
            (Variable::Packyrs, VariableSpec::new(2.0, 5.0, Down)),
            (Variable::Moca, VariableSpec::new(27.0, 2.0, Up)),
            (Variable::Mvpa, VariableSpec::new(150.0, 75.0, Up)),
            (Variable::Hrv, VariableSpec::new(35.0, 15.0, Up)),
            (Variable::Phq9, VariableSpec::new(4.0, 4.0, Down)),
            (Variable::Alt, VariableSpec::new(25.0, 12.0, Down)),
            (Variable::Egfr, VariableSpec::new(95.0, 15.0, Up)),
            (Variable::BmdT, VariableSpec::new(-0.5, 1.0, Up)),
            (Variable::TruageDelta, VariableSpec::new(2.0, 5.0, Down)),
            (Variable::SmallHdl, VariableSpec::new(25.0, 5.0, Up)),
            (Variable::RemPct, VariableSpec::new(20.0, 5.0, Up)),
            (Variable::Grip, VariableSpec::new(38.0, 10.0, Up)),
            (Variable::Swls, VariableSpec::new(24.0, 6.0, Up)),
        ];

        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, variable: Variable) -> Result<&VariableSpec> {
        self.entries
            .get(&variable)
            .ok_or_else(|| LqError::UnknownVariable(variable.id().to_string()))
    }
}
