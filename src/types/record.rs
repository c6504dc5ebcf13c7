use crate::types::variable::{Variable, VARIABLE_COUNT};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One raw measurement per variable, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInputRecord {
    values: [f64; VARIABLE_COUNT],
}

impl RawInputRecord {
    pub fn from_fn(mut value_of: impl FnMut(Variable) -> f64) -> Self {
        let mut values = [0.0; VARIABLE_COUNT];
        for variable in Variable::ORDER {
            values[variable.index()] = value_of(variable);
        }
        Self { values }
    }

    pub fn get(&self, variable: Variable) -> f64 {
        self.values[variable.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        Variable::ORDER
            .iter()
            .map(move |variable| (*variable, self.get(*variable)))
    }
}

impl Serialize for RawInputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(VARIABLE_COUNT))?;
        for (variable, value) in self.iter() {
            map.serialize_entry(variable.id(), &value)?;
        }
        map.end()
    }
}

/// Scoring output: 20 sub-scores in [0, 100], their mean and the final LQ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRecord {
    scores: [f64; VARIABLE_COUNT],
    composite: f64,
    lq: f64,
}

impl NormalizedRecord {
    pub(crate) fn new(scores: [f64; VARIABLE_COUNT], composite: f64, lq: f64) -> Self {
        Self {
            scores,
            composite,
            lq,
        }
    }

    pub fn score(&self, variable: Variable) -> f64 {
        self.scores[variable.index()]
    }

    pub fn composite(&self) -> f64 {
        self.composite
    }

    pub fn lq(&self) -> f64 {
        self.lq
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        Variable::ORDER
            .iter()
            .map(move |variable| (*variable, self.score(*variable)))
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(VARIABLE_COUNT + 2))?;
        for (variable, score) in self.iter() {
            map.serialize_entry(&variable.score_column(), &score)?;
        }
        map.serialize_entry("composite", &self.composite)?;
        map.serialize_entry("LQ", &self.lq)?;
        map.end()
    }
}
