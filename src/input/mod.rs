pub mod derive;
pub mod presets;

use crate::error::{LqError, Result};
use crate::types::record::RawInputRecord;
use crate::types::variable::{Variable, VARIABLE_COUNT};
use std::collections::BTreeMap;
use std::path::Path;

/// Raw fields that feed a derived variable instead of being scored directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperField {
    OuraHigh,
    OuraMedium,
    RemMinutes,
    TotalSleepMinutes,
}

impl HelperField {
    pub const ALL: [HelperField; 4] = [
        HelperField::OuraHigh,
        HelperField::OuraMedium,
        HelperField::RemMinutes,
        HelperField::TotalSleepMinutes,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HelperField::OuraHigh => "oura_high",
            HelperField::OuraMedium => "oura_medium",
            HelperField::RemMinutes => "rem_minutes",
            HelperField::TotalSleepMinutes => "total_sleep_minutes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Variable(Variable),
    Helper(HelperField),
}

impl Field {
    /// Matches a column or key name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Field> {
        let normalized = name.trim().to_ascii_lowercase();
        if let Some(helper) = HelperField::ALL
            .iter()
            .find(|helper| helper.id() == normalized)
        {
            return Some(Field::Helper(*helper));
        }
        normalized.parse::<Variable>().ok().map(Field::Variable)
    }
}

/// A possibly incomplete set of raw values, resolved into a [`RawInputRecord`] before scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRow {
    values: [Option<f64>; VARIABLE_COUNT],
    helpers: [Option<f64>; 4],
}

impl InputRow {
    pub fn from_record(record: &RawInputRecord) -> Self {
        let mut row = Self::default();
        for (variable, value) in record.iter() {
            row.set_variable(variable, value);
        }
        row
    }

    pub fn from_pairs<K: AsRef<str>>(pairs: impl IntoIterator<Item = (K, f64)>) -> Result<Self> {
        let mut row = Self::default();
        for (key, value) in pairs {
            row.set(key.as_ref(), value)?;
        }
        Ok(row)
    }

    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        let field =
            Field::parse(key).ok_or_else(|| LqError::UnknownVariable(key.trim().to_string()))?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: f64) {
        match field {
            Field::Variable(variable) => self.set_variable(variable, value),
            Field::Helper(helper) => self.helpers[helper as usize] = Some(value),
        }
    }

    pub fn set_variable(&mut self, variable: Variable, value: f64) {
        self.values[variable.index()] = Some(value);
    }

    pub fn get(&self, variable: Variable) -> Option<f64> {
        self.values[variable.index()]
    }

    pub fn helper(&self, helper: HelperField) -> Option<f64> {
        self.helpers[helper as usize]
    }

    /// Replaces any explicit MVPA with one derived from activity minutes.
    pub fn use_activity_minutes(&mut self, high_minutes: f64, medium_minutes: f64) {
        self.values[Variable::Mvpa.index()] = None;
        self.set_field(Field::Helper(HelperField::OuraHigh), high_minutes);
        self.set_field(Field::Helper(HelperField::OuraMedium), medium_minutes);
    }

    /// Replaces any explicit REM percentage with one derived from sleep minutes.
    pub fn use_sleep_minutes(&mut self, rem_minutes: f64, total_sleep_minutes: f64) {
        self.values[Variable::RemPct.index()] = None;
        self.set_field(Field::Helper(HelperField::RemMinutes), rem_minutes);
        self.set_field(
            Field::Helper(HelperField::TotalSleepMinutes),
            total_sleep_minutes,
        );
    }

    /// Fills derived variables from helper fields and checks completeness.
    pub fn resolve(&self) -> Result<RawInputRecord> {
        let mut values = [0.0; VARIABLE_COUNT];
        for variable in Variable::ORDER {
            let value = match self.get(variable) {
                Some(value) => value,
                None => self
                    .derived(variable)?
                    .ok_or_else(|| LqError::MissingField(variable.id().to_string()))?,
            };
            if !value.is_finite() {
                return Err(LqError::InvalidInput(format!(
                    "{} must be a finite number (got {value})",
                    variable.id()
                )));
            }
            values[variable.index()] = value;
        }
        Ok(RawInputRecord::from_fn(|variable| values[variable.index()]))
    }

    fn derived(&self, variable: Variable) -> Result<Option<f64>> {
        match variable {
            Variable::Mvpa => Ok(self
                .helper(HelperField::OuraHigh)
                .zip(self.helper(HelperField::OuraMedium))
                .map(|(high, medium)| derive::mvpa_from_activity(high, medium))),
            Variable::RemPct => match self
                .helper(HelperField::RemMinutes)
                .zip(self.helper(HelperField::TotalSleepMinutes))
            {
                Some((rem, total)) => derive::rem_pct_from_sleep(rem, total).map(Some),
                None => Ok(None),
            },
            _ => Ok(None),
        }
    }
}

/// Reads a single record from a `.toml` or `.json` object keyed by field name.
pub fn load_file(path: &Path) -> Result<InputRow> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let pairs: BTreeMap<String, f64> = match extension.as_deref() {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(LqError::InvalidInput(format!(
                "unsupported input file (expected .toml or .json): {}",
                path.display()
            )))
        }
    };
    InputRow::from_pairs(pairs)
}
