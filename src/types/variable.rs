use crate::error::LqError;
use std::fmt;
use std::str::FromStr;

pub const VARIABLE_COUNT: usize = 20;

/// Full attainable score of the rPDQS diet questionnaire.
pub const RPDQS_FULL_SCALE: f64 = 52.0;

/// The 20 LQ inputs, declared in aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    Ogtt2h,
    Apob,
    Vo2max,
    Crp,
    Bmi,
    Packyrs,
    Moca,
    Mvpa,
    Cac,
    Hrv,
    Phq9,
    Alt,
    Egfr,
    BmdT,
    TruageDelta,
    SmallHdl,
    RemPct,
    Grip,
    Swls,
    Rpdqs,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizationKind {
    ZScore,
    Cac,
    Ratio { full_scale: f64 },
}

impl Variable {
    pub const ORDER: [Variable; VARIABLE_COUNT] = [
        Variable::Ogtt2h,
        Variable::Apob,
        Variable::Vo2max,
        Variable::Crp,
        Variable::Bmi,
        Variable::Packyrs,
        Variable::Moca,
        Variable::Mvpa,
        Variable::Cac,
        Variable::Hrv,
        Variable::Phq9,
        Variable::Alt,
        Variable::Egfr,
        Variable::BmdT,
        Variable::TruageDelta,
        Variable::SmallHdl,
        Variable::RemPct,
        Variable::Grip,
        Variable::Swls,
        Variable::Rpdqs,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Variable::Ogtt2h => "ogtt_2h",
            Variable::Apob => "apob",
            Variable::Vo2max => "vo2max",
            Variable::Crp => "crp",
            Variable::Bmi => "bmi",
            Variable::Packyrs => "packyrs",
            Variable::Moca => "moca",
            Variable::Mvpa => "mvpa",
            Variable::Cac => "cac",
            Variable::Hrv => "hrv",
            Variable::Phq9 => "phq9",
            Variable::Alt => "alt",
            Variable::Egfr => "egfr",
            Variable::BmdT => "bmd_t",
            Variable::TruageDelta => "truage_delta",
            Variable::SmallHdl => "small_hdl",
            Variable::RemPct => "rem_pct",
            Variable::Grip => "grip",
            Variable::Swls => "swls",
            Variable::Rpdqs => "rpdqs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variable::Ogtt2h => "2-hour OGTT (mg/dL)",
            Variable::Apob => "ApoB (mg/dL)",
            Variable::Vo2max => "VO₂max (mL/kg/min)",
            Variable::Crp => "CRP (mg/L)",
            Variable::Bmi => "BMI",
            Variable::Packyrs => "Pack-years",
            Variable::Moca => "MoCA (0–30)",
            Variable::Mvpa => "MVPA (min/week)",
            Variable::Cac => "CAC (Agatston)",
            Variable::Hrv => "HRV (ms)",
            Variable::Phq9 => "PHQ-9 (0–27)",
            Variable::Alt => "ALT (U/L)",
            Variable::Egfr => "eGFR (mL/min/1.73m²)",
            Variable::BmdT => "BMD T-score",
            Variable::TruageDelta => "Epigenetic age delta (yrs)",
            Variable::SmallHdl => "Small HDL (μmol/L)",
            Variable::RemPct => "REM sleep (% TST)",
            Variable::Grip => "Grip (kg)",
            Variable::Swls => "SWLS (5–35)",
            Variable::Rpdqs => "rPDQS (0–52)",
        }
    }

    pub fn kind(self) -> NormalizationKind {
        match self {
            Variable::Cac => NormalizationKind::Cac,
            Variable::Rpdqs => NormalizationKind::Ratio {
                full_scale: RPDQS_FULL_SCALE,
            },
            _ => NormalizationKind::ZScore,
        }
    }

    /// Attainable range of bounded instruments. Informational only; scoring never enforces it.
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Variable::Moca => Some((0.0, 30.0)),
            Variable::Phq9 => Some((0.0, 27.0)),
            Variable::Swls => Some((5.0, 35.0)),
            Variable::Rpdqs => Some((0.0, RPDQS_FULL_SCALE)),
            Variable::RemPct => Some((0.0, 100.0)),
            _ => None,
        }
    }

    pub fn score_column(self) -> String {
        format!("N_{}", self.id())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Variable {
    type Err = LqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Variable::ORDER
            .iter()
            .copied()
            .find(|variable| variable.id() == normalized)
            .ok_or_else(|| LqError::UnknownVariable(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_declaration_index() {
        for (position, variable) in Variable::ORDER.iter().enumerate() {
            assert_eq!(variable.index(), position, "{variable} is out of order");
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(
            " BMD_T ".parse::<Variable>().expect("bmd_t should parse"),
            Variable::BmdT
        );
        assert_eq!(
            "rem_pct".parse::<Variable>().expect("rem_pct should parse"),
            Variable::RemPct
        );
    }

    #[test]
    fn parse_rejects_unknown_identifier() {
        let result = "ldl".parse::<Variable>();
        assert!(matches!(result, Err(LqError::UnknownVariable(ref id)) if id == "ldl"));
    }

    #[test]
    fn only_cac_and_rpdqs_skip_zscore() {
        let special = Variable::ORDER
            .iter()
            .filter(|variable| variable.kind() != NormalizationKind::ZScore)
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(special, vec![Variable::Cac, Variable::Rpdqs]);
        assert_eq!(
            Variable::Rpdqs.kind(),
            NormalizationKind::Ratio { full_scale: 52.0 }
        );
    }

    #[test]
    fn score_column_uses_prefix() {
        assert_eq!(Variable::TruageDelta.score_column(), "N_truage_delta");
    }
}
