use crate::types::record::RawInputRecord;
use crate::types::variable::Variable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Typical,
    HighPerformer,
}

impl Preset {
    pub fn record(self) -> RawInputRecord {
        match self {
            Preset::Typical => RawInputRecord::from_fn(|variable| match variable {
                Variable::Ogtt2h => 152.0,
                Variable::Apob => 107.0,
                Variable::Vo2max => 34.0,
                Variable::Crp => 2.0,
                Variable::Bmi => 29.6,
                Variable::Packyrs => 0.0,
                Variable::Moca => 25.0,
                Variable::Mvpa => 112.5,
                Variable::Cac => 98.0,
                Variable::Hrv => 47.0,
                Variable::Phq9 => 7.0,
                Variable::Alt => 42.0,
                Variable::Egfr => 82.0,
                Variable::BmdT => -1.2,
                Variable::TruageDelta => 2.0,
                Variable::SmallHdl => 10.2,
                // 52 REM minutes over a 420 minute night
                Variable::RemPct => (52.0 / 420.0) * 100.0,
                Variable::Grip => 38.0,
                Variable::Swls => 26.0,
                Variable::Rpdqs => 35.0,
            }),
            Preset::HighPerformer => RawInputRecord::from_fn(|variable| match variable {
                Variable::Ogtt2h => 85.0,
                Variable::Apob => 60.0,
                Variable::Vo2max => 55.0,
                Variable::Crp => 0.4,
                Variable::Bmi => 22.5,
                Variable::Packyrs => 0.0,
                Variable::Moca => 29.0,
                Variable::Mvpa => 300.0,
                Variable::Cac => 0.0,
                Variable::Hrv => 75.0,
                Variable::Phq9 => 0.0,
                Variable::Alt => 18.0,
                Variable::Egfr => 110.0,
                Variable::BmdT => 1.0,
                Variable::TruageDelta => -5.0,
                Variable::SmallHdl => 40.0,
                Variable::RemPct => (120.0 / 420.0) * 100.0,
                Variable::Grip => 55.0,
                Variable::Swls => 33.0,
                Variable::Rpdqs => 48.0,
            }),
        }
    }
}
