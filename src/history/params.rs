/// The unit the `period` parameter counts in.
#[derive(Debug, Clone, Copy)]
pub enum PeriodType {
    Day,
    Month,
    Year,
    Ytd,
}

impl PeriodType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            PeriodType::Day => "day",
            PeriodType::Month => "month",
            PeriodType::Year => "year",
            PeriodType::Ytd => "ytd",
        }
    }
}

/// The unit the `frequency` parameter counts in.
#[derive(Debug, Clone, Copy)]
pub enum FrequencyType {
    Minute,
    Daily,
    Weekly,
    Monthly,
}

impl FrequencyType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            FrequencyType::Minute => "minute",
            FrequencyType::Daily => "daily",
            FrequencyType::Weekly => "weekly",
            FrequencyType::Monthly => "monthly",
        }
    }
}
