use crate::errors::AppError;
use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the eight fixed board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ColumnName {
    Generator,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ColumnName {
    /// Fixed iteration order: generator pool first, then the week.
    pub const ALL: [ColumnName; 8] = [
        ColumnName::Generator,
        ColumnName::Monday,
        ColumnName::Tuesday,
        ColumnName::Wednesday,
        ColumnName::Thursday,
        ColumnName::Friday,
        ColumnName::Saturday,
        ColumnName::Sunday,
    ];

    pub const WEEKDAYS: [ColumnName; 7] = [
        ColumnName::Monday,
        ColumnName::Tuesday,
        ColumnName::Wednesday,
        ColumnName::Thursday,
        ColumnName::Friday,
        ColumnName::Saturday,
        ColumnName::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_generator(self) -> bool {
        matches!(self, ColumnName::Generator)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnName::Generator => "Generator",
            ColumnName::Monday => "Monday",
            ColumnName::Tuesday => "Tuesday",
            ColumnName::Wednesday => "Wednesday",
            ColumnName::Thursday => "Thursday",
            ColumnName::Friday => "Friday",
            ColumnName::Saturday => "Saturday",
            ColumnName::Sunday => "Sunday",
        }
    }

    /// Traditional Chinese column title.
    pub fn zh_title(self) -> &'static str {
        match self {
            ColumnName::Generator => "已生成時間",
            ColumnName::Monday => "星期一",
            ColumnName::Tuesday => "星期二",
            ColumnName::Wednesday => "星期三",
            ColumnName::Thursday => "星期四",
            ColumnName::Friday => "星期五",
            ColumnName::Saturday => "星期六",
            ColumnName::Sunday => "星期日",
        }
    }

    /// Short aliases accepted on input, besides the full name and the zh title.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ColumnName::Generator => &["gen", "pool"],
            ColumnName::Monday => &["mon"],
            ColumnName::Tuesday => &["tue"],
            ColumnName::Wednesday => &["wed"],
            ColumnName::Thursday => &["thu"],
            ColumnName::Friday => &["fri"],
            ColumnName::Saturday => &["sat"],
            ColumnName::Sunday => &["sun"],
        }
    }

    pub fn from_weekday(day: Weekday) -> Self {
        ColumnName::WEEKDAYS[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let lower = input.to_lowercase();

        ColumnName::ALL
            .into_iter()
            .find(|c| {
                c.as_str().to_lowercase() == lower
                    || c.zh_title() == input
                    || c.aliases().contains(&lower.as_str())
            })
            .ok_or_else(|| AppError::UnknownColumn(input.to_string()))
    }
}
