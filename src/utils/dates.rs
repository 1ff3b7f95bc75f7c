use crate::utils::error::{HarnessError, Result};
use chrono::{Datelike, Local, Months, NaiveDate, TimeDelta};

pub const DATE_FORMAT: &str = "%m/%d/%Y";
pub const NON_ZERO_PADDED_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const MONTH_YEAR_FORMAT: &str = "%B %Y";
pub const YYYY_MM_DD_FORMAT: &str = "%Y/%m/%d";
pub const YYYY_MMM_DD_FORMAT: &str = "%Y-%b-%d";
pub const YYYY_MM_DD_DOTTED_FORMAT: &str = "%Y.%m.%d";

/// UI 測試用的日期字串，每次測試執行計算一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFixtures {
    pub today: String,
    pub today_without_zero_pad: String,
    pub expiry_date: String,
    pub today_day: String,
    pub next_month_24th: String,
    pub next_month_24th_without_zero_pad: String,
    pub previous_month_4th_without_zero_pad: String,
    pub current_month_and_year: String,
}

impl DateFixtures {
    pub fn for_today(expiry_weeks: i64) -> Result<Self> {
        Self::for_date(Local::now().date_naive(), expiry_weeks)
    }

    pub fn for_date(today: NaiveDate, expiry_weeks: i64) -> Result<Self> {
        let next_month_24th = today
            .checked_add_months(Months::new(2))
            .map(|d| day_of_month(d, 24))
            .ok_or_else(|| out_of_range(today, "two months ahead"))?;
        let previous_month_4th = today
            .checked_sub_months(Months::new(1))
            .map(|d| day_of_month(d, 4))
            .ok_or_else(|| out_of_range(today, "one month back"))?;
        let expiry_date = TimeDelta::try_weeks(expiry_weeks)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or_else(|| out_of_range(today, &format!("{} weeks ahead", expiry_weeks)))?;

        Ok(Self {
            today: format_date(today, DATE_FORMAT),
            today_without_zero_pad: format_date(today, NON_ZERO_PADDED_DATE_FORMAT),
            expiry_date: format_date(expiry_date, DATE_FORMAT),
            today_day: format_date(today, "%d"),
            next_month_24th: format_date(next_month_24th, DATE_FORMAT),
            next_month_24th_without_zero_pad: format_date(
                next_month_24th,
                NON_ZERO_PADDED_DATE_FORMAT,
            ),
            previous_month_4th_without_zero_pad: format_date(
                previous_month_4th,
                NON_ZERO_PADDED_DATE_FORMAT,
            ),
            current_month_and_year: format_date(today, MONTH_YEAR_FORMAT),
        })
    }
}

fn out_of_range(today: NaiveDate, offset: &str) -> HarnessError {
    HarnessError::DateOutOfRange {
        message: format!("{} from {} is not a representable date", offset, today),
    }
}

pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

// day 4 和 day 24 在任何月份都存在
fn day_of_month(date: NaiveDate, day: u32) -> NaiveDate {
    date.with_day(day).unwrap_or(date)
}
