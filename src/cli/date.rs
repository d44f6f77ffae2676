//! Date argument parsing
//!
//! Date words are joined and split on runs of non-digits, so `2024-01-05`,
//! `2024/1/5` and `2024 1 5` all mean the same day.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use regex::Regex;

/// Parse optional date words, falling back to `today` when there are none
pub fn parse_date_args(args: &[String], today: NaiveDate) -> Result<NaiveDate> {
    if args.is_empty() {
        return Ok(today);
    }
    parse_date(&args.join(" "))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let separators = Regex::new(r"\D+")?;
    let parts: Vec<&str> = separators.split(s).filter(|p| !p.is_empty()).collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("date must have 3 numbers (year month day), got '{}'", s);
    };

    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year '{}'", year))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month '{}'", month))?;
    let day: u32 = day.parse().with_context(|| format!("invalid day '{}'", day))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("{:04}-{:02}-{:02} is not a valid date", year, month, day))
}
