//! Temporal reducers: timelines, weekday activity, heatmap and busiest hour.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::frequency::rank;
use super::models::{DailyPoint, Heatmap, MonthlyPoint, MostActiveTime, WeekdayCount};
use crate::record::{HourBucket, Record, month_name, weekday_name};

/// Messages per calendar month, oldest first, labelled `"Month-Year"`.
///
/// ```
/// use chatlens::core::timeline::monthly_timeline;
/// use chatlens::Record;
/// use chrono::NaiveDate;
///
/// let at = |y, m| NaiveDate::from_ymd_opt(y, m, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let records = vec![
///     Record::new(at(2024, 1), "Alice", "late"),
///     Record::new(at(2023, 12), "Bob", "early"),
///     Record::new(at(2024, 1), "Bob", "again"),
/// ];
///
/// let timeline = monthly_timeline(&records);
/// assert_eq!(timeline[0].time, "December-2023");
/// assert_eq!(timeline[1].time, "January-2024");
/// assert_eq!(timeline[1].message, 2);
/// ```
pub fn monthly_timeline(records: &[Record]) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        *months.entry((record.year(), record.month())).or_default() += 1;
    }
    months
        .into_iter()
        .map(|((year, month), message)| MonthlyPoint {
            time: format!("{}-{}", month_name(month), year),
            message,
        })
        .collect()
}

/// Messages per calendar date, oldest first.
pub fn daily_timeline(records: &[Record]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *days.entry(record.date()).or_default() += 1;
    }
    days.into_iter()
        .map(|(only_date, message)| DailyPoint { only_date, message })
        .collect()
}

/// Messages per weekday name, busiest first. Only weekdays that occur are
/// listed.
pub fn weekly_activity(records: &[Record]) -> Vec<WeekdayCount> {
    rank(records.iter().map(Record::day_name))
        .into_iter()
        .map(|(day, count)| WeekdayCount {
            day: day.to_string(),
            count,
        })
        .collect()
}

/// Dense weekday × hour-bucket matrix.
///
/// ```
/// use chatlens::core::timeline::activity_heatmap;
/// use chatlens::Record;
/// use chrono::NaiveDate;
///
/// // 2024-02-05 is a Monday, 2024-02-09 a Friday
/// let at = |d, h| NaiveDate::from_ymd_opt(2024, 2, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let records = vec![
///     Record::new(at(9, 23), "Alice", "night"),
///     Record::new(at(5, 8), "Bob", "morning"),
/// ];
///
/// let heatmap = activity_heatmap(&records);
/// assert_eq!(heatmap.days, ["Monday", "Friday"]);
/// assert_eq!(heatmap.get("Monday", "8-9"), Some(1));
/// assert_eq!(heatmap.get("Monday", "23-00"), Some(0));
/// ```
pub fn activity_heatmap(records: &[Record]) -> Heatmap {
    let mut grid = [[0usize; HourBucket::COUNT]; 7];
    for record in records {
        let day = record.weekday().num_days_from_monday() as usize;
        grid[day][record.hour_bucket().index()] += 1;
    }

    let rows: Vec<usize> = (0..7)
        .filter(|&day| grid[day].iter().any(|&c| c > 0))
        .collect();
    let buckets: Vec<HourBucket> = HourBucket::all()
        .filter(|bucket| grid.iter().any(|row| row[bucket.index()] > 0))
        .collect();

    Heatmap {
        days: rows
            .iter()
            .map(|&day| weekday_name(weekday_from_monday(day)).to_string())
            .collect(),
        counts: rows
            .iter()
            .map(|&day| buckets.iter().map(|b| grid[day][b.index()]).collect())
            .collect(),
        buckets,
    }
}

/// The hour bucket with the most messages. Ties go to the bucket seen first.
pub fn most_active_time(records: &[Record]) -> MostActiveTime {
    rank(records.iter().map(Record::hour_bucket))
        .first()
        .map_or(MostActiveTime::NotAvailable, |(bucket, _)| {
            MostActiveTime::Bucket(*bucket)
        })
}

fn weekday_from_monday(day: usize) -> chrono::Weekday {
    use chrono::Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};
    [Mon, Tue, Wed, Thu, Fri, Sat, Sun][day % 7]
}
