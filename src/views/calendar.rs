//! Preventive maintenance calendar
//!
//! The visible grid of a month runs from the Sunday starting the week of the
//! 1st to the Saturday ending the week of the last day, so it may show a few
//! days of the neighbouring months. Requests are placed on the UTC date of
//! their `scheduled_date`.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{MaintenanceRequest, RequestType};

/// Query parameters for the month view
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CalendarQuery {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

/// A cell of the calendar grid
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days of adjacent months
    pub in_month: bool,
    pub requests: Vec<MaintenanceRequest>,
}

/// Month grid with its scheduled preventive requests
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub days: Vec<CalendarDay>,
}

/// `None` when the week starts before the first representable date
pub fn start_of_week(day: NaiveDate) -> Option<NaiveDate> {
    day.checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_sunday())))
}

/// `None` when the week ends after the last representable date
pub fn end_of_week(day: NaiveDate) -> Option<NaiveDate> {
    start_of_week(day)?.checked_add_days(Days::new(6))
}

/// Sunday..Saturday week containing `day`
pub fn week_range(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    Some((start_of_week(day)?, end_of_week(day)?))
}

/// First and last day of the visible grid for a month.
///
/// `None` for an invalid month, or when the grid would reach past the range
/// chrono can represent.
pub fn month_grid_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last_of_month = first_of_next.pred_opt()?;
    Some((start_of_week(first_of_month)?, end_of_week(last_of_month)?))
}

/// Every day from `first` to `last`, inclusive
pub fn days_in_range(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    first.iter_days().take_while(|day| *day <= last).collect()
}

/// Preventive requests that carry a scheduled date
pub fn scheduled_preventive<'a, I>(requests: I) -> Vec<&'a MaintenanceRequest>
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    requests
        .into_iter()
        .filter(|r| r.request_type == RequestType::Preventive && r.scheduled_date.is_some())
        .collect()
}

/// Scheduled preventive requests falling on `day`
pub fn requests_on_day<'a, I>(requests: I, day: NaiveDate) -> Vec<MaintenanceRequest>
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    scheduled_preventive(requests)
        .into_iter()
        .filter(|r| r.scheduled_day() == Some(day))
        .cloned()
        .collect()
}

/// Scheduled preventive requests bucketed per day over `first..=last`.
///
/// Every day of the range has an entry, possibly empty; requests outside the
/// range are dropped.
pub fn group_by_day<'a, I>(
    requests: I,
    first: NaiveDate,
    last: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<MaintenanceRequest>>
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    let mut buckets: BTreeMap<NaiveDate, Vec<MaintenanceRequest>> = days_in_range(first, last)
        .into_iter()
        .map(|day| (day, Vec::new()))
        .collect();

    for request in scheduled_preventive(requests) {
        if let Some(bucket) = request.scheduled_day().and_then(|day| buckets.get_mut(&day)) {
            bucket.push(request.clone());
        }
    }

    buckets
}

/// Build the month view; `None` for an invalid month
pub fn month_view<'a, I>(requests: I, year: i32, month: u32) -> Option<CalendarMonth>
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    let (first_day, last_day) = month_grid_range(year, month)?;
    let days = group_by_day(requests, first_day, last_day)
        .into_iter()
        .map(|(date, requests)| CalendarDay {
            date,
            in_month: date.year() == year && date.month() == month,
            requests,
        })
        .collect();

    Some(CalendarMonth {
        year,
        month,
        first_day,
        last_day,
        days,
    })
}
