//! Posting cadence per brand × platform.
//!
//! Cadence is posts divided by the number of distinct Monday-based weeks the
//! analysis window touches. A brand that has a profile but no posts in the
//! window is measured at zero; a brand with neither is [`Frequency::NoData`].

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use cuervo_core::{Post, PostType};
use serde::Serialize;

use crate::tally::{most_common, round_to, Count};

const BEST_SLOTS: usize = 3;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Inclusive date range an analysis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Distinct calendar weeks touched by the range.
    pub weeks: u32,
}

impl DateWindow {
    /// A window between two dates, in either order.
    #[must_use]
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        Self {
            from,
            to,
            weeks: weeks_spanned(from, to),
        }
    }

    /// The window set by explicit bounds, falling back to the earliest and
    /// latest post date for an open side. `None` when there is nothing to
    /// anchor either side.
    #[must_use]
    pub fn resolve(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        posts: &[&Post],
    ) -> Option<Self> {
        let earliest = posts.iter().map(|p| p.post_date).min();
        let latest = posts.iter().map(|p| p.post_date).max();
        let from = from.or(earliest).or(to)?;
        let to = to.or(latest).unwrap_or(from);
        Some(Self::new(from, to))
    }
}

/// Number of distinct Monday-based weeks between `from` and `to` inclusive.
#[must_use]
pub fn weeks_spanned(from: NaiveDate, to: NaiveDate) -> u32 {
    let start = from - Duration::days(i64::from(from.weekday().num_days_from_monday()));
    let days = (to - start).num_days().max(0);
    u32::try_from(days / 7 + 1).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyStats {
    pub total_posts: usize,
    pub posts_per_week: f64,
    /// Monday first; days without posts are omitted.
    pub by_day: Vec<Count<String>>,
    pub by_hour: BTreeMap<u32, usize>,
    pub by_post_type: BTreeMap<PostType, usize>,
    pub best_days: Vec<Count<String>>,
    pub best_hours: Vec<Count<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Frequency {
    /// Neither posts nor a profile exist for this brand and platform.
    NoData,
    Measured(FrequencyStats),
}

impl Frequency {
    #[must_use]
    pub fn stats(&self) -> Option<&FrequencyStats> {
        match self {
            Frequency::NoData => None,
            Frequency::Measured(stats) => Some(stats),
        }
    }

    #[must_use]
    pub fn posts_per_week(&self) -> Option<f64> {
        self.stats().map(|s| s.posts_per_week)
    }
}

fn day_name(day: Weekday) -> String {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
    .to_string()
}

/// Cadence for one brand × platform group over a window of `weeks` weeks.
#[must_use]
pub fn posting_frequency(posts: &[&Post], has_profile: bool, weeks: u32) -> Frequency {
    if posts.is_empty() && !has_profile {
        return Frequency::NoData;
    }

    let posts_per_week = if weeks == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let ppw = posts.len() as f64 / f64::from(weeks);
        round_to(ppw, 1)
    };

    let day_counts = most_common(
        posts
            .iter()
            .map(|p| p.post_date.weekday().num_days_from_monday()),
    );
    let by_day = WEEKDAYS
        .iter()
        .filter_map(|&day| {
            day_counts
                .iter()
                .find(|c| c.value == day.num_days_from_monday())
                .map(|c| Count {
                    value: day_name(day),
                    count: c.count,
                })
        })
        .collect();
    let best_days = day_counts
        .iter()
        .take(BEST_SLOTS)
        .filter_map(|c| {
            WEEKDAYS.get(c.value as usize).map(|&day| Count {
                value: day_name(day),
                count: c.count,
            })
        })
        .collect();

    let hour_counts = most_common(posts.iter().filter_map(|p| p.post_hour()));
    let by_hour = hour_counts.iter().map(|c| (c.value, c.count)).collect();
    let best_hours = hour_counts.into_iter().take(BEST_SLOTS).collect();

    let mut by_post_type: BTreeMap<PostType, usize> = BTreeMap::new();
    for post in posts {
        *by_post_type.entry(post.post_type).or_default() += 1;
    }

    Frequency::Measured(FrequencyStats {
        total_posts: posts.len(),
        posts_per_week,
        by_day,
        by_hour,
        by_post_type,
        best_days,
        best_hours,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use cuervo_core::Platform;

    use super::*;
    use crate::testutil::{date, post};

    #[test]
    fn weeks_count_calendar_weeks_touched() {
        // Mon 2026-01-05 .. Sun 2026-01-11 is one week.
        assert_eq!(weeks_spanned(date("2026-01-05"), date("2026-01-11")), 1);
        // Sunday to the next Monday touches two.
        assert_eq!(weeks_spanned(date("2026-01-11"), date("2026-01-12")), 2);
        assert_eq!(weeks_spanned(date("2026-01-01"), date("2026-01-31")), 5);
    }

    #[test]
    fn profile_without_posts_is_zero_not_no_data() {
        let zero = posting_frequency(&[], true, 4);
        let stats = zero.stats().expect("measured");
        assert_eq!(stats.total_posts, 0);
        assert!(stats.posts_per_week.abs() < f64::EPSILON);

        assert_eq!(posting_frequency(&[], false, 4), Frequency::NoData);
        assert_ne!(zero, Frequency::NoData);
    }

    #[test]
    fn no_data_serializes_distinctly() {
        let json = serde_json::to_value(Frequency::NoData).unwrap();
        assert_eq!(json["status"], "no_data");
        let measured = serde_json::to_value(posting_frequency(&[], true, 1)).unwrap();
        assert_eq!(measured["status"], "measured");
        assert_eq!(measured["total_posts"], 0);
    }

    #[test]
    fn cadence_days_and_hours() {
        let mut posts = vec![
            post("Patron", Platform::Instagram, "2026-01-05"),
            post("Patron", Platform::Instagram, "2026-01-12"),
            post("Patron", Platform::Instagram, "2026-01-14"),
        ];
        posts[2].post_time = NaiveTime::from_hms_opt(9, 15, 0);
        let refs: Vec<&Post> = posts.iter().collect();

        let freq = posting_frequency(&refs, true, 2);
        let stats = freq.stats().unwrap();
        assert!((stats.posts_per_week - 1.5).abs() < f64::EPSILON);
        let days: Vec<(&str, usize)> = stats
            .by_day
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();
        assert_eq!(days, [("Monday", 2), ("Wednesday", 1)]);
        assert_eq!(stats.best_days[0].value, "Monday");
        assert_eq!(stats.best_hours[0], Count { value: 18, count: 2 });
        assert_eq!(stats.by_post_type[&PostType::Reel], 3);
    }

    #[test]
    fn window_falls_back_to_post_dates() {
        let posts = [
            post("Patron", Platform::Instagram, "2026-01-20"),
            post("Patron", Platform::Instagram, "2026-01-06"),
        ];
        let refs: Vec<&Post> = posts.iter().collect();
        let window = DateWindow::resolve(None, None, &refs).unwrap();
        assert_eq!(window.from, date("2026-01-06"));
        assert_eq!(window.to, date("2026-01-20"));
        assert_eq!(window.weeks, 3);

        let bounded = DateWindow::resolve(Some(date("2026-01-01")), None, &refs).unwrap();
        assert_eq!(bounded.from, date("2026-01-01"));
        assert!(DateWindow::resolve(None, None, &[]).is_none());
    }
}
