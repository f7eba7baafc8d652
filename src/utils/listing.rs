//! Shaping of booking rows for the listing pages.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{artist::Artist, show::ShowListing, venue::Venue};

/// Number of entries on the home page activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Artist,
    Venue,
}

/// A newly joined artist or venue.
#[derive(Debug, Clone, Serialize)]
pub struct RecentActivity {
    pub kind: ActivityKind,
    pub id: i64,
    pub name: String,
    pub joined: NaiveDateTime,
}

impl RecentActivity {
    pub fn link(&self) -> String {
        match self.kind {
            ActivityKind::Artist => format!("/artists/{}", self.id),
            ActivityKind::Venue => format!("/venues/{}", self.id),
        }
    }
}

/// Merges artists and venues, newest `joined` first, keeping `limit` entries.
pub fn recent_activity(artists: &[Artist], venues: &[Venue], limit: usize) -> Vec<RecentActivity> {
    let mut merged: Vec<RecentActivity> = artists
        .iter()
        .map(|a| RecentActivity {
            kind: ActivityKind::Artist,
            id: a.id,
            name: a.name.clone(),
            joined: a.joined,
        })
        .chain(venues.iter().map(|v| RecentActivity {
            kind: ActivityKind::Venue,
            id: v.id,
            name: v.name.clone(),
            joined: v.joined,
        }))
        .collect();

    merged.sort_by(|a, b| b.joined.cmp(&a.joined));
    merged.truncate(limit);
    merged
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Venue>,
}

/// Groups venues by (state, city), areas sorted by state then city.
pub fn group_by_area(venues: Vec<Venue>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<Venue>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.state.clone(), venue.city.clone()))
            .or_default()
            .push(venue);
    }
    areas
        .into_iter()
        .map(|((state, city), venues)| Area { city, state, venues })
        .collect()
}

/// Splits shows into (upcoming, past) relative to `now`.
/// A show starting exactly at `now` counts as past.
pub fn split_shows(
    shows: Vec<ShowListing>,
    now: NaiveDateTime,
) -> (Vec<ShowListing>, Vec<ShowListing>) {
    shows.into_iter().partition(|s| s.start_time > now)
}
