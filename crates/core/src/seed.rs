//! Sample data generation for demos and load testing.
//!
//! Users are numbered `1..=user_count` and each receives assets numbered
//! `1..=assets_per_user`. The asset kind is fixed by `id % 3`
//! (0 = Chart, 1 = Insight, 2 = Audience); the remaining fields are
//! placeholder or random values.

use std::collections::HashMap;

use rand::Rng;

use crate::assets::{Asset, AssetKind, Audience, Chart, Insight, Point};
use crate::types::{AssetId, UserId};
use crate::user::User;

const AGE_GROUPS: &[&str] = &["0-17", "18-25", "26-40", "41-65", "66+"];

const GENDERS: &[&str] = &["Male", "Female", "Non-Binary"];

const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Egypt",
    "France",
    "Germany",
    "Greece",
    "India",
    "Indonesia",
    "Ireland",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Poland",
    "Portugal",
    "South Africa",
    "Spain",
    "Sweden",
    "Turkey",
    "United Kingdom",
    "United States",
];

/// Inclusive bounds on the number of points in a generated chart.
const MIN_POINTS: usize = 1;
const MAX_POINTS: usize = 5;

/// Exclusive upper bound for generated audience counters.
const MAX_COUNTER: u32 = 100;

/// The kind assigned to a seeded asset id.
pub fn kind_for_id(asset_id: AssetId) -> AssetKind {
    match asset_id.rem_euclid(3) {
        0 => AssetKind::Chart,
        1 => AssetKind::Insight,
        _ => AssetKind::Audience,
    }
}

/// Generate `user_count` users with `assets_per_user` favorites each, using
/// the thread-local RNG.
pub fn generate_users(user_count: usize, assets_per_user: usize) -> HashMap<UserId, User> {
    generate_users_with(&mut rand::rng(), user_count, assets_per_user)
}

/// Same as [`generate_users`] with a caller-supplied RNG.
pub fn generate_users_with<R: Rng + ?Sized>(
    rng: &mut R,
    user_count: usize,
    assets_per_user: usize,
) -> HashMap<UserId, User> {
    (1..=user_count as UserId)
        .map(|user_id| {
            let assets = (1..=assets_per_user as AssetId).map(|id| sample_asset(rng, id));
            (user_id, User::with_favorites(user_id, assets))
        })
        .collect()
}

/// Generate one placeholder asset whose kind follows [`kind_for_id`].
pub fn sample_asset<R: Rng + ?Sized>(rng: &mut R, id: AssetId) -> Asset {
    match kind_for_id(id) {
        AssetKind::Chart => Asset::Chart(Chart {
            id,
            description: "Sample Chart".into(),
            title: format!("Sample Chart {id}"),
            x_axis_title: "X-Axis".into(),
            y_axis_title: "Y-Axis".into(),
            data_points: random_points(rng),
        }),
        AssetKind::Insight => Asset::Insight(Insight {
            id,
            description: "Sample Insight".into(),
            text: format!("Sample Insight {id}"),
        }),
        AssetKind::Audience => Asset::Audience(Audience {
            id,
            description: "Sample Audience".into(),
            age: rng.random_range(0..MAX_COUNTER),
            age_group: pick(rng, AGE_GROUPS),
            gender: pick(rng, GENDERS),
            birth_country: pick(rng, COUNTRIES),
            hours_spent_on_media: rng.random_range(0..MAX_COUNTER),
            number_of_purchases: rng.random_range(0..MAX_COUNTER),
        }),
    }
}

fn random_points<R: Rng + ?Sized>(rng: &mut R) -> Vec<Point> {
    let count = rng.random_range(MIN_POINTS..=MAX_POINTS);
    (0..count)
        .map(|_| Point {
            x: rng.random(),
            y: rng.random(),
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&str]) -> String {
    choices[rng.random_range(0..choices.len())].to_string()
}
