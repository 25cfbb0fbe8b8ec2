//! Fixed sample catalog shown when the API cannot be reached.

use chrono::{TimeZone, Utc};
use pawsome_core::types::{DbId, Timestamp};

use crate::model::Dog;

/// A sample row: name, breed, description, Unsplash photo id, age,
/// featured flag, and creation date.
type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i32,
    bool,
    (i32, u32, u32),
);

const SAMPLES: [SampleRow; 8] = [
    (
        "Buddy",
        "Golden Retriever",
        "A friendly and energetic golden retriever who loves playing fetch and swimming.",
        "1552053831-71594a27632d",
        3,
        true,
        (2024, 1, 15),
    ),
    (
        "Luna",
        "Border Collie",
        "Intelligent and agile, Luna excels at agility training and herding activities.",
        "1551717743-49959800b1f6",
        2,
        false,
        (2024, 2, 1),
    ),
    (
        "Max",
        "German Shepherd",
        "Loyal and protective, Max is a great companion for active families.",
        "1589941013453-ec89f33b5e95",
        5,
        true,
        (2024, 1, 20),
    ),
    (
        "Bella",
        "Labrador",
        "Sweet and gentle, Bella loves children and is perfect for family activities.",
        "1518717758536-85ae29035b6d",
        4,
        false,
        (2024, 1, 25),
    ),
    (
        "Charlie",
        "Beagle",
        "Curious and friendly, Charlie has an amazing sense of smell and loves exploring.",
        "1544717297-fa95b6ee9643",
        3,
        true,
        (2024, 2, 5),
    ),
    (
        "Daisy",
        "Poodle",
        "Elegant and smart, Daisy is hypoallergenic and loves learning new tricks.",
        "1616190267687-b7ebf74cf3d4",
        2,
        false,
        (2024, 2, 10),
    ),
    (
        "Rocky",
        "Bulldog",
        "Sturdy and calm, Rocky is a gentle giant who loves relaxing and short walks.",
        "1583337130417-3346a1be7dee",
        6,
        false,
        (2024, 1, 30),
    ),
    (
        "Sophie",
        "Husky",
        "Energetic and adventurous, Sophie loves cold weather and long hikes.",
        "1605568427561-40dd23c2acea",
        4,
        true,
        (2024, 1, 28),
    ),
];

fn created((year, month, day): (i32, u32, u32)) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("sample dates are valid UTC dates")
}

/// The eight sample dogs, four of them featured. Ids start at 1.
pub fn sample_dogs() -> Vec<Dog> {
    SAMPLES
        .iter()
        .zip(1..)
        .map(
            |(&(name, breed, description, photo, age, is_featured, date), id): (_, DbId)| Dog {
                id,
                name: name.to_string(),
                breed: breed.to_string(),
                description: Some(description.to_string()),
                logo_url: Some(format!(
                    "https://images.unsplash.com/photo-{photo}?w=100&h=100&fit=crop&crop=faces"
                )),
                photo_url: Some(format!(
                    "https://images.unsplash.com/photo-{photo}?w=400&h=300&fit=crop"
                )),
                age: Some(age),
                is_featured,
                created_at: created(date),
            },
        )
        .collect()
}
