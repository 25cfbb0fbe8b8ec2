//! Plain-text rendering of the catalog.
//!
//! Layout, top to bottom: sample-data notice, hero counters, the "Meet Our
//! Pack" logo showcase, the featured section, and the filterable grid of
//! all dogs. The featured badge appears only in the featured section.

use std::fmt::Write;

use crate::catalog::{BreedFilter, Catalog, ALL_BREEDS};
use crate::model::Dog;

const TITLE: &str = "Pawsome Dogs";
const TAGLINE: &str = "Discover amazing dogs from around the world! \
                       Each furry friend has their own unique personality and story to tell.";
const SAMPLE_NOTICE: &str = "Demo Mode: the API is not reachable. \
                             Showing sample data to demonstrate the design.";
const RULE: &str = "------------------------------------------------------------";

/// Options for the logo showcase section.
#[derive(Debug, Clone, Default)]
pub struct ShowcaseOptions<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    /// Skip dogs that have no logo.
    pub only_with_logos: bool,
}

/// Render the whole catalog screen.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    if catalog.using_sample_data() {
        let _ = writeln!(out, "[!] {SAMPLE_NOTICE}\n");
    }

    let _ = writeln!(out, "== {TITLE} ==");
    let _ = writeln!(out, "{TAGLINE}");
    let _ = writeln!(
        out,
        "{} Amazing Dogs | {} Featured\n",
        catalog.dogs().len(),
        catalog.featured().len()
    );

    let showcase = ShowcaseOptions {
        title: "Meet Our Pack",
        description: Some("Quick peek at all our amazing dogs and their unique personalities"),
        only_with_logos: false,
    };
    if let Some(section) = render_showcase(catalog.dogs(), &showcase) {
        out.push_str(&section);
    }
    let _ = writeln!(out, "{RULE}");

    if !catalog.featured().is_empty() {
        let _ = writeln!(out, "\n== Featured Dogs ==");
        let _ = writeln!(out, "Our most special furry friends\n");
        for dog in catalog.featured() {
            out.push_str(&render_card(dog, true));
            out.push('\n');
        }
        let _ = writeln!(out, "{RULE}");
    }

    let _ = writeln!(out, "\n== All Our Dogs ==");
    out.push_str(&render_breed_filter(catalog));
    out.push('\n');

    let visible = catalog.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "No dogs found");
        let _ = writeln!(out, "Try selecting a different breed filter");
    } else {
        for dog in visible {
            out.push_str(&render_card(dog, false));
            out.push('\n');
        }
    }

    out
}

/// Render the breed filter control: the sentinel plus every loaded breed,
/// with the current selection marked.
pub fn render_breed_filter(catalog: &Catalog) -> String {
    let selected = catalog.selected();
    let mut options = vec![mark(ALL_BREEDS, *selected == BreedFilter::All)];
    options.extend(catalog.breeds().into_iter().map(|breed| {
        let is_selected = matches!(selected, BreedFilter::Breed(b) if b == breed);
        mark(breed, is_selected)
    }));
    format!("Filter by breed: {}\n", options.join(" | "))
}

fn mark(option: &str, selected: bool) -> String {
    if selected {
        format!("[{option}]")
    } else {
        option.to_string()
    }
}

/// Render one dog card.
///
/// `show_badge` requests the featured badge; it is drawn only when the dog
/// is actually featured.
pub fn render_card(dog: &Dog, show_badge: bool) -> String {
    let mut out = String::new();

    let badge = if show_badge && dog.is_featured {
        " [Featured]"
    } else {
        ""
    };
    let _ = writeln!(out, "* {}{badge}", dog.name);
    let _ = writeln!(out, "  Breed: {}", dog.breed);
    if let Some(age) = dog.age {
        let _ = writeln!(out, "  {age} years old");
    }
    if let Some(description) = &dog.description {
        let _ = writeln!(out, "  {description}");
    }
    if let Some(photo) = &dog.photo_url {
        let _ = writeln!(out, "  Photo: {photo}");
    }
    if let Some(logo) = &dog.logo_url {
        let _ = writeln!(out, "  Logo: {logo}");
    }

    out
}

/// Render the logo showcase, or `None` when there is nothing to show.
///
/// Featured dogs carry a star marker.
pub fn render_showcase(dogs: &[Dog], options: &ShowcaseOptions<'_>) -> Option<String> {
    let shown: Vec<&Dog> = dogs
        .iter()
        .filter(|dog| !options.only_with_logos || dog.logo_url.is_some())
        .collect();

    if shown.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", options.title);
    if let Some(description) = options.description {
        let _ = writeln!(out, "{description}");
    }
    out.push('\n');

    for dog in shown {
        let star = if dog.is_featured { " (*)" } else { "" };
        match &dog.logo_url {
            Some(logo) => {
                let _ = writeln!(out, "  {}{star} - {} <{logo}>", dog.name, dog.breed);
            }
            None => {
                let _ = writeln!(out, "  {}{star} - {}", dog.name, dog.breed);
            }
        }
    }
    out.push('\n');

    Some(out)
}
