//! Artwork records, the curator's editable draft, and the pure collection
//! operations the listing store applies after a confirmed remote mutation.

use serde::{Deserialize, Serialize};

/// One listed artwork. `id` is assigned by the persistence backend on
/// create; the wire format uses camelCase (`imageUrl`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub medium: String,
    pub dimensions: String,
    pub image_url: String,
}

/// Metadata fields returned by the AI suggestion endpoint. Every field is
/// optional; absent fields are simply not merged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SuggestedMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
}

/// Fixed fallback collection shown when the listing fetch fails or returns
/// nothing.
pub fn seed_artworks() -> Vec<Artwork> {
    let seed = [
        (
            "1",
            "The Silent Peak",
            "Elias Thorne",
            "2023",
            "Oil on Canvas",
            "48 x 60 in",
            "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?auto=format&fit=crop&q=80&w=1200&h=1600",
        ),
        (
            "2",
            "Granite Echoes",
            "Sarah Vance",
            "2024",
            "Acrylic and Charcoal",
            "36 x 36 in",
            "https://images.unsplash.com/photo-1549247796-5d8f09e9034b?auto=format&fit=crop&q=80&w=1600&h=900",
        ),
        (
            "3",
            "Morning Solitude",
            "Julian Marque",
            "2022",
            "Digital Fine Art Print",
            "24 x 36 in",
            "https://images.unsplash.com/photo-1519681393784-d120267933ba?auto=format&fit=crop&q=80&w=1200&h=1600",
        ),
        (
            "4",
            "Vortex of Ice",
            "Elias Thorne",
            "2023",
            "Mixed Media",
            "40 x 40 in",
            "https://images.unsplash.com/photo-1434394354979-a235cd36269d?auto=format&fit=crop&q=80&w=1600&h=1000",
        ),
        (
            "5",
            "The Alchemist Ridge",
            "Elena Rossi",
            "2024",
            "Oil on Linen",
            "50 x 70 in",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&q=80&w=1200&h=1600",
        ),
        (
            "6",
            "Whispering Glaciers",
            "Julian Marque",
            "2023",
            "Silver Gelatin Print",
            "30 x 40 in",
            "https://images.unsplash.com/photo-1483728642387-6c3bdd6c93e5?auto=format&fit=crop&q=80&w=1600&h=900",
        ),
    ];
    seed.iter()
        .map(
            |&(id, title, artist, year, medium, dimensions, image_url)| Artwork {
                id: id.to_string(),
                title: title.to_string(),
                artist: artist.to_string(),
                year: year.to_string(),
                medium: medium.to_string(),
                dimensions: dimensions.to_string(),
                image_url: image_url.to_string(),
            },
        )
        .collect()
}

/// Newest-first: a freshly created artwork goes to the front of the list.
pub fn prepend(list: &mut Vec<Artwork>, artwork: Artwork) {
    list.insert(0, artwork);
}

/// Swap in the updated record by id. Returns false (leaving the list
/// untouched) when no record carries that id.
pub fn replace_by_id(list: &mut [Artwork], updated: Artwork) -> bool {
    match list.iter_mut().find(|a| a.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Drop the record with the given id. Unknown ids are a quiet no-op.
pub fn remove_by_id(list: &mut Vec<Artwork>, id: &str) -> bool {
    let before = list.len();
    list.retain(|a| a.id != id);
    list.len() != before
}

/// Editable draft of one artwork held by the dashboard form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub image_url: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub medium: String,
    pub dimensions: String,
}

impl Draft {
    /// A draft needs at minimum a non-empty title before it may be
    /// dispatched as a create or update.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Load an existing record for editing.
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            image_url: artwork.image_url.clone(),
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            year: artwork.year.clone(),
            medium: artwork.medium.clone(),
            dimensions: artwork.dimensions.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Merge suggested metadata into the draft, filling empty fields only.
    /// Anything the curator already typed is never overwritten.
    pub fn apply_suggestion(&mut self, suggestion: &SuggestedMetadata) {
        fill_if_empty(&mut self.title, &suggestion.title);
        fill_if_empty(&mut self.artist, &suggestion.artist);
        fill_if_empty(&mut self.year, &suggestion.year);
        fill_if_empty(&mut self.medium, &suggestion.medium);
        fill_if_empty(&mut self.dimensions, &suggestion.dimensions);
    }
}

fn fill_if_empty(field: &mut String, suggested: &Option<String>) {
    if field.trim().is_empty() {
        if let Some(value) = suggested {
            *field = value.clone();
        }
    }
}
