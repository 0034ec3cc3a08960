use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The four media galleries served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Everydays,
    Images,
    Toys,
    Reels,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Everydays, Category::Images, Category::Toys, Category::Reels];

    /// Path segment used by the listing endpoints (`/api/{slug}`).
    pub fn slug(self) -> &'static str {
        match self {
            Category::Everydays => "everydays",
            Category::Images => "images",
            Category::Toys => "toys",
            Category::Reels => "reels",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Route of the HTML page showing this gallery. The everydays live on the
    /// home page, whose path is configurable.
    pub fn page_path(self, root_path: &str) -> &str {
        match self {
            Category::Everydays => root_path,
            Category::Images => "/image",
            Category::Toys => "/toy",
            Category::Reels => "/reel",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Category::Everydays => "EVERYDAYS",
            Category::Images => "IMAGE",
            Category::Toys => "TOY",
            Category::Reels => "REEL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Animated,
    Video,
}

impl MediaKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "gif" => MediaKind::Animated,
            "mp4" | "webm" | "mov" => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

/// One listed asset. Identity is the filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub kind: MediaKind,
}

impl MediaFile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .map(MediaKind::from_extension)
            .unwrap_or(MediaKind::Image);
        Self { name, kind }
    }
}

/// Body of `GET /api/{category}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub files: Vec<String>,
}

impl From<Vec<MediaFile>> for ListingResponse {
    fn from(files: Vec<MediaFile>) -> Self {
        Self { files: files.into_iter().map(|f| f.name).collect() }
    }
}
