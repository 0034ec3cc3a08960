//! Gallery catalog and view-side state.
//!
//! The [`Catalog`] resolves each [`Category`] to its folder, media filter and
//! layout parameters, as configured. [`view`] and [`modal`] hold the
//! per-page interaction state that sits on top of a generated grid.

pub mod modal;
pub mod view;

use std::path::PathBuf;

use crate::assets::{self, ListingError, MediaFilter};
use crate::config::{AppConfig, GalleryConfig, TemplateKind};
use crate::layout::{self, Grid, GridTemplate, LayoutOptions};
use crate::types::{Category, MediaFile};

pub use modal::{EnlargeModal, Key, ModalEvent, ModalState, ScrollLock};
pub use view::{GalleryView, MediaView, Selection};

/// Which page family a grid is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Desktop,
    Mobile,
}

/// One configured gallery.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub category: Category,
    pub folder: PathBuf,
    pub filter: MediaFilter,
    pub options: LayoutOptions,
    pub template: TemplateKind,
}

impl Gallery {
    fn from_config(
        category: Category,
        cfg: &GalleryConfig,
        public_dir: &std::path::Path,
        fallback_asset: &str,
    ) -> Result<Self, ListingError> {
        let filter = MediaFilter::new(&cfg.extensions).with_excludes(&cfg.excludes)?;
        Ok(Self {
            category,
            folder: public_dir.join(&cfg.folder),
            filter,
            options: LayoutOptions {
                base_path: cfg.base_path.clone(),
                fallback_asset: fallback_asset.to_string(),
                accent_modulus: cfg.accent_modulus,
                ordinal_width: cfg.ordinal_width,
                label: cfg.label.clone(),
            },
            template: cfg.template,
        })
    }

    pub fn try_list(&self) -> Result<Vec<MediaFile>, ListingError> {
        assets::try_list(&self.folder, &self.filter)
    }
}

/// All galleries plus the shared layout templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    everydays: Gallery,
    images: Gallery,
    toys: Gallery,
    reels: Gallery,
    periodic: GridTemplate,
    flow_columns: usize,
    mobile_columns: usize,
}

impl Catalog {
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let public_dir = &cfg.assets.public_dir;
        let fallback = &cfg.assets.fallback_asset;
        let build = |category: Category| {
            Gallery::from_config(category, cfg.galleries.get(category), public_dir, fallback)
                .map_err(|e| anyhow::anyhow!("galleries.{}: {}", category, e))
        };
        let periodic = GridTemplate::from_active_columns(cfg.layout.columns, &cfg.layout.rows)
            .map_err(|e| anyhow::anyhow!("layout: {}", e))?;

        Ok(Self {
            everydays: build(Category::Everydays)?,
            images: build(Category::Images)?,
            toys: build(Category::Toys)?,
            reels: build(Category::Reels)?,
            periodic,
            flow_columns: cfg.layout.flow_columns,
            mobile_columns: cfg.layout.mobile_columns,
        })
    }

    pub fn gallery(&self, category: Category) -> &Gallery {
        match category {
            Category::Everydays => &self.everydays,
            Category::Images => &self.images,
            Category::Toys => &self.toys,
            Category::Reels => &self.reels,
        }
    }

    pub fn periodic_template(&self) -> &GridTemplate {
        &self.periodic
    }

    /// Template for a gallery. Periodic galleries keep their fixed capacity on
    /// desktop; everything else flows over exactly `file_count` slots.
    pub fn template_for(&self, category: Category, file_count: usize, variant: Variant) -> GridTemplate {
        match (self.gallery(category).template, variant) {
            (TemplateKind::Periodic, Variant::Desktop) => self.periodic.clone(),
            (TemplateKind::Flow, Variant::Desktop) => GridTemplate::flow(self.flow_columns, file_count),
            (_, Variant::Mobile) => GridTemplate::flow(self.mobile_columns, file_count),
        }
    }

    pub fn grid(&self, category: Category, files: &[MediaFile], variant: Variant) -> Grid {
        let template = self.template_for(category, files.len(), variant);
        layout::layout(files, &template, &self.gallery(category).options)
    }
}
