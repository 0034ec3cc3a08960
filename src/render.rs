//! HTML pages.
//!
//! Pages are rendered server-side with [maud](https://maud.lambda.xyz/) from a
//! generated [`Grid`]. Every content cell carries its number, title, source
//! and media kind as `data-*` attributes; the embedded script reads those to
//! drive hover swapping and the enlarge modal in the browser.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::SiteConfig;
use crate::gallery::Variant;
use crate::layout::{Grid, GridCell};
use crate::types::{Category, MediaKind};

const CSS: &str = include_str!("../static/gallery.css");
const JS: &str = include_str!("../static/gallery.js");

/// Sections linked from the home page, in display order.
const SECTIONS: [Category; 3] = [Category::Reels, Category::Toys, Category::Images];

fn section_number(category: Category) -> &'static str {
    match category {
        Category::Everydays => "01",
        Category::Reels => "02",
        Category::Toys => "03",
        Category::Images => "04",
    }
}

fn type_label(category: Category) -> &'static str {
    match category {
        Category::Everydays => "MOTION",
        Category::Reels => "VIDEO",
        Category::Toys => "EXPERIMENTAL",
        Category::Images => "STATIC",
    }
}

fn description(category: Category) -> &'static str {
    match category {
        Category::Everydays => "Daily motion studies, one element at a time",
        Category::Reels => "Showreels and commissioned motion work",
        Category::Toys => "Experiments, prototypes and playful sketches",
        Category::Images => "Static visual work: posters, illustrations, and design",
    }
}

fn kind_attr(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "image",
        MediaKind::Animated => "animated",
        MediaKind::Video => "video",
    }
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
                (render_modal())
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn labels(pairs: &[(&str, String)]) -> Markup {
    html! {
        dl.labels {
            @for (label, value) in pairs {
                div {
                    dt { (label) }
                    dd { (value) }
                }
            }
        }
    }
}

pub fn render_cell(cell: &GridCell) -> Markup {
    match cell {
        GridCell::Item { number, title, src, media, accent, .. } => html! {
            div.cell.item.accent[*accent]
                data-number=(number) data-title=(title) data-src=(src) data-kind=(kind_attr(*media)) {
                @if *media == MediaKind::Video {
                    video.media src=(src) muted loop playsinline preload="metadata" {}
                } @else {
                    img.media src=(src) alt="" loading="lazy";
                }
                div.halftone {}
                span.number { (number) }
            }
        },
        GridCell::Placeholder { number, title, src, .. } => html! {
            div.cell.placeholder
                data-number=(number) data-title=(title) data-src=(src) data-kind="animated" {
                img.media src=(src) alt="" loading="lazy";
                div.halftone {}
                div.pending {
                    span { "NO DATA" }
                    span { "PENDING..." }
                }
                span.number { (number) }
            }
        },
        GridCell::Inactive => html! {
            div.cell.inactive aria-hidden="true" {}
        },
    }
}

pub fn render_grid(grid: &Grid) -> Markup {
    let style = format!("grid-template-columns: repeat({}, minmax(60px, 1fr))", grid.columns);
    html! {
        div.grid style=(style) {
            @for cell in grid.cells() {
                (render_cell(cell))
            }
        }
    }
}

fn render_modal() -> Markup {
    html! {
        div #modal .modal hidden {
            div.modal-content {
                button.modal-close type="button" aria-label="Close" { "×" }
                span.modal-number {}
                div.modal-media {}
            }
        }
    }
}

fn section_link(category: Category, root_path: &str) -> Markup {
    html! {
        a.section-link href=(category.page_path(root_path)) {
            span.number { (section_number(category)) }
            h2 { (category.heading()) }
            p { (description(category)) }
        }
    }
}

/// The landing page: the everydays table plus links to the other sections.
/// The mobile variant stacks the section links under a narrow grid.
pub fn home_page(site: &SiteConfig, root_path: &str, grid: &Grid, works: usize, variant: Variant) -> Markup {
    let grid_label = format!("{}×{}", grid.rows.len(), grid.columns);
    let content = html! {
        main.home.mobile[variant == Variant::Mobile] {
            header.site-header {
                h1 { (site.title) }
                p { (site.tagline) }
            }
            section.everydays {
                (labels(&[
                    ("SECTION", section_number(Category::Everydays).to_string()),
                    ("WORKS", works.to_string()),
                    ("GRID", grid_label),
                ]))
                h2 { (Category::Everydays.heading()) }
                (render_grid(grid))
            }
            nav.sections {
                @for category in SECTIONS {
                    (section_link(category, root_path))
                }
            }
        }
    };
    base_document(&site.title, content)
}

/// Page of one flat gallery (`/reel`, `/toy`, `/image`), linking back to
/// the home page at `root_path`.
pub fn gallery_page(site: &SiteConfig, root_path: &str, category: Category, grid: &Grid, works: usize) -> Markup {
    let content = html! {
        main.gallery {
            a.back href=(root_path) { "← Back to Home" }
            header.site-header {
                (labels(&[
                    ("SECTION", section_number(category).to_string()),
                    ("TYPE", type_label(category).to_string()),
                    ("WORKS", works.to_string()),
                ]))
                h1 { (category.heading()) }
                p { (description(category)) }
            }
            section {
                (render_grid(grid))
            }
        }
    };
    base_document(&format!("{} | {}", category.heading(), site.title), content)
}
