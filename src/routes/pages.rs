use axum::{extract::State, response::Html};

use crate::gallery::Variant;
use crate::render;
use crate::state::AppState;
use crate::types::Category;

async fn home(state: &AppState, variant: Variant) -> Html<String> {
    let files = state.list(Category::Everydays).await;
    let grid = state.catalog.grid(Category::Everydays, &files, variant);
    state.metrics.inc_pages_rendered();
    let root = &state.config.device.root_path;
    Html(render::home_page(&state.config.site, root, &grid, files.len(), variant).into_string())
}

async fn gallery(state: &AppState, category: Category) -> Html<String> {
    let files = state.list(category).await;
    let grid = state.catalog.grid(category, &files, Variant::Desktop);
    state.metrics.inc_pages_rendered();
    let root = &state.config.device.root_path;
    Html(render::gallery_page(&state.config.site, root, category, &grid, files.len()).into_string())
}

pub async fn home_desktop(State(state): State<AppState>) -> Html<String> {
    home(&state, Variant::Desktop).await
}

pub async fn home_mobile(State(state): State<AppState>) -> Html<String> {
    home(&state, Variant::Mobile).await
}

pub async fn reel(State(state): State<AppState>) -> Html<String> {
    gallery(&state, Category::Reels).await
}

pub async fn toy(State(state): State<AppState>) -> Html<String> {
    gallery(&state, Category::Toys).await
}

pub async fn image(State(state): State<AppState>) -> Html<String> {
    gallery(&state, Category::Images).await
}
