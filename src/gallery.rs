//! The public pages: the home page with featured work and the gallery
//! browser with category filtering.
//!
//! Clicking a thumbnail opens a full-size preview in a modal. The modal is
//! driven by the page script from the `data-image` and `data-title`
//! attributes on each thumbnail, so no extra round trip is needed.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    catalog::Catalog,
    category::{Category, CategoryId},
    design::DesignWithCategory,
    endpoints,
    html::{FEATURED_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::public_nav_bar,
};

/// How many of the latest designs the home page shows.
const HOME_PAGE_LATEST_COUNT: usize = 8;

/// The state needed for the public pages.
#[derive(Clone)]
pub struct GalleryState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for GalleryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// The query parameters accepted by the gallery page.
#[derive(Deserialize)]
pub struct GalleryQuery {
    /// Restrict the gallery to one category.
    pub category: Option<CategoryId>,
}

fn thumbnail(entry: &DesignWithCategory) -> Markup {
    let design = &entry.design;

    html!(
        figure
            class="group relative cursor-pointer"
            data-image=(design.image_url)
            data-title=(design.title)
            tabindex="0"
        {
            img
                src=(design.image_url)
                alt=(design.title)
                loading="lazy"
                class="w-full aspect-square object-cover rounded shadow
                    group-hover:opacity-80";

            @if design.featured {
                span
                    class=(FEATURED_BADGE_STYLE)
                    style="position: absolute; top: 0.5rem; left: 0.5rem;"
                {
                    "Featured"
                }
            }

            figcaption class="mt-1 text-sm text-stone-700 dark:text-stone-300"
            {
                (design.title)

                @if let Some(name) = &entry.category_name {
                    span class="text-stone-500 dark:text-stone-400" { " \u{00b7} " (name) }
                }
            }
        }
    )
}

fn thumbnail_grid(designs: &[DesignWithCategory]) -> Markup {
    html!(
        div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4 w-full"
        {
            @for entry in designs {
                (thumbnail(entry))
            }
        }
    )
}

fn preview_modal() -> Markup {
    html!(
        div
            id="preview-modal"
            class="hidden"
            style="position: fixed; inset: 0; z-index: 50; background: rgba(0, 0, 0, 0.8);
                display: none; align-items: center; justify-content: center;"
        {
            figure class="max-w-4xl max-h-full p-4"
            {
                img id="preview-image" src="" alt="" class="max-h-[80vh] mx-auto rounded";

                figcaption
                    id="preview-title"
                    class="mt-2 text-center text-white text-lg"
                {}
            }
        }
    )
}

/// Render the home page: featured designs first, then the latest additions.
pub async fn get_home_page(State(state): State<GalleryState>) -> Response {
    let designs = match state.catalog.designs_for_gallery(None) {
        Ok(designs) => designs,
        Err(error) => {
            tracing::error!("An error occurred while loading the home page: {error}");
            return error.into_response();
        }
    };

    let (featured, rest): (Vec<DesignWithCategory>, Vec<DesignWithCategory>) =
        designs.into_iter().partition(|entry| entry.design.featured);
    let latest: Vec<DesignWithCategory> =
        rest.into_iter().take(HOME_PAGE_LATEST_COUNT).collect();

    let nav_bar = public_nav_bar(endpoints::ROOT);
    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg flex flex-col gap-8"
            {
                @if !featured.is_empty() {
                    section
                    {
                        h1 class="text-xl font-bold mb-4" { "Featured work" }
                        (thumbnail_grid(&featured))
                    }
                }

                section
                {
                    h2 class="text-xl font-bold mb-4" { "Latest work" }

                    @if latest.is_empty() && featured.is_empty() {
                        p class="text-stone-500 dark:text-stone-400"
                        {
                            "Nothing here yet. Check back soon."
                        }
                    } @else {
                        (thumbnail_grid(&latest))
                    }

                    p class="mt-4"
                    {
                        a href=(endpoints::GALLERY_VIEW) class=(LINK_STYLE)
                        {
                            "Browse the full gallery"
                        }
                    }
                }
            }
        }

        (preview_modal())
    );

    base("Home", &content).into_response()
}

fn category_filter_bar(categories: &[Category], active: Option<CategoryId>) -> Markup {
    html!(
        div class="flex flex-wrap gap-3 mb-6"
        {
            a
                href=(endpoints::GALLERY_VIEW)
                class=(if active.is_none() { "font-bold" } else { LINK_STYLE })
            {
                "All"
            }

            @for category in categories {
                a
                    href={ (endpoints::GALLERY_VIEW) "?category=" (category.id) }
                    class=(if active == Some(category.id) { "font-bold" } else { LINK_STYLE })
                {
                    (category.name)
                }
            }
        }
    )
}

/// Render the gallery page, optionally filtered to one category.
///
/// An unknown category ID is treated as an empty category rather than an
/// error, the filter bar still lets the visitor get back to "All".
pub async fn get_gallery_page(
    State(state): State<GalleryState>,
    Query(query): Query<GalleryQuery>,
) -> Response {
    let designs = match state.catalog.designs_for_gallery(query.category) {
        Ok(designs) => designs,
        Err(error) => {
            tracing::error!("An error occurred while loading the gallery: {error}");
            return error.into_response();
        }
    };
    let categories = match state.catalog.categories() {
        Ok(categories) => categories,
        Err(error) => {
            tracing::error!("An error occurred while listing categories: {error}");
            return error.into_response();
        }
    };

    let nav_bar = public_nav_bar(endpoints::GALLERY_VIEW);
    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg"
            {
                h1 class="text-xl font-bold mb-4" { "Gallery" }

                (category_filter_bar(&categories, query.category))

                @if designs.is_empty() {
                    p class="text-stone-500 dark:text-stone-400"
                    {
                        "No designs in this category yet."
                    }
                } @else {
                    (thumbnail_grid(&designs))
                }
            }
        }

        (preview_modal())
    );

    base("Gallery", &content).into_response()
}
