//! The admin landing page with catalog counts.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    catalog::{Catalog, CatalogCounts},
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// The state needed for the dashboard page.
#[derive(Clone)]
pub struct DashboardState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

fn count_card(label: &str, count: usize, link_url: &str, link_text: &str) -> Markup {
    html!(
        div class="flex flex-col gap-1 p-6 bg-white rounded-lg shadow dark:bg-stone-800"
        {
            span class="text-4xl font-extrabold" { (count) }
            span class="text-sm text-stone-500 dark:text-stone-400" { (label) }
            a href=(link_url) class=(LINK_STYLE) { (link_text) }
        }
    )
}

/// Render the dashboard page.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Response {
    let counts = match state.catalog.counts() {
        Ok(counts) => counts,
        Err(error) => {
            tracing::error!("An error occurred while loading the dashboard: {error}");
            return error.into_response();
        }
    };

    dashboard_view(counts).into_response()
}

fn dashboard_view(counts: CatalogCounts) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-md"
            {
                h1 class="text-xl font-bold mb-4" { "Dashboard" }

                div class="grid gap-4 sm:grid-cols-3"
                {
                    (count_card(
                        "Designs",
                        counts.designs,
                        endpoints::DESIGNS_VIEW,
                        "Manage designs",
                    ))
                    (count_card(
                        "Categories",
                        counts.categories,
                        endpoints::CATEGORIES_VIEW,
                        "Manage categories",
                    ))
                    (count_card(
                        "Featured",
                        counts.featured,
                        endpoints::GALLERY_VIEW,
                        "View the gallery",
                    ))
                }
            }
        }
    );

    base("Dashboard", &content)
}

#[cfg(test)]
mod dashboard_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        catalog::Catalog,
        category::CategoryName,
        db::initialize,
        design::{DesignTitle, NewDesign},
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::{DashboardState, get_dashboard_page};

    #[tokio::test]
    async fn dashboard_shows_catalog_counts() {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");
        let state = DashboardState {
            catalog: Catalog::new(Arc::new(Mutex::new(connection))),
        };

        state
            .catalog
            .create_category(CategoryName::new_unchecked("Murals"))
            .expect("Could not create test category");
        let design = state
            .catalog
            .create_design(NewDesign {
                title: DesignTitle::new_unchecked("Station mural"),
                image_url: "/static/uploads/mural.png".to_owned(),
                category_id: None,
            })
            .expect("Could not create test design");
        state
            .catalog
            .toggle_featured(design.id)
            .expect("Could not feature design");

        let response = get_dashboard_page(State(state)).await;

        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let count_selector = Selector::parse("span.text-4xl").unwrap();
        let counts: Vec<String> = document
            .select(&count_selector)
            .map(|span| span.text().collect::<String>())
            .collect();

        assert_eq!(counts, vec!["1", "1", "1"]);
    }
}
