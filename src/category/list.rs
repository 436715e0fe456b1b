//! The admin page for listing, creating and deleting categories.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::macros::format_description;

use crate::{
    AppState,
    catalog::Catalog,
    category::Category,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
};

/// The state needed for the categories page.
#[derive(Clone)]
pub struct CategoriesPageState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for CategoriesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// Render the categories page.
pub async fn get_categories_page(State(state): State<CategoriesPageState>) -> Response {
    match state.catalog.categories() {
        Ok(categories) => categories_view(&categories).into_response(),
        Err(error) => {
            tracing::error!("An error occurred while listing categories: {error}");
            error.into_response()
        }
    }
}

fn categories_view(categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();
    let date_format = format_description!("[day] [month repr:short] [year]");

    let table_row = |category: &Category| {
        let created_at = category
            .created_at
            .format(&date_format)
            .unwrap_or_default();

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (category.name) }

                td class=(TABLE_CELL_STYLE) { (created_at) }

                td class=(TABLE_CELL_STYLE)
                {
                    button
                        hx-delete=(format_endpoint(endpoints::DELETE_CATEGORY, category.id))
                        hx-confirm={
                            "Are you sure you want to delete '" (category.name)
                            "'? Designs filed under it will be kept but left uncategorised."
                        }
                        hx-target="closest tr"
                        hx-target-error="#alert-container"
                        hx-swap="delete"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-screen-md"
            {
                h1 class="text-xl font-bold" { "Categories" }

                form
                    hx-post=(endpoints::POST_CATEGORY)
                    hx-target-error="#alert-container"
                    class="flex items-end gap-4 my-4"
                {
                    div class="grow"
                    {
                        label for="name" class=(FORM_LABEL_STYLE) { "Category Name" }

                        input
                            id="name"
                            type="text"
                            name="name"
                            placeholder="e.g. Illustration"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Category" }
                }

                div class="dark:bg-stone-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-stone-500 dark:text-stone-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Created" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for category in categories {
                                (table_row(category))
                            }

                            @if categories.is_empty() {
                                tr
                                {
                                    td
                                        colspan="3"
                                        class="px-6 py-4 text-center
                                            text-stone-500 dark:text-stone-400"
                                    {
                                        "No categories yet. Create one above."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Categories", &content)
}

#[cfg(test)]
mod categories_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use rusqlite::Connection;

    use crate::{
        catalog::Catalog,
        category::CategoryName,
        db::initialize,
        endpoints,
        test_utils::{
            assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    use super::{CategoriesPageState, get_categories_page};

    fn get_test_state() -> CategoriesPageState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        CategoriesPageState {
            catalog: Catalog::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn page_has_create_category_form() {
        let state = get_test_state();

        let response = get_categories_page(State(state)).await;

        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, endpoints::POST_CATEGORY, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn page_lists_created_categories() {
        let state = get_test_state();
        state
            .catalog
            .create_category(CategoryName::new_unchecked("Murals"))
            .expect("Could not create test category");

        let response = get_categories_page(State(state)).await;

        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert!(document.html().contains("Murals"));
    }
}
