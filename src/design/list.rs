//! The admin page for listing, creating and managing designs.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    catalog::Catalog,
    category::Category,
    design::DesignWithCategory,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_TOGGLE_STYLE, FEATURED_BADGE_STYLE,
        FORM_LABEL_STYLE, FORM_SELECT_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
};

/// The state needed for the designs page.
#[derive(Clone)]
pub struct DesignsPageState {
    /// The catalog service.
    pub catalog: Catalog,
}

impl FromRef<AppState> for DesignsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog.clone(),
        }
    }
}

/// Render the designs page.
pub async fn get_designs_page(State(state): State<DesignsPageState>) -> Response {
    let designs = match state.catalog.designs_for_gallery(None) {
        Ok(designs) => designs,
        Err(error) => {
            tracing::error!("An error occurred while listing designs: {error}");
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

    designs_view(&designs, &categories).into_response()
}

fn new_design_form(categories: &[Category]) -> Markup {
    html!(
        form
            hx-post=(endpoints::POST_DESIGN)
            hx-target-error="#alert-container"
            class="grid gap-4 my-4 sm:grid-cols-2"
        {
            div
            {
                label for="title" class=(FORM_LABEL_STYLE) { "Title" }

                input
                    id="title"
                    type="text"
                    name="title"
                    placeholder="e.g. Roastery rebrand"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="image_url" class=(FORM_LABEL_STYLE) { "Image URL" }

                input
                    id="image_url"
                    type="text"
                    name="image_url"
                    placeholder="https://..."
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }

                select id="category_id" name="category_id" class=(FORM_SELECT_STYLE)
                {
                    option value="" { "No category" }

                    @for category in categories {
                        option value=(category.id) { (category.name) }
                    }
                }
            }

            div class="flex items-end"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Design" }
            }
        }
    )
}

fn designs_view(designs: &[DesignWithCategory], categories: &[Category]) -> Markup {
    let nav_bar = NavBar::new(endpoints::DESIGNS_VIEW).into_html();

    let table_row = |entry: &DesignWithCategory| {
        let design = &entry.design;
        let toggle_url = format_endpoint(endpoints::TOGGLE_FEATURED, design.id);

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    img
                        src=(design.image_url)
                        alt=(design.title)
                        loading="lazy"
                        class="w-16 h-16 object-cover rounded";
                }

                td class=(TABLE_CELL_STYLE) { (design.title) }

                td class=(TABLE_CELL_STYLE)
                {
                    @if let Some(name) = &entry.category_name {
                        (name)
                    } @else {
                        span class="italic" { "Uncategorised" }
                    }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    span
                        id={ "featured-badge-" (design.id) }
                        class=(FEATURED_BADGE_STYLE)
                        data-featured=(design.featured)
                    {
                        @if design.featured { "Featured" } @else { "\u{2014}" }
                    }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4 items-center"
                    {
                        button
                            type="button"
                            data-toggle-featured=(design.id)
                            data-toggle-url=(toggle_url)
                            class=(BUTTON_TOGGLE_STYLE)
                        {
                            "Toggle featured"
                        }

                        button
                            hx-delete=(format_endpoint(endpoints::DELETE_DESIGN, design.id))
                            hx-confirm={
                                "Are you sure you want to delete '" (design.title) "'?"
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
            }
        )
    };

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-screen-lg"
            {
                h1 class="text-xl font-bold" { "Designs" }

                (new_design_form(categories))

                div class="dark:bg-stone-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-stone-500 dark:text-stone-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Image" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Featured" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for entry in designs {
                                (table_row(entry))
                            }

                            @if designs.is_empty() {
                                tr
                                {
                                    td
                                        colspan="5"
                                        class="px-6 py-4 text-center
                                            text-stone-500 dark:text-stone-400"
                                    {
                                        "No designs yet. Add one above."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Designs", &content)
}
