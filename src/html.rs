//! Shared maud templates and Tailwind style constants.

use maud::{DOCTYPE, Markup, html};

// Link styles
pub const LINK_STYLE: &str = "text-amber-700 hover:text-amber-600 \
    dark:text-amber-400 dark:hover:text-amber-300 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-amber-600 \
    dark:bg-amber-700 disabled:bg-amber-800 hover:enabled:bg-amber-700 \
    hover:enabled:dark:bg-amber-800 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

pub const BUTTON_TOGGLE_STYLE: &str = "px-2.5 py-1 text-xs font-semibold \
    rounded border border-amber-600 text-amber-700 hover:bg-amber-50 \
    dark:text-amber-400 dark:hover:bg-stone-700 cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str ="block mb-2 text-sm font-medium text-stone-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-stone-900 dark:text-white disabled:text-stone-500 bg-stone-50 \
    dark:bg-stone-700 border border-stone-300 dark:border-stone-600 \
    dark:placeholder-stone-400 focus:ring-amber-600 focus:border-amber-600 \
    focus:dark:border-amber-500 focus:dark:ring-amber-500";
pub const FORM_SELECT_STYLE: &str = FORM_TEXT_INPUT_STYLE;

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-stone-700 uppercase \
    bg-stone-100 dark:bg-stone-700 dark:text-stone-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-stone-800 dark:border-stone-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Featured badge style
pub const FEATURED_BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-amber-800 bg-amber-100 rounded-full \
    dark:bg-amber-900 dark:text-amber-300";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-stone-900 dark:text-white";

/// The base page template that every view renders into.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Atelier" }
                link rel="icon" type="image/png" href="/static/favicon-32x32.png" sizes="32x32";
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg" {}

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-stone-50 dark:bg-stone-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A full-page error view with a title, large header and a suggested fix.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-white dark:bg-stone-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-amber-600 dark:text-amber-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-stone-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-stone-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-amber-600
                            hover:bg-amber-800 focus:ring-4 focus:outline-hidden
                            focus:ring-amber-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-amber-900 my-4"
                    {
                        "Back to the gallery"
                    }
                }
            }
        }
    );

    base(title, &content)
}
