//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-amber-700 rounded-sm lg:bg-transparent
        lg:text-amber-700 lg:p-0 dark:text-white lg:dark:text-amber-500"
        } else {
            "block py-2 px-3 text-stone-900 rounded-sm hover:bg-stone-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-amber-700 lg:p-0
        dark:text-white lg:dark:hover:text-amber-500 dark:hover:bg-stone-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

fn nav_bar_html(brand_url: &str, links: Vec<Link<'_>>) -> Markup {
    // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
    html!(
        nav class="bg-white border-stone-200 dark:bg-stone-900"
        {
            div
                class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
            {
                a
                    href=(brand_url)
                    class="flex items-center space-x-3 rtl:space-x-reverse"
                {
                    span
                        class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Atelier"
                    }
                }

                div class="w-auto"
                {
                    ul
                        class="font-medium flex flex-row p-0 mt-0 space-x-8 rtl:space-x-reverse
                            border-0 bg-white dark:bg-stone-900 dark:border-stone-700"
                    {
                        @for link in links
                        {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        }
    )
}

/// The navigation bar for the admin panel pages.
pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::DASHBOARD_VIEW,
                title: "Dashboard",
                is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
            },
            Link {
                url: endpoints::DESIGNS_VIEW,
                title: "Designs",
                is_current: active_endpoint == endpoints::DESIGNS_VIEW,
            },
            Link {
                url: endpoints::CATEGORIES_VIEW,
                title: "Categories",
                is_current: active_endpoint == endpoints::CATEGORIES_VIEW,
            },
            Link {
                url: endpoints::GALLERY_VIEW,
                title: "View site",
                is_current: false,
            },
            Link {
                url: endpoints::LOG_OUT,
                title: "Log out",
                is_current: false,
            },
        ];

        NavBar { links }
    }

    /// Render the navigation bar.
    pub fn into_html(self) -> Markup {
        nav_bar_html(endpoints::DASHBOARD_VIEW, self.links)
    }
}

/// The navigation bar for the public gallery pages.
pub fn public_nav_bar(active_endpoint: &str) -> Markup {
    let links = vec![
        Link {
            url: endpoints::ROOT,
            title: "Home",
            is_current: active_endpoint == endpoints::ROOT,
        },
        Link {
            url: endpoints::GALLERY_VIEW,
            title: "Gallery",
            is_current: active_endpoint == endpoints::GALLERY_VIEW,
        },
        Link {
            url: endpoints::LOG_IN_VIEW,
            title: "Admin",
            is_current: false,
        },
    ];

    nav_bar_html(endpoints::ROOT, links)
}
