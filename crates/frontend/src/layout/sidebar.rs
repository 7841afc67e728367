//! Sidebar with grouped navigation items.

use leptos::prelude::*;

use crate::routes::{CurrentPage, Page};

struct MenuGroup {
    label: &'static str,
    items: &'static [Page],
}

const GROUPS: &[MenuGroup] = &[
    MenuGroup {
        label: "إدارة العيادة",
        items: &[
            Page::Branches,
            Page::Doctors,
            Page::Services,
            Page::Offers,
            Page::Faqs,
            Page::Appointments,
        ],
    },
    MenuGroup {
        label: "المعرفة والتقارير",
        items: &[Page::Knowledge, Page::DailyReport],
    },
    MenuGroup {
        label: "الأدوات",
        items: &[Page::TestChat, Page::Maintenance, Page::Health],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let current = use_context::<CurrentPage>().expect("CurrentPage not provided");

    view! {
        <nav class="sidebar">
            {GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .iter()
                                .map(|&page| {
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class:sidebar__item--active=move || current.get() == page
                                            on:click=move |_| current.set(page)
                                        >
                                            <span class="sidebar__item-icon">{page.icon()}</span>
                                            <span class="sidebar__item-label">{page.label()}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
