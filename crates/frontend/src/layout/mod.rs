pub mod sidebar;
pub mod topbar;

use leptos::prelude::*;

use crate::routes::PageView;
use sidebar::Sidebar;
use topbar::Topbar;

/// Application shell:
///
/// ```text
/// +------------------------------------+
/// |              Topbar                |
/// +-----------+------------------------+
/// |  Sidebar  |       Content          |
/// +-----------+------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout" dir="rtl">
            <Topbar />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    <PageView />
                </main>
            </div>
        </div>
    }
}
