//! Page registry and content-area dispatch.

use leptos::prelude::*;

use crate::domain::appointments::AppointmentsPage;
use crate::domain::branches::BranchesPage;
use crate::domain::doctors::DoctorsPage;
use crate::domain::faq::FaqPage;
use crate::domain::offers::OffersPage;
use crate::domain::services::ServicesPage;
use crate::system::health::HealthPage;
use crate::system::knowledge::KnowledgePage;
use crate::system::maintenance::MaintenancePage;
use crate::system::reports::DailyReportPage;
use crate::system::test_chat::TestChatPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Branches,
    Doctors,
    Services,
    Offers,
    Faqs,
    Appointments,
    Knowledge,
    DailyReport,
    TestChat,
    Maintenance,
    Health,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Branches => "الفروع",
            Page::Doctors => "الأطباء",
            Page::Services => "الخدمات",
            Page::Offers => "العروض",
            Page::Faqs => "الأسئلة الشائعة",
            Page::Appointments => "المواعيد",
            Page::Knowledge => "قاعدة المعرفة",
            Page::DailyReport => "التقرير اليومي",
            Page::TestChat => "اختبار المحادثة",
            Page::Maintenance => "صيانة قاعدة البيانات",
            Page::Health => "فحص النظام",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Branches => "🏢",
            Page::Doctors => "🩺",
            Page::Services => "💊",
            Page::Offers => "🏷",
            Page::Faqs => "❓",
            Page::Appointments => "📅",
            Page::Knowledge => "📚",
            Page::DailyReport => "📊",
            Page::TestChat => "💬",
            Page::Maintenance => "🛠",
            Page::Health => "🩹",
        }
    }
}

/// Selected page, provided app-wide; the sidebar writes it, the content
/// area reads it. Page state is discarded on every switch, so each page
/// re-fetches fresh data on mount.
pub type CurrentPage = RwSignal<Page>;

#[component]
pub fn PageView() -> impl IntoView {
    let current = use_context::<CurrentPage>().expect("CurrentPage not provided");

    view! {
        {move || match current.get() {
            Page::Branches => view! { <BranchesPage /> }.into_any(),
            Page::Doctors => view! { <DoctorsPage /> }.into_any(),
            Page::Services => view! { <ServicesPage /> }.into_any(),
            Page::Offers => view! { <OffersPage /> }.into_any(),
            Page::Faqs => view! { <FaqPage /> }.into_any(),
            Page::Appointments => view! { <AppointmentsPage /> }.into_any(),
            Page::Knowledge => view! { <KnowledgePage /> }.into_any(),
            Page::DailyReport => view! { <DailyReportPage /> }.into_any(),
            Page::TestChat => view! { <TestChatPage /> }.into_any(),
            Page::Maintenance => view! { <MaintenancePage /> }.into_any(),
            Page::Health => view! { <HealthPage /> }.into_any(),
        }}
    }
}
