use leptos::prelude::*;
use crate::features::kanban::KanbanSection;
use crate::features::pricing::PricingSection;
use crate::sections::*;

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <HeroSection />
            <VideoSection />
            <ModulesSection />
            <KanbanSection />
            <FlowSection />
            <SecuritySection />
            <ReportsSection />
            <PricingSection />
            <CtaSection />
        </main>
        <Footer />
    }
}
