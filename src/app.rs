use leptos::prelude::*;
use crate::features::contact::{ContactDialog, ContactModal};
use crate::pages::Landing;

#[component]
pub fn App() -> impl IntoView {
    // Any call-to-action on the page can open the quote dialog
    let contact = ContactDialog(NodeRef::new());
    provide_context(contact);

    view! {
        <div class="app">
            <Landing />
            <ContactModal dialog=contact />
        </div>
    }
}
