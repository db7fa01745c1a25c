use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use shared::CONFIG;

use crate::components::Layout;
use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=CONFIG.name />
        <Layout>
            <HomePage />
        </Layout>
    }
}
