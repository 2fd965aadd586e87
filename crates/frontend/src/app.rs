use crate::domain::a001_catalog_item::ui::CatalogPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <CatalogPage />
        </ConfigProvider>
    }
}
