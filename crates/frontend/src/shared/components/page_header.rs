use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - заголовок страницы с иконкой и подзаголовком
#[component]
pub fn PageHeader(
    /// Page title
    #[prop(into)]
    title: String,

    /// Icon name (see `icons::icon`)
    #[prop(optional)]
    icon_name: Option<&'static str>,

    /// Subtitle, may change over time
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! {
                    <span class="page-header__icon">{icon(name)}</span>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {subtitle.map(|s| view! {
                        <div class="page-header__subtitle">{move || s.get()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}
