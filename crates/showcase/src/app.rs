use leptos::prelude::*;
use paged_tabs::{RouteDescriptor, TabBar};
use thaw::Card;

/// One demo page per tab.
#[component]
fn Scene(title: String, index: usize) -> impl IntoView {
    view! {
        <div style="padding: 16px;">
            <Card>
                <h2>{title}</h2>
                <p>{format!("This content lives on page {index}.")}</p>
                <p>"Drag sideways or click a tab label above."</p>
            </Card>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let current_page = RwSignal::new(0usize);

    let routes = vec![
        RouteDescriptor::label("Feed"),
        RouteDescriptor::label("Search"),
        RouteDescriptor::label("Alerts"),
        RouteDescriptor::image("/icons/profile.png"),
    ];

    let on_page = Callback::new(move |index: usize| {
        leptos::logging::log!("settled on page {index}");
        current_page.set(index);
    });

    view! {
        <div style="height: 100vh; display: flex; flex-direction: column;">
            <TabBar
                route_stack=routes
                render_scene=|route: &RouteDescriptor, index: usize| {
                    let title = route
                        .label
                        .clone()
                        .unwrap_or_else(|| "Profile".to_string());
                    view! { <Scene title=title index=index /> }.into_any()
                }
                underline_style="height: 2px; background-color: #1976d2;"
                label_style="color: #1976d2;"
                on_page=on_page
            />
            <footer style="padding: 4px 12px; font-size: 12px; color: #888;">
                {move || format!("page {}", current_page.get())}
            </footer>
        </div>
    }
}
