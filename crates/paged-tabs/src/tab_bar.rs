//! The paged tab bar component.

use leptos::prelude::*;

use crate::geometry::{self, TabLayout};
use crate::route::RouteDescriptor;
use crate::style;

/// Extra configuration forwarded to the paged scroll container.
///
/// `style` is a CSS declaration list layered after the built-in scroller
/// style, so caller declarations win per property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollViewProps {
    pub class: Option<String>,
    pub style: Option<String>,
}

/// Tab bar with a horizontally paginated content region.
///
/// Renders a header strip of clickable tab markers above an animated
/// underline, and one full-width page per route below. Dragging the pages
/// moves the underline and fades the markers in lockstep with the scroll
/// position; clicking a marker scrolls to its page. Page snapping is
/// delegated to the container via CSS scroll snap.
///
/// The widget measures itself on mount and on every window resize, and
/// restores the current page after the measurement has propagated, so an
/// orientation change keeps the user on the page they were reading.
#[component]
pub fn TabBar<F>(
    /// Ordered tab descriptors, one per page.
    route_stack: Vec<RouteDescriptor>,
    /// Produces the page content for a route. Called once per route.
    render_scene: F,
    /// Header style layered over the built-in default.
    #[prop(optional, into)]
    header_style: String,
    /// Text marker style layered over the built-in default.
    #[prop(optional, into)]
    label_style: String,
    /// Image marker style layered over the built-in default.
    #[prop(optional, into)]
    image_style: String,
    /// Underline style layered over the built-in default.
    #[prop(optional, into)]
    underline_style: String,
    /// Horizontal inset of the header strip, px.
    #[prop(default = 8.0)]
    side_padding: f64,
    /// Opacity of non-focused markers.
    #[prop(default = 0.5)]
    inactive_opacity: f64,
    /// Fade markers across the whole inter-tab range, or snap near the
    /// half-way point.
    #[prop(default = true)]
    fade_labels: bool,
    /// Extra class/style for the paged scroll container.
    #[prop(optional)]
    scroll_view_props: ScrollViewProps,
    /// Invoked when the settled page index changes.
    #[prop(optional, into)]
    on_page: Option<Callback<usize>>,
    /// Invoked on every raw scroll event, before internal processing.
    #[prop(optional, into)]
    on_scroll: Option<Callback<web_sys::Event>>,
) -> impl IntoView
where
    F: Fn(&RouteDescriptor, usize) -> AnyView + 'static,
{
    let len = route_stack.len();

    let layout = RwSignal::new(TabLayout::default());
    let scroll_x = RwSignal::new(0.0f64);
    let page_index = StoredValue::new(0usize);
    let previous_width = StoredValue::new(None::<f64>);
    let root_ref = NodeRef::<leptos::html::Div>::new();
    let scroller_ref = NodeRef::<leptos::html::Div>::new();

    // Continuous scroll progress in page units; every interpolated output
    // derives from this one cell.
    let position = Memo::new(move |_| scroll_x.get() / layout.get().width);

    let underline_x = Memo::new(move |_| {
        let max_range = layout.get().max_range;
        geometry::underline_offset(position.get(), len, max_range)
    });

    let calibrate = move || {
        let Some(root) = root_ref.get() else {
            return;
        };
        // The index is recovered against the width the offset was
        // accumulated under, before the new width replaces it.
        let index = geometry::intended_page(scroll_x.get_untracked(), previous_width.get_value());
        let width = root.get_bounding_client_rect().width();
        page_index.set_value(index);
        previous_width.set_value(Some(width));
        layout.set(TabLayout::measure(width, len, side_padding));
        leptos::logging::log!("tab bar calibrated: width={width}px, restoring page {index}");
        // Reposition only after the new page width has reached the DOM.
        request_animation_frame(move || {
            if let Some(scroller) = scroller_ref.get() {
                scroller.set_scroll_left(geometry::page_offset(index, width) as i32);
            }
        });
    };

    Effect::new(move |_| {
        if root_ref.get().is_some() {
            calibrate();
        }
    });
    let _ = window_event_listener(leptos::ev::resize, move |_| calibrate());

    let select_page = move |index: usize| {
        if let Some(scroller) = scroller_ref.get() {
            let width = layout.with_untracked(|l| l.width);
            let options = web_sys::ScrollToOptions::new();
            options.set_left(geometry::page_offset(index, width));
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            scroller.scroll_to_with_scroll_to_options(&options);
        }
    };

    let handle_scroll = move |ev: web_sys::Event| {
        let Some(scroller) = scroller_ref.get() else {
            return;
        };
        let offset = scroller.scroll_left() as f64;
        scroll_x.set(offset);
        if let Some(callback) = on_scroll {
            callback.run(ev);
        }
        let width = layout.with_untracked(|l| l.width);
        if let Some(page) = geometry::settled_page(offset, width, page_index.get_value()) {
            page_index.set_value(page);
            if let Some(callback) = on_page {
                callback.run(page);
            }
        }
    };

    let header_css = style::resolve(&[
        style::HEADER,
        &header_style,
        &format!("padding-left: {side_padding}px; padding-right: {side_padding}px;"),
    ]);
    let label_css = style::resolve(&[style::LABEL, &label_style]);
    let image_css = style::resolve(&[style::IMAGE, &image_style]);
    let underline_css = style::resolve(&[style::UNDERLINE, &underline_style]);
    let scroller_css = style::resolve(&[
        "display: flex; flex-direction: row; flex: 1; overflow-x: auto; \
         scroll-snap-type: x mandatory; scrollbar-width: none;",
        scroll_view_props.style.as_deref().unwrap_or(""),
    ]);
    let scroller_class = match scroll_view_props.class {
        Some(extra) => format!("paged-tabs__pages {extra}"),
        None => "paged-tabs__pages".to_string(),
    };

    let markers = route_stack
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, route)| {
            let opacity = Memo::new(move |_| {
                geometry::marker_opacity(position.get(), i, inactive_opacity, fade_labels)
            });
            let marker = match route.label {
                Some(text) => {
                    let css = label_css.clone();
                    view! {
                        <span style=move || format!("{css} opacity: {};", opacity.get())>
                            {text}
                        </span>
                    }
                    .into_any()
                }
                None => {
                    let css = image_css.clone();
                    view! {
                        <img
                            src=route.image.unwrap_or_default()
                            style=move || format!("{css} opacity: {};", opacity.get())
                        />
                    }
                    .into_any()
                }
            };
            view! {
                <div
                    class="paged-tabs__marker"
                    style="flex: 1; display: flex; align-items: center; justify-content: center; cursor: pointer;"
                    on:click=move |_| select_page(i)
                >
                    {marker}
                </div>
            }
        })
        .collect_view();

    let pages = route_stack
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let scene = render_scene(route, i);
            view! {
                <div
                    class="paged-tabs__page"
                    style=move || {
                        format!(
                            "flex: none; scroll-snap-align: start; overflow: hidden; width: {}px;",
                            layout.get().width,
                        )
                    }
                >
                    {scene}
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class="paged-tabs"
            node_ref=root_ref
            style="display: flex; flex-direction: column; flex: 1; min-width: 0;"
        >
            <div class="paged-tabs__header" style=header_css>
                <div style="display: flex; flex-direction: row;">{markers}</div>
                <div style=move || {
                    let strip = (layout.get().width - 2.0 * side_padding).max(0.0);
                    format!("width: {strip}px; overflow: hidden; align-self: center;")
                }>
                    <div style=move || {
                        format!(
                            "margin-left: {}px; width: {}px;",
                            underline_x.get(),
                            layout.get().tab_width,
                        )
                    }>
                        <div style=underline_css></div>
                    </div>
                </div>
            </div>
            <div
                class=scroller_class
                node_ref=scroller_ref
                style=scroller_css
                on:scroll=handle_scroll
            >
                {pages}
            </div>
        </div>
    }
}
