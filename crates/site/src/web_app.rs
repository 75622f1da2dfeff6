use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use storefront_ui_showcase::StorefrontShowcaseApp;

/// Route path that opens a story by key.
pub fn story_path(story_key: &str) -> String {
    format!("/story/{story_key}")
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Storefront UI" />
        <Meta name="description" content="Component explorer for the mobile storefront UI primitives." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ExplorerRoute />
                    <Route path="/story/:id" view=ExplorerRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ExplorerRoute() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let location = use_location();
    let route_story = Signal::derive(move || params.with(|map| map.get("id").cloned()));
    let on_navigate = Callback::new(move |story_key: String| {
        let path = story_path(&story_key);
        if location.pathname.get_untracked() != path {
            navigate(&path, Default::default());
        }
    });

    view! {
        <Title formatter=move |text: String| match route_story.get() {
            Some(story) => format!("{story} | {text}"),
            None => text,
        } />
        <StorefrontShowcaseApp route_story=route_story on_navigate=on_navigate />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_paths_embed_the_story_key() {
        assert_eq!(story_path("modal--vertical-danger"), "/story/modal--vertical-danger");
    }
}
