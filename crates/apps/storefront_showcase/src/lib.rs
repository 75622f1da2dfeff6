//! Component explorer for the storefront UI primitives.
//!
//! Stories are declared in TOML under `stories/`, validated by the build
//! script, and embedded as a JSON catalog. The explorer renders the selected
//! story from its current args, generates arg editors from each component's
//! controls, logs story callbacks, and remembers the selection in
//! `localStorage`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod explorer;
mod panels;
pub mod persistence;
pub mod stories;

use leptos::*;
use storefront_ui::prelude::*;

use crate::catalog::{builtin_catalog, StoryCatalog, StoryLayout};
use crate::explorer::{reduce_explorer, ExplorerAction, ExplorerEffect, ExplorerState};
use crate::panels::{ActionsPanel, ControlsPanel, StorySidebar};
use crate::persistence::ExplorerStore;
use crate::stories::{render_story, StoryArgs};

pub use panels::{format_action, value_from_input};

fn apply_effects(
    effects: Vec<ExplorerEffect>,
    state: RwSignal<ExplorerState>,
    on_navigate: Option<Callback<String>>,
) {
    for effect in effects {
        match effect {
            ExplorerEffect::PersistState => {
                let snapshot = state.with_untracked(ExplorerState::persisted);
                if let Err(err) = ExplorerStore.save(&snapshot) {
                    logging::warn!("explorer state persist failed: {err}");
                }
            }
            ExplorerEffect::SyncRoute(key) => {
                if let Some(on_navigate) = on_navigate {
                    on_navigate.call(key);
                }
            }
        }
    }
}

#[component]
/// Storefront component explorer.
///
/// Renders an error notice instead of the explorer when the embedded catalog
/// fails to load.
pub fn StorefrontShowcaseApp(
    /// Story key requested by the current route, if any.
    #[prop(optional, into)]
    route_story: MaybeSignal<Option<String>>,
    /// Called with a story key whenever the selection should be reflected in the URL.
    #[prop(optional)]
    on_navigate: Option<Callback<String>>,
) -> impl IntoView {
    match builtin_catalog() {
        Ok(catalog) => view! {
            <Explorer catalog=catalog route_story=route_story on_navigate=on_navigate />
        }
        .into_view(),
        Err(err) => {
            logging::warn!("story catalog failed to load: {err}");
            view! {
                <Panel ui_slot="catalog-error">
                    <Heading tone=TextTone::Danger>"Story catalog unavailable"</Heading>
                    <Text tone=TextTone::Secondary>{err.to_string()}</Text>
                </Panel>
            }
            .into_view()
        }
    }
}

#[component]
fn Explorer(
    catalog: &'static StoryCatalog,
    route_story: MaybeSignal<Option<String>>,
    on_navigate: Option<Callback<String>>,
) -> impl IntoView {
    let initial = ExplorerState::restore(
        catalog,
        route_story.get_untracked().as_deref(),
        ExplorerStore.load(),
    );
    let initial = match initial {
        Ok(initial) => initial,
        Err(err) => {
            logging::warn!("explorer state restore failed: {err}");
            return view! { <Text tone=TextTone::Danger>{err.to_string()}</Text> }.into_view();
        }
    };
    let state = create_rw_signal(initial);

    let dispatch = Callback::new(move |action: ExplorerAction| {
        let mut next = state.get_untracked();
        match reduce_explorer(&mut next, catalog, action) {
            Ok(effects) => {
                state.set(next);
                apply_effects(effects, state, on_navigate);
            }
            Err(err) => logging::warn!("explorer action rejected: {err}"),
        }
    });
    let record = Callback::new(move |name: String| {
        dispatch.call(ExplorerAction::RecordAction(name));
    });

    create_effect(move |_| {
        let Some(key) = route_story.get() else {
            return;
        };
        if state.with_untracked(|state| state.selected != key) {
            dispatch.call(ExplorerAction::SelectStory(key));
        }
    });

    let rendered = create_memo(move |_| {
        state.with(|state| (state.selected.clone(), state.args.clone()))
    });
    let canvas = move || {
        let (key, args) = rendered.get();
        let Some(story) = catalog.find(&key) else {
            return ().into_view();
        };
        render_story(
            &story.component.component,
            &story.story.id,
            StoryArgs::new(args, record),
        )
    };
    let header = move || {
        let key = rendered.with(|(key, _)| key.clone());
        catalog.find(&key).map(|story| {
            let title = format!("{} / {}", story.component.title, story.story.name);
            let description = if story.story.description.is_empty() {
                story.component.description.clone()
            } else {
                story.story.description.clone()
            };
            view! {
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Title>{title}</Heading>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{description}</Text>
                </Stack>
            }
        })
    };
    let layout = move || {
        rendered.with(|(key, _)| {
            match catalog.find(key).map(|story| story.component.layout) {
                Some(StoryLayout::Padded) => "padded",
                _ => "centered",
            }
        })
    };

    view! {
        <div class="showcase-app" data-ui-kind="showcase">
            <header data-ui-slot="masthead">
                <Heading role=TextRole::Title>{catalog.title.clone()}</Heading>
            </header>
            <StorySidebar catalog=catalog state=state dispatch=dispatch />
            <main data-ui-slot="workspace">
                {header}
                <section data-ui-slot="canvas" data-ui-layout=layout aria-label="Story canvas">
                    {canvas}
                </section>
                <ControlsPanel catalog=catalog state=state dispatch=dispatch />
                <ActionsPanel state=state dispatch=dispatch />
            </main>
        </div>
    }
    .into_view()
}
