//! Story renderers for every catalog entry.
//!
//! Each component module exposes the story ids it can render and a `render`
//! function that turns a story id plus its current args into a view.
//! Arg-driven stories read their props from [`StoryArgs`]; composed stories
//! render fixed arrangements and ignore arg edits.

use std::collections::BTreeMap;

use leptos::*;

use crate::catalog::ArgValue;

mod button;
mod icon_text_button;
mod modal;
mod text_input;

#[derive(Clone)]
/// Current arg values of the rendered story plus the action recorder.
pub struct StoryArgs {
    values: BTreeMap<String, ArgValue>,
    on_action: Callback<String>,
}

impl StoryArgs {
    /// Wraps arg values and the callback that records story actions.
    pub fn new(values: BTreeMap<String, ArgValue>, on_action: Callback<String>) -> Self {
        Self { values, on_action }
    }

    /// Text or select arg, empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.values
            .get(name)
            .and_then(ArgValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    /// Boolean arg, `false` when absent.
    pub fn flag(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(ArgValue::as_bool)
            .unwrap_or(false)
    }

    /// Select arg parsed into a token enum, falling back to its default.
    pub fn choice<T: Default>(&self, name: &str, parse: fn(&str) -> Option<T>) -> T {
        self.values
            .get(name)
            .and_then(ArgValue::as_text)
            .and_then(parse)
            .unwrap_or_default()
    }

    /// Callback that records an invocation of the named action arg.
    pub fn action<T: 'static>(&self, name: &'static str) -> Callback<T> {
        let on_action = self.on_action;
        Callback::new(move |_: T| on_action.call(name.to_string()))
    }

    /// The raw action recorder, for composed stories that log custom names.
    pub fn recorder(&self) -> Callback<String> {
        self.on_action
    }
}

/// Story ids with a renderer, per component id.
pub fn renderable_stories() -> [(&'static str, &'static [&'static str]); 4] {
    [
        (button::COMPONENT, button::STORIES),
        (icon_text_button::COMPONENT, icon_text_button::STORIES),
        (text_input::COMPONENT, text_input::STORIES),
        (modal::COMPONENT, modal::STORIES),
    ]
}

/// Whether a renderer exists for a component story.
pub fn has_renderer(component: &str, story: &str) -> bool {
    renderable_stories()
        .iter()
        .any(|(id, stories)| *id == component && stories.contains(&story))
}

/// Renders a story, or a notice when no renderer is registered for it.
pub fn render_story(component: &str, story: &str, args: StoryArgs) -> View {
    let rendered = match component {
        button::COMPONENT => button::render(story, &args),
        icon_text_button::COMPONENT => icon_text_button::render(story, &args),
        text_input::COMPONENT => text_input::render(story, &args),
        modal::COMPONENT => modal::render(story, &args),
        _ => None,
    };
    rendered.unwrap_or_else(|| {
        logging::warn!("no renderer for story `{component}--{story}`");
        view! {
            <p data-ui-slot="missing-story" role="status">
                {format!("No renderer for {component}--{story}")}
            </p>
        }
        .into_view()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::builtin_catalog;

    fn args(values: &[(&str, ArgValue)]) -> StoryArgs {
        StoryArgs::new(
            values
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
            Callback::new(|_: String| {}),
        )
    }

    #[test]
    fn every_catalog_story_has_a_renderer_and_vice_versa() {
        let catalog = builtin_catalog().expect("catalog");
        let missing: Vec<String> = catalog
            .stories()
            .filter(|story| !has_renderer(&story.component.component, &story.story.id))
            .map(|story| story.key())
            .collect();
        assert_eq!(missing, Vec::<String>::new());

        let orphaned: Vec<String> = renderable_stories()
            .iter()
            .flat_map(|(component, stories)| {
                stories
                    .iter()
                    .map(move |story| crate::catalog::story_key(component, story))
            })
            .filter(|key| catalog.find(key).is_none())
            .collect();
        assert_eq!(orphaned, Vec::<String>::new());
    }

    #[test]
    fn story_args_read_typed_values_with_fallbacks() {
        let runtime = create_runtime();
        let args = args(&[
            ("variant", ArgValue::Text("danger".to_string())),
            ("size", ArgValue::Text("giant".to_string())),
            ("disabled", ArgValue::Bool(true)),
        ]);

        assert_eq!(
            args.choice("variant", storefront_ui::ButtonVariant::from_token),
            storefront_ui::ButtonVariant::Danger
        );
        assert_eq!(
            args.choice("size", storefront_ui::ButtonSize::from_token),
            storefront_ui::ButtonSize::Md
        );
        assert!(args.flag("disabled"));
        assert!(!args.flag("loading"));
        assert_eq!(args.text("variant"), "danger");
        assert_eq!(args.text("label"), "");
        runtime.dispose();
    }

    #[test]
    fn action_callbacks_record_their_arg_name() {
        let runtime = create_runtime();
        let log = create_rw_signal(Vec::<String>::new());
        let args = StoryArgs::new(
            BTreeMap::new(),
            Callback::new(move |name: String| log.update(|log| log.push(name))),
        );

        args.action::<()>("on_confirm").call(());
        args.action::<u8>("on_cancel").call(7);
        args.recorder().call("custom".to_string());

        assert_eq!(
            log.get_untracked(),
            vec![
                "on_confirm".to_string(),
                "on_cancel".to_string(),
                "custom".to_string()
            ]
        );
        runtime.dispose();
    }
}
