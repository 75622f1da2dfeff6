//! Explorer chrome: story navigation, arg controls, and the action log.

use leptos::*;
use storefront_ui::prelude::*;

use crate::catalog::{ArgControl, ArgSpec, ArgValue, StoryCatalog};
use crate::explorer::{ActionRecord, ExplorerAction, ExplorerState};

/// Converts raw control input into an arg value.
///
/// Text inputs and selects report `raw`, checkboxes report `checked`.
/// Action controls have no input and yield `None`.
pub fn value_from_input(control: &ArgControl, raw: &str, checked: bool) -> Option<ArgValue> {
    match control {
        ArgControl::Select { .. } | ArgControl::Text { .. } => {
            Some(ArgValue::Text(raw.to_string()))
        }
        ArgControl::Boolean { .. } => Some(ArgValue::Bool(checked)),
        ArgControl::Action => None,
    }
}

/// One-line rendering of an action log entry.
pub fn format_action(record: &ActionRecord) -> String {
    format!("#{} {}", record.sequence, record.name)
}

#[component]
/// Grouped story list. The selected story carries `aria-current="page"`.
pub fn StorySidebar(
    /// Catalog to list.
    catalog: &'static StoryCatalog,
    /// Explorer state, read for the current selection.
    state: RwSignal<ExplorerState>,
    /// Reducer entry point.
    dispatch: Callback<ExplorerAction>,
) -> impl IntoView {
    let groups = catalog
        .groups()
        .into_iter()
        .map(|(group, components)| {
            let components = components
                .into_iter()
                .map(|component| {
                    let name = component
                        .title
                        .rsplit_once('/')
                        .map(|(_, name)| name)
                        .unwrap_or(component.title.as_str())
                        .to_string();
                    let stories = component
                        .stories
                        .iter()
                        .map(|story| {
                            let key = crate::catalog::story_key(&component.component, &story.id);
                            let is_selected = {
                                let key = key.clone();
                                move || state.with(|state| state.selected == key)
                            };
                            let label = story.name.clone();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        data-ui-slot="story-link"
                                        aria-current=move || is_selected().then_some("page")
                                        on:click=move |_| {
                                            dispatch.call(ExplorerAction::SelectStory(key.clone()))
                                        }
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view();
                    view! {
                        <li data-ui-slot="component">
                            <Text role=TextRole::Caption tone=TextTone::Secondary>{name}</Text>
                            <ul data-ui-slot="stories">{stories}</ul>
                        </li>
                    }
                })
                .collect_view();
            let group = group.to_string();
            view! {
                <li data-ui-slot="group">
                    <Heading role=TextRole::Caption>{group}</Heading>
                    <ul data-ui-slot="components">{components}</ul>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="showcase-sidebar" aria-label="Stories">
            <ul data-ui-slot="groups">{groups}</ul>
        </nav>
    }
}

#[component]
fn ArgControlRow(
    spec: ArgSpec,
    state: RwSignal<ExplorerState>,
    dispatch: Callback<ExplorerAction>,
) -> impl IntoView {
    let ArgSpec {
        name,
        description,
        control,
    } = spec;
    let input_id = format!("showcase-arg-{name}");
    let value = {
        let name = name.clone();
        move || state.with(|state| state.args.get(&name).cloned())
    };
    let set = {
        let name = name.clone();
        let control = control.clone();
        move |raw: String, checked: bool| {
            if let Some(value) = value_from_input(&control, &raw, checked) {
                dispatch.call(ExplorerAction::SetArg {
                    name: name.clone(),
                    value,
                });
            }
        }
    };

    let editor = match control {
        ArgControl::Select { options, .. } => {
            let current = value.clone();
            let options = options
                .into_iter()
                .map(|option| {
                    let selected = {
                        let option = option.clone();
                        let current = current.clone();
                        move || current().as_ref().and_then(ArgValue::as_text) == Some(option.as_str())
                    };
                    view! { <option value=option.clone() prop:selected=selected>{option}</option> }
                })
                .collect_view();
            view! {
                <select id=input_id.clone() on:change=move |ev| set(event_target_value(&ev), false)>
                    {options}
                </select>
            }
            .into_view()
        }
        ArgControl::Boolean { .. } => view! {
            <input
                id=input_id.clone()
                type="checkbox"
                prop:checked=move || value().and_then(|value| value.as_bool()).unwrap_or(false)
                on:change=move |ev| set(String::new(), event_target_checked(&ev))
            />
        }
        .into_view(),
        ArgControl::Text { .. } => view! {
            <input
                id=input_id.clone()
                type="text"
                prop:value=move || {
                    value()
                        .and_then(|value| value.as_text().map(str::to_string))
                        .unwrap_or_default()
                }
                on:input=move |ev| set(event_target_value(&ev), false)
            />
        }
        .into_view(),
        ArgControl::Action => view! {
            <Badge tone=TextTone::Accent>"action"</Badge>
        }
        .into_view(),
    };

    view! {
        <tr data-ui-slot="control-row">
            <th scope="row">
                <label for=input_id>{name}</label>
            </th>
            <td>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{description}</Text>
            </td>
            <td>{editor}</td>
        </tr>
    }
}

#[component]
/// Arg editors for the selected story, generated from its component's controls.
///
/// Composed stories render fixed examples, so only a notice is shown for them.
pub fn ControlsPanel(
    /// Catalog that declares the controls.
    catalog: &'static StoryCatalog,
    /// Explorer state.
    state: RwSignal<ExplorerState>,
    /// Reducer entry point.
    dispatch: Callback<ExplorerAction>,
) -> impl IntoView {
    let selected = create_memo(move |_| state.with(|state| state.selected.clone()));

    let body = move || {
        let key = selected.get();
        let Some(story) = catalog.find(&key) else {
            return ().into_view();
        };
        if story.story.composed {
            return view! {
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    "이 스토리는 고정된 예시를 보여주며 컨트롤을 사용하지 않습니다."
                </Text>
            }
            .into_view();
        }
        let rows = story
            .component
            .args
            .iter()
            .cloned()
            .map(|spec| view! { <ArgControlRow spec=spec state=state dispatch=dispatch /> })
            .collect_view();
        view! {
            <table data-ui-slot="controls">
                <thead>
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Description"</th>
                        <th scope="col">"Control"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Sm
                on_click=Callback::new(move |_| dispatch.call(ExplorerAction::ResetArgs))
            >
                "Reset"
            </Button>
        }
        .into_view()
    };

    view! {
        <Panel ui_slot="controls-panel" aria_label="Controls">
            <Heading>"Controls"</Heading>
            {body}
        </Panel>
    }
}

#[component]
/// Most recent story actions, newest last.
pub fn ActionsPanel(
    /// Explorer state, read for the action log.
    state: RwSignal<ExplorerState>,
    /// Reducer entry point.
    dispatch: Callback<ExplorerAction>,
) -> impl IntoView {
    let entries = move || {
        state.with(|state| {
            state
                .actions
                .iter()
                .map(|record| view! { <li data-ui-slot="action">{format_action(record)}</li> })
                .collect_view()
        })
    };
    let is_empty = move || state.with(|state| state.actions.is_empty());

    view! {
        <Panel ui_slot="actions-panel" aria_label="Actions">
            <Cluster justify=LayoutJustify::Between>
                <Heading>"Actions"</Heading>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    disabled=Signal::derive(is_empty)
                    on_click=Callback::new(move |_| dispatch.call(ExplorerAction::ClearActions))
                >
                    "Clear"
                </Button>
            </Cluster>
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <Text role=TextRole::Caption tone=TextTone::Secondary>"No actions yet."</Text>
                }
            >
                <ol data-ui-slot="action-log" aria-live="polite">{entries}</ol>
            </Show>
        </Panel>
    }
}
