//! Explorer state, reducer actions, and transition logic.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{ArgControl, ArgValue, StoryCatalog, StoryRef};

/// Maximum number of entries kept in the action log.
pub const ACTION_LOG_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One recorded callback invocation from the rendered story.
pub struct ActionRecord {
    /// Monotonic sequence number, unique per explorer session.
    pub sequence: u64,
    /// Callback arg name, e.g. `on_click`.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Live explorer state: the selected story, its current args, and the action log.
pub struct ExplorerState {
    /// Key of the selected story.
    pub selected: String,
    /// Current arg values for the selected story.
    pub args: BTreeMap<String, ArgValue>,
    /// Recorded actions, oldest first.
    pub actions: VecDeque<ActionRecord>,
    next_sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Persisted subset of [`ExplorerState`].
pub struct PersistedExplorer {
    /// Key of the selected story.
    pub selected: String,
    /// Arg values at the time of saving.
    #[serde(default)]
    pub args: BTreeMap<String, ArgValue>,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_explorer`].
pub enum ExplorerAction {
    /// Select a story by key and reset its args to the story presets.
    SelectStory(String),
    /// Change one arg of the selected story.
    SetArg {
        /// Arg name.
        name: String,
        /// New value.
        value: ArgValue,
    },
    /// Restore the selected story's preset args.
    ResetArgs,
    /// Append a callback invocation to the action log.
    RecordAction(String),
    /// Empty the action log.
    ClearActions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_explorer`] for the UI layer to execute.
pub enum ExplorerEffect {
    /// Persist the selected story and args.
    PersistState,
    /// Reflect the selected story in the browser location.
    SyncRoute(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not fit the catalog.
pub enum ExplorerError {
    /// The story key is not in the catalog.
    #[error("story `{0}` not found")]
    UnknownStory(String),
    /// The selected story's component has no such arg.
    #[error("story `{story}` has no arg `{arg}`")]
    UnknownArg {
        /// Selected story key.
        story: String,
        /// Arg name.
        arg: String,
    },
    /// The value does not fit the arg's control.
    #[error("arg `{arg}` rejects value {value:?}")]
    InvalidArgValue {
        /// Arg name.
        arg: String,
        /// Rejected value.
        value: ArgValue,
    },
    /// Action args are logged rather than edited.
    #[error("arg `{0}` is an action and cannot be set")]
    ActionArg(String),
}

impl ExplorerState {
    /// Creates state positioned on a story.
    pub fn for_story(story: StoryRef<'_>) -> Self {
        Self {
            selected: story.key(),
            args: story.initial_args(),
            actions: VecDeque::new(),
            next_sequence: 1,
        }
    }

    /// Creates state for the catalog's default story.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::UnknownStory`] for a catalog without stories.
    pub fn new(catalog: &StoryCatalog) -> Result<Self, ExplorerError> {
        catalog
            .default_story()
            .map(Self::for_story)
            .ok_or_else(|| ExplorerError::UnknownStory(catalog.default_story.clone()))
    }

    /// Rebuilds state from a route target and a persisted snapshot.
    ///
    /// A route that names a known story wins over the persisted selection.
    /// Persisted args are applied only when they belong to the restored story
    /// and still fit their controls; anything else falls back to the story
    /// presets. Unknown stories fall back to the default story.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::UnknownStory`] for a catalog without stories.
    pub fn restore(
        catalog: &StoryCatalog,
        route_story: Option<&str>,
        persisted: Option<PersistedExplorer>,
    ) -> Result<Self, ExplorerError> {
        let persisted = persisted.filter(|snapshot| catalog.find(&snapshot.selected).is_some());
        let routed = route_story.and_then(|key| catalog.find(key));
        let mut state = match (routed, persisted.as_ref()) {
            (Some(story), _) => Self::for_story(story),
            (None, Some(snapshot)) => catalog
                .find(&snapshot.selected)
                .map(Self::for_story)
                .ok_or_else(|| ExplorerError::UnknownStory(snapshot.selected.clone()))?,
            (None, None) => Self::new(catalog)?,
        };

        if let Some(snapshot) = persisted.filter(|snapshot| snapshot.selected == state.selected) {
            let Some(story) = catalog.find(&state.selected) else {
                return Ok(state);
            };
            for (name, value) in snapshot.args {
                let fits = story
                    .component
                    .arg(&name)
                    .is_some_and(|spec| spec.control.accepts(&value));
                if fits {
                    state.args.insert(name, value);
                }
            }
        }
        Ok(state)
    }

    /// Snapshot for persistence.
    pub fn persisted(&self) -> PersistedExplorer {
        PersistedExplorer {
            selected: self.selected.clone(),
            args: self.args.clone(),
        }
    }

    /// Current value of a boolean arg, `false` when absent.
    pub fn bool_arg(&self, name: &str) -> bool {
        self.args
            .get(name)
            .and_then(ArgValue::as_bool)
            .unwrap_or(false)
    }

    /// Current value of a text or select arg, empty when absent.
    pub fn text_arg(&self, name: &str) -> &str {
        self.args
            .get(name)
            .and_then(ArgValue::as_text)
            .unwrap_or("")
    }
}

/// Applies an [`ExplorerAction`] to the explorer state and collects resulting side effects.
///
/// # Errors
///
/// Returns an [`ExplorerError`] when the action names a missing story or arg,
/// or when a value does not fit its control. The state is left untouched on error.
pub fn reduce_explorer(
    state: &mut ExplorerState,
    catalog: &StoryCatalog,
    action: ExplorerAction,
) -> Result<Vec<ExplorerEffect>, ExplorerError> {
    let mut effects = Vec::new();
    match action {
        ExplorerAction::SelectStory(key) => {
            let story = catalog
                .find(&key)
                .ok_or_else(|| ExplorerError::UnknownStory(key.clone()))?;
            state.args = story.initial_args();
            state.selected = story.key();
            effects.push(ExplorerEffect::PersistState);
            effects.push(ExplorerEffect::SyncRoute(state.selected.clone()));
        }
        ExplorerAction::SetArg { name, value } => {
            let story = selected_story(state, catalog)?;
            let spec = story
                .component
                .arg(&name)
                .ok_or_else(|| ExplorerError::UnknownArg {
                    story: state.selected.clone(),
                    arg: name.clone(),
                })?;
            if matches!(spec.control, ArgControl::Action) {
                return Err(ExplorerError::ActionArg(name));
            }
            if !spec.control.accepts(&value) {
                return Err(ExplorerError::InvalidArgValue { arg: name, value });
            }
            if state.args.get(&name) != Some(&value) {
                state.args.insert(name, value);
                effects.push(ExplorerEffect::PersistState);
            }
        }
        ExplorerAction::ResetArgs => {
            let story = selected_story(state, catalog)?;
            state.args = story.initial_args();
            effects.push(ExplorerEffect::PersistState);
        }
        ExplorerAction::RecordAction(name) => {
            let sequence = state.next_sequence;
            state.next_sequence += 1;
            state.actions.push_back(ActionRecord { sequence, name });
            while state.actions.len() > ACTION_LOG_LIMIT {
                state.actions.pop_front();
            }
        }
        ExplorerAction::ClearActions => {
            state.actions.clear();
        }
    }
    Ok(effects)
}

fn selected_story<'a>(
    state: &ExplorerState,
    catalog: &'a StoryCatalog,
) -> Result<StoryRef<'a>, ExplorerError> {
    catalog
        .find(&state.selected)
        .ok_or_else(|| ExplorerError::UnknownStory(state.selected.clone()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::fixtures::{catalog, text};

    fn state() -> ExplorerState {
        ExplorerState::new(&catalog()).expect("default story")
    }

    #[test]
    fn new_state_selects_default_story_with_preset_args() {
        let state = state();
        assert_eq!(state.selected, "button--primary");
        assert_eq!(state.text_arg("label"), "확인");
        assert_eq!(state.text_arg("variant"), "primary");
        assert!(!state.bool_arg("disabled"));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn select_story_resets_args_and_requests_persist_and_route_sync() {
        let catalog = catalog();
        let mut state = state();
        reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "disabled".to_string(),
                value: ArgValue::Bool(true),
            },
        )
        .expect("set arg");

        let effects = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SelectStory("button--danger".to_string()),
        )
        .expect("select");

        assert_eq!(state.selected, "button--danger");
        assert_eq!(state.text_arg("variant"), "danger");
        assert!(!state.bool_arg("disabled"));
        assert_eq!(
            effects,
            vec![
                ExplorerEffect::PersistState,
                ExplorerEffect::SyncRoute("button--danger".to_string())
            ]
        );
    }

    #[test]
    fn select_unknown_story_is_an_error_and_leaves_state_untouched() {
        let catalog = catalog();
        let mut state = state();
        let before = state.clone();
        let err = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SelectStory("button--missing".to_string()),
        )
        .expect_err("unknown story");
        assert_eq!(err, ExplorerError::UnknownStory("button--missing".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn set_arg_validates_name_type_and_options() {
        let catalog = catalog();
        let mut state = state();

        let err = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "tone".to_string(),
                value: text("loud"),
            },
        )
        .expect_err("unknown arg");
        assert_eq!(
            err,
            ExplorerError::UnknownArg {
                story: "button--primary".to_string(),
                arg: "tone".to_string(),
            }
        );

        let err = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "disabled".to_string(),
                value: text("yes"),
            },
        )
        .expect_err("type mismatch");
        assert!(matches!(err, ExplorerError::InvalidArgValue { .. }));

        let err = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "variant".to_string(),
                value: text("neon"),
            },
        )
        .expect_err("option mismatch");
        assert!(matches!(err, ExplorerError::InvalidArgValue { .. }));

        let err = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "on_click".to_string(),
                value: text("clicked"),
            },
        )
        .expect_err("action arg");
        assert_eq!(err, ExplorerError::ActionArg("on_click".to_string()));

        assert_eq!(state.text_arg("variant"), "primary");
    }

    #[test]
    fn set_arg_persists_only_real_changes() {
        let catalog = catalog();
        let mut state = state();
        let effects = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "variant".to_string(),
                value: text("secondary"),
            },
        )
        .expect("set");
        assert_eq!(effects, vec![ExplorerEffect::PersistState]);
        assert_eq!(state.text_arg("variant"), "secondary");

        let effects = reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "variant".to_string(),
                value: text("secondary"),
            },
        )
        .expect("noop set");
        assert!(effects.is_empty());
    }

    #[test]
    fn reset_args_restores_story_presets() {
        let catalog = catalog();
        let mut state = state();
        reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::SetArg {
                name: "label".to_string(),
                value: text("바뀜"),
            },
        )
        .expect("set");
        reduce_explorer(&mut state, &catalog, ExplorerAction::ResetArgs).expect("reset");
        assert_eq!(state.text_arg("label"), "확인");
    }

    #[test]
    fn action_log_is_capped_and_drops_oldest_first() {
        let catalog = catalog();
        let mut state = state();
        for index in 0..(ACTION_LOG_LIMIT + 5) {
            reduce_explorer(
                &mut state,
                &catalog,
                ExplorerAction::RecordAction(format!("on_click#{index}")),
            )
            .expect("record");
        }
        assert_eq!(state.actions.len(), ACTION_LOG_LIMIT);
        assert_eq!(
            state.actions.front().map(|record| record.name.as_str()),
            Some("on_click#5")
        );
        assert_eq!(
            state.actions.back().map(|record| record.sequence),
            Some((ACTION_LOG_LIMIT + 5) as u64)
        );

        let effects =
            reduce_explorer(&mut state, &catalog, ExplorerAction::ClearActions).expect("clear");
        assert!(effects.is_empty());
        assert!(state.actions.is_empty());
    }

    #[test]
    fn sequence_numbers_keep_increasing_after_clear() {
        let catalog = catalog();
        let mut state = state();
        reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::RecordAction("on_click".to_string()),
        )
        .expect("record");
        reduce_explorer(&mut state, &catalog, ExplorerAction::ClearActions).expect("clear");
        reduce_explorer(
            &mut state,
            &catalog,
            ExplorerAction::RecordAction("on_click".to_string()),
        )
        .expect("record");
        assert_eq!(state.actions[0].sequence, 2);
    }

    #[test]
    fn restore_prefers_route_then_persisted_then_default() {
        let catalog = catalog();
        let persisted = PersistedExplorer {
            selected: "text-input--error".to_string(),
            args: BTreeMap::new(),
        };

        let routed = ExplorerState::restore(
            &catalog,
            Some("button--danger"),
            Some(persisted.clone()),
        )
        .expect("restore");
        assert_eq!(routed.selected, "button--danger");

        let restored =
            ExplorerState::restore(&catalog, Some("nope--nope"), Some(persisted)).expect("restore");
        assert_eq!(restored.selected, "text-input--error");

        let fallback = ExplorerState::restore(
            &catalog,
            None,
            Some(PersistedExplorer {
                selected: "gone--story".to_string(),
                args: BTreeMap::new(),
            }),
        )
        .expect("restore");
        assert_eq!(fallback.selected, "button--primary");
    }

    #[test]
    fn restore_keeps_only_args_that_still_fit_their_controls() {
        let catalog = catalog();
        let mut args = BTreeMap::new();
        args.insert("variant".to_string(), text("secondary"));
        args.insert("disabled".to_string(), text("not-a-bool"));
        args.insert("retired".to_string(), ArgValue::Bool(true));
        let restored = ExplorerState::restore(
            &catalog,
            None,
            Some(PersistedExplorer {
                selected: "button--primary".to_string(),
                args,
            }),
        )
        .expect("restore");

        assert_eq!(restored.text_arg("variant"), "secondary");
        assert!(!restored.bool_arg("disabled"));
        assert!(!restored.args.contains_key("retired"));
        assert_eq!(restored.persisted().selected, "button--primary");
    }

    #[test]
    fn persisted_args_are_ignored_when_route_selects_another_story() {
        let catalog = catalog();
        let mut args = BTreeMap::new();
        args.insert("variant".to_string(), text("secondary"));
        let restored = ExplorerState::restore(
            &catalog,
            Some("button--danger"),
            Some(PersistedExplorer {
                selected: "button--primary".to_string(),
                args,
            }),
        )
        .expect("restore");
        assert_eq!(restored.text_arg("variant"), "danger");
    }
}
