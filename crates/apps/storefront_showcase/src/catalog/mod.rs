//! Build-time story catalog and its runtime accessors.

use std::sync::OnceLock;

mod schema;

pub use schema::{
    story_key, ArgControl, ArgSpec, ArgValue, CatalogError, ComponentStories, ShowcaseConfig,
    StoryCatalog, StoryEntry, StoryLayout, StoryRef, CATALOG_SCHEMA_VERSION, STORY_KEY_SEPARATOR,
};

include!(concat!(env!("OUT_DIR"), "/story_catalog_generated.rs"));

/// Returns the generated story catalog JSON payload.
pub fn builtin_catalog_json() -> &'static str {
    STORY_CATALOG_JSON
}

/// Returns the parsed built-in story catalog.
///
/// # Errors
///
/// Returns the parse or validation failure of the embedded catalog.
pub fn builtin_catalog() -> Result<&'static StoryCatalog, CatalogError> {
    static CATALOG: OnceLock<Result<StoryCatalog, CatalogError>> = OnceLock::new();
    CATALOG
        .get_or_init(|| StoryCatalog::from_json(STORY_CATALOG_JSON))
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::BTreeMap;

    use super::*;

    pub(crate) fn select(options: &[&str]) -> ArgControl {
        ArgControl::Select {
            options: options.iter().map(|option| option.to_string()).collect(),
            default: None,
        }
    }

    pub(crate) fn arg(name: &str, control: ArgControl) -> ArgSpec {
        ArgSpec {
            name: name.to_string(),
            description: String::new(),
            control,
        }
    }

    pub(crate) fn story(id: &str, args: &[(&str, ArgValue)]) -> StoryEntry {
        StoryEntry {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            composed: false,
            args: args
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    pub(crate) fn text(value: &str) -> ArgValue {
        ArgValue::Text(value.to_string())
    }

    pub(crate) fn button_component() -> ComponentStories {
        ComponentStories {
            schema_version: CATALOG_SCHEMA_VERSION,
            component: "button".to_string(),
            title: "Components/Button".to_string(),
            layout: StoryLayout::Centered,
            description: String::new(),
            args: vec![
                arg("variant", select(&["primary", "secondary", "danger"])),
                arg("disabled", ArgControl::Boolean { default: false }),
                arg(
                    "label",
                    ArgControl::Text {
                        default: "버튼".to_string(),
                    },
                ),
                arg("on_click", ArgControl::Action),
            ],
            stories: vec![
                story("primary", &[("label", text("확인"))]),
                story(
                    "danger",
                    &[("variant", text("danger")), ("label", text("삭제"))],
                ),
            ],
        }
    }

    pub(crate) fn input_component() -> ComponentStories {
        ComponentStories {
            schema_version: CATALOG_SCHEMA_VERSION,
            component: "text-input".to_string(),
            title: "Example/TextInput".to_string(),
            layout: StoryLayout::Centered,
            description: String::new(),
            args: vec![arg("status", select(&["default", "error"]))],
            stories: vec![story("error", &[("status", text("error"))])],
        }
    }

    pub(crate) fn config(default_story: &str) -> ShowcaseConfig {
        ShowcaseConfig {
            schema_version: CATALOG_SCHEMA_VERSION,
            title: "Storefront UI".to_string(),
            default_story: default_story.to_string(),
            stories: Vec::new(),
        }
    }

    pub(crate) fn catalog() -> StoryCatalog {
        StoryCatalog::assemble(
            config("button--primary"),
            vec![button_component(), input_component()],
        )
        .expect("fixture catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fixtures::*;
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_covers_every_component() {
        let catalog = builtin_catalog().expect("embedded catalog parses");
        let components: Vec<&str> = catalog
            .components
            .iter()
            .map(|component| component.component.as_str())
            .collect();
        assert_eq!(
            components,
            vec!["button", "icon-text-button", "text-input", "modal"]
        );
        assert_eq!(catalog.stories().count(), 9 + 6 + 7 + 11);
        assert_eq!(
            catalog.default_story().map(|story| story.key()),
            Some("button--primary".to_string())
        );
    }

    #[test]
    fn builtin_json_round_trips_through_validation() {
        let reparsed = StoryCatalog::from_json(builtin_catalog_json()).expect("valid json");
        assert_eq!(Some(&reparsed), builtin_catalog().ok());
    }

    #[test]
    fn find_resolves_story_keys_and_rejects_unknown_ones() {
        let catalog = catalog();
        let found = catalog.find("button--danger").expect("danger story");
        assert_eq!(found.story.name, "danger");
        assert_eq!(found.component.component, "button");
        assert!(catalog.find("button--missing").is_none());
        assert!(catalog.find("button").is_none());
        assert!(catalog.find("missing--primary").is_none());
    }

    #[test]
    fn initial_args_layer_presets_over_control_defaults() {
        let catalog = catalog();
        let args = catalog.find("button--danger").expect("story").initial_args();
        assert_eq!(args.get("variant"), Some(&text("danger")));
        assert_eq!(args.get("disabled"), Some(&ArgValue::Bool(false)));
        assert_eq!(args.get("label"), Some(&text("삭제")));
        assert!(!args.contains_key("on_click"));

        let args = catalog.find("button--primary").expect("story").initial_args();
        assert_eq!(args.get("variant"), Some(&text("primary")));
    }

    #[test]
    fn groups_follow_title_prefix_in_first_seen_order() {
        let catalog = catalog();
        let groups: Vec<(&str, Vec<&str>)> = catalog
            .groups()
            .into_iter()
            .map(|(group, members)| {
                (
                    group,
                    members
                        .iter()
                        .map(|component| component.component.as_str())
                        .collect(),
                )
            })
            .collect();
        assert_eq!(
            groups,
            vec![
                ("Components", vec!["button"]),
                ("Example", vec!["text-input"])
            ]
        );
    }

    #[test]
    fn select_controls_accept_only_listed_options() {
        let control = select(&["sm", "md"]);
        assert!(control.accepts(&text("sm")));
        assert!(!control.accepts(&text("xl")));
        assert!(!control.accepts(&ArgValue::Bool(true)));
        assert!(!ArgControl::Action.accepts(&text("clicked")));
        assert_eq!(control.initial_value(), Some(text("sm")));
        assert_eq!(ArgControl::Action.initial_value(), None);
    }

    #[test]
    fn assemble_rejects_unknown_default_story() {
        let err = StoryCatalog::assemble(config("button--missing"), vec![button_component()])
            .expect_err("unknown default");
        assert_eq!(
            err,
            CatalogError::UnknownDefaultStory("button--missing".to_string())
        );
    }

    #[test]
    fn assemble_rejects_presets_for_undeclared_args() {
        let mut component = button_component();
        component.stories[0]
            .args
            .insert("tone".to_string(), text("loud"));
        let err = StoryCatalog::assemble(config("button--primary"), vec![component])
            .expect_err("unknown arg");
        assert_eq!(
            err,
            CatalogError::UnknownArg {
                story: "button--primary".to_string(),
                arg: "tone".to_string(),
            }
        );
    }

    #[test]
    fn assemble_rejects_select_presets_outside_options() {
        let mut component = button_component();
        component.stories[0]
            .args
            .insert("variant".to_string(), text("neon"));
        let err = StoryCatalog::assemble(config("button--primary"), vec![component])
            .expect_err("invalid option");
        assert_eq!(
            err,
            CatalogError::InvalidArgValue {
                story: "button--primary".to_string(),
                arg: "variant".to_string(),
            }
        );
    }

    #[test]
    fn assemble_rejects_duplicate_story_ids() {
        let mut component = button_component();
        component.stories.push(story("primary", &[]));
        let err = StoryCatalog::assemble(config("button--primary"), vec![component])
            .expect_err("duplicate story");
        assert_eq!(err, CatalogError::DuplicateStory("button--primary".to_string()));
    }

    #[test]
    fn assemble_rejects_unsupported_schema_versions() {
        let mut component = button_component();
        component.schema_version = 2;
        let err = StoryCatalog::assemble(config("button--primary"), vec![component])
            .expect_err("schema mismatch");
        assert_eq!(
            err,
            CatalogError::UnsupportedSchema {
                source_name: "button".to_string(),
                found: 2,
            }
        );
    }

    #[test]
    fn assemble_rejects_identifiers_containing_the_key_separator() {
        let mut component = button_component();
        component.stories.push(story("a--b", &[]));
        let err = StoryCatalog::assemble(config("button--primary"), vec![component])
            .expect_err("bad id");
        assert_eq!(err, CatalogError::InvalidIdentifier("a--b".to_string()));
    }

    #[test]
    fn assemble_rejects_empty_selects_and_duplicate_args() {
        let mut component = button_component();
        component.args.push(arg("size", select(&[])));
        let err = StoryCatalog::assemble(config("button--primary"), vec![component])
            .expect_err("empty select");
        assert_eq!(
            err,
            CatalogError::EmptySelect {
                component: "button".to_string(),
                arg: "size".to_string(),
            }
        );

        let mut component = button_component();
        component.args.push(arg("label", ArgControl::Action));
        let err = StoryCatalog::assemble(config("button--primary"), vec![component])
            .expect_err("duplicate arg");
        assert_eq!(
            err,
            CatalogError::DuplicateArg {
                component: "button".to_string(),
                arg: "label".to_string(),
            }
        );
    }

    #[test]
    fn from_json_reports_malformed_payloads() {
        assert!(matches!(
            StoryCatalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
