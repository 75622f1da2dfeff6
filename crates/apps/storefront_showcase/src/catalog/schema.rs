//! Story catalog schema shared by the build script and the runtime explorer.
//!
//! `build.rs` deserializes the TOML story files into these types, validates
//! them, and embeds the assembled catalog as JSON. The explorer parses that
//! JSON back and re-validates it before use.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Story file schema version understood by this crate.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Separator between the component and story segments of a story key.
pub const STORY_KEY_SEPARATOR: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Story catalog loading and validation failures.
pub enum CatalogError {
    /// A story file declares a schema this crate cannot read.
    #[error("{source_name}: unsupported story schema version {found}, expected {CATALOG_SCHEMA_VERSION}")]
    UnsupportedSchema {
        /// Story file or component name.
        source_name: String,
        /// Declared version.
        found: u32,
    },
    /// Catalog text could not be deserialized.
    #[error("story catalog parse failed: {0}")]
    Parse(String),
    /// A component or story identifier cannot form a story key.
    #[error("identifier `{0}` must be non-empty and must not contain `--`")]
    InvalidIdentifier(String),
    /// Two components share an identifier.
    #[error("component `{0}` is declared more than once")]
    DuplicateComponent(String),
    /// Two stories share a key.
    #[error("story `{0}` is declared more than once")]
    DuplicateStory(String),
    /// Two arg controls share a name within a component.
    #[error("component `{component}` declares arg `{arg}` more than once")]
    DuplicateArg {
        /// Component identifier.
        component: String,
        /// Arg name.
        arg: String,
    },
    /// A select control offers no options.
    #[error("component `{component}` arg `{arg}` is a select without options")]
    EmptySelect {
        /// Component identifier.
        component: String,
        /// Arg name.
        arg: String,
    },
    /// A story preset or default names an arg with no control.
    #[error("story `{story}` sets unknown arg `{arg}`")]
    UnknownArg {
        /// Story key.
        story: String,
        /// Arg name.
        arg: String,
    },
    /// A story preset or default does not fit its control.
    #[error("story `{story}` sets arg `{arg}` to a value its control rejects")]
    InvalidArgValue {
        /// Story key.
        story: String,
        /// Arg name.
        arg: String,
    },
    /// The configured default story does not exist.
    #[error("default story `{0}` is not in the catalog")]
    UnknownDefaultStory(String),
    /// The catalog holds no stories.
    #[error("story catalog is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
/// How the explorer canvas frames a component.
pub enum StoryLayout {
    /// Component centered in the canvas.
    #[default]
    Centered,
    /// Component placed with canvas padding.
    Padded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Value of one component arg.
pub enum ArgValue {
    /// Boolean arg.
    Bool(bool),
    /// Text or select arg.
    Text(String),
}

impl ArgValue {
    /// Boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Bool(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Typed editor for one component arg.
pub enum ArgControl {
    /// One of a fixed option list.
    Select {
        /// Allowed values.
        options: Vec<String>,
        /// Initial value; the first option when omitted.
        #[serde(default)]
        default: Option<String>,
    },
    /// On/off toggle.
    Boolean {
        /// Initial value.
        #[serde(default)]
        default: bool,
    },
    /// Free text.
    Text {
        /// Initial value.
        #[serde(default)]
        default: String,
    },
    /// Callback whose invocations are logged instead of edited.
    Action,
}

impl ArgControl {
    /// Whether a value fits this control.
    pub fn accepts(&self, value: &ArgValue) -> bool {
        match (self, value) {
            (Self::Select { options, .. }, ArgValue::Text(value)) => {
                options.iter().any(|option| option == value)
            }
            (Self::Boolean { .. }, ArgValue::Bool(_)) => true,
            (Self::Text { .. }, ArgValue::Text(_)) => true,
            _ => false,
        }
    }

    /// Initial value, or `None` for action controls.
    pub fn initial_value(&self) -> Option<ArgValue> {
        match self {
            Self::Select { options, default } => default
                .clone()
                .or_else(|| options.first().cloned())
                .map(ArgValue::Text),
            Self::Boolean { default } => Some(ArgValue::Bool(*default)),
            Self::Text { default } => Some(ArgValue::Text(default.clone())),
            Self::Action => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Declared arg of a component.
pub struct ArgSpec {
    /// Arg name, matching the story renderer's lookup key.
    pub name: String,
    /// Help text shown next to the control.
    #[serde(default)]
    pub description: String,
    /// Editor type.
    pub control: ArgControl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named story of a component.
pub struct StoryEntry {
    /// Story identifier, unique within its component.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional story notes.
    #[serde(default)]
    pub description: String,
    /// Composed stories render fixed examples and ignore arg edits.
    #[serde(default)]
    pub composed: bool,
    /// Arg presets layered over control defaults.
    #[serde(default)]
    pub args: BTreeMap<String, ArgValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// All stories of one component, as declared in one story file.
pub struct ComponentStories {
    /// Story file schema version.
    pub schema_version: u32,
    /// Component identifier used in story keys.
    pub component: String,
    /// Navigation title, e.g. `Components/Button`.
    pub title: String,
    /// Canvas framing.
    #[serde(default)]
    pub layout: StoryLayout,
    /// Component documentation.
    #[serde(default)]
    pub description: String,
    /// Arg controls.
    #[serde(default)]
    pub args: Vec<ArgSpec>,
    /// Stories in display order.
    pub stories: Vec<StoryEntry>,
}

impl ComponentStories {
    /// Looks up an arg control by name.
    pub fn arg(&self, name: &str) -> Option<&ArgSpec> {
        self.args.iter().find(|arg| arg.name == name)
    }

    /// Control defaults overlaid with a story's presets.
    pub fn resolved_args(&self, story: &StoryEntry) -> BTreeMap<String, ArgValue> {
        let mut resolved: BTreeMap<String, ArgValue> = self
            .args
            .iter()
            .filter_map(|arg| Some((arg.name.clone(), arg.control.initial_value()?)))
            .collect();
        for (name, value) in &story.args {
            resolved.insert(name.clone(), value.clone());
        }
        resolved
    }

    /// Navigation group, the title segment before the last `/`.
    pub fn group(&self) -> &str {
        self.title
            .rsplit_once('/')
            .map(|(group, _)| group)
            .unwrap_or("")
    }

    fn validate(&self) -> Result<(), CatalogError> {
        check_identifier(&self.component)?;
        if self.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::UnsupportedSchema {
                source_name: self.component.clone(),
                found: self.schema_version,
            });
        }

        let mut arg_names = BTreeSet::new();
        for arg in &self.args {
            if !arg_names.insert(arg.name.as_str()) {
                return Err(CatalogError::DuplicateArg {
                    component: self.component.clone(),
                    arg: arg.name.clone(),
                });
            }
            if let ArgControl::Select { options, default } = &arg.control {
                if options.is_empty() {
                    return Err(CatalogError::EmptySelect {
                        component: self.component.clone(),
                        arg: arg.name.clone(),
                    });
                }
                if let Some(default) = default {
                    if !options.contains(default) {
                        return Err(CatalogError::InvalidArgValue {
                            story: self.component.clone(),
                            arg: arg.name.clone(),
                        });
                    }
                }
            }
        }

        let mut story_ids = BTreeSet::new();
        for story in &self.stories {
            check_identifier(&story.id)?;
            let key = story_key(&self.component, &story.id);
            if !story_ids.insert(story.id.as_str()) {
                return Err(CatalogError::DuplicateStory(key));
            }
            for (name, value) in &story.args {
                let Some(spec) = self.arg(name) else {
                    return Err(CatalogError::UnknownArg {
                        story: key,
                        arg: name.clone(),
                    });
                };
                if !spec.control.accepts(value) {
                    return Err(CatalogError::InvalidArgValue {
                        story: key,
                        arg: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Explorer configuration read from `showcase.toml`.
pub struct ShowcaseConfig {
    /// Config schema version.
    pub schema_version: u32,
    /// Explorer title.
    pub title: String,
    /// Story key opened when nothing else is selected.
    pub default_story: String,
    /// Story files, relative to the crate root, in navigation order.
    pub stories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Fully assembled, validated story catalog.
pub struct StoryCatalog {
    /// Explorer title.
    pub title: String,
    /// Story key opened when nothing else is selected.
    pub default_story: String,
    /// Components in navigation order.
    pub components: Vec<ComponentStories>,
}

#[derive(Debug, Clone, Copy)]
/// Borrowed view of one story and the component that owns it.
pub struct StoryRef<'a> {
    /// Owning component.
    pub component: &'a ComponentStories,
    /// The story itself.
    pub story: &'a StoryEntry,
}

impl StoryRef<'_> {
    /// Globally unique story key.
    pub fn key(&self) -> String {
        story_key(&self.component.component, &self.story.id)
    }

    /// Control defaults overlaid with this story's presets.
    pub fn initial_args(&self) -> BTreeMap<String, ArgValue> {
        self.component.resolved_args(self.story)
    }
}

fn check_identifier(id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() || id.contains(STORY_KEY_SEPARATOR) {
        return Err(CatalogError::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}

/// Builds the globally unique key of a story.
pub fn story_key(component: &str, story: &str) -> String {
    format!("{component}{STORY_KEY_SEPARATOR}{story}")
}

impl StoryCatalog {
    /// Assembles and validates a catalog from its config and story files.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn assemble(
        config: ShowcaseConfig,
        components: Vec<ComponentStories>,
    ) -> Result<Self, CatalogError> {
        if config.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::UnsupportedSchema {
                source_name: "showcase".to_string(),
                found: config.schema_version,
            });
        }
        let catalog = Self {
            title: config.title,
            default_story: config.default_story,
            components,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates an embedded JSON catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and any validation failure.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serializes the catalog for embedding.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(self).map_err(|err| CatalogError::Parse(err.to_string()))
    }

    /// Validates every component and the default story.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut components = BTreeSet::new();
        for component in &self.components {
            if !components.insert(component.component.as_str()) {
                return Err(CatalogError::DuplicateComponent(component.component.clone()));
            }
            component.validate()?;
        }
        if self.stories().next().is_none() {
            return Err(CatalogError::Empty);
        }
        if self.find(&self.default_story).is_none() {
            return Err(CatalogError::UnknownDefaultStory(self.default_story.clone()));
        }
        Ok(())
    }

    /// Every story in navigation order.
    pub fn stories(&self) -> impl Iterator<Item = StoryRef<'_>> {
        self.components.iter().flat_map(|component| {
            component
                .stories
                .iter()
                .map(move |story| StoryRef { component, story })
        })
    }

    /// Finds a story by key.
    pub fn find(&self, key: &str) -> Option<StoryRef<'_>> {
        let (component_id, story_id) = key.split_once(STORY_KEY_SEPARATOR)?;
        let component = self
            .components
            .iter()
            .find(|component| component.component == component_id)?;
        let story = component.stories.iter().find(|story| story.id == story_id)?;
        Some(StoryRef { component, story })
    }

    /// The configured default story.
    ///
    /// Validation guarantees it exists; the first story is the fallback for
    /// catalogs built without validation.
    pub fn default_story(&self) -> Option<StoryRef<'_>> {
        self.find(&self.default_story)
            .or_else(|| self.stories().next())
    }

    /// Components grouped by title prefix, preserving first-seen group order.
    pub fn groups(&self) -> Vec<(&str, Vec<&ComponentStories>)> {
        let mut groups: Vec<(&str, Vec<&ComponentStories>)> = Vec::new();
        for component in &self.components {
            let group = component.group();
            match groups.iter_mut().find(|(name, _)| *name == group) {
                Some((_, members)) => members.push(component),
                None => groups.push((group, vec![component])),
            }
        }
        groups
    }
}
