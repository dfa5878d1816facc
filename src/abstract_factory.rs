//! # Abstract Factory
//!
//! A [`GuiFactory`] produces a family of related widgets (button + checkbox)
//! without the caller ever naming a concrete type. The platform choice is a
//! piece of configuration, so [`OsType`] deserializes straight out of a TOML
//! file — the client picks a factory once and renders platform-correct
//! widgets from then on.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read gui config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid gui config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    Windows,
    Mac,
}

#[derive(Deserialize)]
struct GuiConfig {
    gui: GuiSection,
}

#[derive(Deserialize)]
struct GuiSection {
    os: OsType,
}

impl OsType {
    /// Parses `[gui] os = "mac" | "windows"` from TOML text.
    pub fn from_config_str(text: &str) -> Result<Self, ConfigError> {
        let config: GuiConfig = toml::from_str(text)?;
        Ok(config.gui.os)
    }

    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_config_str(&fs::read_to_string(path)?)
    }
}

pub trait Button {
    fn render(&self) -> String;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

pub trait Checkbox {
    fn render(&self) -> String;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

macro_rules! widget {
    ($name:ident, $trait_:ident, $label:literal) => {
        #[derive(Default)]
        pub struct $name {
            active: bool,
        }

        impl $trait_ for $name {
            fn render(&self) -> String {
                format!("{} is rendering", $label)
            }

            fn is_active(&self) -> bool {
                self.active
            }

            fn set_active(&mut self, active: bool) {
                self.active = active;
            }
        }
    };
}

widget!(WindowsButton, Button, "Windows Button");
widget!(MacButton, Button, "Mac Button");
widget!(WindowsCheckbox, Checkbox, "Windows Checkbox");
widget!(MacCheckbox, Checkbox, "Mac Checkbox");

/// The abstract factory: one creation method per product in the family.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton::default())
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox::default())
    }
}

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton::default())
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox::default())
    }
}

/// Picks the concrete factory for the configured platform.
pub fn factory_for(os: OsType) -> Box<dyn GuiFactory> {
    match os {
        OsType::Windows => Box::new(WindowsFactory),
        OsType::Mac => Box::new(MacFactory),
    }
}
