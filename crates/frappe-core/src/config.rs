use crate::error::{FrResult, FrappeError};
use crate::key::{Finger, Hand, Key};
use crate::layout::{ExtendedKeyboardLayout, KeyboardLayout, KeymapTable};
use clap::{parser::ValueSource, ArgMatches, Args};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One key entry of a layout definition file. `character` doubles as the
/// key label in extended mode ("a", "Shift", "AltGr").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyDef {
    pub character: String,
    pub row: i32,
    pub column: i32,
    pub finger: String,
    pub hand: String,
}

impl KeyDef {
    fn to_key(&self) -> FrResult<Key> {
        let finger = Finger::from_str(&self.finger).map_err(|_| {
            FrappeError::Config(format!("unknown finger '{}' for key '{}'", self.finger, self.character))
        })?;
        let hand = Hand::from_str(&self.hand).map_err(|_| {
            FrappeError::Config(format!("unknown hand '{}' for key '{}'", self.hand, self.character))
        })?;

        let mut chars = self.character.chars();
        let character = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            // Multi-char labels (modifiers) have no printable character.
            _ => '\0',
        };

        Ok(Key::new(self.row, self.column, finger, hand, character))
    }
}

/// In-memory form of `keyboards.json`: named layouts, each a list of keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardsFile {
    pub layouts: HashMap<String, Vec<KeyDef>>,
}

impl KeyboardsFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FrResult<Self> {
        let content = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)?;
        debug!(layouts = file.layouts.len(), "keyboard definitions loaded");
        Ok(file)
    }

    pub fn layout_names(&self) -> Vec<&str> {
        self.layouts.keys().map(String::as_str).sorted().collect()
    }

    fn defs(&self, name: &str) -> FrResult<&[KeyDef]> {
        self.layouts
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| FrappeError::Config(format!("unknown layout '{name}'")))
    }

    /// Builds the simple character -> key table. Label-only entries
    /// (modifiers) are left out since they type no character.
    pub fn build_layout(&self, name: &str) -> FrResult<KeyboardLayout> {
        let mut layout = KeyboardLayout::new();
        for def in self.defs(name)? {
            let key = def.to_key()?;
            if key.character != '\0' {
                layout.add_key(key);
            }
        }
        Ok(layout)
    }

    /// Builds the extended label -> key table, modifiers included.
    pub fn build_extended_layout(&self, name: &str) -> FrResult<ExtendedKeyboardLayout> {
        let mut layout = ExtendedKeyboardLayout::new();
        for def in self.defs(name)? {
            layout.add_key(def.character.clone(), def.to_key()?);
        }
        Ok(layout)
    }
}

/// In-memory form of `keymap.json`: character -> label sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeymapFile {
    pub char_to_key_sequence: HashMap<String, Vec<String>>,
}

impl KeymapFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FrResult<Self> {
        let content = fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)?;
        debug!(entries = file.char_to_key_sequence.len(), "keymap loaded");
        Ok(file)
    }

    /// Entries whose key is not exactly one character are dropped; the
    /// resolver works per scalar character.
    pub fn build_table(&self) -> KeymapTable {
        let mut table = KeymapTable::new();
        for (s, labels) in &self.char_to_key_sequence {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                table.insert(c, labels.clone());
            }
        }
        table
    }
}

/// Scoring weights. Negative movements (SFB, ciseau, ...) subtract their
/// weight per occurrence; roulement and alternance add theirs. Defaults are
/// the reference tuning. All fields are optional in a weights JSON file and
/// every one can be overridden with a CLI flag.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    #[arg(long, default_value_t = 1.0)]
    pub weight_sfb: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_ciseau: f64,
    #[arg(long, default_value_t = 0.5)]
    pub weight_lsb: f64,
    #[arg(long, default_value_t = 2.0)]
    pub weight_roulement: f64,
    #[arg(long, default_value_t = 1.5)]
    pub weight_alternance: f64,
    #[arg(long, default_value_t = 1.2)]
    pub weight_redirection: f64,
    #[arg(long, default_value_t = 2.0)]
    pub weight_mauvaise_redirection: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_skipgram: f64,
    #[arg(long, default_value_t = 1.0)]
    pub weight_finger_distribution: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            weight_sfb: 1.0,
            weight_ciseau: 1.0,
            weight_lsb: 0.5,
            weight_roulement: 2.0,
            weight_alternance: 1.5,
            weight_redirection: 1.2,
            weight_mauvaise_redirection: 2.0,
            weight_skipgram: 1.0,
            weight_finger_distribution: 1.0,
        }
    }
}

impl WeightConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FrResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies only the weights the user passed explicitly on the command
    /// line on top of `self` (typically file-loaded values).
    pub fn merge_from_cli(&mut self, cli_weights: &WeightConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_sfb, "weight_sfb");
        update_if_present!(weight_ciseau, "weight_ciseau");
        update_if_present!(weight_lsb, "weight_lsb");
        update_if_present!(weight_roulement, "weight_roulement");
        update_if_present!(weight_alternance, "weight_alternance");
        update_if_present!(weight_redirection, "weight_redirection");
        update_if_present!(weight_mauvaise_redirection, "weight_mauvaise_redirection");
        update_if_present!(weight_skipgram, "weight_skipgram");
        update_if_present!(weight_finger_distribution, "weight_finger_distribution");
    }
}
