use crate::types::ListOptions;
use mlua::prelude::*;
use mlua::FromLua;

pub const DEFAULT_SCRATCH_PREFIX: &str = "fselect://";

/// Options accepted by `require("fselect_nvim").new(base_path, opts)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Picker used by `open_picker` when no provider name is given.
    pub provider: String,
    pub respect_ignore_rules: bool,
    pub include_hidden: bool,
    /// Buffer names starting with this prefix belong to the plugin's own UI.
    pub scratch_prefix: String,
    pub max_threads: usize,
    pub max_results: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            provider: "native".to_string(),
            respect_ignore_rules: true,
            include_hidden: false,
            scratch_prefix: DEFAULT_SCRATCH_PREFIX.to_string(),
            max_threads: 4,
            max_results: 100,
        }
    }
}

impl SelectorConfig {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            respect_ignore_rules: self.respect_ignore_rules,
            include_hidden: self.include_hidden,
            include_directories: false,
        }
    }
}

impl FromLua for SelectorConfig {
    fn from_lua(value: LuaValue, _lua: &Lua) -> LuaResult<Self> {
        let mut config = Self::default();

        let table = match value {
            LuaValue::Nil => return Ok(config),
            LuaValue::Table(table) => table,
            other => {
                return Err(LuaError::RuntimeError(format!(
                    "fselect options must be a table, got {}",
                    other.type_name()
                )))
            }
        };

        if let Some(provider) = table.get::<Option<String>>("provider")? {
            config.provider = provider;
        }
        if let Some(respect) = table.get::<Option<bool>>("respect_ignore_rules")? {
            config.respect_ignore_rules = respect;
        }
        if let Some(hidden) = table.get::<Option<bool>>("include_hidden")? {
            config.include_hidden = hidden;
        }
        if let Some(prefix) = table.get::<Option<String>>("scratch_prefix")? {
            config.scratch_prefix = prefix;
        }
        if let Some(threads) = table.get::<Option<usize>>("max_threads")? {
            config.max_threads = threads.max(1);
        }
        if let Some(results) = table.get::<Option<usize>>("max_results")? {
            config.max_results = results;
        }

        Ok(config)
    }
}
