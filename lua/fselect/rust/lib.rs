use mlua::prelude::*;
use std::path::{Path, PathBuf};

pub mod config;
pub mod content_kind;
pub mod error;
pub mod events;
pub mod file_selector;
pub mod file_selector_main;
pub mod git;
pub mod log;
pub mod lua_api;
pub mod path_utils;
pub mod provider;
pub mod score;
pub mod types;

use config::SelectorConfig;
use file_selector_main::FileSelector;
use lua_api::LuaFileSelector;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub fn new_selector(
    lua: &Lua,
    (base_path, config): (String, SelectorConfig),
) -> LuaResult<LuaAnyUserData> {
    let selector = FileSelector::new(base_path, config)?;
    lua.create_userdata(LuaFileSelector::new(selector))
}

pub fn init_tracing(
    _: &Lua,
    (log_file_path, log_level): (String, Option<String>),
) -> LuaResult<bool> {
    log::init_tracing(Path::new(&log_file_path), log_level.as_deref())?;
    Ok(true)
}

pub fn normalize_path(_: &Lua, (path, project_root): (String, String)) -> LuaResult<String> {
    Ok(path_utils::normalize_path(&path, &PathBuf::from(project_root)))
}

#[mlua::lua_module]
fn fselect_nvim(lua: &Lua) -> LuaResult<LuaTable> {
    let exports = lua.create_table()?;
    exports.set("new", lua.create_function(new_selector)?)?;
    exports.set("init_tracing", lua.create_function(init_tracing)?)?;
    exports.set("normalize_path", lua.create_function(normalize_path)?)?;
    Ok(exports)
}
