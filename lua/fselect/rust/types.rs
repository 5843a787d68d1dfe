use mlua::prelude::*;

/// Result of a stat call: the selector only distinguishes files from directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile,
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub respect_ignore_rules: bool,
    pub include_hidden: bool,
    pub include_directories: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            respect_ignore_rules: true,
            include_hidden: false,
            include_directories: false,
        }
    }
}

pub const UNKNOWN_CONTENT_KIND: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContentRecord {
    pub path: String,
    pub content: Vec<u8>,
    pub kind: String,
}

impl IntoLua for FileContentRecord {
    fn into_lua(self, lua: &Lua) -> LuaResult<LuaValue> {
        let table = lua.create_table()?;
        table.set("path", self.path)?;
        table.set("content", lua.create_string(&self.content)?)?;
        table.set("filetype", self.kind)?;
        Ok(LuaValue::Table(table))
    }
}
