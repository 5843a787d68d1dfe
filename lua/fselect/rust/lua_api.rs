use crate::error::Error;
use crate::events::{replay, DeferredHandlers, HandlerId, SelectorEvent};
use crate::file_selector_main::FileSelector;
use crate::provider::{PickCallback, PickerProvider, ProviderKind, ProviderRegistry};
use mlua::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// A picker implemented in Lua, called as `picker(candidates, on_choice)`. It may call
/// `on_choice(path)` or `on_choice(nil)` right away or later from a UI callback.
struct LuaPickerProvider {
    kind: ProviderKind,
    picker: LuaFunction,
    lua: Lua,
}

impl PickerProvider for LuaPickerProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn pick(&self, candidates: Vec<String>, on_choice: PickCallback) -> Result<(), Error> {
        let on_choice = RefCell::new(Some(on_choice));
        let callback = self
            .lua
            .create_function(move |_, choice: Option<String>| {
                // only the first report counts
                let pending = on_choice.borrow_mut().take();
                match pending {
                    Some(report) => Ok(report(choice)?),
                    None => Ok(()),
                }
            })
            .map_err(|e| Error::Provider(e.to_string()))?;

        self.picker
            .call::<()>((candidates, callback))
            .map_err(|e| Error::Provider(e.to_string()))
    }
}

/// Userdata handed to Lua. Lua handlers are queued while the selector is borrowed and
/// run once the borrow is released, so they can read the selection back.
pub struct LuaFileSelector {
    selector: FileSelector,
    providers: ProviderRegistry,
    pending: DeferredHandlers<LuaFunction>,
}

impl LuaFileSelector {
    pub fn new(selector: FileSelector) -> Self {
        Self {
            selector,
            providers: ProviderRegistry::new(),
            pending: DeferredHandlers::new(),
        }
    }
}

fn with_selector<R>(
    ud: &LuaAnyUserData,
    f: impl FnOnce(&mut LuaFileSelector) -> Result<R, Error>,
) -> LuaResult<R> {
    let (result, queued) = {
        let mut this = ud.borrow_mut::<LuaFileSelector>()?;
        let result = f(&mut *this);
        let queued = this.pending.take();
        (result, queued)
    };

    replay(queued, |handler: LuaFunction| handler.call::<()>(()))?;
    Ok(result?)
}

impl LuaUserData for LuaFileSelector {
    fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
        methods.add_function("add", |_, (ud, path): (LuaAnyUserData, Option<String>)| {
            with_selector(&ud, |this| this.selector.add(path.as_deref().unwrap_or_default()))
        });

        methods.add_function(
            "add_from_editor_buffer",
            |_, (ud, path): (LuaAnyUserData, Option<String>)| {
                with_selector(&ud, |this| {
                    this.selector
                        .add_from_editor_buffer(path.as_deref().unwrap_or_default())
                })
            },
        );

        // 1-based, like every other Lua list index
        methods.add_function("remove_at", |_, (ud, index): (LuaAnyUserData, i64)| {
            with_selector(&ud, |this| match usize::try_from(index) {
                Ok(index) if index >= 1 => this.selector.remove_at(index - 1),
                _ => Ok(false),
            })
        });

        methods.add_method_mut("reset", |_, this, ()| {
            this.selector.reset();
            this.pending.clear();
            Ok(())
        });

        methods.add_method("get_selected_filepaths", |_, this, ()| {
            Ok(this.selector.get_selected_filepaths())
        });

        methods.add_method("get_selected_files_contents", |_, this, ()| {
            Ok(this.selector.get_selected_files_contents())
        });

        methods.add_method("project_root", |_, this, ()| {
            Ok(this.selector.project_root().to_string_lossy().into_owned())
        });

        methods.add_method("unselected_candidates", |_, this, query: Option<String>| {
            Ok(this.selector.unselected_candidates(query.as_deref()))
        });

        // Unknown event names are accepted and simply never fire.
        methods.add_method_mut("on", |_, this, (name, handler): (String, LuaFunction)| {
            let Some(event) = SelectorEvent::from_name(&name) else {
                debug!("Ignoring handler for unknown event '{}'", name);
                return Ok(None);
            };

            let id = this.selector.on(event, this.pending.recorder(handler));
            Ok(Some(id.as_u64()))
        });

        methods.add_method_mut("off", |_, this, (name, id): (String, Option<u64>)| {
            let Some(event) = SelectorEvent::from_name(&name) else {
                return Ok(false);
            };
            Ok(this.selector.off(event, id.map(HandlerId::from_u64)))
        });

        methods.add_function("emit", |_, (ud, name): (LuaAnyUserData, String)| {
            with_selector(&ud, |this| match SelectorEvent::from_name(&name) {
                Some(event) => this.selector.emit(event),
                None => Ok(()),
            })
        });

        methods.add_method_mut(
            "register_provider",
            |lua, this, (name, picker): (String, LuaFunction)| {
                let kind: ProviderKind = name.parse()?;
                this.providers.register(Rc::new(LuaPickerProvider {
                    kind,
                    picker,
                    lua: lua.clone(),
                }));
                Ok(())
            },
        );

        // The picker is shown after the borrow ends so its callback can re-enter the selector.
        methods.add_function(
            "open_picker",
            |_, (ud, name): (LuaAnyUserData, Option<String>)| {
                let this = ud.borrow::<LuaFileSelector>()?;
                let request = this.selector.open_picker(&this.providers, name.as_deref())?;
                drop(this);

                request.show(move |choice| {
                    with_selector(&ud, |this| this.selector.select_picked(choice))
                        .map_err(|e| Error::Handler(e.to_string()))
                })?;
                Ok(())
            },
        );
    }
}
