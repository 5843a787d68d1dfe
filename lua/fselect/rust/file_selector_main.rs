use crate::config::SelectorConfig;
use crate::content_kind::{ContentKindClassifier, ExtensionClassifier};
use crate::error::Error;
use crate::events::{EventBus, HandlerId, SelectorEvent};
use crate::file_selector::{
    export_contents, DirectoryExpander, FileSystemStat, LocalFs, RecursiveFileLister,
    SelectionStore,
};
use crate::git::{GitRootResolver, ProjectRootResolver};
use crate::path_utils::{absolute_path, has_uri_scheme, normalize_path};
use crate::provider::{PickRequest, ProviderRegistry};
use crate::score::rank_candidates;
use crate::types::{EntryKind, FileContentRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// The external services a selector talks to.
pub struct Collaborators {
    pub root: Box<dyn ProjectRootResolver>,
    pub stat: Box<dyn FileSystemStat>,
    pub lister: Box<dyn RecursiveFileLister>,
    pub classifier: Box<dyn ContentKindClassifier>,
}

impl Collaborators {
    /// Git-aware root discovery, the local filesystem and extension-based classification.
    pub fn local(base_path: &Path) -> Self {
        Self {
            root: Box::new(GitRootResolver::discover(base_path)),
            stat: Box::new(LocalFs),
            lister: Box::new(LocalFs),
            classifier: Box::new(ExtensionClassifier),
        }
    }
}

pub struct FileSelector {
    config: SelectorConfig,
    selection: SelectionStore,
    events: EventBus,
    collaborators: Collaborators,
}

impl std::fmt::Debug for FileSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSelector")
            .field("project_root", &self.project_root())
            .field("selection", &self.selection)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl FileSelector {
    pub fn new(base_path: String, config: SelectorConfig) -> Result<Self, Error> {
        info!("Initializing FileSelector with base_path: {}", base_path);
        let path = match std::path::absolute(&base_path) {
            Ok(path) if path.is_dir() => path,
            _ => return Err(Error::InvalidPath(base_path)),
        };

        Ok(Self::with_collaborators(Collaborators::local(&path), config))
    }

    pub fn with_collaborators(collaborators: Collaborators, config: SelectorConfig) -> Self {
        Self {
            config,
            selection: SelectionStore::new(),
            events: EventBus::new(),
            collaborators,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn project_root(&self) -> PathBuf {
        self.collaborators.root.project_root()
    }

    /// Selects `path`. Directories are expanded into the files they contain; paths already
    /// selected, and empty paths, are ignored without notifying observers.
    pub fn add(&mut self, path: &str) -> Result<(), Error> {
        if path.is_empty() {
            return Ok(());
        }

        let project_root = self.project_root();
        let absolute = absolute_path(path, &project_root);

        match self.collaborators.stat.stat(&absolute) {
            Some(EntryKind::Directory) => self.add_directory(&absolute, &project_root),
            Some(EntryKind::RegularFile) | None => {
                let normalized = normalize_path(path, &project_root);
                if !self.selection.insert(normalized) {
                    return Ok(());
                }

                debug!("Selected {}", path);
                self.events.emit(SelectorEvent::Update)
            }
        }
    }

    fn add_directory(&mut self, directory: &Path, project_root: &Path) -> Result<(), Error> {
        let expander =
            DirectoryExpander::new(self.collaborators.lister.as_ref(), self.config.list_options());
        let inserted = expander.expand(directory, project_root, &mut self.selection);

        if inserted == 0 {
            return Ok(());
        }
        self.events.emit(SelectorEvent::Update)
    }

    /// Toggles the file behind an editor buffer: deselects it when already selected, selects
    /// it otherwise. Returns `false` for unnamed and scratch buffers, which are never added.
    pub fn add_from_editor_buffer(&mut self, path: &str) -> Result<bool, Error> {
        if path.is_empty() || self.is_scratch_buffer(path) {
            return Ok(false);
        }

        let normalized = normalize_path(path, &self.project_root());
        if self.selection.remove(&normalized) {
            debug!("Deselected {} from its buffer", normalized);
            self.events.emit(SelectorEvent::Update)?;
            return Ok(true);
        }

        self.add(&normalized)?;
        Ok(true)
    }

    pub fn is_scratch_buffer(&self, name: &str) -> bool {
        (!self.config.scratch_prefix.is_empty() && name.starts_with(&self.config.scratch_prefix))
            || has_uri_scheme(name)
    }

    /// Removes the entry at the 0-based `index`. Out of range is a no-op returning `false`.
    pub fn remove_at(&mut self, index: usize) -> Result<bool, Error> {
        let Some(removed) = self.selection.remove_at(index) else {
            return Ok(false);
        };

        debug!("Removed {} at index {}", removed, index);
        self.events.emit(SelectorEvent::Update)?;
        Ok(true)
    }

    /// Drops the selection together with every registered handler.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.events.clear();
    }

    /// A copy of the selection in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.selection.to_vec()
    }

    pub fn get_selected_filepaths(&self) -> Vec<String> {
        self.list()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn get_selected_files_contents(&self) -> Vec<FileContentRecord> {
        export_contents(
            self.selection.as_slice(),
            &self.project_root(),
            self.collaborators.classifier.as_ref(),
        )
    }

    pub fn on<F>(&mut self, event: SelectorEvent, handler: F) -> HandlerId
    where
        F: FnMut() -> Result<(), Error> + 'static,
    {
        self.events.on(event, handler)
    }

    pub fn off(&mut self, event: SelectorEvent, handler: Option<HandlerId>) -> bool {
        self.events.off(event, handler)
    }

    pub fn emit(&mut self, event: SelectorEvent) -> Result<(), Error> {
        self.events.emit(event)
    }

    /// Project files that are not selected yet, fuzzy ranked when `query` is given.
    pub fn unselected_candidates(&self, query: Option<&str>) -> Vec<String> {
        let project_root = self.project_root();
        let files = match self
            .collaborators
            .lister
            .list_files(&project_root, self.config.list_options())
        {
            Ok(files) => files,
            Err(e) => {
                warn!("Failed to list picker candidates: {}", e);
                return Vec::new();
            }
        };

        let candidates: Vec<String> = files
            .iter()
            .map(|file| normalize_path(&file.to_string_lossy(), &project_root))
            .filter(|path| !self.selection.contains(path))
            .collect();

        rank_candidates(
            candidates,
            query.unwrap_or_default(),
            self.config.max_results,
            self.config.max_threads,
        )
    }

    /// Resolves the named provider (the configured one when `None`) and prepares it with
    /// every unselected candidate. Show the request once the selector is no longer borrowed
    /// and pass the outcome to [`FileSelector::select_picked`].
    pub fn open_picker(
        &self,
        providers: &ProviderRegistry,
        provider_name: Option<&str>,
    ) -> Result<PickRequest, Error> {
        let name = provider_name.unwrap_or(&self.config.provider);
        let provider = providers.resolve(name).inspect_err(|e| error!("{}", e))?;

        Ok(PickRequest::new(provider, self.unselected_candidates(None)))
    }

    /// Applies a picker outcome: the chosen path is added, `None` means the user cancelled.
    pub fn select_picked(&mut self, choice: Option<String>) -> Result<(), Error> {
        match choice {
            Some(path) => self.add(&path),
            None => {
                debug!("Picker cancelled");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{replay, DeferredHandlers};
    use crate::provider::{PickCallback, PickerProvider, ProviderKind};
    use git2::Repository;
    use crate::types::ListOptions;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// In-memory tree rooted at `/proj`: paths ending in `/` are directories.
    #[derive(Clone)]
    struct FakeFs {
        entries: Rc<BTreeMap<PathBuf, EntryKind>>,
        fail_listing: bool,
    }

    impl FakeFs {
        fn new(paths: &[&str]) -> Self {
            let mut entries = BTreeMap::new();
            for path in paths {
                let kind = if path.ends_with('/') {
                    EntryKind::Directory
                } else {
                    EntryKind::RegularFile
                };
                entries.insert(PathBuf::from(path.trim_end_matches('/')), kind);
            }
            Self {
                entries: Rc::new(entries),
                fail_listing: false,
            }
        }
    }

    impl FileSystemStat for FakeFs {
        fn stat(&self, path: &Path) -> Option<EntryKind> {
            self.entries.get(path).copied()
        }
    }

    impl RecursiveFileLister for FakeFs {
        fn list_files(&self, root: &Path, _options: ListOptions) -> Result<Vec<PathBuf>, Error> {
            if self.fail_listing {
                return Err(Error::Lister {
                    root: root.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied).into(),
                });
            }
            Ok(self
                .entries
                .iter()
                .filter(|(path, kind)| **kind == EntryKind::RegularFile && path.starts_with(root))
                .map(|(path, _)| path.clone())
                .collect())
        }
    }

    fn selector_with(fs: FakeFs) -> FileSelector {
        let collaborators = Collaborators {
            root: Box::new(PathBuf::from("/proj")),
            stat: Box::new(fs.clone()),
            lister: Box::new(fs),
            classifier: Box::new(ExtensionClassifier),
        };
        FileSelector::with_collaborators(collaborators, SelectorConfig::default())
    }

    fn selector() -> FileSelector {
        selector_with(FakeFs::new(&[
            "/proj/",
            "/proj/a/",
            "/proj/a/b.txt",
            "/proj/src/",
            "/proj/src/main.rs",
            "/proj/src/lib.rs",
            "/proj/src/nested/",
            "/proj/src/nested/mod.rs",
            "/proj/README.md",
        ]))
    }

    fn count_updates(selector: &mut FileSelector) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        selector.on(SelectorEvent::Update, move || {
            counter.set(counter.get() + 1);
            Ok(())
        });
        count
    }

    #[test]
    fn test_add_twice_keeps_one_entry_and_notifies_once() {
        let mut selector = selector();
        let updates = count_updates(&mut selector);

        selector.add("a/b.txt").unwrap();
        selector.add("a/b.txt").unwrap();

        assert_eq!(selector.get_selected_filepaths(), vec!["a/b.txt"]);
        assert_eq!(updates.get(), 1);
    }

    #[test]
    fn test_relative_and_absolute_spellings_are_one_entry() {
        let mut selector = selector();
        selector.add("a/b.txt").unwrap();
        selector.add("/proj/a/b.txt").unwrap();
        selector.add("./a//b.txt").unwrap();

        assert_eq!(selector.get_selected_filepaths(), vec!["a/b.txt"]);
    }

    #[test]
    fn test_empty_path_is_ignored() {
        let mut selector = selector();
        let updates = count_updates(&mut selector);

        selector.add("").unwrap();
        assert!(selector.get_selected_filepaths().is_empty());
        assert_eq!(updates.get(), 0);
    }

    #[test]
    fn test_missing_files_are_still_selected() {
        let mut selector = selector();
        selector.add("not/yet/created.rs").unwrap();
        assert_eq!(selector.get_selected_filepaths(), vec!["not/yet/created.rs"]);
    }

    #[test]
    fn test_directory_expansion_is_one_batch() {
        let mut selector = selector();
        selector.add("src/lib.rs").unwrap();
        let updates = count_updates(&mut selector);

        selector.add("src").unwrap();

        assert_eq!(updates.get(), 1);
        assert_eq!(
            selector.get_selected_filepaths(),
            vec!["src/lib.rs", "src/main.rs", "src/nested/mod.rs"]
        );

        // nothing new to insert, nothing to announce
        selector.add("/proj/src/").unwrap();
        assert_eq!(updates.get(), 1);
        assert_eq!(selector.selected_count(), 3);
    }

    #[test]
    fn test_directory_is_never_stored() {
        let mut selector = selector();
        selector.add("a").unwrap();
        assert_eq!(selector.get_selected_filepaths(), vec!["a/b.txt"]);
    }

    #[test]
    fn test_lister_failure_is_absorbed() {
        let mut fs = FakeFs::new(&["/proj/", "/proj/locked/", "/proj/locked/x.rs", "/proj/ok.rs"]);
        fs.fail_listing = true;
        let mut selector = selector_with(fs);
        selector.add("ok.rs").unwrap();
        let updates = count_updates(&mut selector);

        assert!(selector.add("locked").is_ok());
        assert_eq!(selector.get_selected_filepaths(), vec!["ok.rs"]);
        assert_eq!(updates.get(), 0);
        assert!(selector.unselected_candidates(None).is_empty());
    }

    #[test]
    fn test_buffer_toggle() {
        let mut selector = selector();
        let updates = count_updates(&mut selector);

        assert!(selector.add_from_editor_buffer("/proj/src/main.rs").unwrap());
        assert_eq!(selector.get_selected_filepaths(), vec!["src/main.rs"]);

        assert!(selector.add_from_editor_buffer("/proj/src/main.rs").unwrap());
        assert!(selector.get_selected_filepaths().is_empty());
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn test_buffer_toggle_rejects_unnamed_and_scratch_buffers() {
        let mut selector = selector();
        selector.add("README.md").unwrap();
        let updates = count_updates(&mut selector);

        assert!(!selector.add_from_editor_buffer("").unwrap());
        assert!(!selector.add_from_editor_buffer("fselect://selected-files").unwrap());
        assert!(!selector.add_from_editor_buffer("term://~//42:/bin/sh").unwrap());

        assert_eq!(selector.get_selected_filepaths(), vec!["README.md"]);
        assert_eq!(updates.get(), 0);
    }

    #[test]
    fn test_add_does_not_toggle() {
        let mut selector = selector();
        selector.add_from_editor_buffer("README.md").unwrap();
        selector.add("README.md").unwrap();
        assert_eq!(selector.get_selected_filepaths(), vec!["README.md"]);
    }

    #[test]
    fn test_remove_at() {
        let mut selector = selector();
        for path in ["README.md", "a/b.txt", "src/main.rs"] {
            selector.add(path).unwrap();
        }
        let updates = count_updates(&mut selector);

        assert!(!selector.remove_at(3).unwrap());
        assert_eq!(updates.get(), 0);

        assert!(selector.remove_at(1).unwrap());
        assert_eq!(selector.get_selected_filepaths(), vec!["README.md", "src/main.rs"]);
        assert_eq!(updates.get(), 1);
    }

    #[test]
    fn test_reset_clears_selection_and_observers() {
        let mut selector = selector();
        let updates = count_updates(&mut selector);
        selector.add("README.md").unwrap();
        assert_eq!(updates.get(), 1);

        selector.reset();
        assert!(selector.get_selected_filepaths().is_empty());

        selector.add("README.md").unwrap();
        assert_eq!(updates.get(), 1);
        assert_eq!(selector.get_selected_filepaths(), vec!["README.md"]);
    }

    #[test]
    fn test_handler_error_reaches_caller_after_mutation() {
        let mut selector = selector();
        selector.on(SelectorEvent::Update, || Err(Error::Handler("observer broke".to_string())));

        let err = selector.add("README.md").unwrap_err();
        assert!(matches!(err, Error::Handler(_)));
        assert_eq!(selector.get_selected_filepaths(), vec!["README.md"]);
    }

    #[test]
    fn test_off_stops_notifications() {
        let mut selector = selector();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let id = selector.on(SelectorEvent::Update, move || {
            counter.set(counter.get() + 1);
            Ok(())
        });

        assert!(selector.off(SelectorEvent::Update, Some(id)));
        selector.add("README.md").unwrap();
        selector.emit(SelectorEvent::Update).unwrap();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_unselected_candidates_exclude_selection() {
        let mut selector = selector();
        selector.add("src").unwrap();

        assert_eq!(selector.unselected_candidates(None), vec!["README.md", "a/b.txt"]);
    }

    /// Keeps the callback around like an asynchronous UI would, until the test chooses.
    struct DeferredPicker {
        kind: ProviderKind,
        shown: RefCell<Vec<String>>,
        on_choice: RefCell<Option<PickCallback>>,
    }

    impl DeferredPicker {
        fn new(kind: ProviderKind) -> Rc<Self> {
            Rc::new(Self {
                kind,
                shown: RefCell::new(Vec::new()),
                on_choice: RefCell::new(None),
            })
        }

        fn choose(&self, choice: Option<&str>) -> Result<(), Error> {
            let on_choice = self.on_choice.borrow_mut().take().expect("picker is not open");
            on_choice(choice.map(String::from))
        }
    }

    impl PickerProvider for DeferredPicker {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn pick(&self, candidates: Vec<String>, on_choice: PickCallback) -> Result<(), Error> {
            *self.shown.borrow_mut() = candidates;
            *self.on_choice.borrow_mut() = Some(on_choice);
            Ok(())
        }
    }

    fn registry_with(picker: &Rc<DeferredPicker>) -> ProviderRegistry {
        let mut registry = ProviderRegistry::new();
        registry.register(picker.clone());
        registry
    }

    /// What the Lua binding does: build the request under a short borrow, show it after.
    fn open(
        selector: &Rc<RefCell<FileSelector>>,
        registry: &ProviderRegistry,
        name: Option<&str>,
    ) -> Result<(), Error> {
        let request = selector.borrow().open_picker(registry, name)?;
        let target = Rc::clone(selector);
        request.show(move |choice| target.borrow_mut().select_picked(choice))
    }

    #[test]
    fn test_open_picker_adds_choice() {
        let selector = Rc::new(RefCell::new(selector()));
        selector.borrow_mut().add("README.md").unwrap();
        let picker = DeferredPicker::new(ProviderKind::Native);
        let registry = registry_with(&picker);

        open(&selector, &registry, None).unwrap();
        assert_eq!(
            *picker.shown.borrow(),
            vec!["a/b.txt", "src/lib.rs", "src/main.rs", "src/nested/mod.rs"]
        );

        // the picker is still open; the selector stays usable meanwhile
        selector.borrow_mut().add("a/b.txt").unwrap();
        picker.choose(Some("src")).unwrap();

        assert_eq!(
            selector.borrow().get_selected_filepaths(),
            vec!["README.md", "a/b.txt", "src/lib.rs", "src/main.rs", "src/nested/mod.rs"]
        );
    }

    #[test]
    fn test_open_picker_cancel_is_noop() {
        let mut inner = selector();
        let updates = count_updates(&mut inner);
        let selector = Rc::new(RefCell::new(inner));
        let picker = DeferredPicker::new(ProviderKind::Native);
        let registry = registry_with(&picker);

        open(&selector, &registry, Some("native")).unwrap();
        picker.choose(None).unwrap();

        assert!(selector.borrow().get_selected_filepaths().is_empty());
        assert_eq!(updates.get(), 0);
    }

    #[test]
    fn test_open_picker_provider_errors_leave_selection() {
        let mut selector = selector();
        selector.add("README.md").unwrap();
        let picker = DeferredPicker::new(ProviderKind::Native);
        let registry = registry_with(&picker);

        assert!(matches!(
            selector.open_picker(&registry, Some("telescope")),
            Err(Error::MissingProvider(ProviderKind::Telescope))
        ));
        assert!(matches!(
            selector.open_picker(&registry, Some("ranger")),
            Err(Error::UnknownProvider(_))
        ));
        assert_eq!(selector.get_selected_filepaths(), vec!["README.md"]);
        assert!(picker.shown.borrow().is_empty());
    }

    #[test]
    fn test_open_picker_shows_every_unselected_candidate() {
        let files: Vec<String> = (0..150).map(|i| format!("/proj/src/file_{i:03}.rs")).collect();
        let mut paths: Vec<&str> = vec!["/proj/", "/proj/src/"];
        paths.extend(files.iter().map(String::as_str));
        let selector = selector_with(FakeFs::new(&paths));
        assert!(selector.config().max_results < files.len());

        let picker = DeferredPicker::new(ProviderKind::Native);
        let request = selector.open_picker(&registry_with(&picker), None).unwrap();
        assert_eq!(request.candidates().len(), 150);

        request.show(|_| Ok(())).unwrap();
        assert_eq!(picker.shown.borrow().len(), 150);
        assert_eq!(picker.shown.borrow().last().map(String::as_str), Some("src/file_149.rs"));
    }

    #[test]
    fn test_deferred_handlers_read_selection_after_release() {
        let handlers = DeferredHandlers::new();
        let selector = Rc::new(RefCell::new(selector()));
        selector
            .borrow_mut()
            .on(SelectorEvent::Update, handlers.recorder("first"));
        selector
            .borrow_mut()
            .on(SelectorEvent::Update, handlers.recorder("second"));

        selector.borrow_mut().add("src").unwrap();
        selector.borrow_mut().add("README.md").unwrap();

        let seen = RefCell::new(Vec::new());
        replay(handlers.take(), |name| {
            let count = selector.borrow().selected_count();
            seen.borrow_mut().push((name, count));
            Ok::<_, Error>(())
        })
        .unwrap();

        assert_eq!(
            seen.into_inner(),
            vec![("first", 4), ("second", 4), ("first", 4), ("second", 4)]
        );
        assert!(handlers.is_empty());
    }

    #[test]
    fn test_new_rejects_missing_base_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing").to_string_lossy().into_owned();

        assert!(matches!(
            FileSelector::new(missing, SelectorConfig::default()),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_relative_base_path_is_made_absolute() {
        let tmp = tempfile::tempdir_in(".").unwrap();
        Repository::init(tmp.path()).unwrap();
        std::fs::write(tmp.path().join("a.rs"), "").unwrap();
        let base = tmp.path().to_string_lossy().into_owned();
        assert!(Path::new(&base).is_relative());

        let mut selector = FileSelector::new(base, SelectorConfig::default()).unwrap();
        let root = selector.project_root();
        assert!(root.is_absolute());

        let from_cwd = std::env::current_dir().unwrap().join(tmp.path()).join("a.rs");
        selector.add("a.rs").unwrap();
        selector.add(&from_cwd.to_string_lossy()).unwrap();
        selector.add(&root.join("a.rs").to_string_lossy()).unwrap();

        assert_eq!(selector.get_selected_filepaths(), vec!["a.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_project_keeps_one_key_per_file() {
        let tmp = tempfile::tempdir().unwrap();
        let real = tmp.path().join("real");
        std::fs::create_dir_all(&real).unwrap();
        Repository::init(&real).unwrap();
        std::fs::write(real.join("a.rs"), "fn a() {}").unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut selector =
            FileSelector::new(link.to_string_lossy().into_owned(), SelectorConfig::default())
                .unwrap();
        selector.add("a.rs").unwrap();
        selector.add(&real.join("a.rs").to_string_lossy()).unwrap();
        assert_eq!(selector.get_selected_filepaths(), vec!["a.rs"]);

        let buffer_name = link.join("a.rs").to_string_lossy().into_owned();
        assert!(selector.add_from_editor_buffer(&buffer_name).unwrap());
        assert!(selector.get_selected_filepaths().is_empty());

        assert!(selector.add_from_editor_buffer(&buffer_name).unwrap());
        assert_eq!(selector.get_selected_filepaths(), vec!["a.rs"]);
    }

    #[test]
    fn test_local_selector_exports_contents() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("src")).unwrap();
        std::fs::write(tmp.path().join("src/main.rs"), "fn main() {}").unwrap();
        std::fs::write(tmp.path().join("src/util.lua"), "return {}").unwrap();
        std::fs::write(tmp.path().join("notes.md"), "# notes").unwrap();

        let collaborators = Collaborators {
            root: Box::new(tmp.path().to_path_buf()),
            stat: Box::new(LocalFs),
            lister: Box::new(LocalFs),
            classifier: Box::new(ExtensionClassifier),
        };
        let mut selector = FileSelector::with_collaborators(collaborators, SelectorConfig::default());

        selector.add("notes.md").unwrap();
        selector.add("src").unwrap();
        selector.add("deleted.txt").unwrap();

        assert_eq!(
            selector.get_selected_filepaths(),
            vec!["notes.md", "src/main.rs", "src/util.lua", "deleted.txt"]
        );

        let records = selector.get_selected_files_contents();
        let summary: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.path.as_str(), r.kind.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("notes.md", "markdown"),
                ("src/main.rs", "rust"),
                ("src/util.lua", "lua"),
            ]
        );
    }
}
