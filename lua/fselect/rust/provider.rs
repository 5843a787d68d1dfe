use crate::error::Error;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Native,
    Fzf,
    Telescope,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Fzf => "fzf",
            Self::Telescope => "telescope",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "fzf" | "fzf-lua" | "fzf_lua" => Ok(Self::Fzf),
            "telescope" => Ok(Self::Telescope),
            _ => Err(Error::UnknownProvider(name.to_string())),
        }
    }
}

/// Receives the outcome of a pick: the chosen path, or `None` when the user cancelled.
pub type PickCallback = Box<dyn FnOnce(Option<String>) -> Result<(), Error>>;

/// A picker UI backend. It is shown the candidates that are not selected yet and reports the
/// outcome through `on_choice`, either before `pick` returns or later from the editor's event
/// loop. `on_choice` runs at most once.
pub trait PickerProvider {
    fn kind(&self) -> ProviderKind;

    fn is_available(&self) -> bool {
        true
    }

    fn pick(&self, candidates: Vec<String>, on_choice: PickCallback) -> Result<(), Error>;
}

#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Rc<dyn PickerProvider>>,
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("kinds", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` under its kind, returning the provider it replaced.
    pub fn register(&mut self, provider: Rc<dyn PickerProvider>) -> Option<Rc<dyn PickerProvider>> {
        self.providers.insert(provider.kind(), provider)
    }

    pub fn get(&self, kind: ProviderKind) -> Result<Rc<dyn PickerProvider>, Error> {
        match self.providers.get(&kind) {
            Some(provider) if provider.is_available() => Ok(Rc::clone(provider)),
            _ => Err(Error::MissingProvider(kind)),
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Rc<dyn PickerProvider>, Error> {
        self.get(name.parse()?)
    }
}

/// A resolved provider and the candidates it is about to show. It borrows nothing from the
/// selector that built it, so it can be shown after that borrow has ended.
pub struct PickRequest {
    provider: Rc<dyn PickerProvider>,
    candidates: Vec<String>,
}

impl fmt::Debug for PickRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickRequest")
            .field("kind", &self.provider.kind())
            .field("candidates", &self.candidates.len())
            .finish()
    }
}

impl PickRequest {
    pub fn new(provider: Rc<dyn PickerProvider>, candidates: Vec<String>) -> Self {
        Self {
            provider,
            candidates,
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn show<F>(self, on_choice: F) -> Result<(), Error>
    where
        F: FnOnce(Option<String>) -> Result<(), Error> + 'static,
    {
        self.provider.pick(self.candidates, Box::new(on_choice))
    }
}
