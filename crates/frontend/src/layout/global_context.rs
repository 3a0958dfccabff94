use leptos::prelude::*;
use web_sys::window;

/// Страницы консоли
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Residents,
    Complaints,
    Settings,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Complaints, Page::Residents, Page::Settings];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Residents => "residents",
            Page::Complaints => "complaints",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Residents => "Residents",
            Page::Complaints => "Complaints",
            Page::Settings => "Settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Complaints),
        }
    }

    pub fn open(&self, page: Page) {
        self.active.set(page);
    }

    /// Активная страница живёт в `#hash`, чтобы переживать перезагрузку
    pub fn init_location_integration(&self) {
        let hash = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        if let Some(page) = Page::from_key(hash.trim_start_matches('#')) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active.get().key();
            if let Some(w) = window() {
                let current = w.location().hash().unwrap_or_default();
                if current.trim_start_matches('#') != key {
                    let _ = w.location().set_hash(key);
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
