//! Application Context
//!
//! Shared objects provided via the Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::browser::{self, BrowserTheme};
use crate::route::Route;
use crate::state::theme::{Theme, ThemeStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
    /// Collaborator client
    client: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), client: ApiClient) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            client: StoredValue::new(client),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    /// Switch views and mirror the route into the location hash
    pub fn navigate(&self, route: Route) {
        browser::set_hash(&route.to_hash());
        self.set_route.set(route);
    }

    /// Sync from `location.hash` after a `hashchange`
    pub fn sync_from_hash(&self) {
        let route = Route::from_hash(&browser::current_hash());
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

/// Theme preference provider. Every change goes through [`ThemeContext::set_theme`].
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<ThemeStore<BrowserTheme>>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self { store: RwSignal::new(ThemeStore::new(BrowserTheme)) }
    }

    /// `None` before first mount
    pub fn theme(&self) -> Option<Theme> {
        self.store.with(|s| s.theme())
    }

    pub fn initialize(&self) {
        self.store.update(|s| {
            s.initialize();
        });
    }

    pub fn toggle(&self) {
        self.store.update(|s| s.toggle());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
