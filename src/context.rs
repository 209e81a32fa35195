//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use docutrack_core::{Actions, HttpContractApi};
use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore, UiSink};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    api: StoredValue<HttpContractApi, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpContractApi) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    /// Everything one dispatcher call needs; `None` while logged out
    pub fn dispatch(&self) -> Option<Dispatch> {
        let user_id = self.store.user().get_untracked()?.id;
        Some(Dispatch {
            api: self.api.get_value(),
            sink: UiSink::new(self.store),
            user_id,
        })
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Owned API client, sink and user for the lifetime of one async task
pub struct Dispatch {
    api: HttpContractApi,
    sink: UiSink,
    user_id: String,
}

impl Dispatch {
    pub fn actions(&self) -> Actions<'_, HttpContractApi, UiSink> {
        Actions::new(&self.api, &self.sink, &self.user_id)
    }
}
