//! Best score persistence
//!
//! A single integer survives between runs, stored in LocalStorage on the
//! web. Every access may fail; callers degrade instead of crashing.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};

/// Durable storage for the best score
pub trait ScoreStore {
    /// Stored best, `None` when nothing has been written yet
    fn read_best(&self) -> Result<Option<u32>>;
    fn write_best(&mut self, best: u32) -> Result<()>;
}

impl<S: ScoreStore> ScoreStore for Rc<RefCell<S>> {
    fn read_best(&self) -> Result<Option<u32>> {
        self.borrow().read_best()
    }

    fn write_best(&mut self, best: u32) -> Result<()> {
        self.borrow_mut().write_best(best)
    }
}

/// Read the stored best, fold in `current` and write the maximum back
pub fn sync_best(store: &mut dyn ScoreStore, current: u32) -> Result<u32> {
    let stored = store.read_best()?.unwrap_or(0);
    let best = current.max(stored);
    store.write_best(best)?;
    Ok(best)
}

/// Strict decimal parse; trailing junk like `"12abc"` is an error rather
/// than a leading-digits read
fn parse_best(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .with_context(|| format!("stored best score {raw:?} is not a number"))
}

/// In-memory store for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Simulate unavailable storage
    pub unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            value: Some(best.to_string()),
            unavailable: false,
        }
    }

    /// Store whose every access fails
    pub fn unavailable() -> Self {
        Self {
            value: None,
            unavailable: true,
        }
    }

    /// Raw stored value (tests use this to plant corrupt data)
    pub fn set_raw(&mut self, raw: &str) {
        self.value = Some(raw.to_string());
    }
}

impl ScoreStore for MemoryStore {
    fn read_best(&self) -> Result<Option<u32>> {
        if self.unavailable {
            return Err(anyhow!("storage unavailable"));
        }
        self.value.as_deref().map(parse_best).transpose()
    }

    fn write_best(&mut self, best: u32) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("storage unavailable"));
        }
        self.value = Some(best.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::{Result, anyhow};

    use super::{ScoreStore, parse_best};

    /// Best score in `window.localStorage`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        /// LocalStorage key
        const STORAGE_KEY: &'static str = "best";

        fn storage() -> Result<web_sys::Storage> {
            web_sys::window()
                .ok_or_else(|| anyhow!("no window"))?
                .local_storage()
                .map_err(|e| anyhow!("localStorage access denied: {:?}", e))?
                .ok_or_else(|| anyhow!("localStorage unavailable"))
        }
    }

    impl ScoreStore for LocalStorageStore {
        fn read_best(&self) -> Result<Option<u32>> {
            let raw = Self::storage()?
                .get_item(Self::STORAGE_KEY)
                .map_err(|e| anyhow!("localStorage read failed: {:?}", e))?;
            raw.as_deref().map(parse_best).transpose()
        }

        fn write_best(&mut self, best: u32) -> Result<()> {
            Self::storage()?
                .set_item(Self::STORAGE_KEY, &best.to_string())
                .map_err(|e| anyhow!("localStorage write failed: {:?}", e))
        }
    }
}
