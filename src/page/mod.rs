//! What a form handler may do to the page it runs on: write to local
//! storage, show an alert, change location.

pub mod storage;

pub use self::storage::{FileStorage, MemoryStorage, Storage};

/// Surfaces a message to the user before anything else happens.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Moves the user to another page.
pub trait Navigator {
    fn navigate(&mut self, location: &str);
}

/// Keeps every alert, oldest first.
impl Notifier for Vec<String> {
    fn alert(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Keeps every visited location, oldest first.
impl Navigator for Vec<String> {
    fn navigate(&mut self, location: &str) {
        self.push(location.to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&mut self, message: &str) {
        println!("{message}");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, location: &str) {
        log::info!("navigating to {location}");
        println!("→ {location}");
    }
}

/// The capabilities a submission handler is given.
#[derive(Debug, Default)]
pub struct Page<S, N, V> {
    pub storage: S,
    pub notifier: N,
    pub navigator: V,
}

impl<S, N, V> Page<S, N, V>
where
    S: Storage,
    N: Notifier,
    V: Navigator,
{
    pub fn new(storage: S, notifier: N, navigator: V) -> Self {
        Self {
            storage,
            notifier,
            navigator,
        }
    }
}

/// A page that records everything in memory.
pub type RecordingPage = Page<MemoryStorage, Vec<String>, Vec<String>>;
