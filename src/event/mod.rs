// Notification interface between the rules engine and whatever presents it
//
// The engine only ever talks to the outside world through `GameObserver`.

// Public API - what other modules can use
pub use events::{EventLog, GameEvent};
pub use handler::{GameObserver, NoOpObserver};

// Internal modules
mod events;
mod handler;
