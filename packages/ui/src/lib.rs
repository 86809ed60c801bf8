//! Shared UI for the RecipeFeed client: screen state machines, the session
//! context, and presentational components used by the routed views.

pub mod components;
pub mod screens;

mod session;
pub use session::{
    use_api, use_edit_handoff, use_session, AppApi, AppSession, LogoutButton,
    PlatformStorage, SessionProvider,
};

pub use screens::{Destination, LoadState};
