//! Console shell for two-player tic-tac-toe.
//!
//! Collaborators around [`tictactoe_engine::GameEngine`]:
//!
//! - **Input**: [`InputProvider`] asks players for names, moves and
//!   replay answers ([`ConsoleInput`] reads lines from any `BufRead`)
//! - **Presenter**: [`Presenter`] draws boards and results
//!   ([`ConsolePresenter`] writes plain text)
//! - **Session**: [`Session`] runs rounds until the players stop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod input;
mod presenter;
mod session;

pub use config::{ConsoleConfig, Glyphs};
pub use error::{ConfigError, InputError, RejectedMove};
pub use input::{ConsoleInput, InputProvider, PlayerSlot, ReplayAnswer};
pub use presenter::{ConsolePresenter, Presenter};
pub use session::{Session, SessionSummary};
