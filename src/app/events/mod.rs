//! Eingaben des Hosts (`AppIntent`) und daraus abgeleitete Zustandsänderungen
//! (`AppCommand`).

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
