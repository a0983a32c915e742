pub mod eval;
pub mod run;
pub mod show;

pub use eval::handle_eval;
pub use run::handle_run;
pub use show::{handle_show, ShowFormat};
