//! Desktop window for recording and evaluating interview answers.

mod app;
mod worker;

pub use app::run;
