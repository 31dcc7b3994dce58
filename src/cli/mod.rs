mod args;
mod config;

pub use args::{Args, Command, FetchArgs, InitArgs, QuestionsArgs, ServeArgs, ShowArgs};
pub use config::DashboardConfig;
