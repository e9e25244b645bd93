use std::time::Duration;

use clap::Parser;
use todo_core::Locale;

/// Terminal front end for the todo records service.
#[derive(Debug, Parser)]
#[command(name = "todo-cli", version, about)]
pub struct Config {
    /// Base URL of the records service; `/todos` is appended.
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Language of user-facing messages (ru or en).
    #[arg(long, env = "TODO_LOCALE", default_value = "ru")]
    pub locale: Locale,

    /// Give up on a request after this many seconds. Unset waits indefinitely.
    #[arg(long, env = "TODO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
