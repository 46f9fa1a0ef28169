// Composition root for the localtime service.
//
// - Read config from environment.
// - Wire the time handler into shared state.
// - Expose the HTTP router to the `localtime` binary (shell/main.rs).

pub mod config;
pub mod http;
pub mod state;
