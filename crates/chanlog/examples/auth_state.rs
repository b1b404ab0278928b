//! Channel logging for an authentication flow.
//!
//! Run with `CHANLOG_COLOR=terminal` for styled output, or
//! `CHANLOG_COLOR=chrome` to see the `%c` format and CSS arguments.

use chanlog::{
    ChannelConfig, ChannelIds, ChanlogResult, ConsoleConfig, Logger, LoggerOptions, Style,
};
use serde_json::json;

fn main() -> ChanlogResult<()> {
    let ids = ChannelIds::group()
        .with("DEFAULT", "default")
        .with("auth", ChannelIds::group().with("STATE", "auth/state"));

    let options = LoggerOptions::new()
        .with_console_config(&ConsoleConfig::from_env())
        .with_channel_ids(ids)
        .with_channel("default", ChannelConfig::new())
        .with_channel(
            "auth/state",
            ChannelConfig::styled(Style::new().color("#009aff")),
        );
    let logger = Logger::new(options);

    let state = logger.channel("auth/state");
    let set = state.clone().with_path(["set"]);
    set.error("something went wrong while setting the auth state")?;
    set.success("user is now authenticated")?;
    state.clone().with_path(["user"]).log(json!({
        "user": {
            "email": "pete@example.com",
            "givenName": "Pete",
        }
    }))?;
    state
        .clone()
        .with_path(["session"])
        .info("signed in on another device!")?;

    logger.mute("auth/state");
    state.log("muted, never printed")?;

    logger.channel("default").log(["done", "bye"])?;
    Ok(())
}
