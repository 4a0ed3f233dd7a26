//! Replays a canned frame sequence through the full poll loop and logs every
//! edge. No hardware required: `cargo run --example scripted --no-default-features`.

use buttonup::backends::scripted::ScriptedSource;
use buttonup::{ButtonMap, Error, PollConfig, Poller};

fn main() {
    let mut source = ScriptedSource::new("scripted:0", "Scripted RS24");
    for state in [0x00, 0x02, 0x00, 0x06, 0x04, 0x00] {
        source.feed_state(state);
    }

    let mut poller = Poller::new(source, ButtonMap::rs24_default(), PollConfig::default());
    poller.register_logger();

    match poller.start() {
        Err(Error::SourceExhausted) => println!("script finished"),
        Err(e) => eprintln!("poll loop ended: {e}"),
        Ok(()) => {}
    }
}
