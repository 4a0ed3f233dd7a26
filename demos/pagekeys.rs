//! RS24 page-key mapper: LISTEN pages down, REW pages up.
//!
//! Run with `cargo run --example pagekeys`. The handler prints the key action
//! it would take; wiring it to an OS-level keystroke synthesizer is left to
//! the host application.

use buttonup::backends::hid::HidFrameSource;
use buttonup::{FrameSource, Poller, Profile, Transition};

fn page_key(name: &str, transition: Transition) {
    let key = match name {
        "LISTEN" => "PageDown",
        "REW" => "PageUp",
        _ => return,
    };

    match transition {
        Transition::Press => println!("press {key}"),
        Transition::Release => println!("release {key}"),
        Transition::Both => {}
    }
}

fn main() {
    let profile = Profile::rs24_default();

    let source = HidFrameSource::open(&profile.device, profile.poll.interval())
        .expect("open RS24 handset");
    println!("Polling {} ({})", source.name(), source.id());

    let mut poller = Poller::new(source, profile.buttons, profile.poll);
    poller.register_handler("REW", Transition::Both, page_key);
    poller.register_handler("LISTEN", Transition::Both, page_key);

    println!("RS24 keyboard mapper. Press Ctrl+C to exit.");
    if let Err(e) = poller.start() {
        eprintln!("poll loop ended: {e}");
    }
}
