//! Transition detector: masked-state diffing.

use crate::buttonmap::ButtonMap;
use crate::event::{ButtonEvent, Transition};

/// Diffs two masked state bytes against a button map.
///
/// Returns one event per mapped button whose bit changed, in map order. Equal
/// states short-circuit to an empty vec — that is the common case on every
/// quiet poll tick and must stay cheap.
pub fn detect(previous: u8, current: u8, map: &ButtonMap) -> Vec<ButtonEvent> {
    if current == previous {
        return Vec::new();
    }

    let diff = current ^ previous;
    let mut events = Vec::new();

    for btn in map.iter() {
        if diff & btn.mask != 0 {
            let transition = if current & btn.mask != 0 {
                Transition::Press
            } else {
                Transition::Release
            };
            events.push(ButtonEvent::new(btn.name.clone(), transition));
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rs24() -> ButtonMap {
        ButtonMap::rs24_default()
    }

    fn pairs(events: &[ButtonEvent]) -> Vec<(&str, Transition)> {
        events
            .iter()
            .map(|e| (e.name.as_str(), e.transition))
            .collect()
    }

    #[test]
    fn equal_states_emit_nothing() {
        for s in [0x00, 0x02, 0x06, 0xff] {
            assert!(detect(s, s, &rs24()).is_empty());
        }
    }

    #[test]
    fn single_press_and_release() {
        assert_eq!(pairs(&detect(0x00, 0x02, &rs24())), vec![("LISTEN", Transition::Press)]);
        assert_eq!(pairs(&detect(0x02, 0x00, &rs24())), vec![("LISTEN", Transition::Release)]);
    }

    #[test]
    fn simultaneous_edges_follow_map_order() {
        // 0x00 -> 0x06: LISTEN and REW both go down; LISTEN is first in the map.
        assert_eq!(
            pairs(&detect(0x00, 0x06, &rs24())),
            vec![("LISTEN", Transition::Press), ("REW", Transition::Press)]
        );
        // Mixed edges in one frame.
        assert_eq!(
            pairs(&detect(0x02, 0x04, &rs24())),
            vec![("LISTEN", Transition::Release), ("REW", Transition::Press)]
        );
    }

    #[test]
    fn event_count_matches_mapped_changed_bits() {
        let map = rs24();
        for previous in 0u8..=0x0f {
            for current in 0u8..=0x0f {
                let diff = previous ^ current;
                let expected = map.iter().filter(|b| diff & b.mask != 0).count();
                assert_eq!(detect(previous, current, &map).len(), expected);
            }
        }
    }

    #[test]
    fn unmapped_bits_are_ignored() {
        // Bit 4 is not in the map; only REW registers.
        assert_eq!(pairs(&detect(0x00, 0x14, &rs24())), vec![("REW", Transition::Press)]);
        assert!(detect(0x00, 0x10, &rs24()).is_empty());
    }

    #[test]
    fn custom_map_order_wins_over_bit_order() {
        let mut map = ButtonMap::new();
        map.add(0x08, "FF");
        map.add(0x02, "LISTEN");
        assert_eq!(
            pairs(&detect(0x00, 0x0a, &map)),
            vec![("FF", Transition::Press), ("LISTEN", Transition::Press)]
        );
    }
}
