//! [`StatView`] that writes into the server-rendered stat panel.

use community_page::catalog::SLOT_COUNT;
use community_page::fade::FadeFrame;
use community_page::panel::{PART_ATTR, PART_CURRENT, PART_NEXT, PART_VALUE, SLOT_ATTR, StatView};
use wasm_bindgen::prelude::*;
use web_sys::Element;

const FADE_OUT_CLASS: &str = "fade-out";

/// Selector for one part of a stat slot, matching the SSR markup.
pub fn part_selector(slot: usize, part: &str) -> String {
    format!(r#"[{SLOT_ATTR}="{slot}"] [{PART_ATTR}="{part}"]"#)
}

struct SlotNodes {
    current: Element,
    next: Element,
    value: Element,
}

/// Writes panel updates into the nodes of one mounted stat panel.
pub struct DomStatView {
    slots: Vec<SlotNodes>,
}

fn find_part(root: &Element, slot: usize, part: &str) -> Result<Element, JsValue> {
    root.query_selector(&part_selector(slot, part))?
        .ok_or_else(|| JsValue::from_str(&format!("stat slot {slot} has no `{part}` element")))
}

impl DomStatView {
    /// Resolve every slot's nodes under `root` once, up front.
    pub fn bind(root: &Element) -> Result<Self, JsValue> {
        let slots = (0..SLOT_COUNT)
            .map(|slot| {
                Ok(SlotNodes {
                    current: find_part(root, slot, PART_CURRENT)?,
                    next: find_part(root, slot, PART_NEXT)?,
                    value: find_part(root, slot, PART_VALUE)?,
                })
            })
            .collect::<Result<Vec<_>, JsValue>>()?;
        Ok(Self { slots })
    }
}

impl StatView for DomStatView {
    fn show_value(&mut self, slot: usize, value: &str) {
        if let Some(nodes) = self.slots.get(slot) {
            nodes.value.set_text_content(Some(value));
        }
    }

    fn show_title(&mut self, slot: usize, frame: &FadeFrame) {
        let Some(nodes) = self.slots.get(slot) else {
            return;
        };
        nodes.current.set_text_content(Some(&frame.outgoing));
        match &frame.incoming {
            Some(incoming) => {
                nodes.next.set_text_content(Some(incoming));
                let _ = nodes.next.remove_attribute("hidden");
                let _ = nodes.current.class_list().add_1(FADE_OUT_CLASS);
            }
            None => {
                let _ = nodes.next.set_attribute("hidden", "");
                nodes.next.set_text_content(None);
                let _ = nodes.current.class_list().remove_1(FADE_OUT_CLASS);
            }
        }
    }
}
