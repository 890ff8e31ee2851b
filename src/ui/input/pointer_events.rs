//! Pointer event extraction and hit testing.
//!
//! egui batches raw input per frame; the grid widget walks that batch in
//! arrival order so every move and release is handled individually, without
//! coalescing.

use crate::layout::ItemId;
use crate::rendering::grid_layout::{handle_rect, PanelPlacement};

/// A pointer event relevant to the grid widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { pos: egui::Pos2, button: egui::PointerButton },
    Moved { pos: egui::Pos2 },
    Released { pos: egui::Pos2, button: egui::PointerButton },
}

/// Where a press landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// The panel body: starts a drag.
    Body(ItemId),
    /// The panel's resize handle: starts a resize.
    Handle(ItemId),
}

/// Extracts pointer events from a frame's raw input, preserving order.
pub fn collect_pointer_events(events: &[egui::Event]) -> Vec<PointerEvent> {
    events
        .iter()
        .filter_map(|event| match *event {
            egui::Event::PointerMoved(pos) => Some(PointerEvent::Moved { pos }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } => Some(PointerEvent::Pressed { pos, button }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed: false,
                ..
            } => Some(PointerEvent::Released { pos, button }),
            _ => None,
        })
        .collect()
}

/// Finds the topmost panel under `pos`.
///
/// Placements are in paint order, so the search runs back to front. Within a
/// panel the resize handle wins over the body when `resizable` is set.
pub fn hit_test(placements: &[PanelPlacement], pos: egui::Pos2, resizable: bool) -> Option<PointerTarget> {
    placements
        .iter()
        .rev()
        .filter(|placement| placement.is_interactive())
        .find(|placement| placement.rect.contains(pos))
        .map(|placement| {
            if resizable && handle_rect(placement.rect).contains(pos) {
                PointerTarget::Handle(placement.item.id.clone())
            } else {
                PointerTarget::Body(placement.item.id.clone())
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridItem;
    use crate::rendering::grid_layout::PanelRole;

    fn placement(id: &str, min: (f32, f32), size: f32) -> PanelPlacement {
        PanelPlacement {
            item: GridItem::new(id, 0, 0, 1, 1),
            rect: egui::Rect::from_min_size(egui::pos2(min.0, min.1), egui::vec2(size, size)),
            role: PanelRole::Resting,
        }
    }

    #[test]
    fn test_events_keep_arrival_order() {
        let events = vec![
            egui::Event::PointerMoved(egui::pos2(1.0, 1.0)),
            egui::Event::PointerButton {
                pos: egui::pos2(2.0, 2.0),
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::default(),
            },
            egui::Event::PointerMoved(egui::pos2(3.0, 3.0)),
            egui::Event::Text("ignored".to_string()),
        ];

        let extracted = collect_pointer_events(&events);
        assert_eq!(
            extracted,
            vec![
                PointerEvent::Moved { pos: egui::pos2(1.0, 1.0) },
                PointerEvent::Released {
                    pos: egui::pos2(2.0, 2.0),
                    button: egui::PointerButton::Primary
                },
                PointerEvent::Moved { pos: egui::pos2(3.0, 3.0) },
            ]
        );
    }

    #[test]
    fn test_hit_test_prefers_topmost_and_handle() {
        let placements = vec![placement("under", (0.0, 0.0), 100.0), placement("over", (50.0, 50.0), 100.0)];

        assert_eq!(
            hit_test(&placements, egui::pos2(60.0, 60.0), true),
            Some(PointerTarget::Body("over".into()))
        );
        assert_eq!(
            hit_test(&placements, egui::pos2(10.0, 10.0), true),
            Some(PointerTarget::Body("under".into()))
        );
        assert_eq!(
            hit_test(&placements, egui::pos2(145.0, 145.0), true),
            Some(PointerTarget::Handle("over".into()))
        );
        assert_eq!(
            hit_test(&placements, egui::pos2(145.0, 145.0), false),
            Some(PointerTarget::Body("over".into()))
        );
        assert_eq!(hit_test(&placements, egui::pos2(400.0, 10.0), true), None);
    }

    #[test]
    fn test_placeholder_is_not_hit() {
        let mut ghost = placement("a", (0.0, 0.0), 100.0);
        ghost.role = PanelRole::Placeholder;
        assert_eq!(hit_test(&[ghost], egui::pos2(10.0, 10.0), true), None);
    }
}
