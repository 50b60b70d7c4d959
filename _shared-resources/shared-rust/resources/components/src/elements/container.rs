// Container Element
// Lays tabs out in a row, draws the sliding highlight, and turns pointer input into tab indices

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::time::Duration;

use super::tab::Tab;
use crate::core::{clamp_index, index_at, tab_width, IndicatorAnimation, Platform};
use crate::styles::TabStyleSheet;
use crate::utilities::rect_contains;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                     Gestures and Frame State                                   │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Pointer input as the container understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerGesture {
    /// Left button pressed on a tab
    Tap(usize),
    /// Drag moved onto a tab other than the active one
    Scrub(usize),
}

/// State the container keeps between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerState {
    /// Area of the last render (zero-sized before the first layout pass)
    area: Rect,
    /// A drag that started on the control is in progress
    dragging: bool,
    animation: IndicatorAnimation,
}

impl Default for ContainerState {
    fn default() -> Self {
        Self::new(crate::core::INDICATOR_ANIMATION_DURATION)
    }
}

impl ContainerState {
    pub fn new(animation_duration: Duration) -> Self {
        Self {
            area: Rect::default(),
            dragging: false,
            animation: IndicatorAnimation::new(animation_duration),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Record the laid-out area
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn animation(&self) -> &IndicatorAnimation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut IndicatorAnimation {
        &mut self.animation
    }

    /// Tab under a terminal column, clamped to the row
    pub fn index_for_column(&self, column: u16, tab_count: usize) -> usize {
        let x = column as f32 - self.area.x as f32;
        index_at(x, self.area.width as f32, tab_count)
    }

    /// Interpret a mouse event. Drags are only recognised on platforms that support them,
    /// and only once a press has started on the control.
    pub fn interpret(
        &mut self,
        event: &MouseEvent,
        platform: Platform,
        tab_count: usize,
        active_index: usize,
    ) -> Option<ContainerGesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Any press ends a drag whose release was never delivered
                self.dragging = false;
                if !rect_contains(self.area, event.column, event.row) {
                    return None;
                }
                self.dragging = platform.supports_drag_gesture();
                Some(ContainerGesture::Tap(self.index_for_column(event.column, tab_count)))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if !self.dragging {
                    return None;
                }
                let index = self.index_for_column(event.column, tab_count);
                (index != active_index).then_some(ContainerGesture::Scrub(index))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dragging = false;
                None
            }
            _ => None,
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           Layout                                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn edge(offset: f32, limit: u16) -> u16 {
    (offset.max(0.0).ceil() as u16).min(limit)
}

/// Split `area` into `tab_count` columns. Column `i` covers exactly the cells
/// `index_at` maps to `i`.
pub fn tab_rects(area: Rect, tab_count: usize) -> Vec<Rect> {
    let width = tab_width(area.width as f32, tab_count);
    (0..tab_count)
        .map(|i| {
            let left = edge(width * i as f32, area.width);
            let right = edge(width * (i + 1) as f32, area.width);
            Rect {
                x: area.x + left,
                y: area.y,
                width: right.saturating_sub(left),
                height: area.height,
            }
        })
        .collect()
}

/// Highlight area for an indicator offset. At rest it covers the selected tab exactly.
pub fn highlight_rect(area: Rect, tab_count: usize, offset: f32) -> Rect {
    let width = tab_width(area.width as f32, tab_count);
    let rects = tab_rects(area, tab_count);
    if rects.is_empty() || width <= 0.0 {
        return Rect { width: 0, ..area };
    }
    let nearest = clamp_index((offset / width).round().max(0.0) as usize, tab_count);
    let left = edge(offset, area.width);
    Rect {
        x: area.x + left,
        y: area.y,
        width: rects[nearest].width.min(area.width - left),
        height: area.height,
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                          Container                                             │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

pub struct Container<'a> {
    tabs: Vec<Tab<'a>>,
    /// Current (animated) left offset of the highlight
    indicator_offset: f32,
    sheet: &'a TabStyleSheet,
    platform: Platform,
}

impl<'a> Container<'a> {
    pub fn new(tabs: Vec<Tab<'a>>, sheet: &'a TabStyleSheet, platform: Platform) -> Self {
        Self {
            tabs,
            indicator_offset: 0.0,
            sheet,
            platform,
        }
    }

    pub fn with_indicator_offset(mut self, offset: f32) -> Self {
        self.indicator_offset = offset;
        self
    }

    pub fn tabs(&self) -> &[Tab<'a>] {
        &self.tabs
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        f.buffer_mut().set_style(area, self.sheet.container);

        for (tab, rect) in self.tabs.iter().zip(tab_rects(area, self.tabs.len())) {
            tab.render(f, rect, self.sheet, self.platform);
        }

        // Patched over the tabs so labels stay visible on top of it
        let highlight = highlight_rect(area, self.tabs.len(), self.indicator_offset);
        f.buffer_mut().set_style(highlight, self.sheet.highlight());
    }
}
