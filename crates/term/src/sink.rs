//! Render sink that draws snapshots on a terminal.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{GameSnapshot, RenderSink};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalSink<W: Write = io::Stdout> {
    view: GameView,
    viewport: Viewport,
    fb: FrameBuffer,
    renderer: TerminalRenderer<W>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(renderer: TerminalRenderer<W>, viewport: Viewport) -> Self {
        Self {
            view: GameView::default(),
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            renderer,
        }
    }

    /// Track a terminal resize; the next frame is a full redraw.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.renderer.invalidate();
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view.render_into(snapshot, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
