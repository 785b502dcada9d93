//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure drawing, no I/O. Board cells come straight from the snapshot's code
//! grid (the active piece is already stamped there); the landing preview is
//! drawn underneath as a dim shade of the piece colour wherever the board is empty.

use crate::core::{pattern, GameSnapshot, HeldPiece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BOX};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal view of one game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

/// Top-left corner of the well frame, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the well including its border
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, origin.x, origin.y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                let (ch, style) = match CellState::from_code(snap.board[y][x]) {
                    Some(CellState::Piece(kind)) => ('█', CellStyle::plain(piece_color(kind), WELL_BG).bold()),
                    Some(CellState::Definitive) => ('▓', CellStyle::plain(Rgb::new(120, 120, 120), WELL_BG)),
                    Some(CellState::Clearable) => ('▒', CellStyle::plain(Rgb::new(160, 160, 160), WELL_BG)),
                    _ => match CellState::from_code(snap.preview[y][x]) {
                        Some(CellState::Piece(kind)) => ('░', CellStyle::plain(piece_color(kind), WELL_BG).dim()),
                        _ => ('·', CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG).dim()),
                    },
                };
                self.fill_cell(fb, origin, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if snap.game_over {
            let mid_y = origin.y.saturating_add(frame_h / 2);
            let text = "GAME OVER";
            let x = origin
                .x
                .saturating_add(frame_w.saturating_sub(text.len() as u16) / 2);
            fb.put_str(x, mid_y, text, CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = origin.x + 1 + x * self.cell_w;
        let py = origin.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = origin.y;
        fb.put_str(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        match snap.held {
            Some(held) => self.draw_held(fb, panel_x, y, held, snap.can_hold),
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(PIECE_BOX as u16 * self.cell_h + 1);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines_cleared as u32, value);
        y = y.saturating_add(2);

        let help = CellStyle::plain(Rgb::new(150, 150, 150), PANEL_BG).dim();
        for line in [
            "←/→/↓ move",
            "↑ x  cw",
            "z    ccw",
            "a    180",
            "spc  drop",
            "c    hold",
            "r    reset",
            "q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    /// Held piece shape; dimmed while hold is unavailable.
    fn draw_held(&self, fb: &mut FrameBuffer, x: u16, y: u16, held: HeldPiece, lit: bool) {
        let style = CellStyle::plain(piece_color(held.kind), PANEL_BG);
        let style = if lit { style } else { style.dim() };
        for (row, cells) in pattern(held.kind, held.rotation).iter().enumerate() {
            for (col, &filled) in cells.iter().enumerate() {
                if filled {
                    fb.fill_rect(
                        x + col as u16 * self.cell_w,
                        y + row as u16 * self.cell_h,
                        self.cell_w,
                        self.cell_h,
                        '█',
                        style,
                    );
                }
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
