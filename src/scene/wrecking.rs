//! Crane with a swinging wrecking ball and a staggered brick wall

use std::f32::consts::TAU;

use tracing::{info, warn};

use super::config::YardConfig;
use super::grid::{stagger_offset, DestructibleGrid};
use super::timer::ZoomPulse;
use super::Demo;
use crate::display::{PixelBuffer, Snapshot};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::math2d::Mat3;

/// Signal flag outline, tip down, in local units
const FLAG: [Point; 4] = [
    Point::new(-20.0, 0.0),
    Point::new(0.0, 40.0),
    Point::new(20.0, 0.0),
    Point::new(0.0, -60.0),
];
const FLAG_SCALE: f32 = 0.5;
const FLAG_MAST: f32 = 30.0;
const TRUSS_STEP: i32 = 26;
const PATH_SEGMENTS: usize = 80;

pub struct WreckingYard {
    config: YardConfig,
    buffer: PixelBuffer,
    background: Snapshot,
    grid: DestructibleGrid,
    zoom: ZoomPulse,
}

impl WreckingYard {
    pub fn new(config: YardConfig) -> Result<Self> {
        config.validate()?;

        let mut buffer = PixelBuffer::with_size(config.width, config.height)?;
        buffer.clear(config.palette.sky);
        let background = buffer.snapshot();

        let grid = DestructibleGrid::new(config.wall.cols, config.wall.rows)?;
        let zoom = ZoomPulse::new(config.zoom.interval, config.zoom.duration, config.zoom.strength);

        info!(
            width = config.width,
            height = config.height,
            cols = config.wall.cols,
            rows = config.wall.rows,
            "wrecking yard ready"
        );

        Ok(Self {
            config,
            buffer,
            background,
            grid,
            zoom,
        })
    }

    pub fn config(&self) -> &YardConfig {
        &self.config
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Read-only view of which bricks are gone
    pub fn grid(&self) -> &DestructibleGrid {
        &self.grid
    }

    pub fn broken_cells(&self) -> Vec<(usize, usize)> {
        self.grid.broken_cells()
    }

    pub fn zoom_scale(&self) -> f32 {
        self.zoom.scale()
    }

    pub fn apex(&self) -> Point {
        self.config.crane.apex()
    }

    /// Swing angle in degrees at time `t`: `amplitude * sin(t * speed * 2pi)`
    pub fn pendulum_angle(&self, t: f32) -> f32 {
        let p = &self.config.pendulum;
        p.amplitude_deg * (t * p.speed * TAU).sin()
    }

    /// Ball center hanging `rope_length` below the apex at the swing angle
    pub fn bob_position(&self, t: f32) -> Point {
        let (s, c) = self.pendulum_angle(t).to_radians().sin_cos();
        let rope = self.config.pendulum.rope_length;
        self.apex() + Point::new(rope * s, -rope * c)
    }

    /// Rebuild the wall and restart the zoom timer
    pub fn reset(&mut self) {
        self.grid.reset();
        self.zoom.reset();
        info!("wrecking yard reset");
    }

    fn draw_truss_tower(&mut self) {
        let tower = self.config.crane.tower;
        let (steel, crane) = (self.config.palette.steel, self.config.palette.crane);
        let (x, y, w, h) = rect_px(&tower);
        self.buffer.fill_rect(x, y, w, h, crane);
        self.buffer.stroke_rect(x, y, w, h, steel);

        let (x0, x1) = (x + 6, x + w - 6);
        let (y0, y1) = (y + 6, y + h - 6);
        for y in (y0..y1).step_by(TRUSS_STEP as usize) {
            let next = (y + TRUSS_STEP).min(y1);
            self.buffer.line(x0, y, x1, next, steel);
            self.buffer.line(x1, y, x0, next, steel);
            self.buffer.line(x0, y, x0, next, steel);
            self.buffer.line(x1, y, x1, next, steel);
        }
    }

    fn draw_cab_and_boom(&mut self) {
        let crane = &self.config.crane;
        let palette = &self.config.palette;
        let buf = &mut self.buffer;

        let (x, y, w, h) = rect_px(&crane.counterweight);
        buf.fill_rect(x, y, w, h, palette.counterweight);
        buf.stroke_rect(x, y, w, h, palette.steel);

        let (x, y, w, h) = rect_px(&crane.cab);
        buf.fill_rect(x, y, w, h, palette.crane);
        buf.stroke_rect(x, y, w, h, palette.steel);
        buf.fill_rect(x + 12, y + 18, 32, 24, palette.window);
        buf.stroke_rect(x + 12, y + 18, 32, 24, palette.steel);

        let root = Point::new(crane.tower.x_max(), crane.tower.y_max());
        let apex = crane.apex();
        let (rx, ry) = (root.x as i32, root.y as i32);
        let (ax, ay) = (apex.x as i32, apex.y as i32);
        buf.line(rx, ry, ax, ay, palette.boom);
        buf.line(rx, ry - 6, ax + 6, ay - 6, palette.boom);

        let mid = root.lerp(apex, 0.55);
        let cab_mid = crane.cab.center().x as i32;
        buf.line(cab_mid, crane.cab.y_max() as i32, mid.x as i32, mid.y as i32, palette.steel);
    }

    /// Kite-shaped flag on a short mast above the tower, swelling with the
    /// zoom pulse
    fn draw_flag(&mut self, t: f32) {
        let tower = self.config.crane.tower;
        let foot = Point::new(tower.center().x, tower.y_max());
        let scale = FLAG_SCALE * self.zoom.scale();
        let tip = foot + Point::new(0.0, FLAG_MAST);
        let center = tip + Point::new(0.0, 60.0 * scale);

        let (fx, fy) = foot.to_pixel();
        let (tx, ty) = tip.to_pixel();
        self.buffer.line(fx, fy, tx, ty, self.config.palette.steel);

        let sway = 10.0 * (t * 1.5).sin();
        let m = Mat3::trs(center, sway, Point::new(scale, scale));
        self.buffer.draw_transformed_polygon(
            &FLAG,
            &m,
            Some(self.config.palette.flag),
            self.config.palette.steel,
        );
    }

    fn draw_staggered_wall(&mut self) {
        let wall = &self.config.wall;
        let palette = &self.config.palette;
        let (bw, bh) = wall.brick_size();
        let (bw_px, bh_px) = (bw as i32, bh as i32);
        let last_col = wall.cols as i32 - 1;

        for row in 0..wall.rows {
            let offset = stagger_offset(row, bw);
            for c in -1..=wall.cols as i32 {
                let x = wall.rect.x + c as f32 * bw + offset;
                let y = wall.rect.y + row as f32 * bh;
                if x < wall.rect.x || x + bw > wall.rect.x_max() {
                    continue;
                }
                let (x, y) = (x as i32, y as i32);
                let col = c.clamp(0, last_col) as usize;

                if !self.grid.is_broken(col, row) {
                    self.buffer
                        .fill_rect(x + 1, y + 1, bw_px - 2, bh_px - 2, palette.brick);
                }
                self.buffer.stroke_rect(x, y, bw_px, bh_px, palette.mortar);
            }
        }
    }

    /// Break the brick under the ball when its bounds touch the wall
    fn collide(&mut self, bob: Point) {
        let ball = Rect::around(bob, self.config.pendulum.ball_radius);
        let wall = &self.config.wall;
        if !ball.overlaps(&wall.rect) {
            return;
        }
        let (bw, bh) = wall.brick_size();
        if let Err(e) = self.grid.smash(bob, wall.origin(), bw, bh) {
            warn!(error = %e, "collision ignored");
        }
    }
}

/// Truncated pixel rect (x, y, w, h)
fn rect_px(r: &Rect) -> (i32, i32, i32, i32) {
    (r.x as i32, r.y as i32, r.width as i32, r.height as i32)
}

impl Demo for WreckingYard {
    fn render(&mut self, t: f32) -> &PixelBuffer {
        self.zoom.advance(t);
        self.buffer.restore(&self.background);

        self.draw_truss_tower();
        self.draw_cab_and_boom();
        self.draw_flag(t);

        let apex = self.apex();
        let bob = self.bob_position(t);
        let (ax, ay) = apex.to_pixel();
        let (bx, by) = bob.to_pixel();
        self.buffer.line(ax, ay, bx, by, self.config.palette.rope);

        // Swing path: the rope hangs at -90 degrees
        let amplitude = self.config.pendulum.amplitude_deg;
        self.buffer.arc_polyline(
            apex,
            self.config.pendulum.rope_length,
            -90.0 - amplitude,
            -90.0 + amplitude,
            PATH_SEGMENTS,
            self.config.palette.path,
        );

        self.draw_staggered_wall();
        self.collide(bob);

        let radius = self.config.pendulum.ball_radius.round() as i32;
        self.buffer.fill_circle(bx, by, radius, self.config.palette.ball);

        &self.buffer
    }

    fn name(&self) -> &str {
        "wrecking yard"
    }
}
