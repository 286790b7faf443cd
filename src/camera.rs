// MIT License

// Copyright (c) 2022 AnonmousDapper

use glam::Vec2;

use crate::{
    life::{Coord, Torus},
    FB_HEIGHT, FB_WIDTH,
};

/// Framebuffer-space position, in pixels.
pub type ScreenPos = Vec2;

/// View onto the board: which world point sits at the middle of the framebuffer,
/// and how many framebuffer pixels one cell spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    center: Vec2,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    home_zoom: f32,
}

fn frame_center() -> Vec2 {
    Vec2::new(FB_WIDTH as f32, FB_HEIGHT as f32) / 2.0
}

impl Camera {
    pub fn new(zoom: f32, min_zoom: f32, max_zoom: f32) -> Self {
        let zoom = zoom.clamp(min_zoom, max_zoom);

        Self {
            center: Vec2::ZERO,
            zoom,
            min_zoom,
            max_zoom,
            home_zoom: zoom,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Framebuffer position of a world point (cells are unit squares with their
    /// top-left corner at the integer coordinate).
    pub fn world_to_screen(&self, world: Vec2) -> ScreenPos {
        (world - self.center) * self.zoom + frame_center()
    }

    pub fn screen_to_world(&self, screen: ScreenPos) -> Vec2 {
        (screen - frame_center()) / self.zoom + self.center
    }

    /// Top-left framebuffer pixel of a cell.
    pub fn cell_origin(&self, (x, y): Coord) -> (i32, i32) {
        let p = self.world_to_screen(Vec2::new(x as f32, y as f32));
        (p.x.floor() as i32, p.y.floor() as i32)
    }

    /// Size of one cell on screen, in whole pixels.
    pub fn cell_size(&self) -> i32 {
        self.zoom.round() as i32
    }

    /// The board cell under a framebuffer position, if there is one.
    pub fn cell_at(&self, screen: ScreenPos, torus: &Torus) -> Option<Coord> {
        let world = self.screen_to_world(screen).floor();
        let cell = (world.x as i32, world.y as i32);

        torus.contains(cell).then(|| cell)
    }

    /// Drag the view by a framebuffer-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.center -= delta / self.zoom;
    }

    /// Multiply the zoom by `factor`, keeping the world point under `anchor` where it is.
    pub fn zoom_at(&mut self, anchor: ScreenPos, factor: f32) {
        let before = self.screen_to_world(anchor);
        self.zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        let after = self.screen_to_world(anchor);

        self.center += before - after;
    }

    pub fn reset(&mut self) {
        self.center = Vec2::ZERO;
        self.zoom = self.home_zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, 1e-4)
    }

    #[test]
    fn origin_sits_in_the_middle() {
        let cam = Camera::new(4.0, 1.0, 32.0);
        let torus = Torus::new(30);

        assert_eq!(cam.cell_origin((0, 0)), (FB_WIDTH / 2, FB_HEIGHT / 2));
        assert_eq!(cam.cell_at(frame_center() + Vec2::splat(1.0), &torus), Some((0, 0)));
        assert_eq!(cam.cell_at(frame_center() - Vec2::splat(1.0), &torus), Some((-1, -1)));
    }

    #[test]
    fn screen_world_round_trip() {
        let mut cam = Camera::new(6.0, 1.0, 32.0);
        cam.pan(Vec2::new(13.0, -7.0));

        let p = Vec2::new(40.0, 200.0);
        assert!(approx(cam.world_to_screen(cam.screen_to_world(p)), p));
    }

    #[test]
    fn off_board_has_no_cell() {
        let cam = Camera::new(1.0, 1.0, 32.0);
        let torus = Torus::new(30);

        assert_eq!(cam.cell_at(Vec2::new(0.0, 0.0), &torus), None);
        assert_eq!(cam.cell_at(frame_center() + Vec2::new(30.5, 0.0), &torus), None);
        assert_eq!(
            cam.cell_at(frame_center() + Vec2::new(29.5, 0.0), &torus),
            Some((29, 0))
        );
    }

    #[test]
    fn pan_moves_the_world_with_the_cursor() {
        let mut cam = Camera::new(4.0, 1.0, 32.0);
        let before = cam.world_to_screen(Vec2::new(3.0, 3.0));

        cam.pan(Vec2::new(8.0, -4.0));

        assert!(approx(cam.world_to_screen(Vec2::new(3.0, 3.0)), before + Vec2::new(8.0, -4.0)));
    }

    #[test]
    fn zoom_keeps_the_anchor_fixed() {
        let mut cam = Camera::new(4.0, 1.0, 32.0);
        let anchor = Vec2::new(200.0, 50.0);
        let world = cam.screen_to_world(anchor);

        cam.zoom_at(anchor, 2.0);

        assert_eq!(cam.zoom(), 8.0);
        assert!(approx(cam.screen_to_world(anchor), world));
    }

    #[test]
    fn zoom_is_clamped_and_reset_restores() {
        let mut cam = Camera::new(4.0, 1.0, 32.0);

        cam.zoom_at(frame_center(), 100.0);
        assert_eq!(cam.zoom(), 32.0);

        cam.zoom_at(frame_center(), 0.001);
        assert_eq!(cam.zoom(), 1.0);

        cam.pan(Vec2::new(5.0, 5.0));
        cam.reset();
        assert_eq!(cam, Camera::new(4.0, 1.0, 32.0));
    }
}
