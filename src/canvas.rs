// MIT License

// Copyright (c) 2022 AnonmousDapper

use line_drawing::Bresenham;

use half::f16;

use crate::{FB_HEIGHT, FB_WIDTH};

const BUF_LEN: usize = FB_WIDTH as usize * FB_HEIGHT as usize * 8;

const GAMMA: f32 = 2.2;

pub type Size = i32;
pub type Point = (Size, Size);

pub type Color = (u8, u8, u8);

type Buffer = Vec<u8>;

#[inline]
fn as_idx(x: Size, y: Size) -> usize {
    (y * 8 * FB_WIDTH + x * 8) as usize
}

#[inline]
fn in_bounds(x: Size, y: Size) -> bool {
    (0..FB_WIDTH).contains(&x) && (0..FB_HEIGHT).contains(&y)
}

pub trait Surface {
    type Pixel;

    fn set_pixel(&mut self, x: Size, y: Size, data: &Self::Pixel);

    fn fill(&mut self, data: &Self::Pixel);
}

impl Surface for Buffer {
    type Pixel = [u8; 8];

    /// Writes outside the framebuffer are dropped.
    #[inline]
    fn set_pixel(&mut self, x: Size, y: Size, data: &Self::Pixel) {
        if in_bounds(x, y) {
            let idx = as_idx(x, y);
            self[idx..idx + 8].copy_from_slice(data);
        }
    }

    #[inline]
    fn fill(&mut self, data: &Self::Pixel) {
        for pixel in self.chunks_exact_mut(8) {
            pixel.copy_from_slice(data);
        }
    }
}

pub trait Render {
    type Color;

    fn pixel(&mut self, point: Point, color: Self::Color);

    fn line(&mut self, origin: Point, end: Point, color: Self::Color);

    fn rect(&mut self, origin: Point, width: Size, height: Size, color: Self::Color);

    fn fill(&mut self, color: Self::Color);

    fn clear(&mut self);

    // higher-level methods
    fn tile(&mut self, origin: Point, size: Size, color: Self::Color);
}

pub struct Canvas {
    frame: Buffer,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            frame: vec![0; BUF_LEN],
        }
    }

    #[inline]
    pub fn get_frame(&self) -> &Buffer {
        &self.frame
    }

    #[inline]
    pub fn render_to(&self, frame: &mut [u8]) {
        frame.copy_from_slice(self.get_frame());
    }
}

impl Render for Canvas {
    type Color = RgbaF16;

    #[inline]
    fn pixel(&mut self, (x, y): Point, color: Self::Color) {
        self.frame.set_pixel(x, y, &color.as_bytes())
    }

    #[inline]
    fn line(&mut self, origin: Point, end: Point, color: Self::Color) {
        let bytes = color.as_bytes();
        for (x, y) in Bresenham::new(origin, end) {
            self.frame.set_pixel(x, y, &bytes);
        }
    }

    fn rect(&mut self, (x, y): Point, width: Size, height: Size, color: Self::Color) {
        let bytes = color.as_bytes();

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(FB_WIDTH);
        let y1 = y.saturating_add(height).min(FB_HEIGHT);

        for py in y0..y1 {
            for px in x0..x1 {
                self.frame.set_pixel(px, py, &bytes);
            }
        }
    }

    #[inline]
    fn fill(&mut self, color: Self::Color) {
        self.frame.fill(&color.as_bytes())
    }

    #[inline]
    fn clear(&mut self) {
        self.frame.fill(&[0, 0, 0, 0, 0, 0, 0, 0]);
    }

    /// A cell-sized square. Tiles of 3px and up leave a 1px gutter so neighbours stay distinct.
    #[inline]
    fn tile(&mut self, origin: Point, size: Size, color: Self::Color) {
        match size {
            i32::MIN..=0 => {}
            1 => self.pixel(origin, color),
            2 => self.rect(origin, 2, 2, color),
            _ => self.rect(origin, size - 1, size - 1, color),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaF16 {
    r: f16,
    g: f16,
    b: f16,
    a: f16,
}

impl RgbaF16 {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self::new_raw(r.powf(GAMMA), g.powf(GAMMA), b.powf(GAMMA), 1.0)
    }

    pub fn rgb(r: u16, g: u16, b: u16) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn new_raw(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: f16::from_f32(r),
            g: f16::from_f32(g),
            b: f16::from_f32(b),
            a: f16::from_f32(a),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> [u8; 8] {
        let [rh, rl] = self.r.to_le_bytes();
        let [gh, gl] = self.g.to_le_bytes();
        let [bh, bl] = self.b.to_le_bytes();
        let [ah, al] = self.a.to_le_bytes();

        [rh, rl, gh, gl, bh, bl, ah, al]
    }
}

impl From<Color> for RgbaF16 {
    fn from((r, g, b): Color) -> Self {
        Self::rgb(r as u16, g as u16, b as u16)
    }
}
