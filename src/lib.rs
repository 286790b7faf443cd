// MIT License

// Copyright (c) 2022 AnonmousDapper

#![deny(rust_2018_idioms)]

pub const FB_HEIGHT: i32 = 256;
pub const FB_WIDTH: i32 = 256;

pub const WINDOW_WIDTH: u32 = 700;
pub const WINDOW_HEIGHT: u32 = 700;

pub const FRAME_TEXTURE_FORMAT: pixels::wgpu::TextureFormat =
    pixels::wgpu::TextureFormat::Rgba16Float;

pub mod life;

pub mod control;

pub mod brush;

pub mod camera;

pub mod canvas;

pub mod view;

pub mod settings;

pub mod patterns;

pub mod window;
