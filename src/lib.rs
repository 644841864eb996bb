//! Epicycler library - Fourier square-wave synthesis drawn as chained
//! rotating circles.

pub mod cli;
pub mod controls;
pub mod fourier;
pub mod params;
pub mod rendering;
pub mod scene;
pub mod view;
