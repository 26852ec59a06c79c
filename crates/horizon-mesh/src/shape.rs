//! Shape parameter types and the tagged union that dispatches to a generator.

use std::f64::consts::TAU;

use crate::arc_family::{RadiusSchedule, generate_arc_family};
use crate::color::{ColorGradient, Rgba};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ring::generate_ring;
use crate::sphere::generate_sphere;

/// UV-sphere parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereParams {
    pub radius: f64,
    /// Divisions around the polar axis (longitude).
    pub slices: u32,
    /// Divisions along the sweep angle (latitude).
    pub stacks: u32,
    /// Start and end of the stack sweep, in radians.
    pub phi_range: (f64, f64),
    /// Start and end of the slice sweep, in radians.
    pub theta_range: (f64, f64),
    /// Emit unit normals.
    pub normals: bool,
    /// Uniform vertex color.
    pub color: Option<Rgba>,
}

impl SphereParams {
    /// Full `(0, 2π)` sweeps on both angles, with normals and no color.
    pub fn new(radius: f64, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            slices,
            stacks,
            phi_range: (0.0, TAU),
            theta_range: (0.0, TAU),
            normals: true,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn without_normals(mut self) -> Self {
        self.normals = false;
        self
    }
}

/// Planar ring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingParams {
    pub radius: f64,
    /// Number of `x` samples across the diameter.
    pub segments: u32,
    /// Line thickness hint for the renderer.
    pub thickness: f32,
}

impl RingParams {
    pub fn new(radius: f64, segments: u32) -> Self {
        Self {
            radius,
            segments,
            thickness: 1.0,
        }
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }
}

/// Concentric arc family parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcFamilyParams {
    /// Radius of the innermost arc.
    pub base_radius: f64,
    pub count: u32,
    /// Ring sampling density for every arc.
    pub segments: u32,
    pub schedule: RadiusSchedule,
    pub gradient: ColorGradient,
}

/// Any shape the generator can build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeParams {
    Sphere(SphereParams),
    Ring(RingParams),
    ArcFamily(ArcFamilyParams),
}

impl ShapeParams {
    /// Build the meshes for this shape. Spheres and rings yield one mesh,
    /// arc families yield one per arc.
    pub fn generate(&self) -> Result<Vec<Mesh>, MeshError> {
        match self {
            Self::Sphere(params) => Ok(vec![generate_sphere(params)?]),
            Self::Ring(params) => Ok(vec![generate_ring(params)?]),
            Self::ArcFamily(params) => params.generate(),
        }
    }
}

impl ArcFamilyParams {
    pub fn generate(&self) -> Result<Vec<Mesh>, MeshError> {
        self.schedule.check_jump(self.count)?;
        generate_arc_family(
            self.base_radius,
            self.count,
            self.segments,
            |k| self.schedule.step(k),
            |k| self.gradient.at(k, self.count),
        )
    }
}
