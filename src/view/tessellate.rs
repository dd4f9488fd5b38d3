use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::frame::{DrawCommand, Frame, Rgba, Shape};
use crate::utils::Mesh;

pub const SPHERE_SLICES: u32 = 20;
pub const SPHERE_STACKS: u32 = 16;
pub const ROUND_SLICES: u32 = 32;

/// CPU meshes for one frame, split by pipeline.
#[derive(Debug, Default)]
pub struct SceneMeshes {
    pub opaque: Mesh,
    /// Alpha-blended, drawn after everything opaque.
    pub translucent: Mesh,
    pub points: Mesh,
}

pub fn tessellate(frame: &Frame) -> SceneMeshes {
    let mut meshes = SceneMeshes::default();
    for cmd in &frame.commands {
        let target = match cmd.shape {
            Shape::Point(_) => &mut meshes.points,
            _ if cmd.is_translucent() => &mut meshes.translucent,
            _ => &mut meshes.opaque,
        };
        append_command(target, cmd);
    }
    meshes
}

pub fn append_command(mesh: &mut Mesh, cmd: &DrawCommand) {
    // emissive geometry carries zero normals; the shader skips lighting
    let lit = !cmd.element.is_emissive();
    let shade = |n: Vec3| if lit { n } else { Vec3::ZERO };
    let color = cmd.color;

    match cmd.shape {
        Shape::Quad(corners) => {
            let n = shade(face_normal(corners[0], corners[1], corners[2]));
            let idx: Vec<u32> = corners.iter().map(|&p| mesh.push_vertex(p, n, color)).collect();
            mesh.push_triangle(idx[0], idx[1], idx[2]);
            mesh.push_triangle(idx[0], idx[2], idx[3]);
        }
        Shape::Triangle(corners) => {
            let n = shade(face_normal(corners[0], corners[1], corners[2]));
            let a = mesh.push_vertex(corners[0], n, color);
            let b = mesh.push_vertex(corners[1], n, color);
            let c = mesh.push_vertex(corners[2], n, color);
            mesh.push_triangle(a, b, c);
        }
        Shape::Cuboid { center, size } => append_cuboid(mesh, center, size, color, &shade),
        Shape::Sphere { center, radius } => append_sphere(mesh, center, radius, color, &shade),
        Shape::Cylinder { base, radius, height } => {
            append_cylinder(mesh, base, radius, height, color, &shade)
        }
        Shape::Cone { base, radius, height } => append_cone(mesh, base, radius, height, color, &shade),
        Shape::Point(p) => {
            let i = mesh.push_vertex(p, Vec3::ZERO, color);
            mesh.indices.push(i);
        }
    }
}

fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

fn append_cuboid(mesh: &mut Mesh, center: Vec3, size: Vec3, color: Rgba, shade: &dyn Fn(Vec3) -> Vec3) {
    let half = size * 0.5;
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let normal = shade(n);
        let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
        let idx: Vec<u32> = corners
            .iter()
            .map(|&(su, sv)| mesh.push_vertex(center + (n + u * su + v * sv) * half, normal, color))
            .collect();
        mesh.push_triangle(idx[0], idx[1], idx[2]);
        mesh.push_triangle(idx[0], idx[2], idx[3]);
    }
}

fn append_sphere(mesh: &mut Mesh, center: Vec3, radius: f32, color: Rgba, shade: &dyn Fn(Vec3) -> Vec3) {
    let first = mesh.vertices.len() as u32;
    for i in 0..=SPHERE_STACKS {
        let phi = PI * i as f32 / SPHERE_STACKS as f32;
        let (ring, y) = phi.sin_cos();
        for j in 0..=SPHERE_SLICES {
            let theta = TAU * j as f32 / SPHERE_SLICES as f32;
            let n = Vec3::new(ring * theta.cos(), y, ring * theta.sin());
            mesh.push_vertex(center + n * radius, shade(n), color);
        }
    }
    let row = SPHERE_SLICES + 1;
    for i in 0..SPHERE_STACKS {
        for j in 0..SPHERE_SLICES {
            let a = first + i * row + j;
            let b = a + row;
            mesh.push_triangle(a, b, a + 1);
            mesh.push_triangle(a + 1, b, b + 1);
        }
    }
}

/// Open tube, like a quadric cylinder without caps.
fn append_cylinder(
    mesh: &mut Mesh,
    base: Vec3,
    radius: f32,
    height: f32,
    color: Rgba,
    shade: &dyn Fn(Vec3) -> Vec3,
) {
    let first = mesh.vertices.len() as u32;
    for j in 0..=ROUND_SLICES {
        let theta = TAU * j as f32 / ROUND_SLICES as f32;
        let dir = Vec3::new(theta.cos(), 0.0, theta.sin());
        mesh.push_vertex(base + dir * radius, shade(dir), color);
        mesh.push_vertex(base + dir * radius + Vec3::Y * height, shade(dir), color);
    }
    for j in 0..ROUND_SLICES {
        let b0 = first + 2 * j;
        let (t0, b1, t1) = (b0 + 1, b0 + 2, b0 + 3);
        mesh.push_triangle(b0, t0, b1);
        mesh.push_triangle(b1, t0, t1);
    }
}

/// Cone with a closed base disk.
fn append_cone(
    mesh: &mut Mesh,
    base: Vec3,
    radius: f32,
    height: f32,
    color: Rgba,
    shade: &dyn Fn(Vec3) -> Vec3,
) {
    let apex = base + Vec3::Y * height;
    let side_normal = |theta: f32| {
        Vec3::new(theta.cos() * height, radius, theta.sin() * height).normalize_or_zero()
    };
    let step = TAU / ROUND_SLICES as f32;

    let ring = mesh.vertices.len() as u32;
    for j in 0..=ROUND_SLICES {
        let theta = step * j as f32;
        let dir = Vec3::new(theta.cos(), 0.0, theta.sin());
        mesh.push_vertex(base + dir * radius, shade(side_normal(theta)), color);
    }
    for j in 0..ROUND_SLICES {
        let tip = mesh.push_vertex(apex, shade(side_normal(step * (j as f32 + 0.5))), color);
        mesh.push_triangle(ring + j, tip, ring + j + 1);
    }

    let down = shade(Vec3::NEG_Y);
    let hub = mesh.push_vertex(base, down, color);
    let rim = mesh.vertices.len() as u32;
    for j in 0..=ROUND_SLICES {
        let theta = step * j as f32;
        mesh.push_vertex(base + Vec3::new(theta.cos(), 0.0, theta.sin()) * radius, down, color);
    }
    for j in 0..ROUND_SLICES {
        mesh.push_triangle(hub, rim + j + 1, rim + j);
    }
}
