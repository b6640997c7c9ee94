//! Jar rigid-body world
//!
//! A rapier scene with one fixed body (the jar) and one dynamic body per
//! star. Star bodies are tracked by id so the world can be kept in step with
//! the store: `sync` adds what's missing and drops what was deleted.
//!
//! Star colliders are registered in a `PickTable`; the jar's own collider is
//! not, which is what keeps the glass from swallowing clicks.

use std::collections::{HashMap, HashSet};
use std::f32::consts::PI;

use macroquad::logging::debug;
use macroquad::math::{Quat, Vec3};
use rapier3d::na::{Isometry3, Translation3, UnitQuaternion};
use rapier3d::parry::query::RayCast;
use rapier3d::prelude::*;

use super::shape::{jar_parts, JAR_ORIGIN};
use crate::config::JarConfig;
use crate::pick::{self, Hit, PickTable};
use crate::rng::Rng;
use crate::star::{StarId, StarRecord};

/// Step size bounds; a stalled frame can't launch stars through the glass
pub const MIN_STEP: f32 = 1.0 / 240.0;
pub const MAX_STEP: f32 = 1.0 / 30.0;

/// Farthest a pick ray looks
const PICK_DISTANCE: f32 = 1000.0;

/// Where a star is this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPose {
    pub id: StarId,
    pub position: Vec3,
    pub rotation: Quat,
}

pub struct JarWorld {
    config: JarConfig,
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    stars: HashMap<StarId, RigidBodyHandle>,
    picks: PickTable<ColliderHandle>,
}

impl JarWorld {
    pub fn new(config: JarConfig) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let jar = bodies.insert(
            RigidBodyBuilder::fixed()
                .translation(vector![JAR_ORIGIN.x, JAR_ORIGIN.y, JAR_ORIGIN.z])
                .build(),
        );
        let parts: Vec<(Isometry<Real>, SharedShape)> = jar_parts()
            .iter()
            .map(|part| {
                let half = part.half_extents();
                (
                    Isometry::new(
                        vector![part.center.x, part.center.y, part.center.z],
                        vector![0.0, part.yaw, 0.0],
                    ),
                    SharedShape::cuboid(half.x, half.y, half.z),
                )
            })
            .collect();
        let part_count = parts.len();
        colliders.insert_with_parent(
            ColliderBuilder::compound(parts).friction(config.friction).build(),
            jar,
            &mut bodies,
        );
        debug!("Jar: built glass from {} parts", part_count);

        Self {
            gravity: vector![0.0, config.gravity, 0.0],
            config,
            params: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            stars: HashMap::new(),
            picks: PickTable::new(),
        }
    }

    pub fn body_count(&self) -> usize {
        self.stars.len()
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.stars.contains_key(&id)
    }

    /// Drop a new star in from above. Returns false if it's already in the jar.
    pub fn insert(&mut self, id: StarId, rng: &mut Rng) -> bool {
        if self.stars.contains_key(&id) {
            return false;
        }

        let c = &self.config;
        let translation = vector![
            rng.spread(c.spawn_half_width),
            rng.range(c.spawn_height.0, c.spawn_height.1),
            rng.spread(c.spawn_half_width)
        ];
        let rotation = UnitQuaternion::from_euler_angles(
            rng.range(0.0, PI),
            rng.range(0.0, PI),
            rng.range(0.0, PI),
        );
        let spin = vector![
            rng.spread(c.spawn_spin),
            rng.spread(c.spawn_spin),
            rng.spread(c.spawn_spin)
        ];

        let body = RigidBodyBuilder::dynamic()
            .position(Isometry3::from_parts(Translation3::from(translation), rotation))
            .angvel(spin)
            .linear_damping(c.linear_damping)
            .angular_damping(c.angular_damping)
            .can_sleep(false)
            .ccd_enabled(true)
            .build();
        let collider = ColliderBuilder::cuboid(
            c.star_size[0] * 0.5,
            c.star_size[1] * 0.5,
            c.star_size[2] * 0.5,
        )
        .mass(c.star_mass)
        .friction(c.friction)
        .restitution(c.restitution)
        .build();

        let handle = self.bodies.insert(body);
        let collider_handle = self.colliders.insert_with_parent(collider, handle, &mut self.bodies);
        self.stars.insert(id, handle);
        self.picks.register(collider_handle, id);
        debug!("Jar: spawned body for star {}", id);
        true
    }

    /// Take a star out of the jar. Returns false if it wasn't there.
    pub fn remove(&mut self, id: StarId) -> bool {
        let Some(handle) = self.stars.remove(&id) else {
            return false;
        };
        if let Some(body) = self.bodies.get(handle) {
            for &collider in body.colliders() {
                self.picks.unregister(collider);
            }
        }
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        true
    }

    /// Empty the jar
    pub fn clear(&mut self) {
        let ids: Vec<StarId> = self.stars.keys().copied().collect();
        for id in ids {
            self.remove(id);
        }
    }

    /// Make the bodies match `records`: one per id, none extra
    pub fn sync(&mut self, records: &[StarRecord], rng: &mut Rng) {
        let live: HashSet<StarId> = records.iter().map(|r| r.id).collect();
        let stale: Vec<StarId> = self
            .stars
            .keys()
            .filter(|id| !live.contains(id))
            .copied()
            .collect();
        for id in stale {
            self.remove(id);
        }
        for record in records {
            self.insert(record.id, rng);
        }
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self, dt: f32) {
        self.params.dt = dt.clamp(MIN_STEP, MAX_STEP);
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    pub fn star_pose(&self, id: StarId) -> Option<StarPose> {
        let body = self.bodies.get(*self.stars.get(&id)?)?;
        let t = body.translation();
        let q = body.rotation().coords;
        Some(StarPose {
            id,
            position: Vec3::new(t.x, t.y, t.z),
            rotation: Quat::from_xyzw(q.x, q.y, q.z, q.w),
        })
    }

    /// Every star's pose, for drawing
    pub fn star_poses(&self) -> Vec<StarPose> {
        self.stars.keys().filter_map(|&id| self.star_pose(id)).collect()
    }

    /// Every star a ray passes through. The jar's own collider has no owner
    /// and is never cast against.
    pub fn hits(&self, ray: &pick::Ray) -> Vec<Hit> {
        let ray = Ray::new(
            point![ray.origin.x, ray.origin.y, ray.origin.z],
            vector![ray.direction.x, ray.direction.y, ray.direction.z],
        );
        self.colliders
            .iter()
            .filter(|(handle, _)| self.picks.owner(*handle).is_some())
            .filter_map(|(handle, collider)| {
                collider
                    .shape()
                    .cast_ray(collider.position(), &ray, PICK_DISTANCE, true)
                    .map(|distance| self.picks.hit(handle, distance))
            })
            .collect()
    }

    /// The nearest star along a ray; the glass never blocks it
    pub fn pick(&self, ray: &pick::Ray) -> Option<StarId> {
        pick::nearest_star(&self.hits(ray))
    }
}
