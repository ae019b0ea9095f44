//! The `Arena`: object registry, proximity queries, and pose integration.
//!
//! # Spatial index
//!
//! Objects are indexed in an R-tree (via `rstar`) keyed by centre position.
//! `nearby_objects` is the broad-phase query the sound reception layer runs
//! every tick; the tree is rebuilt on insert/remove, which is cheap because
//! objects are static and mutations are rare compared to queries.
//!
//! # Integration
//!
//! `integrate` advances a pose by a body velocity over one tick: rotate by
//! `angular * dt`, then translate along the pre-rotation heading by
//! `linear * dt`, then clamp the position to the arena bounds.  Collision
//! response between bodies is outside this crate's scope.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use swarm_core::{ObjectId, Pose, Vec2, Velocity};
use swarm_core::vec2::wrap_angle;

use crate::{ArenaError, ArenaResult, PhysicalObject};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the spatial index: an object's centre plus its ID.
#[derive(Clone, Debug)]
struct ObjectEntry {
    point: [f32; 2],
    id: ObjectId,
}

impl RTreeObject for ObjectEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObjectEntry {
    /// Squared Euclidean distance — `locate_within_distance` takes a squared
    /// radius.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// A bounded rectangular world centred on the origin.
///
/// Owns the static object set for one simulation; robots live in their own
/// store and only meet the arena through queries and integration.
#[derive(Debug)]
pub struct Arena {
    width:  f32,
    height: f32,

    /// Object storage keyed by stable handle.  FxHash: keys are small
    /// integers, SipHash buys nothing here.
    objects: FxHashMap<ObjectId, PhysicalObject>,

    /// Broad-phase index over object centres.  Rebuilt on mutation.
    tree: RTree<ObjectEntry>,

    /// Next handle to assign.  Handles are never reused within a run.
    next_id: u32,
}

impl Arena {
    /// Create an empty arena of `width × height` metres centred on the
    /// origin.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidBounds`] unless both dimensions are
    /// positive and finite.
    pub fn new(width: f32, height: f32) -> ArenaResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ArenaError::InvalidBounds { width, height });
        }
        Ok(Self {
            width,
            height,
            objects: FxHashMap::default(),
            tree: RTree::new(),
            next_id: 0,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Clamp a position into the arena, keeping `margin` metres of clearance
    /// from every wall.
    #[inline]
    pub fn clamp(&self, pos: Vec2, margin: f32) -> Vec2 {
        let hw = (self.width * 0.5 - margin).max(0.0);
        let hh = (self.height * 0.5 - margin).max(0.0);
        Vec2::new(pos.x.clamp(-hw, hw), pos.y.clamp(-hh, hh))
    }

    /// `true` if `pos` lies inside the bounds.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x.abs() <= self.width * 0.5 && pos.y.abs() <= self.height * 0.5
    }

    // ── Object registry ───────────────────────────────────────────────────

    /// Register an object, returning its stable handle.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidObject`] if the position is not finite,
    /// the radius is negative, or the object lies outside the bounds.
    pub fn insert(&mut self, object: PhysicalObject) -> ArenaResult<ObjectId> {
        if !object.pos.is_finite() || object.radius < 0.0 || !object.radius.is_finite() {
            return Err(ArenaError::InvalidObject(format!(
                "non-finite position or bad radius {}",
                object.radius
            )));
        }
        if !self.contains(object.pos) {
            return Err(ArenaError::InvalidObject(format!(
                "position {} outside {}x{} bounds",
                object.pos, self.width, self.height
            )));
        }

        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        self.rebuild_tree();
        Ok(id)
    }

    /// Remove an object, returning it.
    pub fn remove(&mut self, id: ObjectId) -> ArenaResult<PhysicalObject> {
        let object = self.objects.remove(&id).ok_or(ArenaError::ObjectNotFound(id))?;
        self.rebuild_tree();
        Ok(object)
    }

    pub fn get(&self, id: ObjectId) -> Option<&PhysicalObject> {
        self.objects.get(&id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All objects whose centre lies within `radius` of `pos`.
    ///
    /// The result is valid only for the current tick (mutating the arena
    /// invalidates it).  Order is unspecified; callers that aggregate over
    /// the result must do so order-insensitively.
    pub fn nearby_objects(&self, pos: Vec2, radius: f32) -> Vec<(ObjectId, &PhysicalObject)> {
        self.tree
            .locate_within_distance([pos.x, pos.y], radius * radius)
            .filter_map(|entry| self.objects.get(&entry.id).map(|o| (entry.id, o)))
            .collect()
    }

    fn rebuild_tree(&mut self) {
        let entries: Vec<ObjectEntry> = self
            .objects
            .iter()
            .map(|(&id, o)| ObjectEntry { point: [o.pos.x, o.pos.y], id })
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    // ── Integration ───────────────────────────────────────────────────────

    /// Advance `pose` by `velocity` over `dt` seconds and clamp the result
    /// to the bounds.
    ///
    /// Translation uses the pre-rotation heading; at typical tick lengths
    /// the difference from midpoint integration is below actuator noise.
    pub fn integrate(&self, pose: Pose, velocity: Velocity, dt: f64) -> Pose {
        let dt = dt as f32;
        let pos = pose.pos + Vec2::from_angle(pose.heading) * (velocity.linear * dt);
        Pose {
            pos: self.clamp(pos, 0.0),
            heading: wrap_angle(pose.heading + velocity.angular * dt),
        }
    }
}
