use crate::core::constants::*;
use glam::Vec3;
use smallvec::SmallVec;

/// Distance thresholds and scale range for proximity feedback.
#[derive(Clone, Debug)]
pub struct ProximityParams {
    pub activation_radius: f32,
    pub full_visibility_radius: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for ProximityParams {
    fn default() -> Self {
        Self {
            activation_radius: ACTIVATION_RADIUS,
            full_visibility_radius: FULL_VISIBILITY_RADIUS,
            min_scale: MIN_MARKER_SCALE,
            max_scale: MAX_MARKER_SCALE,
        }
    }
}

/// Label opacity and marker scale for one observer distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub opacity: f32,
    pub scale: f32,
}

impl Visibility {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    #[inline]
    pub fn glow_intensity(&self) -> f32 {
        self.scale * GLOW_INTENSITY_PER_SCALE
    }

    #[inline]
    pub fn glow_distance(&self) -> f32 {
        self.scale * GLOW_DISTANCE_PER_SCALE
    }
}

impl ProximityParams {
    #[inline]
    pub fn far(&self) -> Visibility {
        Visibility {
            opacity: 0.0,
            scale: self.min_scale,
        }
    }

    #[inline]
    pub fn near(&self) -> Visibility {
        Visibility {
            opacity: 1.0,
            scale: self.max_scale,
        }
    }

    /// Whether `distance` counts as inside the activation radius (inclusive).
    #[inline]
    pub fn is_active(&self, distance: f32) -> bool {
        distance <= self.activation_radius
    }

    /// Linear fade between the activation and full-visibility radii.
    pub fn visibility_at(&self, distance: f32) -> Visibility {
        if distance > self.activation_radius {
            return self.far();
        }
        if distance < self.full_visibility_radius {
            return self.near();
        }
        let fade_range = self.activation_radius - self.full_visibility_radius;
        if fade_range <= f32::EPSILON {
            // Radii coincide: the fade collapses into a step at the boundary.
            return self.near();
        }
        let progress = ((self.activation_radius - distance) / fade_range).clamp(0.0, 1.0);
        Visibility {
            opacity: progress,
            scale: self.min_scale + progress * (self.max_scale - self.min_scale),
        }
    }

    #[inline]
    pub fn visibility(&self, marker: Vec3, observer: Vec3) -> Visibility {
        self.visibility_at(marker.distance(observer))
    }
}

/// Per-marker proximity state with an edge-triggered entry flag.
#[derive(Clone, Debug)]
pub struct ProximityTracker {
    was_inside: bool,
    visibility: Visibility,
}

impl ProximityTracker {
    pub fn new(params: &ProximityParams) -> Self {
        Self {
            was_inside: false,
            visibility: params.far(),
        }
    }

    /// Recompute visibility; returns true only on the frame the observer
    /// crosses into the activation radius.
    pub fn update(&mut self, params: &ProximityParams, marker: Vec3, observer: Vec3) -> bool {
        let distance = marker.distance(observer);
        let inside = params.is_active(distance);
        let entered = inside && !self.was_inside;
        self.was_inside = inside;
        self.visibility = params.visibility_at(distance);
        entered
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.was_inside
    }
}

/// Trackers for every waypoint, updated together once per frame.
#[derive(Clone, Debug)]
pub struct ProximityField {
    pub params: ProximityParams,
    trackers: Vec<ProximityTracker>,
}

impl ProximityField {
    pub fn new(count: usize, params: ProximityParams) -> Self {
        let trackers = (0..count).map(|_| ProximityTracker::new(&params)).collect();
        Self { params, trackers }
    }

    /// Update all trackers and return the indices entered this frame.
    pub fn update(
        &mut self,
        positions: impl IntoIterator<Item = Vec3>,
        observer: Vec3,
    ) -> SmallVec<[usize; 4]> {
        let mut entered = SmallVec::new();
        for (i, (tracker, pos)) in self.trackers.iter_mut().zip(positions).enumerate() {
            if tracker.update(&self.params, pos, observer) {
                entered.push(i);
            }
        }
        entered
    }

    /// Update all trackers and return the indices whose cue should sound.
    /// While `cues_held` (no user gesture yet) entries are consumed silently,
    /// so markers already in range do not chime once cues are released.
    /// Showing or hiding the marker group has no say here.
    pub fn update_cues(
        &mut self,
        positions: impl IntoIterator<Item = Vec3>,
        observer: Vec3,
        cues_held: bool,
    ) -> SmallVec<[usize; 4]> {
        let entered = self.update(positions, observer);
        if cues_held {
            SmallVec::new()
        } else {
            entered
        }
    }

    #[inline]
    pub fn visibility(&self, index: usize) -> Visibility {
        self.trackers
            .get(index)
            .map(|t| t.visibility())
            .unwrap_or_else(|| self.params.far())
    }

    pub fn visibilities(&self) -> impl Iterator<Item = Visibility> + '_ {
        self.trackers.iter().map(|t| t.visibility())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}
