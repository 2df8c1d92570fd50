use std::collections::{HashMap, HashSet};

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Position, PositionTable};
use crate::engine::state::Configuration;
use crate::engine::tree::NodeTable;

/// Distances below this are treated as 1 to keep forces finite.
const MIN_DISTANCE: f64 = 1e-6;

/// Base offset applied to a node that settled on an occupied point.
const NUDGE: f64 = 8.0;

/// Give up separating a node after this many nudges. Only reachable when
/// both bounds have collapsed to a single point.
const MAX_NUDGES: usize = 16;

#[derive(Clone, Debug, PartialEq)]
pub struct ForceParams {
	pub iterations: usize,
	/// Scales every force before it is added to a velocity.
	pub step: f64,
	pub damping: f64,
	/// Largest move per iteration as a fraction of the wider bound range.
	/// Cools linearly to zero over the run.
	pub temperature: f64,
	/// Nodes are seeded and kept at least this far from every canvas edge.
	pub margin: f64,
}

impl Default for ForceParams {
	fn default() -> Self {
		Self {
			iterations: 100,
			step: 0.01,
			damping: 0.9,
			temperature: 0.1,
			margin: 100.0,
		}
	}
}

/// Simulation state for one node; never leaves this module.
#[derive(Clone, Copy, Debug, Default)]
struct Body {
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
}

impl Body {
	/// Moves by the current velocity, capped at `temperature`, then clamps.
	/// A clamped axis loses its velocity so nodes do not keep pressing into
	/// the frame.
	fn advance(
		&mut self,
		temperature: f64,
		damping: f64,
		x_bounds: (f64, f64),
		y_bounds: (f64, f64),
	) {
		let speed = self.vx.hypot(self.vy);
		if speed > temperature {
			let scale = temperature / speed;
			self.vx *= scale;
			self.vy *= scale;
		}
		self.x += self.vx;
		self.y += self.vy;
		self.vx *= damping;
		self.vy *= damping;

		let x = self.x.clamp(x_bounds.0, x_bounds.1);
		let y = self.y.clamp(y_bounds.0, y_bounds.1);
		if x != self.x {
			self.vx = 0.0;
		}
		if y != self.y {
			self.vy = 0.0;
		}
		self.x = x;
		self.y = y;
	}

	fn point(&self) -> (u64, u64) {
		(self.x.to_bits(), self.y.to_bits())
	}
}

/// Inclusive range a coordinate is kept in. Collapses to the margin itself
/// when the canvas is narrower than both margins.
fn bounds(dimension: f64, margin: f64) -> (f64, f64) {
	(margin, (dimension - margin).max(margin))
}

fn scatter(rng: &mut SmallRng, (lo, hi): (f64, f64)) -> f64 {
	if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Shifts `value` by a random amount toward the inside of `(lo, hi)`.
fn nudge(rng: &mut SmallRng, value: f64, (lo, hi): (f64, f64)) -> f64 {
	if hi <= lo {
		return lo;
	}
	let offset = NUDGE * rng.random_range(0.5..1.5);
	let shifted = if value + offset > hi { value - offset } else { value + offset };
	shifted.clamp(lo, hi)
}

/// Moves nodes off points already taken by an earlier node, so no two
/// nodes share coordinates unless the bounds leave no room at all.
fn separate_coincident(
	rng: &mut SmallRng,
	bodies: &mut [Body],
	x_bounds: (f64, f64),
	y_bounds: (f64, f64),
) -> usize {
	let mut occupied = HashSet::with_capacity(bodies.len());
	let mut moved = 0;
	for body in bodies.iter_mut() {
		let mut nudges = 0;
		while !occupied.insert(body.point()) && nudges < MAX_NUDGES {
			body.x = nudge(rng, body.x, x_bounds);
			body.y = nudge(rng, body.y, y_bounds);
			nudges += 1;
		}
		if nudges > 0 {
			moved += 1;
		}
	}
	moved
}

/// Offset from `b` to `a` and its length, with the zero-distance guard applied.
fn separation(a: &Body, b: &Body) -> (f64, f64, f64) {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	let distance = (dx * dx + dy * dy).sqrt();
	let distance = if distance < MIN_DISTANCE { 1.0 } else { distance };
	(dx, dy, distance)
}

/// Spring-electrical simulation over the tree's parent/child edges.
///
/// Starts from a scatter drawn from `seed` and runs a fixed number of
/// iterations. Each iteration's move is capped by a cooling temperature.
/// Positions are clamped inside the margins, and nodes left on the same
/// point are nudged apart before returning.
pub fn force_directed(
	table: &NodeTable,
	width: f64,
	height: f64,
	params: &ForceParams,
	seed: u64,
) -> PositionTable {
	if table.is_empty() {
		return PositionTable::new();
	}

	let states: Vec<&Configuration> = table.keys().collect();
	let index: HashMap<&Configuration, usize> =
		states.iter().enumerate().map(|(i, s)| (*s, i)).collect();
	let edges: Vec<(usize, usize)> = table
		.edges()
		.filter_map(|(parent, child)| Some((*index.get(parent)?, *index.get(child)?)))
		.collect();

	let (x_bounds, y_bounds) = (bounds(width, params.margin), bounds(height, params.margin));
	let mut rng = SmallRng::seed_from_u64(seed);
	let mut bodies: Vec<Body> = states
		.iter()
		.map(|_| Body {
			x: scatter(&mut rng, x_bounds),
			y: scatter(&mut rng, y_bounds),
			..Body::default()
		})
		.collect();

	let k = (width * height / states.len() as f64).sqrt().max(1.0);
	let hottest = (x_bounds.1 - x_bounds.0).max(y_bounds.1 - y_bounds.0) * params.temperature;

	for iteration in 0..params.iterations {
		// Repulsion between every pair.
		for i in 0..bodies.len() {
			for j in (i + 1)..bodies.len() {
				let (dx, dy, distance) = separation(&bodies[i], &bodies[j]);
				let force = k * k / distance * params.step;
				let (fx, fy) = (dx / distance * force, dy / distance * force);
				bodies[i].vx += fx;
				bodies[i].vy += fy;
				bodies[j].vx -= fx;
				bodies[j].vy -= fy;
			}
		}

		// Attraction along edges.
		for &(parent, child) in &edges {
			let (dx, dy, distance) = separation(&bodies[child], &bodies[parent]);
			let force = distance * distance / k * params.step;
			let (fx, fy) = (dx / distance * force, dy / distance * force);
			bodies[parent].vx += fx;
			bodies[parent].vy += fy;
			bodies[child].vx -= fx;
			bodies[child].vy -= fy;
		}

		let temperature = hottest * (1.0 - iteration as f64 / params.iterations as f64);
		for body in &mut bodies {
			body.advance(temperature, params.damping, x_bounds, y_bounds);
		}
	}

	let nudged = separate_coincident(&mut rng, &mut bodies, x_bounds, y_bounds);

	debug!(
		"force layout settled: nodes={} edges={} iterations={} k={k:.1} nudged={nudged}",
		bodies.len(),
		edges.len(),
		params.iterations
	);

	states
		.into_iter()
		.zip(bodies)
		.map(|(state, body)| (state.clone(), Position::new(body.x, body.y)))
		.collect()
}
