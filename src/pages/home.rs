use std::time::Duration;

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use log::{debug, info, warn};

use crate::components::hanoi_canvas::{HanoiCanvas, Highlight};
use crate::config::{AnimationSpeed, DiskCount, HanoiConfig, MAX_DISKS};
use crate::engine::{Explorer, LayoutKind, Playback};

/// Lets the loading overlay paint before a build blocks the thread.
const BUILD_YIELD: Duration = Duration::from_millis(100);

/// Shows the loading overlay, then runs `work` on a later tick.
fn run_deferred(set_loading: WriteSignal<bool>, work: impl FnOnce() + 'static) {
	set_loading.set(true);
	set_timeout(
		move || {
			work();
			set_loading.set(false);
		},
		BUILD_YIELD,
	);
}

/// Selects the next state on the path and schedules the one after it.
/// Stops once the path is done or a new tree has been generated.
fn step_playback(
	mut playback: Playback,
	explorer: RwSignal<Explorer>,
	highlight: RwSignal<Highlight>,
	set_animating: WriteSignal<bool>,
) {
	if explorer.with_untracked(|e| playback.is_stale(e)) {
		debug!("playback dropped: tree was regenerated");
		return;
	}
	let Some(state) = playback.next() else {
		set_animating.set(false);
		return;
	};
	highlight.update(|h| h.selected = Some(state));
	if playback.is_finished() {
		set_animating.set(false);
		return;
	}
	debug!("{} playback steps left", playback.remaining());
	let delay = playback.delay();
	set_timeout(
		move || step_playback(playback, explorer, highlight, set_animating),
		delay,
	);
}

#[component]
fn Header() -> impl IntoView {
	view! {
		<header class="header">
			<h1>"Tower of Hanoi Solution Tree"</h1>
			<p class="subtitle">"Interactive visualization of the recursive solution space"</p>
		</header>
	}
}

#[component]
fn StatsPanel(explorer: RwSignal<Explorer>) -> impl IntoView {
	let stats = move || explorer.with(Explorer::stats);
	view! {
		<div class="stats">
			<div class="stat">
				<div class="stat-value">{move || stats().total_nodes}</div>
				<div class="stat-label">"Total Nodes"</div>
			</div>
			<div class="stat">
				<div class="stat-value">{move || stats().total_moves}</div>
				<div class="stat-label">"Total Moves"</div>
			</div>
			<div class="stat">
				<div class="stat-value">{move || stats().tree_depth}</div>
				<div class="stat-label">"Tree Depth"</div>
			</div>
			<div class="stat">
				<div class="stat-value">{move || stats().solution_path_length}</div>
				<div class="stat-label">"Solution Path Length"</div>
			</div>
		</div>
	}
}

/// Details of the hovered node, or the selected one when nothing is hovered.
#[component]
fn InfoPanel(explorer: RwSignal<Explorer>, highlight: RwSignal<Highlight>) -> impl IntoView {
	let details = move || {
		highlight.with(|h| {
			let active = h.active()?;
			explorer.with(|e| {
				let node = e.table().get(active)?;
				Some((
					active.to_string(),
					node.depth,
					node.children.len(),
					node.parent
						.as_ref()
						.map_or_else(|| "None".to_string(), ToString::to_string),
				))
			})
		})
	};

	move || {
		details().map(|(state, depth, children, parent)| {
			view! {
				<div class="info-panel">
					<h3>"Node Information"</h3>
					<p><strong>"State: "</strong>{state}</p>
					<p><strong>"Depth: "</strong>{depth}</p>
					<p><strong>"Children: "</strong>{children}</p>
					<p><strong>"Parent: "</strong>{parent}</p>
				</div>
			}
		})
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = HanoiConfig::default();
	let explorer = RwSignal::new(Explorer::new(&config));
	let highlight = RwSignal::new(Highlight::default());
	let (disk_input, set_disk_input) = signal(config.disk_count.get() as u32);
	let (speed, set_speed) = signal(config.speed);
	let (loading, set_loading) = signal(false);
	let (animating, set_animating) = signal(false);
	let (error, set_error) = signal(None::<String>);

	let on_generate = move |_: MouseEvent| match DiskCount::try_from(disk_input.get_untracked()) {
		Ok(disks) => {
			set_error.set(None);
			set_animating.set(false);
			highlight.update(Highlight::clear);
			run_deferred(set_loading, move || {
				explorer.update(|e| {
					e.set_disk_count(disks);
					e.set_seed(js_sys::Date::now() as u64);
					e.generate();
				});
			});
		}
		Err(err) => {
			warn!("rejected disk count: {err}");
			set_error.set(Some(err.to_string()));
		}
	};

	let on_expand = move |_: MouseEvent| {
		if loading.get_untracked() {
			return;
		}
		let target = explorer.with_untracked(|e| e.bound().deeper());
		run_deferred(set_loading, move || explorer.update(|e| e.expand_to(target)));
	};

	let on_animate = move |_: MouseEvent| {
		if animating.get_untracked() || loading.get_untracked() {
			return;
		}
		let playback = explorer.with_untracked(|e| e.playback(speed.get_untracked()));
		info!("animating solution path of {} states", playback.remaining());
		set_animating.set(true);
		step_playback(playback, explorer, highlight, set_animating);
	};

	let on_layout = move |ev: Event| {
		let kind = LayoutKind::from_name(&event_target_value(&ev));
		explorer.update(|e| e.set_layout(kind));
	};

	let on_speed = move |ev: Event| {
		let name = event_target_value(&ev);
		let parsed = name.parse::<AnimationSpeed>().unwrap_or_else(|err| {
			warn!("{err}");
			AnimationSpeed::default()
		});
		set_speed.set(parsed);
	};

	let can_expand = move || explorer.with(Explorer::can_expand);
	let next_depth = move || explorer.with(|e| e.bound().as_signed().unwrap_or(0) + 1);

	view! {
		<div class="app">
			<div class="container">
				<Header />
				<div class="controls">
					<label for="disk-count">"Number of Disks:"</label>
					<input
						type="number"
						id="disk-count"
						min="1"
						max=MAX_DISKS.to_string()
						prop:value=move || disk_input.get().to_string()
						on:input=move |ev: Event| {
							if let Ok(n) = event_target_value(&ev).parse() {
								set_disk_input.set(n);
							}
						}
					/>

					<label for="layout">"Layout:"</label>
					<select id="layout" on:change=on_layout>
						{LayoutKind::ALL
							.into_iter()
							.map(|kind| {
								view! {
									<option
										value=kind.name()
										selected=move || explorer.with(|e| e.layout_kind() == kind)
									>
										{kind.title()}
									</option>
								}
							})
							.collect_view()}
					</select>

					<label for="speed">"Animation Speed:"</label>
					<select id="speed" on:change=on_speed>
						{AnimationSpeed::ALL
							.into_iter()
							.map(|s| {
								view! {
									<option value=s.name() selected=move || speed.get() == s>
										{s.name()}
									</option>
								}
							})
							.collect_view()}
					</select>

					<button on:click=on_generate>"Generate Tree"</button>
					<button class="expand" on:click=on_expand disabled=move || !can_expand() || loading.get()>
						{move || format!("Expand One Level (Depth: {})", next_depth())}
					</button>
					<button on:click=on_animate disabled=move || animating.get() || loading.get()>
						{move || if animating.get() { "Animating..." } else { "Animate Solution" }}
					</button>
					{move || error.get().map(|msg| view! { <span class="error">{msg}</span> })}
				</div>
				<HanoiCanvas explorer=explorer highlight=highlight loading=loading />
				<StatsPanel explorer=explorer />
			</div>
			<InfoPanel explorer=explorer highlight=highlight />
		</div>
	}
}
