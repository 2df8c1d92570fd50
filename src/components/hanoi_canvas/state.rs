use crate::engine::Configuration;

/// Hovered and selected configurations shared by the canvas and the panels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
	pub hovered: Option<Configuration>,
	pub selected: Option<Configuration>,
}

impl Highlight {
	/// Returns whether anything changed.
	pub fn set_hover(&mut self, state: Option<Configuration>) -> bool {
		if self.hovered == state {
			return false;
		}
		self.hovered = state;
		true
	}

	/// Selects `state`, or clears the selection if it is already selected.
	pub fn toggle_selected(&mut self, state: Configuration) {
		if self.selected.as_ref() == Some(&state) {
			self.selected = None;
		} else {
			self.selected = Some(state);
		}
	}

	pub fn is_hovered(&self, state: &Configuration) -> bool {
		self.hovered.as_ref() == Some(state)
	}

	pub fn is_selected(&self, state: &Configuration) -> bool {
		self.selected.as_ref() == Some(state)
	}

	/// Hover wins over selection.
	pub fn active(&self) -> Option<&Configuration> {
		self.hovered.as_ref().or(self.selected.as_ref())
	}

	pub fn clear(&mut self) {
		self.hovered = None;
		self.selected = None;
	}
}
